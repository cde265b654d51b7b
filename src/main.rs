fn main() {
    linebasic::term::main()
}
