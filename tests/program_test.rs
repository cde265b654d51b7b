mod common;
use common::*;
use linebasic::mach::{Event, Runtime};

#[test]
fn test_list_is_verbatim() {
    let mut r = runtime();
    r.enter("20 print   \"b  c\"  X");
    r.enter("10 LET X = 1");
    r.enter("LIST");
    assert_eq!(exec(&mut r), "10: LET X = 1\n20: print   \"b  c\"  X\n");
    r.enter("LISTDEBUG");
    assert_eq!(exec(&mut r), "10: LET X = 1\n20: PRINT \"b  c\" X\n");
}

#[test]
fn test_delete_line() {
    let mut r = runtime();
    r.enter("10 PRINT 1");
    r.enter("20 PRINT 2");
    r.enter("10");
    r.enter("list");
    assert_eq!(exec(&mut r), "20: PRINT 2\n");
}

#[test]
fn test_goto_loop() {
    let mut r = runtime();
    r.enter("10 LET X = 0");
    r.enter("20 LET X + 1");
    r.enter("30 IF X < 3 THEN GOTO 20 ELSE PRINT \"done \" X");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "done 3\n");
}

#[test]
fn test_vars() {
    let mut r = runtime();
    r.enter("LET B = 2 ; A = 1 ; N$ = \"x\"");
    r.enter("VARS");
    assert_eq!(
        exec(&mut r),
        "Strings: {\"N$\": \"x\"} Integers: {\"A\": 1, \"B\": 2}\n"
    );
}

#[test]
fn test_rem_and_blank() {
    let mut r = runtime();
    assert_eq!(r.enter("REM anything at all"), Event::Ready);
    assert_eq!(r.enter(""), Event::Ready);
    assert_eq!(r.enter("   "), Event::Ready);
    assert_eq!(exec(&mut r), "");
}

#[test]
fn test_run_keeps_variables() {
    let mut r = runtime();
    r.enter("10 LET N + 1");
    r.enter("RUN");
    r.enter("RUN");
    r.enter("PRINT N");
    assert_eq!(exec(&mut r), "2\n");
}

#[test]
fn test_exit_command() {
    let mut r: Runtime<Script> = runtime();
    assert_eq!(r.enter("EXIT"), Event::Exit);
}

#[test]
fn test_infinite_loop_is_broken() {
    let mut r = Runtime::new(Script {
        polls: Some(100_000),
        ..Script::default()
    });
    r.enter("0 LET X = 0");
    r.enter("1 LET X + 1");
    r.enter("2 GOTO 1");
    r.enter("RUN");
    assert_eq!(exec(&mut r), "?BREAK IN 2\n");
    assert_eq!(r.vars().fetch_integer("X"), 50_000);
}
