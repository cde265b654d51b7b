mod common;
use common::*;

#[test]
fn test_let_print() {
    let mut r = runtime();
    r.enter("LET X = 5");
    r.enter("PRINT X");
    assert_eq!(exec(&mut r), "5\n");
}

#[test]
fn test_print_concatenates() {
    let mut r = runtime();
    r.enter("LET X = 5");
    r.enter("PRINT \"a\" X \"b\"");
    assert_eq!(exec(&mut r), "a5b\n");
    r.enter("PRINT");
    assert_eq!(exec(&mut r), "\n");
    r.enter("PRINT U U$ \"|\"");
    assert_eq!(exec(&mut r), "0|\n");
}

#[test]
fn test_let_compound() {
    let mut r = runtime();
    r.enter("LET X = 3");
    r.enter("LET X + 5");
    r.enter("PRINT X");
    assert_eq!(exec(&mut r), "8\n");
    r.enter("LET X * 3 - 4 / 5");
    r.enter("PRINT X");
    assert_eq!(exec(&mut r), "4\n");
    r.enter("LET X = 12 & 10 | 1 ^ 3");
    r.enter("PRINT X");
    assert_eq!(exec(&mut r), "10\n");
}

#[test]
fn test_let_division_by_zero() {
    let mut r = runtime();
    r.enter("LET X = 3");
    r.enter("LET X / 0");
    assert_eq!(exec(&mut r), "?DIVISION BY ZERO\n");
    r.enter("PRINT X");
    assert_eq!(exec(&mut r), "3\n");
}

#[test]
fn test_let_groups() {
    let mut r = runtime();
    r.enter("LET A = 1 ; B = A + 1 ; S$ = \"x\" + \"y  z\"");
    r.enter("PRINT A B S$");
    assert_eq!(exec(&mut r), "12xy  z\n");
}

#[test]
fn test_let_target_on_right() {
    let mut r = runtime();
    r.enter("LET X = 5");
    r.enter("LET X = 1 + X");
    r.enter("PRINT X");
    assert_eq!(exec(&mut r), "2\n");
    r.enter("LET X * X * X ; Y = X");
    r.enter("PRINT X \" \" Y");
    assert_eq!(exec(&mut r), "16 16\n");
    r.enter("LET S$ = \"ab\" + S$");
    r.enter("PRINT S$");
    assert_eq!(exec(&mut r), "abab\n");
}

#[test]
fn test_let_target_on_right_fails_cleanly() {
    let mut r = runtime();
    r.enter("LET X = 4");
    r.enter("LET X = 0 / X");
    assert_eq!(exec(&mut r), "?DIVISION BY ZERO\n");
    r.enter("PRINT X");
    assert_eq!(exec(&mut r), "4\n");
}

#[test]
fn test_backslashes_in_strings() {
    let mut r = runtime();
    r.enter("PRINT \"\\\\\"");
    assert_eq!(exec(&mut r), "\\\n");
    r.enter("PRINT \"a\\\\\" \"b\"");
    assert_eq!(exec(&mut r), "a\\b\n");
    r.enter("10 PRINT \"say \\\"hi\\\" \\\\\"");
    r.enter("LISTDEBUG");
    assert_eq!(exec(&mut r), "10: PRINT \"say \\\"hi\\\" \\\\\"\n");
}

#[test]
fn test_string_rules() {
    let mut r = runtime();
    r.enter("LET S$ = \"ab\"");
    r.enter("LET S$ - \"b\"");
    assert_eq!(exec(&mut r), "?ILLEGAL OPERATION; -\n");
    r.enter("LET S$ = 1");
    assert_eq!(exec(&mut r), "?TYPE MISMATCH\n");
    r.enter("LET X = S$");
    assert_eq!(exec(&mut r), "?TYPE MISMATCH\n");
    r.enter("PRINT S$");
    assert_eq!(exec(&mut r), "ab\n");
}

#[test]
fn test_overflow() {
    let mut r = runtime();
    r.enter("LET X = 9223372036854775807 + 1");
    assert_eq!(exec(&mut r), "?OVERFLOW\n");
}

#[test]
fn test_lex_errors_reported() {
    let mut r = runtime();
    r.enter("PRINT \"open");
    assert_eq!(exec(&mut r), "?UNTERMINATED STRING; \"open\n");
    r.enter("LET X >= 1");
    assert_eq!(exec(&mut r), "?UNSUPPORTED OPERATOR; >= IN LET\n");
}
