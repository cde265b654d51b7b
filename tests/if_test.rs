mod common;
use common::*;

#[test]
fn test_if_then_else() {
    let mut r = runtime();
    r.enter("if 1 < 2 then print \"one\"");
    assert_eq!(exec(&mut r), "one\n");
    r.enter("IF 1 > 2 THEN PRINT \"one\" ELSE PRINT \"two\"");
    assert_eq!(exec(&mut r), "two\n");
    r.enter("IF 1 > 2 THEN PRINT \"one\"");
    assert_eq!(exec(&mut r), "");
}

#[test]
fn test_string_length_coercion() {
    let mut r = runtime();
    r.enter("LET A$ = \"abc\"");
    r.enter("IF 3 = A$ THEN PRINT \"yes\" ELSE PRINT \"no\"");
    assert_eq!(exec(&mut r), "yes\n");
    r.enter("LET A$ = \"ab\"");
    r.enter("IF 3 = A$ THEN PRINT \"yes\" ELSE PRINT \"no\"");
    assert_eq!(exec(&mut r), "no\n");
}

#[test]
fn test_strings_compare() {
    let mut r = runtime();
    r.enter("LET A$ = \"apple\" ; B$ = \"banana\"");
    r.enter("IF A$ < B$ THEN PRINT A$ ELSE PRINT B$");
    assert_eq!(exec(&mut r), "apple\n");
    r.enter("IF A$ != \"apple\" THEN PRINT \"x\" ELSE PRINT \"same\"");
    assert_eq!(exec(&mut r), "same\n");
}

#[test]
fn test_then_inside_string() {
    let mut r = runtime();
    r.enter("IF \"a THEN b\" = 8 THEN PRINT \"else ELSE\" ELSE PRINT \"no\"");
    assert_eq!(exec(&mut r), "else ELSE\n");
}

#[test]
fn test_dangling_else() {
    let mut r = runtime();
    r.enter("LET A = 1 ; B = 5");
    r.enter("IF A = 1 THEN IF B = 2 THEN PRINT \"inner\" ELSE PRINT \"inner else\"");
    assert_eq!(exec(&mut r), "inner else\n");
    r.enter("IF A = 2 THEN IF B = 2 THEN PRINT \"inner\" ELSE PRINT \"inner else\"");
    assert_eq!(exec(&mut r), "");
}

#[test]
fn test_branch_assigns() {
    let mut r = runtime();
    r.enter("IF 1 = 1 THEN LET X = 7 ELSE LET X = 9");
    r.enter("PRINT X");
    assert_eq!(exec(&mut r), "7\n");
}

#[test]
fn test_bad_condition() {
    let mut r = runtime();
    r.enter("IF A THEN PRINT A");
    assert_eq!(exec(&mut r), "?MISSING OPERAND\n");
    r.enter("IF A + 1 THEN PRINT A");
    assert_eq!(exec(&mut r), "?NOT A COMPARISON; +\n");
}
