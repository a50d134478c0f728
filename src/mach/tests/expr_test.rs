use super::*;
use crate::lang::ErrorCode;

fn eval(s: &str) -> Result<i32, Error> {
    runtime(s).conditional()
}

#[test]
fn test_precedence() {
    assert_eq!(eval("2 + 3 * 4").unwrap(), 14);
    assert_eq!(eval("(2 + 3) * 4").unwrap(), 20);
    assert_eq!(eval("10 - 4 - 3").unwrap(), 3);
    assert_eq!(eval("100 / 10 / 5").unwrap(), 2);
    assert_eq!(eval("7 + 9 % 4 * 2").unwrap(), 9);
}

#[test]
fn test_unary_minus_binds_to_factor() {
    assert_eq!(eval("-3 * 2").unwrap(), -6);
    assert_eq!(eval("4 - -2").unwrap(), 6);
    assert_eq!(eval("-(1 + 2)").unwrap(), -3);
}

#[test]
fn test_truncating_division() {
    assert_eq!(eval("7 / 2").unwrap(), 3);
    assert_eq!(eval("-7 / 2").unwrap(), -3);
    assert_eq!(eval("-7 % 2").unwrap(), -1);
}

#[test]
fn test_relational_yields_one_or_zero() {
    assert_eq!(eval("3 < 5").unwrap(), 1);
    assert_eq!(eval("5 <= 5").unwrap(), 1);
    assert_eq!(eval("5 <> 5").unwrap(), 0);
    assert_eq!(eval("6 > 2 * 3").unwrap(), 0);
    assert_eq!(eval("6 >= 2 * 3").unwrap(), 1);
    assert_eq!(eval("1 + 1 = 2").unwrap(), 1);
}

#[test]
fn test_no_relational_gives_plain_value() {
    assert_eq!(eval("41 + 1").unwrap(), 42);
}

#[test]
fn test_single_comparison_only() {
    let mut r = runtime("1 < 2 < 3");
    assert_eq!(r.conditional().unwrap(), 1);
    assert_eq!(r.cursor.kind(), crate::lang::Kind::Less);
}

#[test]
fn test_variables() {
    let mut r = runtime("x * 2 + y");
    r.vars.store(&"x".into(), 7);
    r.vars.store(&"y".into(), 1);
    assert_eq!(r.conditional().unwrap(), 15);
}

#[test]
fn test_unknown_symbol() {
    let e = eval("1 + nope").unwrap_err();
    assert_eq!(e.code(), ErrorCode::UnknownSymbol);
    assert_eq!(e.to_string(), "UNKNOWN SYMBOL IN LINE 1 AT 2; nope");
}

#[test]
fn test_division_by_zero() {
    assert_eq!(eval("1 / 0").unwrap_err().code(), ErrorCode::DivisionByZero);
    assert_eq!(eval("1 % (2 - 2)").unwrap_err().code(), ErrorCode::DivisionByZero);
}

#[test]
fn test_literal_overflow() {
    assert_eq!(eval("2147483647").unwrap(), i32::MAX);
    assert_eq!(eval("2147483648").unwrap_err().code(), ErrorCode::Overflow);
}

#[test]
fn test_arithmetic_wraps() {
    assert_eq!(eval("2147483647 + 1").unwrap(), i32::MIN);
}

#[test]
fn test_unbalanced_paren() {
    assert_eq!(eval("(1 + 2").unwrap_err().code(), ErrorCode::SyntaxError);
    assert_eq!(eval("* 2").unwrap_err().code(), ErrorCode::SyntaxError);
}
