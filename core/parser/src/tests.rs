//! FILENAME: core/parser/src/tests.rs
//! PURPOSE: Consolidated unit tests for the parser crate.

use crate::cursor::{normalize, Cursor};
use crate::error::SyntaxError;
use crate::evaluator::{evaluate, Evaluator, MAX_DEPTH};

fn eval(input: &str) -> f64 {
    evaluate(input).unwrap_or_else(|e| panic!("'{}' failed: {}", input, e))
}

// ========================================
// NORMALIZATION & CURSOR TESTS
// ========================================

#[test]
fn normalize_replaces_glyphs_and_strips_spaces() {
    assert_eq!(normalize("6 × 7 ÷ 2"), "6*7/2");
}

#[test]
fn normalize_keeps_tabs() {
    assert_eq!(normalize("1\t+ 2"), "1\t+2");
}

#[test]
fn cursor_eats_only_matching_char() {
    let mut cursor = Cursor::new("(1");
    assert!(!cursor.eat(')'));
    assert_eq!(cursor.position(), 0);
    assert!(cursor.eat('('));
    assert_eq!(cursor.current(), Some('1'));
}

#[test]
fn cursor_keyword_requires_full_match() {
    let mut cursor = Cursor::new("sqr(4)");
    assert!(!cursor.eat_keyword("sqrt"));
    assert_eq!(cursor.position(), 0);

    let mut cursor = Cursor::new("sqrt(4)");
    assert!(cursor.eat_keyword("sqrt"));
    assert_eq!(cursor.current(), Some('('));
}

#[test]
fn cursor_takes_digits_and_dots() {
    let mut cursor = Cursor::new("12.5+3");
    assert_eq!(cursor.take_number(), "12.5");
    assert_eq!(cursor.current(), Some('+'));
    cursor.advance();
    assert_eq!(cursor.take_number(), "3");
    assert!(cursor.is_at_end());
}

// ========================================
// ARITHMETIC
// ========================================

#[test]
fn evaluates_number_literals() {
    assert_eq!(eval("42"), 42.0);
    assert_eq!(eval("3.14159"), 3.14159);
    assert_eq!(eval(".5"), 0.5);
    assert_eq!(eval("5."), 5.0);
}

#[test]
fn respects_precedence() {
    assert_eq!(eval("2+3*4"), 14.0);
    assert_eq!(eval("(2+3)*4"), 20.0);
    assert_eq!(eval("10-4/2"), 8.0);
}

#[test]
fn same_precedence_is_left_associative() {
    assert_eq!(eval("10-3-2"), 5.0);
    assert_eq!(eval("100/10/2"), 5.0);
    assert_eq!(eval("2*3/4"), 1.5);
}

#[test]
fn accepts_display_glyphs() {
    assert_eq!(eval("6×7"), 42.0);
    assert_eq!(eval("9÷3"), 3.0);
    assert_eq!(eval(" 1 + 2 "), 3.0);
}

#[test]
fn remainder_follows_dividend_sign() {
    assert_eq!(eval("10%3"), 1.0);
    assert_eq!(eval("-7%3"), -1.0);
    assert_eq!(eval("7.5%2"), 1.5);
}

#[test]
fn unary_signs_nest() {
    assert_eq!(eval("-3"), -3.0);
    assert_eq!(eval("--3"), 3.0);
    assert_eq!(eval("- -3"), 3.0);
    assert_eq!(eval("+-+3"), -3.0);
    assert_eq!(eval("2*-3"), -6.0);
}

// ========================================
// POWER
// ========================================

#[test]
fn power_chains_left_to_right() {
    assert_eq!(eval("2^3^2"), 64.0);
    assert_eq!(eval("2^3"), 8.0);
}

#[test]
fn power_binds_tighter_than_multiplication() {
    assert_eq!(eval("3*2^2"), 12.0);
    assert_eq!(eval("-2^2"), -4.0);
}

#[test]
fn power_accepts_signed_and_fractional_exponents() {
    assert_eq!(eval("2^-1"), 0.5);
    assert_eq!(eval("4^0.5"), 2.0);
    assert_eq!(eval("(1+1)^(1+2)"), 8.0);
}

// ========================================
// SQUARE ROOT
// ========================================

#[test]
fn sqrt_forms_agree() {
    assert_eq!(eval("sqrt(16)"), 4.0);
    assert_eq!(eval("√16"), 4.0);
    assert_eq!(eval("√(16)"), 4.0);
    assert_eq!(eval("sqrt16"), 4.0);
}

#[test]
fn sqrt_argument_absorbs_power() {
    assert_eq!(eval("√4^2"), 4.0);
    assert_eq!(eval("sqrt(4)^2"), 4.0);
}

#[test]
fn unclosed_parenthesis_is_tolerated() {
    assert_eq!(eval("√(16"), 4.0);
    assert_eq!(eval("(2+3"), 5.0);
    assert_eq!(eval("2*(1+(2"), 6.0);
}

#[test]
fn sqrt_of_negative_is_nan() {
    assert!(eval("√-4").is_nan());
}

// ========================================
// NUMERIC EDGE CASES (not errors)
// ========================================

#[test]
fn division_by_zero_is_infinite() {
    let value = eval("5/0");
    assert!(value.is_infinite() && value.is_sign_positive());
    assert!(eval("-5/0").is_sign_negative());
    assert!(eval("0/0").is_nan());
    assert!(eval("5%0").is_nan());
}

// ========================================
// SYNTAX ERRORS
// ========================================

#[test]
fn missing_operand_fails() {
    assert_eq!(evaluate("3+"), Err(SyntaxError::UnexpectedEnd));
    assert_eq!(evaluate("-"), Err(SyntaxError::UnexpectedEnd));
    assert_eq!(evaluate("sqrt"), Err(SyntaxError::UnexpectedEnd));
    assert_eq!(evaluate("√("), Err(SyntaxError::UnexpectedEnd));
}

#[test]
fn empty_input_fails() {
    assert_eq!(evaluate(""), Err(SyntaxError::UnexpectedEnd));
    assert_eq!(evaluate("   "), Err(SyntaxError::UnexpectedEnd));
}

#[test]
fn unknown_character_fails() {
    assert_eq!(
        evaluate("2@3"),
        Err(SyntaxError::TrailingInput { ch: '@', pos: 1 })
    );
    assert_eq!(
        evaluate("@3"),
        Err(SyntaxError::UnexpectedChar { ch: '@', pos: 0 })
    );
    assert!(evaluate("1\t+2").is_err());
    assert!(evaluate("sq(4)").is_err());
}

#[test]
fn trailing_input_fails() {
    assert_eq!(
        evaluate("(2+3))"),
        Err(SyntaxError::TrailingInput { ch: ')', pos: 5 })
    );
    assert!(evaluate("2(3)").is_err());
}

#[test]
fn malformed_numbers_fail() {
    assert_eq!(
        evaluate("1.2.3"),
        Err(SyntaxError::InvalidNumber("1.2.3".to_string()))
    );
    assert_eq!(evaluate("."), Err(SyntaxError::InvalidNumber(".".to_string())));
    assert!(evaluate("1e5").is_err());
}

#[test]
fn cursor_does_not_skip_spaces() {
    let mut cursor = Cursor::new(" 1");
    assert!(!cursor.eat('1'));
    assert_eq!(cursor.current(), Some(' '));
}

// ========================================
// NESTING LIMIT
// ========================================

#[test]
fn moderate_nesting_evaluates() {
    assert_eq!(eval(&format!("{}1", "-".repeat(100))), 1.0);
    let nested = format!("{}7{}", "(".repeat(60), ")".repeat(60));
    assert_eq!(eval(&nested), 7.0);
}

#[test]
fn deep_unary_chain_fails_instead_of_overflowing() {
    let input = format!("{}1", "-".repeat(50_000));
    assert_eq!(evaluate(&input), Err(SyntaxError::TooDeeplyNested(MAX_DEPTH)));
}

#[test]
fn deep_parentheses_fail_instead_of_overflowing() {
    let input = format!("{}1", "(".repeat(50_000));
    assert_eq!(evaluate(&input), Err(SyntaxError::TooDeeplyNested(MAX_DEPTH)));

    let input = format!("2^{}1", "-".repeat(50_000));
    assert_eq!(evaluate(&input), Err(SyntaxError::TooDeeplyNested(MAX_DEPTH)));

    let input = format!("{}4", "√".repeat(50_000));
    assert_eq!(evaluate(&input), Err(SyntaxError::TooDeeplyNested(MAX_DEPTH)));
}

#[test]
fn evaluator_can_be_held_explicitly() {
    let evaluator = Evaluator::new("1+1");
    assert_eq!(evaluator.parse(), Ok(2.0));
}
