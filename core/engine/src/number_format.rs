//! FILENAME: core/engine/src/number_format.rs
//! PURPOSE: Turns an evaluated f64 into the string shown on the display and in history.
//! CONTEXT: Fixed-point with a maximum number of fraction digits, trailing zeros
//! and a trailing decimal point removed. Integral values show no decimal point.

/// Default number of digits kept after the decimal point.
pub const DEFAULT_FRACTION_DIGITS: usize = 10;

pub const INFINITY_TEXT: &str = "Infinity";
pub const NAN_TEXT: &str = "NaN";

/// Format a calculation result for display.
///
/// Rounding is half-to-even on the exact binary value, so 2^-11
/// (0.00048828125) shows as `0.0004882812` at ten digits.
pub fn format_result(value: f64, max_fraction_digits: usize) -> String {
    if value.is_nan() {
        return NAN_TEXT.to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            INFINITY_TEXT.to_string()
        } else {
            format!("-{}", INFINITY_TEXT)
        };
    }

    let formatted = format!("{:.prec$}", value, prec = max_fraction_digits);
    trim_fraction(&formatted)
}

/// Drops trailing zeros after the decimal point, then the point itself.
fn trim_fraction(formatted: &str) -> String {
    if !formatted.contains('.') {
        return formatted.to_string();
    }
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
