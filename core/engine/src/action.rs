//! FILENAME: core/engine/src/action.rs
//! PURPOSE: The discrete edits the UI layer sends to the calculator.

use serde::{Deserialize, Serialize};

/// Operator keys that replace a pending operator instead of stacking after it.
pub const BINARY_OPERATORS: [&str; 6] = ["+", "-", "×", "÷", "^", "%"];

/// Trailing characters an incoming binary operator overwrites.
/// The decimal point is included, so `5.` followed by `+` becomes `5+`.
pub const REPLACEABLE_TAIL: [char; 7] = ['+', '-', '×', '÷', '^', '%', '.'];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum CalculatorAction {
    /// A digit key or the decimal point.
    Digit(char),
    /// An operator or structural key. May be several characters, e.g. `√(`.
    Operator(String),
    Clear,
    Delete,
    Calculate,
    ClearHistory,
}

impl CalculatorAction {
    pub fn operator(symbol: impl Into<String>) -> Self {
        CalculatorAction::Operator(symbol.into())
    }

    /// Maps a typed character to the key that produces it: digits and `.`
    /// are Digit keys, anything else is sent as an Operator.
    pub fn from_key(key: char) -> Self {
        if key.is_ascii_digit() || key == '.' {
            CalculatorAction::Digit(key)
        } else {
            CalculatorAction::Operator(key.to_string())
        }
    }
}

pub fn is_binary_operator(symbol: &str) -> bool {
    BINARY_OPERATORS.contains(&symbol)
}
