//! FILENAME: core/parser/src/lib.rs
//! PURPOSE: Library root for the calculator expression evaluator.
//! CONTEXT: Turns the text in the calculator display into an f64 in a single
//! pass. There is no separate lexer and no retained tree.
//!
//! PIPELINE: Display Text --> normalize --> Cursor --> Evaluator --> f64
//!
//! SUPPORTED FEATURES:
//! - Arithmetic: +, -, *, /, % (remainder), ^ (power)
//! - Display glyphs: × and ÷ as aliases for * and /
//! - Square root: sqrt(x), sqrt x, √x, √(x)
//! - Parentheses for grouping
//! - Unary plus and minus, repeatable: --3

pub mod cursor;
pub mod error;
pub mod evaluator;

#[cfg(test)]
mod tests;

pub use cursor::{normalize, Cursor};
pub use error::{SyntaxError, SyntaxResult};
pub use evaluator::{evaluate, Evaluator, MAX_DEPTH};
