//! FILENAME: core/parser/src/error.rs

use thiserror::Error;

/// Malformed expression. This is the only failure the evaluator reports;
/// numeric anomalies (division by zero, sqrt of a negative) are plain f64 results.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum SyntaxError {
    #[error("Unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("Unexpected end of expression")]
    UnexpectedEnd,

    #[error("Unexpected '{ch}' after expression at position {pos}")]
    TrailingInput { ch: char, pos: usize },

    #[error("Invalid number literal: {0}")]
    InvalidNumber(String),

    #[error("Expression nested deeper than {0} levels")]
    TooDeeplyNested(usize),
}

pub type SyntaxResult<T> = Result<T, SyntaxError>;
