//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the calculator engine.
//! CONTEXT: The input buffer state machine that sits between the UI keys and
//! the expression evaluator in the `parser` crate. Re-exports public types.

pub mod action;
pub mod config;
pub mod error;
pub mod history;
pub mod logging;
pub mod number_format;
pub mod reducer;
pub mod session;
pub mod state;


// Re-export commonly used types at the crate root
pub use action::{is_binary_operator, CalculatorAction, BINARY_OPERATORS};
pub use config::CalculatorConfig;
pub use error::{EngineError, EngineResult};
pub use history::{split_entry, History};
pub use number_format::format_result;
pub use reducer::{reduce, reduce_with};
pub use session::{CalculatorSession, Listener};
pub use state::CalculatorState;
