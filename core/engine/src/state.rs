//! FILENAME: core/engine/src/state.rs
//! PURPOSE: The calculator snapshot observed by the UI layer.
//! CONTEXT: A snapshot is never edited after it is produced. The reducer
//! builds a fresh one for every action.

use serde::{Deserialize, Serialize};

use crate::history::{split_entry, History};

/// Text representing an empty buffer.
pub const EMPTY_DISPLAY: &str = "0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorState {
    /// Pending expression or formatted result. Never empty.
    pub display_text: String,
    /// Completed calculations, newest first.
    pub history: History,
    /// True right after a successful or failed Calculate.
    pub is_result: bool,
    /// Overlay shown instead of display_text after a failed Calculate.
    pub error: Option<String>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        CalculatorState {
            display_text: EMPTY_DISPLAY.to_string(),
            history: History::new(),
            is_result: false,
            error: None,
        }
    }
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The text the UI should render: the error label while one is set.
    pub fn display(&self) -> &str {
        self.error.as_deref().unwrap_or(&self.display_text)
    }

    /// Buffer the next Digit/Operator key extends. A fresh expression starts
    /// after a result, after an error, and from the placeholder "0".
    pub fn editable_buffer(&self) -> &str {
        if self.display_text == EMPTY_DISPLAY || self.is_result || self.error.is_some() {
            ""
        } else {
            &self.display_text
        }
    }

    /// Expression half of the newest history record.
    pub fn last_expression(&self) -> Option<&str> {
        self.history
            .latest()
            .and_then(split_entry)
            .map(|(expression, _)| expression)
    }
}
