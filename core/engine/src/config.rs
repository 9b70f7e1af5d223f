//! FILENAME: core/engine/src/config.rs
//! PURPOSE: Tunables for the calculator state machine.
//! CONTEXT: Defaults reproduce the stock behavior (10 fraction digits,
//! "Error" label, unbounded history). A host may load overrides from JSON;
//! missing keys fall back to the defaults.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::number_format::DEFAULT_FRACTION_DIGITS;

pub const DEFAULT_ERROR_LABEL: &str = "Error";

/// f64 carries at most 17 significant decimal digits.
const MAX_FRACTION_DIGITS: usize = 17;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalculatorConfig {
    /// Digits kept after the decimal point when formatting a result.
    pub max_fraction_digits: usize,
    /// Text shown in place of the display when evaluation fails.
    pub error_label: String,
    /// Oldest history entries beyond this count are dropped. None keeps all.
    pub history_limit: Option<usize>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        CalculatorConfig {
            max_fraction_digits: DEFAULT_FRACTION_DIGITS,
            error_label: DEFAULT_ERROR_LABEL.to_string(),
            history_limit: None,
        }
    }
}

impl CalculatorConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let config: CalculatorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> EngineResult<()> {
        if self.max_fraction_digits > MAX_FRACTION_DIGITS {
            return Err(EngineError::InvalidConfig(format!(
                "maxFractionDigits must be at most {}, got {}",
                MAX_FRACTION_DIGITS, self.max_fraction_digits
            )));
        }
        if self.error_label.is_empty() {
            return Err(EngineError::InvalidConfig(
                "errorLabel must not be empty".to_string(),
            ));
        }
        if self.history_limit == Some(0) {
            return Err(EngineError::InvalidConfig(
                "historyLimit must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
