//! FILENAME: core/engine/src/reducer.rs
//! PURPOSE: Pure transition function (state, action) -> state for the calculator.
//! CONTEXT: Every edit the UI sends comes through here. The incoming snapshot is
//! only read; each branch builds the next snapshot from it. Calculate is the only
//! action that reaches the evaluator, and its failure is folded into the error
//! overlay rather than returned.

use parser::evaluate;

use crate::action::{is_binary_operator, CalculatorAction, REPLACEABLE_TAIL};
use crate::config::CalculatorConfig;
use crate::logging::{log_debug, log_warn};
use crate::number_format::format_result;
use crate::state::{CalculatorState, EMPTY_DISPLAY};

/// Applies `action` using the default configuration.
pub fn reduce(state: &CalculatorState, action: &CalculatorAction) -> CalculatorState {
    reduce_with(&CalculatorConfig::default(), state, action)
}

pub fn reduce_with(
    config: &CalculatorConfig,
    state: &CalculatorState,
    action: &CalculatorAction,
) -> CalculatorState {
    match action {
        CalculatorAction::Digit(digit) => append(state, &digit.to_string()),
        CalculatorAction::Operator(symbol) => append(state, symbol),
        CalculatorAction::Clear => clear(state),
        CalculatorAction::Delete => delete(state),
        CalculatorAction::Calculate => calculate(config, state),
        CalculatorAction::ClearHistory => clear_history(state),
    }
}

/// Shared by Digit and Operator keys.
fn append(state: &CalculatorState, key: &str) -> CalculatorState {
    let mut buffer = state.editable_buffer().to_string();

    let replaces_tail = is_binary_operator(key)
        && buffer
            .chars()
            .last()
            .is_some_and(|last| REPLACEABLE_TAIL.contains(&last));
    if replaces_tail {
        buffer.pop();
    }
    buffer.push_str(key);

    CalculatorState {
        display_text: buffer,
        history: state.history.clone(),
        is_result: false,
        error: None,
    }
}

fn clear(state: &CalculatorState) -> CalculatorState {
    CalculatorState {
        display_text: EMPTY_DISPLAY.to_string(),
        history: state.history.clone(),
        is_result: false,
        error: None,
    }
}

fn delete(state: &CalculatorState) -> CalculatorState {
    if state.display_text.chars().count() <= 1 || state.is_result || state.error.is_some() {
        return clear(state);
    }

    let mut display_text = state.display_text.clone();
    display_text.pop();

    CalculatorState {
        display_text,
        ..state.clone()
    }
}

fn calculate(config: &CalculatorConfig, state: &CalculatorState) -> CalculatorState {
    let expression = &state.display_text;
    if expression.is_empty() {
        return state.clone();
    }

    match evaluate(expression) {
        Ok(value) => {
            let formatted = format_result(value, config.max_fraction_digits);
            log_debug!("CALC", "{} = {}", expression, formatted);

            let mut history = state.history.record(expression, &formatted);
            if let Some(limit) = config.history_limit {
                history = history.truncated(limit);
            }

            CalculatorState {
                display_text: formatted,
                history,
                is_result: true,
                error: None,
            }
        }
        Err(e) => {
            log_warn!("CALC", "could not evaluate '{}': {}", expression, e);
            CalculatorState {
                display_text: state.display_text.clone(),
                history: state.history.clone(),
                is_result: true,
                error: Some(config.error_label.clone()),
            }
        }
    }
}

fn clear_history(state: &CalculatorState) -> CalculatorState {
    CalculatorState {
        history: Default::default(),
        ..state.clone()
    }
}
