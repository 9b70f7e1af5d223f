//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for calculator engine integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use engine::{CalculatorAction, CalculatorConfig, CalculatorSession, CalculatorState};

/// Test harness wrapping a session plus a record of every published snapshot.
pub struct TestHarness {
    pub session: CalculatorSession,
    pub published: Rc<RefCell<Vec<Arc<CalculatorState>>>>,
}

impl TestHarness {
    /// Create a new harness with default configuration.
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    pub fn with_config(config: CalculatorConfig) -> Self {
        let mut session = CalculatorSession::with_config(config);
        let published = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&published);
        session.subscribe(move |snapshot: &Arc<CalculatorState>| {
            sink.borrow_mut().push(Arc::clone(snapshot));
        });

        TestHarness { session, published }
    }

    /// Press the keys for every character of `keys`, as a user would type them.
    pub fn type_keys(&mut self, keys: &str) -> Arc<CalculatorState> {
        for key in keys.chars() {
            self.session.dispatch(CalculatorAction::from_key(key));
        }
        self.session.state()
    }

    pub fn press(&mut self, action: CalculatorAction) -> Arc<CalculatorState> {
        self.session.dispatch(action)
    }

    /// Type `keys` then press "=".
    pub fn compute(&mut self, keys: &str) -> Arc<CalculatorState> {
        self.type_keys(keys);
        self.press(CalculatorAction::Calculate)
    }

    pub fn display(&self) -> String {
        self.session.state().display().to_string()
    }

    pub fn history(&self) -> Vec<String> {
        self.session
            .state()
            .history
            .iter()
            .map(str::to_string)
            .collect()
    }

    pub fn published_count(&self) -> usize {
        self.published.borrow().len()
    }
}
