//! FILENAME: core/engine/src/session.rs
//! PURPOSE: Owns the current calculator snapshot for one UI session and
//! publishes every new snapshot to its listeners.
//! CONTEXT: Actions are applied one at a time. Listeners only ever receive
//! whole snapshots behind an Arc; nothing they hold is mutated afterwards.

use std::sync::Arc;

use crate::action::CalculatorAction;
use crate::config::CalculatorConfig;
use crate::logging::{log_enter, log_exit, log_info};
use crate::reducer::reduce_with;
use crate::state::CalculatorState;

/// Callback receiving each published snapshot.
pub type Listener = Box<dyn FnMut(&Arc<CalculatorState>)>;

pub struct CalculatorSession {
    config: CalculatorConfig,
    state: Arc<CalculatorState>,
    /// Number of snapshots published after the initial one.
    revision: u64,
    listeners: Vec<Listener>,
}

impl CalculatorSession {
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    pub fn with_config(config: CalculatorConfig) -> Self {
        log_info!(
            "SESSION",
            "new session fraction_digits={} history_limit={:?}",
            config.max_fraction_digits,
            config.history_limit
        );
        CalculatorSession {
            config,
            state: Arc::new(CalculatorState::default()),
            revision: 0,
            listeners: Vec::new(),
        }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// The current snapshot.
    pub fn state(&self) -> Arc<CalculatorState> {
        Arc::clone(&self.state)
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Registers a listener and hands it the current snapshot right away.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&Arc<CalculatorState>) + 'static,
    {
        let mut listener: Listener = Box::new(listener);
        listener(&self.state);
        self.listeners.push(listener);
    }

    /// Applies one action and publishes the resulting snapshot.
    /// An action that leaves the state unchanged publishes nothing.
    pub fn dispatch(&mut self, action: CalculatorAction) -> Arc<CalculatorState> {
        log_enter!("SESSION", "dispatch", "{:?}", action);

        let next = reduce_with(&self.config, &self.state, &action);
        if next == *self.state {
            log_exit!("SESSION", "dispatch", "unchanged rev={}", self.revision);
            return self.state();
        }

        self.state = Arc::new(next);
        self.revision += 1;
        for listener in self.listeners.iter_mut() {
            listener(&self.state);
        }

        log_exit!(
            "SESSION",
            "dispatch",
            "rev={} display={:?}",
            self.revision,
            self.state.display()
        );
        self.state()
    }
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::new()
    }
}
