//! FILENAME: core/engine/src/history.rs
//! PURPOSE: The list of completed calculations, newest first.
//! CONTEXT: Every snapshot carries its own History. Backed by a persistent
//! vector so prepending returns a new history that shares structure with the
//! old one; a snapshot already handed to the UI never changes underneath it.

use im::Vector;
use serde::{Deserialize, Serialize};

/// Separator between expression and result in a history record.
const ENTRY_SEPARATOR: &str = " = ";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    entries: Vector<String>,
}

impl History {
    pub fn new() -> Self {
        History {
            entries: Vector::new(),
        }
    }

    /// Returns a new history with `"<expression> = <result>"` in front.
    pub fn record(&self, expression: &str, result: &str) -> History {
        let mut entries = self.entries.clone();
        entries.push_front(format!("{}{}{}", expression, ENTRY_SEPARATOR, result));
        History { entries }
    }

    /// Returns a history holding at most `limit` newest entries.
    pub fn truncated(&self, limit: usize) -> History {
        if self.entries.len() <= limit {
            return self.clone();
        }
        History {
            entries: self.entries.take(limit),
        }
    }

    /// The most recent record.
    pub fn latest(&self) -> Option<&str> {
        self.entries.front().map(String::as_str)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for History {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        History {
            entries: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Splits a history record into its expression and result halves.
pub fn split_entry(entry: &str) -> Option<(&str, &str)> {
    entry.split_once(ENTRY_SEPARATOR)
}
