//! Diagnostics - bounded log of swallowed failures
//!
//! Platform rejections never reach the user. They go to `tracing` and are
//! kept here so a host can inspect what went wrong. The log is a shared
//! handle: platform bindings record promise rejections that settle after
//! the handler which fired them has returned.

use crate::error::{self, Error};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Where a failing platform call was observed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Begin,
    TogglePlay,
    ToggleFullscreen,
    EscapeKey,
    /// Settled later, outside any handler
    PromiseRejection,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Begin => write!(f, "begin"),
            Operation::TogglePlay => write!(f, "toggle_play"),
            Operation::ToggleFullscreen => write!(f, "toggle_fullscreen"),
            Operation::EscapeKey => write!(f, "escape_key"),
            Operation::PromiseRejection => write!(f, "promise_rejection"),
        }
    }
}

/// One recorded failure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureRecord {
    pub code: String,
    pub message: String,
    pub operation: Operation,
}

#[derive(Debug)]
struct Records {
    entries: VecDeque<FailureRecord>,
    max_entries: usize,
}

/// Bounded failure log, oldest entries evicted first.
///
/// Clones share the same records.
#[derive(Debug, Clone)]
pub struct FailureLog {
    records: Rc<RefCell<Records>>,
}

impl FailureLog {
    pub fn new(max_entries: usize) -> Self {
        Self {
            records: Rc::new(RefCell::new(Records {
                entries: VecDeque::new(),
                max_entries,
            })),
        }
    }

    /// Report the error and keep a record of it
    pub fn record(&self, operation: Operation, err: &Error) {
        error::report(err);

        let mut records = self.records.borrow_mut();
        if records.max_entries == 0 {
            return;
        }
        if records.entries.len() >= records.max_entries {
            records.entries.pop_front();
        }
        records.entries.push_back(FailureRecord {
            code: err.error_code().to_string(),
            message: err.to_string(),
            operation,
        });
    }

    pub fn len(&self) -> usize {
        self.records.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().entries.is_empty()
    }

    /// Snapshot of all records, oldest first
    pub fn records(&self) -> Vec<FailureRecord> {
        self.records.borrow().entries.iter().cloned().collect()
    }

    pub fn last(&self) -> Option<FailureRecord> {
        self.records.borrow().entries.back().cloned()
    }

    /// Convert to JSON array string
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.records.borrow().entries).unwrap_or_else(|_| "[]".to_string())
    }
}
