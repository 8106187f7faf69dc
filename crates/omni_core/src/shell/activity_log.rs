//! Bounded, newest-first activity feed ("Kai log").
//!
//! # Invariants
//! - Holds at most [`MAX_LOG_ENTRIES`] entries; the oldest is dropped first.
//! - Entries are ordered newest first, matching the rendered feed.

use crate::model::entry::now_epoch_ms;
use std::collections::VecDeque;

/// Feed capacity; the rendering layer shows the 50 most recent lines.
pub const MAX_LOG_ENTRIES: usize = 50;

const READY_MESSAGE: &str =
    "Log cleared. OmniAI is ready. Use the command box, Omni Chat tab, or module buttons to begin.";

/// One line of the activity feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Unix epoch milliseconds at append time.
    pub at: i64,
    pub message: String,
}

/// Bounded newest-first message feed.
#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    entries: VecDeque<LogEntry>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends a message, dropping the oldest entry beyond capacity.
    pub fn append(&mut self, message: impl Into<String>) {
        self.entries.push_front(LogEntry {
            at: now_epoch_ms(),
            message: message.into(),
        });
        while self.entries.len() > MAX_LOG_ENTRIES {
            self.entries.pop_back();
        }
    }

    /// Resets the feed to the single ready line shown after clearing.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.append(READY_MESSAGE);
    }

    /// Entries, newest first.
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
