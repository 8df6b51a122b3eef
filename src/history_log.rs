// Booking history: an append-only log read back most-recent-first.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Booked,
    Cancelled,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Booked => write!(f, "Booked"),
            Action::Cancelled => write!(f, "Cancelled"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub action: Action,
    pub guest_name: String,
    pub room_number: u32,
}

impl HistoryEntry {
    pub fn new(action: Action, guest_name: impl Into<String>, room_number: u32) -> Self {
        Self {
            action,
            guest_name: guest_name.into(),
            room_number,
        }
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} (Room: {})",
            self.action, self.guest_name, self.room_number
        )
    }
}

// Stack of every booking and cancellation made during the session.
// Entries are stored oldest-first so recording is an O(1) push; listing
// walks them in reverse. Nothing is ever removed.
#[derive(Debug, Default)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, action: Action, guest_name: impl Into<String>, room_number: u32) {
        self.entries
            .push(HistoryEntry::new(action, guest_name, room_number));
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    // Entries from most recent to oldest. Each call starts a fresh pass.
    pub fn list_most_recent_first(&self) -> impl Iterator<Item = &HistoryEntry> + '_ {
        self.entries.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
