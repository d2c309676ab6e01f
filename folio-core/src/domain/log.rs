//! Log domain types

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A line in the pipeline run log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogLine {
    pub timestamp: DateTime<Local>,
    pub message: String,
}

impl LogLine {
    /// Creates a log line stamped with the current local time
    pub fn now(message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            message: message.into(),
        }
    }

    /// Hour and minute of the timestamp (e.g., "09:41")
    pub fn clock(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

impl std::fmt::Display for LogLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} · {}", self.clock(), self.message)
    }
}
