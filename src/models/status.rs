//! Service status labels
//!
//! Statuses are derived from the clock on every read and never stored.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How urgent a service is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ServiceStatus {
    /// The next-due date has passed
    Overdue,
    /// Due today or within the due-soon window
    Due,
    /// Further out than the due-soon window
    Upcoming,
}

impl ServiceStatus {
    /// The label used in exports and JSON output
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overdue => "OVERDUE",
            Self::Due => "DUE",
            Self::Upcoming => "UPCOMING",
        }
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
