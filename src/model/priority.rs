use std::fmt;

use serde::{Deserialize, Serialize};

/// How loudly an alert asks for attention.
///
/// Ordered least-to-most urgent so escalation checks read as
/// `priority >= AlertPriority::High`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AlertPriority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl AlertPriority {
    /// Whether alerts at this priority bounce and ring the bell when they start.
    pub fn escalates(self) -> bool {
        self >= AlertPriority::High
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AlertPriority::Low => "low",
            AlertPriority::Medium => "medium",
            AlertPriority::High => "high",
            AlertPriority::Critical => "critical",
        }
    }
}

impl fmt::Display for AlertPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
