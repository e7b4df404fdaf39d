//! Notification severity shared by the backend and the view.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual and semantic class of a notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// An operation finished and produced what was asked for.
    Success,
    /// An operation failed. Used when a caller gives no severity.
    #[default]
    Danger,
    /// Something needs attention but nothing failed.
    Warning,
}

impl Severity {
    /// Bare severity name as used in stylesheet class suffixes.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Danger => "danger",
            Self::Warning => "warning",
        }
    }

    /// Alert class carried by a notification of this severity.
    pub fn alert_class(self) -> String {
        format!("alert-{}", self.as_str())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
