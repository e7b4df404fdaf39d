//! Task-status envelope polled while the backend builds a package.

use crate::PayloadError;
use crate::lenient;
use serde::{Deserialize, Serialize};
use std::fmt;

/// State of a background task as reported by the task queue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    /// Queued, not picked up yet
    Pending,
    /// Picked up by a worker
    Started,
    /// Worker reported intermediate progress
    Progress,
    /// Scheduled for another attempt
    Retry,
    /// Finished; `data` holds the result
    Success,
    /// Finished with an error; `data` holds the reason
    Failure,
    /// Cancelled before finishing
    Revoked,
    /// The status could not be obtained
    #[default]
    Undefined,
}

impl TaskStatus {
    /// Parse a queue state name. Unknown names map to [`TaskStatus::Undefined`].
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_uppercase().as_str() {
            "PENDING" | "STARTING" => Self::Pending,
            "STARTED" => Self::Started,
            "PROGRESS" => Self::Progress,
            "RETRY" => Self::Retry,
            "SUCCESS" => Self::Success,
            "FAILURE" => Self::Failure,
            "REVOKED" => Self::Revoked,
            _ => Self::Undefined,
        }
    }

    /// Queue spelling of this state.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Started => "STARTED",
            Self::Progress => "PROGRESS",
            Self::Retry => "RETRY",
            Self::Success => "SUCCESS",
            Self::Failure => "FAILURE",
            Self::Revoked => "REVOKED",
            Self::Undefined => "UNDEFINED",
        }
    }

    /// Whether polling should stop.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::Success | Self::Failure | Self::Revoked | Self::Undefined
        )
    }
}

impl From<String> for TaskStatus {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of a task-status poll: `{ status, state, data }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskStatusResponse {
    /// Queue state of the task
    #[serde(deserialize_with = "lenient::or_default")]
    pub status: TaskStatus,
    /// Coarse phase label set by the endpoint
    #[serde(deserialize_with = "lenient::text")]
    pub state: String,
    /// Task result on success, failure reason otherwise
    pub data: serde_json::Value,
}

impl TaskStatusResponse {
    /// Decode a poll response.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::Malformed`] if `json` is not a JSON object.
    pub fn from_json(json: &str) -> Result<Self, PayloadError> {
        serde_json::from_str(json).map_err(|e| PayloadError::malformed("status", e))
    }
}
