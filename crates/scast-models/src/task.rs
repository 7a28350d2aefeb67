//! Task handles and status snapshots.
//!
//! A submission yields one opaque task identifier, which is then used to
//! poll the status endpoint. Each poll replaces the previous snapshot;
//! nothing here is persisted.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier correlating a creation request with its status polls.
///
/// The identifier is assigned by the server and used verbatim in status
/// request URLs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub String);

impl TaskId {
    /// Create from an existing string.
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TaskId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Task state as reported by the status endpoint.
///
/// Any state the server reports that is not one of the known markers is
/// treated as in-progress, so new intermediate states never break polling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskState {
    /// Task is queued, not yet picked up by a worker
    #[default]
    Pending,
    /// Task is actively being processed
    Started,
    /// Task completed successfully
    Success,
    /// Task failed with an error
    Failure,
    /// Any other in-progress marker
    #[serde(other)]
    Other,
}

impl TaskState {
    /// Get string representation of the state.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskState::Pending => "PENDING",
            TaskState::Started => "STARTED",
            TaskState::Success => "SUCCESS",
            TaskState::Failure => "FAILURE",
            TaskState::Other => "OTHER",
        }
    }

    /// Check if this is a terminal state (polling must stop).
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskState::Success | TaskState::Failure)
    }
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result payload of a successful task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoResult {
    /// YouTube ID of the published video
    pub video_id: String,
}

/// One snapshot of a task's status.
///
/// Transient: each poll replaces the previous snapshot. The `state` field
/// determines all branching; `result` is present only on success and
/// `error` only on failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskStatus {
    /// Current task state
    pub state: TaskState,
    /// Progress percentage (0-100), absent while queued
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
    /// Success payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<VideoResult>,
    /// Human-readable failure message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TaskStatus {
    /// Check if the task is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Progress percentage, 0 when the server did not report one.
    pub fn progress_or_zero(&self) -> u8 {
        self.progress.unwrap_or(0)
    }

    /// Failure message, empty when the server did not report one.
    pub fn error_message(&self) -> &str {
        self.error.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_id_roundtrip() {
        let id = TaskId::from_string("abc-123");
        assert_eq!(id.as_str(), "abc-123");
        assert_eq!(id.to_string(), "abc-123");

        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"abc-123\"");
    }

    #[test]
    fn test_task_state_parsing() {
        let state: TaskState = serde_json::from_str("\"SUCCESS\"").unwrap();
        assert_eq!(state, TaskState::Success);
        assert!(state.is_terminal());

        let state: TaskState = serde_json::from_str("\"FAILURE\"").unwrap();
        assert_eq!(state, TaskState::Failure);
        assert!(state.is_terminal());

        let state: TaskState = serde_json::from_str("\"PENDING\"").unwrap();
        assert_eq!(state, TaskState::Pending);
        assert!(!state.is_terminal());
    }

    #[test]
    fn test_unknown_state_is_in_progress() {
        let state: TaskState = serde_json::from_str("\"RETRY\"").unwrap();
        assert_eq!(state, TaskState::Other);
        assert!(!state.is_terminal());
    }

    #[test]
    fn test_status_snapshot_defaults() {
        let status: TaskStatus = serde_json::from_str("{\"state\": \"PENDING\"}").unwrap();
        assert_eq!(status.state, TaskState::Pending);
        assert_eq!(status.progress_or_zero(), 0);
        assert!(status.result.is_none());
        assert_eq!(status.error_message(), "");
    }

    #[test]
    fn test_status_snapshot_success() {
        let status: TaskStatus = serde_json::from_str(
            "{\"state\": \"SUCCESS\", \"result\": {\"video_id\": \"yt-42\"}}",
        )
        .unwrap();
        assert!(status.is_terminal());
        assert_eq!(status.result.unwrap().video_id, "yt-42");
    }

    #[test]
    fn test_status_snapshot_failure() {
        let status: TaskStatus =
            serde_json::from_str("{\"state\": \"FAILURE\", \"error\": \"disk full\"}").unwrap();
        assert!(status.is_terminal());
        assert_eq!(status.error_message(), "disk full");
    }
}
