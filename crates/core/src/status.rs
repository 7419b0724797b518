//! Task / subtask status domain.
//!
//! The backend stores statuses as SCREAMING_SNAKE codes; the UI displays
//! title-case labels. Both directions are closed mappings: an unmapped
//! value is rejected with [`CoreError::UnknownStatus`] rather than passed
//! through.
//!
//! The documented lifecycle is `Scheduled -> InProgress -> InReview ->
//! Completed`, with `Cancelled` reachable from any non-terminal state.
//! No transition validation is enforced on writes; any status may be set
//! from any other via direct update.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Status of a task or subtask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Scheduled,
    InProgress,
    InReview,
    Completed,
    Cancelled,
}

/// All statuses, in lifecycle order (terminal states last).
pub const ALL_STATUSES: [TaskStatus; 5] = [
    TaskStatus::Scheduled,
    TaskStatus::InProgress,
    TaskStatus::InReview,
    TaskStatus::Completed,
    TaskStatus::Cancelled,
];

impl TaskStatus {
    /// Backend enum code (what the REST API stores and returns).
    pub fn code(&self) -> &'static str {
        match self {
            TaskStatus::Scheduled => "SCHEDULED",
            TaskStatus::InProgress => "IN_PROGRESS",
            TaskStatus::InReview => "IN_REVIEW",
            TaskStatus::Completed => "COMPLETED",
            TaskStatus::Cancelled => "CANCELLED",
        }
    }

    /// UI-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Scheduled => "Scheduled",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::InReview => "In Review",
            TaskStatus::Completed => "Completed",
            TaskStatus::Cancelled => "Cancelled",
        }
    }

    /// Parse a backend enum code. Unmapped codes are rejected.
    pub fn from_code(code: &str) -> Result<Self, CoreError> {
        match code {
            "SCHEDULED" => Ok(TaskStatus::Scheduled),
            "IN_PROGRESS" => Ok(TaskStatus::InProgress),
            "IN_REVIEW" => Ok(TaskStatus::InReview),
            "COMPLETED" => Ok(TaskStatus::Completed),
            "CANCELLED" => Ok(TaskStatus::Cancelled),
            other => Err(CoreError::UnknownStatus(other.to_string())),
        }
    }

    /// Parse a UI label, case-insensitively. Unmapped labels are rejected.
    pub fn from_label(label: &str) -> Result<Self, CoreError> {
        match label.trim().to_lowercase().as_str() {
            "scheduled" => Ok(TaskStatus::Scheduled),
            "in progress" => Ok(TaskStatus::InProgress),
            "in review" => Ok(TaskStatus::InReview),
            "completed" => Ok(TaskStatus::Completed),
            "cancelled" => Ok(TaskStatus::Cancelled),
            other => Err(CoreError::UnknownStatus(other.to_string())),
        }
    }

    /// Completed and Cancelled are terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskStatus::Completed | TaskStatus::Cancelled)
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // Round-trip laws: code -> enum -> code, label -> enum -> label
    // -----------------------------------------------------------------------

    #[test]
    fn code_round_trip_holds_for_every_status() {
        for status in ALL_STATUSES {
            assert_eq!(TaskStatus::from_code(status.code()).unwrap(), status);
        }
    }

    #[test]
    fn label_round_trip_holds_for_every_status() {
        for status in ALL_STATUSES {
            assert_eq!(TaskStatus::from_label(status.label()).unwrap(), status);
        }
    }

    // -----------------------------------------------------------------------
    // Label parsing is case-insensitive
    // -----------------------------------------------------------------------

    #[test]
    fn label_parsing_ignores_case() {
        assert_eq!(
            TaskStatus::from_label("IN PROGRESS").unwrap(),
            TaskStatus::InProgress
        );
        assert_eq!(
            TaskStatus::from_label("in review").unwrap(),
            TaskStatus::InReview
        );
    }

    #[test]
    fn label_parsing_trims_whitespace() {
        assert_eq!(
            TaskStatus::from_label("  Completed ").unwrap(),
            TaskStatus::Completed
        );
    }

    // -----------------------------------------------------------------------
    // Unmapped values are rejected, not passed through
    // -----------------------------------------------------------------------

    #[test]
    fn unknown_code_is_rejected() {
        let err = TaskStatus::from_code("ARCHIVED").unwrap_err();
        assert!(err.to_string().contains("ARCHIVED"));
    }

    #[test]
    fn unknown_label_is_rejected() {
        assert!(TaskStatus::from_label("Done-ish").is_err());
    }

    // -----------------------------------------------------------------------
    // Serde uses the backend codes
    // -----------------------------------------------------------------------

    #[test]
    fn serializes_as_backend_code() {
        let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(json, "\"IN_PROGRESS\"");
    }

    #[test]
    fn deserializes_from_backend_code() {
        let status: TaskStatus = serde_json::from_str("\"CANCELLED\"").unwrap();
        assert_eq!(status, TaskStatus::Cancelled);
    }

    // -----------------------------------------------------------------------
    // Terminal states
    // -----------------------------------------------------------------------

    #[test]
    fn completed_and_cancelled_are_terminal() {
        assert!(TaskStatus::Completed.is_terminal());
        assert!(TaskStatus::Cancelled.is_terminal());
    }

    #[test]
    fn active_states_are_not_terminal() {
        assert!(!TaskStatus::Scheduled.is_terminal());
        assert!(!TaskStatus::InProgress.is_terminal());
        assert!(!TaskStatus::InReview.is_terminal());
    }
}
