use serde::{Deserialize, Serialize};

use xtrawrkx_core::{DbId, Priority, TaskStatus, Timestamp, TreeItem};

use super::EntityRef;

/// A subtask document.
///
/// Invariants maintained by the tree service:
/// `depth == parent.depth + 1` (0 at root), and `order` is the 1-based
/// sibling sequence under (`task`, `parentSubtask`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subtask {
    pub id: DbId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_status")]
    pub status: TaskStatus,
    #[serde(default = "default_priority")]
    pub priority: Priority,
    #[serde(default)]
    pub due_date: Option<Timestamp>,
    /// Completion percentage, 0–100.
    #[serde(default)]
    pub progress: Option<u8>,
    #[serde(default)]
    pub depth: i64,
    #[serde(default)]
    pub order: i64,
    /// Owning task. Required by the schema but optional here because
    /// unpopulated fetches omit relations.
    #[serde(default)]
    pub task: Option<EntityRef>,
    /// `None` marks a root subtask.
    #[serde(default)]
    pub parent_subtask: Option<EntityRef>,
}

fn default_status() -> TaskStatus {
    TaskStatus::Scheduled
}

fn default_priority() -> Priority {
    Priority::Medium
}

impl Subtask {
    pub fn is_root(&self) -> bool {
        self.parent_subtask.is_none()
    }
}

impl TreeItem for Subtask {
    fn id(&self) -> DbId {
        self.id
    }
    fn parent_id(&self) -> Option<DbId> {
        self.parent_subtask.map(|r| r.id())
    }
}

/// Fields for creating a subtask. Ownership, depth, and order are
/// filled in by the tree service.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSubtask {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Timestamp>,
    /// Explicit sibling position; computed as `sibling_count + 1` when
    /// absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

/// Partial update: only present fields are written.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubtaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
}
