use serde::{Deserialize, Serialize};

use xtrawrkx_core::{DbId, Priority, TaskStatus, Timestamp};

use super::project::Project;
use super::subtask::Subtask;
use super::user::User;

/// A task document with its populated relations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: DbId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_status")]
    pub status: TaskStatus,
    #[serde(default = "default_priority")]
    pub priority: Priority,
    #[serde(default)]
    pub scheduled_date: Option<Timestamp>,
    /// Completion percentage, 0–100.
    #[serde(default)]
    pub progress: Option<u8>,
    #[serde(default)]
    pub assignee: Option<User>,
    #[serde(default)]
    pub collaborators: Vec<User>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub created_by: Option<User>,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
}

fn default_status() -> TaskStatus {
    TaskStatus::Scheduled
}

fn default_priority() -> Priority {
    Priority::Medium
}

impl Task {
    /// Derived convenience accessor: the first linked project.
    ///
    /// `projects` is many-to-many; older callers expect a single
    /// `project` field, defined as `projects[0]`.
    pub fn project(&self) -> Option<&Project> {
        self.projects.first()
    }
}

/// Fields for creating a task. Relations are set by id.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<DbId>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub collaborators: Vec<DbId>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub projects: Vec<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<DbId>,
}

/// Partial update: only present fields are written.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<DbId>,
}
