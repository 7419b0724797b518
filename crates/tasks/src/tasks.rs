//! Task CRUD and bulk operations.

use std::sync::Arc;

use futures::future::join_all;

use xtrawrkx_client::{Collection, Query, SortDir};
use xtrawrkx_core::{DbId, TaskStatus};

use crate::error::{ServiceError, ServiceResult};
use crate::models::{NewTask, Task, TaskPatch};
use crate::transform::{decode, decode_list};

const PATH: &str = "tasks";
const POPULATE: &[&str] = &["assignee", "collaborators", "projects", "createdBy", "subtasks"];

/// Per-id result of a bulk operation.
///
/// Bulk updates are independent requests with no transactional
/// rollback: a failure in the middle leaves the other writes applied.
#[derive(Debug)]
pub struct BulkOutcome {
    pub id: DbId,
    pub result: Result<Task, ServiceError>,
}

/// Task collection operations.
pub struct TaskService<C> {
    client: Arc<C>,
}

impl<C: Collection> TaskService<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// All tasks with their relations populated, newest first.
    pub async fn list(&self) -> ServiceResult<Vec<Task>> {
        let query = Query::new()
            .populate(POPULATE)
            .sort("createdAt", SortDir::Desc);
        decode_list(self.client.list(PATH, &query).await?)
    }

    /// Tasks linked to one project.
    pub async fn list_for_project(&self, project_id: DbId) -> ServiceResult<Vec<Task>> {
        let query = Query::new()
            .filter_relation("projects", project_id)
            .populate(POPULATE)
            .sort("createdAt", SortDir::Desc);
        decode_list(self.client.list(PATH, &query).await?)
    }

    pub async fn get(&self, id: DbId) -> ServiceResult<Task> {
        let query = Query::new().populate(POPULATE);
        decode(self.client.get(PATH, id, &query).await?)
    }

    pub async fn create(&self, new: NewTask) -> ServiceResult<Task> {
        let payload = serde_json::to_value(&new)?;
        decode(self.client.create(PATH, payload).await?)
    }

    /// Partial field update.
    pub async fn update(&self, id: DbId, patch: TaskPatch) -> ServiceResult<Task> {
        let payload = serde_json::to_value(&patch)?;
        decode(self.client.update(PATH, id, payload).await?)
    }

    pub async fn delete(&self, id: DbId) -> ServiceResult<()> {
        Ok(self.client.remove(PATH, id).await?)
    }

    /// Set one task's status. No transition validation is enforced; any
    /// status may be set from any other.
    pub async fn set_status(&self, id: DbId, status: TaskStatus) -> ServiceResult<Task> {
        self.update(
            id,
            TaskPatch {
                status: Some(status),
                ..Default::default()
            },
        )
        .await
    }

    /// Set the status of many tasks with one independent request each.
    ///
    /// Outcomes are reported per id; failures do not undo the updates
    /// that succeeded.
    pub async fn bulk_set_status(
        &self,
        ids: &[DbId],
        status: TaskStatus,
    ) -> Vec<BulkOutcome> {
        let updates = ids.iter().map(|&id| async move {
            BulkOutcome {
                id,
                result: self.set_status(id, status).await,
            }
        });
        let outcomes = join_all(updates).await;

        let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
        tracing::info!(
            total = outcomes.len(),
            failed,
            status = %status,
            "bulk status update finished"
        );
        outcomes
    }
}
