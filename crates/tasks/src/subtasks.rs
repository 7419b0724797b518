//! Typed subtask operations over the generic tree service.

use std::sync::Arc;

use xtrawrkx_client::Collection;
use xtrawrkx_core::{build_tree, DbId, TreeNode};

use crate::error::ServiceResult;
use crate::models::{NewSubtask, Subtask, SubtaskPatch};
use crate::transform::{decode, decode_list};
use crate::tree::{TreeCollection, TreeService};

/// The `/api/subtasks` collection: owned by a task, parented by
/// `parentSubtask`, ordered by the `order` field.
pub const SUBTASKS: TreeCollection = TreeCollection {
    path: "subtasks",
    parent_field: "parentSubtask",
    owner_field: "task",
    sort_field: "order",
};

const POPULATE: &[&str] = &["task", "parentSubtask"];

/// Hierarchy-aware subtask CRUD.
pub struct SubtaskService<C> {
    tree: TreeService<C>,
    client: Arc<C>,
}

impl<C: Collection> SubtaskService<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            tree: TreeService::new(client.clone(), SUBTASKS, POPULATE),
            client,
        }
    }

    /// Root subtasks of a task (depth 0), in sibling order.
    pub async fn roots(&self, task_id: DbId) -> ServiceResult<Vec<Subtask>> {
        decode_list(self.tree.roots(task_id).await?)
    }

    /// Direct children of a subtask, in sibling order.
    pub async fn children(&self, parent_id: DbId) -> ServiceResult<Vec<Subtask>> {
        decode_list(self.tree.children(parent_id).await?)
    }

    /// The full subtask hierarchy of a task, assembled client-side from
    /// the flat collection.
    pub async fn tree_for_task(&self, task_id: DbId) -> ServiceResult<Vec<TreeNode<Subtask>>> {
        let subtasks: Vec<Subtask> = decode_list(self.tree.all_for_owner(task_id).await?)?;
        Ok(build_tree(subtasks))
    }

    /// Create a subtask under `task_id`, optionally below `parent_id`.
    /// Depth and (absent an explicit choice) order are computed here;
    /// the backend stores what it is given.
    pub async fn create(
        &self,
        task_id: DbId,
        parent_id: Option<DbId>,
        new: NewSubtask,
    ) -> ServiceResult<Subtask> {
        let payload = serde_json::to_value(&new)?;
        decode(self.tree.create(task_id, parent_id, payload).await?)
    }

    /// Partial field update.
    pub async fn update(&self, id: DbId, patch: SubtaskPatch) -> ServiceResult<Subtask> {
        let payload = serde_json::to_value(&patch)?;
        decode(self.client.update(SUBTASKS.path, id, payload).await?)
    }

    /// Delete a subtask and all of its descendants. Returns how many
    /// items were removed.
    pub async fn delete(&self, id: DbId) -> ServiceResult<u64> {
        self.tree.cascading_delete(id).await
    }

    /// Re-parent a subtask (root when `new_parent` is `None`),
    /// recomputing its depth and its descendants' depths.
    pub async fn move_to(
        &self,
        id: DbId,
        new_parent: Option<DbId>,
        new_order: Option<i64>,
    ) -> ServiceResult<Subtask> {
        decode(self.tree.move_item(id, new_parent, new_order).await?)
    }
}
