//! Hierarchy-aware CRUD shared by the subtask and comment collections.
//!
//! The backend stores these trees as flat collections with a
//! parent-reference relation and provides no cascading delete and no
//! server-side depth/order maintenance, so this layer:
//!
//! - computes `depth = parent.depth + 1` (0 at root) on create and move,
//! - computes `order = sibling_count + 1` on create when the caller did
//!   not pick a position,
//! - deletes descendants depth-first before the node itself,
//! - guards every recursive walk with a visited set and the
//!   [`MAX_TREE_DEPTH`] cap, since a malformed parent cycle is possible
//!   via direct API manipulation.
//!
//! Order computation is read-then-write and not transactional; under
//! concurrent creates two siblings can end up with the same order. The
//! backend resolves nothing here — last write wins.

use std::collections::HashSet;
use std::sync::Arc;

use futures::future::BoxFuture;
use serde_json::{json, Map, Value};

use xtrawrkx_client::{Collection, Query, SortDir};
use xtrawrkx_core::{CoreError, DbId, MAX_TREE_DEPTH};

use crate::error::ServiceResult;
use crate::transform::normalize;

/// Descriptor for one tree-shaped backend collection.
#[derive(Debug, Clone, Copy)]
pub struct TreeCollection {
    /// Endpoint path segment, e.g. `subtasks`.
    pub path: &'static str,
    /// Relation naming the parent item; null marks a root.
    pub parent_field: &'static str,
    /// Relation naming the owning entity scoping root queries.
    pub owner_field: &'static str,
    /// Sibling sort field for list queries.
    pub sort_field: &'static str,
}

/// Generic tree operations over a [`Collection`].
///
/// Works on normalized `serde_json::Value` documents; typed mapping is
/// the caller's concern.
pub struct TreeService<C> {
    client: Arc<C>,
    spec: TreeCollection,
    populate: &'static [&'static str],
}

impl<C: Collection> TreeService<C> {
    pub fn new(client: Arc<C>, spec: TreeCollection, populate: &'static [&'static str]) -> Self {
        Self {
            client,
            spec,
            populate,
        }
    }

    /// Root items for one owner: `parent IS NULL AND owner == owner_id`.
    pub async fn roots(&self, owner_id: DbId) -> ServiceResult<Vec<Value>> {
        let query = Query::new()
            .filter_relation(self.spec.owner_field, owner_id)
            .filter_null(self.spec.parent_field)
            .sort(self.spec.sort_field, SortDir::Asc)
            .populate(self.populate);
        let docs = self.client.list(self.spec.path, &query).await?;
        Ok(docs.into_iter().map(normalize).collect())
    }

    /// Direct children of one item, in sibling order.
    pub async fn children(&self, parent_id: DbId) -> ServiceResult<Vec<Value>> {
        let query = Query::new()
            .filter_relation(self.spec.parent_field, parent_id)
            .sort(self.spec.sort_field, SortDir::Asc)
            .populate(self.populate);
        let docs = self.client.list(self.spec.path, &query).await?;
        Ok(docs.into_iter().map(normalize).collect())
    }

    /// Every item belonging to one owner, for whole-tree assembly.
    pub async fn all_for_owner(&self, owner_id: DbId) -> ServiceResult<Vec<Value>> {
        let query = Query::new()
            .filter_relation(self.spec.owner_field, owner_id)
            .sort(self.spec.sort_field, SortDir::Asc)
            .populate(self.populate);
        let docs = self.client.list(self.spec.path, &query).await?;
        Ok(docs.into_iter().map(normalize).collect())
    }

    /// Create an item under `owner_id`, optionally below `parent_id`.
    ///
    /// Fills in the parent and owner relations, the computed depth, and
    /// (when the payload carries none) an `order` of `sibling_count + 1`.
    /// The sibling count is a fresh fetch, so concurrent creates may
    /// race; see the module docs.
    pub async fn create(
        &self,
        owner_id: DbId,
        parent_id: Option<DbId>,
        mut data: Value,
    ) -> ServiceResult<Value> {
        let depth = match parent_id {
            Some(parent) => self.fetch_depth(parent).await? + 1,
            None => 0,
        };
        if depth as usize >= MAX_TREE_DEPTH {
            return Err(CoreError::DepthExceeded(depth as usize).into());
        }

        let object = data
            .as_object_mut()
            .ok_or_else(|| CoreError::Validation("create payload must be an object".into()))?;

        if object.get("order").is_none() {
            let siblings = match parent_id {
                Some(parent) => Query::new().filter_relation(self.spec.parent_field, parent),
                None => Query::new()
                    .filter_relation(self.spec.owner_field, owner_id)
                    .filter_null(self.spec.parent_field),
            };
            let count = self.client.count(self.spec.path, &siblings).await?;
            object.insert("order".to_string(), json!(count + 1));
        }

        object.insert(self.spec.owner_field.to_string(), json!(owner_id));
        object.insert(
            self.spec.parent_field.to_string(),
            parent_id.map_or(Value::Null, |p| json!(p)),
        );
        object.insert("depth".to_string(), json!(depth));

        let created = self.client.create(self.spec.path, data).await?;
        tracing::debug!(
            path = self.spec.path,
            owner_id,
            parent_id,
            depth,
            "created tree item"
        );
        Ok(normalize(created))
    }

    /// Delete an item and all of its descendants, children first.
    ///
    /// Aborts on the first child failure: the parent and the remaining
    /// branch stay intact and the caller must retry. Returns the number
    /// of items deleted.
    pub async fn cascading_delete(&self, id: DbId) -> ServiceResult<u64> {
        cascading_delete(self.client.as_ref(), self.spec.path, self.spec.parent_field, id).await
    }

    /// Re-parent an item and recompute its depth (0 when moving to
    /// root), then refresh every descendant's depth to match.
    pub async fn move_item(
        &self,
        id: DbId,
        new_parent: Option<DbId>,
        new_order: Option<i64>,
    ) -> ServiceResult<Value> {
        if new_parent == Some(id) {
            return Err(CoreError::Conflict("an item cannot be its own parent".into()).into());
        }

        let depth = match new_parent {
            Some(parent) => self.fetch_depth(parent).await? + 1,
            None => 0,
        };
        if depth as usize >= MAX_TREE_DEPTH {
            return Err(CoreError::DepthExceeded(depth as usize).into());
        }

        let mut fields = Map::new();
        fields.insert(
            self.spec.parent_field.to_string(),
            new_parent.map_or(Value::Null, |p| json!(p)),
        );
        fields.insert("depth".to_string(), json!(depth));
        if let Some(order) = new_order {
            fields.insert("order".to_string(), json!(order));
        }

        let updated = self
            .client
            .update(self.spec.path, id, Value::Object(fields))
            .await?;

        let mut visited = HashSet::new();
        self.refresh_descendant_depths(id, depth, &mut visited)
            .await?;

        tracing::debug!(path = self.spec.path, id, new_parent, depth, "moved tree item");
        Ok(normalize(updated))
    }

    /// Depth of one item as stored; missing fields read as 0.
    async fn fetch_depth(&self, id: DbId) -> ServiceResult<i64> {
        let doc = normalize(self.client.get(self.spec.path, id, &Query::new()).await?);
        Ok(doc.get("depth").and_then(Value::as_i64).unwrap_or(0))
    }

    /// Rewrite descendant depths after a move so the
    /// `depth == parent.depth + 1` invariant holds below `id`.
    fn refresh_descendant_depths<'a>(
        &'a self,
        id: DbId,
        depth: i64,
        visited: &'a mut HashSet<DbId>,
    ) -> BoxFuture<'a, ServiceResult<()>> {
        Box::pin(async move {
            if !visited.insert(id) {
                return Ok(());
            }
            if depth as usize >= MAX_TREE_DEPTH {
                return Err(CoreError::DepthExceeded(depth as usize).into());
            }

            let query = Query::new().filter_relation(self.spec.parent_field, id);
            let children = self.client.list(self.spec.path, &query).await?;
            for child in children.into_iter().map(normalize) {
                let Some(child_id) = child.get("id").and_then(Value::as_i64) else {
                    continue;
                };
                let desired = depth + 1;
                if child.get("depth").and_then(Value::as_i64) != Some(desired) {
                    self.client
                        .update(self.spec.path, child_id, json!({ "depth": desired }))
                        .await?;
                }
                self.refresh_descendant_depths(child_id, desired, visited)
                    .await?;
            }
            Ok(())
        })
    }
}

/// Depth-first cascading delete over any parent-linked collection.
///
/// The backend has no cascade of its own; children go first so no item
/// is ever left pointing at a deleted parent.
pub async fn cascading_delete<C: Collection>(
    client: &C,
    path: &str,
    parent_field: &str,
    id: DbId,
) -> ServiceResult<u64> {
    let mut visited = HashSet::new();
    let deleted = delete_recursive(client, path, parent_field, id, &mut visited, 0).await?;
    tracing::info!(path, id, deleted, "cascading delete finished");
    Ok(deleted)
}

fn delete_recursive<'a, C: Collection>(
    client: &'a C,
    path: &'a str,
    parent_field: &'a str,
    id: DbId,
    visited: &'a mut HashSet<DbId>,
    depth: usize,
) -> BoxFuture<'a, ServiceResult<u64>> {
    Box::pin(async move {
        if !visited.insert(id) {
            return Ok(0);
        }
        if depth >= MAX_TREE_DEPTH {
            return Err(CoreError::DepthExceeded(depth).into());
        }

        let query = Query::new().filter_relation(parent_field, id);
        let children = client.list(path, &query).await?;

        let mut deleted = 0;
        for child in children.into_iter().map(normalize) {
            if let Some(child_id) = child.get("id").and_then(Value::as_i64) {
                deleted += delete_recursive(client, path, parent_field, child_id, visited, depth + 1)
                    .await?;
            }
        }

        client.remove(path, id).await?;
        Ok(deleted + 1)
    })
}
