//! Threaded comments on tasks and subtasks.
//!
//! Comments live in the `/api/task-comments` collection with a
//! polymorphic (`commentableType`, `commentableId`) owner reference that
//! has no referential integrity at the data layer. The backend filter
//! alone has been observed to return cross-entity leakage under certain
//! populate configurations, so every fetch is re-filtered client-side
//! against the expected owner before anything is returned.

use std::sync::Arc;

use validator::Validate;

use xtrawrkx_client::{ApiError, Collection, Query, SortDir};
use xtrawrkx_core::{build_tree, DbId, TreeNode};

use crate::error::ServiceResult;
use crate::models::{Comment, CommentableType, NewComment};
use crate::transform::{decode, decode_list};
use crate::tree;

const PATH: &str = "task-comments";
const PARENT_FIELD: &str = "parentComment";
const POPULATE: &[&str] = &["user", "parentComment", "mentions"];

/// Comment CRUD with threading and defensive owner filtering.
pub struct CommentService<C> {
    client: Arc<C>,
}

impl<C: Collection> CommentService<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// All comments on one entity, oldest first, re-filtered against the
    /// expected owner (dropping any cross-entity leakage).
    pub async fn list_for(
        &self,
        commentable_type: CommentableType,
        commentable_id: DbId,
    ) -> ServiceResult<Vec<Comment>> {
        let query = Query::new()
            .filter("commentableType", commentable_type.code())
            .filter("commentableId", commentable_id.to_string())
            .sort("createdAt", SortDir::Asc)
            .populate(POPULATE);
        let docs = self.client.list(PATH, &query).await?;

        let fetched = docs.len();
        let comments: Vec<Comment> = decode_list(docs)?
            .into_iter()
            .filter(|c: &Comment| c.matches(commentable_type, commentable_id))
            .collect();
        if comments.len() < fetched {
            tracing::warn!(
                commentable_id,
                dropped = fetched - comments.len(),
                "dropped comments not belonging to the requested entity"
            );
        }
        Ok(comments)
    }

    /// Top-level comments only.
    pub async fn roots_for(
        &self,
        commentable_type: CommentableType,
        commentable_id: DbId,
    ) -> ServiceResult<Vec<Comment>> {
        Ok(self
            .list_for(commentable_type, commentable_id)
            .await?
            .into_iter()
            .filter(|c| c.parent_comment.is_none())
            .collect())
    }

    /// The reply threads of one entity, assembled client-side.
    pub async fn threads_for(
        &self,
        commentable_type: CommentableType,
        commentable_id: DbId,
    ) -> ServiceResult<Vec<TreeNode<Comment>>> {
        let comments = self.list_for(commentable_type, commentable_id).await?;
        Ok(build_tree(comments))
    }

    /// Create a comment or reply.
    ///
    /// Validated before any request is sent: missing content or owner
    /// fails with [`ApiError::Validation`] without touching the network.
    pub async fn create(&self, new: NewComment) -> ServiceResult<Comment> {
        new.validate()
            .map_err(|errors| ApiError::Validation(errors.to_string()))?;
        let payload = serde_json::to_value(&new)?;
        decode(self.client.create(PATH, payload).await?)
    }

    /// Edit a comment's content.
    pub async fn update_content(&self, id: DbId, content: &str) -> ServiceResult<Comment> {
        if content.trim().is_empty() {
            return Err(ApiError::Validation("content is required".into()).into());
        }
        let payload = serde_json::json!({ "content": content });
        decode(self.client.update(PATH, id, payload).await?)
    }

    /// Delete a comment and, recursively, all of its replies (replies
    /// first). Returns how many comments were removed.
    pub async fn delete(&self, id: DbId) -> ServiceResult<u64> {
        tree::cascading_delete(self.client.as_ref(), PATH, PARENT_FIELD, id).await
    }
}
