use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use xtrawrkx_core::{DbId, Timestamp, TreeItem};

use super::user::User;
use super::EntityRef;

/// What a comment is attached to.
///
/// Together with `commentableId` this forms a polymorphic reference with
/// no referential integrity at the data layer; fetched comments are
/// re-validated against the expected owner before display (see
/// [`Comment::matches`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommentableType {
    Task,
    Subtask,
}

impl CommentableType {
    pub fn code(&self) -> &'static str {
        match self {
            CommentableType::Task => "TASK",
            CommentableType::Subtask => "SUBTASK",
        }
    }
}

/// A threaded comment on a task or subtask.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: DbId,
    pub content: String,
    pub commentable_type: CommentableType,
    /// Polymorphic foreign key; stored as a string but observed as a
    /// number under some populate configurations.
    #[serde(deserialize_with = "string_or_number")]
    pub commentable_id: String,
    #[serde(default)]
    pub user: Option<User>,
    /// `None` marks a top-level comment.
    #[serde(default)]
    pub parent_comment: Option<EntityRef>,
    #[serde(default)]
    pub mentions: Vec<User>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

impl Comment {
    /// Defensive owner check with loose (string/number tolerant) id
    /// equality, compensating for cross-entity leakage the backend
    /// filter alone has been observed to allow.
    pub fn matches(&self, expected_type: CommentableType, expected_id: DbId) -> bool {
        self.commentable_type == expected_type && loose_id_eq(&self.commentable_id, expected_id)
    }
}

impl TreeItem for Comment {
    fn id(&self) -> DbId {
        self.id
    }
    fn parent_id(&self) -> Option<DbId> {
        self.parent_comment.map(|r| r.id())
    }
}

/// `"42"`, `" 42 "`, and `42` all match id 42.
fn loose_id_eq(raw: &str, expected: DbId) -> bool {
    let raw = raw.trim();
    raw.parse::<DbId>().map(|id| id == expected).unwrap_or(false)
        || raw == expected.to_string()
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Text(String),
        Number(i64),
    }
    Ok(match Repr::deserialize(deserializer)? {
        Repr::Text(s) => s,
        Repr::Number(n) => n.to_string(),
    })
}

/// Fields for creating a comment. Validated before any request is sent.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,
    pub commentable_type: CommentableType,
    #[validate(length(min = 1, message = "commentableId is required"))]
    pub commentable_id: String,
    /// Author.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<DbId>,
    /// Present for replies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_comment: Option<DbId>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mentions: Vec<DbId>,
}

impl NewComment {
    /// A top-level comment on the given entity.
    pub fn on(commentable_type: CommentableType, commentable_id: DbId, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            commentable_type,
            commentable_id: commentable_id.to_string(),
            user: None,
            parent_comment: None,
            mentions: Vec::new(),
        }
    }

    /// Turn this into a reply to an existing comment.
    pub fn in_reply_to(mut self, parent_id: DbId) -> Self {
        self.parent_comment = Some(parent_id);
        self
    }
}
