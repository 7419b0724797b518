//! Typed entities and DTOs for the backend collections.

pub mod comment;
pub mod project;
pub mod subtask;
pub mod task;
pub mod user;

pub use comment::{Comment, CommentableType, NewComment};
pub use project::Project;
pub use subtask::{NewSubtask, Subtask, SubtaskPatch};
pub use task::{NewTask, Task, TaskPatch};
pub use user::User;

use serde::{Deserialize, Deserializer, Serialize};

use xtrawrkx_core::DbId;

/// Reference to a related entity.
///
/// Depending on populate configuration the backend returns either a bare
/// id or a (partially) populated object; both deserialize to the id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EntityRef(pub DbId);

impl EntityRef {
    pub fn id(&self) -> DbId {
        self.0
    }
}

impl<'de> Deserialize<'de> for EntityRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Id(DbId),
            Object { id: DbId },
        }
        Ok(match Repr::deserialize(deserializer)? {
            Repr::Id(id) | Repr::Object { id } => EntityRef(id),
        })
    }
}
