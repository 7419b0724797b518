//! Domain services for the xtrawrkx task platform.
//!
//! Layered on [`xtrawrkx_client::Collection`]:
//!
//! - [`models`] — typed entities (Task, Subtask, Comment, User, Project)
//!   and their create/update DTOs.
//! - [`transform`] — normalization of the backend's relation envelopes
//!   into flat documents the models deserialize from.
//! - [`tree`] — hierarchy-aware CRUD shared by subtasks and comments
//!   (depth/order maintenance, cascading delete, move).
//! - [`subtasks`] / [`comments`] / [`tasks`] / [`users`] / [`projects`]
//!   — per-collection services.
//! - [`optimistic`] — explicit Pending → Committed | RolledBack state
//!   for optimistic UI mutations.

pub mod comments;
pub mod error;
pub mod models;
pub mod optimistic;
pub mod projects;
pub mod subtasks;
pub mod tasks;
pub mod transform;
pub mod tree;
pub mod users;

pub use comments::CommentService;
pub use error::{ServiceError, ServiceResult};
pub use optimistic::{MutationState, OptimisticUpdate};
pub use projects::ProjectService;
pub use subtasks::SubtaskService;
pub use tasks::{BulkOutcome, TaskService};
pub use tree::{TreeCollection, TreeService};
pub use users::UserService;
