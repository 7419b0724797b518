//! Pure domain logic for the xtrawrkx task platform.
//!
//! This crate has zero internal deps so it can be used by the HTTP
//! client layer, the domain services, and any future CLI tooling:
//!
//! - [`status::TaskStatus`] / [`priority::Priority`] — closed enums for
//!   the backend's status and priority codes.
//! - [`hierarchy`] — generic flat-list-to-tree / tree-to-flat-list
//!   conversion over parent-reference keys.
//! - [`dates`] — short / long / relative date formatting.
//! - [`people`] — initials and display-name helpers.

pub mod dates;
pub mod error;
pub mod hierarchy;
pub mod people;
pub mod priority;
pub mod status;
pub mod types;

pub use error::CoreError;
pub use hierarchy::{build_tree, flatten_tree, TreeItem, TreeNode, MAX_TREE_DEPTH};
pub use priority::Priority;
pub use status::TaskStatus;
pub use types::{DbId, Timestamp};
