//! HTTP access to the xtrawrkx Strapi backend.
//!
//! Building blocks:
//!
//! - [`ClientConfig`] — base URL and timeout, loadable from env.
//! - [`Session`] — shared bearer-token holder, cleared on 401.
//! - [`Query`] — Strapi filter / populate / sort / pagination encoding.
//! - [`Collection`] — the async CRUD seam domain services depend on.
//! - [`StrapiClient`] — reqwest implementation of [`Collection`] with
//!   auth-header injection and classified errors ([`ApiError`]).

pub mod collection;
pub mod config;
pub mod error;
pub mod http;
pub mod query;
pub mod session;

pub use collection::Collection;
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use http::StrapiClient;
pub use query::{Query, SortDir};
pub use session::Session;
