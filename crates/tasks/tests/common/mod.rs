//! Shared harness for service integration tests.
//!
//! [`MemoryBackend`] is an in-memory [`Collection`] speaking the same
//! filter conventions as the real backend, with per-id failure
//! injection for exercising abort and partial-failure paths.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Mutex, Once};

use async_trait::async_trait;
use serde_json::{json, Value};

use xtrawrkx_client::{ApiError, ApiResult, Collection, Query};
use xtrawrkx_core::DbId;

static INIT_TRACING: Once = Once::new();

/// Initialize a test-writer subscriber once per process.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "info".into()),
            )
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// In-memory stand-in for the backend collections.
#[derive(Default)]
pub struct MemoryBackend {
    collections: Mutex<HashMap<String, Vec<Value>>>,
    next_id: AtomicI64,
    fail_remove: Mutex<HashSet<DbId>>,
    fail_update: Mutex<HashSet<DbId>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        init_tracing();
        Self {
            next_id: AtomicI64::new(1),
            ..Self::default()
        }
    }

    /// Seed a document, assigning it an id. Returns the id.
    pub fn insert(&self, path: &str, mut doc: Value) -> DbId {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        doc.as_object_mut()
            .expect("seed doc must be an object")
            .insert("id".to_string(), json!(id));
        self.collections
            .lock()
            .unwrap()
            .entry(path.to_string())
            .or_default()
            .push(doc);
        id
    }

    /// Ids currently stored in one collection.
    pub fn ids(&self, path: &str) -> Vec<DbId> {
        self.collections
            .lock()
            .unwrap()
            .get(path)
            .map(|docs| {
                docs.iter()
                    .filter_map(|d| d.get("id").and_then(Value::as_i64))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Snapshot of one stored document.
    pub fn doc(&self, path: &str, id: DbId) -> Option<Value> {
        self.collections
            .lock()
            .unwrap()
            .get(path)?
            .iter()
            .find(|d| d.get("id").and_then(Value::as_i64) == Some(id))
            .cloned()
    }

    /// Make every DELETE of `id` fail with a 500.
    pub fn fail_remove(&self, id: DbId) {
        self.fail_remove.lock().unwrap().insert(id);
    }

    /// Make every update of `id` fail with a 500.
    pub fn fail_update(&self, id: DbId) {
        self.fail_update.lock().unwrap().insert(id);
    }

    fn injected_failure() -> ApiError {
        ApiError::Server {
            status: 500,
            message: "injected failure".to_string(),
        }
    }
}

/// Evaluate the filter pairs of a query against a flat document.
/// Sort, populate, and pagination parameters are ignored.
fn matches(doc: &Value, query: &Query) -> bool {
    for (key, value) in query.pairs() {
        let Some(rest) = key.strip_prefix("filters[") else {
            continue;
        };
        if let Some(field) = rest.strip_suffix("][$null]") {
            if !doc.get(field).map_or(true, Value::is_null) {
                return false;
            }
        } else if let Some(field) = rest.strip_suffix("][id][$eq]") {
            let Some(expected) = value.parse::<DbId>().ok() else {
                return false;
            };
            if !relation_matches(doc.get(field), expected) {
                return false;
            }
        } else if let Some(field) = rest.strip_suffix("][$eq]") {
            if !loose_eq(doc.get(field), value) {
                return false;
            }
        }
    }
    true
}

/// Match a relation field (bare id, populated object, or many-to-many
/// array of either) against an expected id.
fn relation_matches(value: Option<&Value>, expected: DbId) -> bool {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .any(|item| relation_id(Some(item)) == Some(expected)),
        other => relation_id(other) == Some(expected),
    }
}

/// Id of a relation field stored as a bare id or a populated object.
fn relation_id(value: Option<&Value>) -> Option<DbId> {
    match value? {
        Value::Number(n) => n.as_i64(),
        Value::Object(obj) => obj.get("id").and_then(Value::as_i64),
        _ => None,
    }
}

fn loose_eq(value: Option<&Value>, expected: &str) -> bool {
    match value {
        Some(Value::String(s)) => s == expected,
        Some(Value::Number(n)) => n.to_string() == expected,
        Some(Value::Bool(b)) => b.to_string() == expected,
        _ => false,
    }
}

#[async_trait]
impl Collection for MemoryBackend {
    async fn list(&self, path: &str, query: &Query) -> ApiResult<Vec<Value>> {
        Ok(self
            .collections
            .lock()
            .unwrap()
            .get(path)
            .map(|docs| {
                docs.iter()
                    .filter(|doc| matches(doc, query))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn get(&self, path: &str, id: DbId, _query: &Query) -> ApiResult<Value> {
        self.doc(path, id)
            .ok_or_else(|| ApiError::NotFound(format!("{path}/{id}")))
    }

    async fn create(&self, path: &str, data: Value) -> ApiResult<Value> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let mut doc = data;
        doc.as_object_mut()
            .ok_or_else(|| ApiError::Validation("payload must be an object".into()))?
            .insert("id".to_string(), json!(id));
        self.collections
            .lock()
            .unwrap()
            .entry(path.to_string())
            .or_default()
            .push(doc.clone());
        Ok(doc)
    }

    async fn update(&self, path: &str, id: DbId, data: Value) -> ApiResult<Value> {
        if self.fail_update.lock().unwrap().contains(&id) {
            return Err(Self::injected_failure());
        }
        let mut collections = self.collections.lock().unwrap();
        let docs = collections
            .get_mut(path)
            .ok_or_else(|| ApiError::NotFound(format!("{path}/{id}")))?;
        let doc = docs
            .iter_mut()
            .find(|d| d.get("id").and_then(Value::as_i64) == Some(id))
            .ok_or_else(|| ApiError::NotFound(format!("{path}/{id}")))?;

        let fields = data
            .as_object()
            .ok_or_else(|| ApiError::Validation("payload must be an object".into()))?;
        let target = doc.as_object_mut().expect("stored docs are objects");
        for (key, value) in fields {
            target.insert(key.clone(), value.clone());
        }
        Ok(doc.clone())
    }

    async fn remove(&self, path: &str, id: DbId) -> ApiResult<()> {
        if self.fail_remove.lock().unwrap().contains(&id) {
            return Err(Self::injected_failure());
        }
        let mut collections = self.collections.lock().unwrap();
        let docs = collections
            .get_mut(path)
            .ok_or_else(|| ApiError::NotFound(format!("{path}/{id}")))?;
        let before = docs.len();
        docs.retain(|d| d.get("id").and_then(Value::as_i64) != Some(id));
        if docs.len() == before {
            return Err(ApiError::NotFound(format!("{path}/{id}")));
        }
        Ok(())
    }

    async fn count(&self, path: &str, query: &Query) -> ApiResult<u64> {
        Ok(self.list(path, query).await?.len() as u64)
    }
}
