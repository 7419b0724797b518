//! Strapi query-string construction.
//!
//! Encodes the filter / populate / sort / pagination conventions the
//! backend understands:
//!
//! - `filters[field][$eq]=value`, `filters[field][$null]=true`,
//!   `filters[relation][id][$eq]=value`
//! - `populate=a,b,c`
//! - `sort=field:asc|desc`
//! - `pagination[page]=N`, `pagination[pageSize]=N`
//!
//! Object-valued parameters are JSON-encoded before being appended;
//! plain strings and numbers are appended bare.

use serde_json::Value;

/// Sort direction for [`Query::sort`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    fn as_str(&self) -> &'static str {
        match self {
            SortDir::Asc => "asc",
            SortDir::Desc => "desc",
        }
    }
}

/// Accumulated query parameters, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Query {
    params: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// `filters[field][$eq]=value`.
    pub fn filter(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.params
            .push((format!("filters[{field}][$eq]"), encode(&value.into())));
        self
    }

    /// `filters[field][$null]=true` — matches rows where the field (or
    /// relation) is null.
    pub fn filter_null(mut self, field: &str) -> Self {
        self.params
            .push((format!("filters[{field}][$null]"), "true".to_string()));
        self
    }

    /// `filters[relation][id][$eq]=id` — filter by a related entity's id.
    pub fn filter_relation(mut self, relation: &str, id: impl Into<Value>) -> Self {
        self.params
            .push((format!("filters[{relation}][id][$eq]"), encode(&id.into())));
        self
    }

    /// `populate=a,b,c` — expand the named relations in the response.
    pub fn populate(mut self, relations: &[&str]) -> Self {
        if !relations.is_empty() {
            self.params
                .push(("populate".to_string(), relations.join(",")));
        }
        self
    }

    /// `sort=field:asc|desc`.
    pub fn sort(mut self, field: &str, dir: SortDir) -> Self {
        self.params
            .push(("sort".to_string(), format!("{field}:{}", dir.as_str())));
        self
    }

    /// `pagination[page]` / `pagination[pageSize]`.
    pub fn paginate(mut self, page: u32, page_size: u32) -> Self {
        self.params
            .push(("pagination[page]".to_string(), page.to_string()));
        self.params
            .push(("pagination[pageSize]".to_string(), page_size.to_string()));
        self
    }

    /// Append an arbitrary parameter. Object values are JSON-encoded.
    pub fn raw(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.params.push((key.to_string(), encode(&value.into())));
        self
    }

    /// Key/value pairs for `reqwest::RequestBuilder::query`.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.params
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// Strings and numbers are appended bare; objects and arrays are
/// JSON-stringified (used for populate/filter expressions).
fn encode(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
