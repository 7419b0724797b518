//! Normalization of backend response shapes.
//!
//! Depending on the populate configuration, the backend returns entities
//! either flat (`{ "id": 1, "title": "..." }`) or wrapped in the v4
//! envelope (`{ "id": 1, "attributes": { ... } }`), with relations
//! nested one level deeper under a `{ "data": ... }` wrapper.
//! [`normalize`] rewrites any of these into the flat form the typed
//! models deserialize from. Pure; malformed relations (`data: null`)
//! normalize to null rather than erroring.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::ServiceResult;

/// Recursively flatten envelope shapes into plain documents.
pub fn normalize(value: Value) -> Value {
    match value {
        Value::Object(mut map) => {
            // Relation wrapper: { "data": ... } optionally alongside "meta".
            if map.contains_key("data")
                && map
                    .keys()
                    .all(|k| k == "data" || k == "meta")
            {
                return normalize(map.remove("data").unwrap_or(Value::Null));
            }

            // v4 entity envelope: { "id": N, "attributes": { ... } }.
            if let Some(attrs) = map.remove("attributes") {
                if let Value::Object(attrs) = attrs {
                    let mut flat = Map::with_capacity(attrs.len() + 1);
                    if let Some(id) = map.remove("id") {
                        flat.insert("id".to_string(), id);
                    }
                    for (key, value) in attrs {
                        flat.insert(key, normalize(value));
                    }
                    return Value::Object(flat);
                }
                // Non-object "attributes" is an ordinary field; keep it.
                map.insert("attributes".to_string(), attrs);
            }

            Value::Object(map.into_iter().map(|(k, v)| (k, normalize(v))).collect())
        }
        Value::Array(items) => Value::Array(items.into_iter().map(normalize).collect()),
        other => other,
    }
}

/// Normalize a document and decode it into its typed model.
pub fn decode<T: DeserializeOwned>(value: Value) -> ServiceResult<T> {
    Ok(serde_json::from_value(normalize(value))?)
}

/// Normalize and decode every document in a list response.
pub fn decode_list<T: DeserializeOwned>(values: Vec<Value>) -> ServiceResult<Vec<T>> {
    values.into_iter().map(decode).collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    // -----------------------------------------------------------------------
    // Envelope flattening
    // -----------------------------------------------------------------------

    #[test]
    fn flat_documents_pass_through() {
        let doc = json!({ "id": 1, "title": "t", "depth": 0 });
        assert_eq!(normalize(doc.clone()), doc);
    }

    #[test]
    fn v4_attributes_envelope_is_flattened() {
        let doc = json!({ "id": 3, "attributes": { "title": "t", "order": 2 } });
        assert_eq!(normalize(doc), json!({ "id": 3, "title": "t", "order": 2 }));
    }

    #[test]
    fn relation_data_wrapper_is_unwrapped() {
        let doc = json!({
            "id": 3,
            "attributes": {
                "title": "t",
                "task": { "data": { "id": 9, "attributes": { "title": "owner" } } }
            }
        });
        assert_eq!(
            normalize(doc),
            json!({ "id": 3, "title": "t", "task": { "id": 9, "title": "owner" } })
        );
    }

    #[test]
    fn null_relation_normalizes_to_null() {
        let doc = json!({ "id": 3, "attributes": { "parentSubtask": { "data": null } } });
        assert_eq!(normalize(doc), json!({ "id": 3, "parentSubtask": null }));
    }

    #[test]
    fn relation_arrays_are_unwrapped_element_wise() {
        let doc = json!({
            "id": 1,
            "attributes": {
                "collaborators": { "data": [
                    { "id": 4, "attributes": { "firstName": "A" } },
                    { "id": 5, "attributes": { "firstName": "B" } }
                ] }
            }
        });
        assert_eq!(
            normalize(doc),
            json!({ "id": 1, "collaborators": [
                { "id": 4, "firstName": "A" },
                { "id": 5, "firstName": "B" }
            ] })
        );
    }

    #[test]
    fn ordinary_field_named_attributes_is_kept() {
        let doc = json!({ "id": 1, "attributes": "not-an-envelope" });
        assert_eq!(normalize(doc), json!({ "id": 1, "attributes": "not-an-envelope" }));
    }

    #[test]
    fn data_key_beside_other_fields_is_not_a_wrapper() {
        // Only pure { data } / { data, meta } objects are unwrapped.
        let doc = json!({ "data": 1, "other": 2 });
        assert_eq!(normalize(doc), json!({ "data": 1, "other": 2 }));
    }
}
