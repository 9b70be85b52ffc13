// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Canonical textual form of arbitrary serializable objects.

use serde::Serialize;
use serde_json::{Map, Value};

#[allow(unused)]
use tracing::{debug, error};

/// Convert `object` into a generic [`Value`] tree by passing it through the serde JSON data model.
/// Typed structs and generic maps holding the same data converge to the same tree.
///
/// This is best effort: if `object` cannot be represented as JSON (e.g. a map with non-string keys),
/// the failure is logged and [`Value::Null`] is returned instead.
#[must_use]
pub fn normalize<T: Serialize + ?Sized>(object: &T) -> Value {
    match serde_json::to_value(object) {
        Ok(value) => value,
        Err(e) => {
            error!("Failed to normalize object for hashing, falling back to null: {e}");
            Value::Null
        }
    }
}

/// Deep copy of `value` where the keys of every object are in lexicographic order.
/// `serde_json` keeps insertion order when built with `preserve_order`, so ordering is not
/// left to the map implementation.
#[must_use]
pub fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.clone(), sort_keys(v)))
                    .collect::<Map<String, Value>>(),
            )
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        scalar => scalar.clone(),
    }
}

/// Render `object` as YAML. Keys are emitted in the order `object` serializes them; feed it the
/// output of [`sort_keys`] to get the canonical form that gets hashed.
///
/// If serialization fails the error is logged and an empty string is returned.
#[must_use]
pub fn pretty_yaml<T: Serialize + ?Sized>(object: &T) -> String {
    match serde_yaml_ng::to_string(object) {
        Ok(yaml) => yaml,
        Err(e) => {
            error!("Failed to render canonical yaml: {e}");
            String::new()
        }
    }
}
