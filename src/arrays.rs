use itertools::Itertools;
use serde_json::{Map, Value};
use std::collections::HashSet;

use crate::truthy::display;

/// `null` → `[]`, arrays pass through, anything else is wrapped.
pub fn make_array(v: &Value) -> Vec<Value> {
    match v {
        Value::Null => Vec::new(),
        Value::Array(a) => a.clone(),
        other => vec![other.clone()],
    }
}

/// Index a list of items into a record.
///
/// With `property`, each object item is keyed by the text of
/// `item[property]` and maps to the item (or its position when `indexed`).
/// Items without the property are skipped. Without `property`, each item is
/// keyed by its own text and maps to its position. Later items win.
pub fn to_map(items: &[Value], property: Option<&str>, indexed: bool) -> Map<String, Value> {
    let mut result = Map::new();
    for (i, item) in items.iter().enumerate() {
        match property {
            Some(prop) => {
                let Some(key) = item.get(prop) else { continue };
                let value = if indexed { Value::from(i) } else { item.clone() };
                result.insert(display(key), value);
            }
            None => {
                result.insert(display(item), Value::from(i));
            }
        }
    }
    result
}

/// Equality key shared by [`unique`] and [`remove`]: JSON text with object
/// keys sorted, so key order never distinguishes two objects.
fn identity(v: &Value) -> String {
    match v {
        Value::Object(m) => format!(
            "{{{}}}",
            m.iter()
                .sorted_by(|a, b| a.0.cmp(b.0))
                .map(|(k, v)| format!("{}:{}", Value::from(k.as_str()), identity(v)))
                .join(",")
        ),
        Value::Array(a) => format!("[{}]", a.iter().map(identity).join(",")),
        other => other.to_string(),
    }
}

/// Deduplicate, keeping the first occurrence of each value.
pub fn unique(items: &[Value]) -> Vec<Value> {
    items.iter().cloned().unique_by(identity).collect()
}

/// Items not contained in `set`.
pub fn remove(items: &[Value], set: &[Value]) -> Vec<Value> {
    let excluded: HashSet<String> = set.iter().map(identity).collect();
    items
        .iter()
        .filter(|v| !excluded.contains(&identity(v)))
        .cloned()
        .collect()
}

pub fn append(items: &[Value], other: &[Value]) -> Vec<Value> {
    items.iter().chain(other).cloned().collect()
}

/// Move the tail starting at `n` to the front. Out-of-range `n` is a no-op.
pub fn rotate(items: &[Value], n: usize) -> Vec<Value> {
    if n >= items.len() {
        return items.to_vec();
    }
    let (head, tail) = items.split_at(n);
    tail.iter().chain(head).cloned().collect()
}

/// `value[property]` for each value of `record`, `null` where absent.
pub fn key_fields(record: &Map<String, Value>, property: &str) -> Vec<Value> {
    record
        .values()
        .map(|v| v.get(property).cloned().unwrap_or(Value::Null))
        .collect()
}
