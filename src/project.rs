use serde_json::{Map, Value};
use tracing::debug;

use crate::mask::FieldMask;

pub type Record = Map<String, Value>;

/// Whitelist projection: keep only the masked fields present in `record`,
/// in mask order. Missing fields are skipped, never filled in.
pub fn project_include(record: &Record, mask: &FieldMask) -> Record {
    let out: Record = mask
        .names()
        .into_iter()
        .filter_map(|k| record.get(k).map(|v| (k.to_string(), v.clone())))
        .collect();
    debug!(kept = out.len(), of = record.len(), "include projection");
    out
}

/// Blacklist projection: copy of `record` without the masked fields.
/// Every mask form removes; record order is preserved.
pub fn project_exclude(record: &Record, mask: &FieldMask) -> Record {
    let out: Record = record
        .iter()
        .filter(|(k, _)| !mask.contains(k))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    debug!(kept = out.len(), of = record.len(), "exclude projection");
    out
}

/// [`project_include`] over an arbitrary value; non-objects act as `{}`.
pub fn white(value: &Value, mask: &FieldMask) -> Value {
    match value {
        Value::Object(m) => Value::Object(project_include(m, mask)),
        _ => Value::Object(Record::new()),
    }
}

/// [`project_exclude`] over an arbitrary value; non-objects act as `{}`.
pub fn black(value: &Value, mask: &FieldMask) -> Value {
    match value {
        Value::Object(m) => Value::Object(project_exclude(m, mask)),
        _ => Value::Object(Record::new()),
    }
}
