use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

use crate::errors::Result;

/// Compact JSON, or pretty JSON indented by four spaces.
pub fn serialize(value: &Value, pretty: bool) -> Result<String> {
    if !pretty {
        return Ok(serde_json::to_string(value)?);
    }
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Pretty-print each value and join them with a single space.
pub fn dump(values: &[Value]) -> Result<String> {
    let parts = values
        .iter()
        .map(|v| serialize(v, true))
        .collect::<Result<Vec<_>>>()?;
    Ok(parts.join(" "))
}
