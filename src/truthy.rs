use serde_json::Value;

/// JavaScript-style truthiness. Unlike emptiness checks, empty arrays and
/// objects are truthy.
pub fn truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text form used when a value is spliced into a string or used as a map key.
/// Strings are verbatim, containers are compact JSON. Integral floats drop
/// the fraction (`1.0` → `1`) below 1e21, matching JavaScript number text.
pub fn display(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => {
                if f == 0.0 {
                    "0".to_string()
                } else {
                    format!("{f:.0}")
                }
            }
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}
