use serde_json::Value;

use crate::truthy::display;

/// Upper-case the first character, leave the rest alone.
pub fn to_title(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Left-pad the text form of `n` with zeros up to `size` characters.
pub fn zpad(n: &Value, size: usize) -> String {
    let s = display(n);
    let len = s.chars().count();
    if len >= size {
        return s;
    }
    "0".repeat(size - len) + &s
}

pub fn is_defined(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        _ => true,
    }
}

/// Normalize path separators to `/`.
pub fn portable(path: &str) -> String {
    path.replace('\\', "/")
}
