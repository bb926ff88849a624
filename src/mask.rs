use serde::Deserialize;
use serde_json::{Map, Value};

use crate::errors::{PolyfillError, Result};

/// Selects the fields a projection keeps or drops.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldMask {
    Key(String),
    Keys(Vec<String>),
    /// Only the keys matter; values are ignored.
    Fields(Map<String, Value>),
}

impl FieldMask {
    /// Field names in mask order.
    pub fn names(&self) -> Vec<&str> {
        match self {
            FieldMask::Key(k) => vec![k.as_str()],
            FieldMask::Keys(ks) => ks.iter().map(String::as_str).collect(),
            FieldMask::Fields(m) => m.keys().map(String::as_str).collect(),
        }
    }

    pub fn contains(&self, field: &str) -> bool {
        match self {
            FieldMask::Key(k) => k == field,
            FieldMask::Keys(ks) => ks.iter().any(|k| k == field),
            FieldMask::Fields(m) => m.contains_key(field),
        }
    }
}

impl TryFrom<&Value> for FieldMask {
    type Error = PolyfillError;

    /// `null` is the empty mask; strings, string arrays and objects map to
    /// the matching variant; anything else is rejected.
    fn try_from(v: &Value) -> Result<Self> {
        if v.is_null() {
            return Ok(FieldMask::Keys(Vec::new()));
        }
        serde_json::from_value(v.clone()).map_err(|_| PolyfillError::InvalidMask(v.to_string()))
    }
}

impl From<&str> for FieldMask {
    fn from(k: &str) -> Self {
        FieldMask::Key(k.to_string())
    }
}

impl From<&[&str]> for FieldMask {
    fn from(ks: &[&str]) -> Self {
        FieldMask::Keys(ks.iter().map(|k| k.to_string()).collect())
    }
}

impl From<Vec<String>> for FieldMask {
    fn from(ks: Vec<String>) -> Self {
        FieldMask::Keys(ks)
    }
}
