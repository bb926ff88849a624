use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// What `render` does with a placeholder no scope can resolve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingPolicy {
    /// Substitute the empty string.
    #[default]
    Blank,
    /// Leave the literal `${name}` in the output.
    Keep,
}

/// Template evaluation context: an ordered stack of scopes.
/// Earlier scopes shadow later ones, but only with truthy values.
#[derive(Debug, Clone, Default)]
pub struct Context {
    scopes: Vec<Map<String, Value>>,
    pub(crate) policy: MissingPolicy,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(mut self, policy: MissingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Append a scope. Non-object values contribute an empty scope.
    pub fn push(mut self, scope: &Value) -> Self {
        self.scopes.push(match scope {
            Value::Object(m) => m.clone(),
            _ => Map::new(),
        });
        self
    }

    pub fn push_record(mut self, scope: Map<String, Value>) -> Self {
        self.scopes.push(scope);
        self
    }

    pub fn policy(&self) -> MissingPolicy {
        self.policy
    }

    pub fn scopes(&self) -> &[Map<String, Value>] {
        &self.scopes
    }
}

impl From<Map<String, Value>> for Context {
    fn from(scope: Map<String, Value>) -> Self {
        Context::new().push_record(scope)
    }
}
