pub mod errors;
pub mod context;
pub mod functions;  // name-based dispatch used by the CLI
pub mod mask;
pub mod project;
pub mod template;
pub mod arrays;
pub mod numbers;
pub mod strings;
pub mod serialize;
pub mod truthy;
mod parser;

use serde_json::Value;
use errors::Result;
use functions::Registry;

/// Call a builtin helper by name with JSON arguments.
pub fn call(name: &str, args: &[Value]) -> Result<Value> {
    Registry::with_builtins().call(name, args)
}

/// Re-export the most-used helpers for users who call functions directly.
pub use context::{Context, MissingPolicy};
pub use errors::PolyfillError;
pub use mask::FieldMask;
pub use project::{black, project_exclude, project_include, white, Record};
pub use template::{interpolate, render};
