use thiserror::Error; // Import the `Error` derive macro from the `thiserror` crate

// Define an enum to represent the errors a helper call can produce
#[derive(Debug, Error)] // Automatically implement `Debug` and `Error` traits for the enum
pub enum PolyfillError {
    // A value that cannot act as a field mask (numbers, booleans, mixed arrays)
    #[error("invalid field mask: {0}")]
    InvalidMask(String),

    // Registry lookup failed
    #[error("unknown function: {0}")]
    UnknownFunction(String),

    // Wrong number of arguments for a registered function
    #[error("{name} expects {expected} argument(s), got {got}")]
    Arity {
        name: String,
        expected: String,
        got: usize,
    },

    // An argument had the wrong shape for the function
    #[error("invalid argument to {name}: {reason}")]
    InvalidArgument { name: String, reason: String },

    // Serialization failures bubble up from serde_json
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

// Type alias for results that use `PolyfillError` as the error type
pub type Result<T> = std::result::Result<T, PolyfillError>;
