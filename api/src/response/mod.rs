use serde::Serialize;
use serde_json::Value;

/// Body for recoverable misses, e.g. a 404 on a lookup:
///
/// ```json
/// { "message": "Student not found" }
/// ```
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body for failed operations:
///
/// ```json
/// { "message": "Error creating student", "error": "..." }
/// ```
///
/// `error` carries the underlying cause and is omitted when there is none
/// worth echoing.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl ErrorResponse {
    /// Constructs an error body with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: None,
        }
    }

    /// Constructs an error body carrying the underlying cause.
    pub fn with_error(message: impl Into<String>, error: impl std::fmt::Display) -> Self {
        Self {
            message: message.into(),
            error: Some(Value::String(error.to_string())),
        }
    }
}
