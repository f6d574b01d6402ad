use thiserror::Error;

/// Error type for schema construction and message-tree operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    #[error("Unknown message type: {0}")]
    UnknownType(String),

    #[error("Message type '{0}' is already registered")]
    DuplicateType(String),

    #[error("Duplicate field '{field}' in message '{message}'")]
    DuplicateField { message: String, field: String },

    #[error("Field number {number} is used twice in message '{message}'")]
    DuplicateFieldNumber { message: String, number: u32 },

    #[error("Field '{field}' in message '{message}' has an invalid number")]
    InvalidFieldNumber { message: String, field: String },

    #[error("Field '{field}' in message '{message}' is invalid: {reason}")]
    InvalidField {
        message: String,
        field: String,
        reason: &'static str,
    },

    #[error("Map field '{field}' in message '{message}' has an invalid key type")]
    InvalidMapKey { message: String, field: String },

    #[error("Field '{field}' in message '{message}' refers to unknown type '{type_name}'")]
    UnresolvedType {
        message: String,
        field: String,
        type_name: String,
    },

    #[error("Field '{field}' does not belong to message '{message}'")]
    ForeignField { message: String, field: String },

    #[error("Field '{field}' is not a {expected} field")]
    KindMismatch { field: String, expected: &'static str },

    #[error("Field '{field}' expects a value of type {expected}, got {actual}")]
    ValueMismatch {
        field: String,
        expected: String,
        actual: String,
    },

    #[error("Index {index} is out of range for field '{field}' of size {size}")]
    IndexOutOfRange {
        field: String,
        index: usize,
        size: usize,
    },

    #[error("Invalid schema document: {0}")]
    Json(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for SchemaError {
    fn from(err: std::io::Error) -> Self {
        SchemaError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        SchemaError::Json(err.to_string())
    }
}
