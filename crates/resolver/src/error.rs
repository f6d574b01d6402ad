use fieldpath_schema::SchemaError;
use thiserror::Error;

/// Error type for path resolution and resolved-field access.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolveError {
    #[error("Type mismatch: path addresses '{expected}' but message is '{actual}'")]
    TypeMismatch { expected: String, actual: String },

    #[error("Field '{field}' not found in message '{message}'")]
    FieldNotFound { message: String, field: String },

    #[error("Invalid array index '{selector}' for field '{field}'")]
    InvalidIndex { field: String, selector: String },

    #[error("Array index {index} is out of range for field '{field}' of size {size}")]
    IndexOutOfRange {
        field: String,
        index: usize,
        size: usize,
    },

    #[error("Invalid path at '{at}': {reason}")]
    InvalidPath { at: String, reason: &'static str },

    #[error("Unsupported: cannot apply selector '{selector}' to map field '{field}'")]
    Unsupported { field: String, selector: String },

    #[error("Field '{field}' is not set and creating missing messages is disabled")]
    FieldNotSet { field: String },

    #[error("No field specified: the path addresses the root message")]
    NoFieldSpecified,

    #[error("Message error: {0}")]
    Schema(#[from] SchemaError),
}
