// src/error.rs
use fieldpath_path::PathError;
use fieldpath_resolver::ResolveError;
use fieldpath_schema::SchemaError;
use thiserror::Error;

/// Top-level error type covering parsing, schema loading and resolution.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Path parsing failed: {0}")]
    Path(#[from] PathError),

    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("Resolution failed: {0}")]
    Resolve(#[from] ResolveError),

    #[error("Engine is misconfigured: {0}")]
    Config(String),
}
