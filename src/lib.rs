//! Path addressing for schema-typed messages.
//!
//! Given a textual path such as `Person[addresses][0][city]` and a message
//! instance, this crate locates the addressed field so it can be read or
//! written without per-schema traversal code.
//!
//! ## Example
//!
//! ```ignore
//! use fieldpath::{FieldPathEngine, Value};
//!
//! let engine = FieldPathEngine::builder()
//!     .with_schema_file("schema.json")?
//!     .build()?;
//! let mut person = engine.new_message("Person")?;
//! engine.set(&mut person, "Person[home][city]", Value::from("Oslo"))?;
//! assert_eq!(engine.get(&mut person, "Person[home][city]")?, Value::from("Oslo"));
//! ```

pub mod engine;
pub mod error;

pub use engine::{EngineBuilder, FieldPathEngine};
pub use error::Error;

pub use fieldpath_path::{Path, PathError};
pub use fieldpath_resolver::{
    FieldRef, FieldResolver, ParentRole, ResolveError, ResolveOptions, resolve,
};
pub use fieldpath_schema::{
    Cardinality, DescriptorPool, DynamicMessage, FieldDescriptor, FieldKind, Message,
    MessageDescriptor, SchemaError, Value,
};
