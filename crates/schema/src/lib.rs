//! Schemas and message trees for path-addressed field access.
//!
//! This crate provides the collaborator side of path resolution:
//!
//! - [`MessageDescriptor`] / [`FieldDescriptor`]: schema metadata queryable by field name
//! - [`DescriptorPool`]: a registry of message types, loadable from a JSON schema document
//! - [`Message`]: the navigation contract resolvers are written against
//! - [`DynamicMessage`]: an in-memory message tree shaped by a descriptor at runtime

pub mod descriptor;
pub mod dynamic;
pub mod error;
pub mod kind;
pub mod message;
pub mod pool;
pub mod value;

pub use descriptor::{FieldDescriptor, MessageDescriptor, MessageDescriptorBuilder};
pub use dynamic::DynamicMessage;
pub use error::SchemaError;
pub use kind::{Cardinality, FieldKind};
pub use message::Message;
pub use pool::{DescriptorPool, FieldDef, Label, MessageDef, SchemaDocument, TypeDef};
pub use value::Value;
