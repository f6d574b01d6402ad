//! The `Message` trait: the navigation contract for schema-typed message trees.
use crate::descriptor::{FieldDescriptor, MessageDescriptor};
use crate::error::SchemaError;
use crate::value::Value;
use std::fmt::Debug;

/// A node in a mutable, schema-typed message tree.
///
/// Path resolution is written exclusively against this trait, so any message
/// representation that can answer descriptor queries and hand out nested
/// nodes can be addressed by path. Nested messages are of the same type as
/// their parent, as in a reflection-based message API.
///
/// Every method taking a `field` expects a descriptor that belongs to this
/// message's own type and returns [`SchemaError::ForeignField`] otherwise.
pub trait Message: Debug + Sized {
    /// Schema of this message's type.
    fn descriptor(&self) -> &MessageDescriptor;

    /// The runtime type name, compared against a path's root type.
    fn type_name(&self) -> &str {
        self.descriptor().name()
    }

    /// Whether a singular field is set, or a repeated/map field is non-empty.
    fn has_field(&self, field: &FieldDescriptor) -> bool;

    /// Number of elements in a repeated or map field. For a singular field
    /// this is `1` when set and `0` otherwise.
    fn field_size(&self, field: &FieldDescriptor) -> usize;

    /// The nested message held by a singular message field, if set.
    fn message(&self, field: &FieldDescriptor) -> Option<&Self>;

    /// The nested message held by a singular message field, creating and
    /// attaching an empty instance if it is not yet set.
    fn mutable_message(&mut self, field: &FieldDescriptor) -> Result<&mut Self, SchemaError>;

    fn repeated_message(&self, field: &FieldDescriptor, index: usize) -> Option<&Self>;

    /// The element at `index` of a repeated message field. Never grows the field.
    fn mutable_repeated_message(
        &mut self,
        field: &FieldDescriptor,
        index: usize,
    ) -> Result<&mut Self, SchemaError>;

    /// Appends an empty element to a repeated message field and returns it.
    fn add_message(&mut self, field: &FieldDescriptor) -> Result<&mut Self, SchemaError>;

    /// Reads a singular scalar field. Unset fields read as the kind's default.
    fn get(&self, field: &FieldDescriptor) -> Result<Value, SchemaError>;

    fn set(&mut self, field: &FieldDescriptor, value: Value) -> Result<(), SchemaError>;

    fn get_repeated(&self, field: &FieldDescriptor, index: usize) -> Result<Value, SchemaError>;

    fn set_repeated(
        &mut self,
        field: &FieldDescriptor,
        index: usize,
        value: Value,
    ) -> Result<(), SchemaError>;

    /// Appends a scalar to a repeated scalar field.
    fn add(&mut self, field: &FieldDescriptor, value: Value) -> Result<(), SchemaError>;

    /// Unsets a single field.
    fn clear_field(&mut self, field: &FieldDescriptor) -> Result<(), SchemaError>;

    /// Unsets every field of this message.
    fn clear(&mut self);
}
