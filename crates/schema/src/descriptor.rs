//! Schema metadata for message types and their fields.
use crate::error::SchemaError;
use crate::kind::{Cardinality, FieldKind};
use std::collections::HashMap;
use std::sync::Arc;

/// Metadata for a single field of a message type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    name: String,
    number: u32,
    kind: FieldKind,
    cardinality: Cardinality,
}

impl FieldDescriptor {
    pub fn singular(name: impl Into<String>, number: u32, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            number,
            kind,
            cardinality: Cardinality::Singular,
        }
    }

    pub fn repeated(name: impl Into<String>, number: u32, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            number,
            kind,
            cardinality: Cardinality::Repeated,
        }
    }

    /// A map field from `key` to values of `value` kind.
    pub fn map(name: impl Into<String>, number: u32, key: FieldKind, value: FieldKind) -> Self {
        Self {
            name: name.into(),
            number,
            kind: value,
            cardinality: Cardinality::Map { key },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    /// The declared kind. For repeated fields this is the element kind, for
    /// maps the value kind.
    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    pub fn cardinality(&self) -> &Cardinality {
        &self.cardinality
    }

    /// True for repeated (list) fields. Maps are not reported as repeated.
    pub fn is_repeated(&self) -> bool {
        matches!(self.cardinality, Cardinality::Repeated)
    }

    pub fn is_map(&self) -> bool {
        matches!(self.cardinality, Cardinality::Map { .. })
    }

    pub fn is_message(&self) -> bool {
        self.kind.is_message()
    }
}

/// Metadata for a message type: its fully-qualified name and ordered fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDescriptor {
    name: String,
    fields: Vec<Arc<FieldDescriptor>>,
    by_name: HashMap<String, usize>,
    by_number: HashMap<u32, usize>,
}

impl MessageDescriptor {
    pub fn builder(name: impl Into<String>) -> MessageDescriptorBuilder {
        MessageDescriptorBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> impl Iterator<Item = &Arc<FieldDescriptor>> {
        self.fields.iter()
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn field_by_name(&self, name: &str) -> Option<&Arc<FieldDescriptor>> {
        self.by_name.get(name).map(|&i| &self.fields[i])
    }

    pub fn field_by_number(&self, number: u32) -> Option<&Arc<FieldDescriptor>> {
        self.by_number.get(&number).map(|&i| &self.fields[i])
    }

    /// Returns `true` if `field` is one of this message's own fields.
    pub fn contains(&self, field: &FieldDescriptor) -> bool {
        self.field_by_number(field.number())
            .is_some_and(|own| **own == *field)
    }
}

/// Builds a [`MessageDescriptor`], validating field names and numbers.
#[derive(Debug, Clone)]
pub struct MessageDescriptorBuilder {
    name: String,
    fields: Vec<FieldDescriptor>,
}

impl MessageDescriptorBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    pub fn build(self) -> Result<MessageDescriptor, SchemaError> {
        let mut by_name = HashMap::with_capacity(self.fields.len());
        let mut by_number = HashMap::with_capacity(self.fields.len());

        for (i, field) in self.fields.iter().enumerate() {
            if field.number == 0 || field.name.is_empty() {
                return Err(SchemaError::InvalidFieldNumber {
                    message: self.name.clone(),
                    field: field.name.clone(),
                });
            }
            if let Cardinality::Map { key } = &field.cardinality
                && !key.is_valid_map_key()
            {
                return Err(SchemaError::InvalidMapKey {
                    message: self.name.clone(),
                    field: field.name.clone(),
                });
            }
            if by_name.insert(field.name.clone(), i).is_some() {
                return Err(SchemaError::DuplicateField {
                    message: self.name.clone(),
                    field: field.name.clone(),
                });
            }
            if by_number.insert(field.number, i).is_some() {
                return Err(SchemaError::DuplicateFieldNumber {
                    message: self.name.clone(),
                    number: field.number,
                });
            }
        }

        Ok(MessageDescriptor {
            name: self.name,
            fields: self.fields.into_iter().map(Arc::new).collect(),
            by_name,
            by_number,
        })
    }
}
