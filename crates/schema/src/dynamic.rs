//! A descriptor-driven, in-memory implementation of [`Message`].
use crate::descriptor::{FieldDescriptor, MessageDescriptor};
use crate::error::SchemaError;
use crate::kind::Cardinality;
use crate::message::Message;
use crate::pool::DescriptorPool;
use crate::value::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Storage for one set field.
#[derive(Debug, Clone, PartialEq)]
enum FieldValue {
    Scalar(Value),
    Message(Box<DynamicMessage>),
    List(Vec<Value>),
    MessageList(Vec<DynamicMessage>),
}

/// A message whose shape is defined at runtime by a [`MessageDescriptor`].
///
/// Field values are keyed by field number. Nested messages share the pool of
/// their parent so that unset message fields can be materialized on demand.
/// Map fields are described by the schema but hold no entries.
#[derive(Clone)]
pub struct DynamicMessage {
    descriptor: Arc<MessageDescriptor>,
    pool: Arc<DescriptorPool>,
    fields: BTreeMap<u32, FieldValue>,
}

impl DynamicMessage {
    pub fn new(pool: &Arc<DescriptorPool>, type_name: &str) -> Result<Self, SchemaError> {
        let descriptor = pool
            .get(type_name)
            .cloned()
            .ok_or_else(|| SchemaError::UnknownType(type_name.to_string()))?;
        Ok(Self {
            descriptor,
            pool: Arc::clone(pool),
            fields: BTreeMap::new(),
        })
    }

    /// Number of fields currently set.
    pub fn set_field_count(&self) -> usize {
        self.fields.len()
    }

    fn check_field(&self, field: &FieldDescriptor) -> Result<(), SchemaError> {
        if self.descriptor.contains(field) {
            Ok(())
        } else {
            Err(SchemaError::ForeignField {
                message: self.descriptor.name().to_string(),
                field: field.name().to_string(),
            })
        }
    }

    fn expect(
        &self,
        field: &FieldDescriptor,
        cardinality_ok: bool,
        message_kind: bool,
        expected: &'static str,
    ) -> Result<(), SchemaError> {
        self.check_field(field)?;
        if cardinality_ok && field.is_message() == message_kind {
            Ok(())
        } else {
            Err(SchemaError::KindMismatch {
                field: field.name().to_string(),
                expected,
            })
        }
    }

    fn check_value(field: &FieldDescriptor, value: &Value) -> Result<(), SchemaError> {
        if value.matches(field.kind()) {
            Ok(())
        } else {
            Err(SchemaError::ValueMismatch {
                field: field.name().to_string(),
                expected: field.kind().to_string(),
                actual: value.kind().to_string(),
            })
        }
    }

    fn out_of_range(field: &FieldDescriptor, index: usize, size: usize) -> SchemaError {
        SchemaError::IndexOutOfRange {
            field: field.name().to_string(),
            index,
            size,
        }
    }

    fn child(&self, field: &FieldDescriptor) -> Result<DynamicMessage, SchemaError> {
        let type_name = field.kind().message_type().ok_or(SchemaError::KindMismatch {
            field: field.name().to_string(),
            expected: "message",
        })?;
        DynamicMessage::new(&self.pool, type_name)
    }

    fn list(&self, field: &FieldDescriptor) -> &[Value] {
        match self.fields.get(&field.number()) {
            Some(FieldValue::List(values)) => values.as_slice(),
            _ => &[],
        }
    }

    fn message_list(&self, field: &FieldDescriptor) -> &[DynamicMessage] {
        match self.fields.get(&field.number()) {
            Some(FieldValue::MessageList(messages)) => messages.as_slice(),
            _ => &[],
        }
    }
}

impl Message for DynamicMessage {
    fn descriptor(&self) -> &MessageDescriptor {
        &self.descriptor
    }

    fn has_field(&self, field: &FieldDescriptor) -> bool {
        self.field_size(field) > 0
    }

    fn field_size(&self, field: &FieldDescriptor) -> usize {
        match self.fields.get(&field.number()) {
            None => 0,
            Some(FieldValue::Scalar(_) | FieldValue::Message(_)) => 1,
            Some(FieldValue::List(values)) => values.len(),
            Some(FieldValue::MessageList(messages)) => messages.len(),
        }
    }

    fn message(&self, field: &FieldDescriptor) -> Option<&Self> {
        match self.fields.get(&field.number()) {
            Some(FieldValue::Message(message)) => Some(&**message),
            _ => None,
        }
    }

    fn mutable_message(&mut self, field: &FieldDescriptor) -> Result<&mut Self, SchemaError> {
        self.expect(field, !field.is_repeated() && !field.is_map(), true, "singular message")?;

        if !self.fields.contains_key(&field.number()) {
            let child = self.child(field)?;
            log::trace!(
                "Materializing '{}' ({}) in {}",
                field.name(),
                child.type_name(),
                self.descriptor.name()
            );
            self.fields
                .insert(field.number(), FieldValue::Message(Box::new(child)));
        }

        match self.fields.get_mut(&field.number()) {
            Some(FieldValue::Message(message)) => Ok(&mut **message),
            _ => Err(SchemaError::KindMismatch {
                field: field.name().to_string(),
                expected: "singular message",
            }),
        }
    }

    fn repeated_message(&self, field: &FieldDescriptor, index: usize) -> Option<&Self> {
        self.message_list(field).get(index)
    }

    fn mutable_repeated_message(
        &mut self,
        field: &FieldDescriptor,
        index: usize,
    ) -> Result<&mut Self, SchemaError> {
        self.expect(field, field.is_repeated(), true, "repeated message")?;
        match self.fields.get_mut(&field.number()) {
            Some(FieldValue::MessageList(messages)) => {
                let size = messages.len();
                messages
                    .get_mut(index)
                    .ok_or_else(|| Self::out_of_range(field, index, size))
            }
            _ => Err(Self::out_of_range(field, index, 0)),
        }
    }

    fn add_message(&mut self, field: &FieldDescriptor) -> Result<&mut Self, SchemaError> {
        self.expect(field, field.is_repeated(), true, "repeated message")?;
        let child = self.child(field)?;
        let slot = self
            .fields
            .entry(field.number())
            .or_insert_with(|| FieldValue::MessageList(Vec::new()));
        match slot {
            FieldValue::MessageList(messages) => {
                messages.push(child);
                let size = messages.len();
                messages
                    .last_mut()
                    .ok_or_else(|| Self::out_of_range(field, size, size))
            }
            _ => Err(SchemaError::KindMismatch {
                field: field.name().to_string(),
                expected: "repeated message",
            }),
        }
    }

    fn get(&self, field: &FieldDescriptor) -> Result<Value, SchemaError> {
        self.expect(field, matches!(field.cardinality(), Cardinality::Singular), false, "singular scalar")?;
        match self.fields.get(&field.number()) {
            Some(FieldValue::Scalar(value)) => Ok(value.clone()),
            _ => Value::default_for(field.kind()).ok_or_else(|| SchemaError::KindMismatch {
                field: field.name().to_string(),
                expected: "singular scalar",
            }),
        }
    }

    fn set(&mut self, field: &FieldDescriptor, value: Value) -> Result<(), SchemaError> {
        self.expect(field, matches!(field.cardinality(), Cardinality::Singular), false, "singular scalar")?;
        Self::check_value(field, &value)?;
        self.fields.insert(field.number(), FieldValue::Scalar(value));
        Ok(())
    }

    fn get_repeated(&self, field: &FieldDescriptor, index: usize) -> Result<Value, SchemaError> {
        self.expect(field, field.is_repeated(), false, "repeated scalar")?;
        let values = self.list(field);
        values
            .get(index)
            .cloned()
            .ok_or_else(|| Self::out_of_range(field, index, values.len()))
    }

    fn set_repeated(
        &mut self,
        field: &FieldDescriptor,
        index: usize,
        value: Value,
    ) -> Result<(), SchemaError> {
        self.expect(field, field.is_repeated(), false, "repeated scalar")?;
        Self::check_value(field, &value)?;
        match self.fields.get_mut(&field.number()) {
            Some(FieldValue::List(values)) => {
                let size = values.len();
                let slot = values
                    .get_mut(index)
                    .ok_or_else(|| Self::out_of_range(field, index, size))?;
                *slot = value;
                Ok(())
            }
            _ => Err(Self::out_of_range(field, index, 0)),
        }
    }

    fn add(&mut self, field: &FieldDescriptor, value: Value) -> Result<(), SchemaError> {
        self.expect(field, field.is_repeated(), false, "repeated scalar")?;
        Self::check_value(field, &value)?;
        match self
            .fields
            .entry(field.number())
            .or_insert_with(|| FieldValue::List(Vec::new()))
        {
            FieldValue::List(values) => {
                values.push(value);
                Ok(())
            }
            _ => Err(SchemaError::KindMismatch {
                field: field.name().to_string(),
                expected: "repeated scalar",
            }),
        }
    }

    fn clear_field(&mut self, field: &FieldDescriptor) -> Result<(), SchemaError> {
        self.check_field(field)?;
        self.fields.remove(&field.number());
        Ok(())
    }

    fn clear(&mut self) {
        self.fields.clear();
    }
}

impl PartialEq for DynamicMessage {
    fn eq(&self, other: &Self) -> bool {
        self.descriptor.name() == other.descriptor.name() && self.fields == other.fields
    }
}

impl fmt::Debug for DynamicMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct(self.descriptor.name());
        for (number, value) in &self.fields {
            match self.descriptor.field_by_number(*number) {
                Some(field) => s.field(field.name(), value),
                None => s.field("?", value),
            };
        }
        s.finish()
    }
}
