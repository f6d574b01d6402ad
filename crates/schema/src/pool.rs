//! The descriptor pool and its JSON schema document format.
//!
//! A schema document lists message types and their fields:
//!
//! ```json
//! { "messages": [ { "name": "Person", "fields": [
//!     { "name": "name", "number": 1, "type": "string" },
//!     { "name": "addresses", "number": 2, "type": "message",
//!       "type_name": "Address", "label": "repeated" },
//!     { "name": "tags", "number": 3, "type": "map", "key": "string", "value": "int32" }
//! ] } ] }
//! ```
use crate::descriptor::{FieldDescriptor, MessageDescriptor};
use crate::dynamic::DynamicMessage;
use crate::error::SchemaError;
use crate::kind::FieldKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Top-level schema document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaDocument {
    pub messages: Vec<MessageDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageDef {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDef {
    pub name: String,
    pub number: u32,
    #[serde(rename = "type")]
    pub ty: TypeDef,
    /// Message type name, for `message` fields and message-valued maps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(default)]
    pub label: Label,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<TypeDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<TypeDef>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeDef {
    Int32,
    Int64,
    Uint32,
    Uint64,
    Double,
    Float,
    Bool,
    String,
    Bytes,
    Enum,
    Message,
    Map,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    #[default]
    Optional,
    Repeated,
}

impl FieldDef {
    fn to_descriptor(&self, message: &str) -> Result<FieldDescriptor, SchemaError> {
        let invalid = |reason| SchemaError::InvalidField {
            message: message.to_string(),
            field: self.name.clone(),
            reason,
        };

        if self.ty == TypeDef::Map {
            if self.label == Label::Repeated {
                return Err(invalid("map fields cannot be repeated"));
            }
            let key = self.key.ok_or_else(|| invalid("map field requires a 'key' type"))?;
            let value = self
                .value
                .ok_or_else(|| invalid("map field requires a 'value' type"))?;
            let key = self.kind_of(key, message)?;
            let value = self.kind_of(value, message)?;
            return Ok(FieldDescriptor::map(&self.name, self.number, key, value));
        }

        let kind = self.kind_of(self.ty, message)?;
        Ok(match self.label {
            Label::Optional => FieldDescriptor::singular(&self.name, self.number, kind),
            Label::Repeated => FieldDescriptor::repeated(&self.name, self.number, kind),
        })
    }

    fn kind_of(&self, ty: TypeDef, message: &str) -> Result<FieldKind, SchemaError> {
        let kind = match ty {
            TypeDef::Int32 => FieldKind::Int32,
            TypeDef::Int64 => FieldKind::Int64,
            TypeDef::Uint32 => FieldKind::UInt32,
            TypeDef::Uint64 => FieldKind::UInt64,
            TypeDef::Double => FieldKind::Double,
            TypeDef::Float => FieldKind::Float,
            TypeDef::Bool => FieldKind::Bool,
            TypeDef::String => FieldKind::String,
            TypeDef::Bytes => FieldKind::Bytes,
            TypeDef::Enum => FieldKind::Enum,
            TypeDef::Message => match &self.type_name {
                Some(name) => FieldKind::Message(name.clone()),
                None => {
                    return Err(SchemaError::InvalidField {
                        message: message.to_string(),
                        field: self.name.clone(),
                        reason: "message field requires a 'type_name'",
                    });
                }
            },
            TypeDef::Map => {
                return Err(SchemaError::InvalidField {
                    message: message.to_string(),
                    field: self.name.clone(),
                    reason: "maps cannot be nested",
                });
            }
        };
        Ok(kind)
    }
}

/// A registry of message descriptors keyed by fully-qualified type name.
#[derive(Debug, Clone, Default)]
pub struct DescriptorPool {
    messages: HashMap<String, Arc<MessageDescriptor>>,
}

impl DescriptorPool {
    pub fn new() -> Self {
        Self {
            messages: HashMap::new(),
        }
    }

    /// Builds a pool from descriptors and checks that every message field
    /// refers to a type in the pool.
    pub fn from_descriptors<I>(descriptors: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = MessageDescriptor>,
    {
        let mut pool = Self::new();
        for descriptor in descriptors {
            pool.add(descriptor)?;
        }
        pool.validate()?;
        Ok(pool)
    }

    pub fn from_document(document: &SchemaDocument) -> Result<Self, SchemaError> {
        let descriptors = document
            .messages
            .iter()
            .map(|def| {
                def.fields
                    .iter()
                    .try_fold(MessageDescriptor::builder(&def.name), |builder, field| {
                        Ok::<_, SchemaError>(builder.field(field.to_descriptor(&def.name)?))
                    })?
                    .build()
            })
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|e| log::warn!("Rejected schema document: {}", e))?;

        let pool = Self::from_descriptors(descriptors)?;
        log::debug!("Loaded {} message types", pool.len());
        Ok(pool)
    }

    pub fn from_json_str(source: &str) -> Result<Self, SchemaError> {
        let document: SchemaDocument = serde_json::from_str(source)?;
        Self::from_document(&document)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        log::debug!("Reading schema from {}", path.display());
        let source = std::fs::read_to_string(path)?;
        Self::from_json_str(&source)
    }

    /// Registers a message type. References to other types are not checked
    /// until [`DescriptorPool::validate`].
    pub fn add(&mut self, descriptor: MessageDescriptor) -> Result<Arc<MessageDescriptor>, SchemaError> {
        if self.messages.contains_key(descriptor.name()) {
            return Err(SchemaError::DuplicateType(descriptor.name().to_string()));
        }
        let descriptor = Arc::new(descriptor);
        self.messages
            .insert(descriptor.name().to_string(), Arc::clone(&descriptor));
        Ok(descriptor)
    }

    /// Checks that every message-typed field refers to a registered type.
    pub fn validate(&self) -> Result<(), SchemaError> {
        for message in self.messages.values() {
            for field in message.fields() {
                if let Some(type_name) = field.kind().message_type()
                    && !self.messages.contains_key(type_name)
                {
                    let err = SchemaError::UnresolvedType {
                        message: message.name().to_string(),
                        field: field.name().to_string(),
                        type_name: type_name.to_string(),
                    };
                    log::warn!("{}", err);
                    return Err(err);
                }
            }
        }
        Ok(())
    }

    pub fn get(&self, type_name: &str) -> Option<&Arc<MessageDescriptor>> {
        self.messages.get(type_name)
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.messages.contains_key(type_name)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Creates an empty message of the given type.
    pub fn new_message(self: &Arc<Self>, type_name: &str) -> Result<DynamicMessage, SchemaError> {
        DynamicMessage::new(self, type_name)
    }
}
