//! Declared field kinds and cardinalities.
use std::fmt;

/// The declared type of a field, or of the elements of a repeated field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Int32,
    Int64,
    UInt32,
    UInt64,
    Double,
    Float,
    Bool,
    String,
    Bytes,
    /// Enum values are carried as their numeric value.
    Enum,
    /// A nested message of the named type.
    Message(String),
}

impl FieldKind {
    pub fn is_scalar(&self) -> bool {
        !self.is_message()
    }

    pub fn is_message(&self) -> bool {
        matches!(self, FieldKind::Message(_))
    }

    /// The nested message type name, if this is a message kind.
    pub fn message_type(&self) -> Option<&str> {
        match self {
            FieldKind::Message(name) => Some(name),
            _ => None,
        }
    }

    /// Whether values of this kind can be used as map keys.
    pub fn is_valid_map_key(&self) -> bool {
        matches!(
            self,
            FieldKind::Int32
                | FieldKind::Int64
                | FieldKind::UInt32
                | FieldKind::UInt64
                | FieldKind::Bool
                | FieldKind::String
        )
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Int32 => write!(f, "int32"),
            FieldKind::Int64 => write!(f, "int64"),
            FieldKind::UInt32 => write!(f, "uint32"),
            FieldKind::UInt64 => write!(f, "uint64"),
            FieldKind::Double => write!(f, "double"),
            FieldKind::Float => write!(f, "float"),
            FieldKind::Bool => write!(f, "bool"),
            FieldKind::String => write!(f, "string"),
            FieldKind::Bytes => write!(f, "bytes"),
            FieldKind::Enum => write!(f, "enum"),
            FieldKind::Message(name) => write!(f, "message {}", name),
        }
    }
}

/// How many values a field holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Cardinality {
    Singular,
    Repeated,
    /// A key/value map. The field's own kind is the value kind.
    Map { key: FieldKind },
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cardinality::Singular => write!(f, "singular"),
            Cardinality::Repeated => write!(f, "repeated"),
            Cardinality::Map { key } => write!(f, "map<{}, _>", key),
        }
    }
}
