//! The semantic role of the current position during traversal.
use fieldpath_schema::{Cardinality, FieldDescriptor, FieldKind};
use std::fmt;

/// What kind of container the next selector is interpreted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParentRole {
    /// A message: the next selector is a field name.
    Message,
    /// A repeated field: the next selector is an element index.
    Array,
    /// A map field. Selectors into maps are not supported.
    Map,
    /// A scalar value: no further selector is allowed.
    Scalar,
}

impl ParentRole {
    /// The role a field takes on once it has been selected by name.
    ///
    /// Maps are checked before repeated fields and singular messages.
    pub fn of_field(field: &FieldDescriptor) -> Self {
        match (field.cardinality(), field.kind()) {
            (Cardinality::Map { .. }, _) => ParentRole::Map,
            (Cardinality::Repeated, _) => ParentRole::Array,
            (Cardinality::Singular, FieldKind::Message(_)) => ParentRole::Message,
            (Cardinality::Singular, _) => ParentRole::Scalar,
        }
    }

    /// The role of one element of a repeated field of `kind`.
    pub fn of_element(kind: &FieldKind) -> Self {
        match kind {
            FieldKind::Message(_) => ParentRole::Message,
            FieldKind::Int32
            | FieldKind::Int64
            | FieldKind::UInt32
            | FieldKind::UInt64
            | FieldKind::Double
            | FieldKind::Float
            | FieldKind::Bool
            | FieldKind::String
            | FieldKind::Bytes
            | FieldKind::Enum => ParentRole::Scalar,
        }
    }
}

impl fmt::Display for ParentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParentRole::Message => write!(f, "message"),
            ParentRole::Array => write!(f, "array"),
            ParentRole::Map => write!(f, "map"),
            ParentRole::Scalar => write!(f, "scalar"),
        }
    }
}
