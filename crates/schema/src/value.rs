//! Scalar field values.
use crate::kind::FieldKind;
use std::fmt;

/// A single scalar value read from or written to a message field.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    I32(i32),
    I64(i64),
    U32(u32),
    U64(u64),
    F64(f64),
    F32(f32),
    Bool(bool),
    String(String),
    Bytes(Vec<u8>),
    Enum(i32),
}

impl Value {
    /// The field kind this value belongs to.
    pub fn kind(&self) -> FieldKind {
        match self {
            Value::I32(_) => FieldKind::Int32,
            Value::I64(_) => FieldKind::Int64,
            Value::U32(_) => FieldKind::UInt32,
            Value::U64(_) => FieldKind::UInt64,
            Value::F64(_) => FieldKind::Double,
            Value::F32(_) => FieldKind::Float,
            Value::Bool(_) => FieldKind::Bool,
            Value::String(_) => FieldKind::String,
            Value::Bytes(_) => FieldKind::Bytes,
            Value::Enum(_) => FieldKind::Enum,
        }
    }

    /// Returns `true` if this value can be stored in a field of `kind`.
    pub fn matches(&self, kind: &FieldKind) -> bool {
        self.kind() == *kind
    }

    /// The value an unset singular field of `kind` reads as.
    /// Message kinds have no scalar default.
    pub fn default_for(kind: &FieldKind) -> Option<Value> {
        let value = match kind {
            FieldKind::Int32 => Value::I32(0),
            FieldKind::Int64 => Value::I64(0),
            FieldKind::UInt32 => Value::U32(0),
            FieldKind::UInt64 => Value::U64(0),
            FieldKind::Double => Value::F64(0.0),
            FieldKind::Float => Value::F32(0.0),
            FieldKind::Bool => Value::Bool(false),
            FieldKind::String => Value::String(String::new()),
            FieldKind::Bytes => Value::Bytes(Vec::new()),
            FieldKind::Enum => Value::Enum(0),
            FieldKind::Message(_) => return None,
        };
        Some(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::I32(v) | Value::Enum(v) => write!(f, "{}", v),
            Value::I64(v) => write!(f, "{}", v),
            Value::U32(v) => write!(f, "{}", v),
            Value::U64(v) => write!(f, "{}", v),
            Value::F64(v) => write!(f, "{}", v),
            Value::F32(v) => write!(f, "{}", v),
            Value::Bool(v) => write!(f, "{}", v),
            Value::String(s) => write!(f, "{:?}", s),
            Value::Bytes(b) => write!(f, "<{} bytes>", b.len()),
        }
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::I32(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::I64(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::U32(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::U64(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::F64(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::F32(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Bytes(b)
    }
}
