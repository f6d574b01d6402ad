//! The resolved field reference and its accessors.
use crate::error::ResolveError;
use crate::options::ResolveOptions;
use crate::role::ParentRole;
use fieldpath_schema::{FieldDescriptor, FieldKind, Message, Value};
use std::sync::Arc;

/// A location inside a message tree, produced by walking a path.
///
/// The reference borrows the tree for `'a` and owns none of its nodes.
/// What it addresses depends on [`FieldRef::role`]:
///
/// - `Message`: the whole message returned by [`FieldRef::message`] (the root
///   when no field was selected).
/// - `Scalar`: the field [`FieldRef::field`] on that message, or one element
///   of it when [`FieldRef::array_index`] is set.
/// - `Array` / `Map`: the whole repeated or map field.
#[derive(Debug)]
pub struct FieldRef<'a, M: Message> {
    message: &'a mut M,
    field: Option<Arc<FieldDescriptor>>,
    array_index: Option<usize>,
    role: ParentRole,
}

impl<'a, M: Message> FieldRef<'a, M> {
    pub(crate) fn root(message: &'a mut M) -> Self {
        Self {
            message,
            field: None,
            array_index: None,
            role: ParentRole::Message,
        }
    }

    /// Consumes one selector, interpreting it according to the current role.
    pub(crate) fn step(self, selector: &str, options: &ResolveOptions) -> Result<Self, ResolveError> {
        match self.role {
            ParentRole::Message => self.select_field(selector, options),
            ParentRole::Array => self.select_element(selector),
            ParentRole::Map => Err(ResolveError::Unsupported {
                field: self.field_name(),
                selector: selector.to_string(),
            }),
            ParentRole::Scalar => Err(ResolveError::InvalidPath {
                at: selector.to_string(),
                reason: "a scalar field cannot have child selectors",
            }),
        }
    }

    fn select_field(self, selector: &str, options: &ResolveOptions) -> Result<Self, ResolveError> {
        let FieldRef { message, .. } = self;
        let field = message
            .descriptor()
            .field_by_name(selector)
            .cloned()
            .ok_or_else(|| ResolveError::FieldNotFound {
                message: message.type_name().to_string(),
                field: selector.to_string(),
            })?;

        let role = ParentRole::of_field(&field);
        let message = match role {
            ParentRole::Message => {
                if !options.create_missing && !message.has_field(&field) {
                    return Err(ResolveError::FieldNotSet {
                        field: field.name().to_string(),
                    });
                }
                message.mutable_message(&field)?
            }
            ParentRole::Array | ParentRole::Map | ParentRole::Scalar => message,
        };

        Ok(FieldRef {
            message,
            field: Some(field),
            array_index: None,
            role,
        })
    }

    fn select_element(self, selector: &str) -> Result<Self, ResolveError> {
        let FieldRef { message, field, .. } = self;
        let Some(field) = field else {
            return Err(ResolveError::InvalidPath {
                at: selector.to_string(),
                reason: "index selector without a repeated field",
            });
        };

        let index = parse_index(selector).ok_or_else(|| ResolveError::InvalidIndex {
            field: field.name().to_string(),
            selector: selector.to_string(),
        })?;

        let size = message.field_size(&field);
        if index >= size {
            return Err(ResolveError::IndexOutOfRange {
                field: field.name().to_string(),
                index,
                size,
            });
        }

        let role = ParentRole::of_element(field.kind());
        let message = match role {
            ParentRole::Message => message.mutable_repeated_message(&field, index)?,
            ParentRole::Scalar | ParentRole::Array | ParentRole::Map => message,
        };

        Ok(FieldRef {
            message,
            field: Some(field),
            array_index: Some(index),
            role,
        })
    }

    pub fn role(&self) -> ParentRole {
        self.role
    }

    /// The most recently selected field, or `None` at the root.
    pub fn field(&self) -> Option<&FieldDescriptor> {
        self.field.as_deref()
    }

    pub fn array_index(&self) -> Option<usize> {
        self.array_index
    }

    /// Returns `true` if no field was selected.
    pub fn is_root(&self) -> bool {
        self.field.is_none()
    }

    /// The message the reference points into. For the `Message` role this is
    /// the addressed message itself; otherwise it holds the addressed field.
    pub fn message(&self) -> &M {
        &*self.message
    }

    pub fn message_mut(&mut self) -> &mut M {
        &mut *self.message
    }

    pub fn into_message(self) -> &'a mut M {
        self.message
    }

    /// The declared kind of the resolved field.
    pub fn kind(&self) -> Result<&FieldKind, ResolveError> {
        self.field
            .as_deref()
            .map(FieldDescriptor::kind)
            .ok_or(ResolveError::NoFieldSpecified)
    }

    /// Reads the addressed scalar or array element.
    pub fn get(&self) -> Result<Value, ResolveError> {
        let field = self.expect_role(ParentRole::Scalar, "only scalar fields can be read")?;
        let value = match self.array_index {
            Some(index) => self.message.get_repeated(&field, index)?,
            None => self.message.get(&field)?,
        };
        Ok(value)
    }

    /// Writes the addressed scalar or array element.
    pub fn set(&mut self, value: Value) -> Result<(), ResolveError> {
        let field = self.expect_role(ParentRole::Scalar, "only scalar fields can be written")?;
        match self.array_index {
            Some(index) => self.message.set_repeated(&field, index, value)?,
            None => self.message.set(&field, value)?,
        }
        Ok(())
    }

    /// Number of elements in the addressed repeated or map field.
    pub fn size(&self) -> Result<usize, ResolveError> {
        match (&self.field, self.role) {
            (Some(field), ParentRole::Array | ParentRole::Map) => Ok(self.message.field_size(field)),
            _ => Err(self.invalid("only repeated and map fields have a size")),
        }
    }

    /// Appends a scalar to the addressed repeated scalar field.
    pub fn append(&mut self, value: Value) -> Result<(), ResolveError> {
        let field = self.expect_role(ParentRole::Array, "can only append to a repeated field")?;
        if field.is_message() {
            return Err(self.invalid("use append_message for repeated message fields"));
        }
        self.message.add(&field, value)?;
        Ok(())
    }

    /// Appends an empty element to the addressed repeated message field.
    pub fn append_message(&mut self) -> Result<&mut M, ResolveError> {
        let field = self.expect_role(ParentRole::Array, "can only append to a repeated field")?;
        if !field.is_message() {
            return Err(self.invalid("use append for repeated scalar fields"));
        }
        Ok(self.message.add_message(&field)?)
    }

    /// Clears the addressed location. A message is emptied in place and stays
    /// attached to its parent.
    pub fn clear(&mut self) -> Result<(), ResolveError> {
        match (self.role, self.field.clone(), self.array_index) {
            (ParentRole::Message, _, _) => {
                self.message.clear();
                Ok(())
            }
            (ParentRole::Scalar, Some(_), Some(_)) => {
                Err(self.invalid("cannot clear a single array element"))
            }
            (ParentRole::Scalar | ParentRole::Array | ParentRole::Map, Some(field), _) => {
                self.message.clear_field(&field)?;
                Ok(())
            }
            (ParentRole::Scalar | ParentRole::Array | ParentRole::Map, None, _) => {
                Err(self.invalid("no field to clear"))
            }
        }
    }

    fn expect_role(
        &self,
        role: ParentRole,
        reason: &'static str,
    ) -> Result<Arc<FieldDescriptor>, ResolveError> {
        match &self.field {
            Some(field) if self.role == role => Ok(Arc::clone(field)),
            _ => Err(self.invalid(reason)),
        }
    }

    fn invalid(&self, reason: &'static str) -> ResolveError {
        ResolveError::InvalidPath {
            at: self.location(),
            reason,
        }
    }

    fn field_name(&self) -> String {
        self.field
            .as_deref()
            .map(|field| field.name().to_string())
            .unwrap_or_default()
    }

    fn location(&self) -> String {
        match (&self.field, self.array_index) {
            (Some(field), Some(index)) => format!("{}[{}]", field.name(), index),
            (Some(field), None) => field.name().to_string(),
            (None, _) => self.message.type_name().to_string(),
        }
    }
}

/// Parses a non-negative decimal index. Signs, whitespace and other
/// characters are rejected.
fn parse_index(selector: &str) -> Option<usize> {
    if selector.is_empty() || !selector.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    selector.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::parse_index;

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("0"), Some(0));
        assert_eq!(parse_index("042"), Some(42));
        assert_eq!(parse_index("-1"), None);
        assert_eq!(parse_index("+1"), None);
        assert_eq!(parse_index(" 1"), None);
        assert_eq!(parse_index("1abc"), None);
        assert_eq!(parse_index("abc"), None);
        assert_eq!(parse_index("99999999999999999999999"), None);
    }
}
