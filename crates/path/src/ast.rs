//! Defines the parsed representation of a field path.
use crate::error::PathError;
use crate::parser;
use itertools::Itertools;
use std::fmt;
use std::str::FromStr;

/// A parsed path of the form `Type[sel1][sel2]...`.
///
/// Selectors are opaque strings at this level. Whether a selector names a
/// field or an array index is decided by whoever walks the path against a
/// schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    type_name: String,
    selectors: Vec<String>,
}

impl Path {
    /// Parses a raw path string.
    pub fn parse(input: &str) -> Result<Self, PathError> {
        parser::parse_path(input)
    }

    /// Creates a path addressing the whole message of the given type.
    pub fn new(type_name: impl Into<String>) -> Result<Self, PathError> {
        let type_name = type_name.into();
        if type_name.is_empty() {
            return Err(PathError::malformed(&type_name, 0, "missing type name"));
        }
        if let Some(offset) = type_name.find(is_bracket) {
            return Err(PathError::malformed(
                &type_name,
                offset,
                "brackets are not allowed in a type name",
            ));
        }
        Ok(Self {
            type_name,
            selectors: Vec::new(),
        })
    }

    /// Appends one selector, returning the extended path.
    ///
    /// Errors report the path text with the rejected selector appended, and
    /// the offset within that text.
    pub fn with_selector(mut self, selector: impl Into<String>) -> Result<Self, PathError> {
        let selector = selector.into();
        let base = self.to_string();
        if selector.is_empty() {
            let text = format!("{}[]", base);
            return Err(PathError::malformed(&text, base.len(), "empty selector"));
        }
        if let Some(i) = selector.find(is_bracket) {
            let text = format!("{}[{}]", base, selector);
            return Err(PathError::malformed(
                &text,
                base.len() + 1 + i,
                "brackets are not allowed in a selector",
            ));
        }
        self.selectors.push(selector);
        Ok(self)
    }

    pub(crate) fn from_parts(type_name: &str, selectors: Vec<&str>) -> Self {
        Self {
            type_name: type_name.to_string(),
            selectors: selectors.into_iter().map(str::to_string).collect(),
        }
    }

    /// The schema type name of the root message.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The ordered selectors following the type name.
    pub fn selectors(&self) -> &[String] {
        &self.selectors
    }

    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }

    /// Returns `true` when the path addresses the root message itself.
    pub fn is_root(&self) -> bool {
        self.selectors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.selectors.iter().map(String::as_str)
    }
}

fn is_bracket(c: char) -> bool {
    c == '[' || c == ']'
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            self.type_name,
            self.selectors
                .iter()
                .format_with("", |sel, f| f(&format_args!("[{}]", sel)))
        )
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Path::parse(s)
    }
}

impl TryFrom<&str> for Path {
    type Error = PathError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Path::parse(s)
    }
}
