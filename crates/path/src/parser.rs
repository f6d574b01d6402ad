//! A `nom`-based parser for the bracketed path grammar.
//!
//! ```text
//! path      := typeName selector*
//! typeName  := one or more characters other than '[' and ']'
//! selector  := '[' content ']'
//! content   := one or more characters other than '[' and ']'
//! ```
use super::ast::Path;
use crate::error::PathError;
use nom::{
    IResult, Parser,
    bytes::complete::is_not,
    character::complete::char,
    multi::many0,
    sequence::{delimited, pair},
};

// --- Main Public Parser ---

pub fn parse_path(input: &str) -> Result<Path, PathError> {
    if input.is_empty() {
        return Err(PathError::malformed(input, 0, "empty path"));
    }

    match path(input) {
        Ok(("", (type_name, selectors))) => Ok(Path::from_parts(type_name, selectors)),
        Ok((rest, _)) => Err(diagnose(input, rest)),
        Err(_) => Err(diagnose(input, input)),
    }
}

// --- Combinators ---

fn type_name(input: &str) -> IResult<&str, &str> {
    is_not("[]").parse(input)
}

fn selector(input: &str) -> IResult<&str, &str> {
    delimited(char('['), is_not("[]"), char(']')).parse(input)
}

fn path(input: &str) -> IResult<&str, (&str, Vec<&str>)> {
    pair(type_name, many0(selector)).parse(input)
}

// --- Error Reporting ---

/// Explains why parsing stopped at `rest`.
fn diagnose(input: &str, rest: &str) -> PathError {
    let offset = input.len() - rest.len();

    let reason = if rest.starts_with(']') {
        "unmatched ']'"
    } else if offset == 0 {
        "missing type name"
    } else if rest.starts_with("[]") {
        "empty selector"
    } else if let Some(body) = rest.strip_prefix('[') {
        match body.find(|c: char| c == '[' || c == ']') {
            Some(i) if body[i..].starts_with('[') => "unexpected '[' inside selector",
            _ => "unterminated selector",
        }
    } else {
        "unexpected characters after last selector"
    };

    PathError::malformed(input, offset, reason)
}
