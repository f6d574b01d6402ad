//! Textual addresses into schema-typed messages.
//!
//! A path names a root message type followed by bracketed selectors, e.g.
//! `Person[addresses][0][city]`. Parsing is pure and does not consult any
//! schema, so a parsed [`Path`] can be cached and shared across threads.

pub mod ast;
pub mod error;
mod parser;

// --- Public API ---
pub use ast::Path;
pub use error::PathError;
pub use parser::parse_path;
