//! Walks a parsed path against a message tree.
use crate::error::ResolveError;
use crate::field_ref::FieldRef;
use crate::options::ResolveOptions;
use fieldpath_path::Path;
use fieldpath_schema::Message;

/// Resolves paths to field locations under a fixed set of options.
///
/// A resolver holds no tree state and can be reused for any number of
/// resolutions; each call borrows its message tree exclusively for the
/// lifetime of the returned [`FieldRef`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldResolver {
    options: ResolveOptions,
}

impl FieldResolver {
    pub fn new(options: ResolveOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ResolveOptions {
        self.options
    }

    /// Walks every selector of `path` starting at `root`.
    ///
    /// The root's type name must equal the path's type name; this is checked
    /// before any selector is consumed. Nested messages materialized before a
    /// later selector fails stay attached to the tree.
    pub fn resolve<'a, M: Message>(
        &self,
        root: &'a mut M,
        path: &Path,
    ) -> Result<FieldRef<'a, M>, ResolveError> {
        if root.type_name() != path.type_name() {
            return Err(ResolveError::TypeMismatch {
                expected: path.type_name().to_string(),
                actual: root.type_name().to_string(),
            });
        }

        log::debug!("Resolving '{}' (create_missing={})", path, self.options.create_missing);

        let mut cursor = FieldRef::root(root);
        for selector in path.iter() {
            log::trace!("  [{}] against {}", selector, cursor.role());
            cursor = cursor.step(selector, &self.options)?;
        }

        log::debug!(
            "Resolved '{}' to {} (index: {:?})",
            path,
            cursor.role(),
            cursor.array_index()
        );
        Ok(cursor)
    }
}

/// Resolves `path` against `root` with default options.
pub fn resolve<'a, M: Message>(root: &'a mut M, path: &Path) -> Result<FieldRef<'a, M>, ResolveError> {
    FieldResolver::default().resolve(root, path)
}
