/// Controls side effects of path resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Materialize unset singular message fields while descending.
    /// When disabled, resolution fails with `FieldNotSet` instead and the
    /// message tree is left unchanged.
    pub create_missing: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            create_missing: true,
        }
    }
}

impl ResolveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for callers that must not grow the message tree.
    pub fn read_only() -> Self {
        Self {
            create_missing: false,
        }
    }

    pub fn create_missing(mut self, create_missing: bool) -> Self {
        self.create_missing = create_missing;
        self
    }
}
