// src/engine.rs
use crate::error::Error;
use fieldpath_path::Path;
use fieldpath_resolver::{FieldRef, FieldResolver, ResolveOptions};
use fieldpath_schema::{DescriptorPool, DynamicMessage, Message, SchemaError, Value};
use std::sync::Arc;

/// Ties a schema to resolve options and runs the
/// "parse path → resolve → read/write" sequence.
///
/// The engine itself is immutable and can be shared between threads. Callers
/// must still serialize access to any one message tree for the duration of a
/// resolution and the reads/writes made through it.
#[derive(Debug, Clone)]
pub struct FieldPathEngine {
    pool: Arc<DescriptorPool>,
    resolver: FieldResolver,
}

impl FieldPathEngine {
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    pub fn pool(&self) -> &Arc<DescriptorPool> {
        &self.pool
    }

    pub fn options(&self) -> ResolveOptions {
        self.resolver.options()
    }

    /// Creates an empty message of a type registered in the schema.
    pub fn new_message(&self, type_name: &str) -> Result<DynamicMessage, Error> {
        Ok(self.pool.new_message(type_name)?)
    }

    /// Parses a path and checks that its root type exists in the schema.
    pub fn parse(&self, path: &str) -> Result<Path, Error> {
        let path = Path::parse(path)?;
        if !self.pool.contains(path.type_name()) {
            return Err(SchemaError::UnknownType(path.type_name().to_string()).into());
        }
        Ok(path)
    }

    pub fn resolve<'a, M: Message>(
        &self,
        message: &'a mut M,
        path: &Path,
    ) -> Result<FieldRef<'a, M>, Error> {
        Ok(self.resolver.resolve(message, path)?)
    }

    /// Reads the scalar addressed by `path`.
    pub fn get<M: Message>(&self, message: &mut M, path: &str) -> Result<Value, Error> {
        let path = self.parse(path)?;
        Ok(self.resolve(message, &path)?.get()?)
    }

    /// Writes the scalar addressed by `path`.
    pub fn set<M: Message>(&self, message: &mut M, path: &str, value: Value) -> Result<(), Error> {
        let path = self.parse(path)?;
        Ok(self.resolve(message, &path)?.set(value)?)
    }

    /// Appends a scalar to the repeated field addressed by `path`.
    pub fn append<M: Message>(&self, message: &mut M, path: &str, value: Value) -> Result<(), Error> {
        let path = self.parse(path)?;
        Ok(self.resolve(message, &path)?.append(value)?)
    }

    /// Number of elements in the repeated or map field addressed by `path`.
    pub fn size<M: Message>(&self, message: &mut M, path: &str) -> Result<usize, Error> {
        let path = self.parse(path)?;
        Ok(self.resolve(message, &path)?.size()?)
    }

    pub fn clear<M: Message>(&self, message: &mut M, path: &str) -> Result<(), Error> {
        let path = self.parse(path)?;
        Ok(self.resolve(message, &path)?.clear()?)
    }
}

/// A builder for creating a `FieldPathEngine`.
#[derive(Debug, Default)]
pub struct EngineBuilder {
    pool: Option<Arc<DescriptorPool>>,
    options: ResolveOptions,
}

impl EngineBuilder {
    /// Creates a new `EngineBuilder` with default resolve options and no schema.
    pub fn new() -> Self {
        Default::default()
    }

    /// Loads the schema from a JSON schema document on disk.
    pub fn with_schema_file<P: AsRef<std::path::Path>>(mut self, path: P) -> Result<Self, Error> {
        self.pool = Some(Arc::new(DescriptorPool::from_json_file(path)?));
        Ok(self)
    }

    /// Loads the schema from a JSON schema document held in memory.
    pub fn with_schema_source(mut self, source: &str) -> Result<Self, Error> {
        self.pool = Some(Arc::new(DescriptorPool::from_json_str(source)?));
        Ok(self)
    }

    /// Uses an already-built descriptor pool.
    pub fn with_pool(mut self, pool: impl Into<Arc<DescriptorPool>>) -> Self {
        self.pool = Some(pool.into());
        self
    }

    pub fn with_options(mut self, options: ResolveOptions) -> Self {
        self.options = options;
        self
    }

    /// Whether resolution may materialize unset nested messages.
    pub fn create_missing(mut self, create_missing: bool) -> Self {
        self.options = self.options.create_missing(create_missing);
        self
    }

    pub fn build(self) -> Result<FieldPathEngine, Error> {
        let pool = self
            .pool
            .ok_or_else(|| Error::Config("no schema configured".to_string()))?;
        log::debug!(
            "Building engine over {} message types (create_missing={})",
            pool.len(),
            self.options.create_missing
        );
        Ok(FieldPathEngine {
            pool,
            resolver: FieldResolver::new(self.options),
        })
    }
}
