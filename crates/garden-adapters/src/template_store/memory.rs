//! In-memory template catalog with the built-in seed.

use std::sync::Arc;

use garden_core::{
    application::ports::TemplateCatalog,
    domain::{Catalog, DomainError, TemplateRecord},
    error::GardenResult,
};

use crate::builtin_templates::{self, BUILTIN_SOURCE};

/// Immutable in-memory catalog.
///
/// Cloning shares the underlying records; nothing is ever written back.
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    inner: Arc<Catalog>,
    source: String,
}

impl InMemoryCatalog {
    /// Wrap an already validated catalog.
    pub fn new(catalog: Catalog, source: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(catalog),
            source: source.into(),
        }
    }

    /// Catalog holding the eight built-in templates.
    pub fn with_builtin() -> Result<Self, DomainError> {
        Ok(Self::new(builtin_templates::seed_catalog()?, BUILTIN_SOURCE))
    }

    /// Validate `records` and wrap them.
    pub fn from_records(
        records: impl IntoIterator<Item = TemplateRecord>,
    ) -> Result<Self, DomainError> {
        Ok(Self::new(Catalog::new(records)?, "memory"))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.inner
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl TemplateCatalog for InMemoryCatalog {
    fn snapshot(&self) -> GardenResult<Catalog> {
        Ok(Catalog::clone(&self.inner))
    }

    fn source(&self) -> String {
        self.source.clone()
    }
}
