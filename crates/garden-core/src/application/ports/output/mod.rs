//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `garden-adapters` crate provides implementations.

use crate::domain::Catalog;
use crate::error::GardenResult;

/// Port for obtaining the template catalog.
///
/// Implemented by:
/// - `garden_adapters::InMemoryCatalog` (built-in seed or loaded manifests)
///
/// ## Design Notes
///
/// - Read-only: there is no write path, the catalog is immutable
/// - `snapshot` is cheap; a `Catalog` clone shares its records
#[cfg_attr(test, mockall::automock)]
pub trait TemplateCatalog: Send + Sync {
    /// The current catalog.
    fn snapshot(&self) -> GardenResult<Catalog>;

    /// Human-readable origin of the records, for logs.
    fn source(&self) -> String;
}
