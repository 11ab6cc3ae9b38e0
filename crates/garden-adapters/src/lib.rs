//! Infrastructure adapters for Template Garden.
//!
//! This crate implements the ports defined in `garden-core::application::ports`.
//! It contains the built-in seed catalog and all filesystem I/O.

pub mod builtin_templates;
pub mod template_loader;
pub mod template_store;

// Re-export commonly used adapters
pub use builtin_templates::{resolve_catalog, seed_catalog, seed_records};
pub use template_loader::FilesystemCatalogLoader;
pub use template_store::InMemoryCatalog;
