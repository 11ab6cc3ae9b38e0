//! Catalog storage adapters.

mod memory;

pub use memory::InMemoryCatalog;
