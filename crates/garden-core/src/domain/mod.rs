// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Template Garden.
//!
//! This module contains pure catalog logic. All I/O (loading catalogs from
//! disk, printing) is handled via ports (traits) defined in the application
//! layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities**: Records and catalogs never change after construction
//! - **Rich domain model**: Behavior lives in entities, not services
//!
// Public API - what the world sees
pub mod collation;
pub mod entities;
pub mod error;
pub mod filter;
pub mod query;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    catalog::Catalog,
    dashboard::{DEFAULT_RECENT_LIMIT, DashboardStats},
    draft::{FieldViolation, TemplateDraft},
    record::{TemplateId, TemplateRecord, TemplateRecordBuilder, parse_timestamp},
};

pub use error::{DomainError, ErrorCategory};

pub use filter::{QueryFilter, QueryFilterBuilder};

pub use query::{find_by_id, list_categories, query};

pub use value_objects::{Category, CategorySelector, SortKey};
