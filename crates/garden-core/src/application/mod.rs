//! Application layer for Template Garden.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (CatalogService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! catalog rules itself. All rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    CatalogService,
    Submission, // DTO for simulated writes
    SubmissionAction,
};

// Re-export port traits (for adapter implementation)
pub use ports::TemplateCatalog;

pub use error::ApplicationError;
