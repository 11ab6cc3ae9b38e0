//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "browse templates" or "submit an edit".

pub mod catalog_service;

pub use catalog_service::{CatalogService, Submission, SubmissionAction};
