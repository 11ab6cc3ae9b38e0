//! Garden Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Template Garden,
//! a catalog of website templates that can be browsed, filtered, sorted and
//! summarised, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           garden-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (CatalogService)             │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │        (Driven: TemplateCatalog)        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    garden-adapters (Infrastructure)     │
//! │ (InMemoryCatalog, FilesystemCatalogLoader)│
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (TemplateRecord, Catalog, QueryFilter) │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use garden_core::{
//!     application::CatalogService,
//!     domain::{Category, QueryFilter, SortKey},
//! };
//!
//! // 1. Describe the query
//! let filter = QueryFilter::builder()
//!     .category(Category::Blog)
//!     .search("tech")
//!     .sort_by(SortKey::Newest)
//!     .build();
//!
//! // 2. Use application service (with an injected catalog adapter)
//! let service = CatalogService::new(catalog);
//! let results = service.query(&filter).unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CatalogService, Submission, SubmissionAction, ports::TemplateCatalog,
    };
    pub use crate::domain::{
        Catalog, Category, CategorySelector, DashboardStats, QueryFilter, SortKey, TemplateDraft,
        TemplateId, TemplateRecord,
    };
    pub use crate::error::{GardenError, GardenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
