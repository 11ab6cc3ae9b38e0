//! Application layer errors.
//!
//! These errors represent failures in orchestration, not catalog rules.
//! Rule violations are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No record carries the requested id.
    #[error("Template not found: {id}")]
    TemplateNotFound { id: String },

    /// The catalog adapter could not produce a catalog.
    #[error("Template catalog unavailable: {reason}")]
    CatalogUnavailable { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { id } => vec![
                format!("No template has the id '{}'", id),
                "Try: garden list to see available templates".into(),
            ],
            Self::CatalogUnavailable { reason } => vec![
                format!("Catalog could not be loaded: {}", reason),
                "Check GARDEN_CATALOG_DIR or the catalog.dir config key".into(),
                "Unset both to fall back to the built-in catalog".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::CatalogUnavailable { .. } => ErrorCategory::Configuration,
        }
    }
}
