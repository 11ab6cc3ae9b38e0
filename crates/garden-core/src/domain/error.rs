// ============================================================================
// domain/error.rs - CATALOG ERROR DOMAIN
// ============================================================================

use thiserror::Error;

use crate::domain::entities::draft::FieldViolation;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (callers keep them around for display)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid template record: {0}")]
    InvalidRecord(String),

    #[error("Template draft is invalid: {}", summarize(.violations))]
    InvalidDraft { violations: Vec<FieldViolation> },

    #[error("Unknown category '{value}'")]
    UnknownCategory { value: String },

    #[error("Unknown sort key '{value}'")]
    UnknownSortKey { value: String },

    #[error("Invalid timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },

    // ========================================================================
    // Constraint Violations (409-level equivalent)
    // ========================================================================
    #[error("Duplicate template id '{id}' in catalog")]
    DuplicateId { id: String },

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidDraft { violations } => {
                let mut out: Vec<String> = violations
                    .iter()
                    .map(|v| format!("  • {}: {}", v.field, v.message))
                    .collect();
                out.push("Fix the fields above and submit again".into());
                out
            }
            Self::UnknownCategory { .. } => vec![
                "Valid categories:".into(),
                "  • e-commerce, portfolio, blog, business, personal, landing, other".into(),
                "Try: garden categories".into(),
            ],
            Self::UnknownSortKey { .. } => {
                vec!["Valid sort keys: newest, oldest, name".into()]
            }
            Self::DuplicateId { id } => vec![
                format!("Two catalog entries share the id '{}'", id),
                "Template ids must be unique across the catalog".into(),
            ],
            Self::InvalidTimestamp { .. } => vec![
                "Timestamps must be ISO-8601, e.g. 2025-02-15T09:00:00.000Z".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidRecord(_)
            | Self::InvalidDraft { .. }
            | Self::UnknownCategory { .. }
            | Self::UnknownSortKey { .. }
            | Self::InvalidTimestamp { .. }
            | Self::MissingRequiredField { .. } => ErrorCategory::Validation,
            Self::DuplicateId { .. } => ErrorCategory::Conflict,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
    Internal,
}
