//! Template record entity.
//!
//! A [`TemplateRecord`] describes one reusable website design: metadata only,
//! no markup payload. Records are immutable once they sit in a
//! [`Catalog`](super::catalog::Catalog); edits produce new values.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, value_objects::Category};

// ── TemplateId ────────────────────────────────────────────────────────────────

/// Opaque record identifier.
///
/// Invariant: never empty. Uniqueness is a catalog-level invariant, enforced
/// by [`Catalog::new`](super::catalog::Catalog::new).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateId(String);

impl TemplateId {
    /// Validate and wrap an id. Blank ids are rejected.
    pub fn parse(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::InvalidRecord("template id cannot be empty".into()));
        }
        Ok(Self(id))
    }

    /// Fresh id for a record that does not exist yet.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for TemplateId {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TemplateId {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl AsRef<str> for TemplateId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ── Timestamps ────────────────────────────────────────────────────────────────

/// Parse an ISO-8601 / RFC 3339 timestamp into UTC.
///
/// Accepts the `2025-02-15T09:00:00.000Z` form used by the seed data as well
/// as explicit offsets.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, DomainError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DomainError::InvalidTimestamp {
            value: value.to_string(),
            reason: e.to_string(),
        })
}

// ── TemplateRecord ────────────────────────────────────────────────────────────

/// A catalog entry.
///
/// Serialises with camelCase keys (`createdAt`, `isPublished`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRecord {
    pub id: TemplateId,
    pub name: String,
    pub description: String,
    pub category: Category,
    /// Local asset path or remote URL. Not validated.
    pub image: String,
    pub created_at: DateTime<Utc>,
    /// Assumed `>= created_at`; never enforced.
    pub updated_at: DateTime<Utc>,
    pub is_published: bool,
}

impl TemplateRecord {
    pub fn builder() -> TemplateRecordBuilder {
        TemplateRecordBuilder::default()
    }

    /// Structural checks for a single record.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.id.as_str().trim().is_empty() {
            return Err(DomainError::InvalidRecord("template id cannot be empty".into()));
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidRecord(format!(
                "template '{}' has an empty name",
                self.id
            )));
        }
        Ok(())
    }

    /// Case-insensitive substring match against name or description.
    ///
    /// `needle` must already be lower-cased.
    pub fn matches_search(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

impl fmt::Display for TemplateRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.id, self.category)
    }
}

/// Builder for [`TemplateRecord`].
///
/// `id`, `name`, `category` and `created_at` are required; `updated_at`
/// defaults to `created_at`.
#[derive(Debug, Default)]
pub struct TemplateRecordBuilder {
    id: Option<TemplateId>,
    name: Option<String>,
    description: Option<String>,
    category: Option<Category>,
    image: Option<String>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
    is_published: bool,
}

impl TemplateRecordBuilder {
    pub fn id(mut self, id: TemplateId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = Some(at);
        self
    }

    pub fn updated_at(mut self, at: DateTime<Utc>) -> Self {
        self.updated_at = Some(at);
        self
    }

    pub fn published(mut self, is_published: bool) -> Self {
        self.is_published = is_published;
        self
    }

    pub fn build(self) -> Result<TemplateRecord, DomainError> {
        let id = self.id.ok_or(DomainError::MissingRequiredField { field: "id" })?;
        let name = self
            .name
            .ok_or(DomainError::MissingRequiredField { field: "name" })?;
        let category = self
            .category
            .ok_or(DomainError::MissingRequiredField { field: "category" })?;
        let created_at = self
            .created_at
            .ok_or(DomainError::MissingRequiredField { field: "createdAt" })?;

        let record = TemplateRecord {
            id,
            name,
            description: self.description.unwrap_or_default(),
            category,
            image: self.image.unwrap_or_default(),
            created_at,
            updated_at: self.updated_at.unwrap_or(created_at),
            is_published: self.is_published,
        };
        record.validate()?;
        Ok(record)
    }
}
