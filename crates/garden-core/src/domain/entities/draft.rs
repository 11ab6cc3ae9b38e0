//! Form values for creating or editing a template.
//!
//! A [`TemplateDraft`] is what an editor submits: loosely typed (the category
//! arrives as a string from a select box) and possibly invalid. Validation
//! collects *every* violated field so a form can show all messages at once.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::record::{TemplateId, TemplateRecord},
    error::DomainError,
    value_objects::Category,
};

pub const NAME_MIN_CHARS: usize = 3;
pub const DESCRIPTION_MIN_CHARS: usize = 10;

/// One failed form constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl FieldViolation {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Editable fields of a template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDraft {
    pub name: String,
    pub description: String,
    pub category: Option<String>,
    #[serde(default)]
    pub is_published: bool,
    pub image: Option<String>,
}

impl TemplateDraft {
    /// Pre-fill a draft from an existing record (the edit form's initial state).
    pub fn from_record(record: &TemplateRecord) -> Self {
        Self {
            name: record.name.clone(),
            description: record.description.clone(),
            category: Some(record.category.as_str().to_string()),
            is_published: record.is_published,
            image: Some(record.image.clone()),
        }
    }

    /// Check every field and return the parsed category on success.
    pub fn validate(&self) -> Result<Category, DomainError> {
        let mut violations = Vec::new();

        if self.name.chars().count() < NAME_MIN_CHARS {
            violations.push(FieldViolation::new(
                "name",
                format!("Name must be at least {NAME_MIN_CHARS} characters."),
            ));
        }

        if self.description.chars().count() < DESCRIPTION_MIN_CHARS {
            violations.push(FieldViolation::new(
                "description",
                format!("Description must be at least {DESCRIPTION_MIN_CHARS} characters."),
            ));
        }

        let category = match self.category.as_deref() {
            None | Some("") => {
                violations.push(FieldViolation::new("category", "Please select a category."));
                None
            }
            Some(raw) => match raw.parse::<Category>() {
                Ok(c) => Some(c),
                Err(_) => {
                    violations.push(FieldViolation::new(
                        "category",
                        format!("'{raw}' is not a known category."),
                    ));
                    None
                }
            },
        };

        match category {
            Some(c) if violations.is_empty() => Ok(c),
            _ => Err(DomainError::InvalidDraft { violations }),
        }
    }

    /// Materialise the draft as a record.
    ///
    /// Validates first; `created_at` is kept from the original on edit.
    pub fn into_record(
        self,
        id: TemplateId,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<TemplateRecord, DomainError> {
        let category = self.validate()?;

        TemplateRecord::builder()
            .id(id)
            .name(self.name)
            .description(self.description)
            .category(category)
            .image(self.image.unwrap_or_default())
            .created_at(created_at)
            .updated_at(updated_at)
            .published(self.is_published)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> TemplateDraft {
        TemplateDraft {
            name: "Agency Starter".into(),
            description: "Landing page for small agencies.".into(),
            category: Some("landing".into()),
            is_published: false,
            image: None,
        }
    }

    fn violated_fields(draft: &TemplateDraft) -> Vec<&'static str> {
        match draft.validate() {
            Err(DomainError::InvalidDraft { violations }) => {
                violations.iter().map(|v| v.field).collect()
            }
            other => panic!("expected InvalidDraft, got {other:?}"),
        }
    }

    #[test]
    fn valid_draft_yields_category() {
        assert_eq!(valid().validate(), Ok(Category::Landing));
    }

    #[test]
    fn empty_draft_reports_every_field() {
        let draft = TemplateDraft::default();
        assert_eq!(violated_fields(&draft), ["name", "description", "category"]);
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        let draft = TemplateDraft {
            name: "Grü".into(),
            ..valid()
        };
        assert!(draft.validate().is_ok());

        let short = TemplateDraft {
            name: "Gr".into(),
            ..valid()
        };
        assert_eq!(violated_fields(&short), ["name"]);
    }

    #[test]
    fn description_needs_ten_characters() {
        let draft = TemplateDraft {
            description: "Too short".into(),
            ..valid()
        };
        assert_eq!(violated_fields(&draft), ["description"]);
    }

    #[test]
    fn unknown_category_is_a_violation() {
        let draft = TemplateDraft {
            category: Some("Blog".into()),
            ..valid()
        };
        assert_eq!(violated_fields(&draft), ["category"]);
    }

    #[test]
    fn into_record_keeps_timestamps() {
        let created = crate::domain::parse_timestamp("2025-01-10T11:30:00.000Z").unwrap();
        let updated = crate::domain::parse_timestamp("2025-05-01T00:00:00Z").unwrap();

        let record = valid()
            .into_record(TemplateId::parse("42").unwrap(), created, updated)
            .unwrap();

        assert_eq!(record.id.as_str(), "42");
        assert_eq!(record.category, Category::Landing);
        assert_eq!(record.created_at, created);
        assert_eq!(record.updated_at, updated);
    }
}
