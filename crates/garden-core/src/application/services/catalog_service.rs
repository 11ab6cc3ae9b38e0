//! Catalog Service - main application orchestrator.
//!
//! This service answers every question the dashboard asks of the catalog:
//! 1. Browse (category / search / sort query)
//! 2. Look up a single template for preview or editing
//! 3. Summarise the catalog for the dashboard
//! 4. Accept create / update / delete submissions
//!
//! Submissions are validated and acknowledged but never written back: the
//! catalog is immutable for the lifetime of the process.

use std::fmt;

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, ports::TemplateCatalog},
    domain::{
        self, Category, DashboardStats, QueryFilter, TemplateDraft, TemplateId, TemplateRecord,
    },
    error::GardenResult,
};

/// Kind of simulated write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionAction {
    Create,
    Update,
    Delete,
}

impl fmt::Display for SubmissionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Create => "created",
            Self::Update => "updated",
            Self::Delete => "deleted",
        })
    }
}

/// Acknowledgement of an accepted submission.
///
/// `record` is the record as it would look after the write (for deletes, the
/// record that would be removed). `persisted` is always `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub action: SubmissionAction,
    pub record: TemplateRecord,
    pub persisted: bool,
}

/// Main catalog service.
pub struct CatalogService {
    catalog: Box<dyn TemplateCatalog>,
}

impl CatalogService {
    /// Create a new catalog service with the given adapter.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use garden_core::application::CatalogService;
    ///
    /// let service = CatalogService::new(
    ///     catalog, // impl TemplateCatalog
    /// );
    /// ```
    pub fn new(catalog: Box<dyn TemplateCatalog>) -> Self {
        Self { catalog }
    }

    /// Where the records came from.
    pub fn source(&self) -> String {
        self.catalog.source()
    }

    /// The seven categories, in display order.
    pub fn categories(&self) -> &'static [Category] {
        domain::list_categories()
    }

    /// Look up a template; `None` when the id is unknown.
    pub fn find(&self, id: &TemplateId) -> GardenResult<Option<TemplateRecord>> {
        let catalog = self.catalog.snapshot()?;
        Ok(domain::find_by_id(&catalog, id).cloned())
    }

    /// Look up a template, treating absence as an error.
    pub fn get(&self, id: &TemplateId) -> GardenResult<TemplateRecord> {
        self.find(id)?.ok_or_else(|| {
            ApplicationError::TemplateNotFound {
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Browse the catalog.
    #[instrument(skip_all, fields(filter = %filter))]
    pub fn query(&self, filter: &QueryFilter) -> GardenResult<Vec<TemplateRecord>> {
        let catalog = self.catalog.snapshot()?;
        let results = domain::query(&catalog, filter);
        debug!(matched = results.len(), "Query answered");
        Ok(results)
    }

    /// Totals and the `recent_limit` most recently updated templates.
    pub fn dashboard(&self, recent_limit: usize) -> GardenResult<DashboardStats> {
        let catalog = self.catalog.snapshot()?;
        Ok(DashboardStats::compute(&catalog, recent_limit))
    }

    /// Validate a new template.
    #[instrument(skip_all, fields(name = %draft.name))]
    pub fn submit_create(&self, draft: TemplateDraft) -> GardenResult<Submission> {
        let now = Utc::now();
        let record = draft.into_record(TemplateId::generate(), now, now)?;

        info!(id = %record.id, "Template creation accepted");
        Ok(Submission {
            action: SubmissionAction::Create,
            record,
            persisted: false,
        })
    }

    /// Validate an edit of an existing template.
    ///
    /// The id must exist. `created_at` is preserved and `updated_at` is set to
    /// the submission time.
    #[instrument(skip_all, fields(id = %id))]
    pub fn submit_update(&self, id: &TemplateId, draft: TemplateDraft) -> GardenResult<Submission> {
        let existing = self.get(id)?;
        let record = draft.into_record(existing.id, existing.created_at, Utc::now())?;

        info!("Template update accepted");
        Ok(Submission {
            action: SubmissionAction::Update,
            record,
            persisted: false,
        })
    }

    /// Acknowledge deletion of an existing template.
    #[instrument(skip_all, fields(id = %id))]
    pub fn submit_delete(&self, id: &TemplateId) -> GardenResult<Submission> {
        let record = self.get(id)?;

        info!("Template deletion accepted");
        Ok(Submission {
            action: SubmissionAction::Delete,
            record,
            persisted: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        application::ports::output::MockTemplateCatalog,
        domain::{Catalog, DomainError, SortKey, parse_timestamp},
        error::GardenError,
    };

    fn record(id: &str, name: &str, category: Category, created: &str) -> TemplateRecord {
        TemplateRecord::builder()
            .id(TemplateId::parse(id).unwrap())
            .name(name)
            .description("A description long enough.")
            .category(category)
            .created_at(parse_timestamp(created).unwrap())
            .published(true)
            .build()
            .unwrap()
    }

    fn service() -> CatalogService {
        let catalog = Catalog::new([
            record("1", "Shop", Category::ECommerce, "2025-01-01T00:00:00Z"),
            record("2", "Journal", Category::Blog, "2025-02-01T00:00:00Z"),
        ])
        .unwrap();

        let mut mock = MockTemplateCatalog::new();
        mock.expect_snapshot().returning(move || Ok(catalog.clone()));
        mock.expect_source().return_const("mock".to_string());
        CatalogService::new(Box::new(mock))
    }

    fn draft() -> TemplateDraft {
        TemplateDraft {
            name: "Travel Diary".into(),
            description: "A blog for travel stories.".into(),
            category: Some("blog".into()),
            is_published: true,
            image: None,
        }
    }

    #[test]
    fn query_delegates_to_engine() {
        let filter = QueryFilter::builder().sort_by(SortKey::Newest).build();
        let ids: Vec<_> = service()
            .query(&filter)
            .unwrap()
            .into_iter()
            .map(|r| r.id.to_string())
            .collect();
        assert_eq!(ids, ["2", "1"]);
    }

    #[test]
    fn find_unknown_is_none_but_get_is_not_found() {
        let svc = service();
        let missing = TemplateId::parse("nope").unwrap();

        assert_eq!(svc.find(&missing).unwrap(), None);
        assert!(matches!(
            svc.get(&missing),
            Err(GardenError::Application(ApplicationError::TemplateNotFound { .. }))
        ));
    }

    #[test]
    fn create_generates_fresh_id_and_does_not_persist() {
        let svc = service();
        let submission = svc.submit_create(draft()).unwrap();

        assert_eq!(submission.action, SubmissionAction::Create);
        assert!(!submission.persisted);
        assert_eq!(submission.record.category, Category::Blog);
        assert!(svc.find(&submission.record.id).unwrap().is_none());
        assert_eq!(svc.query(&QueryFilter::default()).unwrap().len(), 2);
    }

    #[test]
    fn create_rejects_invalid_draft() {
        let result = service().submit_create(TemplateDraft::default());
        assert!(matches!(
            result,
            Err(GardenError::Domain(DomainError::InvalidDraft { .. }))
        ));
    }

    #[test]
    fn update_keeps_created_at_and_bumps_updated_at() {
        let svc = service();
        let original = svc.get(&TemplateId::parse("2").unwrap()).unwrap();
        let submission = svc.submit_update(&original.id, draft()).unwrap();

        assert_eq!(submission.action, SubmissionAction::Update);
        assert_eq!(submission.record.id, original.id);
        assert_eq!(submission.record.created_at, original.created_at);
        assert!(submission.record.updated_at >= original.updated_at);
        assert_eq!(svc.get(&original.id).unwrap().name, "Journal");
    }

    #[test]
    fn update_of_unknown_id_is_not_found_even_with_invalid_draft() {
        let result = service().submit_update(&TemplateId::parse("9").unwrap(), TemplateDraft::default());
        assert!(matches!(
            result,
            Err(GardenError::Application(ApplicationError::TemplateNotFound { .. }))
        ));
    }

    #[test]
    fn delete_returns_the_record_and_keeps_it() {
        let svc = service();
        let submission = svc.submit_delete(&TemplateId::parse("1").unwrap()).unwrap();

        assert_eq!(submission.action, SubmissionAction::Delete);
        assert_eq!(submission.record.name, "Shop");
        assert!(svc.find(&TemplateId::parse("1").unwrap()).unwrap().is_some());
    }

    #[test]
    fn dashboard_uses_snapshot() {
        let stats = service().dashboard(1).unwrap();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.recent.len(), 1);
    }

    #[test]
    fn snapshot_failure_propagates() {
        let mut mock = MockTemplateCatalog::new();
        mock.expect_snapshot().returning(|| {
            Err(ApplicationError::CatalogUnavailable {
                reason: "disk on fire".into(),
            }
            .into())
        });
        let svc = CatalogService::new(Box::new(mock));

        assert!(svc.query(&QueryFilter::default()).is_err());
    }
}
