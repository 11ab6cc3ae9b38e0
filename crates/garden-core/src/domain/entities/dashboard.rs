//! Dashboard summary over a catalog.

use serde::Serialize;

use crate::domain::entities::{catalog::Catalog, record::TemplateRecord};

/// Number of recently updated templates shown by default.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Totals plus the most recently updated records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total: usize,
    pub published: usize,
    pub drafts: usize,
    /// `updated_at` descending, at most `recent_limit` entries.
    pub recent: Vec<TemplateRecord>,
}

impl DashboardStats {
    pub fn compute(catalog: &Catalog, recent_limit: usize) -> Self {
        let total = catalog.len();
        let published = catalog.iter().filter(|r| r.is_published).count();

        let mut recent: Vec<TemplateRecord> = catalog.records().to_vec();
        // Stable: records updated at the same instant keep seed order.
        recent.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        recent.truncate(recent_limit);

        Self {
            total,
            published,
            drafts: total - published,
            recent,
        }
    }
}
