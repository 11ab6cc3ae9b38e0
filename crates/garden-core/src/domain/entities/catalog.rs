//! The record collection queried by the engine.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::{
    entities::record::{TemplateId, TemplateRecord},
    error::DomainError,
};

/// Ordered, immutable set of template records.
///
/// Invariant: every `id` is unique. Enforced at construction; nothing can
/// mutate a `Catalog` afterwards, so cloning is a reference-count bump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Arc<[TemplateRecord]>,
}

impl Catalog {
    /// Build a catalog, keeping the given order as the seed order.
    pub fn new(records: impl IntoIterator<Item = TemplateRecord>) -> Result<Self, DomainError> {
        let records: Vec<TemplateRecord> = records.into_iter().collect();

        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            record.validate()?;
            if !seen.insert(record.id.as_str()) {
                return Err(DomainError::DuplicateId {
                    id: record.id.to_string(),
                });
            }
        }

        Ok(Self {
            records: records.into(),
        })
    }

    pub fn empty() -> Self {
        Self {
            records: Arc::from(Vec::new()),
        }
    }

    pub fn records(&self) -> &[TemplateRecord] {
        &self.records
    }

    pub fn get(&self, id: &TemplateId) -> Option<&TemplateRecord> {
        self.records.iter().find(|r| &r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TemplateRecord> {
        self.records.iter()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{entities::record::parse_timestamp, value_objects::Category};

    fn record(id: &str) -> TemplateRecord {
        TemplateRecord::builder()
            .id(TemplateId::parse(id).unwrap())
            .name(format!("Template {id}"))
            .category(Category::Other)
            .created_at(parse_timestamp("2025-01-01T00:00:00Z").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn keeps_insertion_order() {
        let catalog = Catalog::new([record("b"), record("a"), record("c")]).unwrap();
        let ids: Vec<_> = catalog.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = Catalog::new([record("1"), record("2"), record("1")]);
        assert_eq!(result, Err(DomainError::DuplicateId { id: "1".into() }));
    }

    #[test]
    fn get_returns_none_for_unknown_id() {
        let catalog = Catalog::new([record("1")]).unwrap();
        assert!(catalog.get(&TemplateId::parse("1").unwrap()).is_some());
        assert!(catalog.get(&TemplateId::parse("99").unwrap()).is_none());
    }

    #[test]
    fn clones_share_storage() {
        let catalog = Catalog::new([record("1")]).unwrap();
        let copy = catalog.clone();
        assert!(std::ptr::eq(catalog.records(), copy.records()));
    }
}
