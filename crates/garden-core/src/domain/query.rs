//! Template catalog query engine.
//!
//! Three read operations over a [`Catalog`]:
//!
//! - [`list_categories`]: the fixed category sequence
//! - [`find_by_id`]: linear lookup, absence is `None`
//! - [`query`]: category, then search, then sort
//!
//! The stage order of [`query`] is fixed. The two filter stages commute with
//! each other; sorting must come last so its output order survives.

use std::cmp::Ordering;

use tracing::{instrument, trace};

use crate::domain::{
    collation,
    entities::{
        catalog::Catalog,
        record::{TemplateId, TemplateRecord},
    },
    filter::QueryFilter,
    value_objects::{Category, CategorySelector, SortKey},
};

/// The seven categories, always in the same order.
pub fn list_categories() -> &'static [Category] {
    &Category::ALL
}

/// Record whose id equals `id`, if any.
pub fn find_by_id<'a>(catalog: &'a Catalog, id: &TemplateId) -> Option<&'a TemplateRecord> {
    catalog.get(id)
}

/// Run the category → search → sort pipeline.
///
/// Returns a fresh vector; the catalog is untouched.
#[instrument(level = "debug", skip(catalog, filter), fields(filter = %filter))]
pub fn query(catalog: &Catalog, filter: &QueryFilter) -> Vec<TemplateRecord> {
    let mut results: Vec<TemplateRecord> = catalog
        .iter()
        .filter(|r| category_stage(filter.category(), r))
        .cloned()
        .collect();

    if let Some(needle) = filter.search() {
        results = search_stage(results, needle);
    }

    if let Some(key) = filter.sort_by() {
        sort_stage(&mut results, key);
    }

    trace!(matched = results.len(), of = catalog.len(), "query finished");
    results
}

fn category_stage(selector: CategorySelector, record: &TemplateRecord) -> bool {
    selector.admits(record.category)
}

fn search_stage(records: Vec<TemplateRecord>, needle: &str) -> Vec<TemplateRecord> {
    let needle = needle.to_lowercase();
    records
        .into_iter()
        .filter(|r| r.matches_search(&needle))
        .collect()
}

/// Stable sort: ties keep catalog order.
fn sort_stage(records: &mut [TemplateRecord], key: SortKey) {
    records.sort_by(comparator(key));
}

fn comparator(key: SortKey) -> fn(&TemplateRecord, &TemplateRecord) -> Ordering {
    match key {
        SortKey::Newest => |a: &TemplateRecord, b: &TemplateRecord| b.created_at.cmp(&a.created_at),
        SortKey::Oldest => |a: &TemplateRecord, b: &TemplateRecord| a.created_at.cmp(&b.created_at),
        SortKey::Name => |a: &TemplateRecord, b: &TemplateRecord| collation::compare(&a.name, &b.name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parse_timestamp;

    fn record(id: &str, name: &str, category: Category, created: &str) -> TemplateRecord {
        TemplateRecord::builder()
            .id(TemplateId::parse(id).unwrap())
            .name(name)
            .description(format!("{name} description"))
            .category(category)
            .created_at(parse_timestamp(created).unwrap())
            .build()
            .unwrap()
    }

    fn catalog() -> Catalog {
        Catalog::new([
            record("a", "zebra Shop", Category::ECommerce, "2025-01-02T00:00:00Z"),
            record("b", "Alpha Blog", Category::Blog, "2025-01-03T00:00:00Z"),
            record("c", "Émigré Studio", Category::Portfolio, "2025-01-01T00:00:00Z"),
            record("d", "beta Blog", Category::Blog, "2025-01-03T00:00:00Z"),
        ])
        .unwrap()
    }

    fn ids(records: &[TemplateRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn categories_are_fixed() {
        let cats: Vec<_> = list_categories().iter().map(Category::as_str).collect();
        assert_eq!(
            cats,
            ["e-commerce", "portfolio", "blog", "business", "personal", "landing", "other"]
        );
    }

    #[test]
    fn empty_filter_keeps_catalog_order() {
        let out = query(&catalog(), &QueryFilter::default());
        assert_eq!(ids(&out), ["a", "b", "c", "d"]);
    }

    #[test]
    fn category_stage_is_exact() {
        let f = QueryFilter::builder().category(Category::Blog).build();
        assert_eq!(ids(&query(&catalog(), &f)), ["b", "d"]);
    }

    #[test]
    fn search_stage_lowercases_needle() {
        let f = QueryFilter::builder().search("BLOG").build();
        assert_eq!(ids(&query(&catalog(), &f)), ["b", "d"]);
    }

    #[test]
    fn newest_sort_is_stable_on_ties() {
        // b and d share created_at; b comes first in the catalog.
        let f = QueryFilter::builder().sort_by(SortKey::Newest).build();
        assert_eq!(ids(&query(&catalog(), &f)), ["b", "d", "a", "c"]);
    }

    #[test]
    fn oldest_sort() {
        let f = QueryFilter::builder().sort_by(SortKey::Oldest).build();
        assert_eq!(ids(&query(&catalog(), &f)), ["c", "a", "b", "d"]);
    }

    #[test]
    fn name_sort_ignores_case_and_accents() {
        let f = QueryFilter::builder().sort_by(SortKey::Name).build();
        assert_eq!(ids(&query(&catalog(), &f)), ["b", "d", "c", "a"]);
    }

    #[test]
    fn stages_compose() {
        let f = QueryFilter::builder()
            .category(Category::Blog)
            .search("blog")
            .sort_by(SortKey::Name)
            .build();
        assert_eq!(ids(&query(&catalog(), &f)), ["b", "d"]);
    }

    #[test]
    fn find_by_id_absent_is_none() {
        let catalog = catalog();
        assert_eq!(
            find_by_id(&catalog, &TemplateId::parse("c").unwrap()).map(|r| r.name.as_str()),
            Some("Émigré Studio")
        );
        assert!(find_by_id(&catalog, &TemplateId::parse("zz").unwrap()).is_none());
    }

    #[test]
    fn query_on_empty_catalog() {
        assert!(query(&Catalog::empty(), &QueryFilter::browse_default()).is_empty());
    }
}
