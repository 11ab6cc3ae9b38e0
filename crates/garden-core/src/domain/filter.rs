//! Query criteria for the template browser.
//!
//! A [`QueryFilter`] is transient: it describes one read over the catalog and
//! is never stored. Typed construction goes through [`QueryFilter::builder`];
//! raw user input (select-box values, query-string parameters) goes through
//! [`QueryFilter::lenient`], which never fails.

use std::fmt;

use tracing::warn;

use crate::domain::value_objects::{Category, CategorySelector, SortKey};

/// Category, search text and sort key for one query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct QueryFilter {
    category: CategorySelector,
    search: Option<String>,
    sort_by: Option<SortKey>,
}

impl QueryFilter {
    pub fn builder() -> QueryFilterBuilder {
        QueryFilterBuilder::default()
    }

    /// Initial browser state: all categories, no search, newest first.
    ///
    /// Also what "clear filters" resets to.
    pub fn browse_default() -> Self {
        Self {
            category: CategorySelector::All,
            search: None,
            sort_by: Some(SortKey::Newest),
        }
    }

    /// Build a filter from untyped input.
    ///
    /// Unknown category or sort values disable that stage instead of failing:
    /// there is no way to tell a typo from "no preference".
    pub fn lenient(category: Option<&str>, search: Option<&str>, sort_by: Option<&str>) -> Self {
        let category = match category {
            None => CategorySelector::All,
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                warn!(value = raw, error = %e, "ignoring category filter");
                CategorySelector::All
            }),
        };

        let sort_by = sort_by.and_then(|raw| match raw.parse::<SortKey>() {
            Ok(key) => Some(key),
            Err(e) => {
                warn!(value = raw, error = %e, "ignoring sort key");
                None
            }
        });

        Self {
            category,
            search: normalize_search(search),
            sort_by,
        }
    }

    pub fn category(&self) -> CategorySelector {
        self.category
    }

    /// Search text as entered (not lower-cased). `None` when empty.
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn sort_by(&self) -> Option<SortKey> {
        self.sort_by
    }

    /// Whether anything differs from [`QueryFilter::browse_default`].
    pub fn has_active_filters(&self) -> bool {
        self.category != CategorySelector::All
            || self.search.is_some()
            || self.sort_by != Some(SortKey::Newest)
    }

    pub fn with_category(mut self, category: impl Into<CategorySelector>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_search(mut self, search: impl AsRef<str>) -> Self {
        self.search = normalize_search(Some(search.as_ref()));
        self
    }

    pub fn with_sort(mut self, sort_by: Option<SortKey>) -> Self {
        self.sort_by = sort_by;
        self
    }
}

impl fmt::Display for QueryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "category={}", self.category)?;
        if let Some(search) = &self.search {
            write!(f, " search={search:?}")?;
        }
        match self.sort_by {
            Some(key) => write!(f, " sort={key}"),
            None => write!(f, " sort=none"),
        }
    }
}

fn normalize_search(search: Option<&str>) -> Option<String> {
    search.filter(|s| !s.is_empty()).map(str::to_owned)
}

/// Typed builder for [`QueryFilter`].
#[derive(Debug, Default)]
pub struct QueryFilterBuilder {
    category: CategorySelector,
    search: Option<String>,
    sort_by: Option<SortKey>,
}

impl QueryFilterBuilder {
    pub fn category(mut self, category: Category) -> Self {
        self.category = CategorySelector::Only(category);
        self
    }

    pub fn all_categories(mut self) -> Self {
        self.category = CategorySelector::All;
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn sort_by(mut self, key: SortKey) -> Self {
        self.sort_by = Some(key);
        self
    }

    pub fn build(self) -> QueryFilter {
        QueryFilter {
            category: self.category,
            search: normalize_search(self.search.as_deref()),
            sort_by: self.sort_by,
        }
    }
}
