//! Domain value objects: Category, CategorySelector, SortKey.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! This file's only job is to define the types, their canonical string
//! representations, and their `FromStr` parsers.
//!
//! Parsing is **exact**: `"blog"` is a category, `"Blog"` is not. Callers that
//! want the permissive behaviour of the template browser go through
//! [`QueryFilter::lenient`](crate::domain::QueryFilter::lenient), which turns
//! parse failures into "stage not applied".

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Category ──────────────────────────────────────────────────────────────────

/// Closed classification of a template's domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    ECommerce,
    Portfolio,
    Blog,
    Business,
    Personal,
    Landing,
    Other,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 7] = [
        Self::ECommerce,
        Self::Portfolio,
        Self::Blog,
        Self::Business,
        Self::Personal,
        Self::Landing,
        Self::Other,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ECommerce => "e-commerce",
            Self::Portfolio => "portfolio",
            Self::Blog => "blog",
            Self::Business => "business",
            Self::Personal => "personal",
            Self::Landing => "landing",
            Self::Other => "other",
        }
    }

    /// Human label: first letter upper-cased (`"e-commerce"` → `"E-commerce"`).
    pub fn label(&self) -> String {
        let s = self.as_str();
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DomainError::UnknownCategory {
                value: s.to_string(),
            })
    }
}

// ── CategorySelector ──────────────────────────────────────────────────────────

/// Category stage of a query: everything, or exactly one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategorySelector {
    #[default]
    All,
    Only(Category),
}

impl CategorySelector {
    /// Sentinel string meaning "no category filter".
    pub const ALL_SENTINEL: &'static str = "all";

    pub fn admits(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => *c == category,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => Self::ALL_SENTINEL,
            Self::Only(c) => c.as_str(),
        }
    }
}

impl From<Category> for CategorySelector {
    fn from(c: Category) -> Self {
        Self::Only(c)
    }
}

impl fmt::Display for CategorySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategorySelector {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::ALL_SENTINEL {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

// ── SortKey ───────────────────────────────────────────────────────────────────

/// Ordering applied by the last query stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// `created_at` descending.
    Newest,
    /// `created_at` ascending.
    Oldest,
    /// Locale-aware ascending by name.
    Name,
}

impl SortKey {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Name => "name",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Newest => "Newest First",
            Self::Oldest => "Oldest First",
            Self::Name => "Name (A-Z)",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(Self::Newest),
            "oldest" => Ok(Self::Oldest),
            "name" => Ok(Self::Name),
            other => Err(DomainError::UnknownSortKey {
                value: other.to_string(),
            }),
        }
    }
}
