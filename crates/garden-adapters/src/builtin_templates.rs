//! Built-in seed catalog and catalog source resolution.
//!
//! This module provides [`seed_records`], the eight templates that ship with
//! Template Garden, and [`resolve_catalog`], the single entry-point the CLI
//! uses to decide where records come from.
//!
//! # Catalog resolution order
//!
//! 1. **`$GARDEN_CATALOG_DIR`**: environment variable override pointing at a
//!    directory of `*.toml` record files (see [`crate::template_loader`]).
//! 2. **The configured directory**: `catalog.dir` from the CLI config.
//! 3. **The built-in seed**: always available.
//!
//! A directory that is named but missing is an error rather than a silent
//! fallback to the seed.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use garden_core::domain::{
    Catalog, Category, DomainError, TemplateId, TemplateRecord, parse_timestamp,
};

use crate::{template_loader::FilesystemCatalogLoader, template_store::InMemoryCatalog};

/// Environment variable naming a catalog directory.
pub const CATALOG_DIR_ENV: &str = "GARDEN_CATALOG_DIR";

/// Source label for the built-in seed.
pub const BUILTIN_SOURCE: &str = "builtin";

// ── Seed data ─────────────────────────────────────────────────────────────────

struct SeedRow {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: Category,
    image: &'static str,
    created_at: &'static str,
    updated_at: &'static str,
}

const SEED: [SeedRow; 8] = [
    SeedRow {
        id: "1",
        name: "Grün - Modern E-commerce",
        description: "A sleek and modern e-commerce template with a focus on sustainability and clean design.",
        category: Category::ECommerce,
        image: "/lovable-uploads/6e2ffd62-350b-44c0-9e3e-7004722d7886.png",
        created_at: "2025-02-15T09:00:00.000Z",
        updated_at: "2025-04-20T14:20:00.000Z",
    },
    SeedRow {
        id: "2",
        name: "Portfolio Collection",
        description: "Professional portfolio template for photographers and designers to showcase their work.",
        category: Category::Portfolio,
        image: "/lovable-uploads/696e28e0-afba-4b27-b354-11332bc4b8ef.png",
        created_at: "2025-01-10T11:30:00.000Z",
        updated_at: "2025-04-15T16:45:00.000Z",
    },
    SeedRow {
        id: "3",
        name: "Business Service Pro",
        description: "Clean and professional template for service-based businesses.",
        category: Category::Business,
        image: "/lovable-uploads/dbe24d65-b279-4c21-a4ca-4803046a7fb3.png",
        created_at: "2025-03-05T10:15:00.000Z",
        updated_at: "2025-04-10T09:30:00.000Z",
    },
    SeedRow {
        id: "4",
        name: "Lexington Restaurant",
        description: "Vibrant restaurant template with strong visual appeal for food businesses.",
        category: Category::Business,
        image: "/lovable-uploads/90781a03-18dd-45c0-b717-2154868d31c7.png",
        created_at: "2025-03-22T14:20:00.000Z",
        updated_at: "2025-04-18T11:10:00.000Z",
    },
    SeedRow {
        id: "5",
        name: "Creative Artist",
        description: "Artistic template for creative professionals with unique layouts.",
        category: Category::Portfolio,
        image: "/lovable-uploads/7660fe46-4315-438d-98d7-f5c18bf69160.png",
        created_at: "2025-02-28T09:45:00.000Z",
        updated_at: "2025-04-05T13:25:00.000Z",
    },
    SeedRow {
        id: "6",
        name: "Tech Blog",
        description: "Modern blog template designed for technology and innovation content.",
        category: Category::Blog,
        image: "https://images.unsplash.com/photo-1488590528505-98d2b5aba04b?auto=format&fit=crop&w=800&q=80",
        created_at: "2025-01-25T13:10:00.000Z",
        updated_at: "2025-04-12T10:40:00.000Z",
    },
    SeedRow {
        id: "7",
        name: "Corporate Landing",
        description: "Professional landing page template for corporate businesses.",
        category: Category::Landing,
        image: "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?auto=format&fit=crop&w=800&q=80",
        created_at: "2025-03-10T08:30:00.000Z",
        updated_at: "2025-04-08T15:20:00.000Z",
    },
    SeedRow {
        id: "8",
        name: "Personal Brand",
        description: "Template designed for personal branding and individual professionals.",
        category: Category::Personal,
        image: "https://images.unsplash.com/photo-1507238691740-187a5b1d37b8?auto=format&fit=crop&w=800&q=80",
        created_at: "2025-02-05T12:25:00.000Z",
        updated_at: "2025-04-22T09:15:00.000Z",
    },
];

impl SeedRow {
    fn to_record(&self) -> Result<TemplateRecord, DomainError> {
        TemplateRecord::builder()
            .id(TemplateId::parse(self.id)?)
            .name(self.name)
            .description(self.description)
            .category(self.category)
            .image(self.image)
            .created_at(parse_timestamp(self.created_at)?)
            .updated_at(parse_timestamp(self.updated_at)?)
            .published(true)
            .build()
    }
}

/// The eight seed records, ids `"1"` to `"8"`, all published.
pub fn seed_records() -> Result<Vec<TemplateRecord>, DomainError> {
    SEED.iter().map(SeedRow::to_record).collect()
}

/// The seed records as a validated [`Catalog`].
pub fn seed_catalog() -> Result<Catalog, DomainError> {
    Catalog::new(seed_records()?)
}

// ── Resolution ────────────────────────────────────────────────────────────────

/// Pick the catalog source and load it.
///
/// `configured_dir` is the `catalog.dir` setting; `$GARDEN_CATALOG_DIR` wins
/// over it when both are set.
#[instrument(skip_all)]
pub fn resolve_catalog(configured_dir: Option<&Path>) -> Result<InMemoryCatalog, DomainError> {
    match catalog_dir(configured_dir) {
        Some(dir) => {
            debug!(dir = %dir.display(), "loading catalog from directory");
            let catalog = FilesystemCatalogLoader::new(&dir).load_catalog()?;
            info!(
                dir = %dir.display(),
                count = catalog.len(),
                "catalog loaded from directory"
            );
            Ok(InMemoryCatalog::new(catalog, dir.display().to_string()))
        }
        None => {
            debug!("no catalog directory configured, using built-in seed");
            InMemoryCatalog::with_builtin()
        }
    }
}

fn catalog_dir(configured_dir: Option<&Path>) -> Option<PathBuf> {
    std::env::var_os(CATALOG_DIR_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| configured_dir.map(Path::to_path_buf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_eight_published_records_in_id_order() {
        let records = seed_records().unwrap();
        let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6", "7", "8"]);
        assert!(records.iter().all(|r| r.is_published));
    }

    #[test]
    fn seed_catalog_is_valid() {
        assert_eq!(seed_catalog().unwrap().len(), 8);
    }

    #[test]
    fn seed_keeps_non_ascii_names() {
        let records = seed_records().unwrap();
        assert_eq!(records[0].name, "Grün - Modern E-commerce");
        assert_eq!(records[0].category, Category::ECommerce);
    }

    #[test]
    fn seed_updated_is_after_created() {
        for r in seed_records().unwrap() {
            assert!(r.updated_at >= r.created_at, "{}", r.id);
        }
    }
}
