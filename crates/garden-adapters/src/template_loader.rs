//! Filesystem-based catalog loader.
//!
//! Discovers and parses `*.toml` record files from a directory, converting
//! them into domain [`TemplateRecord`]s and finally a [`Catalog`].
//!
//! # Directory layout expected
//!
//! ```text
//! catalog/
//! ├── 01-shop.toml
//! ├── 02-journal.toml
//! └── archive/
//!     └── 03-old-landing.toml   ← one level of nesting is allowed
//! ```
//!
//! Files are visited in file-name order, which becomes catalog order.
//!
//! # Record file format
//!
//! ```toml
//! [template]
//! id           = "9"
//! name         = "Market Stall"
//! description  = "Storefront for small shops."     # optional
//! category     = "e-commerce"                      # one of the seven slugs
//! image        = "/uploads/market.png"             # optional
//! created_at   = "2025-01-05T10:00:00Z"            # RFC 3339, quoted
//! updated_at   = "2025-03-01T10:00:00Z"            # optional, defaults to created_at
//! is_published = true                              # optional, defaults to false
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use garden_core::domain::{
    Catalog, Category, DomainError, TemplateId, TemplateRecord, parse_timestamp,
};

const RECORD_EXTENSION: &str = "toml";

// ── Manifest types ────────────────────────────────────────────────────────────

/// Deserialised representation of one record file.
#[derive(Debug, Deserialize, Clone)]
pub struct RecordManifest {
    pub template: RecordSection,
}

/// `[template]` table: the record fields.
#[derive(Debug, Deserialize, Clone)]
pub struct RecordSection {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Category slug, e.g. `"e-commerce"`. Matched exactly.
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(alias = "createdAt")]
    pub created_at: String,
    #[serde(default, alias = "updatedAt")]
    pub updated_at: Option<String>,
    #[serde(default, alias = "isPublished")]
    pub is_published: bool,
}

impl RecordSection {
    fn into_record(self) -> Result<TemplateRecord, DomainError> {
        let category: Category = self.category.parse()?;
        let created_at = parse_timestamp(&self.created_at)?;
        let updated_at = match &self.updated_at {
            Some(raw) => parse_timestamp(raw)?,
            None => created_at,
        };

        TemplateRecord::builder()
            .id(TemplateId::parse(self.id)?)
            .name(self.name)
            .description(self.description)
            .category(category)
            .image(self.image)
            .created_at(created_at)
            .updated_at(updated_at)
            .published(self.is_published)
            .build()
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

/// Loads [`TemplateRecord`]s from a directory of record files.
///
/// Files that cannot be read or parsed, or that describe an invalid record,
/// emit a `WARN` log and are skipped. They do not prevent other records from
/// loading.
///
/// # Example
///
/// ```no_run
/// use garden_adapters::template_loader::FilesystemCatalogLoader;
///
/// let loader = FilesystemCatalogLoader::new("./catalog");
/// let catalog = loader.load_catalog()?;
/// println!("Loaded {} templates", catalog.len());
/// # Ok::<(), garden_core::domain::DomainError>(())
/// ```
pub struct FilesystemCatalogLoader {
    catalog_dir: PathBuf,
}

impl FilesystemCatalogLoader {
    /// Create a loader pointed at `catalog_dir`.
    ///
    /// The directory does not need to exist yet; [`Self::load_all`] will
    /// return an error if it is missing when called.
    pub fn new(catalog_dir: impl Into<PathBuf>) -> Self {
        Self {
            catalog_dir: catalog_dir.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.catalog_dir
    }

    /// Load every valid record found under the catalog directory.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidRecord`] if the directory does not exist
    /// or cannot be walked.
    #[instrument(skip(self), fields(dir = %self.catalog_dir.display()))]
    pub fn load_all(&self) -> Result<Vec<TemplateRecord>, DomainError> {
        if !self.catalog_dir.is_dir() {
            return Err(DomainError::InvalidRecord(format!(
                "catalog directory not found: {}",
                self.catalog_dir.display()
            )));
        }

        let mut records = Vec::new();

        let walker = WalkDir::new(&self.catalog_dir)
            .min_depth(1)
            .max_depth(2)
            .sort_by_file_name();

        for walk_entry in walker {
            let walk_entry = walk_entry
                .map_err(|e| DomainError::InvalidRecord(format!("directory walk error: {e}")))?;

            let path = walk_entry.path();
            if !walk_entry.file_type().is_file() || !is_record_file(path) {
                continue;
            }

            match load_record_file(path) {
                Ok(record) => {
                    debug!(id = %record.id, file = %path.display(), "loaded record");
                    records.push(record);
                }
                Err(e) => {
                    warn!(
                        file  = %path.display(),
                        error = %e,
                        "skipping record file due to load error"
                    );
                }
            }
        }

        debug!(count = records.len(), "finished loading records");
        Ok(records)
    }

    /// Load every valid record and build a [`Catalog`].
    ///
    /// # Errors
    ///
    /// As [`Self::load_all`], plus [`DomainError::DuplicateId`] when two files
    /// share an id.
    pub fn load_catalog(&self) -> Result<Catalog, DomainError> {
        Catalog::new(self.load_all()?)
    }
}

fn is_record_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(RECORD_EXTENSION))
}

/// Parse one record file.
fn load_record_file(path: &Path) -> Result<TemplateRecord, DomainError> {
    let raw = fs::read_to_string(path).map_err(|e| {
        DomainError::InvalidRecord(format!("failed to read '{}': {e}", path.display()))
    })?;

    let manifest: RecordManifest = toml::from_str(&raw).map_err(|e| {
        DomainError::InvalidRecord(format!("failed to parse '{}': {e}", path.display()))
    })?;

    manifest.template.into_record()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // ── helpers ───────────────────────────────────────────────────────────

    fn record_toml(id: &str, category: &str) -> String {
        format!(
            r#"
[template]
id          = "{id}"
name        = "Template {id}"
description = "Description for {id}."
category    = "{category}"
created_at  = "2025-01-0{id}T10:00:00Z"
"#
        )
    }

    fn write(dir: &Path, rel_path: &str, content: &str) {
        let full = dir.join(rel_path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full, content).unwrap();
    }

    fn ids(records: &[TemplateRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    // ── load_all ──────────────────────────────────────────────────────────

    #[test]
    fn load_all_returns_error_for_missing_dir() {
        let loader = FilesystemCatalogLoader::new("/absolutely/does/not/exist");
        assert!(matches!(
            loader.load_all(),
            Err(DomainError::InvalidRecord(_))
        ));
    }

    #[test]
    fn load_all_orders_by_file_name() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "b.toml", &record_toml("2", "blog"));
        write(temp.path(), "a.toml", &record_toml("1", "landing"));

        let records = FilesystemCatalogLoader::new(temp.path()).load_all().unwrap();
        assert_eq!(ids(&records), ["1", "2"]);
        assert_eq!(records[0].category, Category::Landing);
    }

    #[test]
    fn load_all_ignores_other_extensions() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "README.md", "# catalog");
        write(temp.path(), "one.toml", &record_toml("1", "blog"));

        let records = FilesystemCatalogLoader::new(temp.path()).load_all().unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn load_all_continues_when_one_file_is_invalid() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "bad-syntax.toml", "[template\nid = ");
        write(temp.path(), "bad-category.toml", &record_toml("3", "Blog"));
        write(temp.path(), "good.toml", &record_toml("1", "blog"));

        let records = FilesystemCatalogLoader::new(temp.path()).load_all().unwrap();
        assert_eq!(ids(&records), ["1"], "bad files should be skipped");
    }

    #[test]
    fn blank_id_file_is_skipped() {
        let temp = TempDir::new().unwrap();
        write(
            temp.path(),
            "blank-id.toml",
            r#"
[template]
id          = "  "
name        = "Nameless"
description = "Has no usable id."
category    = "blog"
created_at  = "2025-01-01T10:00:00Z"
"#,
        );
        write(temp.path(), "good.toml", &record_toml("1", "blog"));

        let records = FilesystemCatalogLoader::new(temp.path()).load_all().unwrap();
        assert_eq!(ids(&records), ["1"]);
    }

    #[test]
    fn nested_files_are_discovered_one_level_deep() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "top.toml", &record_toml("1", "blog"));
        write(temp.path(), "archive/old.toml", &record_toml("2", "other"));
        write(temp.path(), "archive/deeper/lost.toml", &record_toml("3", "other"));

        let records = FilesystemCatalogLoader::new(temp.path()).load_all().unwrap();
        let mut found = ids(&records);
        found.sort();
        assert_eq!(found, ["1", "2"]);
    }

    #[test]
    fn optional_fields_take_defaults() {
        let temp = TempDir::new().unwrap();
        write(
            temp.path(),
            "min.toml",
            r#"
[template]
id         = "m"
name       = "Minimal"
category   = "personal"
created_at = "2025-02-01T00:00:00Z"
"#,
        );

        let records = FilesystemCatalogLoader::new(temp.path()).load_all().unwrap();
        let r = &records[0];
        assert_eq!(r.updated_at, r.created_at);
        assert!(!r.is_published);
        assert!(r.description.is_empty());
        assert!(r.image.is_empty());
    }

    #[test]
    fn camel_case_keys_are_accepted() {
        let temp = TempDir::new().unwrap();
        write(
            temp.path(),
            "camel.toml",
            r#"
[template]
id          = "c"
name        = "Camel"
category    = "blog"
createdAt   = "2025-02-01T00:00:00Z"
updatedAt   = "2025-03-01T00:00:00Z"
isPublished = true
"#,
        );

        let records = FilesystemCatalogLoader::new(temp.path()).load_all().unwrap();
        assert!(records[0].is_published);
        assert!(records[0].updated_at > records[0].created_at);
    }

    #[test]
    fn load_catalog_rejects_duplicate_ids() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "a.toml", &record_toml("1", "blog"));
        write(temp.path(), "b.toml", &record_toml("1", "landing"));

        let result = FilesystemCatalogLoader::new(temp.path()).load_catalog();
        assert!(matches!(result, Err(DomainError::DuplicateId { .. })));
    }

    #[test]
    fn empty_directory_is_an_empty_catalog() {
        let temp = TempDir::new().unwrap();
        let catalog = FilesystemCatalogLoader::new(temp.path()).load_catalog().unwrap();
        assert!(catalog.is_empty());
    }
}
