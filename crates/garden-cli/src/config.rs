//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `GARDEN_<SECTION>__<KEY>`, e.g.
//!    `GARDEN_BROWSE__DEFAULT_SORT=name`
//! 3. Config file: `--config FILE`, else `./.garden.toml`, else the
//!    platform config path
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use tracing::debug;

use garden_core::domain::{DEFAULT_RECENT_LIMIT, SortKey};

/// File name used by `garden init --local`.
pub const LOCAL_CONFIG_FILE: &str = ".garden.toml";

const ENV_PREFIX: &str = "GARDEN";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Output settings.
    pub output: OutputConfig,
    /// Browser defaults.
    pub browse: BrowseConfig,
    /// Catalog source.
    pub catalog: CatalogConfig,
    /// Account and preference profile shown by `garden settings`.
    pub settings: SettingsConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowseConfig {
    /// Sort applied by `garden list` when `--sort` is not given.
    pub default_sort: Option<SortKey>,
    /// Number of recently updated templates on the dashboard.
    pub recent_limit: usize,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            default_sort: Some(SortKey::Newest),
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Directory of `*.toml` record files; the built-in seed when unset.
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsConfig {
    pub profile: ProfileSettings,
    pub appearance: AppearanceSettings,
    pub notifications: NotificationSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileSettings {
    pub name: String,
    pub email: String,
    pub company: String,
    pub bio: String,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            name: "Admin User".into(),
            email: "admin@templategarden.com".into(),
            company: "Template Garden Inc.".into(),
            bio: "Administrator of the Template Garden platform.".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceSettings {
    /// `light`, `dark` or `system`.
    pub theme: String,
    /// `comfortable`, `default` or `compact`.
    pub density: String,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            theme: "light".into(),
            density: "default".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    pub email: bool,
    pub push: bool,
    pub marketing: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email: true,
            push: true,
            marketing: false,
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then file, then environment.
    ///
    /// `config_file` is the path the user passed via `--config`; it must exist.
    /// Without it the local and platform files are used when present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults = ::config::Config::try_from(&Self::default())
            .context("Failed to build default configuration")?;

        let mut builder = ::config::Config::builder().add_source(defaults);

        match config_file {
            Some(path) => {
                debug!(path = %path.display(), "loading config file");
                builder = builder.add_source(toml_file(path).required(true));
            }
            None => {
                for path in [Self::config_path(), PathBuf::from(LOCAL_CONFIG_FILE)] {
                    debug!(path = %path.display(), "checking optional config file");
                    builder = builder.add_source(toml_file(&path).required(false));
                }
            }
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        builder
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.garden.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "templategarden", "garden")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }
}

fn toml_file(path: &Path) -> ::config::File<::config::FileSourceFile, ::config::FileFormat> {
    ::config::File::from(path).format(::config::FileFormat::Toml)
}
