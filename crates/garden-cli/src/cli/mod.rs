//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No catalog logic lives here.
//!
//! Category and sort values are taken as plain strings: `list` hands them to
//! the lenient filter parser, `new`/`edit` hand them to draft validation.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "garden",
    bin_name = "garden",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f331} Browse and manage the Template Garden catalog",
    long_about = "Template Garden keeps a catalog of website templates. \
                  Browse it by category, search it, sort it, and preview \
                  or draft changes to individual templates.",
    after_help = "EXAMPLES:\n\
        \x20 garden list --category blog\n\
        \x20 garden list --search modern --sort name\n\
        \x20 garden show 4\n\
        \x20 garden dashboard --recent 3\n\
        \x20 garden completions bash > /usr/share/bash-completion/completions/garden",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the template categories.
    #[command(about = "List template categories")]
    Categories,

    /// Browse templates.
    #[command(
        visible_alias = "ls",
        about = "Browse templates",
        after_help = "EXAMPLES:\n\
            \x20 garden list\n\
            \x20 garden list --category e-commerce\n\
            \x20 garden list --search portfolio --sort oldest\n\
            \x20 garden list --format json"
    )]
    List(ListArgs),

    /// Preview one template.
    #[command(
        visible_alias = "preview",
        about = "Preview a template",
        after_help = "EXAMPLES:\n\
            \x20 garden show 1\n\
            \x20 garden show 1 --format json"
    )]
    Show(ShowArgs),

    /// Catalog summary.
    #[command(
        about = "Show catalog statistics and recent templates",
        after_help = "EXAMPLES:\n\
            \x20 garden dashboard\n\
            \x20 garden dashboard --recent 3"
    )]
    Dashboard(DashboardArgs),

    /// Submit a new template.
    #[command(
        visible_alias = "n",
        about = "Create a new template",
        after_help = "EXAMPLES:\n\
            \x20 garden new --name \"Travel Diary\" \\\n\
            \x20     --description \"A blog for travel stories.\" --category blog --published"
    )]
    New(NewArgs),

    /// Submit changes to a template.
    #[command(
        about = "Edit a template",
        after_help = "EXAMPLES:\n\
            \x20 garden edit 6 --name \"Tech Journal\"\n\
            \x20 garden edit 6 --unpublish"
    )]
    Edit(EditArgs),

    /// Submit removal of a template.
    #[command(
        visible_alias = "rm",
        about = "Delete a template",
        after_help = "EXAMPLES:\n\
            \x20 garden delete 7\n\
            \x20 garden delete 7 --yes"
    )]
    Delete(DeleteArgs),

    /// Print the account and preference settings.
    #[command(about = "Show account settings")]
    Settings(SettingsArgs),

    /// Initialise a Garden configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 garden init           # default location\n\
            \x20 garden init --local   # .garden.toml in CWD\n\
            \x20 garden init --force   # overwrite existing"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 garden completions bash > ~/.local/share/bash-completion/completions/garden\n\
            \x20 garden completions zsh  > ~/.zfunc/_garden\n\
            \x20 garden completions fish > ~/.config/fish/completions/garden.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Garden configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 garden config get browse.default_sort\n\
            \x20 garden config list\n\
            \x20 garden config path"
    )]
    Config(ConfigCommands),
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `garden list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Category slug, or `all`.
    #[arg(
        long = "category",
        value_name = "CATEGORY",
        help = "Filter by category (e-commerce, portfolio, blog, business, personal, landing, other, all)"
    )]
    pub category: Option<String>,

    /// Case-insensitive text to look for in name or description.
    #[arg(short = 's', long = "search", value_name = "TEXT", help = "Search names and descriptions")]
    pub search: Option<String>,

    /// Sort key; defaults to `browse.default_sort`.
    #[arg(
        long = "sort",
        value_name = "KEY",
        help = "Sort order (newest, oldest, name)"
    )]
    pub sort: Option<String>,

    /// Keep catalog order even if a default sort is configured.
    #[arg(long = "unsorted", conflicts_with = "sort", help = "Keep catalog order")]
    pub unsorted: bool,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── show ──────────────────────────────────────────────────────────────────────

/// Arguments for `garden show`.
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Template id.
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "text", help = "Output format")]
    pub format: RecordFormat,
}

/// Output format for single-record commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RecordFormat {
    /// Labelled fields.
    Text,
    /// JSON object with camelCase keys.
    Json,
}

// ── dashboard ─────────────────────────────────────────────────────────────────

/// Arguments for `garden dashboard`.
#[derive(Debug, Args)]
pub struct DashboardArgs {
    /// How many recently updated templates to show; defaults to `browse.recent_limit`.
    #[arg(short = 'r', long = "recent", value_name = "N", help = "Number of recent templates")]
    pub recent: Option<usize>,
}

// ── new / edit ────────────────────────────────────────────────────────────────

/// Arguments for `garden new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Template name (at least 3 characters).
    #[arg(long = "name", value_name = "NAME")]
    pub name: Option<String>,

    /// Template description (at least 10 characters).
    #[arg(long = "description", value_name = "TEXT")]
    pub description: Option<String>,

    /// Category slug.
    #[arg(long = "category", value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Publish immediately instead of saving as a draft.
    #[arg(long = "published")]
    pub published: bool,

    /// Preview image path or URL.
    #[arg(long = "image", value_name = "URL")]
    pub image: Option<String>,

    /// Prompt for missing fields.
    #[arg(short = 'i', long = "interactive", help = "Prompt for missing fields")]
    pub interactive: bool,
}

/// Arguments for `garden edit`.
///
/// Fields left out keep their current value.
#[derive(Debug, Args)]
pub struct EditArgs {
    /// Template id.
    #[arg(value_name = "ID")]
    pub id: String,

    #[arg(long = "name", value_name = "NAME")]
    pub name: Option<String>,

    #[arg(long = "description", value_name = "TEXT")]
    pub description: Option<String>,

    #[arg(long = "category", value_name = "CATEGORY")]
    pub category: Option<String>,

    #[arg(long = "image", value_name = "URL")]
    pub image: Option<String>,

    /// Mark as published.
    #[arg(long = "publish", conflicts_with = "unpublish")]
    pub publish: bool,

    /// Mark as draft.
    #[arg(long = "unpublish")]
    pub unpublish: bool,
}

impl EditArgs {
    /// Requested publication state, if any.
    pub fn published(&self) -> Option<bool> {
        match (self.publish, self.unpublish) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

// ── delete ────────────────────────────────────────────────────────────────────

/// Arguments for `garden delete`.
#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Template id.
    #[arg(value_name = "ID")]
    pub id: String,

    /// Skip the confirmation prompt.
    #[arg(short = 'y', long = "yes", help = "Skip confirmation")]
    pub yes: bool,
}

// ── settings ──────────────────────────────────────────────────────────────────

/// Arguments for `garden settings`.
#[derive(Debug, Args)]
pub struct SettingsArgs {
    /// Only print one section.
    #[arg(value_enum, value_name = "SECTION")]
    pub section: Option<SettingsSection>,
}

/// Sections of the settings page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SettingsSection {
    General,
    Appearance,
    Notifications,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `garden init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.garden.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `garden completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `garden config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `browse.default_sort`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_list_with_filters() {
        let cli = Cli::parse_from([
            "garden", "list", "--category", "blog", "--search", "tech", "--sort", "name",
        ]);
        let Commands::List(args) = cli.command else {
            panic!("expected List command");
        };
        assert_eq!(args.category.as_deref(), Some("blog"));
        assert_eq!(args.search.as_deref(), Some("tech"));
        assert_eq!(args.sort.as_deref(), Some("name"));
        assert_eq!(args.format, ListFormat::Table);
    }

    #[test]
    fn list_accepts_unknown_values_verbatim() {
        // Leniency is applied later, not by clap.
        let cli = Cli::parse_from(["garden", "ls", "--category", "Blog", "--sort", "popular"]);
        assert!(matches!(cli.command, Commands::List(_)));
    }

    #[test]
    fn sort_and_unsorted_conflict() {
        let result = Cli::try_parse_from(["garden", "list", "--sort", "name", "--unsorted"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_show_alias() {
        let cli = Cli::parse_from(["garden", "preview", "4", "--format", "json"]);
        let Commands::Show(args) = cli.command else {
            panic!("expected Show command");
        };
        assert_eq!(args.id, "4");
        assert_eq!(args.format, RecordFormat::Json);
    }

    #[test]
    fn edit_publish_flags() {
        let cli = Cli::parse_from(["garden", "edit", "6", "--unpublish"]);
        let Commands::Edit(args) = cli.command else {
            panic!("expected Edit command");
        };
        assert_eq!(args.published(), Some(false));

        let result = Cli::try_parse_from(["garden", "edit", "6", "--publish", "--unpublish"]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["garden", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
