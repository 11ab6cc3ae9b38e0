//! Command handlers, one module per subcommand.
//!
//! Shared plumbing lives here: opening the catalog, rendering a record, and
//! asking the user for confirmation.

pub mod categories;
pub mod completions;
pub mod config;
pub mod dashboard;
pub mod delete;
pub mod edit;
pub mod init;
pub mod list;
pub mod new;
pub mod settings;
pub mod show;

use std::io::{self, Write};

use tracing::info;

use garden_adapters::resolve_catalog;
use garden_core::{
    application::{ApplicationError, CatalogService, Submission},
    domain::{TemplateId, TemplateRecord},
};

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
    output::{OutputManager, format_date, status_label},
};

const FIELD_WIDTH: usize = 11;

/// Open the configured catalog and wrap it in a service.
///
/// A catalog directory that cannot be loaded is a configuration problem.
pub(crate) fn catalog_service(config: &AppConfig) -> CliResult<CatalogService> {
    let catalog = resolve_catalog(config.catalog.dir.as_deref()).map_err(|e| {
        CliError::Core(
            ApplicationError::CatalogUnavailable {
                reason: e.to_string(),
            }
            .into(),
        )
    })?;

    let service = CatalogService::new(Box::new(catalog));
    info!(source = %service.source(), "catalog opened");
    Ok(service)
}

/// Id given on the command line. A blank id names no template.
pub(crate) fn template_id(raw: &str) -> CliResult<TemplateId> {
    TemplateId::parse(raw).map_err(|_| {
        CliError::Core(ApplicationError::TemplateNotFound { id: raw.to_string() }.into())
    })
}

/// Labelled preview of one record.
pub(crate) fn print_record(record: &TemplateRecord, output: &OutputManager) -> CliResult<()> {
    output.header(&record.name)?;
    output.field("ID", record.id.as_str(), FIELD_WIDTH)?;
    output.field("Category", &record.category.label(), FIELD_WIDTH)?;
    output.field("Status", status_label(record.is_published), FIELD_WIDTH)?;
    output.field("Created", &format_date(&record.created_at), FIELD_WIDTH)?;
    output.field("Updated", &format_date(&record.updated_at), FIELD_WIDTH)?;
    if !record.image.is_empty() {
        output.field("Image", &record.image, FIELD_WIDTH)?;
    }
    if !record.description.is_empty() {
        output.print("")?;
        output.print(&format!("  {}", record.description))?;
    }
    Ok(())
}

/// Report an accepted submission.
pub(crate) fn print_submission(submission: &Submission, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        output.json(submission)?;
        return Ok(());
    }

    output.success(&format!(
        "Template '{}' {} successfully!",
        submission.record.name, submission.action
    ))?;
    if !submission.persisted {
        output.info("The catalog is read-only; this change was validated but not saved.")?;
    }
    output.print("")?;
    print_record(&submission.record, output)
}

/// Ask a yes/no question.
///
/// Uses a dialoguer prompt on a terminal when the `interactive` feature is
/// enabled, otherwise reads one line from stdin. Empty input means `default`.
pub(crate) fn confirm(prompt: &str, default: bool) -> CliResult<bool> {
    #[cfg(feature = "interactive")]
    if std::io::IsTerminal::is_terminal(&io::stdin()) {
        return dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(|e| CliError::InvalidInput {
                message: "confirmation prompt failed".into(),
                source: Some(Box::new(e)),
            });
    }

    let hint = if default { "[Y/n]" } else { "[y/N]" };
    print!("{prompt} {hint} ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    Ok(parse_answer(&input, default))
}

fn parse_answer(input: &str, default: bool) -> bool {
    match input.trim().to_ascii_lowercase().as_str() {
        "" => default,
        "y" | "yes" => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_answer_takes_default() {
        assert!(parse_answer("\n", true));
        assert!(!parse_answer("", false));
    }

    #[test]
    fn explicit_answers() {
        assert!(parse_answer("Y\n", false));
        assert!(parse_answer("yes", false));
        assert!(!parse_answer("n", true));
        assert!(!parse_answer("maybe", true));
    }

    #[test]
    fn blank_id_is_not_found() {
        for raw in ["", "   "] {
            let err = template_id(raw).err().unwrap();
            assert_eq!(err.exit_code(), 3);
        }
        assert_eq!(template_id("4").unwrap().as_str(), "4");
    }

    #[test]
    fn builtin_catalog_opens_by_default() {
        let service = catalog_service(&AppConfig::default()).unwrap();
        assert_eq!(service.source(), "builtin");
    }

    #[test]
    fn missing_catalog_dir_is_configuration_error() {
        let mut config = AppConfig::default();
        config.catalog.dir = Some("/absolutely/does/not/exist".into());
        let err = catalog_service(&config).err().unwrap();
        assert_eq!(err.exit_code(), 4);
    }
}
