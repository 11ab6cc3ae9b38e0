//! Implementation of the `garden new` command.
//!
//! Responsibility: turn CLI arguments into a [`TemplateDraft`], submit it to
//! the catalog service, and display the acknowledgement. Validation lives in
//! the core.

use tracing::{debug, instrument};

use garden_core::domain::TemplateDraft;

use crate::{
    cli::NewArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `garden new` command.
///
/// 1. Collect the draft from flags (and prompts with `--interactive`)
/// 2. Submit it; invalid drafts fail with every field violation listed
/// 3. Print the record as it would be stored
#[instrument(skip_all)]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let interactive = args.interactive;
    let mut draft = draft_from_args(args);

    if interactive {
        draft = prompt_missing(draft)?;
    }

    debug!(name = %draft.name, category = ?draft.category, "submitting new template");

    let service = super::catalog_service(&config)?;
    let submission = service.submit_create(draft)?;
    super::print_submission(&submission, &output)
}

fn draft_from_args(args: NewArgs) -> TemplateDraft {
    TemplateDraft {
        name: args.name.unwrap_or_default(),
        description: args.description.unwrap_or_default(),
        category: args.category,
        is_published: args.published,
        image: args.image,
    }
}

#[cfg(feature = "interactive")]
fn prompt_missing(mut draft: TemplateDraft) -> CliResult<TemplateDraft> {
    use dialoguer::{Confirm, Input, Select};
    use garden_core::domain::{Category, list_categories};

    fn prompt_failed(e: dialoguer::Error) -> CliError {
        CliError::InvalidInput {
            message: "interactive prompt failed".into(),
            source: Some(Box::new(e)),
        }
    }

    if draft.name.is_empty() {
        draft.name = Input::<String>::new()
            .with_prompt("Name")
            .interact_text()
            .map_err(prompt_failed)?;
    }

    if draft.description.is_empty() {
        draft.description = Input::<String>::new()
            .with_prompt("Description")
            .interact_text()
            .map_err(prompt_failed)?;
    }

    if draft.category.is_none() {
        let categories: &[Category] = list_categories();
        let labels: Vec<String> = categories.iter().map(Category::label).collect();
        let picked = Select::new()
            .with_prompt("Category")
            .items(&labels[..])
            .default(0)
            .interact()
            .map_err(prompt_failed)?;
        draft.category = categories.get(picked).map(|c| c.as_str().to_string());
    }

    if !draft.is_published {
        draft.is_published = Confirm::new()
            .with_prompt("Publish now?")
            .default(false)
            .interact()
            .map_err(prompt_failed)?;
    }

    Ok(draft)
}

#[cfg(not(feature = "interactive"))]
fn prompt_missing(_draft: TemplateDraft) -> CliResult<TemplateDraft> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> NewArgs {
        NewArgs {
            name: Some("Travel Diary".into()),
            description: Some("A blog for travel stories.".into()),
            category: Some("blog".into()),
            published: true,
            image: None,
            interactive: false,
        }
    }

    #[test]
    fn flags_map_onto_draft() {
        let draft = draft_from_args(args());
        assert_eq!(draft.name, "Travel Diary");
        assert_eq!(draft.category.as_deref(), Some("blog"));
        assert!(draft.is_published);
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn missing_flags_leave_fields_empty() {
        let draft = draft_from_args(NewArgs {
            name: None,
            description: None,
            category: None,
            published: false,
            image: None,
            interactive: false,
        });
        assert!(draft.name.is_empty());
        assert!(draft.category.is_none());
        assert!(draft.validate().is_err());
    }
}
