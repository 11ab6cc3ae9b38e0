//! `garden edit` - submit changes to an existing template.

use tracing::instrument;

use garden_core::domain::TemplateDraft;

use crate::{cli::EditArgs, config::AppConfig, error::CliResult, output::OutputManager};

#[instrument(skip_all, fields(id = %args.id))]
pub fn execute(args: EditArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = super::catalog_service(&config)?;
    let id = super::template_id(&args.id)?;

    let current = service.get(&id)?;
    let draft = apply(TemplateDraft::from_record(&current), &args);

    let submission = service.submit_update(&id, draft)?;
    super::print_submission(&submission, &output)
}

/// Overlay the given flags on the current values.
fn apply(mut draft: TemplateDraft, args: &EditArgs) -> TemplateDraft {
    if let Some(name) = &args.name {
        draft.name = name.clone();
    }
    if let Some(description) = &args.description {
        draft.description = description.clone();
    }
    if let Some(category) = &args.category {
        draft.category = Some(category.clone());
    }
    if let Some(image) = &args.image {
        draft.image = Some(image.clone());
    }
    if let Some(published) = args.published() {
        draft.is_published = published;
    }
    draft
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> TemplateDraft {
        TemplateDraft {
            name: "Tech Blog".into(),
            description: "Modern blog template for tech enthusiasts.".into(),
            category: Some("blog".into()),
            is_published: true,
            image: Some("/placeholder.svg".into()),
        }
    }

    fn args() -> EditArgs {
        EditArgs {
            id: "6".into(),
            name: None,
            description: None,
            category: None,
            image: None,
            publish: false,
            unpublish: false,
        }
    }

    #[test]
    fn no_flags_keeps_everything() {
        assert_eq!(apply(base(), &args()), base());
    }

    #[test]
    fn flags_override_fields() {
        let edited = apply(
            base(),
            &EditArgs {
                name: Some("Tech Journal".into()),
                unpublish: true,
                ..args()
            },
        );
        assert_eq!(edited.name, "Tech Journal");
        assert!(!edited.is_published);
        assert_eq!(edited.category.as_deref(), Some("blog"));
    }
}
