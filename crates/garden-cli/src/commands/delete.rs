//! `garden delete` - submit removal of a template.

use tracing::instrument;

use crate::{
    cli::DeleteArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Look the template up, confirm, then submit.
///
/// The prompt is skipped with `--yes` or `--quiet`.
#[instrument(skip_all, fields(id = %args.id))]
pub fn execute(args: DeleteArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = super::catalog_service(&config)?;
    let id = super::template_id(&args.id)?;
    let record = service.get(&id)?;

    if !args.yes && !output.is_quiet() {
        let prompt = format!(
            "Delete \"{}\"? This action cannot be undone.",
            record.name
        );
        if !super::confirm(&prompt, false)? {
            return Err(CliError::Cancelled);
        }
    }

    let submission = service.submit_delete(&id)?;
    super::print_submission(&submission, &output)
}
