//! `garden show` - preview one template.

use crate::{
    cli::{RecordFormat, ShowArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ShowArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = super::catalog_service(&config)?;
    let record = service.get(&super::template_id(&args.id)?)?;

    if args.format == RecordFormat::Json || output.is_json() {
        output.json(&record)?;
    } else {
        super::print_record(&record, &output)?;
    }
    Ok(())
}
