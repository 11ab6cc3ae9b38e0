//! `garden dashboard` - totals and recently updated templates.

use garden_core::domain::DashboardStats;

use crate::{
    cli::DashboardArgs,
    config::AppConfig,
    error::CliResult,
    output::{OutputManager, format_date, status_label},
};

pub fn execute(args: DashboardArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let limit = args.recent.unwrap_or(config.browse.recent_limit);
    let service = super::catalog_service(&config)?;
    let stats = service.dashboard(limit)?;

    if output.is_json() {
        output.json(&stats)?;
        return Ok(());
    }

    render(&stats, &output)
}

fn render(stats: &DashboardStats, output: &OutputManager) -> CliResult<()> {
    output.header("Dashboard")?;
    output.field("Total", &stats.total.to_string(), 10)?;
    output.field("Published", &stats.published.to_string(), 10)?;
    output.field("Drafts", &stats.drafts.to_string(), 10)?;
    output.print("")?;

    output.header("Recent Templates")?;
    if stats.recent.is_empty() {
        output.info("No templates yet.")?;
        return Ok(());
    }

    let rows: Vec<Vec<String>> = stats
        .recent
        .iter()
        .map(|r| {
            vec![
                r.id.to_string(),
                r.name.clone(),
                status_label(r.is_published).to_string(),
                format_date(&r.updated_at),
            ]
        })
        .collect();
    output.table(&["ID", "NAME", "STATUS", "UPDATED"], &rows)?;
    Ok(())
}
