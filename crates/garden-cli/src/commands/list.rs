//! `garden list` - browse the catalog.

use tracing::debug;

use garden_core::domain::{QueryFilter, TemplateRecord};

use crate::{
    cli::{ListArgs, ListFormat},
    config::AppConfig,
    error::CliResult,
    output::{OutputManager, csv_field, format_date, status_label},
};

const HEADERS: [&str; 5] = ["ID", "NAME", "CATEGORY", "STATUS", "CREATED"];

pub fn execute(args: ListArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let filter = build_filter(&args, &config);
    debug!(%filter, "listing templates");

    let service = super::catalog_service(&config)?;
    let templates = service.query(&filter)?;

    let format = if output.is_json() {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            if templates.is_empty() {
                output.info("No templates found. Try adjusting your search or filters.")?;
                return Ok(());
            }
            output.table(&HEADERS, &table_rows(&templates))?;
        }
        ListFormat::List => {
            for t in &templates {
                output.data(&t.name)?;
            }
        }
        ListFormat::Json => output.json(&templates)?,
        ListFormat::Csv => {
            output.data(&HEADERS.join(",").to_lowercase())?;
            for row in table_rows(&templates) {
                let line: Vec<String> = row.iter().map(|c| csv_field(c)).collect();
                output.data(&line.join(","))?;
            }
        }
    }

    Ok(())
}

/// Lenient filter from the flags; `browse.default_sort` fills in a missing `--sort`.
fn build_filter(args: &ListArgs, config: &AppConfig) -> QueryFilter {
    let filter = QueryFilter::lenient(
        args.category.as_deref(),
        args.search.as_deref(),
        args.sort.as_deref(),
    );

    if args.sort.is_none() && !args.unsorted {
        filter.with_sort(config.browse.default_sort)
    } else {
        filter
    }
}

fn table_rows(templates: &[TemplateRecord]) -> Vec<Vec<String>> {
    templates
        .iter()
        .map(|t| {
            vec![
                t.id.to_string(),
                t.name.clone(),
                t.category.label(),
                status_label(t.is_published).to_string(),
                format_date(&t.created_at),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use garden_core::domain::{CategorySelector, SortKey};

    fn args(category: Option<&str>, sort: Option<&str>, unsorted: bool) -> ListArgs {
        ListArgs {
            category: category.map(str::to_string),
            search: None,
            sort: sort.map(str::to_string),
            unsorted,
            format: ListFormat::Table,
        }
    }

    #[test]
    fn default_sort_applies_when_no_flag() {
        let filter = build_filter(&args(None, None, false), &AppConfig::default());
        assert_eq!(filter.sort_by(), Some(SortKey::Newest));
    }

    #[test]
    fn unsorted_keeps_catalog_order() {
        let filter = build_filter(&args(None, None, true), &AppConfig::default());
        assert_eq!(filter.sort_by(), None);
    }

    #[test]
    fn explicit_sort_wins() {
        let filter = build_filter(&args(None, Some("name"), false), &AppConfig::default());
        assert_eq!(filter.sort_by(), Some(SortKey::Name));
    }

    #[test]
    fn unknown_values_are_ignored() {
        let filter = build_filter(&args(Some("weird"), Some("rating"), false), &AppConfig::default());
        assert_eq!(filter.category(), CategorySelector::All);
        assert_eq!(filter.sort_by(), None);
    }
}
