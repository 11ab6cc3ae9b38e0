//! `garden categories` - print the closed category set.

use serde::Serialize;

use garden_core::domain::{Category, list_categories};

use crate::{error::CliResult, output::OutputManager};

#[derive(Serialize)]
struct CategoryRow {
    slug: &'static str,
    label: String,
}

fn rows(categories: &[Category]) -> Vec<CategoryRow> {
    categories
        .iter()
        .map(|c| CategoryRow {
            slug: c.as_str(),
            label: c.label(),
        })
        .collect()
}

pub fn execute(output: OutputManager) -> CliResult<()> {
    let rows = rows(list_categories());

    if output.is_json() {
        output.json(&rows)?;
        return Ok(());
    }

    let table: Vec<Vec<String>> = rows
        .iter()
        .map(|r| vec![r.slug.to_string(), r.label.clone()])
        .collect();
    output.table(&["SLUG", "LABEL"], &table)?;
    Ok(())
}
