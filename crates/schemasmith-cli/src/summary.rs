use std::path::Path;

use schemasmith_codegen::SchemaSource;
use schemasmith_core::{CatalogSnapshot, TableDescriptor};
use schemasmith_dedup::DedupOutcome;

/// Where a rendered schema went.
pub enum Destination<'a> {
    File(&'a Path),
    Stdout,
}

pub fn synth_summary(
    snapshot: &CatalogSnapshot,
    source: &SchemaSource,
    destination: Destination<'_>,
) -> String {
    let target = match destination {
        Destination::File(path) => path.display().to_string(),
        Destination::Stdout => "stdout".to_string(),
    };
    format!(
        "Found {} tables, using {} after deduplication; wrote {} columns to {}",
        snapshot.discovered, source.tables, source.columns, target
    )
}

pub fn dedup_summary(outcome: &DedupOutcome, path: &Path, check: bool) -> String {
    let mut summary = format!(
        "{}: {} unique definitions, duplicates removed: {}",
        path.display(),
        outcome.retained.len(),
        outcome.duplicates_removed()
    );
    if let Some(name) = &outcome.unterminated {
        summary.push_str(&format!(", unterminated block kept: {name}"));
    }
    if check {
        summary.push_str(" (check only, nothing written)");
    }
    summary
}

/// One `table.column: default=..., nullable=...` line per verified column.
pub fn column_report(tables: &[TableDescriptor]) -> Vec<String> {
    tables
        .iter()
        .flat_map(|table| {
            table.columns.iter().map(move |column| {
                format!(
                    "{}.{}: default={}, nullable={}",
                    table.source_name,
                    column.source_name,
                    column.default_expression.as_deref().unwrap_or("none"),
                    column.nullable
                )
            })
        })
        .collect()
}

/// Column report for the `ALTER TABLE` targets, before and after the script ran.
pub fn apply_report(before: &[TableDescriptor], after: &[TableDescriptor]) -> Vec<String> {
    let mut lines = vec!["before:".to_string()];
    lines.extend(column_report(before));
    lines.push("after:".to_string());
    lines.extend(column_report(after));
    lines
}
