use anyhow::{Context, Result};
use tracing::{info, warn};

use super::sources::{LoadedSources, load_sources};
use crate::cli::CheckArgs;
use crate::diagnostics::{CompanyNameGuesser, dropped_row_report, duplicate_names, missing_data};
use crate::model::CheckReport;
use crate::table::{TableKind, TableSchema};
use crate::util::{now_utc_string, write_json_pretty};

pub fn run(args: CheckArgs) -> Result<()> {
    let sources = load_sources(&args.sources)?;
    let report = build_check_report(&sources)?;

    for table in &report.dropped_rows {
        if table.dropped_rows == 0 {
            info!(table = %table.table, parsed_rows = table.parsed_rows, "no dropped rows");
            continue;
        }
        warn!(
            table = %table.table,
            parsed_rows = table.parsed_rows,
            dropped_rows = table.dropped_rows,
            "rows dropped by field-count check"
        );
        for group in &table.groups {
            warn!(
                table = %table.table,
                company = %group.company_guess,
                lines = ?group.lines,
                fields = ?group.actual_fields,
                "dropped rows"
            );
        }
    }

    for duplicate in &report.duplicate_names {
        warn!(name = %duplicate.name, rows = ?duplicate.rows, "duplicate company name");
    }

    log_missing("companies without images", &report.missing.without_images, args.list_limit);
    log_missing(
        "companies without business segments",
        &report.missing.without_segments,
        args.list_limit,
    );
    log_missing("companies without a city", &report.missing.without_city, args.list_limit);

    if let Some(path) = &args.report_path {
        write_json_pretty(path, &report)?;
        info!(path = %path.display(), "wrote check report");
    }

    Ok(())
}

pub fn build_check_report(sources: &LoadedSources) -> Result<CheckReport> {
    let guesser = CompanyNameGuesser::new()?;
    let dropped_rows = sources
        .tables()
        .iter()
        .map(|loaded| dropped_row_report(loaded.kind.as_str(), &loaded.table, &guesser))
        .collect();

    let profile_schema = TableSchema::resolve(TableKind::Profile, &sources.profile.table.headers)
        .context("failed to resolve profile table columns")?;
    let duplicate_names = duplicate_names(&sources.profile.table, &profile_schema);

    let data = sources.reconcile()?;

    Ok(CheckReport {
        report_version: 1,
        generated_at: now_utc_string(),
        dropped_rows,
        duplicate_names,
        missing: missing_data(&data.companies),
    })
}

fn log_missing(label: &str, names: &[String], limit: usize) {
    if names.is_empty() {
        info!(category = label, "none missing");
        return;
    }

    let shown = names.iter().take(limit).cloned().collect::<Vec<_>>();
    info!(
        category = label,
        count = names.len(),
        shown = %shown.join("、"),
        more = names.len().saturating_sub(shown.len()),
        "missing data"
    );
}
