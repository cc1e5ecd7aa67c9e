use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::cli::RepairArgs;
use crate::model::RepairRunReport;
use crate::repair::{
    RecordClassifiers, RepairReport, RepairStrategy, SlotRule, merge_rows, realign,
};
use crate::table::{ParsedTable, TableKind, TableSchema, tokenize, write_table};
use crate::util::{now_utc_string, read_text, sha256_bytes, write_json_pretty, write_text};

pub fn run(args: RepairArgs) -> Result<()> {
    let source_path = args.sources.path_for(args.table);
    let text = read_text(&source_path)?;

    info!(
        table = args.table.as_str(),
        strategy = args.strategy.as_str(),
        path = %source_path.display(),
        "starting repair"
    );

    let report = repair_text(&text, args.table, args.strategy)?;
    let csv = render_repaired(&report);

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&source_path, args.strategy));
    write_text(&output_path, &csv)?;

    let reparsed = ParsedTable::parse(&csv);
    let summary = report.summary();
    info!(
        path = %output_path.display(),
        records = summary.records,
        high = summary.high,
        medium = summary.medium,
        low = summary.low,
        unparseable = summary.unparseable,
        dropped_after_repair = reparsed.dropped.len(),
        "wrote repaired table"
    );
    if !reparsed.dropped.is_empty() {
        warn!(
            dropped = reparsed.dropped.len(),
            "repaired table still has rows with the wrong field count"
        );
    }

    for record in report.needs_review() {
        warn!(
            line = record.line,
            name = %record.fields.first().map(String::as_str).unwrap_or(""),
            confidence = ?record.confidence,
            issues = record.issues.len(),
            "record needs review"
        );
    }
    for fragment in &report.unparseable {
        warn!(line = fragment.line, reason = %fragment.reason, text = %fragment.text, "unparseable fragment");
    }

    let report_path = args
        .report_path
        .clone()
        .unwrap_or_else(|| output_path.with_extension("json"));
    let run_report = RepairRunReport {
        report_version: 1,
        generated_at: now_utc_string(),
        source_path: source_path.display().to_string(),
        source_sha256: sha256_bytes(text.as_bytes()),
        repaired_path: output_path.display().to_string(),
        summary,
        dropped_after_repair: reparsed.dropped.len(),
        repair: report,
    };
    write_json_pretty(&report_path, &run_report)?;
    info!(path = %report_path.display(), "wrote repair report");

    Ok(())
}

pub fn repair_text(text: &str, table: TableKind, strategy: RepairStrategy) -> Result<RepairReport> {
    let records = tokenize(text);

    match strategy {
        RepairStrategy::Realign => {
            let headers = records.first().map(|header| header.texts()).unwrap_or_default();
            let schema = TableSchema::resolve(table, &headers)
                .with_context(|| format!("failed to resolve {} table columns", table.as_str()))?;
            let fields = (0..headers.len())
                .map(|column| schema.field_at(column))
                .collect::<Vec<_>>();
            let classifiers = RecordClassifiers::for_columns(&fields);
            debug!(
                slots = ?classifiers.slots.iter().map(SlotRule::describe).collect::<Vec<_>>(),
                "column classifiers"
            );
            Ok(realign(&records, &classifiers))
        }
        RepairStrategy::Merge => Ok(merge_rows(&ParsedTable::from_records(records))),
    }
}

fn render_repaired(report: &RepairReport) -> String {
    let mut csv = write_table(
        &report.headers,
        report.records.iter().map(|record| &record.fields),
    );
    csv.push('\n');
    csv
}

fn default_output_path(source: &Path, strategy: RepairStrategy) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "table".to_string());
    source.with_file_name(format!("{stem}_repaired_{}.csv", strategy.as_str()))
}
