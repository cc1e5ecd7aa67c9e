use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use crate::cli::SourceArgs;
use crate::model::SourceEntry;
use crate::reconcile::{Reconciled, reconcile};
use crate::table::{ParsedTable, TableKind};
use crate::util::{read_text, sha256_bytes};

#[derive(Debug)]
pub struct LoadedTable {
    pub kind: TableKind,
    pub path: PathBuf,
    pub sha256: String,
    pub table: ParsedTable,
}

impl LoadedTable {
    pub fn source_entry(&self) -> SourceEntry {
        SourceEntry {
            table: self.kind.as_str().to_string(),
            path: self.path.display().to_string(),
            sha256: self.sha256.clone(),
            parsed_rows: self.table.rows.len(),
            dropped_rows: self.table.dropped.len(),
        }
    }
}

#[derive(Debug)]
pub struct LoadedSources {
    pub profile: LoadedTable,
    pub images: LoadedTable,
    pub business: LoadedTable,
}

impl LoadedSources {
    pub fn tables(&self) -> [&LoadedTable; 3] {
        [&self.profile, &self.images, &self.business]
    }

    pub fn reconcile(&self) -> Result<Reconciled> {
        reconcile(&self.profile.table, &self.images.table, &self.business.table)
    }

    pub fn dropped_row_warnings(&self) -> Vec<String> {
        self.tables()
            .iter()
            .filter(|loaded| !loaded.table.dropped.is_empty())
            .map(|loaded| {
                let lines = loaded
                    .table
                    .dropped
                    .iter()
                    .map(|row| row.line.to_string())
                    .collect::<Vec<_>>();
                format!(
                    "{} table dropped {} row(s) with a field count other than {} (lines {})",
                    loaded.kind.as_str(),
                    loaded.table.dropped.len(),
                    loaded.table.expected_fields(),
                    lines.join(", ")
                )
            })
            .collect()
    }
}

pub fn load_sources(sources: &SourceArgs) -> Result<LoadedSources> {
    Ok(LoadedSources {
        profile: load_table(sources, TableKind::Profile)?,
        images: load_table(sources, TableKind::Images)?,
        business: load_table(sources, TableKind::Business)?,
    })
}

pub fn load_table(sources: &SourceArgs, kind: TableKind) -> Result<LoadedTable> {
    let path = sources.path_for(kind);
    let text = read_text(&path)?;
    let table = ParsedTable::parse(&text);

    info!(
        table = kind.as_str(),
        path = %path.display(),
        records = table.data_record_count(),
        rows = table.rows.len(),
        dropped = table.dropped.len(),
        "parsed source table"
    );

    Ok(LoadedTable {
        kind,
        path,
        sha256: sha256_bytes(text.as_bytes()),
        table,
    })
}
