use serde::Serialize;

use crate::diagnostics::{DroppedRowReport, DuplicateName, MissingData};
use crate::reconcile::JoinStats;
use crate::repair::{RepairReport, RepairSummary};

#[derive(Debug, Clone, Serialize)]
pub struct SourceEntry {
    pub table: String,
    pub path: String,
    pub sha256: String,
    pub parsed_rows: usize,
    pub dropped_rows: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct BuildCounts {
    pub companies: usize,
    pub cities: usize,
    pub provinces: usize,
    pub companies_without_images: usize,
    pub companies_without_segments: usize,
    pub companies_without_city: usize,
    pub join: JoinStats,
}

#[derive(Debug, Clone, Serialize)]
pub struct BuildOutput {
    pub path: String,
    pub format: String,
    pub sha256: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BuildManifest {
    pub manifest_version: u32,
    pub run_id: String,
    pub status: String,
    pub started_at: String,
    pub generated_at: String,
    pub strict: bool,
    pub sources: Vec<SourceEntry>,
    pub output: BuildOutput,
    pub counts: BuildCounts,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub report_version: u32,
    pub generated_at: String,
    pub dropped_rows: Vec<DroppedRowReport>,
    pub duplicate_names: Vec<DuplicateName>,
    pub missing: MissingData,
}

#[derive(Debug, Clone, Serialize)]
pub struct RepairRunReport {
    pub report_version: u32,
    pub generated_at: String,
    pub source_path: String,
    pub source_sha256: String,
    pub repaired_path: String,
    pub summary: RepairSummary,
    pub dropped_after_repair: usize,
    pub repair: RepairReport,
}
