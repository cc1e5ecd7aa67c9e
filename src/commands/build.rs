use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use chrono::Utc;
use tracing::{info, warn};

use super::sources::load_sources;
use crate::cli::BuildArgs;
use crate::diagnostics::missing_data;
use crate::model::{BuildCounts, BuildManifest, BuildOutput};
use crate::render::{OutputFormat, render};
use crate::util::{now_utc_string, sha256_file, utc_compact_string, write_json_pretty, write_text};

pub fn run(args: BuildArgs) -> Result<()> {
    let started_ts = Utc::now();
    let started_at = now_utc_string();
    let run_id = format!("build-{}", utc_compact_string(started_ts));
    let data_dir = args.sources.data_dir.clone();

    info!(data_dir = %data_dir.display(), run_id = %run_id, "starting build");

    let sources = load_sources(&args.sources)?;

    let mut warnings = sources.dropped_row_warnings();
    for warning in &warnings {
        warn!(warning = %warning, "source rows dropped");
    }
    if args.strict && !warnings.is_empty() {
        bail!(
            "strict build refused {} table(s) with dropped rows; run `check` or `repair` first",
            warnings.len()
        );
    }

    let data = sources.reconcile()?;
    let stats = &data.stats;
    info!(
        companies = data.companies.len(),
        cities = data.cities.len(),
        provinces = data.provinces.len(),
        duplicate_rows = stats.duplicate_rows,
        unnamed_rows = stats.unnamed_rows,
        image_rows_unmatched = stats.image_rows_unmatched,
        segment_rows_unmatched = stats.segment_rows_unmatched,
        "reconciled company data"
    );
    if stats.duplicate_rows > 0 {
        warnings.push(format!(
            "{} duplicate profile row(s) ignored; first occurrence kept",
            stats.duplicate_rows
        ));
    }

    let missing = missing_data(&data.companies);
    info!(
        without_images = missing.without_images.len(),
        without_segments = missing.without_segments.len(),
        without_city = missing.without_city.len(),
        "data quality"
    );

    let rendered = render(&data, args.format)?;

    if args.dry_run {
        info!(
            bytes = rendered.len(),
            format = args.format.as_str(),
            "build dry-run complete"
        );
        return Ok(());
    }

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&data_dir, args.format));
    write_text(&output_path, &rendered)?;
    info!(path = %output_path.display(), "wrote company data");

    let manifest_path = args.manifest_path.clone().unwrap_or_else(|| {
        data_dir.join("manifests").join(format!(
            "build_run_{}.json",
            utc_compact_string(started_ts)
        ))
    });

    let manifest = BuildManifest {
        manifest_version: 1,
        run_id,
        status: "completed".to_string(),
        started_at,
        generated_at: now_utc_string(),
        strict: args.strict,
        sources: sources
            .tables()
            .iter()
            .map(|loaded| loaded.source_entry())
            .collect(),
        output: BuildOutput {
            path: output_path.display().to_string(),
            format: args.format.as_str().to_string(),
            sha256: sha256_file(&output_path)?,
        },
        counts: BuildCounts {
            companies: data.companies.len(),
            cities: data.cities.len(),
            provinces: data.provinces.len(),
            companies_without_images: missing.without_images.len(),
            companies_without_segments: missing.without_segments.len(),
            companies_without_city: missing.without_city.len(),
            join: data.stats.clone(),
        },
        warnings,
    };

    write_json_pretty(&manifest_path, &manifest)?;
    info!(path = %manifest_path.display(), "wrote build manifest");
    info!(companies = manifest.counts.companies, "build completed");

    Ok(())
}

fn default_output_path(data_dir: &Path, format: OutputFormat) -> PathBuf {
    let file_name = match format {
        OutputFormat::Module => "data.js",
        OutputFormat::Json => "data.json",
    };
    data_dir.join("js").join(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::{sample_data_dir, source_args};
    use crate::util::read_text;

    fn build_args(dir: &Path) -> BuildArgs {
        BuildArgs {
            sources: source_args(dir),
            output: None,
            format: OutputFormat::Module,
            manifest_path: Some(dir.join("manifest.json")),
            strict: false,
            dry_run: false,
        }
    }

    #[test]
    fn build_writes_module_and_manifest() {
        let dir = sample_data_dir();
        run(build_args(dir.path())).expect("build should succeed");

        let module = read_text(&dir.path().join("js").join("data.js")).expect("module written");
        assert!(module.contains("export const companiesData"));
        assert!(module.contains("\"name\": \"甲测试有限公司\""));
        assert!(module.contains("\"intro\": \"专注新能源,\\n覆盖全国\""));
        assert!(!module.contains("丙集团有限公司"));

        let manifest: serde_json::Value = serde_json::from_str(
            &read_text(&dir.path().join("manifest.json")).expect("manifest written"),
        )
        .expect("manifest is json");
        assert_eq!(manifest["counts"]["companies"], 2);
        assert_eq!(manifest["counts"]["join"]["duplicate_rows"], 1);
        assert_eq!(manifest["sources"][0]["dropped_rows"], 1);
        assert_eq!(manifest["warnings"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn repeated_builds_produce_identical_output() {
        let dir = sample_data_dir();
        let output = dir.path().join("out").join("data.js");

        let mut args = build_args(dir.path());
        args.output = Some(output.clone());
        run(args.clone()).expect("first build");
        let first = read_text(&output).expect("first output");
        run(args).expect("second build");
        let second = read_text(&output).expect("second output");

        assert_eq!(first, second);
    }

    #[test]
    fn strict_build_fails_before_writing_output() {
        let dir = sample_data_dir();
        let mut args = build_args(dir.path());
        args.strict = true;

        let err = run(args).expect_err("dropped profile row must fail a strict build");
        assert!(err.to_string().contains("strict"));
        assert!(!dir.path().join("js").join("data.js").exists());
    }

    #[test]
    fn missing_source_file_aborts_without_output() {
        let dir = sample_data_dir();
        std::fs::remove_file(dir.path().join("企业图片.csv")).expect("remove image csv");

        let err = run(build_args(dir.path())).expect_err("missing image csv must fail");
        assert!(format!("{err:#}").contains("企业图片.csv"));
        assert!(!dir.path().join("js").join("data.js").exists());
        assert!(!dir.path().join("manifest.json").exists());
    }

    #[test]
    fn json_format_writes_next_to_module_default() {
        let dir = sample_data_dir();
        let mut args = build_args(dir.path());
        args.format = OutputFormat::Json;
        run(args).expect("json build");

        let text = read_text(&dir.path().join("js").join("data.json")).expect("json written");
        let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");
        assert_eq!(value["activeCities"], serde_json::json!(["南京市", "苏州市"]));
    }
}
