use std::collections::HashSet;

use anyhow::{Context, Result};
use tracing::{info, warn};

use super::sources::load_sources;
use crate::cli::PruneArgs;
use crate::table::{Field, ParsedTable, TableKind, TableSchema};
use crate::util::write_text;

pub fn run(args: PruneArgs) -> Result<()> {
    let targets = args
        .companies
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .collect::<HashSet<&str>>();
    let sources = load_sources(&args.sources)?;
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| args.sources.data_dir.join("pruned"));

    info!(
        companies = targets.len(),
        output_dir = %output_dir.display(),
        "starting prune"
    );

    // Render every table before writing any of them.
    let mut pruned = Vec::new();
    let mut found = HashSet::<String>::new();
    for loaded in sources.tables() {
        let (csv, removed) = prune_table(&loaded.table, loaded.kind, &targets)?;
        info!(
            table = loaded.kind.as_str(),
            removed = removed.len(),
            "pruned table"
        );
        found.extend(removed);
        let file_name = loaded
            .path
            .file_name()
            .with_context(|| format!("source path has no file name: {}", loaded.path.display()))?;
        pruned.push((output_dir.join(file_name), csv));
    }

    for (path, csv) in &pruned {
        write_text(path, csv)?;
        info!(path = %path.display(), "wrote pruned table");
    }

    let mut missing = targets
        .iter()
        .filter(|name| !found.contains(**name))
        .collect::<Vec<_>>();
    missing.sort();
    for name in missing {
        warn!(name = %name, "company not found in any table");
    }

    Ok(())
}

// Kept records, dropped ones included, are copied through as they appeared in
// the source. Line terminators become `\n` and a leading BOM is not kept.
pub fn prune_table(
    table: &ParsedTable,
    kind: TableKind,
    targets: &HashSet<&str>,
) -> Result<(String, Vec<String>)> {
    let schema = TableSchema::resolve(kind, &table.headers)
        .with_context(|| format!("failed to resolve {} table columns", kind.as_str()))?;
    let name_column = schema
        .column(Field::Name)
        .with_context(|| format!("{} table has no company name column", kind.as_str()))?;

    let mut lines = vec![table.header_raw.as_str()];
    let mut removed = Vec::new();
    for row in table.rows_in_source_order() {
        let name = row.cell(name_column);
        if targets.contains(name) {
            removed.push(name.to_string());
        } else {
            lines.push(row.raw.as_str());
        }
    }

    let mut csv = lines.join("\n");
    csv.push('\n');
    Ok((csv, removed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::{sample_data_dir, source_args};
    use crate::util::read_text;

    #[test]
    fn prune_table_removes_every_row_of_a_company() {
        let table = ParsedTable::parse("企业名称,图片路径\n甲,a.jpg\n乙,b.jpg\n甲,c.jpg\n");
        let targets = HashSet::from(["甲"]);

        let (csv, removed) = prune_table(&table, TableKind::Images, &targets).expect("prune");
        assert_eq!(csv, "企业名称,图片路径\n乙,b.jpg\n");
        assert_eq!(removed, vec!["甲", "甲"]);
    }

    #[test]
    fn dropped_rows_survive_in_source_order() {
        let table = ParsedTable::parse("企业名称,地区\n甲,x\n残缺行\n乙,y\n");
        let targets = HashSet::from(["乙"]);

        let (csv, _) = prune_table(&table, TableKind::Profile, &targets).expect("prune");
        assert_eq!(csv, "企业名称,地区\n甲,x\n残缺行\n");
    }

    #[test]
    fn kept_records_are_copied_verbatim() {
        let source = "企业名称 , 地区\n 甲 ,\"总部：南京\"\n乙,\"多行\n简介\"\n丙,\"a,\"\"b\"\"\"\n";
        let table = ParsedTable::parse(source);
        let targets = HashSet::from(["丙"]);

        let (csv, removed) = prune_table(&table, TableKind::Profile, &targets).expect("prune");
        assert_eq!(csv, "企业名称 , 地区\n 甲 ,\"总部：南京\"\n乙,\"多行\n简介\"\n");
        assert_eq!(removed, vec!["丙"]);
    }

    #[test]
    fn run_writes_pruned_copies_of_all_tables() {
        let dir = sample_data_dir();
        run(PruneArgs {
            sources: source_args(dir.path()),
            companies: vec!["乙科技股份有限公司".to_string(), "不存在公司".to_string()],
            output_dir: None,
        })
        .expect("prune runs");

        let pruned = dir.path().join("pruned");
        let profile = ParsedTable::parse(&read_text(&pruned.join("公司介绍.csv")).expect("profile"));
        assert_eq!(profile.rows.len(), 2);
        assert_eq!(profile.dropped.len(), 1);
        assert!(profile.rows.iter().all(|row| row.cell(0) != "乙科技股份有限公司"));
        assert_eq!(profile.rows[0].cell(3), "专注新能源,\n覆盖全国");

        let images = ParsedTable::parse(&read_text(&pruned.join("企业图片.csv")).expect("images"));
        assert_eq!(images.rows.len(), 1);
        assert_eq!(images.rows[0].cell(0), "未收录有限公司");

        let business =
            ParsedTable::parse(&read_text(&pruned.join("企业业务板块和内推岗位.csv")).expect("business"));
        assert!(business.rows.is_empty());
    }
}
