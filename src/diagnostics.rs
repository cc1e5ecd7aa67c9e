use std::collections::HashMap;

use anyhow::{Context, Result};
use regex::Regex;
use serde::Serialize;

use crate::reconcile::Company;
use crate::table::{Field, ParsedTable, TableSchema};

const UNKNOWN_COMPANY: &str = "未知";
const PREVIEW_CHARS: usize = 80;

#[derive(Debug, Clone, Serialize)]
pub struct DroppedRowEntry {
    pub line: usize,
    pub expected_fields: usize,
    pub actual_fields: usize,
    pub company_guess: String,
    pub first_field: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DroppedRowGroup {
    pub company_guess: String,
    pub lines: Vec<usize>,
    pub actual_fields: Vec<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DroppedRowReport {
    pub table: String,
    pub parsed_rows: usize,
    pub dropped_rows: usize,
    pub entries: Vec<DroppedRowEntry>,
    pub groups: Vec<DroppedRowGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateName {
    pub name: String,
    // 1-based with the header as row 1.
    pub rows: Vec<usize>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct MissingData {
    pub without_images: Vec<String>,
    pub without_segments: Vec<String>,
    pub without_city: Vec<String>,
}

pub struct CompanyNameGuesser {
    pattern: Regex,
}

impl CompanyNameGuesser {
    pub fn new() -> Result<Self> {
        let pattern =
            Regex::new(r"([^,，。；]+?(?:有限公司|股份有限公司|集团有限公司|科技有限公司))")
                .context("failed to compile company name regex")?;
        Ok(Self { pattern })
    }

    pub fn guess(&self, fields: &[String]) -> Option<String> {
        fields
            .iter()
            .filter(|field| {
                field.contains("有限公司") || field.contains("股份") || field.contains("集团")
            })
            .find_map(|field| {
                self.pattern
                    .captures(field)
                    .and_then(|captures| captures.get(1))
                    .map(|found| found.as_str().trim().to_string())
            })
    }
}

pub fn dropped_row_report(
    table_label: &str,
    table: &ParsedTable,
    guesser: &CompanyNameGuesser,
) -> DroppedRowReport {
    let expected_fields = table.expected_fields();
    let entries = table
        .dropped
        .iter()
        .map(|row| DroppedRowEntry {
            line: row.line,
            expected_fields,
            actual_fields: row.cells.len(),
            company_guess: guesser
                .guess(&row.cells)
                .unwrap_or_else(|| UNKNOWN_COMPANY.to_string()),
            first_field: preview(row.cells.first().map(String::as_str).unwrap_or("")),
        })
        .collect::<Vec<_>>();

    let mut groups = Vec::<DroppedRowGroup>::new();
    for entry in &entries {
        match groups
            .iter_mut()
            .find(|group| group.company_guess == entry.company_guess)
        {
            Some(group) => {
                group.lines.push(entry.line);
                group.actual_fields.push(entry.actual_fields);
            }
            None => groups.push(DroppedRowGroup {
                company_guess: entry.company_guess.clone(),
                lines: vec![entry.line],
                actual_fields: vec![entry.actual_fields],
            }),
        }
    }

    DroppedRowReport {
        table: table_label.to_string(),
        parsed_rows: table.rows.len(),
        dropped_rows: table.dropped.len(),
        entries,
        groups,
    }
}

pub fn duplicate_names(profiles: &ParsedTable, schema: &TableSchema) -> Vec<DuplicateName> {
    let mut order = Vec::<String>::new();
    let mut positions = HashMap::<String, Vec<usize>>::new();

    for (position, row) in profiles.rows.iter().enumerate() {
        let name = schema.value(row, Field::Name);
        if name.is_empty() {
            continue;
        }
        let entry = positions.entry(name.to_string()).or_insert_with(|| {
            order.push(name.to_string());
            Vec::new()
        });
        entry.push(position + 2);
    }

    order
        .into_iter()
        .filter_map(|name| {
            let rows = positions.remove(&name)?;
            (rows.len() > 1).then_some(DuplicateName { name, rows })
        })
        .collect()
}

pub fn missing_data(companies: &[Company]) -> MissingData {
    let mut missing = MissingData::default();
    for company in companies {
        if company.gallery.is_empty() {
            missing.without_images.push(company.name.clone());
        }
        if company.segments.is_empty() {
            missing.without_segments.push(company.name.clone());
        }
        if company.city.is_empty() {
            missing.without_city.push(company.name.clone());
        }
    }
    missing
}

fn preview(value: &str) -> String {
    value.chars().take(PREVIEW_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reconcile::reconcile;
    use crate::table::TableKind;

    fn guesser() -> CompanyNameGuesser {
        CompanyNameGuesser::new().expect("guesser regex should compile")
    }

    #[test]
    fn guesses_company_name_from_broken_row_fields() {
        let fields = vec![
            "简介里提到".to_string(),
            "江苏恒瑞医药股份有限公司是一家制药企业".to_string(),
        ];
        assert_eq!(
            guesser().guess(&fields).as_deref(),
            Some("江苏恒瑞医药股份有限公司")
        );
        assert_eq!(guesser().guess(&["无关内容".to_string()]), None);
    }

    #[test]
    fn dropped_rows_are_reported_with_lines_and_grouped() {
        let table = ParsedTable::parse(
            "企业名称,企业类型,地区\n\
             甲有限公司,民营企业,总部：苏州市\n\
             乙科技有限公司,民营企业\n\
             乙科技有限公司,x,y,z\n\
             孤立文本\n",
        );

        let report = dropped_row_report("profile", &table, &guesser());
        assert_eq!(report.parsed_rows, 1);
        assert_eq!(report.dropped_rows, 3);
        assert_eq!(report.entries[0].line, 3);
        assert_eq!(report.entries[0].actual_fields, 2);
        assert_eq!(report.entries[0].company_guess, "乙科技有限公司");
        assert_eq!(report.entries[2].company_guess, UNKNOWN_COMPANY);
        assert_eq!(report.groups.len(), 2);
        assert_eq!(report.groups[0].lines, vec![3, 4]);
    }

    #[test]
    fn first_field_preview_is_bounded() {
        let long = "长".repeat(200);
        let table = ParsedTable::parse(&format!("a,b\n{long}\n"));
        let report = dropped_row_report("profile", &table, &guesser());
        assert_eq!(report.entries[0].first_field.chars().count(), PREVIEW_CHARS);
    }

    #[test]
    fn duplicate_names_list_every_row_position() {
        let table = ParsedTable::parse("企业名称,地区\n甲,a\n乙,b\n甲,c\n丙,d\n甲,e\n乙,f\n");
        let schema =
            TableSchema::resolve(TableKind::Profile, &table.headers).expect("schema resolves");

        let duplicates = duplicate_names(&table, &schema);
        assert_eq!(
            duplicates,
            vec![
                DuplicateName {
                    name: "甲".to_string(),
                    rows: vec![2, 4, 6],
                },
                DuplicateName {
                    name: "乙".to_string(),
                    rows: vec![3, 7],
                },
            ]
        );
    }

    #[test]
    fn missing_data_lists_companies_per_gap() {
        let profiles = ParsedTable::parse("企业名称,地区\n甲,总部：苏州市\n乙,无\n");
        let images = ParsedTable::parse("企业名称,图片路径\n甲,a.jpg\n");
        let business = ParsedTable::parse("企业名称,业务板块/主要业务\n乙,制造\n");
        let data = reconcile(&profiles, &images, &business).expect("reconcile should succeed");

        let missing = missing_data(&data.companies);
        assert_eq!(missing.without_images, vec!["乙"]);
        assert_eq!(missing.without_segments, vec!["甲"]);
        assert_eq!(missing.without_city, vec!["乙"]);
    }
}
