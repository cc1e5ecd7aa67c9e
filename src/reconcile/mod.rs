mod collate;
mod derive;
mod provinces;

use std::collections::HashMap;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::table::{Field, ParsedTable, TableKind, TableSchema};

use collate::ZhCollator;
use derive::{FieldDeriver, short_name, split_list};
use provinces::province_for;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub name: String,
    pub jobs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    pub city: String,
    pub name: String,
    pub short_name: String,
    pub tags: Vec<String>,
    pub intro: String,
    pub reason: String,
    pub region: String,
    pub cover: String,
    pub gallery: Vec<String>,
    pub segments: Vec<Segment>,
}

impl Company {
    fn add_image(&mut self, path: &str) {
        if self.cover.is_empty() {
            self.cover = path.to_string();
        }
        self.gallery.push(path.to_string());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JoinStats {
    pub profile_rows: usize,
    pub unnamed_rows: usize,
    pub duplicate_rows: usize,
    pub image_rows_matched: usize,
    pub image_rows_unmatched: usize,
    pub segment_rows_matched: usize,
    pub segment_rows_unmatched: usize,
}

#[derive(Debug, Clone)]
pub struct Reconciled {
    pub companies: Vec<Company>,
    pub cities: Vec<String>,
    pub provinces: Vec<String>,
    pub stats: JoinStats,
}

#[derive(Default)]
struct CompanyIndex {
    companies: Vec<Company>,
    by_name: HashMap<String, usize>,
}

impl CompanyIndex {
    fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    fn insert(&mut self, company: Company) {
        self.by_name
            .insert(company.name.clone(), self.companies.len());
        self.companies.push(company);
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut Company> {
        let index = *self.by_name.get(name)?;
        self.companies.get_mut(index)
    }
}

pub fn reconcile(
    profiles: &ParsedTable,
    images: &ParsedTable,
    business: &ParsedTable,
) -> Result<Reconciled> {
    let profile_schema = TableSchema::resolve(TableKind::Profile, &profiles.headers)
        .context("failed to resolve profile table columns")?;
    let image_schema = TableSchema::resolve(TableKind::Images, &images.headers)
        .context("failed to resolve image table columns")?;
    let business_schema = TableSchema::resolve(TableKind::Business, &business.headers)
        .context("failed to resolve business table columns")?;

    let deriver = FieldDeriver::new()?;
    let collator = ZhCollator::new()?;
    let mut stats = JoinStats::default();
    let mut index = collect_profiles(profiles, &profile_schema, &deriver, &mut stats);

    merge_images(&mut index, images, &image_schema, &mut stats);
    merge_segments(&mut index, business, &business_schema, &mut stats);

    let mut companies = index.companies;
    collator.sort_by(&mut companies, |company| company.city.as_str());

    let (cities, provinces) = derive_indices(&companies, &collator);

    Ok(Reconciled {
        companies,
        cities,
        provinces,
        stats,
    })
}

fn collect_profiles(
    profiles: &ParsedTable,
    schema: &TableSchema,
    deriver: &FieldDeriver,
    stats: &mut JoinStats,
) -> CompanyIndex {
    let mut index = CompanyIndex::default();

    for row in &profiles.rows {
        stats.profile_rows += 1;

        let name = schema.value(row, Field::Name);
        if name.is_empty() {
            stats.unnamed_rows += 1;
            continue;
        }
        if index.contains(name) {
            stats.duplicate_rows += 1;
            continue;
        }

        let region = schema.value(row, Field::Region);
        index.insert(Company {
            id: format!("company{:03}", index.companies.len() + 1),
            city: deriver.city(region),
            name: name.to_string(),
            short_name: short_name(name),
            tags: split_list(schema.value(row, Field::Kind)),
            intro: schema.value(row, Field::Intro).to_string(),
            reason: schema.value(row, Field::Reason).to_string(),
            region: region.to_string(),
            cover: String::new(),
            gallery: Vec::new(),
            segments: Vec::new(),
        });
    }

    index
}

fn merge_images(
    index: &mut CompanyIndex,
    images: &ParsedTable,
    schema: &TableSchema,
    stats: &mut JoinStats,
) {
    for row in &images.rows {
        let name = schema.value(row, Field::Name);
        let path = schema.value(row, Field::ImagePath);
        if name.is_empty() || path.is_empty() {
            continue;
        }

        match index.get_mut(name) {
            Some(company) => {
                company.add_image(path);
                stats.image_rows_matched += 1;
            }
            None => stats.image_rows_unmatched += 1,
        }
    }
}

fn merge_segments(
    index: &mut CompanyIndex,
    business: &ParsedTable,
    schema: &TableSchema,
    stats: &mut JoinStats,
) {
    for row in &business.rows {
        let name = schema.value(row, Field::Name);
        let segment = schema.value(row, Field::Segment);
        if name.is_empty() || segment.is_empty() {
            continue;
        }

        match index.get_mut(name) {
            Some(company) => {
                company.segments.push(Segment {
                    name: segment.to_string(),
                    jobs: split_list(schema.value(row, Field::Jobs)),
                });
                stats.segment_rows_matched += 1;
            }
            None => stats.segment_rows_unmatched += 1,
        }
    }
}

fn derive_indices(companies: &[Company], collator: &ZhCollator) -> (Vec<String>, Vec<String>) {
    let mut cities = Vec::<String>::new();
    let mut provinces = Vec::<String>::new();

    for company in companies {
        if company.city.is_empty() || cities.contains(&company.city) {
            continue;
        }
        cities.push(company.city.clone());

        if let Some(province) = province_for(&company.city)
            && !provinces.iter().any(|known| known == province)
        {
            provinces.push(province.to_string());
        }
    }

    collator.sort_by(&mut cities, String::as_str);
    collator.sort_by(&mut provinces, String::as_str);
    (cities, provinces)
}
