use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::reconcile::{Company, Reconciled};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Module,
    Json,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Module => "module",
            Self::Json => "json",
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DataDocument<'a> {
    companies_data: &'a [Company],
    active_cities: &'a [String],
    active_provinces: &'a [String],
}

pub fn render(data: &Reconciled, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Module => render_module(data),
        OutputFormat::Json => {
            let document = DataDocument {
                companies_data: &data.companies,
                active_cities: &data.cities,
                active_provinces: &data.provinces,
            };
            let mut text = to_indented_json(&document)?;
            text.push('\n');
            Ok(text)
        }
    }
}

fn render_module(data: &Reconciled) -> Result<String> {
    let companies = to_indented_json(&data.companies)?;
    let cities = to_indented_json(&data.cities)?;
    let provinces = to_indented_json(&data.provinces)?;

    Ok(format!(
        "// Company data generated from the CSV exports by recruit-data. Do not edit.\n\
         // Companies: {company_count}\n\
         \n\
         export const companiesData = {companies};\n\
         \n\
         // Cities ({city_count})\n\
         export const activeCities = {cities};\n\
         \n\
         // Provinces ({province_count})\n\
         export const activeProvinces = {provinces};\n",
        company_count = data.companies.len(),
        city_count = data.cities.len(),
        province_count = data.provinces.len(),
    ))
}

fn to_indented_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
    value
        .serialize(&mut serializer)
        .context("failed to serialize company data")?;
    String::from_utf8(buffer).context("serialized company data is not valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reconcile::reconcile;
    use crate::table::ParsedTable;

    fn sample() -> Reconciled {
        let profiles = ParsedTable::parse(
            "企业名称,企业类型,地区,企业简介,推荐理由\n\
             甲测试有限公司,\"民营企业,大型企业\",总部：南京 分公司：上海市,简介,理由\n\
             乙公司,国有企业,总部：苏州市,,\n",
        );
        let images = ParsedTable::parse("企业名称,图片路径\n乙公司,img/b.jpg\n");
        let business = ParsedTable::parse("企业名称,业务板块/主要业务,关联岗位\n乙公司,制造,工程师\n");
        reconcile(&profiles, &images, &business).expect("reconcile should succeed")
    }

    #[test]
    fn module_exposes_the_three_named_exports() {
        let text = render(&sample(), OutputFormat::Module).expect("render should succeed");

        assert!(text.contains("export const companiesData = ["));
        assert!(text.contains("export const activeCities = [\n    \"南京市\",\n    \"苏州市\"\n];"));
        assert!(text.contains("export const activeProvinces = [\n    \"江苏省\"\n];"));
        assert!(text.contains("\"shortName\": \"甲测试\""));
        assert!(text.contains("\"segments\": [\n"));
    }

    #[test]
    fn json_document_uses_presentation_field_names() {
        let text = render(&sample(), OutputFormat::Json).expect("render should succeed");
        let value: serde_json::Value = serde_json::from_str(&text).expect("output should be JSON");

        let first = &value["companiesData"][0];
        assert_eq!(first["name"], "甲测试有限公司");
        assert_eq!(first["city"], "南京市");
        assert_eq!(first["gallery"], serde_json::json!([]));
        let second = &value["companiesData"][1];
        assert_eq!(second["cover"], "img/b.jpg");
        assert_eq!(second["segments"][0]["jobs"][0], "工程师");
        assert_eq!(value["activeProvinces"], serde_json::json!(["江苏省"]));
    }

    #[test]
    fn rendering_twice_from_the_same_inputs_is_byte_identical() {
        let first = render(&sample(), OutputFormat::Module).expect("render should succeed");
        let second = render(&sample(), OutputFormat::Module).expect("render should succeed");
        assert_eq!(first, second);
    }
}
