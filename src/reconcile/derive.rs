use anyhow::{Context, Result};
use regex::Regex;

const PROVINCE_PREFIXES: &str = "江苏|浙江|广东|山东|河北|河南|四川|湖北|湖南|安徽|福建|陕西|辽宁";

const LEGAL_SUFFIXES: [&str; 5] = ["有限责任公司", "股份有限公司", "有限公司", "(集团)", "（集团）"];

pub struct FieldDeriver {
    headquarters: Regex,
    province_prefix: Regex,
}

impl FieldDeriver {
    pub fn new() -> Result<Self> {
        Ok(Self {
            headquarters: Regex::new(r"总部[：:]\s*(\S+)")
                .context("failed to compile headquarters regex")?,
            province_prefix: Regex::new(&format!(r"^(?:{PROVINCE_PREFIXES})\s*"))
                .context("failed to compile province prefix regex")?,
        })
    }

    pub fn city(&self, region: &str) -> String {
        let Some(captured) = self
            .headquarters
            .captures(region)
            .and_then(|captures| captures.get(1))
        else {
            return String::new();
        };

        let mut city = self
            .province_prefix
            .replace(captured.as_str().trim(), "")
            .into_owned();

        if !city.ends_with('市') && !city.contains("自治") && !city.contains("特别行政区") {
            city.push('市');
        }
        city
    }
}

pub fn short_name(full_name: &str) -> String {
    let stripped = LEGAL_SUFFIXES
        .iter()
        .fold(full_name, |name, suffix| name.strip_suffix(suffix).unwrap_or(name))
        .trim();

    if stripped.is_empty() {
        full_name.to_string()
    } else {
        stripped.to_string()
    }
}

pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
