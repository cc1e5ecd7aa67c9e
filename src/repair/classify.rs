use crate::table::Field;

pub trait TokenClassifier {
    fn name(&self) -> &'static str;
    fn matches(&self, token: &str) -> bool;
}

const MAX_NAME_CHARS: usize = 60;

pub struct CompanyNameHeuristic;

impl TokenClassifier for CompanyNameHeuristic {
    fn name(&self) -> &'static str {
        "company-name"
    }

    fn matches(&self, token: &str) -> bool {
        const MARKERS: [&str; 5] = ["有限公司", "股份有限公司", "集团有限公司", "科技有限公司", "股份公司"];
        if token.chars().count() > MAX_NAME_CHARS {
            return false;
        }
        MARKERS.iter().any(|marker| token.contains(marker)) || token.ends_with("集团")
    }
}

pub struct CompanyTypeHeuristic;

impl TokenClassifier for CompanyTypeHeuristic {
    fn name(&self) -> &'static str {
        "company-type"
    }

    fn matches(&self, token: &str) -> bool {
        const MARKERS: [&str; 6] = ["国有企业", "民营企业", "外资企业", "中外合资", "大型企业", "中小企业"];
        MARKERS.iter().any(|marker| token.contains(marker))
    }
}

pub struct RegionHeuristic;

impl TokenClassifier for RegionHeuristic {
    fn name(&self) -> &'static str {
        "region"
    }

    fn matches(&self, token: &str) -> bool {
        token.contains("总部：") || token.contains("分公司：")
    }
}

pub enum SlotRule {
    Classified(Box<dyn TokenClassifier>),
    FreeText,
}

impl SlotRule {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Classified(classifier) => classifier.name(),
            Self::FreeText => "free-text",
        }
    }
}

pub struct RecordClassifiers {
    pub record_start: Box<dyn TokenClassifier>,
    pub slots: Vec<SlotRule>,
    pub region_column: Option<usize>,
}

impl RecordClassifiers {
    pub fn for_columns(fields: &[Option<Field>]) -> Self {
        let mut slots = Vec::with_capacity(fields.len());
        let mut region_column = None;

        for (column, field) in fields.iter().enumerate() {
            let rule = match field {
                Some(Field::Kind) => SlotRule::Classified(Box::new(CompanyTypeHeuristic)),
                Some(Field::Region) => {
                    region_column = Some(column);
                    SlotRule::Classified(Box::new(RegionHeuristic))
                }
                _ => SlotRule::FreeText,
            };
            slots.push(rule);
        }

        Self {
            record_start: Box::new(CompanyNameHeuristic),
            slots,
            region_column,
        }
    }

    pub fn is_record_start(&self, token: &str) -> bool {
        self.record_start.matches(token)
    }

    pub fn accepts(&self, column: usize, token: &str) -> bool {
        match self.slots.get(column) {
            Some(SlotRule::Classified(classifier)) => classifier.matches(token),
            Some(SlotRule::FreeText) => !self.is_record_start(token),
            None => false,
        }
    }

    pub fn looks_like_region(&self, token: &str) -> bool {
        RegionHeuristic.matches(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn company_names_are_recognized_by_legal_markers() {
        assert!(CompanyNameHeuristic.matches("甲测试有限公司"));
        assert!(CompanyNameHeuristic.matches("恒力集团"));
        assert!(!CompanyNameHeuristic.matches("集团化经营"));
        assert!(!CompanyNameHeuristic.matches("总部：苏州市"));

        let intro = format!("甲测试有限公司成立于二〇〇一年，{}", "主要从事新能源装备制造".repeat(6));
        assert!(!CompanyNameHeuristic.matches(&intro));
    }

    #[test]
    fn profile_columns_get_type_and_region_rules() {
        let classifiers = RecordClassifiers::for_columns(&[
            Some(Field::Name),
            Some(Field::Kind),
            Some(Field::Region),
            Some(Field::Intro),
            None,
        ]);

        assert_eq!(classifiers.slots[1].describe(), "company-type");
        assert_eq!(classifiers.slots[2].describe(), "region");
        assert_eq!(classifiers.slots[4].describe(), "free-text");
        assert_eq!(classifiers.region_column, Some(2));
        assert!(classifiers.accepts(1, "民营企业,大型企业"));
        assert!(!classifiers.accepts(2, "一家公司的简介"));
        assert!(!classifiers.accepts(3, "乙有限公司"));
    }
}
