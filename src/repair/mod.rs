mod classify;
mod merge;
mod realign;

use clap::ValueEnum;
use serde::Serialize;

pub use classify::{RecordClassifiers, SlotRule};
pub use merge::merge_rows;
pub use realign::realign;

const PREVIEW_CHARS: usize = 80;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RepairStrategy {
    Realign,
    Merge,
}

impl RepairStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Realign => "realign",
            Self::Merge => "merge",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RepairIssue {
    EmptySlot { column: String },
    BorrowedSlot { column: String, line: usize },
    Truncated { tokens: usize, lines: Vec<usize> },
    MergedRows { lines: Vec<usize> },
    SplitRow { line: usize },
    AttachedStray { column: String, line: usize },
}

impl RepairIssue {
    fn ceiling(&self) -> Confidence {
        match self {
            Self::EmptySlot { .. }
            | Self::MergedRows { .. }
            | Self::SplitRow { .. }
            | Self::AttachedStray { .. } => Confidence::Medium,
            Self::BorrowedSlot { .. } | Self::Truncated { .. } => Confidence::Low,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RepairedRecord {
    pub line: usize,
    pub fields: Vec<String>,
    pub confidence: Confidence,
    pub issues: Vec<RepairIssue>,
}

impl RepairedRecord {
    pub fn new(line: usize, fields: Vec<String>, issues: Vec<RepairIssue>) -> Self {
        let confidence = assess(fields.len(), &issues);
        Self {
            line,
            fields,
            confidence,
            issues,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Unparseable {
    pub line: usize,
    pub text: String,
    pub reason: String,
}

impl Unparseable {
    pub fn new(line: usize, text: &str, reason: &str) -> Self {
        Self {
            line,
            text: text.chars().take(PREVIEW_CHARS).collect(),
            reason: reason.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RepairSummary {
    pub records: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub unparseable: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RepairReport {
    pub strategy: RepairStrategy,
    pub headers: Vec<String>,
    pub expected_fields: usize,
    pub records: Vec<RepairedRecord>,
    pub unparseable: Vec<Unparseable>,
}

impl RepairReport {
    pub fn summary(&self) -> RepairSummary {
        let mut summary = RepairSummary {
            records: self.records.len(),
            unparseable: self.unparseable.len(),
            ..RepairSummary::default()
        };
        for record in &self.records {
            match record.confidence {
                Confidence::High => summary.high += 1,
                Confidence::Medium => summary.medium += 1,
                Confidence::Low => summary.low += 1,
            }
        }
        summary
    }

    pub fn needs_review(&self) -> impl Iterator<Item = &RepairedRecord> {
        self.records.iter().filter(|record| !record.issues.is_empty())
    }
}

fn assess(field_count: usize, issues: &[RepairIssue]) -> Confidence {
    let empty_slots = issues
        .iter()
        .filter(|issue| matches!(issue, RepairIssue::EmptySlot { .. }))
        .count();
    if field_count > 0 && empty_slots * 2 >= field_count {
        return Confidence::Low;
    }

    issues
        .iter()
        .map(RepairIssue::ceiling)
        .min()
        .unwrap_or(Confidence::High)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_follows_the_worst_issue() {
        assert_eq!(assess(5, &[]), Confidence::High);
        assert_eq!(
            assess(
                5,
                &[RepairIssue::EmptySlot {
                    column: "地区".to_string()
                }]
            ),
            Confidence::Medium
        );
        assert_eq!(
            assess(
                5,
                &[
                    RepairIssue::MergedRows { lines: vec![2, 3] },
                    RepairIssue::Truncated {
                        tokens: 1,
                        lines: vec![3]
                    },
                ]
            ),
            Confidence::Low
        );
    }

    #[test]
    fn mostly_empty_records_are_low_confidence() {
        let issues = ["企业类型", "地区", "企业简介"]
            .iter()
            .map(|column| RepairIssue::EmptySlot {
                column: column.to_string(),
            })
            .collect::<Vec<_>>();
        assert_eq!(assess(5, &issues), Confidence::Low);
    }
}
