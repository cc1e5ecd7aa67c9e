use std::collections::VecDeque;

use super::{RecordClassifiers, RepairIssue, RepairReport, RepairStrategy, RepairedRecord, Unparseable};
use crate::table::{Record, Token};

/// Rebuilds records from every non-empty token after the header.
///
/// A record starts at each token the record-start classifier accepts and
/// spans up to the next one. Within a span, tokens are offered to the column
/// slots in header order; a rejected token is offered to the next slot.
/// Leftover tokens may then fill slots that stayed empty, region-like
/// leftovers are appended to the region column, and anything else is
/// truncated.
pub fn realign(records: &[Record], classifiers: &RecordClassifiers) -> RepairReport {
    let headers = records.first().map(Record::texts).unwrap_or_default();
    let tokens = records
        .iter()
        .skip(1)
        .flat_map(|record| record.tokens.iter())
        .filter(|token| !token.text.is_empty())
        .collect::<Vec<&Token>>();

    let mut repaired = Vec::new();
    let mut unparseable = Vec::new();
    let mut position = 0;

    while position < tokens.len() {
        let token = tokens[position];
        if !classifiers.is_record_start(&token.text) {
            unparseable.push(Unparseable::new(
                token.line,
                &token.text,
                "no company name before this token",
            ));
            position += 1;
            continue;
        }

        let end = tokens[position + 1..]
            .iter()
            .position(|candidate| classifiers.is_record_start(&candidate.text))
            .map(|offset| position + 1 + offset)
            .unwrap_or(tokens.len());

        repaired.push(assemble(&tokens[position..end], classifiers, &headers));
        position = end;
    }

    RepairReport {
        strategy: RepairStrategy::Realign,
        expected_fields: headers.len(),
        headers,
        records: repaired,
        unparseable,
    }
}

fn assemble(span: &[&Token], classifiers: &RecordClassifiers, headers: &[String]) -> RepairedRecord {
    let width = headers.len().max(1);
    let column_label = |column: usize| {
        headers
            .get(column)
            .cloned()
            .unwrap_or_else(|| format!("column {}", column + 1))
    };

    let mut slots = vec![None::<&Token>; width];
    slots[0] = span.first().copied();

    let mut next = 1;
    for (column, slot) in slots.iter_mut().enumerate().skip(1) {
        if let Some(token) = span.get(next)
            && classifiers.accepts(column, &token.text)
        {
            *slot = Some(*token);
            next += 1;
        }
    }

    let mut issues = Vec::new();
    let mut leftovers = span.iter().skip(next).copied().collect::<VecDeque<&Token>>();
    let mut extra_text = Vec::<(usize, String)>::new();
    let mut truncated = Vec::<usize>::new();

    while let Some(token) = leftovers.pop_front() {
        let gap = (1..width).find(|&column| {
            slots[column].is_none() && classifiers.accepts(column, &token.text)
        });
        if let Some(column) = gap {
            slots[column] = Some(token);
            issues.push(RepairIssue::BorrowedSlot {
                column: column_label(column),
                line: token.line,
            });
            continue;
        }

        match classifiers.region_column {
            Some(column) if classifiers.looks_like_region(&token.text) => {
                extra_text.push((column, token.text.clone()));
                issues.push(RepairIssue::AttachedStray {
                    column: column_label(column),
                    line: token.line,
                });
            }
            _ => truncated.push(token.line),
        }
    }

    if !truncated.is_empty() {
        issues.push(RepairIssue::Truncated {
            tokens: truncated.len(),
            lines: truncated,
        });
    }

    let mut fields = Vec::with_capacity(width);
    for (column, slot) in slots.iter().enumerate() {
        match slot {
            Some(token) => fields.push(token.text.clone()),
            None => {
                issues.push(RepairIssue::EmptySlot {
                    column: column_label(column),
                });
                fields.push(String::new());
            }
        }
    }
    for (column, text) in extra_text {
        let field = &mut fields[column];
        if !field.is_empty() {
            field.push('\n');
        }
        field.push_str(&text);
    }

    let line = span.first().map(|token| token.line).unwrap_or(0);
    RepairedRecord::new(line, fields, issues)
}
