use std::collections::VecDeque;

use super::{RepairIssue, RepairReport, RepairStrategy, RepairedRecord, Unparseable};
use crate::table::ParsedTable;

#[derive(Debug)]
struct Pending {
    line: usize,
    cells: Vec<String>,
    split: bool,
}

pub fn merge_rows(table: &ParsedTable) -> RepairReport {
    let width = table.expected_fields();
    let mut queue = table
        .rows_in_source_order()
        .into_iter()
        .map(|row| Pending {
            line: row.line,
            cells: row.cells.clone(),
            split: false,
        })
        .collect::<VecDeque<_>>();

    let mut records = Vec::new();
    let mut unparseable = Vec::new();

    while let Some(pending) = queue.pop_front() {
        let mut issues = Vec::new();
        if pending.split {
            issues.push(RepairIssue::SplitRow { line: pending.line });
        }

        if pending.cells.len() == width {
            records.push(RepairedRecord::new(pending.line, pending.cells, issues));
            continue;
        }

        if pending.cells.len() > width {
            let mut cells = pending.cells;
            let rest = cells.split_off(width);
            if !pending.split {
                issues.push(RepairIssue::SplitRow { line: pending.line });
            }
            queue.push_front(Pending {
                line: pending.line,
                cells: rest,
                split: true,
            });
            records.push(RepairedRecord::new(pending.line, cells, issues));
            continue;
        }

        let mut combined = pending.cells.clone();
        let mut lines = vec![pending.line];
        let mut absorbed = Vec::<Pending>::new();
        while combined.len() < width
            && queue.front().is_some_and(|next| next.cells.len() != width)
        {
            let Some(next) = queue.pop_front() else {
                break;
            };
            combined.extend(next.cells.iter().cloned());
            lines.push(next.line);
            absorbed.push(next);
        }

        if combined.len() < width {
            unparseable.push(Unparseable::new(
                pending.line,
                &pending.cells.join(" | "),
                &format!(
                    "only {} of {} fields even after merging following rows",
                    combined.len(),
                    width
                ),
            ));
            for row in absorbed.into_iter().rev() {
                queue.push_front(row);
            }
            continue;
        }

        let last_line = lines.last().copied().unwrap_or(pending.line);
        issues.push(RepairIssue::MergedRows { lines });
        if combined.len() > width {
            issues.push(RepairIssue::Truncated {
                tokens: combined.len() - width,
                lines: vec![last_line],
            });
            combined.truncate(width);
        }
        records.push(RepairedRecord::new(pending.line, combined, issues));
    }

    RepairReport {
        strategy: RepairStrategy::Merge,
        headers: table.headers.clone(),
        expected_fields: width,
        records,
        unparseable,
    }
}
