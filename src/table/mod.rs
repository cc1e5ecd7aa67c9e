//! CSV tables as exported from the recruiting spreadsheets.
//!
//! Parsing is strict about field counts but never fails: rows whose field
//! count differs from the header are kept aside as dropped rows so the
//! diagnostics and repair commands can look at them.

mod schema;
mod tokenizer;
mod writer;

pub use schema::{Field, TableKind, TableSchema};
pub use tokenizer::{Record, Token, tokenize};
pub use writer::write_table;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub index: usize,
    pub line: usize,
    pub cells: Vec<String>,
    pub raw: String,
}

impl RawRow {
    pub fn cell(&self, column: usize) -> &str {
        self.cells.get(column).map(String::as_str).unwrap_or("")
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParsedTable {
    pub headers: Vec<String>,
    pub header_raw: String,
    pub rows: Vec<RawRow>,
    pub dropped: Vec<RawRow>,
}

impl ParsedTable {
    pub fn parse(content: &str) -> Self {
        Self::from_records(tokenize(content))
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        let mut records = records.into_iter();
        let Some(header) = records.next() else {
            return Self::default();
        };

        let headers = header.texts();
        let header_raw = header.raw;
        let expected = headers.len();
        let mut rows = Vec::new();
        let mut dropped = Vec::new();

        for (index, record) in records.enumerate() {
            let row = RawRow {
                index,
                line: record.line,
                cells: record.texts(),
                raw: record.raw,
            };
            if row.cells.len() == expected {
                rows.push(row);
            } else {
                dropped.push(row);
            }
        }

        Self {
            headers,
            header_raw,
            rows,
            dropped,
        }
    }

    pub fn expected_fields(&self) -> usize {
        self.headers.len()
    }

    pub fn data_record_count(&self) -> usize {
        self.rows.len() + self.dropped.len()
    }

    pub fn rows_in_source_order(&self) -> Vec<&RawRow> {
        let mut all = self.rows.iter().chain(self.dropped.iter()).collect::<Vec<_>>();
        all.sort_by_key(|row| row.index);
        all
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_rows_parse_one_to_one() {
        let table = ParsedTable::parse("name,region\n甲,\"总部：南京, 江苏\"\n乙,总部：上海\n");
        assert_eq!(table.headers, vec!["name", "region"]);
        assert_eq!(table.rows.len(), 2);
        assert!(table.dropped.is_empty());
        assert_eq!(table.rows[0].cell(1), "总部：南京, 江苏");
        assert_eq!(table.rows[1].cell(0), "乙");
    }

    #[test]
    fn escaped_quotes_round_trip_through_parse() {
        let table = ParsedTable::parse("a,b\n\"a,\"\"b\"\"\",plain\n");
        assert_eq!(table.rows[0].cell(0), "a,\"b\"");
        assert_eq!(table.rows[0].cell(1), "plain");
    }

    #[test]
    fn rows_with_wrong_field_count_are_dropped_and_accounted() {
        let table = ParsedTable::parse("a,b,c\n1,2,3\n1,2\n1,2,3,4\n4,5,6\n");
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.dropped.len(), 2);
        assert_eq!(table.data_record_count(), 4);
        assert_eq!(table.dropped[0].cells, vec!["1", "2"]);
        assert_eq!(table.dropped[0].line, 3);
        assert_eq!(table.dropped[1].index, 2);
    }

    #[test]
    fn source_order_interleaves_parsed_and_dropped_rows() {
        let table = ParsedTable::parse("a,b\n1,2\nbad\n3,4\n");
        let order = table
            .rows_in_source_order()
            .iter()
            .map(|row| row.index)
            .collect::<Vec<_>>();
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn empty_input_yields_empty_table() {
        let table = ParsedTable::parse("");
        assert!(table.headers.is_empty());
        assert_eq!(table.data_record_count(), 0);
    }
}
