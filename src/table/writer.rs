pub fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

pub fn write_table<R, S>(headers: &[String], rows: R) -> String
where
    R: IntoIterator<Item = S>,
    S: AsRef<[String]>,
{
    let mut lines = vec![render_line(headers)];
    for row in rows {
        lines.push(render_line(row.as_ref()));
    }
    lines.join("\n")
}

fn render_line(fields: &[String]) -> String {
    fields
        .iter()
        .map(|field| escape_field(field))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::ParsedTable;

    #[test]
    fn quotes_only_fields_that_need_it() {
        assert_eq!(escape_field("plain"), "plain");
        assert_eq!(escape_field("a,\"b\""), "\"a,\"\"b\"\"\"");
        assert_eq!(escape_field("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn written_table_parses_back_without_drops() {
        let headers = vec!["企业名称".to_string(), "企业简介".to_string()];
        let rows = vec![vec![
            "甲测试有限公司".to_string(),
            "做了\"很多\"事,\n还有更多".to_string(),
        ]];

        let text = write_table(&headers, &rows);
        let table = ParsedTable::parse(&text);
        assert!(table.dropped.is_empty());
        assert_eq!(table.rows[0].cells, rows[0]);
    }
}
