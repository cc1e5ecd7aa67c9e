#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub line: usize,
    pub tokens: Vec<Token>,
    // Source text of the record without its terminator.
    pub raw: String,
}

impl Record {
    pub fn texts(&self) -> Vec<String> {
        self.tokens.iter().map(|token| token.text.clone()).collect()
    }
}

/// Quotes toggle the quoted state wherever they appear and `""` inside a
/// quoted run is a literal quote. Unquoted `\n`, `\r` or `\r\n` end a record;
/// a blank line produces no record. Breaks inside quotes still count as lines.
pub fn tokenize(content: &str) -> Vec<Record> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut records = Vec::new();
    let mut row = Vec::<Token>::new();
    let mut field = String::new();
    let mut line = 1_usize;
    let mut field_line = line;
    let mut record_start = 0_usize;
    let mut in_quotes = false;
    let mut chars = content.char_indices().peekable();

    while let Some((offset, ch)) = chars.next() {
        match ch {
            '"' => {
                if in_quotes && chars.next_if(|&(_, next)| next == '"').is_some() {
                    field.push('"');
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                row.push(finish_token(&mut field, field_line));
                field_line = line;
            }
            '\n' | '\r' if !in_quotes => {
                let mut next_start = offset + 1;
                if ch == '\r' && chars.next_if(|&(_, next)| next == '\n').is_some() {
                    next_start += 1;
                }
                if !field.is_empty() || !row.is_empty() {
                    row.push(finish_token(&mut field, field_line));
                    records.push(finish_record(&mut row, &content[record_start..offset]));
                }
                record_start = next_start;
                line += 1;
                field_line = line;
            }
            _ => {
                if ch == '\n' || (ch == '\r' && chars.peek().map(|&(_, next)| next) != Some('\n')) {
                    line += 1;
                }
                field.push(ch);
            }
        }
    }

    if !field.is_empty() || !row.is_empty() {
        row.push(finish_token(&mut field, field_line));
        records.push(finish_record(&mut row, &content[record_start..]));
    }

    records
}

fn finish_token(field: &mut String, line: usize) -> Token {
    let token = Token {
        text: field.trim().to_string(),
        line,
    };
    field.clear();
    token
}

fn finish_record(row: &mut Vec<Token>, raw: &str) -> Record {
    let tokens = std::mem::take(row);
    let line = tokens.first().map(|token| token.line).unwrap_or(1);
    Record {
        line,
        tokens,
        raw: raw.to_string(),
    }
}
