use colsum_core::{parse_value, ImportOptions, Row};

use crate::error::{CsvImportError, EXPECTED_COLUMNS};
use crate::field::strip_guard;
use crate::line::parse_line;

/// Parses CSV text into rows, all or nothing.
///
/// Accepts `\n` and `\r\n` line endings and ignores blank lines. With
/// `skip_header` the first remaining line is dropped, with `skip_total` the
/// last one. Quoted fields cannot span lines.
pub fn decode(content: &str, options: ImportOptions) -> Result<Vec<Row>, CsvImportError> {
    let lines: Vec<&str> = content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !trim_text(line).is_empty())
        .collect();

    if lines.is_empty() {
        return Err(CsvImportError::EmptyFile);
    }

    let start = usize::from(options.skip_header);
    let end = if options.skip_total && lines.len() > start {
        lines.len() - 1
    } else {
        lines.len()
    };

    if start >= end {
        return Err(CsvImportError::NoDataRows);
    }

    lines[start..end]
        .iter()
        .enumerate()
        .map(|(i, line)| decode_line(line, start + i + 1))
        .collect()
}

/// Trims whitespace and stray byte-order marks, which editors sometimes leave
/// on otherwise empty lines.
fn trim_text(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// `row` is the 1-based line number in the file, skipped header included.
fn decode_line(line: &str, row: usize) -> Result<Row, CsvImportError> {
    let fields = parse_line(line);
    let [description, value]: [String; EXPECTED_COLUMNS] =
        fields
            .try_into()
            .map_err(|fields: Vec<String>| CsvImportError::ColumnCountMismatch {
                row,
                found: fields.len(),
            })?;

    let description = strip_guard(&description);
    let value = strip_guard(&value);

    let trimmed = trim_text(value);
    if !trimmed.is_empty() && parse_value(trimmed).is_none() {
        return Err(CsvImportError::InvalidNumber {
            row,
            value: value.to_string(),
        });
    }

    Ok(Row::new(description, trimmed))
}
