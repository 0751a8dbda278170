use colsum_core::{format_total, ExportOptions, Row};

use crate::field::escape_row;

pub const HEADER: [&str; 2] = ["Description", "Value"];
pub const TOTAL_LABEL: &str = "Total";

/// Renders rows, and optionally a header and a total line, as CSV text.
///
/// Blank rows are left out. Lines are separated by `\n` with no trailing
/// terminator, and an empty selection gives an empty string.
pub fn encode(rows: &[Row], total: f64, options: ExportOptions) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 2);

    if options.include_header {
        lines.push(escape_row(&HEADER));
    }

    for row in rows.iter().filter(|r| !r.is_blank()) {
        lines.push(escape_row(&[row.description.as_str(), row.value.as_str()]));
    }

    if options.include_total {
        let total = format_total(total);
        lines.push(escape_row(&[TOTAL_LABEL, total.as_str()]));
    }

    lines.join("\n")
}
