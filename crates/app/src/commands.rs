use anyhow::{Context, Result};
use colsum_core::{column_total, format_total, ExportOptions, ImportOptions, Row};
use colsum_csv::codec::{export_to_csv, import_from_csv};
use std::path::Path;

use crate::files;

/// Reads a JSON list of rows and renders it as CSV with the column total.
pub fn export_rows(input: &Path, options: ExportOptions) -> Result<String> {
    let json = files::read_text(input)?;
    let rows: Vec<Row> = serde_json::from_str(&json)
        .with_context(|| format!("{} is not a JSON list of rows", input.display()))?;

    let total = column_total(&rows);
    let csv = export_to_csv(&rows, total, options);

    tracing::info!(
        rows = rows.iter().filter(|r| !r.is_blank()).count(),
        total = %format_total(total),
        header = options.include_header,
        total_line = options.include_total,
        "Exported {}",
        input.display()
    );
    Ok(csv)
}

pub fn import_rows(input: &Path, options: ImportOptions) -> Result<Vec<Row>> {
    let text = files::read_text(input)?;
    let rows = import_from_csv(&text, options)
        .map_err(|e| {
            tracing::warn!(row = ?e.row(), "Import rejected: {e}");
            e
        })
        .with_context(|| format!("Failed to import {}", input.display()))?;

    tracing::info!(rows = rows.len(), "Imported {}", input.display());
    Ok(rows)
}

pub fn total(input: &Path, options: ImportOptions) -> Result<String> {
    let rows = import_rows(input, options)?;
    let total = format_total(column_total(&rows));
    tracing::info!(total = %total, "Computed total");
    Ok(total)
}

pub fn rows_to_json(rows: &[Row], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(rows)?
    } else {
        serde_json::to_string(rows)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    // ── export ───────────────────────────────────────────────────────────────

    #[test]
    fn export_adds_computed_total() {
        let dir = tempfile::tempdir().unwrap();
        let input = write(
            &dir,
            "rows.json",
            r#"[{"description":"Item 1","value":"100"},{"description":"Item 2","value":"50.5"}]"#,
        );
        let csv = export_rows(&input, ExportOptions::new(true, true)).unwrap();
        assert_eq!(csv, "Description,Value\nItem 1,100\nItem 2,50.5\nTotal,150.5");
    }

    #[test]
    fn export_rejects_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let input = write(&dir, "rows.json", "{not json");
        let err = export_rows(&input, ExportOptions::default()).unwrap_err();
        assert!(err.to_string().contains("is not a JSON list of rows"));
    }

    // ── import ───────────────────────────────────────────────────────────────

    #[test]
    fn import_reads_rows() {
        let dir = tempfile::tempdir().unwrap();
        let input = write(&dir, "in.csv", "Description,Value\r\n'=1+1,10\r\nTotal,10\r\n");
        let rows = import_rows(&input, ImportOptions::new(true, true)).unwrap();
        assert_eq!(rows, vec![Row::new("=1+1", "10")]);
    }

    #[test]
    fn import_error_names_file_and_row() {
        let dir = tempfile::tempdir().unwrap();
        let input = write(&dir, "bad.csv", "H,V\nItem 1,100\nItem 2,bad");
        let err = import_rows(&input, ImportOptions::new(true, false)).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("bad.csv"));
        assert!(message.contains("Row 3: Column 2 must be a valid number, found \"bad\""));
    }

    #[test]
    fn total_of_imported_rows() {
        let dir = tempfile::tempdir().unwrap();
        let input = write(&dir, "in.csv", "a,0.1\nb,0.2\nc,");
        assert_eq!(total(&input, ImportOptions::default()).unwrap(), "0.3");
    }

    #[test]
    fn export_then_import_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let input = write(
            &dir,
            "rows.json",
            r#"[{"description":"Rent, March","value":"1200"},{"description":"-refund","value":"-20"}]"#,
        );
        let options = ExportOptions::new(true, true);
        let csv = export_rows(&input, options).unwrap();
        let csv_path = write(&dir, "out.csv", &csv);

        let rows = import_rows(&csv_path, options.matching_import()).unwrap();
        assert_eq!(
            rows,
            vec![Row::new("Rent, March", "1200"), Row::new("-refund", "-20")]
        );
    }

    #[test]
    fn json_output_shapes() {
        let rows = vec![Row::new("a", "1")];
        assert_eq!(
            rows_to_json(&rows, false).unwrap(),
            r#"[{"description":"a","value":"1"}]"#
        );
        assert!(rows_to_json(&rows, true).unwrap().contains('\n'));
    }
}
