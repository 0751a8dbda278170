pub mod decode;
pub mod encode;
pub mod error;
pub mod field;
pub mod line;

pub use colsum_core::{ExportOptions, ImportOptions, Row};
pub use decode::decode;
pub use encode::encode;
pub use error::CsvImportError;
pub use field::{escape_field, strip_guard, unescape_field};

pub mod codec {
    use crate::{CsvImportError, ExportOptions, ImportOptions, Row};

    pub fn export_to_csv(rows: &[Row], total: f64, options: ExportOptions) -> String {
        crate::encode::encode(rows, total, options)
    }

    pub fn import_from_csv(
        content: &str,
        options: ImportOptions,
    ) -> Result<Vec<Row>, CsvImportError> {
        crate::decode::decode(content, options)
    }
}
