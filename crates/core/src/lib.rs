pub mod row;
pub mod separator;
pub mod total;

pub use row::{ExportOptions, ImportOptions, Row};
pub use separator::{format_with_thousands_separator, remove_thousands_separator};
pub use total::{column_total, format_total, parse_value};
