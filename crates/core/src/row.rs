use serde::{Deserialize, Serialize};

/// One line of the table: a free-text label and the value as the user typed it.
///
/// `value` is kept as text so leading zeros, trailing zeros and the user's
/// spacing survive an export/import round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub description: String,
    pub value: String,
}

impl Row {
    pub fn new(description: impl Into<String>, value: impl Into<String>) -> Self {
        Row {
            description: description.into(),
            value: value.into(),
        }
    }

    pub fn empty() -> Self {
        Row::default()
    }

    /// True when both fields are empty or whitespace-only.
    pub fn is_blank(&self) -> bool {
        self.description.trim().is_empty() && self.value.trim().is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOptions {
    pub include_header: bool,
    pub include_total: bool,
}

impl ExportOptions {
    pub fn new(include_header: bool, include_total: bool) -> Self {
        Self {
            include_header,
            include_total,
        }
    }

    /// The import options that read back a file written with these options.
    pub fn matching_import(self) -> ImportOptions {
        ImportOptions {
            skip_header: self.include_header,
            skip_total: self.include_total,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportOptions {
    pub skip_header: bool,
    pub skip_total: bool,
}

impl ImportOptions {
    pub fn new(skip_header: bool, skip_total: bool) -> Self {
        Self {
            skip_header,
            skip_total,
        }
    }
}
