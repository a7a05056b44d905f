//! CSV loading options

/// Options for loading CSV data into a sheet
#[derive(Debug, Clone)]
pub struct CsvLoadOptions {
    /// Field delimiter (default: comma)
    pub delimiter: u8,
    /// Quote character (default: double quote)
    pub quote: u8,
    /// Whether the first record is a header row; header fields are always
    /// stored as text
    pub has_header: bool,
    /// Store numeric fields as numbers instead of text
    pub auto_detect_types: bool,
}

impl Default for CsvLoadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            has_header: true,
            auto_detect_types: true,
        }
    }
}

impl CsvLoadOptions {
    /// Tab-separated input
    pub fn tsv() -> Self {
        Self {
            delimiter: b'\t',
            ..Self::default()
        }
    }
}
