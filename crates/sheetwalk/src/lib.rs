//! # sheetwalk
//!
//! Address the rows, columns and cells of a live spreadsheet by position or
//! by the names written in a header row and header column.
//!
//! ## Features
//!
//! - One API over any spreadsheet host implementing [`Backend`]
//! - Rows and columns looked up by header name, cells by `(column, row)` names
//! - Gap-tolerant traversal that bridges short blank runs in hand-edited sheets
//! - Duplicate detection, whitespace cleanup and background colors
//! - An in-process host loadable from CSV or JSON (`memory` feature)
//!
//! ## Example
//!
//! ```rust
//! use sheetwalk::prelude::*;
//!
//! let mut host = MemoryHost::new();
//! let book = host.add_workbook("inventory.ods");
//! let stock = host.add_sheet(book, "Stock").unwrap();
//! host.set(stock, "A1", "Item").unwrap();
//! host.set(stock, "B1", "Qty").unwrap();
//! host.set(stock, "A2", "apple").unwrap();
//! host.set(stock, "B2", 3).unwrap();
//!
//! let model = Model::new(host.into_session()).unwrap();
//! let sheet = model.get_sheet("Stock", 0, 0).unwrap().unwrap();
//! let qty = sheet.get_cell("Qty", "apple").unwrap().unwrap();
//! assert_eq!(qty.number().unwrap(), 3.0);
//! ```

pub mod prelude;

// Re-export core types
pub use sheetwalk_core::{
    Axis,
    AxisScan,
    // Host contract
    Backend,
    Cell,
    CellAddress,
    // Cell types
    CellValue,
    Color,
    Duplicates,
    // Error types
    Error,
    Identifier,
    IdentifierKind,
    Line,
    LineSeries,
    Lines,
    // Main types
    Model,
    Result,
    ScanOptions,
    Session,
    Sheet,
    SheetNames,
    SheetRef,
    Sheets,

    DEFAULT_COLOR,
    MAX_COLS,
    // Constants
    MAX_GAP,
    MAX_ROWS,
    QUALIFIED_SEPARATOR,
};

// Re-export the in-process host
#[cfg(feature = "memory")]
pub use sheetwalk_memory::{
    CsvLoadOptions, MemoryError, MemoryHost, MemoryResult, SheetId, WorkbookId,
};

#[cfg(feature = "memory")]
use std::path::Path;

/// Extension trait for Model to open files into the in-process host
#[cfg(feature = "memory")]
pub trait ModelExt: Sized {
    /// Open a `.csv`, `.tsv` or `.json` file as a single-workbook model
    fn open<P: AsRef<Path>>(path: P) -> Result<Self>;
}

#[cfg(feature = "memory")]
impl ModelExt for Model<MemoryHost> {
    fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("workbook")
            .to_string();
        let sheet_name = path
            .file_stem()
            .and_then(|n| n.to_str())
            .unwrap_or("Sheet1")
            .to_string();

        tracing::debug!(path = %path.display(), "opening model");
        let host = match extension.as_deref() {
            Some("csv") | Some("tsv") => {
                let options = if extension.as_deref() == Some("tsv") {
                    CsvLoadOptions::tsv()
                } else {
                    CsvLoadOptions::default()
                };
                let mut host = MemoryHost::new();
                let book = host.add_workbook(file_name);
                host.load_csv_file(book, &sheet_name, path, &options)?;
                host
            }
            Some("json") => {
                let file = std::fs::File::open(path).map_err(MemoryError::from)?;
                MemoryHost::from_json(std::io::BufReader::new(file))?
            }
            _ => {
                return Err(Error::invalid(format!(
                    "Unsupported file format: {}",
                    path.display()
                )))
            }
        };
        Model::new(host.into_session())
    }
}
