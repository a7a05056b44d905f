//! # sheetwalk-core
//!
//! Host-agnostic addressing and iteration over spreadsheet sheets.
//!
//! This crate provides the addressing layer used throughout sheetwalk:
//! - [`Backend`] - The capability set a spreadsheet host must provide
//! - [`Session`] and [`Model`] - Open workbooks and the sheets inside them
//! - [`Sheet`] - Reference row/column configuration, factory for lines and cells
//! - [`Line`] and [`LineSeries`] - Rows and columns, addressed by index or by name
//! - [`Cell`] - A live view of one position in a sheet
//! - [`AxisScan`] - The gap-tolerant iterator behind every line traversal
//!
//! Nothing is cached: every read goes back to the host, so values always
//! reflect the live document.
//!
//! ## Example
//!
//! ```rust
//! # use sheetwalk_core::{Backend, CellValue, Color, Error, Result};
//! use sheetwalk_core::{Model, Session};
//!
//! /// A read-only host serving one fixed table
//! struct Table;
//!
//! const ROWS: [[&str; 2]; 3] = [["Item", "Price"], ["apple", "0.5"], ["pear", "0.75"]];
//!
//! impl Backend for Table {
//!     type Workbook = ();
//!     type Sheet = ();
//!
//!     fn read_cell(&self, _: &(), x: u32, y: u32) -> Result<CellValue> {
//!         let field = ROWS.get(y as usize).and_then(|row| row.get(x as usize));
//!         Ok(field.map_or(CellValue::Empty, |field| CellValue::text(*field)))
//!     }
//! #   fn write_cell(&self, _: &(), _: u32, _: u32, _: &CellValue) -> Result<()> {
//! #       Err(Error::host("read-only"))
//! #   }
//! #   fn read_color(&self, _: &(), _: u32, _: u32) -> Result<Option<Color>> {
//! #       Ok(None)
//! #   }
//! #   fn write_color(&self, _: &(), _: u32, _: u32, _: Option<Color>) -> Result<()> {
//! #       Err(Error::host("read-only"))
//! #   }
//! #   fn enumerate_sheets(&self, _: &()) -> Result<Vec<()>> {
//! #       Ok(vec![()])
//! #   }
//! #   fn resolve_sheet_by_name(&self, _: &(), name: &str) -> Result<()> {
//! #       if name == "Inventory" {
//! #           Ok(())
//! #       } else {
//! #           Err(Error::NotFound(format!("sheet '{name}'")))
//! #       }
//! #   }
//! #   fn sheet_name(&self, _: &()) -> Result<String> {
//! #       Ok("Inventory".into())
//! #   }
//! #   fn workbook_name(&self, _: &()) -> Result<String> {
//! #       Ok("inventory.csv".into())
//! #   }
//!     // remaining host calls elided
//! }
//!
//! # fn main() -> Result<()> {
//! let model = Model::new(Session::new(Table, vec![()]))?;
//! let sheet = model.get_sheet("Inventory", 0, 0)?.expect("sheet exists");
//!
//! // Column whose header (in the reference row) is "Price"
//! let price = sheet.get_column_by_name(&"Price".into())?.expect("header exists");
//! for cell in price.iter() {
//!     let cell = cell?;
//!     println!("{} = {}", cell.address(), cell.text()?);
//! }
//!
//! let pear = sheet.get_cell("Price", "pear")?.expect("row exists");
//! assert_eq!(pear.address().to_string(), "B3");
//! assert_eq!(pear.text()?, "0.75");
//! # Ok(())
//! # }
//! ```

pub mod address;
pub mod backend;
pub mod cell;
pub mod color;
pub mod error;
pub mod identifier;
pub mod line;
pub mod model;
pub mod scan;
pub mod series;
pub mod sheet;
pub mod value;

// Re-exports for convenience
pub use address::CellAddress;
pub use backend::{Backend, Session};
pub use cell::Cell;
pub use color::{Color, DEFAULT_COLOR};
pub use error::{Error, Result};
pub use identifier::{Identifier, IdentifierKind};
pub use line::{Axis, Duplicates, Line};
pub use model::{Model, SheetNames, SheetRef, Sheets};
pub use scan::{AxisScan, ScanOptions};
pub use series::{LineSeries, Lines};
pub use sheet::Sheet;
pub use value::CellValue;

/// Maximum number of rows in a sheet (Excel and Calc limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a sheet (Excel and Calc limit)
pub const MAX_COLS: u32 = 16_384;

/// Default length of a blank run that ends a line traversal
pub const MAX_GAP: u32 = 10;

/// Separator between workbook and sheet in qualified sheet names
pub const QUALIFIED_SEPARATOR: &str = "::";
