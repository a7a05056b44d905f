//! Host capability contract
//!
//! A spreadsheet host (an office suite reached over a bridge, or the
//! in-process memory host) plugs into sheetwalk by implementing [`Backend`].
//! Everything above this trait (names, lines, gap-tolerant scans) is shared
//! between hosts.
//!
//! ```text
//! Model / Sheet / Line / Cell (this crate)
//!     └── Backend (one per host)
//!           └── host document
//! ```

use std::fmt;

use crate::color::Color;
use crate::error::Result;
use crate::value::CellValue;

/// Capabilities a spreadsheet host must provide.
///
/// Every call is a blocking round-trip to the host. Implementations must not
/// cache: two reads of the same position may legitimately differ when the
/// document is edited between them. Positions are 0-based `(x, y)` =
/// `(column, row)` and have already been validated against the grid limits.
pub trait Backend {
    /// Host-native handle to an open workbook
    type Workbook: Clone + fmt::Debug;

    /// Host-native handle to a sheet. Handles to the same sheet compare equal.
    type Sheet: Clone + PartialEq + fmt::Debug;

    /// Read the scalar value at a position. Unpopulated cells are `Empty`.
    fn read_cell(&self, sheet: &Self::Sheet, x: u32, y: u32) -> Result<CellValue>;

    /// Write a scalar value. Writing `Empty` clears the cell content.
    fn write_cell(&self, sheet: &Self::Sheet, x: u32, y: u32, value: &CellValue) -> Result<()>;

    /// Read the background color; `None` means no explicit color.
    fn read_color(&self, sheet: &Self::Sheet, x: u32, y: u32) -> Result<Option<Color>>;

    /// Write the background color; `None` restores the default.
    fn write_color(&self, sheet: &Self::Sheet, x: u32, y: u32, color: Option<Color>)
        -> Result<()>;

    /// List the sheets of a workbook in tab order.
    fn enumerate_sheets(&self, workbook: &Self::Workbook) -> Result<Vec<Self::Sheet>>;

    /// Find a sheet by name, failing with [`Error::NotFound`](crate::Error::NotFound).
    fn resolve_sheet_by_name(&self, workbook: &Self::Workbook, name: &str)
        -> Result<Self::Sheet>;

    /// Display name of a sheet.
    fn sheet_name(&self, sheet: &Self::Sheet) -> Result<String>;

    /// Display name of a workbook.
    fn workbook_name(&self, workbook: &Self::Workbook) -> Result<String>;
}

/// A backend together with the workbooks open in it.
///
/// A session is created explicitly by whoever connected to the host and is
/// handed to [`Model::new`](crate::Model::new).
#[derive(Debug)]
pub struct Session<B: Backend> {
    backend: B,
    workbooks: Vec<B::Workbook>,
}

impl<B: Backend> Session<B> {
    /// Create a session over the given open workbooks
    pub fn new(backend: B, workbooks: Vec<B::Workbook>) -> Self {
        Self { backend, workbooks }
    }

    /// Get the backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Get the open workbooks in host order
    pub fn workbooks(&self) -> &[B::Workbook] {
        &self.workbooks
    }

    /// Consume the session, returning the backend
    pub fn into_backend(self) -> B {
        self.backend
    }
}
