//! Sheet handle and reference-line configuration

use std::fmt;

use crate::backend::Backend;
use crate::cell::Cell;
use crate::error::{check_index, Result};
use crate::identifier::{Identifier, IdentifierKind};
use crate::line::{Axis, Line};
use crate::scan::ScanOptions;
use crate::series::LineSeries;
use crate::value::CellValue;
use crate::{MAX_COLS, MAX_ROWS};

/// A sheet of an open workbook.
///
/// The reference row holds the names of the columns, the reference column
/// the names of the rows. Both default to index 0. Lines and cells borrow the
/// sheet, so its configuration cannot change while any of them is alive.
pub struct Sheet<'m, B: Backend> {
    backend: &'m B,
    handle: B::Sheet,
    reference_row_index: u32,
    reference_column_index: u32,
    scan: ScanOptions,
}

impl<'m, B: Backend> Sheet<'m, B> {
    /// Wrap a host sheet handle with default configuration
    pub fn new(backend: &'m B, handle: B::Sheet) -> Self {
        Self {
            backend,
            handle,
            reference_row_index: 0,
            reference_column_index: 0,
            scan: ScanOptions::default(),
        }
    }

    /// Wrap a host sheet handle with explicit reference indices
    pub fn with_reference_indices(
        backend: &'m B,
        handle: B::Sheet,
        reference_row_index: i64,
        reference_column_index: i64,
    ) -> Result<Self> {
        let mut sheet = Self::new(backend, handle);
        sheet.set_reference_row_index(reference_row_index)?;
        sheet.set_reference_column_index(reference_column_index)?;
        Ok(sheet)
    }

    /// Get the host backend
    pub fn backend(&self) -> &'m B {
        self.backend
    }

    /// Get the host-native sheet handle
    pub fn handle(&self) -> &B::Sheet {
        &self.handle
    }

    /// Sheet name as reported by the host
    pub fn name(&self) -> Result<String> {
        self.backend.sheet_name(&self.handle)
    }

    // === Configuration ===

    /// Index of the row holding column names
    pub fn reference_row_index(&self) -> u32 {
        self.reference_row_index
    }

    /// Set the index of the row holding column names
    pub fn set_reference_row_index(&mut self, index: i64) -> Result<()> {
        self.reference_row_index = check_index(index, MAX_ROWS, "reference row")?;
        Ok(())
    }

    /// Index of the column holding row names
    pub fn reference_column_index(&self) -> u32 {
        self.reference_column_index
    }

    /// Set the index of the column holding row names
    pub fn set_reference_column_index(&mut self, index: i64) -> Result<()> {
        self.reference_column_index = check_index(index, MAX_COLS, "reference column")?;
        Ok(())
    }

    /// Traversal settings used by every line of this sheet
    pub fn scan_options(&self) -> ScanOptions {
        self.scan
    }

    /// Replace the traversal settings
    pub fn set_scan_options(&mut self, options: ScanOptions) -> Result<()> {
        options.validate()?;
        self.scan = options;
        Ok(())
    }
}

impl<'a, B: Backend> Sheet<'a, B> {
    pub(crate) fn cell(&'a self, x: u32, y: u32) -> Cell<'a, B> {
        Cell::new(self, x, y)
    }

    pub(crate) fn row_at(&'a self, y: u32) -> Line<'a, B> {
        Line::new(self, Axis::Row, y)
    }

    pub(crate) fn column_at(&'a self, x: u32) -> Line<'a, B> {
        Line::new(self, Axis::Column, x)
    }

    pub(crate) fn line_at(&'a self, axis: Axis, index: u32) -> Line<'a, B> {
        Line::new(self, axis, index)
    }

    /// The row holding column names
    pub fn reference_row(&'a self) -> Line<'a, B> {
        self.row_at(self.reference_row_index)
    }

    /// The column holding row names
    pub fn reference_column(&'a self) -> Line<'a, B> {
        self.column_at(self.reference_column_index)
    }

    // === Lines ===

    /// Get a row by position
    pub fn get_row_by_index(&'a self, index: i64) -> Result<Line<'a, B>> {
        Ok(self.row_at(check_index(index, MAX_ROWS, "row")?))
    }

    /// Get a column by position
    pub fn get_column_by_index(&'a self, index: i64) -> Result<Line<'a, B>> {
        Ok(self.column_at(check_index(index, MAX_COLS, "column")?))
    }

    /// Position of the first row named `name` in the reference column
    pub fn row_index_from_name(&'a self, name: &CellValue) -> Result<Option<u32>> {
        Self::position_of(self.reference_column(), name)
    }

    /// Position of the first column named `name` in the reference row
    pub fn column_index_from_name(&'a self, name: &CellValue) -> Result<Option<u32>> {
        Self::position_of(self.reference_row(), name)
    }

    fn position_of(reference: Line<'a, B>, name: &CellValue) -> Result<Option<u32>> {
        for cell in reference.iter() {
            let cell = cell?;
            if cell.value()? == *name {
                return Ok(Some(reference.axis().along(&cell)));
            }
        }
        Ok(None)
    }

    /// Get the first row whose name equals `name`
    pub fn get_row_by_name(&'a self, name: &CellValue) -> Result<Option<Line<'a, B>>> {
        Ok(self.row_index_from_name(name)?.map(|y| self.row_at(y)))
    }

    /// Get the first column whose name equals `name`
    pub fn get_column_by_name(&'a self, name: &CellValue) -> Result<Option<Line<'a, B>>> {
        Ok(self.column_index_from_name(name)?.map(|x| self.column_at(x)))
    }

    /// Get a row by index or by name
    pub fn get_row(&'a self, id: impl Into<Identifier>) -> Result<Option<Line<'a, B>>> {
        match id.into() {
            Identifier::Index(i) => self.get_row_by_index(i).map(Some),
            Identifier::Name(name) => self.get_row_by_name(&name),
        }
    }

    /// Get a column by index or by name
    pub fn get_column(&'a self, id: impl Into<Identifier>) -> Result<Option<Line<'a, B>>> {
        match id.into() {
            Identifier::Index(i) => self.get_column_by_index(i).map(Some),
            Identifier::Name(name) => self.get_column_by_name(&name),
        }
    }

    // === Cells ===

    /// Get the cell at a position
    pub fn cell_at(&'a self, x: i64, y: i64) -> Result<Cell<'a, B>> {
        let x = check_index(x, MAX_COLS, "column")?;
        let y = check_index(y, MAX_ROWS, "row")?;
        Ok(self.cell(x, y))
    }

    /// Get a cell where each coordinate is an index or a name.
    ///
    /// `x` selects the column (a name is looked up in the reference row),
    /// `y` the row within it (a name is looked up in the reference column).
    /// Returns `None` when a name does not resolve.
    pub fn get_cell(
        &'a self,
        x: impl Into<Identifier>,
        y: impl Into<Identifier>,
    ) -> Result<Option<Cell<'a, B>>> {
        let (x, y) = (x.into(), y.into());
        if let Identifier::Index(i) = y {
            check_index(i, MAX_ROWS, "row")?;
        }

        let column = match self.get_column(x)? {
            Some(column) => column,
            None => return Ok(None),
        };
        column.get(y)
    }

    /// Get a cell from raw scalar coordinates.
    ///
    /// Without a hint, text coordinates are names and everything else is an
    /// index; a hint forces the interpretation.
    pub fn get_cell_hinted(
        &'a self,
        x: CellValue,
        y: CellValue,
        x_kind: Option<IdentifierKind>,
        y_kind: Option<IdentifierKind>,
    ) -> Result<Option<Cell<'a, B>>> {
        let x = Identifier::resolve(x, x_kind)?;
        let y = Identifier::resolve(y, y_kind)?;
        self.get_cell(x, y)
    }

    // === Series ===

    /// All columns, named by the reference row
    pub fn columns(&'a self) -> LineSeries<'a, B> {
        LineSeries::new(self.reference_row())
    }

    /// All rows, named by the reference column
    pub fn rows(&'a self) -> LineSeries<'a, B> {
        LineSeries::new(self.reference_column())
    }
}

impl<'m, B: Backend> fmt::Debug for Sheet<'m, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sheet")
            .field("handle", &self.handle)
            .field("reference_row_index", &self.reference_row_index)
            .field("reference_column_index", &self.reference_column_index)
            .field("scan", &self.scan)
            .finish()
    }
}

impl<'m, B: Backend> fmt::Display for Sheet<'m, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Ok(name) => write!(f, "Sheet[{}]", name),
            Err(_) => write!(f, "Sheet[{:?}]", self.handle),
        }
    }
}
