//! In-process host storage and its `Backend` implementation

use std::cell::{Cell, RefCell};

use ahash::AHashMap;
use sheetwalk_core::{
    Backend, CellAddress, CellValue, Color, Error, Result, Session, MAX_COLS, MAX_ROWS,
};

use crate::error::{MemoryError, MemoryResult};

/// Handle to a workbook of a [`MemoryHost`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WorkbookId(pub(crate) usize);

/// Handle to a sheet of a [`MemoryHost`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SheetId {
    pub(crate) workbook: usize,
    pub(crate) sheet: usize,
}

impl SheetId {
    /// The workbook this sheet belongs to
    pub fn workbook(&self) -> WorkbookId {
        WorkbookId(self.workbook)
    }
}

/// Stored state of one populated cell
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Entry {
    pub(crate) value: CellValue,
    pub(crate) color: Option<Color>,
}

impl Entry {
    fn is_default(&self) -> bool {
        self.value.is_empty() && self.color.is_none()
    }
}

#[derive(Debug)]
pub(crate) struct SheetData {
    pub(crate) name: String,
    pub(crate) cells: RefCell<AHashMap<(u32, u32), Entry>>,
}

#[derive(Debug)]
pub(crate) struct WorkbookData {
    pub(crate) name: String,
    pub(crate) sheets: Vec<SheetData>,
}

/// A spreadsheet host living entirely in memory.
///
/// Each sheet is a sparse map from `(x, y)` to value and color; a cell that
/// returns to an empty value with the default color is removed from the map.
/// Reads and writes through the [`Backend`] trait are counted.
#[derive(Debug, Default)]
pub struct MemoryHost {
    pub(crate) workbooks: Vec<WorkbookData>,
    reads: Cell<usize>,
    writes: Cell<usize>,
}

impl MemoryHost {
    /// Create an empty host with no workbooks
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new, empty workbook
    pub fn add_workbook<S: Into<String>>(&mut self, name: S) -> WorkbookId {
        self.workbooks.push(WorkbookData {
            name: name.into(),
            sheets: Vec::new(),
        });
        WorkbookId(self.workbooks.len() - 1)
    }

    /// Append an empty sheet to a workbook.
    ///
    /// Sheet names must be unique within their workbook.
    pub fn add_sheet<S: Into<String>>(
        &mut self,
        workbook: WorkbookId,
        name: S,
    ) -> MemoryResult<SheetId> {
        let name = name.into();
        let book = self
            .workbooks
            .get_mut(workbook.0)
            .ok_or_else(|| MemoryError::UnknownHandle(format!("{workbook:?}")))?;
        if book.sheets.iter().any(|s| s.name == name) {
            return Err(MemoryError::DuplicateSheet {
                workbook: book.name.clone(),
                sheet: name,
            });
        }
        book.sheets.push(SheetData {
            name,
            cells: RefCell::new(AHashMap::new()),
        });
        Ok(SheetId {
            workbook: workbook.0,
            sheet: book.sheets.len() - 1,
        })
    }

    /// Handles of every workbook, in the order they were added
    pub fn workbooks(&self) -> Vec<WorkbookId> {
        (0..self.workbooks.len()).map(WorkbookId).collect()
    }

    /// Find a sheet by workbook and name without touching the counters
    pub fn sheet_id(&self, workbook: WorkbookId, name: &str) -> Option<SheetId> {
        let book = self.workbooks.get(workbook.0)?;
        let sheet = book.sheets.iter().position(|s| s.name == name)?;
        Some(SheetId {
            workbook: workbook.0,
            sheet,
        })
    }

    /// Set a value by A1-style address
    pub fn set<V: Into<CellValue>>(
        &self,
        sheet: SheetId,
        address: &str,
        value: V,
    ) -> MemoryResult<()> {
        let address = CellAddress::parse(address)?;
        self.set_at(sheet, address.x, address.y, value)
    }

    /// Set a value by position
    pub fn set_at<V: Into<CellValue>>(
        &self,
        sheet: SheetId,
        x: u32,
        y: u32,
        value: V,
    ) -> MemoryResult<()> {
        check_position(x, y)?;
        let value = value.into();
        self.update(sheet, x, y, |entry| entry.value = value)
    }

    /// Set a background color by position
    pub fn set_color_at(
        &self,
        sheet: SheetId,
        x: u32,
        y: u32,
        color: Option<Color>,
    ) -> MemoryResult<()> {
        check_position(x, y)?;
        self.update(sheet, x, y, |entry| entry.color = color)
    }

    /// Read a value by position without touching the counters
    pub fn value_at(&self, sheet: SheetId, x: u32, y: u32) -> MemoryResult<CellValue> {
        Ok(self
            .entry(sheet, x, y)?
            .map(|entry| entry.value)
            .unwrap_or_default())
    }

    /// Read a background color by position without touching the counters
    pub fn color_at(&self, sheet: SheetId, x: u32, y: u32) -> MemoryResult<Option<Color>> {
        Ok(self.entry(sheet, x, y)?.and_then(|entry| entry.color))
    }

    /// Number of populated cells in a sheet
    pub fn populated(&self, sheet: SheetId) -> MemoryResult<usize> {
        Ok(self.sheet_data(sheet)?.cells.borrow().len())
    }

    /// Wrap this host in a session with every workbook open
    pub fn into_session(self) -> Session<MemoryHost> {
        let workbooks = self.workbooks();
        Session::new(self, workbooks)
    }

    /// Number of reads served through the `Backend` trait
    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    /// Number of writes served through the `Backend` trait
    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    /// Reset both counters to zero
    pub fn reset_counters(&self) {
        self.reads.set(0);
        self.writes.set(0);
    }

    pub(crate) fn sheet_data(&self, sheet: SheetId) -> MemoryResult<&SheetData> {
        self.workbooks
            .get(sheet.workbook)
            .and_then(|book| book.sheets.get(sheet.sheet))
            .ok_or_else(|| MemoryError::UnknownHandle(format!("{sheet:?}")))
    }

    fn entry(&self, sheet: SheetId, x: u32, y: u32) -> MemoryResult<Option<Entry>> {
        Ok(self.sheet_data(sheet)?.cells.borrow().get(&(x, y)).cloned())
    }

    fn update<F>(&self, sheet: SheetId, x: u32, y: u32, change: F) -> MemoryResult<()>
    where
        F: FnOnce(&mut Entry),
    {
        let mut cells = self.sheet_data(sheet)?.cells.borrow_mut();
        let entry = cells.entry((x, y)).or_default();
        change(entry);
        if entry.is_default() {
            cells.remove(&(x, y));
        }
        Ok(())
    }

    fn tick_read(&self) {
        self.reads.set(self.reads.get() + 1);
    }

    fn tick_write(&self) {
        self.writes.set(self.writes.get() + 1);
    }
}

fn check_position(x: u32, y: u32) -> MemoryResult<()> {
    if x >= MAX_COLS || y >= MAX_ROWS {
        return Err(Error::invalid(format!("position ({x}, {y}) is outside the grid")).into());
    }
    Ok(())
}

impl Backend for MemoryHost {
    type Workbook = WorkbookId;
    type Sheet = SheetId;

    fn read_cell(&self, sheet: &SheetId, x: u32, y: u32) -> Result<CellValue> {
        self.tick_read();
        Ok(self.value_at(*sheet, x, y)?)
    }

    fn write_cell(&self, sheet: &SheetId, x: u32, y: u32, value: &CellValue) -> Result<()> {
        self.tick_write();
        Ok(self.set_at(*sheet, x, y, value)?)
    }

    fn read_color(&self, sheet: &SheetId, x: u32, y: u32) -> Result<Option<Color>> {
        self.tick_read();
        Ok(self.color_at(*sheet, x, y)?)
    }

    fn write_color(&self, sheet: &SheetId, x: u32, y: u32, color: Option<Color>) -> Result<()> {
        self.tick_write();
        Ok(self.set_color_at(*sheet, x, y, color)?)
    }

    fn enumerate_sheets(&self, workbook: &WorkbookId) -> Result<Vec<SheetId>> {
        self.tick_read();
        let book = self
            .workbooks
            .get(workbook.0)
            .ok_or_else(|| Error::host(format!("unknown workbook {workbook:?}")))?;
        Ok((0..book.sheets.len())
            .map(|sheet| SheetId {
                workbook: workbook.0,
                sheet,
            })
            .collect())
    }

    fn resolve_sheet_by_name(&self, workbook: &WorkbookId, name: &str) -> Result<SheetId> {
        self.tick_read();
        self.sheet_id(*workbook, name).ok_or_else(|| {
            tracing::trace!(?workbook, name, "sheet lookup missed");
            Error::NotFound(format!("sheet '{name}'"))
        })
    }

    fn sheet_name(&self, sheet: &SheetId) -> Result<String> {
        Ok(self.sheet_data(*sheet)?.name.clone())
    }

    fn workbook_name(&self, workbook: &WorkbookId) -> Result<String> {
        self.workbooks
            .get(workbook.0)
            .map(|book| book.name.clone())
            .ok_or_else(|| Error::host(format!("unknown workbook {workbook:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_duplicate_sheet_rejected() {
        let mut host = MemoryHost::new();
        let book = host.add_workbook("book");
        host.add_sheet(book, "Data").unwrap();
        let err = host.add_sheet(book, "Data").unwrap_err();
        assert!(matches!(err, MemoryError::DuplicateSheet { .. }));

        let other = host.add_workbook("other");
        assert!(host.add_sheet(other, "Data").is_ok());
    }

    #[test]
    fn test_sparse_storage_drops_default_cells() {
        let mut host = MemoryHost::new();
        let book = host.add_workbook("book");
        let sheet = host.add_sheet(book, "Data").unwrap();

        host.set(sheet, "B2", 5).unwrap();
        host.set_color_at(sheet, 1, 1, Some(Color::BLUE)).unwrap();
        assert_eq!(host.populated(sheet).unwrap(), 1);

        host.set_at(sheet, 1, 1, CellValue::Empty).unwrap();
        assert_eq!(host.populated(sheet).unwrap(), 1);
        host.set_color_at(sheet, 1, 1, None).unwrap();
        assert_eq!(host.populated(sheet).unwrap(), 0);
    }

    #[test]
    fn test_address_and_bounds() {
        let mut host = MemoryHost::new();
        let book = host.add_workbook("book");
        let sheet = host.add_sheet(book, "Data").unwrap();

        host.set(sheet, "C4", "x").unwrap();
        assert_eq!(host.value_at(sheet, 2, 3).unwrap(), CellValue::text("x"));
        assert!(host.set(sheet, "4C", "x").is_err());
        assert!(host.set_at(sheet, MAX_COLS, 0, "x").is_err());
    }

    #[test]
    fn test_backend_counts_round_trips() {
        let mut host = MemoryHost::new();
        let book = host.add_workbook("book");
        let sheet = host.add_sheet(book, "Data").unwrap();

        host.write_cell(&sheet, 0, 0, &CellValue::Number(1.0)).unwrap();
        assert_eq!(host.read_cell(&sheet, 0, 0).unwrap(), CellValue::Number(1.0));
        assert_eq!(host.read_color(&sheet, 0, 0).unwrap(), None);
        assert_eq!((host.reads(), host.writes()), (2, 1));

        host.reset_counters();
        assert_eq!((host.reads(), host.writes()), (0, 0));
        // builder access is not counted
        host.value_at(sheet, 0, 0).unwrap();
        assert_eq!(host.reads(), 0);
    }

    #[test]
    fn test_resolve_missing_sheet_is_not_found() {
        let mut host = MemoryHost::new();
        let book = host.add_workbook("book");
        host.add_sheet(book, "Data").unwrap();
        let err = host.resolve_sheet_by_name(&book, "Other").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(host.workbook_name(&book).unwrap(), "book");
    }
}
