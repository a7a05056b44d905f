//! Shared fixtures for sheetwalk-core integration tests.
//!
//! `GridBackend` is a minimal in-test host: a sparse grid per sheet plus
//! counters for every host round-trip, so tests can assert that rejected
//! calls never reached the host.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use sheetwalk_core::{Backend, CellValue, Color, Error, Model, Result, Session};

#[derive(Debug, Default)]
pub struct GridBackend {
    workbooks: Vec<String>,
    /// Workbook whose sheet enumeration fails
    broken: Option<usize>,
    /// (workbook, name) per sheet id
    sheets: Vec<(usize, String)>,
    values: RefCell<HashMap<(usize, u32, u32), CellValue>>,
    colors: RefCell<HashMap<(usize, u32, u32), Color>>,
    reads: Cell<usize>,
    writes: Cell<usize>,
}

impl GridBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn workbook(&mut self, name: &str) -> usize {
        self.workbooks.push(name.to_string());
        self.workbooks.len() - 1
    }

    pub fn sheet(&mut self, workbook: usize, name: &str) -> usize {
        self.sheets.push((workbook, name.to_string()));
        self.sheets.len() - 1
    }

    /// Make every enumeration of `workbook` fail as if the host went away
    pub fn break_workbook(&mut self, workbook: usize) {
        self.broken = Some(workbook);
    }

    pub fn put(&self, sheet: usize, x: u32, y: u32, value: impl Into<CellValue>) {
        let value = value.into();
        let mut values = self.values.borrow_mut();
        if value.is_empty() {
            values.remove(&(sheet, x, y));
        } else {
            values.insert((sheet, x, y), value);
        }
    }

    /// Fill a column from the top, `None` leaving a cell unpopulated
    pub fn put_column(&self, sheet: usize, x: u32, values: &[Option<&str>]) {
        for (y, value) in values.iter().enumerate() {
            if let Some(value) = value {
                self.put(sheet, x, y as u32, *value);
            }
        }
    }

    pub fn peek(&self, sheet: usize, x: u32, y: u32) -> CellValue {
        self.values
            .borrow()
            .get(&(sheet, x, y))
            .cloned()
            .unwrap_or_default()
    }

    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    pub fn calls(&self) -> usize {
        self.reads() + self.writes()
    }

    pub fn into_session(self) -> Session<Self> {
        let workbooks = (0..self.workbooks.len()).collect();
        Session::new(self, workbooks)
    }

    fn tick_read(&self) {
        self.reads.set(self.reads.get() + 1);
    }

    fn tick_write(&self) {
        self.writes.set(self.writes.get() + 1);
    }
}

impl Backend for GridBackend {
    type Workbook = usize;
    type Sheet = usize;

    fn read_cell(&self, sheet: &usize, x: u32, y: u32) -> Result<CellValue> {
        self.tick_read();
        Ok(self.peek(*sheet, x, y))
    }

    fn write_cell(&self, sheet: &usize, x: u32, y: u32, value: &CellValue) -> Result<()> {
        self.tick_write();
        self.put(*sheet, x, y, value);
        Ok(())
    }

    fn read_color(&self, sheet: &usize, x: u32, y: u32) -> Result<Option<Color>> {
        self.tick_read();
        Ok(self.colors.borrow().get(&(*sheet, x, y)).copied())
    }

    fn write_color(&self, sheet: &usize, x: u32, y: u32, color: Option<Color>) -> Result<()> {
        self.tick_write();
        let mut colors = self.colors.borrow_mut();
        match color {
            Some(color) => colors.insert((*sheet, x, y), color),
            None => colors.remove(&(*sheet, x, y)),
        };
        Ok(())
    }

    fn enumerate_sheets(&self, workbook: &usize) -> Result<Vec<usize>> {
        self.tick_read();
        if self.broken == Some(*workbook) {
            return Err(Error::host("bridge dropped"));
        }
        Ok(self
            .sheets
            .iter()
            .enumerate()
            .filter(|(_, (book, _))| book == workbook)
            .map(|(id, _)| id)
            .collect())
    }

    fn resolve_sheet_by_name(&self, workbook: &usize, name: &str) -> Result<usize> {
        self.tick_read();
        self.sheets
            .iter()
            .position(|(book, sheet)| book == workbook && sheet == name)
            .ok_or_else(|| Error::NotFound(format!("sheet '{name}'")))
    }

    fn sheet_name(&self, sheet: &usize) -> Result<String> {
        self.sheets
            .get(*sheet)
            .map(|(_, name)| name.clone())
            .ok_or_else(|| Error::host(format!("stale sheet handle {sheet}")))
    }

    fn workbook_name(&self, workbook: &usize) -> Result<String> {
        self.workbooks
            .get(*workbook)
            .cloned()
            .ok_or_else(|| Error::host(format!("stale workbook handle {workbook}")))
    }
}

/// One workbook "Book" with a single empty sheet "Data" (sheet id 0)
pub fn single_sheet() -> GridBackend {
    let mut grid = GridBackend::new();
    let book = grid.workbook("Book");
    grid.sheet(book, "Data");
    grid
}

pub fn model(grid: GridBackend) -> Model<GridBackend> {
    Model::new(grid.into_session()).unwrap()
}
