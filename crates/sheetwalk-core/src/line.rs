//! Rows and columns

use std::fmt;

use ahash::AHashSet;

use crate::backend::Backend;
use crate::cell::Cell;
use crate::error::{check_index, Result};
use crate::identifier::Identifier;
use crate::scan::AxisScan;
use crate::sheet::Sheet;
use crate::value::{CellValue, ValueKey};
use crate::{MAX_COLS, MAX_ROWS};

/// Orientation of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal line; cells vary in x
    Row,
    /// Vertical line; cells vary in y
    Column,
}

impl Axis {
    /// The crossing orientation
    pub fn cross(self) -> Axis {
        match self {
            Axis::Row => Axis::Column,
            Axis::Column => Axis::Row,
        }
    }

    /// Number of cell positions along a line of this orientation
    pub fn length(self) -> u32 {
        match self {
            Axis::Row => MAX_COLS,
            Axis::Column => MAX_ROWS,
        }
    }

    /// Number of lines of this orientation in a sheet
    pub fn count(self) -> u32 {
        self.cross().length()
    }

    /// Position of a cell along a line of this orientation
    pub(crate) fn along<B: Backend>(self, cell: &Cell<'_, B>) -> u32 {
        match self {
            Axis::Row => cell.x(),
            Axis::Column => cell.y(),
        }
    }

    fn label(self) -> &'static str {
        match self {
            Axis::Row => "Row",
            Axis::Column => "Column",
        }
    }
}

/// A row or column of a sheet.
///
/// A line's name is the value it holds where it crosses the sheet's
/// reference line: a column is named by its cell in the reference row, a row
/// by its cell in the reference column.
pub struct Line<'a, B: Backend> {
    sheet: &'a Sheet<'a, B>,
    axis: Axis,
    index: u32,
    reference_index: u32,
}

impl<'a, B: Backend> Line<'a, B> {
    pub(crate) fn new(sheet: &'a Sheet<'a, B>, axis: Axis, index: u32) -> Self {
        Self {
            sheet,
            axis,
            index,
            reference_index: index,
        }
    }

    /// Get the owning sheet
    pub fn sheet(&self) -> &'a Sheet<'a, B> {
        self.sheet
    }

    /// Get the orientation
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Check if this line is a row
    pub fn is_row(&self) -> bool {
        self.axis == Axis::Row
    }

    /// Check if this line is a column
    pub fn is_column(&self) -> bool {
        self.axis == Axis::Column
    }

    /// Position of this line in the sheet (0-based)
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Index recorded at construction; starts out equal to [`index`](Self::index)
    pub fn reference_index(&self) -> u32 {
        self.reference_index
    }

    /// Override the recorded reference index
    pub fn with_reference_index(mut self, reference_index: u32) -> Self {
        self.reference_index = reference_index;
        self
    }

    /// Index of the cell holding this line's name
    pub fn name_cell_index(&self) -> u32 {
        match self.axis {
            Axis::Column => self.sheet.reference_row_index(),
            Axis::Row => self.sheet.reference_column_index(),
        }
    }

    /// This line's name, `Empty` when the header cell is unpopulated
    pub fn name(&self) -> Result<CellValue> {
        self.cell_at(self.name_cell_index()).value()
    }

    /// The sheet line whose values name this line's cells
    pub fn reference_line(&self) -> Line<'a, B> {
        match self.axis {
            Axis::Column => self.sheet.reference_column(),
            Axis::Row => self.sheet.reference_row(),
        }
    }

    pub(crate) fn cell_at(&self, pos: u32) -> Cell<'a, B> {
        match self.axis {
            Axis::Row => self.sheet.cell(pos, self.index),
            Axis::Column => self.sheet.cell(self.index, pos),
        }
    }

    /// Get the cell at a position along this line
    pub fn get_cell_by_index(&self, index: i64) -> Result<Cell<'a, B>> {
        let pos = check_index(index, self.axis.length(), "cell")?;
        Ok(self.cell_at(pos))
    }

    /// Get the cell whose position is named `reference` in the reference line.
    ///
    /// The first matching position wins.
    pub fn get_cell_by_reference(&self, reference: &CellValue) -> Result<Option<Cell<'a, B>>> {
        for cell in self.reference_line().iter() {
            let cell = cell?;
            if cell.value()? == *reference {
                return Ok(Some(self.cell_at(self.axis.along(&cell))));
            }
        }
        Ok(None)
    }

    /// Get a cell by index or by reference name
    pub fn get(&self, id: impl Into<Identifier>) -> Result<Option<Cell<'a, B>>> {
        match id.into() {
            Identifier::Index(i) => self.get_cell_by_index(i).map(Some),
            Identifier::Name(name) => self.get_cell_by_reference(&name),
        }
    }

    /// Gap-tolerant traversal of this line's cells
    pub fn iter(&self) -> AxisScan<'a, B> {
        AxisScan::new(self.sheet, self.axis, self.index)
    }

    /// Number of cells a traversal yields
    pub fn len(&self) -> Result<usize> {
        self.iter().try_fold(0, |n, cell| cell.map(|_| n + 1))
    }

    /// Check if a traversal yields no cells
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.iter().next().transpose()?.is_none())
    }

    /// Cells whose whitespace-normalized value already appeared earlier in
    /// this line
    pub fn duplicates(&self) -> Duplicates<'a, B> {
        Duplicates {
            scan: self.iter(),
            seen: AHashSet::new(),
        }
    }

    /// Clear every cell past the header. With `include_header`, the header
    /// cell is cleared too; cells before it are left alone.
    pub fn clear(&self, include_header: bool) -> Result<()> {
        let header = self.name_cell_index();
        let targets = self
            .iter()
            .filter_map(|cell| match cell {
                Ok(cell) => {
                    let pos = self.axis.along(&cell);
                    (pos > header || (include_header && pos == header)).then_some(Ok(cell))
                }
                Err(e) => Some(Err(e)),
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(line = %self.describe(), cleared = targets.len(), "clearing line");
        for cell in targets {
            cell.clear()?;
        }
        Ok(())
    }

    fn describe(&self) -> String {
        format!("{}[index: {}]", self.axis.label(), self.index)
    }
}

impl<'a, B: Backend> Clone for Line<'a, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, B: Backend> Copy for Line<'a, B> {}

impl<'a, B: Backend> PartialEq for Line<'a, B> {
    fn eq(&self, other: &Self) -> bool {
        self.sheet.handle() == other.sheet.handle()
            && self.axis == other.axis
            && self.index == other.index
    }
}

impl<'a, B: Backend> fmt::Debug for Line<'a, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Line")
            .field("sheet", self.sheet.handle())
            .field("axis", &self.axis)
            .field("index", &self.index)
            .field("reference_index", &self.reference_index)
            .finish()
    }
}

impl<'a, B: Backend> fmt::Display for Line<'a, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())?;
        match self.name() {
            Ok(name) => write!(f, " name: {}", name),
            Err(_) => write!(f, " name: ?"),
        }
    }
}

/// Lazy sequence of repeated cells in a line, see [`Line::duplicates`]
pub struct Duplicates<'a, B: Backend> {
    scan: AxisScan<'a, B>,
    seen: AHashSet<ValueKey>,
}

impl<'a, B: Backend> Iterator for Duplicates<'a, B> {
    type Item = Result<Cell<'a, B>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let cell = match self.scan.next()? {
                Ok(cell) => cell,
                Err(e) => return Some(Err(e)),
            };
            let key = match cell.value_without_whitespace() {
                Ok(value) => value.key(),
                Err(e) => return Some(Err(e)),
            };
            if !self.seen.insert(key) {
                return Some(Ok(cell));
            }
        }
    }
}
