//! Virtual collections of rows or columns

use std::fmt;
use std::iter::FusedIterator;

use crate::backend::Backend;
use crate::error::{check_index, Result};
use crate::identifier::Identifier;
use crate::line::{Axis, Line};
use crate::scan::AxisScan;
use crate::sheet::Sheet;
use crate::value::CellValue;

/// All rows or all columns of a sheet, as seen through a reference line.
///
/// A series seeded with a row contains columns, one for each cell the row's
/// scan yields; a series seeded with a column contains rows. Nothing is
/// cached: every query traverses the reference line again.
pub struct LineSeries<'a, B: Backend> {
    reference_line: Line<'a, B>,
}

impl<'a, B: Backend> LineSeries<'a, B> {
    /// Create a series from its reference line
    pub fn new(reference_line: Line<'a, B>) -> Self {
        Self { reference_line }
    }

    /// Get the owning sheet
    pub fn sheet(&self) -> &'a Sheet<'a, B> {
        self.reference_line.sheet()
    }

    /// The line whose values name the members of this series
    pub fn reference_line(&self) -> Line<'a, B> {
        self.reference_line
    }

    /// Orientation of the lines in this series
    pub fn contents(&self) -> Axis {
        self.reference_line.axis().cross()
    }

    /// Get a member by position
    pub fn get_by_index(&self, index: i64) -> Result<Line<'a, B>> {
        let axis = self.contents();
        let index = check_index(index, axis.count(), "line")?;
        Ok(self.sheet().line_at(axis, index))
    }

    /// Get the first member whose name equals `name`
    pub fn get_by_name(&self, name: &CellValue) -> Result<Option<Line<'a, B>>> {
        let along = self.reference_line.axis();
        for cell in self.reference_line.iter() {
            let cell = cell?;
            if cell.value()? == *name {
                return Ok(Some(self.sheet().line_at(self.contents(), along.along(&cell))));
            }
        }
        Ok(None)
    }

    /// Get a member by index or by name
    pub fn get(&self, id: impl Into<Identifier>) -> Result<Option<Line<'a, B>>> {
        match id.into() {
            Identifier::Index(i) => self.get_by_index(i).map(Some),
            Identifier::Name(name) => self.get_by_name(&name),
        }
    }

    /// Lazy traversal of the members
    pub fn iter(&self) -> Lines<'a, B> {
        Lines {
            scan: self.reference_line.iter(),
            along: self.reference_line.axis(),
            contents: self.contents(),
            sheet: self.sheet(),
        }
    }

    /// Names of the members, in order
    pub fn names(&self) -> impl Iterator<Item = Result<CellValue>> + 'a {
        self.iter().map(|line| line.and_then(|line| line.name()))
    }

    /// Positions of the members, in order
    pub fn indexes(&self) -> impl Iterator<Item = Result<u32>> + 'a {
        self.iter().map(|line| line.map(|line| line.index()))
    }

    /// Members whose name is not blank
    pub fn named_only(&self) -> impl Iterator<Item = Result<Line<'a, B>>> + 'a {
        self.iter().filter_map(|line| {
            let line = match line {
                Ok(line) => line,
                Err(e) => return Some(Err(e)),
            };
            match line.name() {
                Ok(name) if name.is_blank() => None,
                Ok(_) => Some(Ok(line)),
                Err(e) => Some(Err(e)),
            }
        })
    }

    /// Number of members, by full traversal
    pub fn len(&self) -> Result<usize> {
        self.reference_line.len()
    }

    /// Check if the series has no members
    pub fn is_empty(&self) -> Result<bool> {
        self.reference_line.is_empty()
    }
}

impl<'a, B: Backend> Clone for LineSeries<'a, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, B: Backend> Copy for LineSeries<'a, B> {}

impl<'a, B: Backend> fmt::Debug for LineSeries<'a, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineSeries")
            .field("contents", &self.contents())
            .field("reference_line", &self.reference_line)
            .finish()
    }
}

impl<'a, B: Backend> IntoIterator for LineSeries<'a, B> {
    type Item = Result<Line<'a, B>>;
    type IntoIter = Lines<'a, B>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy sequence of the members of a [`LineSeries`]
pub struct Lines<'a, B: Backend> {
    scan: AxisScan<'a, B>,
    along: Axis,
    contents: Axis,
    sheet: &'a Sheet<'a, B>,
}

impl<'a, B: Backend> Iterator for Lines<'a, B> {
    type Item = Result<Line<'a, B>>;

    fn next(&mut self) -> Option<Self::Item> {
        let cell = match self.scan.next()? {
            Ok(cell) => cell,
            Err(e) => return Some(Err(e)),
        };
        Some(Ok(self.sheet.line_at(self.contents, self.along.along(&cell))))
    }
}

impl<'a, B: Backend> FusedIterator for Lines<'a, B> {}

impl<'a, B: Backend> fmt::Debug for Lines<'a, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lines")
            .field("contents", &self.contents)
            .field("scan", &self.scan)
            .finish()
    }
}
