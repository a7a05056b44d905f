//! Gap-tolerant traversal along one row or column
//!
//! Hand-edited sheets rarely hold perfectly contiguous tables: a blank row
//! between two groups, an empty cell where a value was never entered. A
//! traversal that stops at the first empty cell loses the rest of the table,
//! and one that runs to the grid limit reads a million cells. [`AxisScan`]
//! keeps going over short blank runs and stops at the first run of
//! [`ScanOptions::max_gap`] blank cells.

use std::fmt;
use std::iter::FusedIterator;

use crate::backend::Backend;
use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::line::Axis;
use crate::sheet::Sheet;
use crate::MAX_GAP;

/// Traversal settings shared by every line of a sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Length of the blank run that ends a traversal (default: 10)
    pub max_gap: u32,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self { max_gap: MAX_GAP }
    }
}

impl ScanOptions {
    /// Create options with a custom gap length
    pub fn with_max_gap(max_gap: u32) -> Result<Self> {
        let options = Self { max_gap };
        options.validate()?;
        Ok(options)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.max_gap == 0 {
            return Err(Error::invalid("max_gap must be at least 1"));
        }
        Ok(())
    }
}

/// Lazy, single-pass sequence of the cells of one line.
///
/// Blank cells are yielded as long as a non-blank cell follows within the
/// probe window; the first blank cell with no such follower ends the
/// sequence and is not yielded. Positions up to the last probe hit are
/// trusted without re-reading; any blank cell past it triggers a fresh probe
/// from the cursor.
///
/// The scan cannot be cloned or rewound: start a new one from the line.
pub struct AxisScan<'a, B: Backend> {
    sheet: &'a Sheet<'a, B>,
    axis: Axis,
    index: u32,
    cursor: u32,
    highest_probed: Option<u32>,
    max_gap: u32,
    finished: bool,
}

impl<'a, B: Backend> AxisScan<'a, B> {
    pub(crate) fn new(sheet: &'a Sheet<'a, B>, axis: Axis, index: u32) -> Self {
        Self {
            sheet,
            axis,
            index,
            cursor: 0,
            highest_probed: None,
            max_gap: sheet.scan_options().max_gap,
            finished: false,
        }
    }

    /// Position of the next cell this scan will consider
    pub fn cursor(&self) -> u32 {
        self.cursor
    }

    /// Highest position confirmed non-blank by a forward probe
    pub fn highest_probed(&self) -> Option<u32> {
        self.highest_probed
    }

    /// Move to the next cell.
    ///
    /// Returns `Ok(None)` once the sequence has ended. After an error the
    /// scan is finished as well.
    pub fn advance(&mut self) -> Result<Option<Cell<'a, B>>> {
        if self.finished {
            return Ok(None);
        }
        let step = self.step();
        if !matches!(step, Ok(Some(_))) {
            self.finished = true;
        }
        step
    }

    fn step(&mut self) -> Result<Option<Cell<'a, B>>> {
        let i = self.cursor;
        if i >= self.axis.length() {
            return Ok(None);
        }

        let cell = self.cell(i);
        let vouched = self.highest_probed.map_or(false, |hp| i <= hp);
        if !vouched && cell.value()?.is_blank() {
            match self.probe(i)? {
                Some(hit) => self.highest_probed = Some(hit),
                None => {
                    tracing::trace!(
                        axis = ?self.axis,
                        index = self.index,
                        end = i,
                        "blank run reached max_gap, scan finished"
                    );
                    return Ok(None);
                }
            }
        }

        self.cursor += 1;
        Ok(Some(cell))
    }

    /// Look at the `max_gap - 1` positions after `from` for a non-blank cell.
    fn probe(&self, from: u32) -> Result<Option<u32>> {
        for offset in 1..self.max_gap {
            let Some(pos) = from.checked_add(offset) else {
                break;
            };
            if pos >= self.axis.length() {
                break;
            }
            if !self.cell(pos).value()?.is_blank() {
                tracing::trace!(axis = ?self.axis, index = self.index, from, hit = pos, "probe hit");
                return Ok(Some(pos));
            }
        }
        Ok(None)
    }

    fn cell(&self, pos: u32) -> Cell<'a, B> {
        match self.axis {
            Axis::Row => self.sheet.cell(pos, self.index),
            Axis::Column => self.sheet.cell(self.index, pos),
        }
    }
}

impl<'a, B: Backend> Iterator for AxisScan<'a, B> {
    type Item = Result<Cell<'a, B>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().transpose()
    }
}

impl<'a, B: Backend> FusedIterator for AxisScan<'a, B> {}

impl<'a, B: Backend> fmt::Debug for AxisScan<'a, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AxisScan")
            .field("axis", &self.axis)
            .field("index", &self.index)
            .field("cursor", &self.cursor)
            .field("highest_probed", &self.highest_probed)
            .field("max_gap", &self.max_gap)
            .field("finished", &self.finished)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_gap() {
        assert_eq!(ScanOptions::default().max_gap, 10);
    }

    #[test]
    fn test_zero_gap_rejected() {
        assert!(ScanOptions::with_max_gap(0).unwrap_err().is_invalid_argument());
        assert_eq!(ScanOptions::with_max_gap(3).unwrap().max_gap, 3);
    }
}
