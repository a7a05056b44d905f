//! Live cell handles

use std::fmt;

use crate::address::CellAddress;
use crate::backend::Backend;
use crate::color::Color;
use crate::error::Result;
use crate::line::Line;
use crate::sheet::Sheet;
use crate::value::CellValue;

/// A position in a sheet.
///
/// A cell holds no data of its own: every accessor is a round-trip to the
/// host, so reads always reflect the live document. Two cells compare equal
/// when they sit at the same position of the same host sheet, however the
/// sheet was obtained.
pub struct Cell<'a, B: Backend> {
    sheet: &'a Sheet<'a, B>,
    x: u32,
    y: u32,
}

impl<'a, B: Backend> Cell<'a, B> {
    pub(crate) fn new(sheet: &'a Sheet<'a, B>, x: u32, y: u32) -> Self {
        Self { sheet, x, y }
    }

    /// Get the owning sheet
    pub fn sheet(&self) -> &'a Sheet<'a, B> {
        self.sheet
    }

    /// Column index (0-based)
    pub fn x(&self) -> u32 {
        self.x
    }

    /// Row index (0-based)
    pub fn y(&self) -> u32 {
        self.y
    }

    /// `(x, y)` position
    pub fn position(&self) -> (u32, u32) {
        (self.x, self.y)
    }

    /// A1-style address of this cell
    pub fn address(&self) -> CellAddress {
        CellAddress::new(self.x, self.y)
    }

    /// The row this cell belongs to
    pub fn row(&self) -> Line<'a, B> {
        self.sheet.row_at(self.y)
    }

    /// The column this cell belongs to
    pub fn column(&self) -> Line<'a, B> {
        self.sheet.column_at(self.x)
    }

    // === Value ===

    /// Read the current value
    pub fn value(&self) -> Result<CellValue> {
        self.sheet
            .backend()
            .read_cell(self.sheet.handle(), self.x, self.y)
    }

    /// Write a new value; `Empty` clears the content
    pub fn set_value<V: Into<CellValue>>(&self, value: V) -> Result<()> {
        self.sheet
            .backend()
            .write_cell(self.sheet.handle(), self.x, self.y, &value.into())
    }

    /// Value rendered as text: empty when absent, integral numbers without
    /// a fractional part
    pub fn text(&self) -> Result<String> {
        Ok(self.value()?.to_string())
    }

    /// Numeric value, or `0.0` when the cell does not hold a number
    pub fn number(&self) -> Result<f64> {
        Ok(self.value()?.as_number().unwrap_or(0.0))
    }

    /// Value with whitespace runs collapsed and ends trimmed
    pub fn value_without_whitespace(&self) -> Result<CellValue> {
        Ok(self.value()?.without_whitespace())
    }

    /// Check if removing whitespace would change the value
    pub fn has_whitespace(&self) -> Result<bool> {
        let value = self.value()?;
        Ok(value.without_whitespace() != value)
    }

    /// Collapse whitespace in a text value. Writes only when the value changes.
    pub fn remove_whitespace(&self) -> Result<()> {
        let value = self.value()?;
        let cleaned = value.without_whitespace();
        if cleaned != value {
            self.set_value(cleaned)?;
        }
        Ok(())
    }

    // === Color ===

    /// Read the background color; `None` when no explicit color is set
    pub fn color(&self) -> Result<Option<Color>> {
        self.sheet
            .backend()
            .read_color(self.sheet.handle(), self.x, self.y)
    }

    /// Set the background color; `None` restores the default
    pub fn set_color(&self, color: Option<Color>) -> Result<()> {
        self.sheet
            .backend()
            .write_color(self.sheet.handle(), self.x, self.y, color)
    }

    /// Set the background color from a host-style packed integer, where
    /// [`DEFAULT_COLOR`](crate::DEFAULT_COLOR) restores the default.
    ///
    /// Out-of-range values are rejected before the host is touched.
    pub fn set_color_packed(&self, packed: i64) -> Result<()> {
        let color = Color::from_host_int(packed)?;
        self.set_color(color)
    }

    /// Remove the value and restore the default color
    pub fn clear(&self) -> Result<()> {
        self.set_value(CellValue::Empty)?;
        self.set_color(None)
    }
}

impl<'a, B: Backend> Clone for Cell<'a, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, B: Backend> Copy for Cell<'a, B> {}

impl<'a, B: Backend> PartialEq for Cell<'a, B> {
    fn eq(&self, other: &Self) -> bool {
        self.sheet.handle() == other.sheet.handle() && self.position() == other.position()
    }
}

impl<'a, B: Backend> fmt::Debug for Cell<'a, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cell")
            .field("sheet", self.sheet.handle())
            .field("x", &self.x)
            .field("y", &self.y)
            .finish()
    }
}

impl<'a, B: Backend> fmt::Display for Cell<'a, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Ok(value) => write!(f, "Cell[{}, Value: {:?}]", self.address(), value),
            Err(_) => write!(f, "Cell[{}]", self.address()),
        }
    }
}
