//! A1-style rendering of cell positions

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};

/// A cell position in `(x, y)` = `(column, row)` order, both 0-based.
///
/// Displays in A1 notation: `CellAddress::new(1, 2)` is `"B3"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellAddress {
    /// Column index (A=0, B=1, ..., XFD=16383)
    pub x: u32,
    /// Row index (0-based internally, 1-based in display)
    pub y: u32,
}

impl CellAddress {
    /// Create a new cell address
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Parse a cell address from A1-style notation
    ///
    /// # Examples
    /// ```
    /// use sheetwalk_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("B3").unwrap();
    /// assert_eq!((addr.x, addr.y), (1, 2));
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let split = s
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(s.len());
        let (letters, digits) = s.split_at(split);

        if letters.is_empty() {
            return Err(Error::invalid(format!("no column letters in '{s}'")));
        }
        let x = Self::letters_to_column(letters)?;

        let row: u32 = digits
            .parse()
            .map_err(|_| Error::invalid(format!("invalid row number in '{s}'")))?;
        if row == 0 || row > MAX_ROWS {
            return Err(Error::invalid(format!(
                "row number must be within 1..={MAX_ROWS} in '{s}'"
            )));
        }

        Ok(Self { x, y: row - 1 })
    }

    /// Convert column index to letters (0 = A, 25 = Z, 26 = AA, etc.)
    pub fn column_to_letters(col: u32) -> String {
        let mut result = String::new();
        let mut n = col as u64 + 1;

        while n > 0 {
            n -= 1;
            result.insert(0, ((n % 26) as u8 + b'A') as char);
            n /= 26;
        }

        result
    }

    /// Convert column letters to index (A = 0, Z = 25, AA = 26, etc.)
    pub fn letters_to_column(letters: &str) -> Result<u32> {
        if letters.is_empty() {
            return Err(Error::invalid("empty column letters"));
        }

        let mut col: u32 = 0;
        for c in letters.chars() {
            if !c.is_ascii_alphabetic() {
                return Err(Error::invalid(format!("invalid column letter '{c}'")));
            }
            let digit = c.to_ascii_uppercase() as u32 - 'A' as u32 + 1;
            col = col
                .checked_mul(26)
                .and_then(|v| v.checked_add(digit))
                .filter(|v| *v <= MAX_COLS)
                .ok_or_else(|| Error::invalid(format!("column '{letters}' out of bounds")))?;
        }

        Ok(col - 1)
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::column_to_letters(self.x), self.y as u64 + 1)
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<(u32, u32)> for CellAddress {
    fn from((x, y): (u32, u32)) -> Self {
        Self::new(x, y)
    }
}
