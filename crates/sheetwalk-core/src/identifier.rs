//! Line and cell identifiers

use crate::error::{Error, Result};
use crate::value::CellValue;

/// Addresses a line or a cell within a line, either by position or by the
/// value found in the sheet's reference line.
#[derive(Debug, Clone, PartialEq)]
pub enum Identifier {
    /// 0-based position; negative values are rejected at resolution
    Index(i64),
    /// Value matched against the reference line, first match wins
    Name(CellValue),
}

/// Explicit interpretation for a raw scalar identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    Index,
    Name,
}

impl Identifier {
    /// Create a name identifier
    pub fn name<V: Into<CellValue>>(value: V) -> Self {
        Identifier::Name(value.into())
    }

    /// Resolve a raw scalar into an identifier.
    ///
    /// With no hint, text is treated as a name and everything else as an
    /// index. Index resolution requires an integral number.
    pub fn resolve(value: CellValue, kind: Option<IdentifierKind>) -> Result<Self> {
        let kind = kind.unwrap_or(match value {
            CellValue::Text(_) => IdentifierKind::Name,
            _ => IdentifierKind::Index,
        });
        match kind {
            IdentifierKind::Name => Ok(Identifier::Name(value)),
            IdentifierKind::Index => match value {
                CellValue::Number(n) if n.fract() == 0.0 && n.is_finite() => {
                    Ok(Identifier::Index(n as i64))
                }
                other => Err(Error::invalid(format!(
                    "expected an integral index, got {} {:?}",
                    other.type_name(),
                    other
                ))),
            },
        }
    }

    /// Get the kind of this identifier
    pub fn kind(&self) -> IdentifierKind {
        match self {
            Identifier::Index(_) => IdentifierKind::Index,
            Identifier::Name(_) => IdentifierKind::Name,
        }
    }
}

impl From<i64> for Identifier {
    fn from(i: i64) -> Self {
        Identifier::Index(i)
    }
}

impl From<i32> for Identifier {
    fn from(i: i32) -> Self {
        Identifier::Index(i64::from(i))
    }
}

impl From<u32> for Identifier {
    fn from(i: u32) -> Self {
        Identifier::Index(i64::from(i))
    }
}

impl From<usize> for Identifier {
    fn from(i: usize) -> Self {
        Identifier::Index(i64::try_from(i).unwrap_or(i64::MAX))
    }
}

impl From<&str> for Identifier {
    fn from(s: &str) -> Self {
        Identifier::Name(CellValue::text(s))
    }
}

impl From<String> for Identifier {
    fn from(s: String) -> Self {
        Identifier::Name(CellValue::Text(s))
    }
}

impl From<CellValue> for Identifier {
    fn from(v: CellValue) -> Self {
        Identifier::Name(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults() {
        assert_eq!(
            Identifier::resolve(CellValue::text("Price"), None).unwrap(),
            Identifier::name("Price")
        );
        assert_eq!(
            Identifier::resolve(CellValue::Number(4.0), None).unwrap(),
            Identifier::Index(4)
        );
    }

    #[test]
    fn test_resolve_with_hint() {
        assert_eq!(
            Identifier::resolve(CellValue::Number(2018.0), Some(IdentifierKind::Name)).unwrap(),
            Identifier::Name(CellValue::Number(2018.0))
        );
        let err = Identifier::resolve(CellValue::text("3"), Some(IdentifierKind::Index)).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_resolve_rejects_fractional_and_empty_index() {
        assert!(Identifier::resolve(CellValue::Number(1.5), None).is_err());
        assert!(Identifier::resolve(CellValue::Empty, None).is_err());
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Identifier::from(3i64), Identifier::Index(3));
        assert_eq!(Identifier::from("a"), Identifier::Name(CellValue::text("a")));
        assert_eq!(Identifier::from(CellValue::Number(1.0)).kind(), IdentifierKind::Name);
    }
}
