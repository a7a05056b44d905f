//! Cell value types

use std::fmt;

/// Represents the scalar value of a cell as reported by the host
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum CellValue {
    /// Empty cell (no value)
    #[default]
    Empty,

    /// Numeric value (hosts report every number as f64)
    Number(f64),

    /// Text value
    Text(String),
}

impl CellValue {
    /// Create a new text value
    pub fn text<S: Into<String>>(s: S) -> Self {
        CellValue::Text(s.into())
    }

    /// Check if the cell has no value at all
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Check if the value renders as an empty string.
    ///
    /// This is the emptiness test used by line traversal: an empty text
    /// value counts as blank, whitespace does not.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            CellValue::Number(_) => false,
        }
    }

    /// Try to get the value as a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get the value as a string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Value with whitespace runs collapsed to single spaces and both ends
    /// trimmed. Non-text values are returned unchanged.
    pub fn without_whitespace(&self) -> CellValue {
        match self {
            CellValue::Text(s) => CellValue::Text(collapse_whitespace(s)),
            other => other.clone(),
        }
    }

    /// Get the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Empty => "empty",
            CellValue::Number(_) => "number",
            CellValue::Text(_) => "text",
        }
    }

    /// Hashable identity of the value: numbers compare by value, so `-0.0`
    /// and `0.0` share a key.
    pub(crate) fn key(&self) -> ValueKey {
        match self {
            CellValue::Empty => ValueKey::Empty,
            CellValue::Number(n) if *n == 0.0 => ValueKey::Number(0),
            CellValue::Number(n) => ValueKey::Number(n.to_bits()),
            CellValue::Text(s) => ValueKey::Text(s.clone()),
        }
    }
}

/// Hash key for a [`CellValue`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum ValueKey {
    Empty,
    Number(u64),
    Text(String),
}

pub(crate) fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Renders the value the way a host displays it: empty for no value,
/// integral numbers without a fractional part.
impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<u32> for CellValue {
    fn from(n: u32) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::text(s)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<&CellValue> for CellValue {
    fn from(v: &CellValue) -> Self {
        v.clone()
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(CellValue::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_cell_value_conversions() {
        assert_eq!(CellValue::from(42), CellValue::Number(42.0));
        assert_eq!(CellValue::from(3.5), CellValue::Number(3.5));
        assert_eq!(CellValue::from("hello"), CellValue::text("hello"));
        assert_eq!(CellValue::from(None::<&str>), CellValue::Empty);
        assert_eq!(CellValue::from(Some(7)), CellValue::Number(7.0));
    }

    #[test]
    fn test_display_drops_integral_fraction() {
        assert_eq!(CellValue::Number(12.0).to_string(), "12");
        assert_eq!(CellValue::Number(12.5).to_string(), "12.5");
        assert_eq!(CellValue::Empty.to_string(), "");
        assert_eq!(CellValue::text("x y").to_string(), "x y");
    }

    #[test]
    fn test_blank() {
        assert!(CellValue::Empty.is_blank());
        assert!(CellValue::text("").is_blank());
        assert!(!CellValue::text(" ").is_blank());
        assert!(!CellValue::Number(0.0).is_blank());
    }

    #[test]
    fn test_without_whitespace() {
        assert_eq!(
            CellValue::text("  a \t b\n\nc ").without_whitespace(),
            CellValue::text("a b c")
        );
        assert_eq!(
            CellValue::Number(1.0).without_whitespace(),
            CellValue::Number(1.0)
        );
        assert_eq!(CellValue::text("   ").without_whitespace(), CellValue::text(""));
    }

    #[test]
    fn test_number_and_text_never_equal() {
        assert_ne!(CellValue::Number(1.0), CellValue::text("1"));
    }

    proptest! {
        #[test]
        fn prop_whitespace_normalization_is_idempotent(s in "[ a-c\t\n]{0,24}") {
            let once = CellValue::text(s).without_whitespace();
            prop_assert_eq!(once.without_whitespace(), once.clone());
            let text = once.as_str().unwrap_or_default();
            prop_assert!(!text.starts_with(' ') && !text.ends_with(' '));
            prop_assert!(!text.contains("  "));
        }
    }
}
