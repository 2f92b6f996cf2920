//! Cell identifiers

use crate::error::{Error, Result};
use lazy_regex::{regex_captures, regex_is_match};
use std::fmt;
use std::str::FromStr;

/// A cell identifier (e.g., "A1", "AB12")
///
/// An id is one or more ASCII letters followed by a row number of at least 1.
/// Parsing is case-insensitive and ignores leading zeros in the row number, so
/// `a1`, `A1` and `A0001` all produce the same id. The normalized form
/// (uppercase letters, no leading zeros) is what [`Display`](fmt::Display)
/// renders and what the cell store keys on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellId {
    /// Column letters, uppercase
    column: String,
    /// Row number (1-based)
    row: u32,
}

impl CellId {
    /// Create a cell id from column letters and a 1-based row number
    pub fn new(column: &str, row: u32) -> Result<Self> {
        if row == 0 || !regex_is_match!(r"^[A-Za-z]+$", column) {
            return Err(Error::InvalidCellId(format!("{column}{row}")));
        }

        Ok(Self {
            column: column.to_ascii_uppercase(),
            row,
        })
    }

    /// Parse a cell id
    ///
    /// # Examples
    /// ```
    /// use gridcalc_core::CellId;
    ///
    /// let id = CellId::parse("b007").unwrap();
    /// assert_eq!(id.column(), "B");
    /// assert_eq!(id.row(), 7);
    ///
    /// assert!(CellId::parse("A0").is_err());
    /// assert!(CellId::parse("7B").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        // `0*` is greedy, so the captured row keeps at least one digit: "A0" captures "0"
        let (_, column, row) = regex_captures!(r"^([A-Za-z]+)0*([0-9]+)$", s)
            .ok_or_else(|| Error::InvalidCellId(s.to_string()))?;

        let row: u32 = row
            .parse()
            .map_err(|_| Error::InvalidCellId(s.to_string()))?;

        if row == 0 {
            return Err(Error::InvalidCellId(s.to_string()));
        }

        Ok(Self {
            column: column.to_ascii_uppercase(),
            row,
        })
    }

    /// Check whether `s` is a well-formed cell id
    pub fn is_valid(s: &str) -> bool {
        Self::parse(s).is_ok()
    }

    /// Column letters (uppercase)
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Row number (1-based)
    pub fn row(&self) -> u32 {
        self.row
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column, self.row)
    }
}

impl FromStr for CellId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for CellId {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CellId {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CellId {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
