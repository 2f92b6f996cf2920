//! Cell input types

use crate::error::{Error, Result};
use std::fmt;

/// Formula text stored in a cell
///
/// Holds the expression body: the leading `=` is removed and surrounding
/// whitespace trimmed. Whitespace inside the expression is kept as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Formula(String);

impl Formula {
    /// Parse formula text, which must start with `=`
    ///
    /// # Examples
    /// ```
    /// use gridcalc_core::Formula;
    ///
    /// let formula = Formula::parse("=(A1+ A2 )* a3 ").unwrap();
    /// assert_eq!(formula.as_str(), "(A1+ A2 )* a3");
    /// assert!(Formula::parse("A1+A2").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let body = text.strip_prefix('=').ok_or_else(|| {
            Error::InvalidInput(format!("formula must start with '=': '{text}'"))
        })?;

        Ok(Self(body.trim().to_string()))
    }

    /// The expression body, without the leading `=`
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "={}", self.0)
    }
}

/// A value written into a cell
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellInput {
    /// Integer literal
    Literal(i64),
    /// Formula, evaluated every time the cell is read
    Formula(Formula),
}

impl CellInput {
    /// Parse text input; only formulas (`=...`) are accepted as text
    pub fn parse(text: &str) -> Result<Self> {
        Formula::parse(text).map(CellInput::Formula)
    }

    /// Check if this is a formula
    pub fn is_formula(&self) -> bool {
        matches!(self, CellInput::Formula(_))
    }

    /// Get the literal value, if this is one
    pub fn as_literal(&self) -> Option<i64> {
        match self {
            CellInput::Literal(n) => Some(*n),
            CellInput::Formula(_) => None,
        }
    }

    /// Get the formula body, if this is a formula
    pub fn formula_text(&self) -> Option<&str> {
        match self {
            CellInput::Literal(_) => None,
            CellInput::Formula(formula) => Some(formula.as_str()),
        }
    }

    /// Get the input kind name (for error messages)
    pub fn type_name(&self) -> &'static str {
        match self {
            CellInput::Literal(_) => "literal",
            CellInput::Formula(_) => "formula",
        }
    }
}

impl fmt::Display for CellInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellInput::Literal(n) => write!(f, "{n}"),
            CellInput::Formula(formula) => write!(f, "{formula}"),
        }
    }
}

impl From<i64> for CellInput {
    fn from(n: i64) -> Self {
        CellInput::Literal(n)
    }
}

impl From<i32> for CellInput {
    fn from(n: i32) -> Self {
        CellInput::Literal(n as i64)
    }
}

impl From<Formula> for CellInput {
    fn from(formula: Formula) -> Self {
        CellInput::Formula(formula)
    }
}

impl TryFrom<&str> for CellInput {
    type Error = Error;

    fn try_from(text: &str) -> Result<Self> {
        Self::parse(text)
    }
}

impl TryFrom<String> for CellInput {
    type Error = Error;

    fn try_from(text: String) -> Result<Self> {
        Self::parse(&text)
    }
}
