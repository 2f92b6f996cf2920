//! Error types for the cell store

use gridcalc_formula::FormulaError;
use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the cell store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Invalid cell id or cell input
    #[error(transparent)]
    Core(#[from] gridcalc_core::Error),

    /// Formula failed to parse or evaluate
    #[error(transparent)]
    Formula(#[from] FormulaError),
}

impl Error {
    /// Check if this error was caused by a malformed cell id
    pub fn is_invalid_cell_id(&self) -> bool {
        matches!(self, Error::Core(gridcalc_core::Error::InvalidCellId(_)))
    }
}
