//! Error types for gridcalc-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gridcalc-core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Cell id does not match the `letters + row number` grammar
    #[error("Invalid cell id: '{0}'")]
    InvalidCellId(String),

    /// Value cannot be stored in a cell
    #[error("Invalid cell input: {0}")]
    InvalidInput(String),
}
