//! Formula error types

use gridcalc_core::CellId;
use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors that can occur during formula parsing or evaluation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormulaError {
    /// Formula parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Divisor evaluated to zero
    #[error("Division by zero")]
    DivideByZero,

    /// Result does not fit in a 64-bit integer
    #[error("Integer overflow")]
    Overflow,

    /// Operand that is neither a number nor a cell id
    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    /// Cell reaches itself through its own references
    #[error("Circular reference detected involving cell {0}")]
    CircularReference(CellId),

    /// Chain of cell references is deeper than the configured limit
    #[error("Cell reference chain exceeds maximum depth of {0}")]
    DepthExceeded(usize),
}
