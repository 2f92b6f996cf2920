//! # gridcalc
//!
//! An in-memory spreadsheet cell store with integer values and arithmetic
//! formulas.
//!
//! ## Features
//!
//! - Cell ids are case-insensitive and ignore leading zeros (`a1` = `A0001`)
//! - Cells hold integer literals or formulas over `+ - * /` and parentheses
//! - Formulas are evaluated on every read; unset cells read as 0
//! - Division truncates toward zero; division by zero is an error
//! - Circular references are reported instead of overflowing the stack
//!
//! ## Example
//!
//! ```rust
//! use gridcalc::prelude::*;
//!
//! let mut store = CellStore::new();
//!
//! store.set_cell_value("a1", 13).unwrap();
//! store.set_cell_value("A2", 14).unwrap();
//! store.set_cell_formula("A3", "=A1+ A2").unwrap();
//! store.set_cell_formula("A5", "=(A1+ A2 )* a3").unwrap();
//!
//! assert_eq!(store.get_cell_value("A3").unwrap(), 27);
//! assert_eq!(store.get_cell_value("A5").unwrap(), 729);
//! assert_eq!(store.get_cell_value("A18").unwrap(), 0);
//! ```

pub mod error;
pub mod prelude;
pub mod shared;
pub mod store;

pub use error::{Error, Result};
pub use shared::SharedCellStore;
pub use store::{CellStore, StoreSettings};

// Re-export core types
pub use gridcalc_core::{CellId, CellInput, Formula};

// Re-export formula types
pub use gridcalc_formula::{
    evaluate, evaluate_formula, parse_formula, BinaryOperator, CellResolver, EvaluationContext,
    FormulaError, FormulaExpr, FormulaResult, UnaryOperator,
};
