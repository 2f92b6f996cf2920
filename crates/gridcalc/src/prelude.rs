//! Prelude module - common imports for gridcalc users
//!
//! ```rust
//! use gridcalc::prelude::*;
//! ```

pub use crate::{
    // Cell types
    CellId,
    CellInput,
    // Store types
    CellStore,
    // Error types
    Error,
    Formula,
    FormulaError,
    Result,
    SharedCellStore,
    StoreSettings,
};
