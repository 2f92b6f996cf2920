//! # gridcalc-core
//!
//! Core data types for the gridcalc cell store.
//!
//! This crate provides:
//! - [`CellId`] - A validated, normalized cell identifier (e.g., "A1")
//! - [`CellInput`] - What can be written into a cell: an integer literal or a formula
//! - [`Formula`] - Formula text with its leading `=` removed
//!
//! ## Example
//!
//! ```rust
//! use gridcalc_core::{CellId, CellInput};
//!
//! // Ids are case-insensitive and ignore leading zeros in the row
//! let id: CellId = "a0001".parse().unwrap();
//! assert_eq!(id.to_string(), "A1");
//!
//! let input = CellInput::parse("= A1 + A2 ").unwrap();
//! assert_eq!(input.formula_text(), Some("A1 + A2"));
//! ```

pub mod cell;
pub mod error;

pub use cell::{CellId, CellInput, Formula};
pub use error::{Error, Result};
