//! Cell-related types
//!
//! This module contains:
//! - [`CellId`] - A cell's identifier (e.g., "A1")
//! - [`CellInput`] - The value written into a cell
//! - [`Formula`] - Formula text stored in a cell

mod id;
mod input;

pub use id::CellId;
pub use input::{CellInput, Formula};
