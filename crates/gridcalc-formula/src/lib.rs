//! # gridcalc-formula
//!
//! Formula parser and evaluator for gridcalc.
//!
//! This crate provides:
//! - Formula parsing (text → AST)
//! - Formula evaluation (AST → integer), with cell references resolved
//!   through a [`CellResolver`]
//!
//! Formulas are integer arithmetic over `+ - * /` with parentheses, number
//! literals and cell references. Division truncates toward zero.
//!
//! ## Example
//!
//! ```rust
//! use gridcalc_formula::{evaluate, parse_formula, EvaluationContext};
//!
//! let ast = parse_formula("(1 + 2) * 007 - 10 / 4").unwrap();
//! let result = evaluate(&ast, &EvaluationContext::simple()).unwrap();
//! assert_eq!(result, 19);
//! ```

pub mod ast;
pub mod error;
pub mod evaluator;
pub mod parser;

pub use ast::{BinaryOperator, FormulaExpr, UnaryOperator};
pub use error::{FormulaError, FormulaResult};
pub use evaluator::{evaluate, evaluate_formula, CellResolver, EvaluationContext};
pub use parser::parse_formula;
