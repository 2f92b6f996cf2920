//! Formula evaluator
//!
//! Evaluates formula ASTs to integers. Cell references are resolved through
//! a [`CellResolver`], which may in turn evaluate the referenced cell's own
//! formula with the same [`EvaluationContext`].

use crate::ast::FormulaExpr;
use crate::error::{FormulaError, FormulaResult};
use crate::parser::parse_formula;
use gridcalc_core::CellId;
use std::cell::RefCell;
use tracing::trace;

/// Source of cell values for formula evaluation
pub trait CellResolver {
    /// Value of the cell `id`
    ///
    /// Implementations that store formulas evaluate them with `ctx`, so that
    /// nested references share cycle detection and the depth limit.
    fn resolve(&self, id: &CellId, ctx: &EvaluationContext<'_>) -> FormulaResult<i64>;
}

/// Context for formula evaluation
pub struct EvaluationContext<'a> {
    /// Cell lookups; `None` reads every cell as 0
    resolver: Option<&'a dyn CellResolver>,
    /// Maximum number of cells being evaluated at once
    max_depth: usize,
    /// Cells currently being evaluated, outermost first
    stack: RefCell<Vec<CellId>>,
}

impl<'a> EvaluationContext<'a> {
    /// Default limit on the length of a cell reference chain
    pub const DEFAULT_MAX_DEPTH: usize = 512;

    /// Create a new evaluation context
    pub fn new(resolver: &'a dyn CellResolver) -> Self {
        Self {
            resolver: Some(resolver),
            max_depth: Self::DEFAULT_MAX_DEPTH,
            stack: RefCell::new(Vec::new()),
        }
    }

    /// Create a simple context without cells (for testing)
    pub fn simple() -> Self {
        Self {
            resolver: None,
            max_depth: Self::DEFAULT_MAX_DEPTH,
            stack: RefCell::new(Vec::new()),
        }
    }

    /// Set the maximum reference chain depth
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Number of cells currently being evaluated
    pub fn depth(&self) -> usize {
        self.stack.borrow().len()
    }

    /// Get a cell value, detecting reference cycles
    pub fn get_cell_value(&self, id: &CellId) -> FormulaResult<i64> {
        let resolver = match self.resolver {
            Some(resolver) => resolver,
            None => return Ok(0),
        };

        {
            let stack = self.stack.borrow();
            if stack.contains(id) {
                return Err(FormulaError::CircularReference(id.clone()));
            }
            if stack.len() >= self.max_depth {
                return Err(FormulaError::DepthExceeded(self.max_depth));
            }
        }

        trace!(cell = %id, depth = self.depth(), "resolving cell");
        self.stack.borrow_mut().push(id.clone());
        let result = resolver.resolve(id, self);
        self.stack.borrow_mut().pop();

        result
    }
}

/// Evaluate a formula expression
pub fn evaluate(expr: &FormulaExpr, ctx: &EvaluationContext) -> FormulaResult<i64> {
    match expr {
        FormulaExpr::Number(n) => Ok(*n),

        FormulaExpr::CellRef(id) => ctx.get_cell_value(id),

        FormulaExpr::BinaryOp { op, left, right } => {
            // Left to right, so the first fault in source order is reported
            let left = evaluate(left, ctx)?;
            let right = evaluate(right, ctx)?;
            op.apply(left, right)
        }

        FormulaExpr::UnaryOp { op, operand } => op.apply(evaluate(operand, ctx)?),
    }
}

/// Parse and evaluate a formula body
pub fn evaluate_formula(formula: &str, ctx: &EvaluationContext) -> FormulaResult<i64> {
    let ast = parse_formula(formula)?;
    evaluate(&ast, ctx)
}
