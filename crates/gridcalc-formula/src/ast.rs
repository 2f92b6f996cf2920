//! Formula Abstract Syntax Tree types

use crate::error::{FormulaError, FormulaResult};
use gridcalc_core::CellId;
use std::fmt;

/// Formula expression AST
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormulaExpr {
    /// Integer literal
    Number(i64),
    /// Reference to another cell
    CellRef(CellId),
    /// Binary operation
    BinaryOp {
        op: BinaryOperator,
        left: Box<FormulaExpr>,
        right: Box<FormulaExpr>,
    },
    /// Unary operation
    UnaryOp {
        op: UnaryOperator,
        operand: Box<FormulaExpr>,
    },
}

impl FormulaExpr {
    /// Cells referenced anywhere in this expression, in source order
    pub fn references(&self) -> Vec<&CellId> {
        let mut refs = Vec::new();
        self.collect_references(&mut refs);
        refs
    }

    fn collect_references<'a>(&'a self, refs: &mut Vec<&'a CellId>) {
        match self {
            FormulaExpr::Number(_) => {}
            FormulaExpr::CellRef(id) => refs.push(id),
            FormulaExpr::BinaryOp { left, right, .. } => {
                left.collect_references(refs);
                right.collect_references(refs);
            }
            FormulaExpr::UnaryOp { operand, .. } => operand.collect_references(refs),
        }
    }
}

impl fmt::Display for FormulaExpr {
    /// Renders with every binary operation parenthesized
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormulaExpr::Number(n) => write!(f, "{n}"),
            FormulaExpr::CellRef(id) => write!(f, "{id}"),
            FormulaExpr::BinaryOp { op, left, right } => write!(f, "({left}{op}{right})"),
            FormulaExpr::UnaryOp { op, operand } => write!(f, "{op}{operand}"),
        }
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    /// Operator symbol as written in formulas
    pub fn symbol(self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Subtract => '-',
            BinaryOperator::Multiply => '*',
            BinaryOperator::Divide => '/',
        }
    }

    /// Apply the operator with checked 64-bit arithmetic
    ///
    /// Division truncates toward zero: `-7 / 2 == -3`.
    pub fn apply(self, left: i64, right: i64) -> FormulaResult<i64> {
        let result = match self {
            BinaryOperator::Add => left.checked_add(right),
            BinaryOperator::Subtract => left.checked_sub(right),
            BinaryOperator::Multiply => left.checked_mul(right),
            BinaryOperator::Divide => {
                if right == 0 {
                    return Err(FormulaError::DivideByZero);
                }
                left.checked_div(right)
            }
        };

        result.ok_or(FormulaError::Overflow)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Negate,
}

impl UnaryOperator {
    /// Apply the operator with checked 64-bit arithmetic
    pub fn apply(self, operand: i64) -> FormulaResult<i64> {
        match self {
            UnaryOperator::Negate => operand.checked_neg().ok_or(FormulaError::Overflow),
        }
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOperator::Negate => write!(f, "-"),
        }
    }
}
