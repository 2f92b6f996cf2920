//! Cell storage
//!
//! [`CellStore`] keeps literals and formulas in two independent maps keyed by
//! normalized [`CellId`]. Writing one kind of value never clears the other;
//! when both exist for an id, the formula wins on read.

use crate::error::Result;
use ahash::AHashMap;
use gridcalc_core::{CellId, CellInput, Formula};
use gridcalc_formula::{evaluate, parse_formula, CellResolver, EvaluationContext, FormulaResult};
use tracing::{debug, trace};

/// Settings for a [`CellStore`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSettings {
    /// Maximum length of a cell reference chain during evaluation
    pub max_depth: usize,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            max_depth: EvaluationContext::DEFAULT_MAX_DEPTH,
        }
    }
}

/// In-memory cell store
#[derive(Debug, Clone, Default)]
pub struct CellStore {
    /// Integer literals
    literals: AHashMap<CellId, i64>,
    /// Formulas, evaluated on every read
    formulas: AHashMap<CellId, Formula>,
    settings: StoreSettings,
}

impl CellStore {
    /// Create an empty store with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with the given settings
    pub fn with_settings(settings: StoreSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Store settings
    pub fn settings(&self) -> &StoreSettings {
        &self.settings
    }

    /// Set a cell value by id string
    ///
    /// Integers are stored as literals; use [`CellInput::Formula`] or
    /// [`set_cell_formula`](Self::set_cell_formula) for formulas.
    pub fn set_cell_value<V: Into<CellInput>>(&mut self, id: &str, value: V) -> Result<()> {
        let id = CellId::parse(id)?;
        self.set_input(id, value.into());
        Ok(())
    }

    /// Set a cell formula by id string; `formula` must start with `=`
    pub fn set_cell_formula(&mut self, id: &str, formula: &str) -> Result<()> {
        let id = CellId::parse(id)?;
        let formula = Formula::parse(formula)?;
        self.set_input(id, CellInput::Formula(formula));
        Ok(())
    }

    /// Set a cell value by parsed id
    pub fn set_input(&mut self, id: CellId, input: CellInput) {
        debug!(cell = %id, input = %input, "set cell");
        match input {
            CellInput::Literal(n) => {
                self.literals.insert(id, n);
            }
            CellInput::Formula(formula) => {
                self.formulas.insert(id, formula);
            }
        }
    }

    /// Get a cell value by id string
    ///
    /// Returns the evaluated formula if the cell has one, otherwise the
    /// stored literal, otherwise 0.
    pub fn get_cell_value(&self, id: &str) -> Result<i64> {
        let id = CellId::parse(id)?;
        self.value(&id)
    }

    /// Get a cell value by parsed id
    pub fn value(&self, id: &CellId) -> Result<i64> {
        let ctx = EvaluationContext::new(self).with_max_depth(self.settings.max_depth);
        Ok(ctx.get_cell_value(id)?)
    }

    /// Get the input that determines a cell's value, if any
    ///
    /// This is the formula when one is stored, otherwise the literal.
    pub fn cell_input(&self, id: &str) -> Result<Option<CellInput>> {
        let id = CellId::parse(id)?;
        Ok(self.input(&id))
    }

    fn input(&self, id: &CellId) -> Option<CellInput> {
        if let Some(formula) = self.formulas.get(id) {
            return Some(CellInput::Formula(formula.clone()));
        }
        self.literals.get(id).map(|n| CellInput::Literal(*n))
    }

    /// Cells referenced directly by a cell's formula, in source order
    ///
    /// Empty if the cell holds a literal or nothing.
    pub fn precedents(&self, id: &str) -> Result<Vec<CellId>> {
        let id = CellId::parse(id)?;
        let Some(formula) = self.formulas.get(&id) else {
            return Ok(Vec::new());
        };

        let ast = parse_formula(formula.as_str())?;
        Ok(ast.references().into_iter().cloned().collect())
    }

    /// Number of cells holding a literal, a formula, or both
    pub fn len(&self) -> usize {
        self.literals.len()
            + self
                .formulas
                .keys()
                .filter(|id| !self.literals.contains_key(*id))
                .count()
    }

    /// Check if no cell has been set
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty() && self.formulas.is_empty()
    }

    /// Remove every cell
    pub fn clear(&mut self) {
        self.literals.clear();
        self.formulas.clear();
    }
}

impl CellResolver for CellStore {
    fn resolve(&self, id: &CellId, ctx: &EvaluationContext<'_>) -> FormulaResult<i64> {
        match self.formulas.get(id) {
            Some(formula) => {
                trace!(cell = %id, %formula, "evaluating formula");
                let ast = parse_formula(formula.as_str())?;
                evaluate(&ast, ctx)
            }
            None => Ok(self.literals.get(id).copied().unwrap_or(0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use gridcalc_formula::FormulaError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_literal_round_trip() {
        let mut store = CellStore::new();
        store.set_cell_value("A1", 13).unwrap();
        store.set_cell_value("B2", -42i64).unwrap();

        assert_eq!(store.get_cell_value("A1").unwrap(), 13);
        assert_eq!(store.get_cell_value("B2").unwrap(), -42);
    }

    #[test]
    fn test_unset_cell_reads_zero() {
        let store = CellStore::new();
        assert_eq!(store.get_cell_value("A1").unwrap(), 0);
        assert_eq!(store.get_cell_value("ZZ999").unwrap(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_overwrite_literal() {
        let mut store = CellStore::new();
        store.set_cell_value("A1", 1).unwrap();
        store.set_cell_value("a001", 2).unwrap();
        assert_eq!(store.get_cell_value("A1").unwrap(), 2);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_formula_shadows_literal() {
        let mut store = CellStore::new();
        store.set_cell_value("A1", 5).unwrap();
        store.set_cell_formula("A1", "=2*3").unwrap();
        assert_eq!(store.get_cell_value("A1").unwrap(), 6);

        // Writing a literal afterwards leaves the formula in place
        store.set_cell_value("A1", 7).unwrap();
        assert_eq!(store.get_cell_value("A1").unwrap(), 6);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_cell_input() {
        let mut store = CellStore::new();
        assert_eq!(store.cell_input("A1").unwrap(), None);

        store.set_cell_value("A1", 5).unwrap();
        assert_eq!(store.cell_input("a1").unwrap(), Some(CellInput::Literal(5)));

        store.set_cell_formula("A1", "= B1 + 1 ").unwrap();
        let input = store.cell_input("A1").unwrap().unwrap();
        assert_eq!(input.formula_text(), Some("B1 + 1"));
    }

    #[test]
    fn test_invalid_cell_id() {
        let mut store = CellStore::new();

        let err = store.set_cell_value("1A", 1).unwrap_err();
        assert!(err.is_invalid_cell_id());

        let err = store.set_cell_formula("A0", "=1").unwrap_err();
        assert!(err.is_invalid_cell_id());

        let err = store.get_cell_value("A").unwrap_err();
        assert!(err.is_invalid_cell_id());
        assert!(store.is_empty());
    }

    #[test]
    fn test_formula_without_equals_rejected() {
        let mut store = CellStore::new();
        let err = store.set_cell_formula("A1", "1+2").unwrap_err();
        assert!(matches!(
            err,
            Error::Core(gridcalc_core::Error::InvalidInput(_))
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_evaluation_errors() {
        let mut store = CellStore::new();
        store.set_cell_formula("A1", "=10/(B1-B1)").unwrap();
        store.set_cell_formula("A2", "=1 +").unwrap();

        assert_eq!(
            store.get_cell_value("A1").unwrap_err(),
            Error::Formula(FormulaError::DivideByZero)
        );
        assert!(matches!(
            store.get_cell_value("A2").unwrap_err(),
            Error::Formula(FormulaError::Parse(_))
        ));
    }

    #[test]
    fn test_depth_setting() {
        let mut store = CellStore::with_settings(StoreSettings { max_depth: 3 });
        store.set_cell_formula("A1", "=A2").unwrap();
        store.set_cell_formula("A2", "=A3").unwrap();
        store.set_cell_formula("A3", "=A4").unwrap();
        store.set_cell_value("A4", 1).unwrap();

        assert_eq!(store.settings().max_depth, 3);
        assert_eq!(store.get_cell_value("A2").unwrap(), 1);
        assert_eq!(
            store.get_cell_value("A1").unwrap_err(),
            Error::Formula(FormulaError::DepthExceeded(3))
        );
    }

    #[test]
    fn test_precedents() {
        let mut store = CellStore::new();
        store.set_cell_value("A1", 1).unwrap();
        store.set_cell_formula("B1", "=a1 * (C2 + A1)").unwrap();

        let expected: Vec<CellId> = ["A1", "C2", "A1"]
            .iter()
            .map(|id| CellId::parse(id).unwrap())
            .collect();
        assert_eq!(store.precedents("B1").unwrap(), expected);
        assert!(store.precedents("A1").unwrap().is_empty());
        assert!(store.precedents("Z9").unwrap().is_empty());
    }

    #[test]
    fn test_clear() {
        let mut store = CellStore::new();
        store.set_cell_value("A1", 1).unwrap();
        store.set_cell_formula("B1", "=A1").unwrap();
        assert_eq!(store.len(), 2);

        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.get_cell_value("B1").unwrap(), 0);
    }
}
