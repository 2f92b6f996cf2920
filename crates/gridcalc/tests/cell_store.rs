//! Tests for reading and writing cells through the store

use gridcalc::prelude::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// The reference scenario: literals, derived cells and an unset reference
#[test]
fn test_reference_scenario() {
    let mut store = CellStore::new();

    store.set_cell_value("a1", 13).unwrap();
    assert_eq!(store.get_cell_value("a1").unwrap(), 13);

    store.set_cell_value("A2", 14).unwrap();
    assert_eq!(store.get_cell_value("A2").unwrap(), 14);

    store.set_cell_formula("a3", "=A1+ A2").unwrap();
    assert_eq!(store.get_cell_value("a3").unwrap(), 27);

    store.set_cell_formula("A4", "=A1+ A2 + a3").unwrap();
    assert_eq!(store.get_cell_value("a4").unwrap(), 54);

    store.set_cell_formula("A5", "=(A1+ A2 )* a3").unwrap();
    assert_eq!(store.get_cell_value("A5").unwrap(), 729);

    store.set_cell_formula("A6", "=(A18+ A2 )/ 14").unwrap();
    assert_eq!(store.get_cell_value("A6").unwrap(), 1);
}

/// Formulas are evaluated on read, so they follow later writes
#[test]
fn test_formulas_follow_updates() {
    let mut store = CellStore::new();
    store.set_cell_value("A1", 1).unwrap();
    store.set_cell_formula("B1", "=A1*10").unwrap();
    assert_eq!(store.get_cell_value("B1").unwrap(), 10);

    store.set_cell_value("A1", 5).unwrap();
    assert_eq!(store.get_cell_value("B1").unwrap(), 50);

    store.set_cell_formula("A1", "=2+2").unwrap();
    assert_eq!(store.get_cell_value("B1").unwrap(), 40);
}

#[test]
fn test_same_cell_different_spellings() {
    let mut store = CellStore::new();
    store.set_cell_value("a1", 7).unwrap();

    for spelling in ["a1", "A1", "A0001", "a01"] {
        assert_eq!(store.get_cell_value(spelling).unwrap(), 7, "{spelling}");
    }

    store.set_cell_formula("B1", "=a0001 + A01").unwrap();
    assert_eq!(store.get_cell_value("b1").unwrap(), 14);
}

#[test]
fn test_literal_then_formula() {
    let mut store = CellStore::new();
    store.set_cell_value("C3", 100).unwrap();
    store.set_cell_formula("C3", "=1+1").unwrap();
    assert_eq!(store.get_cell_value("C3").unwrap(), 2);
}

#[test]
fn test_truncating_division() {
    let mut store = CellStore::new();
    store.set_cell_formula("A1", "=7/2").unwrap();
    store.set_cell_formula("A2", "=-7/2").unwrap();
    store.set_cell_value("B1", -7).unwrap();
    store.set_cell_formula("A3", "=B1/2").unwrap();

    assert_eq!(store.get_cell_value("A1").unwrap(), 3);
    assert_eq!(store.get_cell_value("A2").unwrap(), -3);
    assert_eq!(store.get_cell_value("A3").unwrap(), -3);
}

#[test]
fn test_zero_literals_in_formulas() {
    let mut store = CellStore::new();
    store.set_cell_value("A1", 4).unwrap();
    store.set_cell_formula("A2", "=A1 + 000").unwrap();
    store.set_cell_formula("A3", "=A1 * 0010").unwrap();

    assert_eq!(store.get_cell_value("A2").unwrap(), 4);
    assert_eq!(store.get_cell_value("A3").unwrap(), 40);
}

#[test]
fn test_division_by_zero_propagates() {
    let mut store = CellStore::new();
    store.set_cell_formula("A1", "=(1 + (2 / A9))").unwrap();
    store.set_cell_formula("A2", "=A1 + 1").unwrap();
    store.set_cell_formula("A3", "=(A2) * 3").unwrap();

    for id in ["A1", "A2", "A3"] {
        assert_eq!(
            store.get_cell_value(id).unwrap_err(),
            Error::Formula(FormulaError::DivideByZero),
            "{id}"
        );
    }

    // Setting the divisor fixes every dependent
    store.set_cell_value("A9", 2).unwrap();
    assert_eq!(store.get_cell_value("A3").unwrap(), 9);
}

#[test]
fn test_circular_references() {
    let mut store = CellStore::new();
    store.set_cell_formula("A1", "=B1").unwrap();
    store.set_cell_formula("B1", "=A1").unwrap();

    let err = store.get_cell_value("A1").unwrap_err();
    assert_eq!(
        err,
        Error::Formula(FormulaError::CircularReference(CellId::parse("A1").unwrap()))
    );
    assert_eq!(
        err.to_string(),
        "Circular reference detected involving cell A1"
    );

    // Breaking the cycle makes both readable again
    store.set_cell_value("C1", 3).unwrap();
    store.set_cell_formula("B1", "=C1").unwrap();
    assert_eq!(store.get_cell_value("A1").unwrap(), 3);
}

#[test]
fn test_long_reference_chain() {
    let mut store = CellStore::new();
    store.set_cell_value("A1", 1).unwrap();
    for row in 2..=200 {
        store
            .set_cell_formula(&format!("A{row}"), &format!("=A{} + 1", row - 1))
            .unwrap();
    }

    assert_eq!(store.get_cell_value("A200").unwrap(), 200);
}

#[test]
fn test_invalid_ids() {
    let mut store = CellStore::new();
    for id in ["", "A", "12", "A0", "A1A", "A 1", "_A1"] {
        assert!(store.set_cell_value(id, 1).unwrap_err().is_invalid_cell_id(), "{id}");
        assert!(store.get_cell_value(id).unwrap_err().is_invalid_cell_id(), "{id}");
    }
    assert!(store.is_empty());
}

#[test]
fn test_invalid_reference_in_formula() {
    let mut store = CellStore::new();
    store.set_cell_formula("A1", "=B0 + 1").unwrap();

    assert_eq!(
        store.get_cell_value("A1").unwrap_err(),
        Error::Formula(FormulaError::InvalidReference("B0".into()))
    );
}

proptest! {
    #[test]
    fn prop_literal_round_trip(
        column in "[A-Za-z]{1,3}",
        row in 1u32..100_000,
        value in any::<i64>(),
    ) {
        let id = format!("{column}{row}");
        let mut store = CellStore::new();
        store.set_cell_value(&id, value).unwrap();
        prop_assert_eq!(store.get_cell_value(&id).unwrap(), value);
        prop_assert_eq!(store.get_cell_value(&id.to_uppercase()).unwrap(), value);
        prop_assert_eq!(store.get_cell_value(&format!("{column}00{row}")).unwrap(), value);
    }

    #[test]
    fn prop_never_set_reads_zero(column in "[A-Z]{1,3}", row in 1u32..100_000) {
        let store = CellStore::new();
        prop_assert_eq!(store.get_cell_value(&format!("{column}{row}")).unwrap(), 0);
    }

    #[test]
    fn prop_division_truncates_toward_zero(a in -10_000i64..10_000, b in 1i64..100) {
        let mut store = CellStore::new();
        store.set_cell_value("A1", a).unwrap();
        store.set_cell_value("B1", b).unwrap();
        store.set_cell_formula("C1", "=A1/B1").unwrap();

        let expected = (a.abs() / b) * a.signum();
        prop_assert_eq!(store.get_cell_value("C1").unwrap(), expected);
    }
}
