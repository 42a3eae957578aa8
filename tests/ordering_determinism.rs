//! Ordering Determinism Tests
//!
//! Sorted listings must be reproducible:
//! - Each policy orders by its own key and direction
//! - Ties keep insertion order (stable sort)
//! - Sorting never changes stored order
//! - Top-N honours its boundaries

use rosterdb::seed::seed_store;
use rosterdb::{Employee, EmployeeStore, OrderingPolicy};

// =============================================================================
// Helper Functions
// =============================================================================

fn seeded() -> EmployeeStore<u64> {
    let mut store = EmployeeStore::new();
    seed_store(&mut store);
    store
}

fn ids(records: &[Employee<u64>]) -> Vec<u64> {
    records.iter().map(|e| *e.id()).collect()
}

fn tied_salaries() -> EmployeeStore<u64> {
    let mut store = EmployeeStore::new();
    store.add(Employee::new(30, "Zed", "Ops", 50000.0, 3.0, 1, true));
    store.add(Employee::new(10, "Amy", "Ops", 70000.0, 3.0, 1, true));
    store.add(Employee::new(20, "Max", "Ops", 50000.0, 3.0, 1, true));
    store.add(Employee::new(5, "Bea", "Ops", 50000.0, 3.0, 1, true));
    store
}

// =============================================================================
// Policy Order
// =============================================================================

#[test]
fn test_sorted_by_salary() {
    let store = seeded();
    assert_eq!(ids(&store.sorted_by_salary()), vec![7, 3, 10, 4, 1, 8, 2, 9, 5, 6]);
}

#[test]
fn test_sorted_by_performance() {
    let store = seeded();
    assert_eq!(ids(&store.sorted_by_performance()), vec![2, 7, 1, 10, 4, 8, 5, 3, 6, 9]);
}

#[test]
fn test_sorted_by_name() {
    let store = seeded();
    let names: Vec<String> = store
        .sorted_by_name()
        .iter()
        .map(|e| e.name().to_string())
        .collect();
    assert_eq!(names[0], "David Wilson");
    assert_eq!(names[9], "Sarah Johnson");
}

/// Experience descending; ties (4, 4), (5, 5), (2, 2) keep insertion order.
#[test]
fn test_sorted_by_experience() {
    let store = seeded();
    assert_eq!(ids(&store.sorted_by_experience()), vec![7, 2, 4, 1, 10, 3, 8, 5, 6, 9]);
}

/// Department ascending; members of a department keep insertion order.
#[test]
fn test_sorted_by_department() {
    let store = seeded();
    assert_eq!(ids(&store.sorted_by_department()), vec![3, 7, 10, 2, 6, 1, 4, 8, 5, 9]);
}

/// The named sort methods agree with their policies.
#[test]
fn test_methods_match_policies() {
    let store = seeded();
    assert_eq!(store.sorted_by(OrderingPolicy::Salary), store.sorted_by_salary());
    assert_eq!(ids(&store.sorted_by(OrderingPolicy::Name)), ids(&store.sorted_by_name()));
    assert_eq!(
        ids(&store.sorted_by(OrderingPolicy::NATURAL)),
        ids(&store.sorted_by_experience())
    );
}

// =============================================================================
// Stability
// =============================================================================

/// Equal salaries keep their relative insertion order.
#[test]
fn test_salary_sort_stable() {
    let store = tied_salaries();
    assert_eq!(ids(&store.sorted_by_salary()), vec![10, 30, 20, 5]);
}

/// Same input, same output, every time.
#[test]
fn test_sort_repeatable() {
    let store = tied_salaries();
    let first = ids(&store.sorted_by_salary());
    for _ in 0..50 {
        assert_eq!(ids(&store.sorted_by_salary()), first);
    }
}

/// Sorting works on a snapshot; the store keeps insertion order.
#[test]
fn test_sort_does_not_mutate_store_order() {
    let store = tied_salaries();
    let _ = store.sorted_by_name();
    let _ = store.sorted_by_salary();
    assert_eq!(ids(&store.list_all()), vec![30, 10, 20, 5]);
}

// =============================================================================
// Top-N
// =============================================================================

#[test]
fn test_top_n_zero_is_empty() {
    let store = seeded();
    assert!(store.top_n_by_salary(0).is_empty());
}

#[test]
fn test_top_n_larger_than_store_returns_all_sorted() {
    let store = seeded();
    let top = store.top_n_by_salary(1000);
    assert_eq!(top.len(), 10);
    assert_eq!(ids(&top), ids(&store.sorted_by_salary()));
}

#[test]
fn test_top_n_prefix() {
    let store = seeded();
    assert_eq!(ids(&store.top_n_by_salary(3)), vec![7, 3, 10]);
}
