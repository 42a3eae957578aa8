//! Snapshot Contract Tests
//!
//! Listings are owned clones taken at call time:
//! - Later membership changes do not reach an earlier listing
//! - Later field updates do not reach an earlier listing either
//! - Changing a listing's elements does not reach the store

use rosterdb::seed::seed_store;
use rosterdb::{Employee, EmployeeStore, FilterPreset, OrderingPolicy, SharedStore, ViewQuery};

fn seeded() -> EmployeeStore<u64> {
    let mut store = EmployeeStore::new();
    seed_store(&mut store);
    store
}

// =============================================================================
// Membership Independence
// =============================================================================

/// A captured listing keeps its length after an add.
#[test]
fn test_listing_unaffected_by_add() {
    let mut store = seeded();
    let captured = store.list_all();

    assert!(store.add(Employee::new(11, "New Hire", "Ops", 40000.0, 3.0, 0, true)));
    assert_eq!(captured.len(), 10);
    assert_eq!(store.count(), 11);
}

/// A captured listing keeps removed records.
#[test]
fn test_listing_unaffected_by_remove_and_clear() {
    let mut store = seeded();
    let sorted = store.sorted_by_salary();
    let it = store.list_by_department("IT");

    store.remove(&7);
    store.clear();

    assert_eq!(sorted.len(), 10);
    assert_eq!(*sorted[0].id(), 7);
    assert_eq!(it.len(), 3);
}

// =============================================================================
// Field Independence
// =============================================================================

/// Listings are copies: updates after capture are not visible through them.
#[test]
fn test_listing_unaffected_by_update() {
    let mut store = seeded();
    let captured = store.list_all();

    assert!(store.update(&1, "salary", 99999.0));
    assert!(store.update(&1, "name", "Renamed"));

    let stale = captured.iter().find(|e| *e.id() == 1).unwrap();
    assert_eq!(stale.salary(), 75000.0);
    assert_eq!(stale.name(), "Emmanuel Arhu");
    assert_eq!(store.get(&1).unwrap().salary(), 99999.0);
}

/// Raises after capture are not visible through a listing.
#[test]
fn test_listing_unaffected_by_raise() {
    let mut store = seeded();
    let top = store.top_n_by_salary(1);

    store.give_raise(0.0, 50.0);
    assert_eq!(top[0].salary(), 85000.0);
}

/// Dropping or reordering a listing leaves the store alone.
#[test]
fn test_listing_changes_do_not_reach_store() {
    let store = seeded();
    let mut captured = store.list_all();
    captured.reverse();
    captured.truncate(2);

    assert_eq!(store.count(), 10);
    assert_eq!(*store.list_all()[0].id(), 1);
}

// =============================================================================
// Views and Shared Handles
// =============================================================================

/// Views compose filter, search, sort and limit over a snapshot.
#[test]
fn test_view_pipeline() {
    let store = seeded();
    let query = ViewQuery::new()
        .with_filter(FilterPreset::ActiveOnly)
        .with_search("a")
        .with_sort(OrderingPolicy::Performance)
        .with_limit(3);

    let names: Vec<String> = store.view(&query).iter().map(|e| e.name().to_string()).collect();
    assert_eq!(names, vec!["Sarah Johnson", "Robert Martinez", "Emmanuel Arhu"]);
}

/// The mutex handle serves the same contract across clones.
#[test]
fn test_shared_store_snapshot() {
    let shared = SharedStore::new(seeded());
    let other = shared.clone();

    let captured = shared.with(|s| s.list_all()).unwrap();
    assert_eq!(other.with_mut(|s| s.remove(&1)), Ok(true));

    assert_eq!(captured.len(), 10);
    assert_eq!(shared.with(|s| s.count()), Ok(9));
}
