//! Sample data initializer
//!
//! Inserts the ten sample employees (ids 1 to 10) through the store's own
//! `add`, the same way any external caller would.

use crate::observability::{log_event_with_fields, Event};
use crate::record::Employee;
use crate::store::EmployeeStore;

/// The sample employees, ids 1 to 10
pub fn sample_employees() -> Vec<Employee<u64>> {
    vec![
        Employee::new(1, "Emmanuel Arhu", "IT", 75000.0, 4.5, 5, true),
        Employee::new(2, "Sarah Johnson", "HR", 65000.0, 4.7, 7, true),
        Employee::new(3, "Michael Brown", "Finance", 82000.0, 3.9, 4, true),
        Employee::new(4, "Emily Davis", "IT", 78000.0, 4.2, 6, true),
        Employee::new(5, "David Wilson", "Marketing", 61000.0, 4.0, 3, true),
        Employee::new(6, "Jennifer Taylor", "HR", 59000.0, 3.8, 2, false),
        Employee::new(7, "Robert Martinez", "Finance", 85000.0, 4.6, 8, true),
        Employee::new(8, "Lisa Anderson", "IT", 72000.0, 4.1, 4, true),
        Employee::new(9, "James Thomas", "Marketing", 63000.0, 3.5, 2, false),
        Employee::new(10, "Patricia Robinson", "Finance", 79000.0, 4.3, 5, true),
    ]
}

/// Adds the sample employees to a store. Returns how many were inserted;
/// ids already present are skipped.
pub fn seed_store(store: &mut EmployeeStore<u64>) -> usize {
    let inserted = sample_employees()
        .into_iter()
        .map(|e| store.add(e))
        .filter(|added| *added)
        .count();
    log_event_with_fields(Event::StoreSeeded, &[("inserted", &inserted.to_string())]);
    inserted
}

/// The id an initializer should hand out next: one past the highest id.
///
/// Returns `None` once the highest id is `u64::MAX`.
pub fn next_id(store: &EmployeeStore<u64>) -> Option<u64> {
    match store.iter().map(|e| *e.id()).max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_inserts_ten() {
        let mut store = EmployeeStore::new();
        assert_eq!(seed_store(&mut store), 10);
        assert_eq!(store.count(), 10);
        assert_eq!(next_id(&store), Some(11));
    }

    #[test]
    fn test_seed_twice_skips_existing() {
        let mut store = EmployeeStore::new();
        seed_store(&mut store);
        assert_eq!(seed_store(&mut store), 0);
        assert_eq!(store.count(), 10);
    }

    #[test]
    fn test_next_id_empty_store() {
        assert_eq!(next_id(&EmployeeStore::new()), Some(1));
    }

    #[test]
    fn test_next_id_exhausted() {
        let mut store = EmployeeStore::new();
        store.add(Employee::new(u64::MAX, "Last", "Ops", 1.0, 1.0, 1, true));
        assert_eq!(next_id(&store), None);
    }
}
