//! Mutex-guarded store handle
//!
//! The store itself is single-writer and unsynchronized. Callers that
//! share it across threads wrap it here: one lock guards all state and
//! every operation runs with the lock held.

use std::fmt::Debug;
use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard};

use super::errors::{StoreError, StoreResult};
use super::store::EmployeeStore;

/// Cloneable, thread-safe handle to one store
#[derive(Debug)]
pub struct SharedStore<K> {
    inner: Arc<Mutex<EmployeeStore<K>>>,
}

impl<K> Clone for SharedStore<K> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K> SharedStore<K>
where
    K: Clone + Eq + Hash + Debug,
{
    /// Wraps a store
    pub fn new(store: EmployeeStore<K>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Runs a read-only closure with the lock held
    pub fn with<R>(&self, f: impl FnOnce(&EmployeeStore<K>) -> R) -> StoreResult<R> {
        let store = self.lock()?;
        Ok(f(&store))
    }

    /// Runs a mutating closure with the lock held
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut EmployeeStore<K>) -> R) -> StoreResult<R> {
        let mut store = self.lock()?;
        Ok(f(&mut store))
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, EmployeeStore<K>>> {
        self.inner.lock().map_err(|_| StoreError::LockPoisoned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Employee;
    use std::thread;

    #[test]
    fn test_concurrent_adds_keep_unique_ids() {
        let shared = SharedStore::new(EmployeeStore::<u64>::new());

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let shared = shared.clone();
                thread::spawn(move || {
                    let mut added = 0;
                    for id in 0..50u64 {
                        let record = Employee::new(id, format!("worker {}", t), "Ops", 1.0, 1.0, 1, true);
                        if shared.with_mut(|s| s.add(record)) == Ok(true) {
                            added += 1;
                        }
                    }
                    added
                })
            })
            .collect();

        let total: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(total, 50);
        assert_eq!(shared.with(|s| s.count()), Ok(50));
    }

    #[test]
    fn test_raise_through_handle() {
        let mut store = EmployeeStore::new();
        store.add(Employee::new(1u64, "Ann", "IT", 100.0, 5.0, 1, true));
        let shared = SharedStore::new(store);

        assert_eq!(shared.with_mut(|s| s.give_raise(4.0, 50.0)), Ok(1));
        assert_eq!(shared.with(|s| s.get(&1).map(|e| e.salary())), Ok(Some(150.0)));
    }

    #[test]
    fn test_panic_inside_closure_poisons_handle() {
        let shared = SharedStore::new(EmployeeStore::<u64>::new());

        let worker = shared.clone();
        let outcome = thread::spawn(move || {
            let _ = worker.with_mut(|s| {
                s.add(Employee::new(1, "Half", "Ops", 1.0, 1.0, 1, true));
                panic!("closure failed after a partial write");
            });
        })
        .join();
        assert!(outcome.is_err());

        assert_eq!(shared.with(|s| s.count()), Err(StoreError::LockPoisoned));
        assert_eq!(
            shared.with_mut(|s| s.add(Employee::new(2, "Next", "Ops", 1.0, 1.0, 1, true))),
            Err(StoreError::LockPoisoned)
        );
    }
}
