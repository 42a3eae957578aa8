//! Store subsystem for rosterdb
//!
//! The store owns every record and is the only way to change one.
//!
//! # Contracts
//!
//! - At most one record per id; a duplicate `add` changes nothing
//! - Not-found is never an error: `false`, `None` or an empty listing
//! - `update` is all-or-nothing: a value is resolved against the field's
//!   type before the record is touched
//! - Listings are snapshots made of clones and never alias live records
//! - Sorting uses [`OrderingPolicy`](crate::ordering::OrderingPolicy) on a
//!   snapshot; stored order stays insertion order
//!
//! # Concurrency
//!
//! `EmployeeStore` is unsynchronized and expects one writer at a time.
//! [`SharedStore`] puts a single mutex around it for multi-threaded callers.
//! Once a closure panics while holding the lock, the handle refuses
//! further access with [`StoreError::LockPoisoned`].

mod errors;
mod report;
mod shared;
mod store;
mod update;

pub use errors::{StoreError, StoreResult, UnknownField, UpdateError, UpdateResult};
pub use report::{DepartmentReport, DepartmentSummary};
pub use shared::SharedStore;
pub use store::EmployeeStore;
pub use update::{Change, Field, FieldValue};
