//! rosterdb - A deterministic in-memory personnel record store
//!
//! Records are kept under a unique identity, updated one field at a time,
//! queried by department, name, rating and salary, sorted by named
//! ordering policies, and aggregated per department.

pub mod cli;
pub mod observability;
pub mod ordering;
pub mod query;
pub mod record;
pub mod seed;
pub mod store;

pub use ordering::OrderingPolicy;
pub use query::{FilterPreset, ViewQuery};
pub use record::Employee;
pub use store::{EmployeeStore, Field, FieldValue, SharedStore, StoreError, UpdateError};
