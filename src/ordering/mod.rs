//! Ordering policies for rosterdb
//!
//! A policy is a named total order over records. Every listing that is
//! sorted goes through one of these, so sorts are reproducible:
//!
//! - Salary: descending
//! - Performance: descending by rating
//! - Name: ascending, case-insensitive
//! - Department: ascending, case-insensitive
//! - Experience: descending (the default order of a record)
//!
//! Sorting is stable. Records that compare equal keep their input order.

mod policy;
mod text;

pub use policy::{OrderingPolicy, UnknownPolicy};
pub use text::{compare_ignore_case, contains_ignore_case, eq_ignore_case};
