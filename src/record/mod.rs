//! Record subsystem for rosterdb
//!
//! A record is a single personnel entity: an immutable identity plus
//! mutable descriptive attributes.
//!
//! # Invariants
//!
//! - Identity never changes after construction
//! - Equality and hashing consider identity only
//! - Attribute mutation is crate-private; callers go through the store

mod employee;

pub use employee::Employee;
