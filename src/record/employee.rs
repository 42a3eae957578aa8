//! Employee record

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A personnel record keyed by a caller-chosen identity type.
///
/// Two records with the same `id` are the same entity, regardless of
/// their other attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee<K> {
    id: K,
    name: String,
    department: String,
    salary: f64,
    performance_rating: f64,
    years_of_experience: i32,
    active: bool,
}

impl<K> Employee<K> {
    /// Creates a new record
    pub fn new(
        id: K,
        name: impl Into<String>,
        department: impl Into<String>,
        salary: f64,
        performance_rating: f64,
        years_of_experience: i32,
        active: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            department: department.into(),
            salary,
            performance_rating,
            years_of_experience,
            active,
        }
    }

    /// Returns the record identity
    pub fn id(&self) -> &K {
        &self.id
    }

    /// Returns the name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the department, as stored
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Returns the salary
    pub fn salary(&self) -> f64 {
        self.salary
    }

    /// Returns the performance rating (conventionally 0.0 to 5.0)
    pub fn performance_rating(&self) -> f64 {
        self.performance_rating
    }

    /// Returns the years of experience
    pub fn years_of_experience(&self) -> i32 {
        self.years_of_experience
    }

    /// Returns whether the employee is active
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_department(&mut self, department: String) {
        self.department = department;
    }

    pub(crate) fn set_salary(&mut self, salary: f64) {
        self.salary = salary;
    }

    pub(crate) fn set_performance_rating(&mut self, rating: f64) {
        self.performance_rating = rating;
    }

    pub(crate) fn set_years_of_experience(&mut self, years: i32) {
        self.years_of_experience = years;
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

impl<K: PartialEq> PartialEq for Employee<K> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<K: Eq> Eq for Employee<K> {}

impl<K: Hash> Hash for Employee<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<K: fmt::Debug> fmt::Display for Employee<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Employee{{id={:?}, name='{}', department='{}', salary={}, rating={}, experience={}, active={}}}",
            self.id,
            self.name,
            self.department,
            self.salary,
            self.performance_rating,
            self.years_of_experience,
            self.active
        )
    }
}
