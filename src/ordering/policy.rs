//! Named comparison strategies over records

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::text::compare_ignore_case;
use crate::record::Employee;

/// Returned when a policy name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown ordering policy: '{0}'")]
pub struct UnknownPolicy(pub String);

/// A named total order over records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderingPolicy {
    /// Most experienced first
    Experience,
    /// Highest salary first
    Salary,
    /// Highest performance rating first
    Performance,
    /// Name A to Z, ignoring case
    Name,
    /// Department A to Z, ignoring case
    Department,
}

impl OrderingPolicy {
    /// Every policy, in presentation order
    pub const ALL: [OrderingPolicy; 5] = [
        OrderingPolicy::Name,
        OrderingPolicy::Department,
        OrderingPolicy::Salary,
        OrderingPolicy::Performance,
        OrderingPolicy::Experience,
    ];

    /// The default order of a record
    pub const NATURAL: OrderingPolicy = OrderingPolicy::Experience;

    /// Returns the policy name
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderingPolicy::Experience => "experience",
            OrderingPolicy::Salary => "salary",
            OrderingPolicy::Performance => "performance",
            OrderingPolicy::Name => "name",
            OrderingPolicy::Department => "department",
        }
    }

    /// Compares two records under this policy
    pub fn compare<K>(&self, a: &Employee<K>, b: &Employee<K>) -> Ordering {
        match self {
            OrderingPolicy::Experience => b.years_of_experience().cmp(&a.years_of_experience()),
            OrderingPolicy::Salary => b.salary().total_cmp(&a.salary()),
            OrderingPolicy::Performance => b
                .performance_rating()
                .total_cmp(&a.performance_rating()),
            OrderingPolicy::Name => compare_ignore_case(a.name(), b.name()),
            OrderingPolicy::Department => compare_ignore_case(a.department(), b.department()),
        }
    }

    /// Sorts records in place. The sort is stable.
    pub fn sort<K>(&self, records: &mut [Employee<K>]) {
        records.sort_by(|a, b| self.compare(a, b));
    }
}

impl Default for OrderingPolicy {
    fn default() -> Self {
        Self::NATURAL
    }
}

impl fmt::Display for OrderingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OrderingPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderingPolicy::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownPolicy(s.to_string()))
    }
}
