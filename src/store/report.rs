//! Department report
//!
//! One line per department name as stored. Averages are computed with the
//! store's case-insensitive department match, so "IT" and "it" report the
//! same average but separate counts.

use std::fmt;

use serde::Serialize;

/// Count and average salary of one department
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentSummary {
    pub department: String,
    pub count: usize,
    pub average_salary: f64,
}

/// Per-department summary, ordered by department name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentReport {
    pub departments: Vec<DepartmentSummary>,
}

impl DepartmentReport {
    pub fn new(departments: Vec<DepartmentSummary>) -> Self {
        Self { departments }
    }

    /// Total records across all departments
    pub fn total(&self) -> usize {
        self.departments.iter().map(|d| d.count).sum()
    }

    /// Summary for an exact department name
    pub fn get(&self, department: &str) -> Option<&DepartmentSummary> {
        self.departments.iter().find(|d| d.department == department)
    }
}

impl fmt::Display for DepartmentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Department Report:")?;
        writeln!(f)?;
        for d in &self.departments {
            writeln!(f, "{}:", d.department)?;
            writeln!(f, "  Employees: {}", d.count)?;
            writeln!(f, "  Average Salary: ${:.2}", d.average_salary)?;
            writeln!(f)?;
        }
        Ok(())
    }
}
