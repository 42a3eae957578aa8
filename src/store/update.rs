//! Typed field updates
//!
//! An update names a field and carries a value variant. The pair is
//! resolved into a [`Change`] before any record is touched, so a value
//! that cannot be stored leaves the record exactly as it was.
//!
//! Text values are parsed by the target field's type:
//! - salary, performanceRating: decimal, surrounding whitespace ignored,
//!   non-finite results rejected
//! - yearsOfExperience: 32-bit integer, surrounding whitespace ignored
//! - isActive: `true` / `false`, any case; other text is rejected, not
//!   read as false

use std::fmt;
use std::str::FromStr;

use super::errors::{UnknownField, UpdateError, UpdateResult};
use crate::record::Employee;

/// Updatable fields of a record. The id is not among them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Department,
    Salary,
    PerformanceRating,
    YearsOfExperience,
    Active,
}

impl Field {
    /// Every updatable field
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Department,
        Field::Salary,
        Field::PerformanceRating,
        Field::YearsOfExperience,
        Field::Active,
    ];

    /// Canonical field name; parsing ignores case
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Department => "department",
            Field::Salary => "salary",
            Field::PerformanceRating => "performanceRating",
            Field::YearsOfExperience => "yearsOfExperience",
            Field::Active => "isActive",
        }
    }

    /// Name of the value type the field stores
    pub fn expected(&self) -> &'static str {
        match self {
            Field::Name | Field::Department => "text",
            Field::Salary | Field::PerformanceRating => "number",
            Field::YearsOfExperience => "integer",
            Field::Active => "boolean",
        }
    }

    /// Resolves a value into a change for this field
    pub fn resolve(self, value: FieldValue) -> UpdateResult<Change> {
        match (self, value) {
            (Field::Name, FieldValue::Text(s)) => Ok(Change::Name(s)),
            (Field::Department, FieldValue::Text(s)) => Ok(Change::Department(s)),

            (Field::Salary, FieldValue::Float(v)) => Ok(Change::Salary(v)),
            (Field::Salary, FieldValue::Text(s)) => self.parse_with(&s, parse_float).map(Change::Salary),

            (Field::PerformanceRating, FieldValue::Float(v)) => Ok(Change::PerformanceRating(v)),
            (Field::PerformanceRating, FieldValue::Text(s)) => {
                self.parse_with(&s, parse_float).map(Change::PerformanceRating)
            }

            (Field::YearsOfExperience, FieldValue::Integer(v)) => Ok(Change::YearsOfExperience(v)),
            (Field::YearsOfExperience, FieldValue::Text(s)) => {
                self.parse_with(&s, parse_int).map(Change::YearsOfExperience)
            }

            (Field::Active, FieldValue::Bool(v)) => Ok(Change::Active(v)),
            (Field::Active, FieldValue::Text(s)) => self.parse_with(&s, parse_bool).map(Change::Active),

            (field, value) => Err(UpdateError::TypeMismatch {
                field,
                expected: field.expected(),
                found: value.kind(),
            }),
        }
    }

    fn parse_with<T>(self, text: &str, parse: fn(&str) -> Option<T>) -> UpdateResult<T> {
        parse(text).ok_or_else(|| UpdateError::Unparsable {
            field: self,
            value: text.to_string(),
            expected: self.expected(),
        })
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// A value for a field update, either already typed or as text
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Float(f64),
    Integer(i32),
    Bool(bool),
}

impl FieldValue {
    /// Name of the variant, for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Float(_) => "number",
            FieldValue::Integer(_) => "integer",
            FieldValue::Bool(_) => "boolean",
        }
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Float(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        FieldValue::Integer(v)
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}

/// A resolved single-field change, ready to apply
#[derive(Debug, Clone, PartialEq)]
pub enum Change {
    Name(String),
    Department(String),
    Salary(f64),
    PerformanceRating(f64),
    YearsOfExperience(i32),
    Active(bool),
}

impl Change {
    /// Writes exactly one field of the record
    pub(crate) fn apply<K>(self, record: &mut Employee<K>) {
        match self {
            Change::Name(v) => record.set_name(v),
            Change::Department(v) => record.set_department(v),
            Change::Salary(v) => record.set_salary(v),
            Change::PerformanceRating(v) => record.set_performance_rating(v),
            Change::YearsOfExperience(v) => record.set_years_of_experience(v),
            Change::Active(v) => record.set_active(v),
        }
    }
}

fn parse_float(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_int(text: &str) -> Option<i32> {
    text.trim().parse::<i32>().ok()
}

fn parse_bool(text: &str) -> Option<bool> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
