//! Update rejection reasons
//!
//! None of these are failures of the store itself. Each one means the
//! requested change was not applied and the record is untouched.

use thiserror::Error;

use super::update::Field;

/// Returned when a field name is not one of the updatable fields
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown field: '{0}'")]
pub struct UnknownField(pub String);

/// Why an update was not applied
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UpdateError {
    /// No record has the requested id
    #[error("No record with id {0}")]
    NotFound(String),

    /// The field name is not updatable
    #[error(transparent)]
    UnknownField(#[from] UnknownField),

    /// The value variant cannot be stored in the field
    #[error("Field '{field}' expects {expected}, got {found}")]
    TypeMismatch {
        field: Field,
        expected: &'static str,
        found: &'static str,
    },

    /// Text value did not parse as the field's type
    #[error("Field '{field}' cannot parse '{value}' as {expected}")]
    Unparsable {
        field: Field,
        value: String,
        expected: &'static str,
    },
}

impl UpdateError {
    /// Short machine-readable reason, used in logs and CLI responses
    pub fn reason(&self) -> &'static str {
        match self {
            UpdateError::NotFound(_) => "not_found",
            UpdateError::UnknownField(_) => "unknown_field",
            UpdateError::TypeMismatch { .. } => "type_mismatch",
            UpdateError::Unparsable { .. } => "unparsable",
        }
    }
}

/// Result type for field updates
pub type UpdateResult<T> = Result<T, UpdateError>;

/// Why a shared store handle refused an operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A previous lock holder panicked; the store may be partly updated
    #[error("Store lock poisoned")]
    LockPoisoned,
}

/// Result type for shared store access
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reasons() {
        assert_eq!(UpdateError::NotFound("1".into()).reason(), "not_found");
        assert_eq!(
            UpdateError::from(UnknownField("age".into())).reason(),
            "unknown_field"
        );
    }

    #[test]
    fn test_lock_poisoned_display() {
        assert_eq!(StoreError::LockPoisoned.to_string(), "Store lock poisoned");
    }

    #[test]
    fn test_display() {
        let err = UpdateError::Unparsable {
            field: Field::Salary,
            value: "abc".into(),
            expected: "number",
        };
        let shown = err.to_string();
        assert!(shown.contains("salary"));
        assert!(shown.contains("abc"));

        let err = UpdateError::from(UnknownField("age".into()));
        assert_eq!(err.to_string(), "Unknown field: 'age'");
    }
}
