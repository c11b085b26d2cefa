//! Error types for the Rolodex directory
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Both variants are user-input validation failures: their messages and
//! context are safe to surface to the caller, and they never indicate an
//! internal fault. A missing record is not an error at all; lookups return
//! `Option` instead.

use thiserror::Error;

/// Result type alias for directory operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the Rolodex directory
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A record with the same name already exists
    #[error("name must be unique: {name}")]
    DuplicateName {
        /// The name that was already taken
        name: String,
    },

    /// A required field was empty
    #[error("required field must not be empty: {field}")]
    EmptyField {
        /// The offending field name
        field: &'static str,
    },
}

impl Error {
    /// The invalid client-supplied value (or field name) behind this error
    ///
    /// The boundary layer attaches this as structured context when
    /// reporting the failure back to the client.
    pub fn invalid_value(&self) -> &str {
        match self {
            Error::DuplicateName { name } => name,
            Error::EmptyField { field } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_duplicate_name() {
        let err = Error::DuplicateName {
            name: "Ana".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("unique"));
        assert!(msg.contains("Ana"));
    }

    #[test]
    fn test_error_display_empty_field() {
        let err = Error::EmptyField { field: "street" };
        let msg = err.to_string();
        assert!(msg.contains("empty"));
        assert!(msg.contains("street"));
    }

    #[test]
    fn test_invalid_value_context() {
        let dup = Error::DuplicateName {
            name: "Ana".to_string(),
        };
        assert_eq!(dup.invalid_value(), "Ana");

        let empty = Error::EmptyField { field: "city" };
        assert_eq!(empty.invalid_value(), "city");
    }

    #[test]
    fn test_error_pattern_matching() {
        let err = Error::DuplicateName {
            name: "Ana".to_string(),
        };
        match err {
            Error::DuplicateName { name } => assert_eq!(name, "Ana"),
            _ => panic!("Wrong error variant"),
        }
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<i32> {
            Ok(42)
        }
        assert_eq!(returns_result().unwrap(), 42);
    }
}
