//! Validation error types

use std::fmt;

/// Validation error for domain models
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// Field exceeds a byte limit (bcrypt input)
    TooManyBytes { field: &'static str, max: usize },

    /// String doesn't match required format (e.g., numeric id)
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Invalid enum variant
    InvalidVariant { field: &'static str, value: String },

    /// Committee member id that is not a committee-role staff member
    InvalidCommitteeMember { value: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::TooManyBytes { field, max } => {
                write!(f, "{} exceeds maximum length of {} bytes", field, max)
            }
            Self::InvalidFormat { field, reason } => {
                write!(f, "{}: {}", field, reason)
            }
            Self::InvalidVariant { field, value } => {
                write!(f, "invalid {} value: '{}'", field, value)
            }
            Self::InvalidCommitteeMember { value } => {
                write!(f, "Invalid committee member ID: {}", value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Require a non-blank value no longer than `max` characters.
///
/// The value is kept as submitted; only the blank check ignores whitespace.
pub(crate) fn required(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(value.to_owned())
}

/// Require a non-blank password of at most `max_bytes` UTF-8 bytes.
///
/// bcrypt only reads the first 72 bytes of its input.
pub(crate) fn password(value: &str, max_bytes: usize) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field: "password" });
    }
    if value.len() > max_bytes {
        return Err(ValidationError::TooManyBytes {
            field: "password",
            max: max_bytes,
        });
    }
    Ok(value.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::TooLong {
            field: "name",
            max: 128,
        };
        assert_eq!(err.to_string(), "name exceeds maximum length of 128 characters");

        let err = ValidationError::InvalidCommitteeMember { value: "42".into() };
        assert_eq!(err.to_string(), "Invalid committee member ID: 42");
    }

    #[test]
    fn required_rejects_blank() {
        assert_eq!(
            required("name", "   ", 10),
            Err(ValidationError::Empty { field: "name" })
        );
        assert_eq!(required("name", "Ada", 10).unwrap(), "Ada");
        assert!(matches!(
            required("name", "abcdefghijk", 10),
            Err(ValidationError::TooLong { max: 10, .. })
        ));
    }

    #[test]
    fn password_limit_counts_bytes() {
        // 36 two-byte characters fill the limit exactly
        let fits = "é".repeat(36);
        assert_eq!(password(&fits, 72).unwrap(), fits);

        let over = "é".repeat(37);
        assert_eq!(over.chars().count(), 37);
        assert_eq!(
            password(&over, 72),
            Err(ValidationError::TooManyBytes {
                field: "password",
                max: 72
            })
        );
        assert_eq!(
            password(" ", 72),
            Err(ValidationError::Empty { field: "password" })
        );
    }
}
