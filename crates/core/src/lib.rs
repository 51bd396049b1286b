//! Shared primitives for all Rust crates in Airone.

#![forbid(unsafe_code)]

use thiserror::Error;

/// Result type used across Airone crates.
pub type AppResult<T> = Result<T, AppError>;

/// Common application error categories.
///
/// Validation outcomes are reported as issues, not errors; these variants
/// cover malformed lookups, configuration and server failures.
#[derive(Debug, Error)]
pub enum AppError {
    /// Input that cannot be interpreted at all, such as an unknown code.
    #[error("validation error: {0}")]
    Validation(String),

    /// Requested resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Internal unexpected error.
    #[error("internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::{AppError, AppResult};

    #[test]
    fn validation_error_formats_with_category() {
        let error = AppError::Validation("unknown attribute type 'blob'".to_owned());
        assert_eq!(
            error.to_string(),
            "validation error: unknown attribute type 'blob'"
        );
    }

    #[test]
    fn app_result_propagates_with_question_mark() {
        fn lookup(found: bool) -> AppResult<u16> {
            if found {
                Ok(2)
            } else {
                Err(AppError::NotFound("attribute type 4096".to_owned()))
            }
        }

        fn double(found: bool) -> AppResult<u16> {
            Ok(lookup(found)? * 2)
        }

        assert_eq!(double(true).ok(), Some(4));
        assert!(matches!(double(false), Err(AppError::NotFound(_))));
    }
}
