//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is raised synchronously at the point of violation and
/// returned to the immediate caller. Nothing in the domain crates recovers
/// from or logs these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation at construction time.
    #[error("validation failed: {0}")]
    Validation(String),

    /// An argument was present but unusable.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An index or range fell outside the live elements of a collection.
    #[error("index out of range: {0}")]
    IndexOutOfRange(String),

    /// A cursor operation was called in a state that does not permit it.
    #[error("illegal state: {0}")]
    IllegalState(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange(format!("index: {index}, length: {len}"))
    }

    pub fn range_out_of_bounds(from: usize, to: usize, len: usize) -> Self {
        Self::IndexOutOfRange(format!("range: {from}..{to}, length: {len}"))
    }

    pub fn illegal_state(msg: impl Into<String>) -> Self {
        Self::IllegalState(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_errors_name_the_offending_position() {
        let err = DomainError::index_out_of_range(3, 2);
        assert_eq!(err.to_string(), "index out of range: index: 3, length: 2");

        let err = DomainError::range_out_of_bounds(2, 1, 4);
        assert_eq!(err.to_string(), "index out of range: range: 2..1, length: 4");
    }
}
