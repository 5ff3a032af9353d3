//! Error types for sequence operators.
//!
//! This module provides [`QueryError`], the error type raised by the strict
//! lookup operators (`first`, `single`) and by `chunks` when given an
//! unusable chunk size.
//!
//! Errors are raised synchronously at the point of evaluation and surfaced
//! to the immediate caller. The tolerant lookup variants (`first_or`,
//! `first_or_default`, `single_or`, `single_or_default`) convert the
//! not-found case into a value instead; ambiguity is never converted.

use std::fmt;

/// Represents a failure of a sequence operator.
///
/// # Examples
///
/// ```rust
/// use sequor::prelude::*;
///
/// let empty: Vec<i32> = Vec::new();
/// let result = Sequence::over(empty).first(|&n| n > 0);
/// assert_eq!(result, Err(QueryError::NotFound));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    /// A strict lookup (`first` or `single`) matched no element.
    NotFound,
    /// `single` matched more than one element.
    Ambiguous,
    /// `chunks` was asked to produce chunks of zero elements.
    InvalidChunkSize,
}

impl fmt::Display for QueryError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => formatter.write_str("no element matched the predicate"),
            Self::Ambiguous => formatter.write_str("more than one element matched the predicate"),
            Self::InvalidChunkSize => formatter.write_str("chunk size must be at least 1"),
        }
    }
}

impl std::error::Error for QueryError {}
