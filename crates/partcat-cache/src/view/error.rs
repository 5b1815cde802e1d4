//! Error types for the criterion query parser.

use thiserror::Error;

/// A specialized Result type for query parsing operations.
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors that can occur while parsing textual criteria and sort specs.
///
/// These are call-site validation errors; the view engine itself never
/// fails on data-shape problems.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    /// The expression is empty.
    #[error("filter expression is empty")]
    EmptyExpression,

    /// The attribute part is not a valid dotted path.
    #[error("invalid attribute path: '{path}'")]
    InvalidAttribute {
        /// The offending attribute text.
        path: String,
    },

    /// An operator with nothing after it.
    #[error("missing value after '{op}'")]
    MissingValue {
        /// The operator that was left dangling.
        op: String,
    },

    /// An unknown sort direction suffix.
    #[error("unknown sort direction: '{direction}' (expected 'asc' or 'desc')")]
    UnknownDirection {
        /// The unrecognized direction.
        direction: String,
    },
}

impl QueryError {
    /// Creates an invalid attribute error.
    pub fn invalid_attribute(path: impl Into<String>) -> Self {
        QueryError::InvalidAttribute { path: path.into() }
    }

    /// Creates a missing value error.
    pub fn missing_value(op: impl Into<String>) -> Self {
        QueryError::MissingValue { op: op.into() }
    }

    /// Creates an unknown direction error.
    pub fn unknown_direction(direction: impl Into<String>) -> Self {
        QueryError::UnknownDirection {
            direction: direction.into(),
        }
    }
}
