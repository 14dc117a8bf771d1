//! Constraint error type shared by every smart constructor

use std::fmt;

use thiserror::Error;

/// Closed set of reasons a constrained value can be rejected
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConstraintErrorKind {
    /// Input was empty
    Empty,
    /// Input exceeded the maximum length
    TooLong,
    /// Input was below the minimum
    TooSmall,
    /// Input was above the maximum
    TooBig,
    /// Input was required to be a whole number
    NotInt,
    /// Input could not be represented as a decimal
    NotDecimal,
    /// Input did not match the required pattern
    DoesNotMatch,
    /// Input prefix did not identify any known format
    UnknownFormat,
}

impl ConstraintErrorKind {
    /// Returns the kind name used in serialized errors
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "Empty",
            Self::TooLong => "TooLong",
            Self::TooSmall => "TooSmall",
            Self::TooBig => "TooBig",
            Self::NotInt => "NotInt",
            Self::NotDecimal => "NotDecimal",
            Self::DoesNotMatch => "DoesNotMatch",
            Self::UnknownFormat => "UnknownFormat",
        }
    }
}

impl fmt::Display for ConstraintErrorKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Error returned when a raw value violates the invariant of a constrained type
///
/// # Examples
///
/// ```
/// use order_placement::simple_types::{ConstraintError, ConstraintErrorKind};
///
/// let error = ConstraintError::new(ConstraintErrorKind::Empty, "OrderId", "Must not be empty");
/// assert_eq!(error.kind, ConstraintErrorKind::Empty);
/// assert_eq!(error.to_string(), "OrderId: Must not be empty");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{field_name}: {message}")]
pub struct ConstraintError {
    /// Why the value was rejected
    pub kind: ConstraintErrorKind,
    /// Name of the field being constructed
    pub field_name: String,
    /// Human-readable description
    pub message: String,
}

impl ConstraintError {
    /// Creates a new `ConstraintError`
    #[must_use]
    pub fn new(kind: ConstraintErrorKind, field_name: &str, message: &str) -> Self {
        Self {
            kind,
            field_name: field_name.to_string(),
            message: message.to_string(),
        }
    }
}
