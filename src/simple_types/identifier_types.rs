//! Identifier types for orders and order lines

use super::constrained_type;
use super::error::ConstraintError;

const IDENTIFIER_MAX_LENGTH: usize = 50;

/// Order identifier: a non-empty string of at most 50 characters
///
/// # Examples
///
/// ```
/// use order_placement::simple_types::OrderId;
///
/// let order_id = OrderId::create("OrderId", "order-001").unwrap();
/// assert_eq!(order_id.value(), "order-001");
/// assert!(OrderId::create("OrderId", "").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OrderId(String);

impl OrderId {
    /// Creates an `OrderId`
    ///
    /// # Errors
    ///
    /// `Empty` for an empty input, `TooLong` past 50 characters.
    pub fn create(field_name: &str, value: &str) -> Result<Self, ConstraintError> {
        constrained_type::create_string(field_name, Self, IDENTIFIER_MAX_LENGTH, value)
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Order line identifier: a non-empty string of at most 50 characters
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OrderLineId(String);

impl OrderLineId {
    /// Creates an `OrderLineId`
    ///
    /// # Errors
    ///
    /// `Empty` for an empty input, `TooLong` past 50 characters.
    pub fn create(field_name: &str, value: &str) -> Result<Self, ConstraintError> {
        constrained_type::create_string(field_name, Self, IDENTIFIER_MAX_LENGTH, value)
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}
