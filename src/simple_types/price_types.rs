//! Monetary types
//!
//! Defines `Price` and `BillingAmount`.

use rust_decimal::Decimal;

use super::constrained_type;
use super::error::{ConstraintError, ConstraintErrorKind};

// =============================================================================
// Price
// =============================================================================

/// Price in `[0, 1000]`
///
/// # Examples
///
/// ```
/// use order_placement::simple_types::Price;
/// use rust_decimal::Decimal;
///
/// let price = Price::create(Decimal::new(1999, 2)).unwrap();
/// assert_eq!(price.value(), Decimal::new(1999, 2));
///
/// assert!(Price::create(Decimal::from(-1)).is_err());
/// assert!(Price::create(Decimal::from(1001)).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Price(Decimal);

impl Price {
    const FIELD_NAME: &'static str = "Price";
    const MIN: Decimal = Decimal::ZERO;
    const MAX: Decimal = Decimal::ONE_THOUSAND;

    /// Creates a `Price`
    ///
    /// # Errors
    ///
    /// `TooSmall` below 0, `TooBig` above 1000.
    pub fn create(value: Decimal) -> Result<Self, ConstraintError> {
        constrained_type::create_decimal(Self::FIELD_NAME, Self, Self::MIN, Self::MAX, value)
    }

    /// Creates a `Price` from a value known to be in range
    ///
    /// Meant for collaborators and fixtures holding literal prices, never for raw input.
    ///
    /// # Panics
    ///
    /// Panics when `value` is outside `[0, 1000]`.
    #[must_use]
    pub fn unsafe_create(value: Decimal) -> Self {
        Self::create(value)
            .unwrap_or_else(|error| panic!("Not expecting Price to be out of bounds: {error}"))
    }

    /// Multiplies this unit price by `quantity`, re-validating the product as a `Price`
    ///
    /// # Errors
    ///
    /// `TooBig` when the product exceeds 1000 or overflows `Decimal`.
    ///
    /// # Examples
    ///
    /// ```
    /// use order_placement::simple_types::Price;
    /// use rust_decimal::Decimal;
    ///
    /// let unit_price = Price::create(Decimal::from(10)).unwrap();
    /// assert_eq!(unit_price.multiply(Decimal::from(2)).unwrap().value(), Decimal::from(20));
    /// assert!(unit_price.multiply(Decimal::from(101)).is_err());
    /// ```
    pub fn multiply(&self, quantity: Decimal) -> Result<Self, ConstraintError> {
        self.0.checked_mul(quantity).map_or_else(
            || {
                Err(ConstraintError::new(
                    ConstraintErrorKind::TooBig,
                    Self::FIELD_NAME,
                    &format!("{} * {quantity} overflows", self.0),
                ))
            },
            Self::create,
        )
    }

    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }
}

// =============================================================================
// BillingAmount
// =============================================================================

/// Total amount to bill in `[0, 10000]`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BillingAmount(Decimal);

impl BillingAmount {
    const FIELD_NAME: &'static str = "BillingAmount";
    const MIN: Decimal = Decimal::ZERO;
    const MAX: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

    /// Creates a `BillingAmount`
    ///
    /// # Errors
    ///
    /// `TooSmall` below 0, `TooBig` above 10000.
    pub fn create(value: Decimal) -> Result<Self, ConstraintError> {
        constrained_type::create_decimal(Self::FIELD_NAME, Self, Self::MIN, Self::MAX, value)
    }

    /// Sums `prices` in order and validates the total as a `BillingAmount`
    ///
    /// An empty slice sums to zero.
    ///
    /// # Errors
    ///
    /// `TooBig` when the total exceeds 10000.
    ///
    /// # Examples
    ///
    /// ```
    /// use order_placement::simple_types::{BillingAmount, Price};
    /// use rust_decimal::Decimal;
    ///
    /// let prices = [
    ///     Price::create(Decimal::from(100)).unwrap(),
    ///     Price::create(Decimal::new(5050, 2)).unwrap(),
    /// ];
    /// assert_eq!(BillingAmount::sum_prices(&prices).unwrap().value(), Decimal::new(15050, 2));
    /// assert_eq!(BillingAmount::sum_prices(&[]).unwrap().value(), Decimal::ZERO);
    /// ```
    pub fn sum_prices(prices: &[Price]) -> Result<Self, ConstraintError> {
        let total = prices
            .iter()
            .fold(Decimal::ZERO, |accumulator, price| accumulator + price.value());
        Self::create(total)
    }

    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }
}
