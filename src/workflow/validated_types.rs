//! Validated order types
//!
//! Everything here has passed constrained-type construction and the external existence checks.

use thiserror::Error;

use crate::compound_types::{Address, CustomerInfo};
use crate::simple_types::{OrderId, OrderLineId, OrderQuantity, OrderedProduct, ProductCode};
use crate::workflow::{RemoteServiceError, UnvalidatedAddress};

// =============================================================================
// AddressValidationError
// =============================================================================

/// Outcome of a failed address check
///
/// `InvalidFormat` and `AddressNotFound` are answers from the address service and become
/// validation errors. `Unavailable` means the service itself failed.
///
/// # Examples
///
/// ```
/// use order_placement::workflow::AddressValidationError;
///
/// let error = AddressValidationError::AddressNotFound;
/// assert!(error.is_address_not_found());
/// assert_eq!(error.to_string(), "Address not found");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AddressValidationError {
    #[error("Invalid address format")]
    InvalidFormat,

    #[error("Address not found")]
    AddressNotFound,

    #[error("Address service unavailable: {0}")]
    Unavailable(RemoteServiceError),
}

impl AddressValidationError {
    #[must_use]
    pub const fn is_invalid_format(&self) -> bool {
        matches!(self, Self::InvalidFormat)
    }

    #[must_use]
    pub const fn is_address_not_found(&self) -> bool {
        matches!(self, Self::AddressNotFound)
    }
}

// =============================================================================
// CheckedAddress
// =============================================================================

/// Address confirmed by the address service
///
/// Holds the raw fields unchanged. Only an address checker should construct one.
///
/// # Examples
///
/// ```
/// use order_placement::workflow::{CheckedAddress, UnvalidatedAddress};
///
/// let unvalidated = UnvalidatedAddress::new(
///     "123 Main St".to_string(),
///     String::new(),
///     String::new(),
///     String::new(),
///     "New York".to_string(),
///     "10001".to_string(),
/// );
/// let checked = CheckedAddress::new(unvalidated);
/// assert_eq!(checked.value().city(), "New York");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckedAddress(UnvalidatedAddress);

impl CheckedAddress {
    #[must_use]
    pub const fn new(address: UnvalidatedAddress) -> Self {
        Self(address)
    }

    #[must_use]
    pub const fn value(&self) -> &UnvalidatedAddress {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> UnvalidatedAddress {
        self.0
    }
}

// =============================================================================
// ValidatedOrderLine
// =============================================================================

/// Order line whose product exists and whose quantity matches the product kind
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedOrderLine {
    order_line_id: OrderLineId,
    product: OrderedProduct,
}

impl ValidatedOrderLine {
    #[must_use]
    pub const fn new(order_line_id: OrderLineId, product: OrderedProduct) -> Self {
        Self {
            order_line_id,
            product,
        }
    }

    #[must_use]
    pub const fn order_line_id(&self) -> &OrderLineId {
        &self.order_line_id
    }

    #[must_use]
    pub const fn product(&self) -> &OrderedProduct {
        &self.product
    }

    #[must_use]
    pub fn product_code(&self) -> ProductCode {
        self.product.product_code()
    }

    #[must_use]
    pub const fn quantity(&self) -> OrderQuantity {
        self.product.quantity()
    }
}

// =============================================================================
// ValidatedOrder
// =============================================================================

/// Order in which every field is constrained and both addresses were checked
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedOrder {
    order_id: OrderId,
    customer_info: CustomerInfo,
    shipping_address: Address,
    billing_address: Address,
    lines: Vec<ValidatedOrderLine>,
}

impl ValidatedOrder {
    #[must_use]
    pub const fn new(
        order_id: OrderId,
        customer_info: CustomerInfo,
        shipping_address: Address,
        billing_address: Address,
        lines: Vec<ValidatedOrderLine>,
    ) -> Self {
        Self {
            order_id,
            customer_info,
            shipping_address,
            billing_address,
            lines,
        }
    }

    #[must_use]
    pub const fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    #[must_use]
    pub const fn customer_info(&self) -> &CustomerInfo {
        &self.customer_info
    }

    #[must_use]
    pub const fn shipping_address(&self) -> &Address {
        &self.shipping_address
    }

    #[must_use]
    pub const fn billing_address(&self) -> &Address {
        &self.billing_address
    }

    #[must_use]
    pub fn lines(&self) -> &[ValidatedOrderLine] {
        &self.lines
    }
}
