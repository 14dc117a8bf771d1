//! Collaborator seams of the workflow
//!
//! Each external dependency is a trait. Plain closures implement them through blanket impls,
//! so tests and callers can pass `|code: &ProductCode| true` without defining a type.

use std::future::Future;

use crate::simple_types::{Price, ProductCode};
use crate::workflow::{
    AddressValidationError, CheckedAddress, HtmlString, OrderAcknowledgment, PricedOrder,
    SendResult, UnvalidatedAddress,
};

// =============================================================================
// CheckProductCodeExists
// =============================================================================

/// Product catalog lookup
pub trait CheckProductCodeExists {
    fn check_product_code_exists(&self, product_code: &ProductCode) -> bool;
}

impl<F> CheckProductCodeExists for F
where
    F: Fn(&ProductCode) -> bool,
{
    fn check_product_code_exists(&self, product_code: &ProductCode) -> bool {
        self(product_code)
    }
}

// =============================================================================
// CheckAddressExists
// =============================================================================

/// Remote address verification
///
/// The only asynchronous collaborator. `Err(AddressValidationError::Unavailable(_))` reports a
/// service fault rather than a verdict on the address.
pub trait CheckAddressExists {
    fn check_address_exists(
        &self,
        address: UnvalidatedAddress,
    ) -> impl Future<Output = Result<CheckedAddress, AddressValidationError>>;
}

impl<F, Fut> CheckAddressExists for F
where
    F: Fn(UnvalidatedAddress) -> Fut,
    Fut: Future<Output = Result<CheckedAddress, AddressValidationError>>,
{
    fn check_address_exists(
        &self,
        address: UnvalidatedAddress,
    ) -> impl Future<Output = Result<CheckedAddress, AddressValidationError>> {
        self(address)
    }
}

// =============================================================================
// GetProductPrice
// =============================================================================

/// Unit price lookup
///
/// Only called for codes that already passed [`CheckProductCodeExists`], so it is total.
pub trait GetProductPrice {
    fn get_product_price(&self, product_code: &ProductCode) -> Price;
}

impl<F> GetProductPrice for F
where
    F: Fn(&ProductCode) -> Price,
{
    fn get_product_price(&self, product_code: &ProductCode) -> Price {
        self(product_code)
    }
}

// =============================================================================
// CreateAcknowledgmentLetter / SendOrderAcknowledgment
// =============================================================================

pub trait CreateAcknowledgmentLetter {
    fn create_acknowledgment_letter(&self, priced_order: &PricedOrder) -> HtmlString;
}

impl<F> CreateAcknowledgmentLetter for F
where
    F: Fn(&PricedOrder) -> HtmlString,
{
    fn create_acknowledgment_letter(&self, priced_order: &PricedOrder) -> HtmlString {
        self(priced_order)
    }
}

/// Delivery of the acknowledgment; never fails the workflow
pub trait SendOrderAcknowledgment {
    fn send_order_acknowledgment(&self, acknowledgment: &OrderAcknowledgment) -> SendResult;
}

impl<F> SendOrderAcknowledgment for F
where
    F: Fn(&OrderAcknowledgment) -> SendResult,
{
    fn send_order_acknowledgment(&self, acknowledgment: &OrderAcknowledgment) -> SendResult {
        self(acknowledgment)
    }
}
