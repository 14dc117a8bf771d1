//! Order placement workflow
//!
//! The pipeline runs in four stages, each consuming the previous stage's type:
//!
//! ```text
//! UnvalidatedOrder -> ValidatedOrder -> PricedOrder -> Vec<PlaceOrderEvent>
//! ```
//!
//! External collaborators are injected through the traits in [`ports`], which plain closures
//! implement.
//!
//! # Types
//!
//! - **Input**: [`UnvalidatedOrder`], [`UnvalidatedCustomerInfo`], [`UnvalidatedAddress`],
//!   [`UnvalidatedOrderLine`]
//! - **Validated**: [`ValidatedOrder`], [`ValidatedOrderLine`], [`CheckedAddress`]
//! - **Priced**: [`PricedOrder`], [`PricedOrderLine`]
//! - **Acknowledgment**: [`HtmlString`], [`OrderAcknowledgment`], [`SendResult`]
//! - **Output**: [`PlaceOrderEvent`], [`OrderAcknowledgmentSent`], [`BillableOrderPlaced`]
//! - **Errors**: [`PlaceOrderError`], [`ValidationError`], [`PricingError`],
//!   [`RemoteServiceError`]

mod acknowledgment_types;
mod error_types;
mod output_types;
mod priced_types;
mod unvalidated_types;
mod validated_types;

pub mod acknowledgment;
pub mod events;
pub mod place_order;
pub mod ports;
pub mod pricing;
pub mod validation;

pub use acknowledgment_types::{HtmlString, OrderAcknowledgment, SendResult};
pub use error_types::{
    PlaceOrderError, PricingError, PricingErrorKind, RemoteServiceError, ServiceInfo,
    ValidationError, ValidationErrorKind,
};
pub use output_types::{BillableOrderPlaced, OrderAcknowledgmentSent, OrderPlaced, PlaceOrderEvent};
pub use priced_types::{PricedOrder, PricedOrderLine};
pub use unvalidated_types::{
    UnvalidatedAddress, UnvalidatedCustomerInfo, UnvalidatedOrder, UnvalidatedOrderLine,
};
pub use validated_types::{AddressValidationError, CheckedAddress, ValidatedOrder, ValidatedOrderLine};

pub use acknowledgment::acknowledge_order;
pub use events::{create_billing_event, create_events};
pub use place_order::{PlaceOrderWorkflow, place_order};
pub use ports::{
    CheckAddressExists, CheckProductCodeExists, CreateAcknowledgmentLetter, GetProductPrice,
    SendOrderAcknowledgment,
};
pub use pricing::price_order;
pub use validation::validate_order;
