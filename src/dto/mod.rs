//! Serializable types at the workflow boundary
//!
//! - [`input`]: order form DTOs converted into [`UnvalidatedOrder`](crate::workflow::UnvalidatedOrder)
//! - [`output`]: event DTOs built from [`PlaceOrderEvent`](crate::workflow::PlaceOrderEvent)
//! - [`error`]: [`PlaceOrderErrorDto`]
//!
//! Decimal amounts in output DTOs are serialized as strings.

pub mod error;
pub mod input;
pub mod output;

pub use error::PlaceOrderErrorDto;
pub use input::{AddressDto, CustomerInfoDto, OrderFormDto, OrderFormLineDto};
pub use output::{
    BillableOrderPlacedDto, OrderAcknowledgmentSentDto, OrderPlacedDto, PlaceOrderEventDto,
    PricedOrderLineDto,
};
