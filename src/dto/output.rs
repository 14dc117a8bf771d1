//! Output DTOs
//!
//! Serializable forms of the workflow events. Decimal amounts are written as strings so no
//! precision is lost.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::dto::{AddressDto, CustomerInfoDto};
use crate::workflow::{
    BillableOrderPlaced, OrderAcknowledgmentSent, PlaceOrderEvent, PricedOrder, PricedOrderLine,
};

// =============================================================================
// PricedOrderLineDto
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricedOrderLineDto {
    pub order_line_id: String,
    pub product_code: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub quantity: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub line_price: Decimal,
}

impl PricedOrderLineDto {
    #[must_use]
    pub fn from_domain(line: &PricedOrderLine) -> Self {
        Self {
            order_line_id: line.order_line_id().value().to_string(),
            product_code: line.product_code().value().to_string(),
            quantity: line.quantity().value(),
            line_price: line.line_price().value(),
        }
    }
}

// =============================================================================
// OrderPlacedDto
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPlacedDto {
    pub order_id: String,
    pub customer_info: CustomerInfoDto,
    pub shipping_address: AddressDto,
    pub billing_address: AddressDto,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount_to_bill: Decimal,
    pub lines: Vec<PricedOrderLineDto>,
}

impl OrderPlacedDto {
    #[must_use]
    pub fn from_domain(order: &PricedOrder) -> Self {
        let customer = order.customer_info();
        Self {
            order_id: order.order_id().value().to_string(),
            customer_info: CustomerInfoDto {
                first_name: customer.name().first_name().value().to_string(),
                last_name: customer.name().last_name().value().to_string(),
                email_address: customer.email_address().value().to_string(),
            },
            shipping_address: AddressDto::from_address(order.shipping_address()),
            billing_address: AddressDto::from_address(order.billing_address()),
            amount_to_bill: order.amount_to_bill().value(),
            lines: order
                .lines()
                .iter()
                .map(PricedOrderLineDto::from_domain)
                .collect(),
        }
    }
}

// =============================================================================
// BillableOrderPlacedDto / OrderAcknowledgmentSentDto
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillableOrderPlacedDto {
    pub order_id: String,
    pub billing_address: AddressDto,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount_to_bill: Decimal,
}

impl BillableOrderPlacedDto {
    #[must_use]
    pub fn from_domain(event: &BillableOrderPlaced) -> Self {
        Self {
            order_id: event.order_id().value().to_string(),
            billing_address: AddressDto::from_address(event.billing_address()),
            amount_to_bill: event.amount_to_bill().value(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderAcknowledgmentSentDto {
    pub order_id: String,
    pub email_address: String,
}

impl OrderAcknowledgmentSentDto {
    #[must_use]
    pub fn from_domain(event: &OrderAcknowledgmentSent) -> Self {
        Self {
            order_id: event.order_id().value().to_string(),
            email_address: event.email_address().value().to_string(),
        }
    }
}

// =============================================================================
// PlaceOrderEventDto
// =============================================================================

/// One workflow event, tagged by its `type` field
///
/// # Examples
///
/// ```
/// use order_placement::dto::PlaceOrderEventDto;
/// use order_placement::simple_types::{EmailAddress, OrderId};
/// use order_placement::workflow::{OrderAcknowledgmentSent, PlaceOrderEvent};
///
/// let event = PlaceOrderEvent::AcknowledgmentSent(OrderAcknowledgmentSent::new(
///     OrderId::create("OrderId", "order-1").unwrap(),
///     EmailAddress::create("EmailAddress", "ada@example.com").unwrap(),
/// ));
///
/// let json = serde_json::to_value(PlaceOrderEventDto::from_domain(&event)).unwrap();
/// assert_eq!(json["type"], "AcknowledgmentSent");
/// assert_eq!(json["email_address"], "ada@example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlaceOrderEventDto {
    AcknowledgmentSent(OrderAcknowledgmentSentDto),
    OrderPlaced(OrderPlacedDto),
    BillableOrderPlaced(BillableOrderPlacedDto),
}

impl PlaceOrderEventDto {
    #[must_use]
    pub fn from_domain(event: &PlaceOrderEvent) -> Self {
        match event {
            PlaceOrderEvent::AcknowledgmentSent(event) => {
                Self::AcknowledgmentSent(OrderAcknowledgmentSentDto::from_domain(event))
            }
            PlaceOrderEvent::OrderPlaced(order) => {
                Self::OrderPlaced(OrderPlacedDto::from_domain(order))
            }
            PlaceOrderEvent::BillableOrderPlaced(event) => {
                Self::BillableOrderPlaced(BillableOrderPlacedDto::from_domain(event))
            }
        }
    }

    /// Converts a whole event list, keeping its order
    #[must_use]
    pub fn from_domain_list(events: &[PlaceOrderEvent]) -> Vec<Self> {
        events.iter().map(Self::from_domain).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compound_types::{Address, CustomerInfo};
    use crate::simple_types::{BillingAmount, OrderId, OrderLineId, OrderedProduct, Price, ProductCode};
    use rstest::rstest;

    fn priced_order() -> PricedOrder {
        let address = Address::create("1 Main St", "Unit 4", "", "", "Springfield", "12345").unwrap();
        let code = ProductCode::create("ProductCode", "G123").unwrap();
        let line = PricedOrderLine::new(
            OrderLineId::create("OrderLineId", "line-1").unwrap(),
            OrderedProduct::create("Quantity", code, Decimal::new(25, 1)).unwrap(),
            Price::create(Decimal::new(2500, 2)).unwrap(),
        );
        PricedOrder::new(
            OrderId::create("OrderId", "order-1").unwrap(),
            CustomerInfo::create("Ada", "Lovelace", "ada@example.com").unwrap(),
            address.clone(),
            address,
            BillingAmount::create(Decimal::new(2500, 2)).unwrap(),
            vec![line],
        )
    }

    #[rstest]
    fn test_order_placed_serializes_decimals_as_strings() {
        let dto = PlaceOrderEventDto::from_domain(&PlaceOrderEvent::OrderPlaced(priced_order()));

        let json = serde_json::to_value(&dto).unwrap();

        assert_eq!(json["type"], "OrderPlaced");
        assert_eq!(json["amount_to_bill"], "25.00");
        assert_eq!(json["lines"][0]["quantity"], "2.5");
        assert_eq!(json["lines"][0]["product_code"], "G123");
        assert_eq!(json["shipping_address"]["address_line2"], "Unit 4");
        assert_eq!(json["customer_info"]["last_name"], "Lovelace");
    }

    #[rstest]
    fn test_billable_event_deserializes_back() {
        let order = priced_order();
        let event = PlaceOrderEvent::BillableOrderPlaced(BillableOrderPlaced::new(
            order.order_id().clone(),
            order.billing_address().clone(),
            *order.amount_to_bill(),
        ));
        let dto = PlaceOrderEventDto::from_domain(&event);

        let json = serde_json::to_string(&dto).unwrap();
        let parsed: PlaceOrderEventDto = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, dto);
    }
}
