//! Event assembly
//!
//! - [`create_billing_event`]: billing notice, only for a positive amount
//! - [`create_events`]: the full ordered event list

use rust_decimal::Decimal;

use crate::workflow::{BillableOrderPlaced, OrderAcknowledgmentSent, PlaceOrderEvent, PricedOrder};

#[must_use]
pub fn create_billing_event(priced_order: &PricedOrder) -> Option<BillableOrderPlaced> {
    (priced_order.amount_to_bill().value() > Decimal::ZERO).then(|| {
        BillableOrderPlaced::new(
            priced_order.order_id().clone(),
            priced_order.billing_address().clone(),
            *priced_order.amount_to_bill(),
        )
    })
}

/// Builds the events of a placed order
///
/// Order: the acknowledgment if one was sent, then `OrderPlaced`, then `BillableOrderPlaced`
/// when there is something to bill.
///
/// # Examples
///
/// ```
/// use order_placement::compound_types::{Address, CustomerInfo};
/// use order_placement::simple_types::{BillingAmount, OrderId};
/// use order_placement::workflow::{PricedOrder, create_events};
/// use rust_decimal::Decimal;
///
/// let address = Address::create("1 Main St", "", "", "", "Springfield", "12345").unwrap();
/// let order = PricedOrder::new(
///     OrderId::create("OrderId", "order-1").unwrap(),
///     CustomerInfo::create("Ada", "Lovelace", "ada@example.com").unwrap(),
///     address.clone(),
///     address,
///     BillingAmount::create(Decimal::ZERO).unwrap(),
///     vec![],
/// );
///
/// let events = create_events(&order, None);
/// assert_eq!(events.len(), 1);
/// assert!(events[0].is_order_placed());
/// ```
#[must_use]
pub fn create_events(
    priced_order: &PricedOrder,
    acknowledgment_event: Option<OrderAcknowledgmentSent>,
) -> Vec<PlaceOrderEvent> {
    let acknowledgment_events = acknowledgment_event.map(PlaceOrderEvent::AcknowledgmentSent);
    let placed_event = PlaceOrderEvent::OrderPlaced(priced_order.clone());
    let billing_events = create_billing_event(priced_order).map(PlaceOrderEvent::BillableOrderPlaced);

    acknowledgment_events
        .into_iter()
        .chain(std::iter::once(placed_event))
        .chain(billing_events)
        .collect()
}
