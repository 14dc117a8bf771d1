//! Events emitted by a successful order placement

use crate::compound_types::Address;
use crate::simple_types::{BillingAmount, EmailAddress, OrderId};
use crate::workflow::PricedOrder;

// =============================================================================
// OrderAcknowledgmentSent
// =============================================================================

/// The acknowledgment letter reached the customer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderAcknowledgmentSent {
    order_id: OrderId,
    email_address: EmailAddress,
}

impl OrderAcknowledgmentSent {
    #[must_use]
    pub const fn new(order_id: OrderId, email_address: EmailAddress) -> Self {
        Self {
            order_id,
            email_address,
        }
    }

    #[must_use]
    pub const fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    #[must_use]
    pub const fn email_address(&self) -> &EmailAddress {
        &self.email_address
    }
}

// =============================================================================
// BillableOrderPlaced
// =============================================================================

/// Notice for the billing context; only raised for a positive amount
///
/// # Examples
///
/// ```
/// use order_placement::compound_types::Address;
/// use order_placement::simple_types::{BillingAmount, OrderId};
/// use order_placement::workflow::BillableOrderPlaced;
/// use rust_decimal::Decimal;
///
/// let event = BillableOrderPlaced::new(
///     OrderId::create("OrderId", "order-001").unwrap(),
///     Address::create("1 Main St", "", "", "", "Springfield", "12345").unwrap(),
///     BillingAmount::create(Decimal::from(1000)).unwrap(),
/// );
/// assert_eq!(event.amount_to_bill().value(), Decimal::from(1000));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BillableOrderPlaced {
    order_id: OrderId,
    billing_address: Address,
    amount_to_bill: BillingAmount,
}

impl BillableOrderPlaced {
    #[must_use]
    pub const fn new(
        order_id: OrderId,
        billing_address: Address,
        amount_to_bill: BillingAmount,
    ) -> Self {
        Self {
            order_id,
            billing_address,
            amount_to_bill,
        }
    }

    #[must_use]
    pub const fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    #[must_use]
    pub const fn billing_address(&self) -> &Address {
        &self.billing_address
    }

    #[must_use]
    pub const fn amount_to_bill(&self) -> &BillingAmount {
        &self.amount_to_bill
    }
}

// =============================================================================
// PlaceOrderEvent
// =============================================================================

/// The whole priced order, published for the shipping context
pub type OrderPlaced = PricedOrder;

/// One event produced by the workflow
///
/// A successful run yields them in the order acknowledgment, placed, billable, with the
/// first and last optional.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlaceOrderEvent {
    AcknowledgmentSent(OrderAcknowledgmentSent),
    OrderPlaced(OrderPlaced),
    BillableOrderPlaced(BillableOrderPlaced),
}

impl PlaceOrderEvent {
    #[must_use]
    pub const fn is_acknowledgment(&self) -> bool {
        matches!(self, Self::AcknowledgmentSent(_))
    }

    #[must_use]
    pub const fn is_order_placed(&self) -> bool {
        matches!(self, Self::OrderPlaced(_))
    }

    #[must_use]
    pub const fn is_billable(&self) -> bool {
        matches!(self, Self::BillableOrderPlaced(_))
    }

    /// Name of the event variant, as used in logs and serialized output
    #[must_use]
    pub const fn event_type(&self) -> &'static str {
        match self {
            Self::AcknowledgmentSent(_) => "AcknowledgmentSent",
            Self::OrderPlaced(_) => "OrderPlaced",
            Self::BillableOrderPlaced(_) => "BillableOrderPlaced",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_acknowledgment_event_predicates() {
        let event = PlaceOrderEvent::AcknowledgmentSent(OrderAcknowledgmentSent::new(
            OrderId::create("OrderId", "order-1").unwrap(),
            EmailAddress::create("EmailAddress", "ada@example.com").unwrap(),
        ));

        assert!(event.is_acknowledgment());
        assert!(!event.is_order_placed());
        assert!(!event.is_billable());
        assert_eq!(event.event_type(), "AcknowledgmentSent");
    }
}
