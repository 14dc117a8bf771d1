//! Acknowledgment stage

use crate::workflow::{
    CreateAcknowledgmentLetter, OrderAcknowledgment, OrderAcknowledgmentSent, PricedOrder,
    SendOrderAcknowledgment, SendResult,
};

/// Renders the letter and sends it to the customer's email once
///
/// Returns the acknowledgment event only when the sender reports [`SendResult::Sent`].
/// A letter that was not sent does not fail the order.
///
/// # Examples
///
/// ```
/// use order_placement::compound_types::{Address, CustomerInfo};
/// use order_placement::simple_types::{BillingAmount, OrderId};
/// use order_placement::workflow::{
///     HtmlString, OrderAcknowledgment, PricedOrder, SendResult, acknowledge_order,
/// };
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
/// let create_letter = |_: &PricedOrder| HtmlString::new("<p>Thanks</p>".to_string());
/// let send = |_: &OrderAcknowledgment| SendResult::Sent;
///
/// let event = acknowledge_order(&create_letter, &send, &order).unwrap();
/// assert_eq!(event.email_address().value(), "ada@example.com");
/// ```
pub fn acknowledge_order<CreateLetter, SendAcknowledgment>(
    create_acknowledgment_letter: &CreateLetter,
    send_acknowledgment: &SendAcknowledgment,
    priced_order: &PricedOrder,
) -> Option<OrderAcknowledgmentSent>
where
    CreateLetter: CreateAcknowledgmentLetter,
    SendAcknowledgment: SendOrderAcknowledgment,
{
    let letter = create_acknowledgment_letter.create_acknowledgment_letter(priced_order);
    let email_address = priced_order.customer_info().email_address().clone();
    let acknowledgment = OrderAcknowledgment::new(email_address.clone(), letter);

    match send_acknowledgment.send_order_acknowledgment(&acknowledgment) {
        SendResult::Sent => Some(OrderAcknowledgmentSent::new(
            priced_order.order_id().clone(),
            email_address,
        )),
        SendResult::NotSent => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compound_types::{Address, CustomerInfo};
    use crate::simple_types::{BillingAmount, OrderId};
    use crate::workflow::HtmlString;
    use rstest::{fixture, rstest};
    use rust_decimal::Decimal;
    use std::cell::RefCell;

    #[fixture]
    fn priced_order() -> PricedOrder {
        let address = Address::create("1 Main St", "", "", "", "Springfield", "12345").unwrap();
        PricedOrder::new(
            OrderId::create("OrderId", "order-1").unwrap(),
            CustomerInfo::create("Ada", "Lovelace", "ada@example.com").unwrap(),
            address.clone(),
            address,
            BillingAmount::create(Decimal::from(20)).unwrap(),
            vec![],
        )
    }

    fn letter_for(order: &PricedOrder) -> HtmlString {
        HtmlString::new(format!("<p>Order {}</p>", order.order_id().value()))
    }

    #[rstest]
    fn test_acknowledge_order_sent(priced_order: PricedOrder) {
        let sent = RefCell::new(Vec::new());
        let send = |acknowledgment: &OrderAcknowledgment| {
            sent.borrow_mut().push(acknowledgment.clone());
            SendResult::Sent
        };

        let event = acknowledge_order(&letter_for, &send, &priced_order).unwrap();

        assert_eq!(event.order_id().value(), "order-1");
        assert_eq!(sent.borrow().len(), 1);
        assert_eq!(sent.borrow()[0].letter().value(), "<p>Order order-1</p>");
        assert_eq!(sent.borrow()[0].email_address().value(), "ada@example.com");
    }

    #[rstest]
    fn test_acknowledge_order_not_sent_yields_no_event(priced_order: PricedOrder) {
        let attempts = RefCell::new(0);
        let send = |_: &OrderAcknowledgment| {
            *attempts.borrow_mut() += 1;
            SendResult::NotSent
        };

        assert!(acknowledge_order(&letter_for, &send, &priced_order).is_none());
        assert_eq!(*attempts.borrow(), 1);
    }
}
