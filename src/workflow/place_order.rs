//! Order placement entry point
//!
//! Runs the stages in order and short-circuits on the first error:
//!
//! 1. [`validate_order`] (async, address checks)
//! 2. [`price_order`]
//! 3. [`acknowledge_order`]
//! 4. [`create_events`]
//!
//! Every run is wrapped in a `place_order` tracing span carrying the raw order id.

use tracing::{Instrument, debug, info, info_span, warn};

use crate::workflow::{
    CheckAddressExists, CheckProductCodeExists, CreateAcknowledgmentLetter, GetProductPrice,
    PlaceOrderError, PlaceOrderEvent, SendOrderAcknowledgment, UnvalidatedOrder,
    acknowledge_order, create_events, price_order, validate_order,
};

// =============================================================================
// PlaceOrderWorkflow
// =============================================================================

/// The workflow with its five collaborators bound
///
/// # Examples
///
/// ```
/// use order_placement::simple_types::{Price, ProductCode};
/// use order_placement::workflow::{
///     AddressValidationError, CheckedAddress, HtmlString, OrderAcknowledgment, PlaceOrderWorkflow,
///     PricedOrder, SendResult, UnvalidatedAddress, UnvalidatedCustomerInfo, UnvalidatedOrder,
///     UnvalidatedOrderLine,
/// };
/// use rust_decimal::Decimal;
///
/// let workflow = PlaceOrderWorkflow::new(
///     |_: &ProductCode| true,
///     |address: UnvalidatedAddress| async move {
///         Ok::<_, AddressValidationError>(CheckedAddress::new(address))
///     },
///     |_: &ProductCode| Price::unsafe_create(Decimal::from(10)),
///     |_: &PricedOrder| HtmlString::new("<p>Thanks</p>".to_string()),
///     |_: &OrderAcknowledgment| SendResult::Sent,
/// );
///
/// let address = UnvalidatedAddress::new(
///     "1 Main St".to_string(),
///     String::new(),
///     String::new(),
///     String::new(),
///     "Springfield".to_string(),
///     "12345".to_string(),
/// );
/// let order = UnvalidatedOrder::new(
///     "order-1".to_string(),
///     UnvalidatedCustomerInfo::new("Ada".to_string(), "Lovelace".to_string(), "ada@example.com".to_string()),
///     address.clone(),
///     address,
///     vec![UnvalidatedOrderLine::new("line-1".to_string(), "W1234".to_string(), Decimal::from(2))],
/// );
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let events = workflow.place_order(&order).await.unwrap();
/// assert_eq!(events.len(), 3);
/// # });
/// ```
#[derive(Clone, Debug)]
pub struct PlaceOrderWorkflow<CheckProduct, CheckAddress, GetPrice, CreateLetter, SendAcknowledgment>
{
    check_product_code_exists: CheckProduct,
    check_address_exists: CheckAddress,
    get_product_price: GetPrice,
    create_acknowledgment_letter: CreateLetter,
    send_acknowledgment: SendAcknowledgment,
}

impl<CheckProduct, CheckAddress, GetPrice, CreateLetter, SendAcknowledgment>
    PlaceOrderWorkflow<CheckProduct, CheckAddress, GetPrice, CreateLetter, SendAcknowledgment>
where
    CheckProduct: CheckProductCodeExists,
    CheckAddress: CheckAddressExists,
    GetPrice: GetProductPrice,
    CreateLetter: CreateAcknowledgmentLetter,
    SendAcknowledgment: SendOrderAcknowledgment,
{
    #[must_use]
    pub const fn new(
        check_product_code_exists: CheckProduct,
        check_address_exists: CheckAddress,
        get_product_price: GetPrice,
        create_acknowledgment_letter: CreateLetter,
        send_acknowledgment: SendAcknowledgment,
    ) -> Self {
        Self {
            check_product_code_exists,
            check_address_exists,
            get_product_price,
            create_acknowledgment_letter,
            send_acknowledgment,
        }
    }

    /// Places one order
    ///
    /// # Errors
    ///
    /// The first [`PlaceOrderError`] raised by any stage.
    pub async fn place_order(
        &self,
        unvalidated_order: &UnvalidatedOrder,
    ) -> Result<Vec<PlaceOrderEvent>, PlaceOrderError> {
        place_order(
            &self.check_product_code_exists,
            &self.check_address_exists,
            &self.get_product_price,
            &self.create_acknowledgment_letter,
            &self.send_acknowledgment,
            unvalidated_order,
        )
        .await
    }
}

// =============================================================================
// place_order
// =============================================================================

/// Places one order with collaborators passed per call
///
/// # Errors
///
/// - [`PlaceOrderError::Validation`] from the validation stage
/// - [`PlaceOrderError::RemoteService`] when the address service is unavailable
/// - [`PlaceOrderError::Pricing`] from the pricing stage
pub async fn place_order<CheckProduct, CheckAddress, GetPrice, CreateLetter, SendAcknowledgment>(
    check_product_code_exists: &CheckProduct,
    check_address_exists: &CheckAddress,
    get_product_price: &GetPrice,
    create_acknowledgment_letter: &CreateLetter,
    send_acknowledgment: &SendAcknowledgment,
    unvalidated_order: &UnvalidatedOrder,
) -> Result<Vec<PlaceOrderEvent>, PlaceOrderError>
where
    CheckProduct: CheckProductCodeExists,
    CheckAddress: CheckAddressExists,
    GetPrice: GetProductPrice,
    CreateLetter: CreateAcknowledgmentLetter,
    SendAcknowledgment: SendOrderAcknowledgment,
{
    let span = info_span!("place_order", order_id = %unvalidated_order.order_id());

    run_stages(
        check_product_code_exists,
        check_address_exists,
        get_product_price,
        create_acknowledgment_letter,
        send_acknowledgment,
        unvalidated_order,
    )
    .instrument(span)
    .await
}

async fn run_stages<CheckProduct, CheckAddress, GetPrice, CreateLetter, SendAcknowledgment>(
    check_product_code_exists: &CheckProduct,
    check_address_exists: &CheckAddress,
    get_product_price: &GetPrice,
    create_acknowledgment_letter: &CreateLetter,
    send_acknowledgment: &SendAcknowledgment,
    unvalidated_order: &UnvalidatedOrder,
) -> Result<Vec<PlaceOrderEvent>, PlaceOrderError>
where
    CheckProduct: CheckProductCodeExists,
    CheckAddress: CheckAddressExists,
    GetPrice: GetProductPrice,
    CreateLetter: CreateAcknowledgmentLetter,
    SendAcknowledgment: SendOrderAcknowledgment,
{
    debug!(line_count = unvalidated_order.lines().len(), "validating order");
    let validated_order =
        validate_order(check_product_code_exists, check_address_exists, unvalidated_order)
            .await
            .inspect_err(|error| debug!(%error, "validation stage failed"))?;

    debug!("pricing order");
    let priced_order = price_order(get_product_price, &validated_order)
        .inspect_err(|error| debug!(%error, "pricing stage failed"))?;

    debug!(amount_to_bill = %priced_order.amount_to_bill().value(), "acknowledging order");
    let acknowledgment_event =
        acknowledge_order(create_acknowledgment_letter, send_acknowledgment, &priced_order);
    if acknowledgment_event.is_none() {
        warn!(
            email_address = priced_order.customer_info().email_address().value(),
            "order acknowledgment was not sent"
        );
    }

    let events = create_events(&priced_order, acknowledgment_event);
    info!(event_count = events.len(), "order placed");

    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simple_types::{Price, ProductCode};
    use crate::workflow::{
        AddressValidationError, CheckedAddress, HtmlString, OrderAcknowledgment, PricedOrder,
        SendResult, UnvalidatedAddress, UnvalidatedCustomerInfo, UnvalidatedOrderLine,
    };
    use rstest::rstest;
    use rust_decimal::Decimal;

    fn unvalidated_order(product_code: &str, quantity: Decimal) -> UnvalidatedOrder {
        let address = UnvalidatedAddress::new(
            "1 Main St".to_string(),
            String::new(),
            String::new(),
            String::new(),
            "Springfield".to_string(),
            "12345".to_string(),
        );
        UnvalidatedOrder::new(
            "order-1".to_string(),
            UnvalidatedCustomerInfo::new(
                "Ada".to_string(),
                "Lovelace".to_string(),
                "ada@example.com".to_string(),
            ),
            address.clone(),
            address,
            vec![UnvalidatedOrderLine::new(
                "line-1".to_string(),
                product_code.to_string(),
                quantity,
            )],
        )
    }

    async fn accept_address(
        address: UnvalidatedAddress,
    ) -> Result<CheckedAddress, AddressValidationError> {
        Ok(CheckedAddress::new(address))
    }

    fn letter(_: &PricedOrder) -> HtmlString {
        HtmlString::new("<p/>".to_string())
    }

    #[rstest]
    #[tokio::test]
    async fn test_free_function_and_workflow_agree() {
        let order = unvalidated_order("G123", Decimal::new(15, 1));
        let price = |_: &ProductCode| Price::unsafe_create(Decimal::from(4));
        let send = |_: &OrderAcknowledgment| SendResult::NotSent;
        let any_product = |_: &ProductCode| true;

        let from_function =
            place_order(&any_product, &accept_address, &price, &letter, &send, &order)
                .await
                .unwrap();
        let workflow = PlaceOrderWorkflow::new(any_product, accept_address, price, letter, send);
        let from_workflow = workflow.place_order(&order).await.unwrap();

        assert_eq!(from_function, from_workflow);
        assert_eq!(from_function.len(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn test_pricing_error_surfaces_as_place_order_error() {
        let workflow = PlaceOrderWorkflow::new(
            |_: &ProductCode| true,
            accept_address,
            |_: &ProductCode| Price::unsafe_create(Decimal::from(1000)),
            letter,
            |_: &OrderAcknowledgment| SendResult::Sent,
        );

        let error = workflow
            .place_order(&unvalidated_order("W1234", Decimal::from(2)))
            .await
            .unwrap_err();

        assert!(error.is_pricing());
    }
}
