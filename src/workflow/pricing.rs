//! Pricing stage
//!
//! Converts a [`ValidatedOrder`] into a [`PricedOrder`]. Synchronous and pure apart from the
//! injected price lookup.
//!
//! - [`to_priced_order_line`]: unit price times quantity for one line
//! - [`price_order`]: every line, then the billing total

use crate::simple_types::BillingAmount;
use crate::workflow::{
    GetProductPrice, PricedOrder, PricedOrderLine, PricingError, PricingErrorKind, ValidatedOrder,
    ValidatedOrderLine,
};

// =============================================================================
// to_priced_order_line
// =============================================================================

/// Prices one validated line
///
/// # Errors
///
/// [`PricingErrorKind::LinePriceOutOfRange`] when unit price times quantity leaves the
/// `Price` range.
///
/// # Examples
///
/// ```
/// use order_placement::simple_types::{OrderLineId, OrderedProduct, Price, ProductCode};
/// use order_placement::workflow::ValidatedOrderLine;
/// use order_placement::workflow::pricing::to_priced_order_line;
/// use rust_decimal::Decimal;
///
/// let code = ProductCode::create("ProductCode", "W1234").unwrap();
/// let line = ValidatedOrderLine::new(
///     OrderLineId::create("OrderLineId", "line-1").unwrap(),
///     OrderedProduct::create("Quantity", code, Decimal::from(3)).unwrap(),
/// );
/// let price_of = |_: &ProductCode| Price::unsafe_create(Decimal::from(10));
///
/// let priced = to_priced_order_line(&price_of, &line).unwrap();
/// assert_eq!(priced.line_price().value(), Decimal::from(30));
/// ```
pub fn to_priced_order_line<GetPrice>(
    get_product_price: &GetPrice,
    validated_order_line: &ValidatedOrderLine,
) -> Result<PricedOrderLine, PricingError>
where
    GetPrice: GetProductPrice,
{
    let quantity = validated_order_line.quantity().value();
    let unit_price = get_product_price.get_product_price(&validated_order_line.product_code());

    let line_price = unit_price.multiply(quantity).map_err(|error| {
        PricingError::new(
            PricingErrorKind::LinePriceOutOfRange,
            &format!(
                "Line {}: {}",
                validated_order_line.order_line_id().value(),
                error.message
            ),
        )
    })?;

    Ok(PricedOrderLine::new(
        validated_order_line.order_line_id().clone(),
        validated_order_line.product().clone(),
        line_price,
    ))
}

// =============================================================================
// price_order
// =============================================================================

/// Prices every line, stopping at the first line out of range, then sums the total
///
/// # Errors
///
/// - [`PricingErrorKind::LinePriceOutOfRange`] for the first offending line
/// - [`PricingErrorKind::BillingAmountOutOfRange`] when the sum exceeds the billing range
pub fn price_order<GetPrice>(
    get_product_price: &GetPrice,
    validated_order: &ValidatedOrder,
) -> Result<PricedOrder, PricingError>
where
    GetPrice: GetProductPrice,
{
    let lines = validated_order
        .lines()
        .iter()
        .map(|line| to_priced_order_line(get_product_price, line))
        .collect::<Result<Vec<_>, _>>()?;

    let line_prices: Vec<_> = lines.iter().map(|line| *line.line_price()).collect();
    let amount_to_bill = BillingAmount::sum_prices(&line_prices).map_err(|error| {
        PricingError::new(PricingErrorKind::BillingAmountOutOfRange, &error.message)
    })?;

    Ok(PricedOrder::new(
        validated_order.order_id().clone(),
        validated_order.customer_info().clone(),
        validated_order.shipping_address().clone(),
        validated_order.billing_address().clone(),
        amount_to_bill,
        lines,
    ))
}
