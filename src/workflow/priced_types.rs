//! Priced order types

use crate::compound_types::{Address, CustomerInfo};
use crate::simple_types::{BillingAmount, OrderId, OrderLineId, OrderQuantity, OrderedProduct, Price, ProductCode};

// =============================================================================
// PricedOrderLine
// =============================================================================

/// Validated order line with its computed line price
///
/// # Examples
///
/// ```
/// use order_placement::simple_types::{OrderLineId, OrderedProduct, Price, ProductCode};
/// use order_placement::workflow::PricedOrderLine;
/// use rust_decimal::Decimal;
///
/// let code = ProductCode::create("ProductCode", "W1234").unwrap();
/// let line = PricedOrderLine::new(
///     OrderLineId::create("OrderLineId", "line-1").unwrap(),
///     OrderedProduct::create("Quantity", code, Decimal::from(2)).unwrap(),
///     Price::create(Decimal::from(20)).unwrap(),
/// );
/// assert_eq!(line.line_price().value(), Decimal::from(20));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PricedOrderLine {
    order_line_id: OrderLineId,
    product: OrderedProduct,
    line_price: Price,
}

impl PricedOrderLine {
    #[must_use]
    pub const fn new(order_line_id: OrderLineId, product: OrderedProduct, line_price: Price) -> Self {
        Self {
            order_line_id,
            product,
            line_price,
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

    #[must_use]
    pub const fn line_price(&self) -> &Price {
        &self.line_price
    }
}

// =============================================================================
// PricedOrder
// =============================================================================

/// Validated order with priced lines and the total to bill
///
/// `amount_to_bill` always equals the sum of the line prices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PricedOrder {
    order_id: OrderId,
    customer_info: CustomerInfo,
    shipping_address: Address,
    billing_address: Address,
    amount_to_bill: BillingAmount,
    lines: Vec<PricedOrderLine>,
}

impl PricedOrder {
    #[must_use]
    pub const fn new(
        order_id: OrderId,
        customer_info: CustomerInfo,
        shipping_address: Address,
        billing_address: Address,
        amount_to_bill: BillingAmount,
        lines: Vec<PricedOrderLine>,
    ) -> Self {
        Self {
            order_id,
            customer_info,
            shipping_address,
            billing_address,
            amount_to_bill,
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
    pub const fn amount_to_bill(&self) -> &BillingAmount {
        &self.amount_to_bill
    }

    #[must_use]
    pub fn lines(&self) -> &[PricedOrderLine] {
        &self.lines
    }
}
