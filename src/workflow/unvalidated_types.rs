//! Unvalidated input types
//!
//! Raw order data as received from outside the domain. Every field holds primitive data
//! and no checks run on construction; the validation step turns these into constrained types.
//!
//! - [`UnvalidatedCustomerInfo`]
//! - [`UnvalidatedAddress`]
//! - [`UnvalidatedOrderLine`]
//! - [`UnvalidatedOrder`]

use rust_decimal::Decimal;

// =============================================================================
// UnvalidatedCustomerInfo
// =============================================================================

/// Raw customer name and email
///
/// # Examples
///
/// ```
/// use order_placement::workflow::UnvalidatedCustomerInfo;
///
/// let customer_info = UnvalidatedCustomerInfo::new(
///     "John".to_string(),
///     "Doe".to_string(),
///     "john@example.com".to_string(),
/// );
/// assert_eq!(customer_info.first_name(), "John");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnvalidatedCustomerInfo {
    first_name: String,
    last_name: String,
    email_address: String,
}

impl UnvalidatedCustomerInfo {
    #[must_use]
    pub const fn new(first_name: String, last_name: String, email_address: String) -> Self {
        Self {
            first_name,
            last_name,
            email_address,
        }
    }

    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    #[must_use]
    pub fn email_address(&self) -> &str {
        &self.email_address
    }
}

// =============================================================================
// UnvalidatedAddress
// =============================================================================

/// Raw postal address
///
/// Unused optional lines are carried as empty strings.
///
/// # Examples
///
/// ```
/// use order_placement::workflow::UnvalidatedAddress;
///
/// let address = UnvalidatedAddress::new(
///     "123 Main St".to_string(),
///     "Apt 4".to_string(),
///     String::new(),
///     String::new(),
///     "New York".to_string(),
///     "10001".to_string(),
/// );
/// assert_eq!(address.city(), "New York");
/// assert_eq!(address.address_line3(), "");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[allow(clippy::struct_field_names)]
pub struct UnvalidatedAddress {
    address_line1: String,
    address_line2: String,
    address_line3: String,
    address_line4: String,
    city: String,
    zip_code: String,
}

impl UnvalidatedAddress {
    #[must_use]
    pub const fn new(
        address_line1: String,
        address_line2: String,
        address_line3: String,
        address_line4: String,
        city: String,
        zip_code: String,
    ) -> Self {
        Self {
            address_line1,
            address_line2,
            address_line3,
            address_line4,
            city,
            zip_code,
        }
    }

    #[must_use]
    pub fn address_line1(&self) -> &str {
        &self.address_line1
    }

    #[must_use]
    pub fn address_line2(&self) -> &str {
        &self.address_line2
    }

    #[must_use]
    pub fn address_line3(&self) -> &str {
        &self.address_line3
    }

    #[must_use]
    pub fn address_line4(&self) -> &str {
        &self.address_line4
    }

    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    #[must_use]
    pub fn zip_code(&self) -> &str {
        &self.zip_code
    }
}

// =============================================================================
// UnvalidatedOrderLine
// =============================================================================

/// Raw order line: identifier, product code text and a decimal quantity
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnvalidatedOrderLine {
    order_line_id: String,
    product_code: String,
    quantity: Decimal,
}

impl UnvalidatedOrderLine {
    #[must_use]
    pub const fn new(order_line_id: String, product_code: String, quantity: Decimal) -> Self {
        Self {
            order_line_id,
            product_code,
            quantity,
        }
    }

    #[must_use]
    pub fn order_line_id(&self) -> &str {
        &self.order_line_id
    }

    #[must_use]
    pub fn product_code(&self) -> &str {
        &self.product_code
    }

    #[must_use]
    pub const fn quantity(&self) -> Decimal {
        self.quantity
    }
}

// =============================================================================
// UnvalidatedOrder
// =============================================================================

/// Raw order as submitted by a customer
///
/// # Examples
///
/// ```
/// use order_placement::workflow::{
///     UnvalidatedAddress, UnvalidatedCustomerInfo, UnvalidatedOrder, UnvalidatedOrderLine,
/// };
/// use rust_decimal::Decimal;
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
///     "order-001".to_string(),
///     UnvalidatedCustomerInfo::new("Ada".to_string(), "Lovelace".to_string(), "ada@example.com".to_string()),
///     address.clone(),
///     address,
///     vec![UnvalidatedOrderLine::new("line-1".to_string(), "W1234".to_string(), Decimal::from(2))],
/// );
/// assert_eq!(order.lines().len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnvalidatedOrder {
    order_id: String,
    customer_info: UnvalidatedCustomerInfo,
    shipping_address: UnvalidatedAddress,
    billing_address: UnvalidatedAddress,
    lines: Vec<UnvalidatedOrderLine>,
}

impl UnvalidatedOrder {
    #[must_use]
    pub const fn new(
        order_id: String,
        customer_info: UnvalidatedCustomerInfo,
        shipping_address: UnvalidatedAddress,
        billing_address: UnvalidatedAddress,
        lines: Vec<UnvalidatedOrderLine>,
    ) -> Self {
        Self {
            order_id,
            customer_info,
            shipping_address,
            billing_address,
            lines,
        }
    }

    #[must_use]
    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    #[must_use]
    pub const fn customer_info(&self) -> &UnvalidatedCustomerInfo {
        &self.customer_info
    }

    #[must_use]
    pub const fn shipping_address(&self) -> &UnvalidatedAddress {
        &self.shipping_address
    }

    #[must_use]
    pub const fn billing_address(&self) -> &UnvalidatedAddress {
        &self.billing_address
    }

    #[must_use]
    pub fn lines(&self) -> &[UnvalidatedOrderLine] {
        &self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_order_line_getters() {
        let line = UnvalidatedOrderLine::new(
            "line-1".to_string(),
            "G123".to_string(),
            Decimal::new(25, 1),
        );

        assert_eq!(line.order_line_id(), "line-1");
        assert_eq!(line.product_code(), "G123");
        assert_eq!(line.quantity(), Decimal::new(25, 1));
    }

    #[rstest]
    fn test_address_keeps_empty_optional_lines() {
        let address = UnvalidatedAddress::new(
            "1 Main St".to_string(),
            String::new(),
            String::new(),
            String::new(),
            "Springfield".to_string(),
            "12345".to_string(),
        );

        assert_eq!(address.address_line1(), "1 Main St");
        assert!(address.address_line2().is_empty());
        assert_eq!(address.zip_code(), "12345");
    }
}
