//! Input DTOs
//!
//! Deserialized order form as it arrives at the workflow boundary.
//!
//! - [`CustomerInfoDto`]
//! - [`AddressDto`]
//! - [`OrderFormLineDto`]
//! - [`OrderFormDto`]

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};

use crate::compound_types::Address;
use crate::simple_types::{ConstraintError, ConstraintErrorKind, String50};
use crate::workflow::{
    UnvalidatedAddress, UnvalidatedCustomerInfo, UnvalidatedOrder, UnvalidatedOrderLine,
};

// =============================================================================
// CustomerInfoDto
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfoDto {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
}

impl CustomerInfoDto {
    #[must_use]
    pub fn to_unvalidated_customer_info(&self) -> UnvalidatedCustomerInfo {
        UnvalidatedCustomerInfo::new(
            self.first_name.clone(),
            self.last_name.clone(),
            self.email_address.clone(),
        )
    }
}

// =============================================================================
// AddressDto
// =============================================================================

/// Postal address on the wire
///
/// Lines two to four may be omitted and default to empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_field_names)]
pub struct AddressDto {
    pub address_line1: String,
    #[serde(default)]
    pub address_line2: String,
    #[serde(default)]
    pub address_line3: String,
    #[serde(default)]
    pub address_line4: String,
    pub city: String,
    pub zip_code: String,
}

impl AddressDto {
    #[must_use]
    pub fn to_unvalidated_address(&self) -> UnvalidatedAddress {
        UnvalidatedAddress::new(
            self.address_line1.clone(),
            self.address_line2.clone(),
            self.address_line3.clone(),
            self.address_line4.clone(),
            self.city.clone(),
            self.zip_code.clone(),
        )
    }

    /// Flattens a validated address; missing optional lines become empty strings
    #[must_use]
    pub fn from_address(address: &Address) -> Self {
        let optional_line = |line: Option<&String50>| {
            line.map_or_else(String::new, |line| line.value().to_string())
        };

        Self {
            address_line1: address.address_line1().value().to_string(),
            address_line2: optional_line(address.address_line2()),
            address_line3: optional_line(address.address_line3()),
            address_line4: optional_line(address.address_line4()),
            city: address.city().value().to_string(),
            zip_code: address.zip_code().value().to_string(),
        }
    }
}

// =============================================================================
// OrderFormLineDto
// =============================================================================

/// One order line; the quantity is a plain JSON number
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderFormLineDto {
    pub order_line_id: String,
    pub product_code: String,
    pub quantity: f64,
}

impl OrderFormLineDto {
    /// # Errors
    ///
    /// `NotDecimal` for the `Quantity` field when the number has no decimal representation.
    pub fn to_unvalidated_order_line(&self) -> Result<UnvalidatedOrderLine, ConstraintError> {
        let quantity = Decimal::from_f64(self.quantity).ok_or_else(|| {
            ConstraintError::new(
                ConstraintErrorKind::NotDecimal,
                "Quantity",
                &format!("{} is not a decimal", self.quantity),
            )
        })?;

        Ok(UnvalidatedOrderLine::new(
            self.order_line_id.clone(),
            self.product_code.clone(),
            quantity,
        ))
    }
}

// =============================================================================
// OrderFormDto
// =============================================================================

/// Complete order form
///
/// # Examples
///
/// ```
/// use order_placement::dto::OrderFormDto;
///
/// let json = r#"{
///     "order_id": "order-001",
///     "customer_info": {"first_name": "Ada", "last_name": "Lovelace", "email_address": "ada@example.com"},
///     "shipping_address": {"address_line1": "1 Main St", "city": "Springfield", "zip_code": "12345"},
///     "billing_address": {"address_line1": "1 Main St", "city": "Springfield", "zip_code": "12345"},
///     "lines": [{"order_line_id": "line-1", "product_code": "G123", "quantity": 2.5}]
/// }"#;
///
/// let form: OrderFormDto = serde_json::from_str(json).unwrap();
/// let order = form.to_unvalidated_order().unwrap();
/// assert_eq!(order.lines()[0].quantity().to_string(), "2.5");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderFormDto {
    pub order_id: String,
    pub customer_info: CustomerInfoDto,
    pub shipping_address: AddressDto,
    pub billing_address: AddressDto,
    #[serde(default)]
    pub lines: Vec<OrderFormLineDto>,
}

impl OrderFormDto {
    /// # Errors
    ///
    /// The first line whose quantity cannot be represented as a decimal.
    pub fn to_unvalidated_order(&self) -> Result<UnvalidatedOrder, ConstraintError> {
        let lines = self
            .lines
            .iter()
            .map(OrderFormLineDto::to_unvalidated_order_line)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(UnvalidatedOrder::new(
            self.order_id.clone(),
            self.customer_info.to_unvalidated_customer_info(),
            self.shipping_address.to_unvalidated_address(),
            self.billing_address.to_unvalidated_address(),
            lines,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(2.0, Decimal::from(2))]
    #[case(0.5, Decimal::new(5, 1))]
    #[case(99.75, Decimal::new(9975, 2))]
    fn test_order_line_quantity_conversion(#[case] raw: f64, #[case] expected: Decimal) {
        let line = OrderFormLineDto {
            order_line_id: "line-1".to_string(),
            product_code: "G123".to_string(),
            quantity: raw,
        };

        assert_eq!(line.to_unvalidated_order_line().unwrap().quantity(), expected);
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(1e300)]
    fn test_order_line_quantity_not_decimal(#[case] raw: f64) {
        let line = OrderFormLineDto {
            order_line_id: "line-1".to_string(),
            product_code: "W1234".to_string(),
            quantity: raw,
        };

        let error = line.to_unvalidated_order_line().unwrap_err();

        assert_eq!(error.kind, ConstraintErrorKind::NotDecimal);
        assert_eq!(error.field_name, "Quantity");
    }

    #[rstest]
    fn test_address_dto_round_trips_optional_lines() {
        let address = Address::create("1 Main St", "", "Floor 2", "", "Springfield", "12345").unwrap();

        let dto = AddressDto::from_address(&address);

        assert_eq!(dto.address_line2, "");
        assert_eq!(dto.address_line3, "Floor 2");
        assert_eq!(dto.to_unvalidated_address().address_line3(), "Floor 2");
    }
}
