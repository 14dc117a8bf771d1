//! Validation stage
//!
//! Turns an [`UnvalidatedOrder`] into a [`ValidatedOrder`]. Each step is a small conversion
//! returning `Result`, chained with `?` so the first failure stops the stage.
//!
//! Order of checks: order id, customer info, shipping address, billing address, lines.
//! The address checker is awaited for the shipping address before the billing address is
//! looked at, so a shipping failure always wins.
//!
//! # Examples
//!
//! ```
//! use order_placement::simple_types::ProductCode;
//! use order_placement::workflow::{
//!     AddressValidationError, CheckedAddress, UnvalidatedAddress, UnvalidatedCustomerInfo,
//!     UnvalidatedOrder, UnvalidatedOrderLine, validate_order,
//! };
//! use rust_decimal::Decimal;
//!
//! let address = UnvalidatedAddress::new(
//!     "123 Main St".to_string(),
//!     String::new(),
//!     String::new(),
//!     String::new(),
//!     "New York".to_string(),
//!     "10001".to_string(),
//! );
//! let order = UnvalidatedOrder::new(
//!     "order-001".to_string(),
//!     UnvalidatedCustomerInfo::new("John".to_string(), "Doe".to_string(), "john@example.com".to_string()),
//!     address.clone(),
//!     address,
//!     vec![UnvalidatedOrderLine::new("line-001".to_string(), "W1234".to_string(), Decimal::from(10))],
//! );
//!
//! let check_product = |_: &ProductCode| true;
//! let check_address = |address: UnvalidatedAddress| async move {
//!     Ok::<_, AddressValidationError>(CheckedAddress::new(address))
//! };
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let validated = validate_order(&check_product, &check_address, &order).await;
//! assert!(validated.is_ok());
//! # });
//! ```

use rust_decimal::Decimal;

use crate::compound_types::{Address, CustomerInfo};
use crate::simple_types::{OrderId, OrderLineId, OrderedProduct, ProductCode};
use crate::workflow::{
    AddressValidationError, CheckAddressExists, CheckProductCodeExists, CheckedAddress,
    PlaceOrderError, UnvalidatedAddress, UnvalidatedCustomerInfo, UnvalidatedOrder,
    UnvalidatedOrderLine, ValidatedOrder, ValidatedOrderLine, ValidationError,
    ValidationErrorKind,
};

// =============================================================================
// Field conversions
// =============================================================================

/// # Errors
///
/// `Empty` or `TooLong` for the `OrderId` field.
#[inline]
pub fn to_order_id(order_id: &str) -> Result<OrderId, ValidationError> {
    Ok(OrderId::create("OrderId", order_id)?)
}

/// # Errors
///
/// `Empty` or `TooLong` for the `OrderLineId` field.
#[inline]
pub fn to_order_line_id(order_line_id: &str) -> Result<OrderLineId, ValidationError> {
    Ok(OrderLineId::create("OrderLineId", order_line_id)?)
}

/// Validates first name, last name and email in that order
///
/// # Errors
///
/// The first failing field.
pub fn to_customer_info(
    unvalidated: &UnvalidatedCustomerInfo,
) -> Result<CustomerInfo, ValidationError> {
    Ok(CustomerInfo::create(
        unvalidated.first_name(),
        unvalidated.last_name(),
        unvalidated.email_address(),
    )?)
}

/// Converts the raw fields of an already checked address into bounded types
///
/// Field names in errors are qualified by `address_name`, e.g. `BillingAddress.ZipCode`.
///
/// # Errors
///
/// The first address field violating its constraint.
pub fn to_address(
    address_name: &str,
    checked_address: &CheckedAddress,
) -> Result<Address, ValidationError> {
    let unvalidated = checked_address.value();
    Address::create(
        unvalidated.address_line1(),
        unvalidated.address_line2(),
        unvalidated.address_line3(),
        unvalidated.address_line4(),
        unvalidated.city(),
        unvalidated.zip_code(),
    )
    .map_err(|error| {
        ValidationError::new(
            ValidationErrorKind::Constraint(error.kind),
            &format!("{address_name}.{}", error.field_name),
            &error.message,
        )
    })
}

/// Awaits the address service for one address
///
/// `field_name` names the address in the resulting error (`ShippingAddress` or
/// `BillingAddress`).
///
/// # Errors
///
/// - [`PlaceOrderError::Validation`] when the service answers `InvalidFormat` or
///   `AddressNotFound`
/// - [`PlaceOrderError::RemoteService`] when the service is unavailable
pub async fn to_checked_address<CheckAddress>(
    check_address_exists: &CheckAddress,
    field_name: &str,
    address: &UnvalidatedAddress,
) -> Result<CheckedAddress, PlaceOrderError>
where
    CheckAddress: CheckAddressExists,
{
    check_address_exists
        .check_address_exists(address.clone())
        .await
        .map_err(|error| match error {
            AddressValidationError::InvalidFormat => ValidationError::new(
                ValidationErrorKind::InvalidAddressFormat,
                field_name,
                "Address has bad format",
            )
            .into(),
            AddressValidationError::AddressNotFound => ValidationError::new(
                ValidationErrorKind::AddressNotFound,
                field_name,
                "Address not found",
            )
            .into(),
            AddressValidationError::Unavailable(remote) => PlaceOrderError::RemoteService(remote),
        })
}

/// Checks the code format first, then asks the catalog whether it exists
///
/// # Errors
///
/// - a constraint error of kind `Empty`, `DoesNotMatch` or `UnknownFormat`
/// - [`ValidationErrorKind::ProductNotFound`] when the catalog does not know the code
///
/// # Examples
///
/// ```
/// use order_placement::simple_types::ProductCode;
/// use order_placement::workflow::ValidationErrorKind;
/// use order_placement::workflow::validation::to_product_code;
///
/// let in_catalog = |_: &ProductCode| true;
/// assert!(to_product_code(&in_catalog, "W1234").is_ok());
///
/// let empty_catalog = |_: &ProductCode| false;
/// let error = to_product_code(&empty_catalog, "W9999").unwrap_err();
/// assert_eq!(error.kind(), ValidationErrorKind::ProductNotFound);
/// ```
pub fn to_product_code<CheckProduct>(
    check_product_code_exists: &CheckProduct,
    product_code: &str,
) -> Result<ProductCode, ValidationError>
where
    CheckProduct: CheckProductCodeExists,
{
    let product_code = ProductCode::create("ProductCode", product_code)?;

    if check_product_code_exists.check_product_code_exists(&product_code) {
        Ok(product_code)
    } else {
        Err(ValidationError::new(
            ValidationErrorKind::ProductNotFound,
            "ProductCode",
            &format!("Invalid: {product_code}"),
        ))
    }
}

/// Pairs a product code with its quantity, checked in the unit the code implies
///
/// # Errors
///
/// `TooSmall`, `TooBig` or `NotInt` for the `Quantity` field.
#[inline]
pub fn to_ordered_product(
    product_code: ProductCode,
    quantity: Decimal,
) -> Result<OrderedProduct, ValidationError> {
    Ok(OrderedProduct::create("Quantity", product_code, quantity)?)
}

/// Validates line id, product code and quantity of one line
///
/// # Errors
///
/// The first failing field of the line.
pub fn to_validated_order_line<CheckProduct>(
    check_product_code_exists: &CheckProduct,
    unvalidated: &UnvalidatedOrderLine,
) -> Result<ValidatedOrderLine, ValidationError>
where
    CheckProduct: CheckProductCodeExists,
{
    let order_line_id = to_order_line_id(unvalidated.order_line_id())?;
    let product_code = to_product_code(check_product_code_exists, unvalidated.product_code())?;
    let product = to_ordered_product(product_code, unvalidated.quantity())?;

    Ok(ValidatedOrderLine::new(order_line_id, product))
}

// =============================================================================
// validate_order
// =============================================================================

/// Validates a whole order
///
/// Every line is validated, and the error of the first failing line in input order is
/// returned.
///
/// # Errors
///
/// - [`PlaceOrderError::Validation`] for the first constraint, address or product failure
/// - [`PlaceOrderError::RemoteService`] when the address service is unavailable
pub async fn validate_order<CheckProduct, CheckAddress>(
    check_product_code_exists: &CheckProduct,
    check_address_exists: &CheckAddress,
    unvalidated_order: &UnvalidatedOrder,
) -> Result<ValidatedOrder, PlaceOrderError>
where
    CheckProduct: CheckProductCodeExists,
    CheckAddress: CheckAddressExists,
{
    let order_id = to_order_id(unvalidated_order.order_id())?;
    let customer_info = to_customer_info(unvalidated_order.customer_info())?;

    let checked_shipping_address = to_checked_address(
        check_address_exists,
        "ShippingAddress",
        unvalidated_order.shipping_address(),
    )
    .await?;
    let shipping_address = to_address("ShippingAddress", &checked_shipping_address)?;

    let checked_billing_address = to_checked_address(
        check_address_exists,
        "BillingAddress",
        unvalidated_order.billing_address(),
    )
    .await?;
    let billing_address = to_address("BillingAddress", &checked_billing_address)?;

    let line_results: Vec<Result<ValidatedOrderLine, ValidationError>> = unvalidated_order
        .lines()
        .iter()
        .map(|line| to_validated_order_line(check_product_code_exists, line))
        .collect();
    let lines = line_results
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ValidatedOrder::new(
        order_id,
        customer_info,
        shipping_address,
        billing_address,
        lines,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simple_types::ConstraintErrorKind;
    use crate::workflow::{RemoteServiceError, ServiceInfo};
    use rstest::rstest;
    use std::cell::RefCell;

    // =========================================================================
    // Fixtures
    // =========================================================================

    fn address(line1: &str, zip_code: &str) -> UnvalidatedAddress {
        UnvalidatedAddress::new(
            line1.to_string(),
            String::new(),
            String::new(),
            String::new(),
            "Springfield".to_string(),
            zip_code.to_string(),
        )
    }

    fn customer() -> UnvalidatedCustomerInfo {
        UnvalidatedCustomerInfo::new(
            "Ada".to_string(),
            "Lovelace".to_string(),
            "ada@example.com".to_string(),
        )
    }

    fn line(id: &str, code: &str, quantity: Decimal) -> UnvalidatedOrderLine {
        UnvalidatedOrderLine::new(id.to_string(), code.to_string(), quantity)
    }

    fn order(lines: Vec<UnvalidatedOrderLine>) -> UnvalidatedOrder {
        UnvalidatedOrder::new(
            "order-1".to_string(),
            customer(),
            address("1 Ship St", "12345"),
            address("2 Bill St", "54321"),
            lines,
        )
    }

    async fn accept_address(
        address: UnvalidatedAddress,
    ) -> Result<CheckedAddress, AddressValidationError> {
        Ok(CheckedAddress::new(address))
    }

    fn any_product(_: &ProductCode) -> bool {
        true
    }

    fn validation_error(error: PlaceOrderError) -> ValidationError {
        match error {
            PlaceOrderError::Validation(error) => error,
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    // =========================================================================
    // Field conversions
    // =========================================================================

    #[rstest]
    #[case("W1234", Decimal::from(5))]
    #[case("G123", Decimal::new(25, 1))]
    fn test_to_validated_order_line_accepts_matching_quantity(
        #[case] code: &str,
        #[case] quantity: Decimal,
    ) {
        let validated = to_validated_order_line(&any_product, &line("l1", code, quantity)).unwrap();

        assert_eq!(validated.product_code().value(), code);
        assert_eq!(validated.quantity().value(), quantity);
    }

    #[rstest]
    #[case("W1234", Decimal::new(15, 1), ConstraintErrorKind::NotInt)]
    #[case("W1234", Decimal::ZERO, ConstraintErrorKind::TooSmall)]
    #[case("G123", Decimal::from(101), ConstraintErrorKind::TooBig)]
    #[case("X9999", Decimal::ONE, ConstraintErrorKind::UnknownFormat)]
    #[case("W12", Decimal::ONE, ConstraintErrorKind::DoesNotMatch)]
    #[case("", Decimal::ONE, ConstraintErrorKind::Empty)]
    fn test_to_validated_order_line_rejects(
        #[case] code: &str,
        #[case] quantity: Decimal,
        #[case] expected: ConstraintErrorKind,
    ) {
        let error = to_validated_order_line(&any_product, &line("l1", code, quantity)).unwrap_err();

        assert_eq!(error.kind(), ValidationErrorKind::Constraint(expected));
    }

    #[rstest]
    fn test_to_product_code_unknown_to_catalog() {
        let error = to_product_code(&|_: &ProductCode| false, "G123").unwrap_err();

        assert_eq!(error.kind(), ValidationErrorKind::ProductNotFound);
        assert_eq!(error.message(), "Invalid: G123");
    }

    // =========================================================================
    // validate_order
    // =========================================================================

    #[rstest]
    #[tokio::test]
    async fn test_validate_order_success() {
        let unvalidated = order(vec![
            line("l1", "W1234", Decimal::from(2)),
            line("l2", "G123", Decimal::new(5, 1)),
        ]);

        let validated = validate_order(&any_product, &accept_address, &unvalidated)
            .await
            .unwrap();

        assert_eq!(validated.order_id().value(), "order-1");
        assert_eq!(validated.shipping_address().address_line1().value(), "1 Ship St");
        assert_eq!(validated.billing_address().zip_code().value(), "54321");
        assert_eq!(validated.lines().len(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn test_validate_order_empty_lines_is_valid() {
        let validated = validate_order(&any_product, &accept_address, &order(vec![]))
            .await
            .unwrap();

        assert!(validated.lines().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn test_validate_order_reports_first_failing_line() {
        let unvalidated = order(vec![
            line("l1", "W1234", Decimal::ONE),
            line("l2", "X1", Decimal::ONE),
            line("l3", "W1234", Decimal::from(5000)),
        ]);

        let error = validation_error(
            validate_order(&any_product, &accept_address, &unvalidated)
                .await
                .unwrap_err(),
        );

        assert_eq!(
            error.kind(),
            ValidationErrorKind::Constraint(ConstraintErrorKind::UnknownFormat)
        );
    }

    #[rstest]
    #[tokio::test]
    async fn test_validate_order_checks_every_line() {
        let seen = RefCell::new(Vec::new());
        let recording_catalog = |code: &ProductCode| {
            seen.borrow_mut().push(code.value().to_string());
            code.value() != "W0001"
        };
        let unvalidated = order(vec![
            line("l1", "W0001", Decimal::ONE),
            line("l2", "G123", Decimal::ONE),
        ]);

        let error = validation_error(
            validate_order(&recording_catalog, &accept_address, &unvalidated)
                .await
                .unwrap_err(),
        );

        assert_eq!(error.kind(), ValidationErrorKind::ProductNotFound);
        assert_eq!(*seen.borrow(), vec!["W0001".to_string(), "G123".to_string()]);
    }

    #[rstest]
    #[tokio::test]
    async fn test_validate_order_order_id_checked_before_customer() {
        let unvalidated = UnvalidatedOrder::new(
            String::new(),
            UnvalidatedCustomerInfo::new(String::new(), String::new(), String::new()),
            address("1 Ship St", "12345"),
            address("2 Bill St", "54321"),
            vec![],
        );

        let error = validation_error(
            validate_order(&any_product, &accept_address, &unvalidated)
                .await
                .unwrap_err(),
        );

        assert_eq!(error.field_name(), "OrderId");
    }

    #[rstest]
    #[tokio::test]
    async fn test_validate_order_shipping_failure_skips_billing_check() {
        let calls = RefCell::new(Vec::new());
        let check_address = |address: UnvalidatedAddress| {
            calls.borrow_mut().push(address.address_line1().to_string());
            async { Err::<CheckedAddress, _>(AddressValidationError::AddressNotFound) }
        };

        let error = validation_error(
            validate_order(&any_product, &check_address, &order(vec![]))
                .await
                .unwrap_err(),
        );

        assert_eq!(error.kind(), ValidationErrorKind::AddressNotFound);
        assert_eq!(error.field_name(), "ShippingAddress");
        assert_eq!(*calls.borrow(), vec!["1 Ship St".to_string()]);
    }

    #[rstest]
    #[tokio::test]
    async fn test_validate_order_billing_invalid_format() {
        let check_address = |address: UnvalidatedAddress| async move {
            if address.address_line1() == "2 Bill St" {
                Err(AddressValidationError::InvalidFormat)
            } else {
                Ok(CheckedAddress::new(address))
            }
        };

        let error = validation_error(
            validate_order(&any_product, &check_address, &order(vec![]))
                .await
                .unwrap_err(),
        );

        assert_eq!(error.kind(), ValidationErrorKind::InvalidAddressFormat);
        assert_eq!(error.field_name(), "BillingAddress");
    }

    #[rstest]
    #[tokio::test]
    async fn test_validate_order_checked_address_still_needs_bounded_fields() {
        let unvalidated = UnvalidatedOrder::new(
            "order-1".to_string(),
            customer(),
            address("1 Ship St", "1234"),
            address("2 Bill St", "54321"),
            vec![],
        );

        let error = validation_error(
            validate_order(&any_product, &accept_address, &unvalidated)
                .await
                .unwrap_err(),
        );

        assert_eq!(error.field_name(), "ShippingAddress.ZipCode");
        assert_eq!(
            error.kind(),
            ValidationErrorKind::Constraint(ConstraintErrorKind::DoesNotMatch)
        );
    }

    #[rstest]
    #[tokio::test]
    async fn test_validate_order_names_the_address_with_the_bad_field() {
        let unvalidated = UnvalidatedOrder::new(
            "order-1".to_string(),
            customer(),
            address("1 Ship St", "12345"),
            address("2 Bill St", "1234"),
            vec![],
        );

        let error = validation_error(
            validate_order(&any_product, &accept_address, &unvalidated)
                .await
                .unwrap_err(),
        );

        assert_eq!(error.field_name(), "BillingAddress.ZipCode");
        assert!(error.message().starts_with("'1234' must match"));
    }

    #[rstest]
    #[tokio::test]
    async fn test_validate_order_address_service_unavailable() {
        let check_address = |_: UnvalidatedAddress| async {
            Err::<CheckedAddress, _>(AddressValidationError::Unavailable(RemoteServiceError::new(
                ServiceInfo::new("AddressCheck", "http://address"),
                "connection refused",
            )))
        };

        let error = validate_order(&any_product, &check_address, &order(vec![]))
            .await
            .unwrap_err();

        assert!(error.is_remote_service());
    }
}
