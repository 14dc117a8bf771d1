//! Property tests for the constrained value types
//!
//! 1. A successful `create` keeps the input unchanged
//! 2. Out-of-range input always fails with the matching error kind
//! 3. Aggregates stay consistent with their parts

use order_placement::simple_types::{
    BillingAmount, ConstraintErrorKind, EmailAddress, KilogramQuantity, OrderedProduct, Price,
    ProductCode, String50, UnitQuantity, ZipCode,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

// =============================================================================
// Strategies
// =============================================================================

fn valid_string50_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-zA-Z0-9 ]{1,50}").unwrap()
}

fn too_long_string_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-zA-Z0-9]{51,100}").unwrap()
}

fn valid_email_strategy() -> impl Strategy<Value = String> {
    (
        proptest::string::string_regex("[a-zA-Z0-9._%+-]{1,20}").unwrap(),
        proptest::string::string_regex("[a-zA-Z0-9-]{1,20}").unwrap(),
        proptest::string::string_regex("[a-zA-Z]{2,5}").unwrap(),
    )
        .prop_map(|(local, domain, tld)| format!("{local}@{domain}.{tld}"))
}

fn invalid_zip_code_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        proptest::string::string_regex("[0-9]{1,4}").unwrap(),
        proptest::string::string_regex("[0-9]{6,10}").unwrap(),
        proptest::string::string_regex("[a-zA-Z]{5}").unwrap()
    ]
}

/// Decimal with two fractional digits in `[low, high]` hundredths
fn hundredths_strategy(low: i64, high: i64) -> impl Strategy<Value = Decimal> {
    (low..=high).prop_map(|hundredths| Decimal::new(hundredths, 2))
}

// =============================================================================
// Strings
// =============================================================================

proptest! {
    #[test]
    fn string50_keeps_valid_input(value in valid_string50_strategy()) {
        let string50 = String50::create("Field", &value).unwrap();
        prop_assert_eq!(string50.value(), value.as_str());
    }

    #[test]
    fn string50_rejects_long_input(value in too_long_string_strategy()) {
        let error = String50::create("Field", &value).unwrap_err();
        prop_assert_eq!(error.kind, ConstraintErrorKind::TooLong);
        prop_assert_eq!(error.field_name, "Field");
    }

    #[test]
    fn string50_option_is_none_only_for_empty(value in valid_string50_strategy()) {
        prop_assert!(String50::create_option("Field", "").unwrap().is_none());
        prop_assert!(String50::create_option("Field", &value).unwrap().is_some());
    }

    #[test]
    fn email_keeps_valid_input(value in valid_email_strategy()) {
        let email = EmailAddress::create("EmailAddress", &value).unwrap();
        prop_assert_eq!(email.value(), value.as_str());
    }

    #[test]
    fn zip_code_accepts_exactly_five_digits(value in "[0-9]{5}") {
        prop_assert!(ZipCode::create("ZipCode", &value).is_ok());
    }

    #[test]
    fn zip_code_rejects_other_shapes(value in invalid_zip_code_strategy()) {
        let error = ZipCode::create("ZipCode", &value).unwrap_err();
        prop_assert_eq!(error.kind, ConstraintErrorKind::DoesNotMatch);
    }
}

// =============================================================================
// Product codes
// =============================================================================

proptest! {
    #[test]
    fn widget_codes_are_widgets(digits in "[0-9]{4}") {
        let code = format!("W{digits}");
        let product_code = ProductCode::create("ProductCode", &code).unwrap();
        prop_assert!(matches!(product_code, ProductCode::Widget(_)));
        prop_assert_eq!(product_code.value(), code.as_str());
    }

    #[test]
    fn gizmo_codes_are_gizmos(digits in "[0-9]{3}") {
        let code = format!("G{digits}");
        let product_code = ProductCode::create("ProductCode", &code).unwrap();
        prop_assert!(matches!(product_code, ProductCode::Gizmo(_)));
    }

    #[test]
    fn other_prefixes_are_unknown_format(code in "[A-FH-VX-Z0-9][A-Z0-9]{0,6}") {
        let error = ProductCode::create("ProductCode", &code).unwrap_err();
        prop_assert_eq!(error.kind, ConstraintErrorKind::UnknownFormat);
    }
}

// =============================================================================
// Quantities
// =============================================================================

proptest! {
    #[test]
    fn unit_quantity_accepts_whole_numbers_in_range(value in 1u32..=1000) {
        let quantity = UnitQuantity::create("Quantity", Decimal::from(value)).unwrap();
        prop_assert_eq!(quantity.value(), value);
    }

    #[test]
    fn unit_quantity_rejects_above_range(value in 1001u32..100_000) {
        let error = UnitQuantity::create("Quantity", Decimal::from(value)).unwrap_err();
        prop_assert_eq!(error.kind, ConstraintErrorKind::TooBig);
    }

    #[test]
    fn unit_quantity_rejects_fractions(whole in 1i64..1000, cents in 1i64..100) {
        let value = Decimal::new(whole * 100 + cents, 2);
        let error = UnitQuantity::create("Quantity", value).unwrap_err();
        prop_assert_eq!(error.kind, ConstraintErrorKind::NotInt);
    }

    #[test]
    fn kilogram_quantity_accepts_range(value in hundredths_strategy(50, 10_000)) {
        let quantity = KilogramQuantity::create("Quantity", value).unwrap();
        prop_assert_eq!(quantity.value(), value);
    }

    #[test]
    fn kilogram_quantity_rejects_below_half(value in hundredths_strategy(0, 49)) {
        let error = KilogramQuantity::create("Quantity", value).unwrap_err();
        prop_assert_eq!(error.kind, ConstraintErrorKind::TooSmall);
    }

    #[test]
    fn ordered_product_quantity_follows_code(value in 1u32..=100) {
        let widget = ProductCode::create("ProductCode", "W1234").unwrap();
        let gizmo = ProductCode::create("ProductCode", "G123").unwrap();

        let widget_line = OrderedProduct::create("Quantity", widget, Decimal::from(value)).unwrap();
        let gizmo_line = OrderedProduct::create("Quantity", gizmo, Decimal::from(value)).unwrap();

        prop_assert!(matches!(widget_line, OrderedProduct::Widget { .. }), "expected Widget line");
        prop_assert!(matches!(gizmo_line, OrderedProduct::Gizmo { .. }), "expected Gizmo line");
        prop_assert_eq!(widget_line.quantity().value(), gizmo_line.quantity().value());
    }
}

// =============================================================================
// Money
// =============================================================================

proptest! {
    #[test]
    fn price_accepts_range(value in hundredths_strategy(0, 100_000)) {
        prop_assert_eq!(Price::create(value).unwrap().value(), value);
    }

    #[test]
    fn price_multiply_matches_decimal_product(
        price in hundredths_strategy(0, 1_000),
        quantity in 1i64..=100,
    ) {
        let unit_price = Price::create(price).unwrap();
        let line_price = unit_price.multiply(Decimal::from(quantity)).unwrap();
        prop_assert_eq!(line_price.value(), price * Decimal::from(quantity));
    }

    #[test]
    fn sum_prices_equals_decimal_sum(values in prop::collection::vec(hundredths_strategy(0, 100_000), 0..10)) {
        let prices: Vec<Price> = values.iter().map(|value| Price::create(*value).unwrap()).collect();
        let expected: Decimal = values.iter().sum();

        let amount = BillingAmount::sum_prices(&prices).unwrap();

        prop_assert_eq!(amount.value(), expected);
    }

    #[test]
    fn sum_prices_above_limit_is_too_big(extra in hundredths_strategy(1, 100_000)) {
        let mut prices = vec![Price::unsafe_create(Decimal::ONE_THOUSAND); 10];
        prices.push(Price::create(extra).unwrap());

        let error = BillingAmount::sum_prices(&prices).unwrap_err();

        prop_assert_eq!(error.kind, ConstraintErrorKind::TooBig);
    }
}
