//! Generic smart-constructor helpers
//!
//! Every constrained type in this crate delegates to one of these functions, passing its own
//! tuple constructor. The helpers never mutate the input: a value that passes is wrapped as-is.

use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::error::{ConstraintError, ConstraintErrorKind};

/// Creates a string type bounded by `max_length` characters
///
/// # Errors
///
/// - [`ConstraintErrorKind::Empty`] when `value` is empty
/// - [`ConstraintErrorKind::TooLong`] when `value` has more than `max_length` characters
///
/// # Examples
///
/// ```
/// use order_placement::simple_types::constrained_type::create_string;
///
/// #[derive(Debug, PartialEq)]
/// struct Name(String);
///
/// assert_eq!(create_string("Name", Name, 10, "Ada").unwrap(), Name("Ada".to_string()));
/// assert!(create_string("Name", Name, 10, "").is_err());
/// ```
pub fn create_string<T, F>(
    field_name: &str,
    constructor: F,
    max_length: usize,
    value: &str,
) -> Result<T, ConstraintError>
where
    F: FnOnce(String) -> T,
{
    if value.is_empty() {
        Err(ConstraintError::new(
            ConstraintErrorKind::Empty,
            field_name,
            "Must not be empty",
        ))
    } else if value.chars().count() > max_length {
        Err(ConstraintError::new(
            ConstraintErrorKind::TooLong,
            field_name,
            &format!("Must not be more than {max_length} chars"),
        ))
    } else {
        Ok(constructor(value.to_string()))
    }
}

/// Like [`create_string`], but an empty input yields `Ok(None)`
///
/// # Errors
///
/// Returns [`ConstraintErrorKind::TooLong`] when `value` has more than `max_length` characters.
pub fn create_string_option<T, F>(
    field_name: &str,
    constructor: F,
    max_length: usize,
    value: &str,
) -> Result<Option<T>, ConstraintError>
where
    F: FnOnce(String) -> T,
{
    if value.is_empty() {
        Ok(None)
    } else {
        create_string(field_name, constructor, max_length, value).map(Some)
    }
}

/// Creates an integer type bounded by `[min_value, max_value]`
///
/// The raw input is a decimal so that fractional input can be rejected explicitly instead of
/// being truncated.
///
/// # Errors
///
/// - [`ConstraintErrorKind::TooSmall`] below `min_value`
/// - [`ConstraintErrorKind::TooBig`] above `max_value`
/// - [`ConstraintErrorKind::NotInt`] when `value` has a fractional part
pub fn create_integer<T, F>(
    field_name: &str,
    constructor: F,
    min_value: u32,
    max_value: u32,
    value: Decimal,
) -> Result<T, ConstraintError>
where
    F: FnOnce(u32) -> T,
{
    if value < Decimal::from(min_value) {
        return Err(ConstraintError::new(
            ConstraintErrorKind::TooSmall,
            field_name,
            &format!("{value} must not be less than {min_value}"),
        ));
    }
    if value > Decimal::from(max_value) {
        return Err(ConstraintError::new(
            ConstraintErrorKind::TooBig,
            field_name,
            &format!("{value} must not be greater than {max_value}"),
        ));
    }

    let not_int = || {
        ConstraintError::new(
            ConstraintErrorKind::NotInt,
            field_name,
            &format!("{value} must be an integer"),
        )
    };

    if !value.fract().is_zero() {
        return Err(not_int());
    }
    value.to_u32().map(constructor).ok_or_else(not_int)
}

/// Creates a decimal type bounded by `[min_value, max_value]`
///
/// Fractional values are accepted.
///
/// # Errors
///
/// - [`ConstraintErrorKind::TooSmall`] below `min_value`
/// - [`ConstraintErrorKind::TooBig`] above `max_value`
pub fn create_decimal<T, F>(
    field_name: &str,
    constructor: F,
    min_value: Decimal,
    max_value: Decimal,
    value: Decimal,
) -> Result<T, ConstraintError>
where
    F: FnOnce(Decimal) -> T,
{
    if value < min_value {
        Err(ConstraintError::new(
            ConstraintErrorKind::TooSmall,
            field_name,
            &format!("{value} must not be less than {min_value}"),
        ))
    } else if value > max_value {
        Err(ConstraintError::new(
            ConstraintErrorKind::TooBig,
            field_name,
            &format!("{value} must not be greater than {max_value}"),
        ))
    } else {
        Ok(constructor(value))
    }
}

/// Creates a string type that must match `pattern`
///
/// Patterns are expected to be anchored; an unanchored pattern matches substrings.
///
/// # Errors
///
/// - [`ConstraintErrorKind::Empty`] when `value` is empty
/// - [`ConstraintErrorKind::DoesNotMatch`] when `pattern` does not match
pub fn create_like<T, F>(
    field_name: &str,
    constructor: F,
    pattern: &Regex,
    value: &str,
) -> Result<T, ConstraintError>
where
    F: FnOnce(String) -> T,
{
    if value.is_empty() {
        Err(ConstraintError::new(
            ConstraintErrorKind::Empty,
            field_name,
            "Must not be empty",
        ))
    } else if pattern.is_match(value) {
        Ok(constructor(value.to_string()))
    } else {
        Err(ConstraintError::new(
            ConstraintErrorKind::DoesNotMatch,
            field_name,
            &format!("'{value}' must match the pattern '{}'", pattern.as_str()),
        ))
    }
}
