//! Bounded and pattern-constrained string types
//!
//! Defines `String50`, `EmailAddress` and `ZipCode`.

use regex::Regex;
use std::sync::LazyLock;

use super::constrained_type;
use super::error::ConstraintError;

// =============================================================================
// String50
// =============================================================================

/// Non-empty string of at most 50 characters
///
/// # Examples
///
/// ```
/// use order_placement::simple_types::String50;
///
/// let name = String50::create("FirstName", "Ada").unwrap();
/// assert_eq!(name.value(), "Ada");
///
/// assert!(String50::create("FirstName", "").is_err());
/// assert!(String50::create("FirstName", &"a".repeat(51)).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct String50(String);

const STRING50_MAX_LENGTH: usize = 50;

impl String50 {
    /// Creates a `String50`
    ///
    /// # Errors
    ///
    /// `Empty` for an empty input, `TooLong` past 50 characters.
    pub fn create(field_name: &str, value: &str) -> Result<Self, ConstraintError> {
        constrained_type::create_string(field_name, Self, STRING50_MAX_LENGTH, value)
    }

    /// Creates an optional `String50`; empty input becomes `None`
    ///
    /// # Errors
    ///
    /// `TooLong` past 50 characters.
    pub fn create_option(field_name: &str, value: &str) -> Result<Option<Self>, ConstraintError> {
        constrained_type::create_string_option(field_name, Self, STRING50_MAX_LENGTH, value)
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// EmailAddress
// =============================================================================

/// Email address of at most 50 characters: a local part, a single `@`, and a domain, with no
/// whitespace
///
/// # Examples
///
/// ```
/// use order_placement::simple_types::EmailAddress;
///
/// assert!(EmailAddress::create("EmailAddress", "ada@example.com").is_ok());
/// assert!(EmailAddress::create("EmailAddress", "ada.example.com").is_err());
/// assert!(EmailAddress::create("EmailAddress", "ada@ex ample.com").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

const EMAIL_ADDRESS_MAX_LENGTH: usize = 50;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+$").expect("email address pattern is a valid regex")
});

impl EmailAddress {
    /// Creates an `EmailAddress`
    ///
    /// # Errors
    ///
    /// - `Empty` for an empty input
    /// - `TooLong` past 50 characters
    /// - `DoesNotMatch` when the input is not shaped like an address
    pub fn create(field_name: &str, value: &str) -> Result<Self, ConstraintError> {
        constrained_type::create_string(field_name, Self, EMAIL_ADDRESS_MAX_LENGTH, value)
            .and_then(|bounded| {
                constrained_type::create_like(field_name, Self, &EMAIL_PATTERN, &bounded.0)
            })
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// ZipCode
// =============================================================================

/// Five-digit US zip code
///
/// # Examples
///
/// ```
/// use order_placement::simple_types::ZipCode;
///
/// assert!(ZipCode::create("ZipCode", "10001").is_ok());
/// assert!(ZipCode::create("ZipCode", "1000").is_err());
/// assert!(ZipCode::create("ZipCode", "ddddd").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ZipCode(String);

static ZIP_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5}$").expect("zip code pattern is a valid regex"));

impl ZipCode {
    /// Creates a `ZipCode`
    ///
    /// # Errors
    ///
    /// `Empty` for an empty input, `DoesNotMatch` unless the input is exactly five digits.
    pub fn create(field_name: &str, value: &str) -> Result<Self, ConstraintError> {
        constrained_type::create_like(field_name, Self, &ZIP_CODE_PATTERN, value)
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}
