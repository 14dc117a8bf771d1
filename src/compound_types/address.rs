//! Final, fully constrained postal address

use crate::simple_types::{ConstraintError, String50, ZipCode};

/// Postal address with every field in constrained form
///
/// Lines two to four are optional; an empty raw line becomes `None`.
///
/// # Examples
///
/// ```
/// use order_placement::compound_types::Address;
///
/// let address = Address::create("1 Infinite Loop", "Suite 5", "", "", "Cupertino", "95014").unwrap();
/// assert_eq!(address.address_line2().map(|line| line.value()), Some("Suite 5"));
/// assert!(address.address_line3().is_none());
/// assert_eq!(address.zip_code().value(), "95014");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[allow(clippy::struct_field_names)]
pub struct Address {
    address_line1: String50,
    address_line2: Option<String50>,
    address_line3: Option<String50>,
    address_line4: Option<String50>,
    city: String50,
    zip_code: ZipCode,
}

impl Address {
    /// Validates each raw field in declaration order
    ///
    /// # Errors
    ///
    /// The first [`ConstraintError`] encountered.
    pub fn create(
        address_line1: &str,
        address_line2: &str,
        address_line3: &str,
        address_line4: &str,
        city: &str,
        zip_code: &str,
    ) -> Result<Self, ConstraintError> {
        Ok(Self {
            address_line1: String50::create("AddressLine1", address_line1)?,
            address_line2: String50::create_option("AddressLine2", address_line2)?,
            address_line3: String50::create_option("AddressLine3", address_line3)?,
            address_line4: String50::create_option("AddressLine4", address_line4)?,
            city: String50::create("City", city)?,
            zip_code: ZipCode::create("ZipCode", zip_code)?,
        })
    }

    #[must_use]
    pub const fn address_line1(&self) -> &String50 {
        &self.address_line1
    }

    #[must_use]
    pub const fn address_line2(&self) -> Option<&String50> {
        self.address_line2.as_ref()
    }

    #[must_use]
    pub const fn address_line3(&self) -> Option<&String50> {
        self.address_line3.as_ref()
    }

    #[must_use]
    pub const fn address_line4(&self) -> Option<&String50> {
        self.address_line4.as_ref()
    }

    #[must_use]
    pub const fn city(&self) -> &String50 {
        &self.city
    }

    #[must_use]
    pub const fn zip_code(&self) -> &ZipCode {
        &self.zip_code
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simple_types::ConstraintErrorKind;
    use rstest::rstest;

    #[rstest]
    fn test_address_requires_first_line() {
        let error = Address::create("", "", "", "", "Springfield", "12345").unwrap_err();

        assert_eq!(error.field_name, "AddressLine1");
        assert_eq!(error.kind, ConstraintErrorKind::Empty);
    }

    #[rstest]
    fn test_address_optional_line_too_long() {
        let long_line = "x".repeat(51);
        let error = Address::create("1 Main St", "", &long_line, "", "Springfield", "12345").unwrap_err();

        assert_eq!(error.field_name, "AddressLine3");
        assert_eq!(error.kind, ConstraintErrorKind::TooLong);
    }

    #[rstest]
    fn test_address_rejects_bad_zip_code() {
        let error = Address::create("1 Main St", "", "", "", "Springfield", "ABCDE").unwrap_err();

        assert_eq!(error.field_name, "ZipCode");
        assert_eq!(error.kind, ConstraintErrorKind::DoesNotMatch);
    }

    #[rstest]
    fn test_address_all_lines() {
        let address = Address::create("1", "2", "3", "4", "Springfield", "12345").unwrap();

        assert_eq!(address.address_line4().unwrap().value(), "4");
        assert_eq!(address.city().value(), "Springfield");
    }
}
