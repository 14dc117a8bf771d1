//! Customer identity records

use crate::simple_types::{ConstraintError, EmailAddress, String50};

// =============================================================================
// PersonalName
// =============================================================================

/// First and last name of a customer
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PersonalName {
    first_name: String50,
    last_name: String50,
}

impl PersonalName {
    /// Builds a `PersonalName` from already validated parts
    #[must_use]
    pub const fn create_from_parts(first_name: String50, last_name: String50) -> Self {
        Self {
            first_name,
            last_name,
        }
    }

    #[must_use]
    pub const fn first_name(&self) -> &String50 {
        &self.first_name
    }

    #[must_use]
    pub const fn last_name(&self) -> &String50 {
        &self.last_name
    }
}

// =============================================================================
// CustomerInfo
// =============================================================================

/// Customer name and contact address
///
/// # Examples
///
/// ```
/// use order_placement::compound_types::CustomerInfo;
///
/// let customer = CustomerInfo::create("Ada", "Lovelace", "ada@example.com").unwrap();
/// assert_eq!(customer.name().last_name().value(), "Lovelace");
/// assert_eq!(customer.email_address().value(), "ada@example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CustomerInfo {
    name: PersonalName,
    email_address: EmailAddress,
}

impl CustomerInfo {
    /// Validates each raw field in order: first name, last name, email address
    ///
    /// # Errors
    ///
    /// The first [`ConstraintError`] encountered.
    pub fn create(
        first_name: &str,
        last_name: &str,
        email_address: &str,
    ) -> Result<Self, ConstraintError> {
        let first_name = String50::create("FirstName", first_name)?;
        let last_name = String50::create("LastName", last_name)?;
        let email_address = EmailAddress::create("EmailAddress", email_address)?;

        Ok(Self::create_from_parts(
            PersonalName::create_from_parts(first_name, last_name),
            email_address,
        ))
    }

    #[must_use]
    pub const fn create_from_parts(name: PersonalName, email_address: EmailAddress) -> Self {
        Self {
            name,
            email_address,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &PersonalName {
        &self.name
    }

    #[must_use]
    pub const fn email_address(&self) -> &EmailAddress {
        &self.email_address
    }
}
