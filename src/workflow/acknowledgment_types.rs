//! Acknowledgment letter types

use crate::simple_types::EmailAddress;

/// Rendered HTML body of an acknowledgment letter
///
/// The content is opaque to the workflow.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HtmlString(String);

impl HtmlString {
    #[must_use]
    pub const fn new(html: String) -> Self {
        Self(html)
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Letter addressed to the customer's email
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderAcknowledgment {
    email_address: EmailAddress,
    letter: HtmlString,
}

impl OrderAcknowledgment {
    #[must_use]
    pub const fn new(email_address: EmailAddress, letter: HtmlString) -> Self {
        Self {
            email_address,
            letter,
        }
    }

    #[must_use]
    pub const fn email_address(&self) -> &EmailAddress {
        &self.email_address
    }

    #[must_use]
    pub const fn letter(&self) -> &HtmlString {
        &self.letter
    }
}

/// Outcome of sending an acknowledgment
///
/// `NotSent` is not an error. The order is still placed.
///
/// # Examples
///
/// ```
/// use order_placement::workflow::SendResult;
///
/// assert!(SendResult::Sent.is_sent());
/// assert!(SendResult::NotSent.is_not_sent());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendResult {
    Sent,
    NotSent,
}

impl SendResult {
    #[must_use]
    pub const fn is_sent(&self) -> bool {
        matches!(self, Self::Sent)
    }

    #[must_use]
    pub const fn is_not_sent(&self) -> bool {
        matches!(self, Self::NotSent)
    }
}
