//! Workflow error taxonomy
//!
//! - [`ValidationError`]: a constrained-type, product or address check failed
//! - [`PricingError`]: a line price or the order total fell outside its bounds
//! - [`RemoteServiceError`]: a collaborator service failed unexpectedly
//! - [`PlaceOrderError`]: the union returned by the workflow

use thiserror::Error;

use crate::simple_types::{ConstraintError, ConstraintErrorKind};

// =============================================================================
// ValidationError
// =============================================================================

/// Why an unvalidated order was rejected
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// A raw field violated a constrained type
    Constraint(ConstraintErrorKind),
    /// The address service rejected the address shape
    InvalidAddressFormat,
    /// The address service could not find the address
    AddressNotFound,
    /// A well-formed product code is not in the catalog
    ProductNotFound,
}

impl ValidationErrorKind {
    /// Returns the kind name used in serialized errors
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Constraint(kind) => kind.as_str(),
            Self::InvalidAddressFormat => "InvalidFormat",
            Self::AddressNotFound => "AddressNotFound",
            Self::ProductNotFound => "ProductNotFound",
        }
    }
}

/// Failure to turn raw input into a validated order
///
/// # Examples
///
/// ```
/// use order_placement::simple_types::{ConstraintErrorKind, OrderId};
/// use order_placement::workflow::{ValidationError, ValidationErrorKind};
///
/// let error: ValidationError = OrderId::create("OrderId", "").unwrap_err().into();
/// assert_eq!(error.kind(), ValidationErrorKind::Constraint(ConstraintErrorKind::Empty));
/// assert_eq!(error.field_name(), "OrderId");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{field_name}: {message}")]
pub struct ValidationError {
    kind: ValidationErrorKind,
    field_name: String,
    message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(kind: ValidationErrorKind, field_name: &str, message: &str) -> Self {
        Self {
            kind,
            field_name: field_name.to_string(),
            message: message.to_string(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ValidationErrorKind {
        self.kind
    }

    #[must_use]
    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ConstraintError> for ValidationError {
    fn from(error: ConstraintError) -> Self {
        Self {
            kind: ValidationErrorKind::Constraint(error.kind),
            field_name: error.field_name,
            message: error.message,
        }
    }
}

// =============================================================================
// PricingError
// =============================================================================

/// Which computed amount fell out of range
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PricingErrorKind {
    LinePriceOutOfRange,
    BillingAmountOutOfRange,
}

impl PricingErrorKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LinePriceOutOfRange => "LinePriceOutOfRange",
            Self::BillingAmountOutOfRange => "BillingAmountOutOfRange",
        }
    }
}

/// Failure while computing line prices or the order total
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct PricingError {
    kind: PricingErrorKind,
    message: String,
}

impl PricingError {
    #[must_use]
    pub fn new(kind: PricingErrorKind, message: &str) -> Self {
        Self {
            kind,
            message: message.to_string(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> PricingErrorKind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

// =============================================================================
// RemoteServiceError
// =============================================================================

/// Identity of an external collaborator service
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ServiceInfo {
    name: String,
    endpoint: String,
}

impl ServiceInfo {
    #[must_use]
    pub fn new(name: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            endpoint: endpoint.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Unexpected failure of a named external service
///
/// # Examples
///
/// ```
/// use order_placement::workflow::{RemoteServiceError, ServiceInfo};
///
/// let service = ServiceInfo::new("AddressCheck", "https://address.example.com");
/// let error = RemoteServiceError::new(service, "connection reset");
/// assert_eq!(error.to_string(), "AddressCheck (https://address.example.com) failed: connection reset");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{} ({}) failed: {exception_message}", service.name, service.endpoint)]
pub struct RemoteServiceError {
    service: ServiceInfo,
    exception_message: String,
}

impl RemoteServiceError {
    #[must_use]
    pub fn new(service: ServiceInfo, exception_message: impl Into<String>) -> Self {
        Self {
            service,
            exception_message: exception_message.into(),
        }
    }

    #[must_use]
    pub const fn service(&self) -> &ServiceInfo {
        &self.service
    }

    #[must_use]
    pub fn exception_message(&self) -> &str {
        &self.exception_message
    }
}

// =============================================================================
// PlaceOrderError
// =============================================================================

/// Error returned by the order placement workflow
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PlaceOrderError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("pricing error: {0}")]
    Pricing(#[from] PricingError),

    #[error("remote service error: {0}")]
    RemoteService(#[from] RemoteServiceError),
}

impl PlaceOrderError {
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    #[must_use]
    pub const fn is_pricing(&self) -> bool {
        matches!(self, Self::Pricing(_))
    }

    #[must_use]
    pub const fn is_remote_service(&self) -> bool {
        matches!(self, Self::RemoteService(_))
    }

    /// Returns the inner error's message without the category prefix
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Validation(error) => error.to_string(),
            Self::Pricing(error) => error.message().to_string(),
            Self::RemoteService(error) => error.to_string(),
        }
    }
}
