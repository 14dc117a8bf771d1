//! Error DTOs

use serde::{Deserialize, Serialize};

use crate::workflow::{PlaceOrderError, PricingError, RemoteServiceError, ValidationError};

/// Serializable workflow failure, tagged by its `type` field
///
/// # Examples
///
/// ```
/// use order_placement::dto::PlaceOrderErrorDto;
/// use order_placement::simple_types::OrderId;
/// use order_placement::workflow::{PlaceOrderError, ValidationError};
///
/// let error = PlaceOrderError::from(ValidationError::from(OrderId::create("OrderId", "").unwrap_err()));
///
/// let json = serde_json::to_value(PlaceOrderErrorDto::from_domain(&error)).unwrap();
/// assert_eq!(json["type"], "Validation");
/// assert_eq!(json["kind"], "Empty");
/// assert_eq!(json["field_name"], "OrderId");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlaceOrderErrorDto {
    Validation {
        kind: String,
        field_name: String,
        message: String,
    },
    Pricing {
        kind: String,
        message: String,
    },
    RemoteService {
        service_name: String,
        service_endpoint: String,
        message: String,
    },
}

impl PlaceOrderErrorDto {
    #[must_use]
    pub fn from_domain(error: &PlaceOrderError) -> Self {
        match error {
            PlaceOrderError::Validation(error) => Self::from_validation_error(error),
            PlaceOrderError::Pricing(error) => Self::from_pricing_error(error),
            PlaceOrderError::RemoteService(error) => Self::from_remote_service_error(error),
        }
    }

    fn from_validation_error(error: &ValidationError) -> Self {
        Self::Validation {
            kind: error.kind().as_str().to_string(),
            field_name: error.field_name().to_string(),
            message: error.message().to_string(),
        }
    }

    fn from_pricing_error(error: &PricingError) -> Self {
        Self::Pricing {
            kind: error.kind().as_str().to_string(),
            message: error.message().to_string(),
        }
    }

    fn from_remote_service_error(error: &RemoteServiceError) -> Self {
        Self::RemoteService {
            service_name: error.service().name().to_string(),
            service_endpoint: error.service().endpoint().to_string(),
            message: error.exception_message().to_string(),
        }
    }
}
