//! Workflow configuration
//!
//! Loaded once at startup from environment variables, with `.env` support through `dotenvy`.
//!
//! | Variable | Default |
//! |---|---|
//! | `ORDER_LOG_FILTER` | `info,order_placement=debug` |
//! | `ORDER_LOG_JSON` | `false` |
//! | `ADDRESS_SERVICE_NAME` | `AddressCheck` |
//! | `ADDRESS_SERVICE_ENDPOINT` | `http://localhost:8081/address` |

use std::env;

use thiserror::Error;

use crate::workflow::ServiceInfo;

pub const DEFAULT_LOG_FILTER: &str = "info,order_placement=debug";

const DEFAULT_ADDRESS_SERVICE_NAME: &str = "AddressCheck";
const DEFAULT_ADDRESS_SERVICE_ENDPOINT: &str = "http://localhost:8081/address";

/// Configuration loading error
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

// =============================================================================
// LoggingConfig
// =============================================================================

/// Settings for the tracing subscriber
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `EnvFilter` directives
    pub filter: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            json: false,
        }
    }
}

// =============================================================================
// WorkflowConfig
// =============================================================================

/// Everything an order placement host needs to wire the workflow
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkflowConfig {
    pub logging: LoggingConfig,
    /// Identity reported in address service failures
    pub address_service: ServiceInfo,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            address_service: ServiceInfo::new(
                DEFAULT_ADDRESS_SERVICE_NAME,
                DEFAULT_ADDRESS_SERVICE_ENDPOINT,
            ),
        }
    }
}

impl WorkflowConfig {
    /// Loads configuration from the process environment
    ///
    /// A `.env` file in the working directory is read first if present.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidValue`] when a variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidValue`] when a variable cannot be parsed.
    ///
    /// # Examples
    ///
    /// ```
    /// use order_placement::config::WorkflowConfig;
    ///
    /// let config = WorkflowConfig::from_lookup(|key| match key {
    ///     "ORDER_LOG_JSON" => Some("true".to_string()),
    ///     "ADDRESS_SERVICE_ENDPOINT" => Some("https://address.example.com".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    ///
    /// assert!(config.logging.json);
    /// assert_eq!(config.address_service.endpoint(), "https://address.example.com");
    /// assert_eq!(config.address_service.name(), "AddressCheck");
    /// ```
    pub fn from_lookup<Lookup>(lookup: Lookup) -> Result<Self, ConfigError>
    where
        Lookup: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let logging = LoggingConfig {
            filter: optional("ORDER_LOG_FILTER", DEFAULT_LOG_FILTER),
            json: lookup("ORDER_LOG_JSON")
                .map(|value| parse_bool("ORDER_LOG_JSON", &value))
                .transpose()?
                .unwrap_or(false),
        };

        let address_service = ServiceInfo::new(
            optional("ADDRESS_SERVICE_NAME", DEFAULT_ADDRESS_SERVICE_NAME),
            optional("ADDRESS_SERVICE_ENDPOINT", DEFAULT_ADDRESS_SERVICE_ENDPOINT),
        );
        Ok(Self {
            logging,
            address_service,
        })
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("'{value}' is not a boolean"),
        }),
    }
}
