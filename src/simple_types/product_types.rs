//! Product code types
//!
//! A product code is either a widget (`W` plus four digits) or a gizmo (`G` plus three digits).
//! The variant decides which quantity unit an order line must use.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use super::constrained_type;
use super::error::{ConstraintError, ConstraintErrorKind};

// =============================================================================
// WidgetCode
// =============================================================================

/// Widget product code, `W` followed by four digits
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WidgetCode(String);

static WIDGET_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^W\d{4}$").expect("widget code pattern is a valid regex"));

impl WidgetCode {
    /// Creates a `WidgetCode`
    ///
    /// # Errors
    ///
    /// `Empty` for an empty input, `DoesNotMatch` unless the input is `W` plus four digits.
    pub fn create(field_name: &str, value: &str) -> Result<Self, ConstraintError> {
        constrained_type::create_like(field_name, Self, &WIDGET_CODE_PATTERN, value)
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// GizmoCode
// =============================================================================

/// Gizmo product code, `G` followed by three digits
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GizmoCode(String);

static GIZMO_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^G\d{3}$").expect("gizmo code pattern is a valid regex"));

impl GizmoCode {
    /// Creates a `GizmoCode`
    ///
    /// # Errors
    ///
    /// `Empty` for an empty input, `DoesNotMatch` unless the input is `G` plus three digits.
    pub fn create(field_name: &str, value: &str) -> Result<Self, ConstraintError> {
        constrained_type::create_like(field_name, Self, &GIZMO_CODE_PATTERN, value)
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// ProductCode
// =============================================================================

/// Product code, tagged by product family
///
/// # Examples
///
/// ```
/// use order_placement::simple_types::{ConstraintErrorKind, ProductCode};
///
/// let widget = ProductCode::create("ProductCode", "W1234").unwrap();
/// assert!(matches!(widget, ProductCode::Widget(_)));
///
/// let gizmo = ProductCode::create("ProductCode", "G123").unwrap();
/// assert!(matches!(gizmo, ProductCode::Gizmo(_)));
///
/// let error = ProductCode::create("ProductCode", "X9999").unwrap_err();
/// assert_eq!(error.kind, ConstraintErrorKind::UnknownFormat);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ProductCode {
    Widget(WidgetCode),
    Gizmo(GizmoCode),
}

impl ProductCode {
    /// Creates a `ProductCode`, dispatching on the first character
    ///
    /// # Errors
    ///
    /// - `Empty` for an empty input
    /// - `DoesNotMatch` when a `W`/`G` prefixed code has the wrong shape
    /// - `UnknownFormat` for any other prefix
    pub fn create(field_name: &str, code: &str) -> Result<Self, ConstraintError> {
        if code.is_empty() {
            Err(ConstraintError::new(
                ConstraintErrorKind::Empty,
                field_name,
                "Must not be empty",
            ))
        } else if code.starts_with('W') {
            WidgetCode::create(field_name, code).map(Self::Widget)
        } else if code.starts_with('G') {
            GizmoCode::create(field_name, code).map(Self::Gizmo)
        } else {
            Err(ConstraintError::new(
                ConstraintErrorKind::UnknownFormat,
                field_name,
                &format!("Format not recognized '{code}'"),
            ))
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Widget(widget_code) => widget_code.value(),
            Self::Gizmo(gizmo_code) => gizmo_code.value(),
        }
    }
}

impl fmt::Display for ProductCode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.value())
    }
}
