//! Constrained value types
//!
//! Each type wraps a primitive and can only be built through a validating `create` function,
//! so holding a value proves its invariant. Failures are reported as [`ConstraintError`] with a
//! [`ConstraintErrorKind`] from a closed set.
//!
//! # Type categories
//!
//! - **Strings**: [`String50`], [`EmailAddress`], [`ZipCode`]
//! - **Identifiers**: [`OrderId`], [`OrderLineId`]
//! - **Product codes**: [`WidgetCode`], [`GizmoCode`], [`ProductCode`]
//! - **Quantities**: [`UnitQuantity`], [`KilogramQuantity`], [`OrderQuantity`], [`OrderedProduct`]
//! - **Money**: [`Price`], [`BillingAmount`]
//!
//! # Examples
//!
//! ```
//! use order_placement::simple_types::{BillingAmount, OrderId, Price, ProductCode};
//! use rust_decimal::Decimal;
//!
//! let order_id = OrderId::create("OrderId", "order-001").unwrap();
//! assert_eq!(order_id.value(), "order-001");
//!
//! let widget = ProductCode::create("ProductCode", "W1234").unwrap();
//! assert_eq!(widget.value(), "W1234");
//!
//! let prices = [Price::create(Decimal::from(100)).unwrap(), Price::create(Decimal::from(200)).unwrap()];
//! assert_eq!(BillingAmount::sum_prices(&prices).unwrap().value(), Decimal::from(300));
//! ```

pub mod constrained_type;
mod error;
mod identifier_types;
mod price_types;
mod product_types;
mod quantity_types;
mod string_types;

pub use error::{ConstraintError, ConstraintErrorKind};
pub use identifier_types::{OrderId, OrderLineId};
pub use price_types::{BillingAmount, Price};
pub use product_types::{GizmoCode, ProductCode, WidgetCode};
pub use quantity_types::{KilogramQuantity, OrderQuantity, OrderedProduct, UnitQuantity};
pub use string_types::{EmailAddress, String50, ZipCode};
