//! Quantity types
//!
//! Widgets are counted in units, gizmos are weighed in kilograms. [`OrderedProduct`] pairs a
//! product code with the quantity of the matching unit so that a widget weighed in kilograms
//! cannot be expressed at all.

use rust_decimal::Decimal;

use super::constrained_type;
use super::error::ConstraintError;
use super::product_types::{GizmoCode, ProductCode, WidgetCode};

// =============================================================================
// UnitQuantity
// =============================================================================

/// Whole number of units in `[1, 1000]`
///
/// # Examples
///
/// ```
/// use order_placement::simple_types::UnitQuantity;
/// use rust_decimal::Decimal;
///
/// assert_eq!(UnitQuantity::create("Quantity", Decimal::from(10)).unwrap().value(), 10);
/// assert!(UnitQuantity::create("Quantity", Decimal::new(15, 1)).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UnitQuantity(u32);

const UNIT_QUANTITY_MIN: u32 = 1;
const UNIT_QUANTITY_MAX: u32 = 1000;

impl UnitQuantity {
    /// Creates a `UnitQuantity`
    ///
    /// # Errors
    ///
    /// `TooSmall` below 1, `TooBig` above 1000, `NotInt` for fractional input.
    pub fn create(field_name: &str, value: Decimal) -> Result<Self, ConstraintError> {
        constrained_type::create_integer(
            field_name,
            Self,
            UNIT_QUANTITY_MIN,
            UNIT_QUANTITY_MAX,
            value,
        )
    }

    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

// =============================================================================
// KilogramQuantity
// =============================================================================

/// Weight in kilograms in `[0.5, 100]`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KilogramQuantity(Decimal);

const KILOGRAM_QUANTITY_MIN: Decimal = Decimal::from_parts(5, 0, 0, false, 1);
const KILOGRAM_QUANTITY_MAX: Decimal = Decimal::ONE_HUNDRED;

impl KilogramQuantity {
    /// Creates a `KilogramQuantity`
    ///
    /// # Errors
    ///
    /// `TooSmall` below 0.5, `TooBig` above 100.
    pub fn create(field_name: &str, value: Decimal) -> Result<Self, ConstraintError> {
        constrained_type::create_decimal(
            field_name,
            Self,
            KILOGRAM_QUANTITY_MIN,
            KILOGRAM_QUANTITY_MAX,
            value,
        )
    }

    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }
}

// =============================================================================
// OrderQuantity
// =============================================================================

/// Quantity of an order line, tagged by unit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OrderQuantity {
    Unit(UnitQuantity),
    Kilogram(KilogramQuantity),
}

impl OrderQuantity {
    /// Creates an `OrderQuantity` in the unit required by `product_code`
    ///
    /// # Errors
    ///
    /// The errors of [`UnitQuantity::create`] for widgets or [`KilogramQuantity::create`] for
    /// gizmos.
    ///
    /// # Examples
    ///
    /// ```
    /// use order_placement::simple_types::{OrderQuantity, ProductCode};
    /// use rust_decimal::Decimal;
    ///
    /// let gizmo = ProductCode::create("ProductCode", "G123").unwrap();
    /// let quantity = OrderQuantity::create("Quantity", &gizmo, Decimal::new(25, 1)).unwrap();
    /// assert!(matches!(quantity, OrderQuantity::Kilogram(_)));
    /// ```
    pub fn create(
        field_name: &str,
        product_code: &ProductCode,
        quantity: Decimal,
    ) -> Result<Self, ConstraintError> {
        match product_code {
            ProductCode::Widget(_) => UnitQuantity::create(field_name, quantity).map(Self::Unit),
            ProductCode::Gizmo(_) => {
                KilogramQuantity::create(field_name, quantity).map(Self::Kilogram)
            }
        }
    }

    /// Returns the quantity as a decimal regardless of unit
    #[must_use]
    pub fn value(&self) -> Decimal {
        match self {
            Self::Unit(unit_quantity) => Decimal::from(unit_quantity.value()),
            Self::Kilogram(kilogram_quantity) => kilogram_quantity.value(),
        }
    }
}

// =============================================================================
// OrderedProduct
// =============================================================================

/// A product code together with a quantity in the unit that product is sold in
///
/// # Examples
///
/// ```
/// use order_placement::simple_types::{OrderedProduct, OrderQuantity, ProductCode};
/// use rust_decimal::Decimal;
///
/// let widget = ProductCode::create("ProductCode", "W1234").unwrap();
/// let ordered = OrderedProduct::create("Quantity", widget, Decimal::from(3)).unwrap();
/// assert_eq!(ordered.product_code().value(), "W1234");
/// assert!(matches!(ordered.quantity(), OrderQuantity::Unit(_)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum OrderedProduct {
    Widget {
        code: WidgetCode,
        quantity: UnitQuantity,
    },
    Gizmo {
        code: GizmoCode,
        quantity: KilogramQuantity,
    },
}

impl OrderedProduct {
    /// Pairs `product_code` with `quantity` validated in the product's unit
    ///
    /// # Errors
    ///
    /// The errors of [`OrderQuantity::create`].
    pub fn create(
        field_name: &str,
        product_code: ProductCode,
        quantity: Decimal,
    ) -> Result<Self, ConstraintError> {
        match product_code {
            ProductCode::Widget(code) => Ok(Self::Widget {
                code,
                quantity: UnitQuantity::create(field_name, quantity)?,
            }),
            ProductCode::Gizmo(code) => Ok(Self::Gizmo {
                code,
                quantity: KilogramQuantity::create(field_name, quantity)?,
            }),
        }
    }

    #[must_use]
    pub fn product_code(&self) -> ProductCode {
        match self {
            Self::Widget { code, .. } => ProductCode::Widget(code.clone()),
            Self::Gizmo { code, .. } => ProductCode::Gizmo(code.clone()),
        }
    }

    #[must_use]
    pub const fn quantity(&self) -> OrderQuantity {
        match self {
            Self::Widget { quantity, .. } => OrderQuantity::Unit(*quantity),
            Self::Gizmo { quantity, .. } => OrderQuantity::Kilogram(*quantity),
        }
    }
}
