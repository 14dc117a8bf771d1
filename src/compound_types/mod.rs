//! Composite records built only from constrained values

mod address;
mod customer_info;

pub use address::Address;
pub use customer_info::{CustomerInfo, PersonalName};
