//! # order-placement
//!
//! Order placement workflow built from constrained domain types.
//!
//! An untrusted order form is validated, priced and acknowledged, producing a list of domain
//! events or the first error encountered. Once a value of a domain type exists its invariants
//! hold, so later stages never re-check them.
//!
//! ## Module Structure
//!
//! - `simple_types`: constrained primitives (`String50`, `EmailAddress`, `ProductCode`, `Price`, ...)
//! - `compound_types`: `PersonalName`, `CustomerInfo`, `Address`
//! - `workflow`: pipeline stages, collaborator traits and the `PlaceOrderWorkflow` entry point
//! - `dto`: serde types for the workflow boundary
//! - `config`: environment-driven settings
//! - `telemetry`: tracing subscriber setup

#![forbid(unsafe_code)]

pub mod compound_types;
pub mod config;
pub mod dto;
pub mod simple_types;
pub mod telemetry;
pub mod workflow;
