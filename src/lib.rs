//! Pladur Budget library
//!
//! Quantity and cost calculation for suspended drywall ceilings, exposed
//! for the binaries and for tests.

pub mod budget;
pub mod calculator;
pub mod core;
pub mod export;
pub mod i18n;
pub mod pricing;
pub mod report;
pub mod shell;
