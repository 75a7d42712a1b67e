//! Core module - Configuration, errors, and common types

mod config;
mod error;
mod types;

pub use config::{AssemblyConfig, Config, CostConfig, ExportConfig, GeneralConfig, PriceConfig, MIN_SPACING_M, PARAM_KEYS};
pub use error::{Error, Result};
pub use types::{parse_decimal, BudgetSummary, Division, DivisionRow, DivisionSpec, MaterialQuantities, MIN_DIMENSION_M};
