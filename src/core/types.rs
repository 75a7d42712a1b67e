//! Common types used across the application

use crate::core::{Error, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Smallest accepted room side, in meters
pub const MIN_DIMENSION_M: Decimal = dec!(0.1);

/// Parse a decimal number typed by a user.
///
/// Both `.` and `,` are accepted as the decimal separator, so `5,5` and
/// `5.5` mean the same thing.
pub fn parse_decimal(input: &str) -> Result<Decimal> {
    let normalized = input.trim().replace(',', ".");
    Decimal::from_str(&normalized)
        .map_err(|_| Error::InvalidInput(format!("'{}' is not a number", input.trim())))
}

/// A rectangular room of the job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Division {
    pub name: String,
    /// Width in meters
    #[serde(with = "rust_decimal::serde::str")]
    pub width_m: Decimal,
    /// Length in meters
    #[serde(with = "rust_decimal::serde::str")]
    pub length_m: Decimal,
}

impl Division {
    pub fn new(name: impl Into<String>, width_m: Decimal, length_m: Decimal) -> Result<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(Error::InvalidInput("division name cannot be empty".to_string()));
        }
        check_dimension("width", width_m)?;
        check_dimension("length", length_m)?;

        Ok(Self {
            name,
            width_m,
            length_m,
        })
    }
}

fn check_dimension(label: &str, value: Decimal) -> Result<()> {
    if value < MIN_DIMENSION_M {
        return Err(Error::InvalidInput(format!(
            "{} must be at least {} m (got {})",
            label, MIN_DIMENSION_M, value
        )));
    }
    Ok(())
}

/// A division as typed on the command line: `[NAME:]WIDTHxLENGTH`
#[derive(Debug, Clone, PartialEq)]
pub struct DivisionSpec {
    pub name: Option<String>,
    pub width_m: Decimal,
    pub length_m: Decimal,
}

impl DivisionSpec {
    /// Build the division, using `fallback_name` when the spec carries none
    pub fn into_division(self, fallback_name: &str) -> Result<Division> {
        let name = self.name.unwrap_or_else(|| fallback_name.to_string());
        Division::new(name, self.width_m, self.length_m)
    }
}

impl FromStr for DivisionSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (name, dims) = match s.rsplit_once(':') {
            Some((name, dims)) => {
                let name = name.trim();
                ((!name.is_empty()).then(|| name.to_string()), dims)
            }
            None => (None, s),
        };

        let (width, length) = dims
            .split_once(|c: char| c == 'x' || c == 'X' || c == '\u{00D7}')
            .ok_or_else(|| {
                Error::InvalidInput(format!("expected WIDTHxLENGTH, got '{}'", dims.trim()))
            })?;

        Ok(Self {
            name,
            width_m: parse_decimal(width)?,
            length_m: parse_decimal(length)?,
        })
    }
}

/// Material quantities needed for one division
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialQuantities {
    #[serde(with = "rust_decimal::serde::str")]
    pub area_m2: Decimal,
    pub boards: u64,
    /// Perimeter track in linear meters
    #[serde(with = "rust_decimal::serde::str")]
    pub track_m: Decimal,
    /// Support profiles, in whole units
    pub profiles: u64,
    pub rods: u64,
    pub pivots: u64,
}

/// One line of the budget: a division with its quantities and material cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DivisionRow {
    pub division: Division,
    pub quantities: MaterialQuantities,
    #[serde(with = "rust_decimal::serde::str")]
    pub material_cost: Decimal,
}

/// Totals across all divisions, with labor and margin applied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetSummary {
    pub division_count: usize,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_area_m2: Decimal,
    pub boards: u64,
    #[serde(with = "rust_decimal::serde::str")]
    pub track_m: Decimal,
    pub profiles: u64,
    pub rods: u64,
    pub pivots: u64,
    #[serde(with = "rust_decimal::serde::str")]
    pub materials_cost: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub labor_cost: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub margin_value: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub final_price: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal_accepts_comma() {
        assert_eq!(parse_decimal("5,5").unwrap(), dec!(5.5));
        assert_eq!(parse_decimal(" 4.25 ").unwrap(), dec!(4.25));
        assert!(parse_decimal("abc").is_err());
    }

    #[test]
    fn test_division_minimum_dimensions() {
        assert!(Division::new("Sala", dec!(0.1), dec!(0.1)).is_ok());
        assert!(Division::new("Sala", dec!(0.09), dec!(4)).is_err());
        assert!(Division::new("Sala", dec!(5), dec!(0)).is_err());
        assert!(Division::new("   ", dec!(5), dec!(4)).is_err());
    }

    #[test]
    fn test_division_name_is_trimmed() {
        let division = Division::new("  Quarto 1 ", dec!(3), dec!(3)).unwrap();
        assert_eq!(division.name, "Quarto 1");
    }

    #[test]
    fn test_division_spec_with_name() {
        let spec: DivisionSpec = "Sala:5x4".parse().unwrap();
        assert_eq!(spec.name.as_deref(), Some("Sala"));
        assert_eq!(spec.width_m, dec!(5));
        assert_eq!(spec.length_m, dec!(4));
    }

    #[test]
    fn test_division_spec_without_name() {
        let spec: DivisionSpec = "5,5X3.2".parse().unwrap();
        assert_eq!(spec.name, None);
        assert_eq!(spec.width_m, dec!(5.5));
        assert_eq!(spec.length_m, dec!(3.2));

        let division = spec.into_division("Division 1").unwrap();
        assert_eq!(division.name, "Division 1");
    }

    #[test]
    fn test_division_spec_rejects_garbage() {
        assert!("Sala:5".parse::<DivisionSpec>().is_err());
        assert!("Sala:ax4".parse::<DivisionSpec>().is_err());
    }
}
