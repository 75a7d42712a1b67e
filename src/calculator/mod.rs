//! Division calculator
//!
//! Derives the material quantities of a rectangular ceiling from its
//! dimensions and the assembly rules:
//! - Boards: ceiling area over the area of one board, rounded up
//! - Track: the room perimeter, in linear meters
//! - Profiles: lines across the width, each running the full length,
//!   bought in fixed-length units
//! - Threaded rods: a grid at fixed spacing on both axes, one pivot per rod

use crate::core::{AssemblyConfig, Division, Error, MaterialQuantities, Result};
use rust_decimal::prelude::*;

/// Computes material quantities for divisions under one set of assembly rules
#[derive(Debug, Clone)]
pub struct DivisionCalculator {
    assembly: AssemblyConfig,
}

impl DivisionCalculator {
    /// Create a calculator, rejecting spacings or sizes that are out of range
    pub fn new(assembly: &AssemblyConfig) -> Result<Self> {
        assembly.validate()?;
        Ok(Self {
            assembly: assembly.clone(),
        })
    }

    /// Assembly rules in use
    pub fn assembly(&self) -> &AssemblyConfig {
        &self.assembly
    }

    /// Compute the quantities for a single division
    pub fn calculate(&self, division: &Division) -> Result<MaterialQuantities> {
        let width = division.width_m;
        let length = division.length_m;

        let area_m2 = width.checked_mul(length).ok_or_else(out_of_range)?;
        let boards = ceil_count(quotient(area_m2, self.assembly.board_area_m2())?)?;

        let track_m = width
            .checked_add(length)
            .and_then(|half| half.checked_mul(Decimal::TWO))
            .ok_or_else(out_of_range)?;

        // One extra line closes the far edge
        let profile_lines = ceil_count(quotient(width, self.assembly.profile_spacing_m)?)?
            .checked_add(1)
            .ok_or_else(out_of_range)?;
        let profile_m = Decimal::from(profile_lines)
            .checked_mul(length)
            .ok_or_else(out_of_range)?;
        let profiles = ceil_count(quotient(profile_m, self.assembly.profile_length_m)?)?;

        let rods_x = ceil_count(quotient(width, self.assembly.rod_spacing_m)?)?;
        let rods_y = ceil_count(quotient(length, self.assembly.rod_spacing_m)?)?;
        let rods = rods_x.checked_mul(rods_y).ok_or_else(out_of_range)?;

        log::debug!(
            "{}: {} m2, {} boards, {} profiles, {} rods",
            division.name,
            area_m2,
            boards,
            profiles,
            rods
        );

        Ok(MaterialQuantities {
            area_m2,
            boards,
            track_m,
            profiles,
            rods,
            pivots: rods,
        })
    }
}

fn quotient(value: Decimal, by: Decimal) -> Result<Decimal> {
    value.checked_div(by).ok_or_else(out_of_range)
}

fn ceil_count(value: Decimal) -> Result<u64> {
    value.ceil().to_u64().ok_or_else(out_of_range)
}

fn out_of_range() -> Error {
    Error::InvalidInput("division is too large to calculate".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn calculator() -> DivisionCalculator {
        DivisionCalculator::new(&AssemblyConfig::default()).unwrap()
    }

    fn division(width: Decimal, length: Decimal) -> Division {
        Division::new("Sala", width, length).unwrap()
    }

    #[test]
    fn test_default_room() {
        let q = calculator().calculate(&division(dec!(5), dec!(4))).unwrap();

        assert_eq!(q.area_m2, dec!(20));
        assert_eq!(q.boards, 9); // 20 / 2.4 = 8.33
        assert_eq!(q.track_m, dec!(18));
        assert_eq!(q.profiles, 14); // (9 + 1) lines x 4 m = 40 m / 3 m
        assert_eq!(q.rods, 63); // 9 x 7
        assert_eq!(q.pivots, q.rods);
    }

    #[test]
    fn test_exact_multiples_do_not_round_up() {
        // 2.0 x 1.2 is exactly one board
        let q = calculator().calculate(&division(dec!(2.0), dec!(1.2))).unwrap();
        assert_eq!(q.boards, 1);
        assert_eq!(q.rods, 4 * 2); // 2.0 / 0.6 = 3.33 -> 4, 1.2 / 0.6 = 2

        let q = calculator().calculate(&division(dec!(4.8), dec!(1))).unwrap();
        assert_eq!(q.boards, 2);
        assert_eq!(q.profiles, 3); // 8 + 1 lines x 1 m = 9 m
        assert_eq!(q.rods, 8 * 2);
    }

    #[test]
    fn test_smallest_room() {
        let q = calculator().calculate(&division(dec!(0.1), dec!(0.1))).unwrap();

        assert_eq!(q.area_m2, dec!(0.01));
        assert_eq!(q.boards, 1);
        assert_eq!(q.track_m, dec!(0.4));
        assert_eq!(q.profiles, 1); // 2 lines x 0.1 m
        assert_eq!(q.rods, 1);
    }

    #[test]
    fn test_custom_assembly_rules() {
        let assembly = AssemblyConfig {
            profile_spacing_m: dec!(0.40),
            rod_spacing_m: dec!(1.0),
            profile_length_m: dec!(4.0),
            ..AssemblyConfig::default()
        };
        let calculator = DivisionCalculator::new(&assembly).unwrap();
        let q = calculator.calculate(&division(dec!(3), dec!(2))).unwrap();

        assert_eq!(q.boards, 3); // 6 / 2.4 = 2.5
        assert_eq!(q.profiles, 5); // (8 + 1) lines x 2 m = 18 m / 4 m = 4.5
        assert_eq!(q.rods, 6); // 3 x 2
    }

    #[test]
    fn test_rejects_invalid_assembly_rules() {
        let assembly = AssemblyConfig {
            rod_spacing_m: dec!(0.05),
            ..AssemblyConfig::default()
        };
        assert!(DivisionCalculator::new(&assembly).is_err());

        let assembly = AssemblyConfig {
            board_width_m: Decimal::ZERO,
            ..AssemblyConfig::default()
        };
        assert!(DivisionCalculator::new(&assembly).is_err());
    }

    #[test]
    fn test_width_drives_profile_lines() {
        // Swapping width and length changes profiles, not boards
        let a = calculator().calculate(&division(dec!(6), dec!(3))).unwrap();
        let b = calculator().calculate(&division(dec!(3), dec!(6))).unwrap();

        assert_eq!(a.boards, b.boards);
        assert_eq!(a.profiles, 11); // 11 lines x 3 m = 33 m / 3 m
        assert_eq!(b.profiles, 12); // 6 lines x 6 m = 36 m / 3 m
    }

    #[test]
    fn test_huge_room_is_an_error() {
        // Counts past u64
        let result = calculator().calculate(&division(dec!(10000000000), dec!(10000000000)));
        assert!(matches!(result, Err(Error::InvalidInput(_))));

        // Past the decimal range
        let result = calculator().calculate(&division(Decimal::MAX, dec!(1)));
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }
}
