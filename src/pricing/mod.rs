//! Pricing engine for ceiling budgets
//!
//! Turns material quantities into costs and aggregates a whole job:
//! - Materials: unit prices times quantities, per division
//! - Labor: cost per square meter over the total area
//! - Margin: a percentage over materials plus labor

use crate::calculator::DivisionCalculator;
use crate::core::{
    BudgetSummary, Config, CostConfig, Division, DivisionRow, Error, MaterialQuantities, PriceConfig, Result,
};
use rust_decimal::prelude::*;

/// Round to the given decimal places using banker's rounding.
///
/// Amounts are kept exact while a budget is computed and only rounded for
/// display and export.
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Pricing engine that calculates material, labor and margin costs
#[derive(Debug, Clone)]
pub struct PricingEngine {
    prices: PriceConfig,
    costs: CostConfig,
    calculator: DivisionCalculator,
}

impl PricingEngine {
    /// Create a new pricing engine with the given configuration
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            prices: config.prices.clone(),
            costs: config.costs.clone(),
            calculator: DivisionCalculator::new(&config.assembly)?,
        })
    }

    /// Update the pricing configuration
    pub fn update_config(&mut self, config: &Config) -> Result<()> {
        *self = Self::new(config)?;
        Ok(())
    }

    /// Cost of the materials for one division
    pub fn material_cost(&self, quantities: &MaterialQuantities) -> Result<Decimal> {
        let lines = [
            (Decimal::from(quantities.boards), self.prices.board),
            (quantities.track_m, self.prices.track_per_meter),
            (Decimal::from(quantities.profiles), self.prices.profile),
            (Decimal::from(quantities.rods), self.prices.threaded_rod),
            (Decimal::from(quantities.pivots), self.prices.pivot),
        ];

        lines.iter().try_fold(Decimal::ZERO, |total, (quantity, price)| {
            quantity
                .checked_mul(*price)
                .and_then(|cost| total.checked_add(cost))
                .ok_or_else(too_large)
        })
    }

    /// Quantities and material cost for one division
    pub fn price_division(&self, division: &Division) -> Result<DivisionRow> {
        let quantities = self.calculator.calculate(division)?;
        let material_cost = self.material_cost(&quantities)?;

        Ok(DivisionRow {
            division: division.clone(),
            quantities,
            material_cost,
        })
    }

    /// Labor cost for a total ceiling area
    pub fn labor_cost(&self, area_m2: Decimal) -> Result<Decimal> {
        area_m2.checked_mul(self.costs.labor_per_m2).ok_or_else(too_large)
    }

    /// Margin amount over a subtotal
    pub fn margin_value(&self, subtotal: Decimal) -> Result<Decimal> {
        subtotal
            .checked_mul(self.costs.margin_percent)
            .and_then(|value| value.checked_div(Decimal::ONE_HUNDRED))
            .ok_or_else(too_large)
    }

    /// Aggregate all rows into the job totals
    pub fn summarize(&self, rows: &[DivisionRow]) -> Result<BudgetSummary> {
        let mut total_area_m2 = Decimal::ZERO;
        let mut boards = 0u64;
        let mut track_m = Decimal::ZERO;
        let mut profiles = 0u64;
        let mut rods = 0u64;
        let mut pivots = 0u64;
        let mut materials_cost = Decimal::ZERO;

        for row in rows {
            let q = &row.quantities;
            total_area_m2 = add_decimal(total_area_m2, q.area_m2)?;
            boards = add_count(boards, q.boards)?;
            track_m = add_decimal(track_m, q.track_m)?;
            profiles = add_count(profiles, q.profiles)?;
            rods = add_count(rods, q.rods)?;
            pivots = add_count(pivots, q.pivots)?;
            materials_cost = add_decimal(materials_cost, row.material_cost)?;
        }

        let labor_cost = self.labor_cost(total_area_m2)?;
        let subtotal = add_decimal(materials_cost, labor_cost)?;
        let margin_value = self.margin_value(subtotal)?;
        let final_price = add_decimal(subtotal, margin_value)?;

        Ok(BudgetSummary {
            division_count: rows.len(),
            total_area_m2,
            boards,
            track_m,
            profiles,
            rods,
            pivots,
            materials_cost,
            labor_cost,
            subtotal,
            margin_value,
            final_price,
        })
    }
}

fn add_count(total: u64, value: u64) -> Result<u64> {
    total.checked_add(value).ok_or_else(too_large)
}

fn add_decimal(total: Decimal, value: Decimal) -> Result<Decimal> {
    total.checked_add(value).ok_or_else(too_large)
}

fn too_large() -> Error {
    Error::InvalidInput("budget totals are too large to calculate".to_string())
}
