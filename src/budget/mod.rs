//! Budget session
//!
//! Holds the divisions entered during a session, in entry order, together
//! with the parameters they are priced with. Nothing is persisted: rows and
//! totals are recomputed on demand, so a parameter change applies to every
//! division already entered.

use crate::core::{BudgetSummary, Config, Division, DivisionRow, Error, Result};
use crate::pricing::PricingEngine;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// In-memory budget for one job
pub struct Budget {
    divisions: Vec<Division>,
    config: Config,
    pricing: PricingEngine,
}

/// Complete budget as exported to JSON
#[derive(Debug, Clone, Serialize)]
pub struct BudgetReport {
    pub generated_at: DateTime<Utc>,
    pub currency: String,
    pub parameters: Config,
    pub divisions: Vec<DivisionRow>,
    pub summary: BudgetSummary,
}

impl Budget {
    /// Create an empty budget priced with the given configuration
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            divisions: Vec::new(),
            config: config.clone(),
            pricing: PricingEngine::new(config)?,
        })
    }

    /// Parameters in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replace the parameters. Existing divisions are kept.
    /// The change is rejected if the current divisions can no longer be priced.
    pub fn update_config(&mut self, config: &Config) -> Result<()> {
        let pricing = PricingEngine::new(config)?;
        pricing.summarize(&price_all(&pricing, &self.divisions)?)?;

        self.pricing = pricing;
        self.config = config.clone();
        Ok(())
    }

    /// Add a division and return its 1-based position
    pub fn add_division(&mut self, division: Division) -> Result<usize> {
        // Fail early if the row or the new totals cannot be computed
        let mut rows = self.rows()?;
        rows.push(self.pricing.price_division(&division)?);
        self.pricing.summarize(&rows)?;

        log::info!(
            "Added division {} ({} m x {} m)",
            division.name,
            division.width_m,
            division.length_m
        );
        self.divisions.push(division);
        Ok(self.divisions.len())
    }

    /// Remove the division at a 1-based position
    pub fn remove_division(&mut self, position: usize) -> Result<Division> {
        if position == 0 || position > self.divisions.len() {
            return Err(Error::DivisionNotFound(position));
        }
        let division = self.divisions.remove(position - 1);
        log::info!("Removed division {}", division.name);
        Ok(division)
    }

    /// Remove all divisions
    pub fn clear(&mut self) {
        log::info!("Cleared {} divisions", self.divisions.len());
        self.divisions.clear();
    }

    pub fn divisions(&self) -> &[Division] {
        &self.divisions
    }

    pub fn len(&self) -> usize {
        self.divisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.divisions.is_empty()
    }

    /// Number to use in the next default division name
    pub fn default_name_index(&self) -> usize {
        self.divisions.len() + 1
    }

    /// Quantities and material cost of every division, in entry order
    pub fn rows(&self) -> Result<Vec<DivisionRow>> {
        price_all(&self.pricing, &self.divisions)
    }

    /// Totals across all divisions
    pub fn summary(&self) -> Result<BudgetSummary> {
        self.pricing.summarize(&self.rows()?)
    }

    /// Full report: parameters, rows and totals
    pub fn report(&self) -> Result<BudgetReport> {
        let divisions = self.rows()?;
        let summary = self.pricing.summarize(&divisions)?;

        Ok(BudgetReport {
            generated_at: Utc::now(),
            currency: self.config.general.currency.clone(),
            parameters: self.config.clone(),
            divisions,
            summary,
        })
    }
}

fn price_all(pricing: &PricingEngine, divisions: &[Division]) -> Result<Vec<DivisionRow>> {
    divisions
        .iter()
        .map(|division| pricing.price_division(division))
        .collect()
}
