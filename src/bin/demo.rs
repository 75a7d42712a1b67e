//! Pladur Budget - Demo CLI
//!
//! Builds a sample three-room job with the default parameters and prints
//! the division table, the totals and the JSON report.

use std::io;

use pladur_budget_lib::budget::Budget;
use pladur_budget_lib::core::{Config, DivisionSpec};
use pladur_budget_lib::export::write_report_json;
use pladur_budget_lib::i18n::I18n;
use pladur_budget_lib::report::{render_divisions, render_params, render_summary};

const SAMPLE_JOB: &[&str] = &["Sala:5x4", "Quarto 1:3,5x3", "Corredor:1.2x6"];

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::default();
    let i18n = I18n::new(&config.general.language);

    println!("==============================================");
    println!("   {}", i18n.get("app.title"));
    println!("==============================================\n");

    // 1. Parameters
    println!("[1/3] Default parameters\n");
    println!("{}", render_params(&config, &i18n));

    // 2. Divisions
    println!("[2/3] Adding {} divisions...\n", SAMPLE_JOB.len());
    let mut budget = Budget::new(&config)?;
    for spec in SAMPLE_JOB {
        let spec: DivisionSpec = spec.parse()?;
        let index = budget.default_name_index().to_string();
        let fallback = i18n.format("division.default_name", &[("n", &index)]);
        budget.add_division(spec.into_division(&fallback)?)?;
    }
    println!("{}", render_divisions(&budget.rows()?, &i18n, &config));

    // 3. Totals
    println!("[3/3] Totals\n");
    println!("{}", render_summary(&budget.summary()?, &i18n, &config));

    println!("=== JSON report ===\n");
    write_report_json(&budget.report()?, io::stdout().lock())?;

    Ok(())
}
