//! Terminal rendering of budgets
//!
//! Plain-text tables for the division list, the totals block and the
//! parameter listing. Amounts are shown with two decimals.

use crate::core::{BudgetSummary, Config, DivisionRow};
use crate::export::{division_headers, division_record};
use crate::i18n::I18n;
use crate::pricing::round_money;
use rust_decimal::Decimal;

/// Format an amount with two decimals and the currency symbol
pub fn money(amount: Decimal, symbol: &str) -> String {
    format!("{:.2} {}", round_money(amount, 2), symbol)
}

/// Format a length or area with two decimals
pub fn measure(value: Decimal) -> String {
    format!("{:.2}", round_money(value, 2))
}

/// Division table with a title and a position column
pub fn render_divisions(rows: &[DivisionRow], i18n: &I18n, config: &Config) -> String {
    let mut header = vec!["#".to_string()];
    header.extend(division_headers(i18n, config));

    let records: Vec<Vec<String>> = rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let mut record = vec![(index + 1).to_string()];
            record.extend(division_record(row));
            record
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for record in &records {
        for (width, field) in widths.iter_mut().zip(record) {
            *width = (*width).max(field.chars().count());
        }
    }

    let mut out = format!("== {} ==\n", i18n.get("report.divisions"));
    out.push_str(&render_line(&header, &widths));
    out.push_str(&render_line(
        &widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>(),
        &widths,
    ));
    for record in &records {
        out.push_str(&render_line(record, &widths));
    }
    out
}

// Position and name are left-aligned, numbers right-aligned
fn render_line(fields: &[String], widths: &[usize]) -> String {
    let cells: Vec<String> = fields
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(column, (field, width))| {
            let padding = " ".repeat(width.saturating_sub(field.chars().count()));
            if column < 2 {
                format!("{}{}", field, padding)
            } else {
                format!("{}{}", padding, field)
            }
        })
        .collect();
    format!("{}\n", cells.join("  ").trim_end())
}

/// Totals block: quantities, costs, margin and final client price
pub fn render_summary(summary: &BudgetSummary, i18n: &I18n, config: &Config) -> String {
    let symbol = &config.general.currency_symbol;
    let margin_label = format!(
        "{} ({}%)",
        i18n.get("totals.margin"),
        config.costs.margin_percent.normalize()
    );

    let lines = vec![
        (i18n.get("totals.area"), measure(summary.total_area_m2)),
        (i18n.get("totals.boards"), summary.boards.to_string()),
        (i18n.get("totals.track"), measure(summary.track_m)),
        (i18n.get("totals.profiles"), summary.profiles.to_string()),
        (i18n.get("totals.rods"), summary.rods.to_string()),
        (i18n.get("totals.pivots"), summary.pivots.to_string()),
        (i18n.get("totals.materials"), money(summary.materials_cost, symbol)),
        (i18n.get("totals.labor"), money(summary.labor_cost, symbol)),
        (i18n.get("totals.subtotal"), money(summary.subtotal, symbol)),
        (margin_label, money(summary.margin_value, symbol)),
        (i18n.get("totals.final_price"), money(summary.final_price, symbol)),
    ];

    let mut out = format!("== {} ==\n", i18n.get("totals.title"));
    out.push_str(&render_pairs(&lines));
    out
}

/// Current parameters with their descriptions
pub fn render_params(config: &Config, i18n: &I18n) -> String {
    let lines: Vec<(String, String)> = config
        .params()
        .into_iter()
        .map(|(key, value)| {
            (
                format!("{} [{}]", i18n.get(&format!("param.{}", key)), key),
                value,
            )
        })
        .collect();

    let mut out = format!("== {} ==\n", i18n.get("params.title"));
    out.push_str(&render_pairs(&lines));
    out
}

fn render_pairs(lines: &[(String, String)]) -> String {
    let label_width = lines.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);
    let value_width = lines.iter().map(|(_, v)| v.chars().count()).max().unwrap_or(0);

    lines
        .iter()
        .map(|(label, value)| {
            format!(
                "{}{}  {}{}\n",
                label,
                " ".repeat(label_width - label.chars().count()),
                " ".repeat(value_width - value.chars().count()),
                value
            )
        })
        .collect()
}
