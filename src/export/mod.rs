//! Budget export
//!
//! The division table goes out as CSV, one row per division with
//! translated headers. The full report (parameters, rows and totals)
//! goes out as JSON.

use crate::budget::BudgetReport;
use crate::core::{Config, DivisionRow, Error, Result};
use crate::i18n::I18n;
use crate::pricing::round_money;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Column headers of the division table
pub fn division_headers(i18n: &I18n, config: &Config) -> Vec<String> {
    let profile_length = config.assembly.profile_length_m.normalize().to_string();
    vec![
        i18n.get("column.name"),
        i18n.get("column.width"),
        i18n.get("column.length"),
        i18n.get("column.area"),
        i18n.get("column.boards"),
        i18n.get("column.track"),
        i18n.format("column.profiles", &[("length", &profile_length)]),
        i18n.get("column.rods"),
        i18n.get("column.pivots"),
        i18n.format("column.material_cost", &[("currency", &config.general.currency_symbol)]),
    ]
}

/// One division as table fields, in the order of [`division_headers`]
pub fn division_record(row: &DivisionRow) -> Vec<String> {
    let q = &row.quantities;
    vec![
        row.division.name.clone(),
        row.division.width_m.normalize().to_string(),
        row.division.length_m.normalize().to_string(),
        q.area_m2.normalize().to_string(),
        q.boards.to_string(),
        q.track_m.normalize().to_string(),
        q.profiles.to_string(),
        q.rods.to_string(),
        q.pivots.to_string(),
        format!("{:.2}", round_money(row.material_cost, 2)),
    ]
}

/// Write the division table as CSV
pub fn write_divisions_csv<W: Write>(
    rows: &[DivisionRow],
    i18n: &I18n,
    config: &Config,
    writer: W,
) -> Result<()> {
    ensure_rows(rows)?;

    let mut writer = csv::WriterBuilder::new()
        .delimiter(config.export.delimiter_byte()?)
        .from_writer(writer);

    writer.write_record(division_headers(i18n, config))?;
    for row in rows {
        writer.write_record(division_record(row))?;
    }
    writer.flush()?;

    Ok(())
}

/// Write the division table as a CSV file
pub fn export_divisions_csv(
    rows: &[DivisionRow],
    i18n: &I18n,
    config: &Config,
    path: &Path,
) -> Result<()> {
    ensure_rows(rows)?;
    let file = File::create(path)?;
    write_divisions_csv(rows, i18n, config, file)?;
    log::info!("Exported {} divisions to {}", rows.len(), path.display());
    Ok(())
}

fn ensure_rows(rows: &[DivisionRow]) -> Result<()> {
    if rows.is_empty() {
        return Err(Error::InvalidInput("there are no divisions to export".to_string()));
    }
    Ok(())
}

/// Write the full report as pretty-printed JSON
pub fn write_report_json<W: Write>(report: &BudgetReport, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, report)
        .map_err(|e| Error::Serialization(e.to_string()))?;
    writeln!(writer)?;
    Ok(())
}

/// Write the full report to a JSON file
pub fn export_report_json(report: &BudgetReport, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    write_report_json(report, file)?;
    log::info!("Saved report to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::Budget;
    use crate::core::Division;
    use rust_decimal_macros::dec;

    fn sample_budget(config: &Config) -> Budget {
        let mut budget = Budget::new(config).unwrap();
        budget
            .add_division(Division::new("Sala", dec!(5), dec!(4)).unwrap())
            .unwrap();
        budget
            .add_division(Division::new("Quarto 1", dec!(3), dec!(3)).unwrap())
            .unwrap();
        budget
    }

    fn to_string(rows: &[DivisionRow], i18n: &I18n, config: &Config) -> String {
        let mut buffer = Vec::new();
        write_divisions_csv(rows, i18n, config, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_csv_english() {
        let config = Config::default();
        let rows = sample_budget(&config).rows().unwrap();
        let csv = to_string(&rows, &I18n::new("en"), &config);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(
            lines[0],
            "Name,Width (m),Length (m),Area (m\u{00B2}),Boards (un),Track (m),Profiles 3m (un),Rods (un),Pivots (un),Materials cost (\u{20AC})"
        );
        assert_eq!(lines[1], "Sala,5,4,20,9,18,14,63,63,403.40");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_csv_portuguese_with_semicolon() {
        let mut config = Config::default();
        config.set_param("delimiter", ";").unwrap();
        let rows = sample_budget(&config).rows().unwrap();
        let csv = to_string(&rows, &I18n::new("pt"), &config);
        let lines: Vec<&str> = csv.lines().collect();

        assert!(lines[0].starts_with("Nome;Largura (m);Comprimento (m);"));
        assert!(lines[0].contains("Perfis 3m (un)"));
        assert!(lines[2].starts_with("Quarto 1;3;3;9;4;12;6;25;25;"));
    }

    #[test]
    fn test_csv_empty_is_rejected() {
        let config = Config::default();
        let mut buffer = Vec::new();
        let result = write_divisions_csv(&[], &I18n::new("en"), &config, &mut buffer);
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_csv_file_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orcamento.csv");
        let config = Config::default();
        let rows = sample_budget(&config).rows().unwrap();

        export_divisions_csv(&rows, &I18n::new("en"), &config, &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(&records[1][0], "Quarto 1");
    }

    #[test]
    fn test_json_report() {
        let config = Config::default();
        let report = sample_budget(&config).report().unwrap();
        let mut buffer = Vec::new();
        write_report_json(&report, &mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["currency"], "EUR");
        assert_eq!(value["divisions"][0]["division"]["name"], "Sala");
        assert_eq!(value["divisions"][0]["quantities"]["boards"], 9);
        assert_eq!(value["summary"]["division_count"], 2);
        assert_eq!(value["parameters"]["costs"]["margin_percent"], 20.0);
    }
}
