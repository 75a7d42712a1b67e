//! End-to-end budget flows through the public library API

use pladur_budget_lib::budget::Budget;
use pladur_budget_lib::core::{Config, DivisionSpec};
use pladur_budget_lib::export::export_divisions_csv;
use pladur_budget_lib::i18n::I18n;
use pladur_budget_lib::shell::Shell;
use rust_decimal_macros::dec;
use std::io::Cursor;

fn budget_from_specs(config: &Config, specs: &[&str]) -> Budget {
    let mut budget = Budget::new(config).unwrap();
    for (index, spec) in specs.iter().enumerate() {
        let spec: DivisionSpec = spec.parse().unwrap();
        let division = spec.into_division(&format!("Division {}", index + 1)).unwrap();
        budget.add_division(division).unwrap();
    }
    budget
}

#[test]
fn test_two_room_job_with_default_parameters() {
    let config = Config::default();
    let budget = budget_from_specs(&config, &["Sala:5x4", "Quarto:3x3"]);
    let summary = budget.summary().unwrap();

    // Quarto: 4 x 20 + 12 x 3 + 6 x 4 + 25 x 1.2 + 25 x 0.6 = 185
    let rows = budget.rows().unwrap();
    assert_eq!(rows[1].material_cost, dec!(185));

    assert_eq!(summary.materials_cost, dec!(588.4));
    assert_eq!(summary.labor_cost, dec!(435)); // 29 m2 x 15
    assert_eq!(summary.subtotal, dec!(1023.4));
    assert_eq!(summary.margin_value, dec!(204.68));
    assert_eq!(summary.final_price, dec!(1228.08));
}

#[test]
fn test_overrides_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[prices]\nboard = 10\n\n[costs]\nlabor_per_m2 = 0\nmargin_percent = 0\n",
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    let budget = budget_from_specs(&config, &["5x4"]);
    let summary = budget.summary().unwrap();

    assert_eq!(budget.divisions()[0].name, "Division 1");
    // 403.4 with boards at 10 instead of 20
    assert_eq!(summary.final_price, dec!(313.4));
}

#[test]
fn test_session_script_then_export() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("divisoes.csv");

    let script = format!(
        "set language pt\nadd 5 4 Sala\nadd 3 3 Quarto\nremove 2\nadd 2 1,2\ntotals\nexport {}\nquit\n",
        csv_path.display()
    );
    let mut shell = Shell::new(&Config::default(), I18n::new("en")).unwrap();
    let mut output = Vec::new();
    shell.run(Cursor::new(script), &mut output).unwrap();
    let output = String::from_utf8(output).unwrap();

    let names: Vec<&str> = shell.budget().divisions().iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Sala", "Divis\u{00E3}o 2"]);
    assert!(output.contains("Totais Gerais"));
    assert!(output.contains("Exportadas 2 divis\u{00F5}es"));

    let content = std::fs::read_to_string(&csv_path).unwrap();
    let mut lines = content.lines();
    assert!(lines.next().unwrap().starts_with("Nome,Largura (m)"));
    assert_eq!(lines.next().unwrap(), "Sala,5,4,20,9,18,14,63,63,403.40");
    assert!(lines.next().unwrap().starts_with("Divis\u{00E3}o 2,2,1.2,2.4,1,6.4,"));
}

#[test]
fn test_export_matches_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let config = Config::default();
    let budget = budget_from_specs(&config, &["A:2x2", "B:4x2.5", "C:10x8"]);

    export_divisions_csv(&budget.rows().unwrap(), &I18n::new("en"), &config, &path).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let boards: Vec<u64> = reader
        .records()
        .map(|r| r.unwrap()[4].parse().unwrap())
        .collect();
    let expected: Vec<u64> = budget.rows().unwrap().iter().map(|r| r.quantities.boards).collect();
    assert_eq!(boards, expected);
}
