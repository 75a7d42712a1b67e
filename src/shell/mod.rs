//! Interactive budget session
//!
//! Reads one command per line, applies it to an in-memory [`Budget`] and
//! prints the result. A failing command reports its error and the session
//! carries on.

use crate::budget::Budget;
use crate::core::{parse_decimal, Config, Division, Error, Result};
use crate::export::{export_divisions_csv, export_report_json, write_report_json};
use crate::i18n::I18n;
use crate::report::{measure, render_divisions, render_params, render_summary};
use rust_decimal::Decimal;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// A parsed session command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add {
        width: Decimal,
        length: Decimal,
        name: Option<String>,
    },
    List,
    Totals,
    Remove(usize),
    Clear,
    Set {
        key: String,
        value: String,
    },
    Params,
    Export(Option<PathBuf>),
    Json(Option<PathBuf>),
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut parts = line.split_whitespace();
        let verb = parts.next().unwrap_or_default().to_lowercase();
        let args: Vec<&str> = parts.collect();

        let command = match verb.as_str() {
            "add" => {
                if args.len() < 2 {
                    return Err(usage("add <width> <length> [name]"));
                }
                let name = args[2..].join(" ");
                Command::Add {
                    width: parse_decimal(args[0])?,
                    length: parse_decimal(args[1])?,
                    name: (!name.is_empty()).then_some(name),
                }
            }
            "list" | "ls" => Command::List,
            "totals" | "total" => Command::Totals,
            "remove" | "rm" => {
                let position = args
                    .first()
                    .and_then(|arg| arg.parse::<usize>().ok())
                    .ok_or_else(|| usage("remove <n>"))?;
                Command::Remove(position)
            }
            "clear" => Command::Clear,
            "set" => {
                if args.len() < 2 {
                    return Err(usage("set <key> <value>"));
                }
                Command::Set {
                    key: args[0].to_string(),
                    value: args[1..].join(" "),
                }
            }
            "params" => Command::Params,
            "export" => Command::Export(args.first().map(PathBuf::from)),
            "json" => Command::Json(args.first().map(PathBuf::from)),
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => {
                return Err(Error::InvalidInput(format!(
                    "unknown command '{}' (type 'help')",
                    other
                )))
            }
        };

        Ok(Some(command))
    }
}

fn usage(text: &str) -> Error {
    Error::InvalidInput(format!("usage: {}", text))
}

/// Whether the session should keep reading commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Interactive session over a budget
pub struct Shell {
    budget: Budget,
    i18n: I18n,
}

impl Shell {
    pub fn new(config: &Config, i18n: I18n) -> Result<Self> {
        Ok(Self {
            budget: Budget::new(config)?,
            i18n,
        })
    }

    pub fn budget(&self) -> &Budget {
        &self.budget
    }

    /// Run commands from `input` until it ends or a quit command
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> Result<()> {
        writeln!(out, "{}", self.i18n.get("app.title"))?;
        writeln!(out, "{}", self.i18n.get("shell.welcome"))?;

        loop {
            write!(out, "{}", self.i18n.get("shell.prompt"))?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                break;
            }

            let outcome = Command::parse(&line).and_then(|command| match command {
                Some(command) => self.execute(command, &mut out),
                None => Ok(Flow::Continue),
            });

            match outcome {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(e) => {
                    log::warn!("Command failed: {}", e);
                    let message = e.to_string();
                    writeln!(out, "{}", self.i18n.format("shell.error", &[("message", &message)]))?;
                }
            }
        }

        writeln!(out, "{}", self.i18n.get("shell.goodbye"))?;
        Ok(())
    }

    /// Apply one command and print its result
    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow> {
        match command {
            Command::Add { width, length, name } => {
                let name = name.unwrap_or_else(|| {
                    let index = self.budget.default_name_index().to_string();
                    self.i18n.format("division.default_name", &[("n", &index)])
                });
                let division = Division::new(name, width, length)?;
                let message = self.i18n.format(
                    "shell.added",
                    &[
                        ("name", &division.name),
                        ("width", &measure(division.width_m)),
                        ("length", &measure(division.length_m)),
                    ],
                );
                self.budget.add_division(division)?;
                writeln!(out, "{}", message)?;
            }
            Command::List => {
                if self.budget.is_empty() {
                    writeln!(out, "{}", self.i18n.get("shell.empty"))?;
                } else {
                    let rows = self.budget.rows()?;
                    write!(out, "{}", render_divisions(&rows, &self.i18n, self.budget.config()))?;
                }
            }
            Command::Totals => {
                if self.budget.is_empty() {
                    writeln!(out, "{}", self.i18n.get("shell.empty"))?;
                } else {
                    let config = self.budget.config();
                    let rows = self.budget.rows()?;
                    let summary = self.budget.summary()?;
                    write!(out, "{}", render_divisions(&rows, &self.i18n, config))?;
                    writeln!(out)?;
                    write!(out, "{}", render_summary(&summary, &self.i18n, config))?;
                }
            }
            Command::Remove(position) => {
                let division = self.budget.remove_division(position)?;
                writeln!(out, "{}", self.i18n.format("shell.removed", &[("name", &division.name)]))?;
            }
            Command::Clear => {
                self.budget.clear();
                writeln!(out, "{}", self.i18n.get("shell.cleared"))?;
            }
            Command::Set { key, value } => {
                let mut config = self.budget.config().clone();
                config.set_param(&key, &value)?;
                self.budget.update_config(&config)?;
                if key == "language" {
                    self.i18n.set_language(&config.general.language);
                }
                writeln!(
                    out,
                    "{}",
                    self.i18n.format("shell.param_set", &[("key", &key), ("value", &value)])
                )?;
            }
            Command::Params => {
                write!(out, "{}", render_params(self.budget.config(), &self.i18n))?;
            }
            Command::Export(path) => {
                let config = self.budget.config();
                let path = path.unwrap_or_else(|| PathBuf::from(&config.export.file_name));
                let rows = self.budget.rows()?;
                export_divisions_csv(&rows, &self.i18n, config, &path)?;
                let count = rows.len().to_string();
                let shown = path.display().to_string();
                writeln!(
                    out,
                    "{}",
                    self.i18n.format("shell.exported", &[("count", &count), ("path", &shown)])
                )?;
            }
            Command::Json(path) => {
                let report = self.budget.report()?;
                match path {
                    Some(path) => export_report_json(&report, &path)?,
                    None => write_report_json(&report, &mut *out)?,
                }
            }
            Command::Help => {
                writeln!(out, "{}", self.i18n.get("shell.help"))?;
            }
            Command::Quit => return Ok(Flow::Exit),
        }

        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Cursor;

    fn run_script(script: &str) -> (Shell, String) {
        let mut shell = Shell::new(&Config::default(), I18n::new("en")).unwrap();
        let mut out = Vec::new();
        shell.run(Cursor::new(script.to_string()), &mut out).unwrap();
        (shell, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_add() {
        assert_eq!(
            Command::parse("add 5 4,5 Sala de estar").unwrap(),
            Some(Command::Add {
                width: dec!(5),
                length: dec!(4.5),
                name: Some("Sala de estar".to_string()),
            })
        );
        assert_eq!(
            Command::parse("ADD 5 4").unwrap(),
            Some(Command::Add {
                width: dec!(5),
                length: dec!(4),
                name: None,
            })
        );
        assert!(Command::parse("add 5").is_err());
        assert!(Command::parse("add five 4").is_err());
    }

    #[test]
    fn test_parse_other_commands() {
        assert_eq!(Command::parse("   ").unwrap(), None);
        assert_eq!(Command::parse("# note").unwrap(), None);
        assert_eq!(Command::parse("rm 2").unwrap(), Some(Command::Remove(2)));
        assert_eq!(
            Command::parse("set margin 25").unwrap(),
            Some(Command::Set {
                key: "margin".to_string(),
                value: "25".to_string(),
            })
        );
        assert_eq!(Command::parse("export").unwrap(), Some(Command::Export(None)));
        assert_eq!(Command::parse("exit").unwrap(), Some(Command::Quit));
        assert!(Command::parse("remove x").is_err());
        assert!(Command::parse("fly").is_err());
    }

    #[test]
    fn test_session_add_and_totals() {
        let (shell, output) = run_script("add 5 4 Sala\nadd 3 3\ntotals\nquit\n");

        assert_eq!(shell.budget().len(), 2);
        assert_eq!(shell.budget().divisions()[1].name, "Division 2");
        assert!(output.contains("Added: Sala (5.00 m \u{00D7} 4.00 m)"));
        assert!(output.contains("== Totals =="));
        assert!(output.contains("Bye."));
    }

    #[test]
    fn test_session_continues_after_error() {
        let (shell, output) = run_script("add 0.05 4\nremove 3\nadd 5 4\n");

        assert_eq!(shell.budget().len(), 1);
        assert!(output.contains("Error: Invalid input: width must be at least 0.1 m"));
        assert!(output.contains("Error: Division not found: #3"));
    }

    #[test]
    fn test_session_set_reprices() {
        let (shell, output) = run_script("add 5 4\nset margin 0\nset rod-spacing 0.01\n");

        assert_eq!(shell.budget().summary().unwrap().final_price, dec!(703.4));
        assert!(output.contains("margin = 0"));
        assert!(output.contains("Error: Configuration error: rod-spacing"));
    }

    #[test]
    fn test_session_survives_price_overflow() {
        let (shell, output) = run_script(
            "set board 79228162514264337593543950335\nadd 5 4\nset board 20\nadd 5 4\ntotals\n",
        );

        assert!(output.contains("Error: Invalid input: budget totals are too large to calculate"));
        assert_eq!(shell.budget().len(), 1);
        assert_eq!(shell.budget().summary().unwrap().final_price, dec!(844.08));
    }

    #[test]
    fn test_session_language_switch() {
        let (_, output) = run_script("set language pt\nlist\nadd 5 4 Sala\nlist\n");
        assert!(output.contains("Ainda n\u{00E3}o h\u{00E1} divis\u{00F5}es"));
        assert!(output.contains("== Divis\u{00F5}es =="));
    }

    #[test]
    fn test_session_clear_and_empty_export() {
        let (shell, output) = run_script("add 5 4\nclear\nexport\n");

        assert!(shell.budget().is_empty());
        assert!(output.contains("All divisions removed"));
        assert!(output.contains("Error: Invalid input: there are no divisions to export"));
    }

    #[test]
    fn test_session_export_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("job.csv");
        let script = format!("add 5 4 Sala\nexport {}\n", path.display());
        let (_, output) = run_script(&script);

        assert!(output.contains("Exported 1 divisions to"));
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Sala,5,4,20,9,18,14,63,63,403.40"));
    }

    #[test]
    fn test_session_json_to_output() {
        let (_, output) = run_script("add 5 4 Sala\njson\n");
        assert!(output.contains("\"final_price\": \"844.08"));
    }
}
