//! Pladur Budget - Main entry point
//!
//! Command-line budget calculator for suspended drywall ceilings:
//! an interactive session, one-shot quotes and configuration management.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use pladur_budget_lib::budget::Budget;
use pladur_budget_lib::core::{Config, DivisionSpec};
use pladur_budget_lib::export::{export_divisions_csv, write_report_json};
use pladur_budget_lib::i18n::I18n;
use pladur_budget_lib::report::{render_divisions, render_summary};
use pladur_budget_lib::shell::Shell;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pladur-budget")]
#[command(about = "Budget calculator for suspended drywall (pladur) ceilings")]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to the user config directory)
    #[arg(long, global = true, env = "PLADUR_BUDGET_CONFIG")]
    config: Option<PathBuf>,

    /// Language: auto, en or pt
    #[arg(long, global = true)]
    lang: Option<String>,

    /// Override a parameter for this run, e.g. --set margin=25 (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE", global = true)]
    overrides: Vec<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive session (default)
    Shell,

    /// Price a job given on the command line
    #[command(after_help = "\
Examples:
  pladur-budget quote -d Sala:5x4 -d Quarto:3x3
  pladur-budget quote -d 5,5x4 --csv orcamento.csv
  pladur-budget quote -d Sala:5x4 --set margin=25 --json")]
    Quote {
        /// Division as [NAME:]WIDTHxLENGTH in meters (repeatable)
        #[arg(short = 'd', long = "division", value_name = "SPEC", required = true)]
        divisions: Vec<DivisionSpec>,

        /// Also export the division table as CSV
        #[arg(long, value_name = "PATH")]
        csv: Option<PathBuf>,

        /// Print the JSON report instead of tables
        #[arg(long)]
        json: bool,
    },

    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Change one parameter and save it
    Set { key: String, value: String },
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    log::info!("Starting Pladur Budget v{}", env!("CARGO_PKG_VERSION"));

    let Cli {
        config,
        lang,
        overrides,
        command,
    } = Cli::parse();

    let path = match config {
        Some(path) => path,
        None => Config::config_path()?,
    };

    match command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let config = session_config(&path, lang.as_deref(), &overrides)?;
            let i18n = I18n::new(&config.general.language);
            let mut shell = Shell::new(&config, i18n)?;
            shell.run(io::stdin().lock(), io::stdout())?;
        }
        Commands::Quote {
            divisions,
            csv,
            json,
        } => {
            let config = session_config(&path, lang.as_deref(), &overrides)?;
            run_quote(&config, divisions, csv.as_deref(), json)?;
        }
        Commands::Config(command) => run_config(command, &path)?,
    }

    Ok(())
}

/// Load the configuration and apply the command-line overrides
fn session_config(path: &Path, lang: Option<&str>, overrides: &[String]) -> Result<Config> {
    let mut config = Config::load_from(path).unwrap_or_else(|e| {
        log::warn!("Failed to load config, using defaults: {}", e);
        Config::default()
    });

    for assignment in overrides {
        config
            .apply_override(assignment)
            .with_context(|| format!("invalid --set {}", assignment))?;
    }
    if let Some(lang) = lang {
        config.set_param("language", lang)?;
    }

    Ok(config)
}

fn run_quote(config: &Config, divisions: Vec<DivisionSpec>, csv: Option<&Path>, json: bool) -> Result<()> {
    let i18n = I18n::new(&config.general.language);
    let mut budget = Budget::new(config)?;

    for spec in divisions {
        let index = budget.default_name_index().to_string();
        let fallback = i18n.format("division.default_name", &[("n", &index)]);
        budget.add_division(spec.into_division(&fallback)?)?;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if json {
        write_report_json(&budget.report()?, &mut out)?;
    } else {
        let rows = budget.rows()?;
        write!(out, "{}", render_divisions(&rows, &i18n, config))?;
        writeln!(out)?;
        write!(out, "{}", render_summary(&budget.summary()?, &i18n, config))?;
    }

    if let Some(path) = csv {
        export_divisions_csv(&budget.rows()?, &i18n, config, path)?;
        let count = budget.len().to_string();
        let shown = path.display().to_string();
        eprintln!("{}", i18n.format("shell.exported", &[("count", &count), ("path", &shown)]));
    }

    Ok(())
}

fn run_config(command: ConfigCommands, path: &Path) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            let config = Config::load_from(path)?;
            let content = toml::to_string_pretty(&config)?;
            print!("{}", content);
        }
        ConfigCommands::Path => {
            println!("{}", path.display());
        }
        ConfigCommands::Init { force } => {
            if path.exists() && !force {
                bail!("{} already exists (use --force to overwrite)", path.display());
            }
            Config::default().save_to(path)?;
            println!("{}", path.display());
        }
        ConfigCommands::Set { key, value } => {
            let mut config = Config::load_from(path)?;
            config.set_param(&key, &value)?;
            config.save_to(path)?;
            println!("{} = {}", key, value);
        }
    }

    Ok(())
}
