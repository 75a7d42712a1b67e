//! Configuration management

use crate::core::types::parse_decimal;
use crate::core::{Error, Result};
use crate::i18n::I18n;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Smallest spacing accepted between profiles or rods, in meters
pub const MIN_SPACING_M: Decimal = dec!(0.10);

/// Keys accepted by [`Config::set_param`], in display order
pub const PARAM_KEYS: &[&str] = &[
    "board",
    "track",
    "profile",
    "rod",
    "pivot",
    "labor",
    "margin",
    "profile-spacing",
    "rod-spacing",
    "board-width",
    "board-length",
    "profile-length",
    "language",
    "currency",
    "currency-symbol",
    "file-name",
    "delimiter",
];

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub prices: PriceConfig,
    #[serde(default)]
    pub costs: CostConfig,
    #[serde(default)]
    pub assembly: AssemblyConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

        let app_config_dir = config_dir.join("pladur-budget");

        if !app_config_dir.exists() {
            fs::create_dir_all(&app_config_dir)?;
        }

        Ok(app_config_dir.join("config.toml"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a file, writing defaults there if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            log::info!("Created default configuration at {}", path.display());
            return Ok(config);
        }

        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Serialization(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Check every parameter against its allowed range
    pub fn validate(&self) -> Result<()> {
        let non_negative = [
            ("board", self.prices.board),
            ("track", self.prices.track_per_meter),
            ("profile", self.prices.profile),
            ("rod", self.prices.threaded_rod),
            ("pivot", self.prices.pivot),
            ("labor", self.costs.labor_per_m2),
            ("margin", self.costs.margin_percent),
        ];
        for (key, value) in non_negative {
            if value < Decimal::ZERO {
                return Err(Error::Config(format!("{} cannot be negative (got {})", key, value)));
            }
        }

        self.assembly.validate()?;

        let language = self.general.language.as_str();
        if language != "auto" && !I18n::available_languages().iter().any(|(code, _)| *code == language) {
            return Err(Error::Config(format!("unsupported language '{}'", language)));
        }

        if self.export.file_name.trim().is_empty() {
            return Err(Error::Config("export file name cannot be empty".to_string()));
        }
        self.export.delimiter_byte()?;

        Ok(())
    }

    /// Update a single parameter by key. The change is applied only if the
    /// resulting configuration is valid.
    pub fn set_param(&mut self, key: &str, value: &str) -> Result<()> {
        let mut updated = self.clone();
        match key {
            "board" => updated.prices.board = parse_decimal(value)?,
            "track" => updated.prices.track_per_meter = parse_decimal(value)?,
            "profile" => updated.prices.profile = parse_decimal(value)?,
            "rod" => updated.prices.threaded_rod = parse_decimal(value)?,
            "pivot" => updated.prices.pivot = parse_decimal(value)?,
            "labor" => updated.costs.labor_per_m2 = parse_decimal(value)?,
            "margin" => updated.costs.margin_percent = parse_decimal(value)?,
            "profile-spacing" => updated.assembly.profile_spacing_m = parse_decimal(value)?,
            "rod-spacing" => updated.assembly.rod_spacing_m = parse_decimal(value)?,
            "board-width" => updated.assembly.board_width_m = parse_decimal(value)?,
            "board-length" => updated.assembly.board_length_m = parse_decimal(value)?,
            "profile-length" => updated.assembly.profile_length_m = parse_decimal(value)?,
            "language" => updated.general.language = value.trim().to_string(),
            "currency" => updated.general.currency = value.trim().to_string(),
            "currency-symbol" => updated.general.currency_symbol = value.trim().to_string(),
            "file-name" => updated.export.file_name = value.trim().to_string(),
            "delimiter" => updated.export.delimiter = match value {
                "tab" | "\\t" => "\t".to_string(),
                other => other.to_string(),
            },
            _ => {
                return Err(Error::Config(format!(
                    "unknown parameter '{}' (expected one of: {})",
                    key,
                    PARAM_KEYS.join(", ")
                )))
            }
        }
        updated.validate()?;

        *self = updated;
        log::info!("Parameter {} set to {}", key, value);
        Ok(())
    }

    /// Apply a `KEY=VALUE` override
    pub fn apply_override(&mut self, assignment: &str) -> Result<()> {
        let (key, value) = assignment
            .split_once('=')
            .ok_or_else(|| Error::Config(format!("expected KEY=VALUE, got '{}'", assignment)))?;
        self.set_param(key.trim(), value)
    }

    /// Current value of every parameter, keyed as in [`PARAM_KEYS`]
    pub fn params(&self) -> Vec<(&'static str, String)> {
        PARAM_KEYS
            .iter()
            .map(|key| {
                let value = match *key {
                    "board" => self.prices.board.to_string(),
                    "track" => self.prices.track_per_meter.to_string(),
                    "profile" => self.prices.profile.to_string(),
                    "rod" => self.prices.threaded_rod.to_string(),
                    "pivot" => self.prices.pivot.to_string(),
                    "labor" => self.costs.labor_per_m2.to_string(),
                    "margin" => self.costs.margin_percent.to_string(),
                    "profile-spacing" => self.assembly.profile_spacing_m.to_string(),
                    "rod-spacing" => self.assembly.rod_spacing_m.to_string(),
                    "board-width" => self.assembly.board_width_m.to_string(),
                    "board-length" => self.assembly.board_length_m.to_string(),
                    "profile-length" => self.assembly.profile_length_m.to_string(),
                    "language" => self.general.language.clone(),
                    "currency" => self.general.currency.clone(),
                    "currency-symbol" => self.general.currency_symbol.clone(),
                    "file-name" => self.export.file_name.clone(),
                    "delimiter" => self.export.delimiter.escape_default().to_string(),
                    _ => String::new(),
                };
                (*key, value)
            })
            .collect()
    }
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Language: "auto", "en", "pt"
    #[serde(default = "default_language")]
    pub language: String,
    /// Currency code (EUR, USD, ...)
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Currency symbol
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_language() -> String { "auto".to_string() }
fn default_currency() -> String { "EUR".to_string() }
fn default_currency_symbol() -> String { "\u{20AC}".to_string() } // Euro sign

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            currency: default_currency(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

/// Unit prices of the materials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceConfig {
    /// Price per board (2.00 m x 1.20 m by default)
    #[serde(default = "default_board_price", with = "rust_decimal::serde::float")]
    pub board: Decimal,
    /// Perimeter track price per linear meter
    #[serde(default = "default_track_price", with = "rust_decimal::serde::float")]
    pub track_per_meter: Decimal,
    /// Price per profile unit (3.00 m by default)
    #[serde(default = "default_profile_price", with = "rust_decimal::serde::float")]
    pub profile: Decimal,
    #[serde(default = "default_rod_price", with = "rust_decimal::serde::float")]
    pub threaded_rod: Decimal,
    #[serde(default = "default_pivot_price", with = "rust_decimal::serde::float")]
    pub pivot: Decimal,
}

fn default_board_price() -> Decimal { dec!(20.0) }
fn default_track_price() -> Decimal { dec!(3.0) }
fn default_profile_price() -> Decimal { dec!(4.0) }
fn default_rod_price() -> Decimal { dec!(1.2) }
fn default_pivot_price() -> Decimal { dec!(0.6) }

impl Default for PriceConfig {
    fn default() -> Self {
        Self {
            board: default_board_price(),
            track_per_meter: default_track_price(),
            profile: default_profile_price(),
            threaded_rod: default_rod_price(),
            pivot: default_pivot_price(),
        }
    }
}

/// Labor cost and profit margin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostConfig {
    /// Labor cost per square meter of ceiling
    #[serde(default = "default_labor", with = "rust_decimal::serde::float")]
    pub labor_per_m2: Decimal,
    /// Profit margin in percent, applied over materials + labor
    #[serde(default = "default_margin", with = "rust_decimal::serde::float")]
    pub margin_percent: Decimal,
}

fn default_labor() -> Decimal { dec!(15.0) }
fn default_margin() -> Decimal { dec!(20.0) }

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            labor_per_m2: default_labor(),
            margin_percent: default_margin(),
        }
    }
}

/// Assembly rules used to derive quantities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssemblyConfig {
    /// Distance between profile lines, in meters
    #[serde(default = "default_spacing", with = "rust_decimal::serde::float")]
    pub profile_spacing_m: Decimal,
    /// Distance between threaded rods on both axes, in meters
    #[serde(default = "default_spacing", with = "rust_decimal::serde::float")]
    pub rod_spacing_m: Decimal,
    #[serde(default = "default_board_width", with = "rust_decimal::serde::float")]
    pub board_width_m: Decimal,
    #[serde(default = "default_board_length", with = "rust_decimal::serde::float")]
    pub board_length_m: Decimal,
    /// Length of one profile unit as sold
    #[serde(default = "default_profile_length", with = "rust_decimal::serde::float")]
    pub profile_length_m: Decimal,
}

fn default_spacing() -> Decimal { dec!(0.60) }
fn default_board_width() -> Decimal { dec!(1.20) }
fn default_board_length() -> Decimal { dec!(2.00) }
fn default_profile_length() -> Decimal { dec!(3.00) }

impl AssemblyConfig {
    /// Check spacings and material sizes
    pub fn validate(&self) -> Result<()> {
        let spacings = [
            ("profile-spacing", self.profile_spacing_m),
            ("rod-spacing", self.rod_spacing_m),
        ];
        for (key, value) in spacings {
            if value < MIN_SPACING_M {
                return Err(Error::Config(format!(
                    "{} must be at least {} m (got {})",
                    key, MIN_SPACING_M, value
                )));
            }
        }

        let sizes = [
            ("board-width", self.board_width_m),
            ("board-length", self.board_length_m),
            ("profile-length", self.profile_length_m),
        ];
        for (key, value) in sizes {
            if value <= Decimal::ZERO {
                return Err(Error::Config(format!("{} must be positive (got {})", key, value)));
            }
        }

        Ok(())
    }

    /// Area covered by one board, in square meters
    pub fn board_area_m2(&self) -> Decimal {
        self.board_width_m * self.board_length_m
    }
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            profile_spacing_m: default_spacing(),
            rod_spacing_m: default_spacing(),
            board_width_m: default_board_width(),
            board_length_m: default_board_length(),
            profile_length_m: default_profile_length(),
        }
    }
}

/// Tabular export settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Default file name for the division table
    #[serde(default = "default_file_name")]
    pub file_name: String,
    /// Field delimiter (single ASCII character)
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

fn default_file_name() -> String { "orcamento_pladur_divisoes.csv".to_string() }
fn default_delimiter() -> String { ",".to_string() }

impl ExportConfig {
    /// Delimiter as the byte expected by the CSV writer
    pub fn delimiter_byte(&self) -> Result<u8> {
        match self.delimiter.as_bytes() {
            [byte] if byte.is_ascii() => Ok(*byte),
            _ => Err(Error::Config(format!(
                "delimiter must be a single ASCII character (got '{}')",
                self.delimiter.escape_default()
            ))),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
            delimiter: default_delimiter(),
        }
    }
}
