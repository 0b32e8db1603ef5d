//! # CLI Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority)                              │
//! │     --region reg_eu --width 48                                         │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     CART_TOTALS_REGION=reg_eu                                          │
//! │     CART_TOTALS_WIDTH=48                                               │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config <path>, or                                                │
//! │     ~/.config/cart-totals/totals.toml (Linux)                          │
//! │     ~/Library/Application Support/com.cart.totals/totals.toml (macOS)  │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     width 40, English labels, ISO 4217 currencies, no regions          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # totals.toml
//! [display]
//! width = 40
//! format = "text"      # text | json
//! region = "reg_eu"    # re-label records priced in the same currency
//!
//! [display.labels]
//! taxes = "VAT"
//!
//! [[regions]]
//! id = "reg_eu"
//! name = "Europe"
//! currency_code = "eur"
//! tax_rate = 2500
//!
//! [[currencies]]      # display override for an ISO 4217 code
//! code = "ISK"
//! symbol = "kr"
//! symbol_position = "suffix_spaced"
//! decimal_separator = ","
//! group_separator = "."
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use totals_core::render::DEFAULT_WIDTH;
use totals_core::validation::{validate_currency, validate_regions, validate_width};
use totals_core::{Currency, CurrencyCatalog, Labels, Region};

use crate::error::{CliError, CliResult};

// =============================================================================
// Output Format
// =============================================================================

/// How the breakdown is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Fixed-width text block.
    #[default]
    Text,
    /// All rows, including hidden ones, as JSON.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "Unknown output format: '{}'. Valid options: text, json",
                other
            )),
        }
    }
}

// =============================================================================
// Display Settings
// =============================================================================

/// Settings for how a breakdown is shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Text block width in columns.
    #[serde(default = "default_width")]
    pub width: usize,

    #[serde(default)]
    pub format: OutputFormat,

    /// Region id applied to each input record. The record must already be
    /// priced in that region's currency.
    #[serde(default)]
    pub region: Option<String>,

    #[serde(default)]
    pub labels: Labels,
}

fn default_width() -> usize {
    DEFAULT_WIDTH
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            width: default_width(),
            format: OutputFormat::default(),
            region: None,
            labels: Labels::default(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalsConfig {
    #[serde(default)]
    pub display: DisplaySettings,

    /// Regions selectable by id.
    #[serde(default)]
    pub regions: Vec<Region>,

    /// Display overrides for ISO 4217 currencies.
    #[serde(default)]
    pub currencies: Vec<Currency>,
}

impl TotalsConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (totals.toml)
    /// 3. Environment variables
    ///
    /// An explicitly given path must exist; the default path may be absent.
    /// The result is not validated: command-line flags still apply on top,
    /// so callers run [`TotalsConfig::validate`] once those are in.
    pub fn load(config_path: Option<PathBuf>) -> CliResult<Self> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// [`TotalsConfig::load`] with a custom environment lookup.
    pub fn load_with<F>(config_path: Option<PathBuf>, lookup: F) -> CliResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match config_path {
            Some(path) => Self::from_file(&path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_env_overrides(lookup);

        Ok(config)
    }

    /// Reads and parses a TOML config file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        info!(?path, "Loading totals config from file");
        let contents = std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> CliResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> CliResult<()> {
        validate_width(self.display.width)?;
        validate_regions(&self.regions)?;

        for currency in &self.currencies {
            validate_currency(currency)?;
        }

        if let Some(ref id) = self.display.region {
            if self.find_region(id).is_none() {
                return Err(CliError::UnknownRegion(id.clone()));
            }
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    ///
    /// `lookup` is `std::env::var` in production; tests pass a map.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(region) = lookup("CART_TOTALS_REGION") {
            debug!(region = %region, "Overriding region from environment");
            self.display.region = Some(region);
        }

        if let Some(width) = lookup("CART_TOTALS_WIDTH") {
            match width.parse::<usize>() {
                Ok(w) => {
                    debug!(width = w, "Overriding width from environment");
                    self.display.width = w;
                }
                Err(_) => warn!(width = %width, "Ignoring non-numeric CART_TOTALS_WIDTH"),
            }
        }

        if let Some(format) = lookup("CART_TOTALS_FORMAT") {
            match format.parse() {
                Ok(parsed) => self.display.format = parsed,
                Err(e) => warn!(error = %e, "Ignoring CART_TOTALS_FORMAT"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "cart", "totals")
            .map(|dirs| dirs.config_dir().join("totals.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Looks a configured region up by id.
    pub fn find_region(&self, id: &str) -> Option<&Region> {
        self.regions.iter().find(|region| region.id == id)
    }

    /// The ISO catalog with the configured display overrides.
    pub fn catalog(&self) -> CurrencyCatalog {
        let mut catalog = CurrencyCatalog::new();
        for currency in &self.currencies {
            if catalog.insert(currency.clone()).is_some() {
                warn!(code = %currency.code, "Currency configured twice, keeping the last entry");
            }
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use totals_core::{SymbolPosition, TaxRate};

    const SAMPLE: &str = r#"
        [display]
        width = 48
        format = "json"
        region = "reg_eu"

        [display.labels]
        taxes = "VAT"

        [[regions]]
        id = "reg_eu"
        name = "Europe"
        currency_code = "eur"
        tax_rate = 2500

        [[currencies]]
        code = "isk"
        symbol = "kr"
        symbol_position = "suffix_spaced"
        decimal_separator = ","
        group_separator = "."
    "#;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = TotalsConfig::default();
        assert_eq!(config.display.width, DEFAULT_WIDTH);
        assert_eq!(config.display.format, OutputFormat::Text);
        assert_eq!(config.display.labels, Labels::default());
        assert!(config.regions.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_sample() {
        let config = TotalsConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.display.width, 48);
        assert_eq!(config.display.format, OutputFormat::Json);
        assert_eq!(config.display.labels.taxes, "VAT");
        assert_eq!(config.display.labels.subtotal, "Subtotal");

        let region = config.find_region("reg_eu").unwrap();
        assert_eq!(region.tax_rate, TaxRate::from_bps(2500));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_catalog_includes_configured_currency() {
        let config = TotalsConfig::from_toml_str(SAMPLE).unwrap();
        let catalog = config.catalog();
        let isk = catalog.get("ISK").unwrap().display.unwrap();
        assert_eq!(isk.symbol, "kr");
        assert_eq!(isk.symbol_position, SymbolPosition::SuffixSpaced);
        assert!(catalog.get("USD").unwrap().display.is_none());
    }

    #[test]
    fn test_validation_rejects_unknown_forced_region() {
        let mut config = TotalsConfig::default();
        config.display.region = Some("reg_nowhere".to_string());
        assert!(matches!(config.validate(), Err(CliError::UnknownRegion(_))));
    }

    #[test]
    fn test_validation_rejects_bad_width() {
        let mut config = TotalsConfig::default();
        config.display.width = 5;
        assert!(matches!(config.validate(), Err(CliError::InvalidConfig(_))));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = TotalsConfig::default();
        config.apply_env_overrides(env(&[
            ("CART_TOTALS_REGION", "reg_us"),
            ("CART_TOTALS_WIDTH", "60"),
            ("CART_TOTALS_FORMAT", "json"),
        ]));
        assert_eq!(config.display.region.as_deref(), Some("reg_us"));
        assert_eq!(config.display.width, 60);
        assert_eq!(config.display.format, OutputFormat::Json);
    }

    #[test]
    fn test_bad_env_values_are_ignored() {
        let mut config = TotalsConfig::default();
        config.apply_env_overrides(env(&[
            ("CART_TOTALS_WIDTH", "wide"),
            ("CART_TOTALS_FORMAT", "yaml"),
        ]));
        assert_eq!(config.display.width, DEFAULT_WIDTH);
        assert_eq!(config.display.format, OutputFormat::Text);
    }

    #[test]
    fn test_validation_rejects_non_iso_currency_override() {
        let mut config = TotalsConfig::default();
        config.currencies.push(Currency::new("xyz", "X"));
        assert!(matches!(config.validate(), Err(CliError::InvalidConfig(_))));
    }

    #[test]
    fn test_load_leaves_validation_to_the_caller() {
        let path = std::env::temp_dir().join(format!("totals-load-{}.toml", std::process::id()));
        std::fs::write(&path, "[display]\nwidth = 48\n").unwrap();

        let lookup = env(&[("CART_TOTALS_WIDTH", "10")]);
        let loaded = TotalsConfig::load_with(Some(path.clone()), lookup);
        std::fs::remove_file(&path).unwrap();

        let mut config = loaded.unwrap();
        assert_eq!(config.display.width, 10);
        assert!(config.validate().is_err());

        config.display.width = 40;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        let err = TotalsConfig::from_toml_str("[display\nwidth = ").unwrap_err();
        assert!(matches!(err, CliError::ConfigParse(_)));
    }

    #[test]
    fn test_explicit_missing_path_is_an_error() {
        let err = TotalsConfig::load(Some(PathBuf::from("/nonexistent/totals.toml"))).unwrap_err();
        assert!(matches!(err, CliError::Read { .. }));
    }

    #[test]
    fn test_toml_round_trip_keeps_sections() {
        let toml_str = toml::to_string_pretty(&TotalsConfig::default()).unwrap();
        assert!(toml_str.contains("[display]"));
        assert!(toml_str.contains("[display.labels]"));
    }
}
