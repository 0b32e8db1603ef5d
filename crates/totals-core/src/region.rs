//! # Region Descriptors
//!
//! A region bundles the currency and tax settings a storefront sells under.
//! The presenter never looks inside one; it hands the region to the
//! formatter together with each amount.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────────┐   ┌─────────────────┐   │
//! │  │     Region      │   │      Currency       │   │    TaxRate      │   │
//! │  │  ─────────────  │   │  ─────────────────  │   │  ─────────────  │   │
//! │  │  id             │   │  code     "EUR"     │   │  bps (u32)      │   │
//! │  │  name           │──►│  rusty_money::iso   │   │  2500 = 25%     │   │
//! │  │  currency_code  │   │  (exponent, symbol, │   └─────────────────┘   │
//! │  │  tax_rate       │   │   locale)           │                         │
//! │  └─────────────────┘   │  + Currency         │                         │
//! │                        │    override (opt.)  │                         │
//! │                        └─────────────────────┘                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use rusty_money::iso;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 825 bps = 8.25% and 2500 bps = 25%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

// =============================================================================
// Currency
// =============================================================================

/// Where the currency symbol goes relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SymbolPosition {
    /// `$12.34`
    #[default]
    Prefix,
    /// `CHF 12.34`
    PrefixSpaced,
    /// `12,34 €`
    SuffixSpaced,
}

/// Display override for one ISO 4217 currency.
///
/// The minor-unit exponent always comes from the ISO table; an override
/// only changes how the number is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Currency {
    /// ISO 4217 code, upper-case.
    pub code: String,

    /// Symbol shown next to the amount.
    pub symbol: String,

    #[serde(default)]
    pub symbol_position: SymbolPosition,

    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: char,

    #[serde(default = "default_group_separator")]
    pub group_separator: char,
}

fn default_decimal_separator() -> char {
    '.'
}

fn default_group_separator() -> char {
    ','
}

impl Currency {
    pub fn new(code: impl Into<String>, symbol: impl Into<String>) -> Self {
        Currency {
            code: code.into(),
            symbol: symbol.into(),
            symbol_position: SymbolPosition::default(),
            decimal_separator: default_decimal_separator(),
            group_separator: default_group_separator(),
        }
    }

    pub fn with_position(mut self, symbol_position: SymbolPosition) -> Self {
        self.symbol_position = symbol_position;
        self
    }

    pub fn with_separators(mut self, decimal: char, group: char) -> Self {
        self.decimal_separator = decimal;
        self.group_separator = group;
        self
    }
}

/// Looks an ISO 4217 currency up, ignoring case and surrounding whitespace.
pub fn iso_currency(code: &str) -> Option<&'static iso::Currency> {
    iso::find(&code.trim().to_ascii_uppercase())
}

// =============================================================================
// Currency Catalog
// =============================================================================

/// A resolved catalog entry: ISO data plus the configured override, if any.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry<'a> {
    pub iso: &'static iso::Currency,
    pub display: Option<&'a Currency>,
}

impl CatalogEntry<'_> {
    /// Upper-case ISO code.
    pub fn code(&self) -> &'static str {
        self.iso.iso_alpha_code
    }

    /// Number of minor-unit digits (2 for cents, 0 for yen).
    pub fn exponent(&self) -> u32 {
        self.iso.exponent
    }
}

/// Every ISO 4217 currency, with optional display overrides on top.
///
/// Codes are matched case-insensitively; storefront APIs commonly send
/// `"usd"` where ISO writes `"USD"`.
#[derive(Debug, Clone, Default)]
pub struct CurrencyCatalog {
    overrides: HashMap<String, Currency>,
}

impl CurrencyCatalog {
    /// The ISO table with no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a display override. Returns the override it
    /// replaced, if any.
    ///
    /// An override for a code outside ISO 4217 is stored but never
    /// resolved; config validation rejects such entries up front.
    pub fn insert(&mut self, mut currency: Currency) -> Option<Currency> {
        currency.code = currency.code.trim().to_ascii_uppercase();
        self.overrides.insert(currency.code.clone(), currency)
    }

    /// Resolves a currency code, ignoring case and surrounding whitespace.
    pub fn get(&self, code: &str) -> Option<CatalogEntry<'_>> {
        let iso = iso_currency(code)?;
        Some(CatalogEntry {
            iso,
            display: self.overrides.get(iso.iso_alpha_code),
        })
    }

    /// Number of configured overrides.
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }
}

// =============================================================================
// Region
// =============================================================================

/// The currency/tax settings a cart or order is priced in.
///
/// ## Example Config Entry
/// ```toml
/// [[regions]]
/// id = "reg_eu"
/// name = "Europe"
/// currency_code = "eur"
/// tax_rate = 2500   # basis points, 25%
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Region {
    pub id: String,

    #[serde(default)]
    pub name: String,

    /// ISO 4217 code in any case.
    pub currency_code: String,

    /// Only consulted when a caller asks for tax-inclusive amounts.
    #[serde(default)]
    pub tax_rate: TaxRate,
}

impl Region {
    pub fn new(id: impl Into<String>, currency_code: impl Into<String>) -> Self {
        Region {
            id: id.into(),
            name: String::new(),
            currency_code: currency_code.into(),
            tax_rate: TaxRate::zero(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_tax_rate(mut self, tax_rate: TaxRate) -> Self {
        self.tax_rate = tax_rate;
        self
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(825);
        assert_eq!(rate.bps(), 825);
        assert!(!rate.is_zero());
        assert!(TaxRate::default().is_zero());
    }

    #[test]
    fn test_catalog_resolves_iso_codes_ignoring_case() {
        let catalog = CurrencyCatalog::new();
        assert_eq!(catalog.get("usd").map(|c| c.code()), Some("USD"));
        assert_eq!(catalog.get(" EUR ").map(|c| c.exponent()), Some(2));
        assert_eq!(catalog.get("jpy").map(|c| c.exponent()), Some(0));
        assert!(catalog.get("usd").unwrap().display.is_none());
        assert!(catalog.get("XYZ").is_none());
    }

    #[test]
    fn test_catalog_override_is_attached_to_iso_entry() {
        let mut catalog = CurrencyCatalog::new();
        let replaced = catalog.insert(
            Currency::new("isk", "kr")
                .with_position(SymbolPosition::SuffixSpaced)
                .with_separators(',', '.'),
        );
        assert!(replaced.is_none());
        assert_eq!(catalog.override_count(), 1);

        let isk = catalog.get("Isk").unwrap();
        assert_eq!(isk.code(), "ISK");
        assert_eq!(isk.display.map(|c| c.code.as_str()), Some("ISK"));

        let replaced = catalog.insert(Currency::new("ISK", "ikr"));
        assert_eq!(replaced.map(|c| c.symbol), Some("kr".to_string()));
    }

    #[test]
    fn test_override_outside_iso_never_resolves() {
        let mut catalog = CurrencyCatalog::new();
        catalog.insert(Currency::new("xyz", "X"));
        assert!(catalog.get("xyz").is_none());
    }

    #[test]
    fn test_region_from_json_defaults() {
        let region: Region =
            serde_json::from_str(r#"{"id":"reg_us","currency_code":"usd"}"#).unwrap();
        assert_eq!(region, Region::new("reg_us", "usd"));
    }

    #[test]
    fn test_currency_defaults_separators() {
        let currency: Currency =
            serde_json::from_str(r#"{"code":"MXN","symbol":"MX$"}"#).unwrap();
        assert_eq!(currency.decimal_separator, '.');
        assert_eq!(currency.group_separator, ',');
        assert_eq!(currency.symbol_position, SymbolPosition::Prefix);
    }
}
