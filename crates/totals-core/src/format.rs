//! # Amount Formatting
//!
//! The one outward seam of the presenter: turning `(amount, region,
//! include_taxes)` into the string a shopper reads.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  format_amount(amount, region, include_taxes) -> String                 │
//! │                                                                         │
//! │  • Same triple in, same string out (no clocks, no global locale)        │
//! │  • Amount 0 always formats ("$0.00", "0 ¥")                             │
//! │  • Failures (unknown currency) are returned, never swallowed            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Any `Fn(Money, &Region, bool) -> CoreResult<String>` satisfies the trait,
//! which keeps test doubles to a single closure.
//!
//! ## Usage
//! ```rust
//! use totals_core::format::{AmountFormatter, RegionFormatter};
//! use totals_core::money::Money;
//! use totals_core::region::Region;
//!
//! let formatter = RegionFormatter::new();
//! let region = Region::new("reg_us", "usd");
//! let text = formatter.format_amount(Money::from_minor(123456), &region, false).unwrap();
//! assert_eq!(text, "$1,234.56");
//! ```

use rusty_money::{iso, Formatter, Params, Position};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::region::{CatalogEntry, Currency, CurrencyCatalog, Region, SymbolPosition};

// =============================================================================
// Formatter Trait
// =============================================================================

/// Renders a minor-unit amount for a region.
pub trait AmountFormatter {
    /// Formats `amount` in the currency of `region`.
    ///
    /// When `include_taxes` is true the region's tax rate is applied on top
    /// of `amount` before formatting.
    fn format_amount(&self, amount: Money, region: &Region, include_taxes: bool)
        -> CoreResult<String>;
}

impl<F> AmountFormatter for F
where
    F: Fn(Money, &Region, bool) -> CoreResult<String>,
{
    fn format_amount(
        &self,
        amount: Money,
        region: &Region,
        include_taxes: bool,
    ) -> CoreResult<String> {
        self(amount, region, include_taxes)
    }
}

// =============================================================================
// Region Formatter
// =============================================================================

/// Group sizes for overridden currencies; six groups cover every `i64`.
const GROUPS_OF_THREE: [usize; 6] = [3; 6];

/// Catalog-driven formatter over the ISO 4217 table.
///
/// ## Steps
/// ```text
/// amount ──► (+ tax if requested) ──► rusty_money::Money::from_minor
///        ──► no override: ISO locale formatting ("$1,234.56")
///        ──► override:    configured separators, symbol and placement
/// ```
#[derive(Debug, Clone, Default)]
pub struct RegionFormatter {
    catalog: CurrencyCatalog,
}

impl RegionFormatter {
    /// Formatter over the plain ISO table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Formatter over a catalog carrying display overrides.
    pub fn with_catalog(catalog: CurrencyCatalog) -> Self {
        RegionFormatter { catalog }
    }

    pub fn catalog(&self) -> &CurrencyCatalog {
        &self.catalog
    }

    fn currency_for(&self, region: &Region) -> CoreResult<CatalogEntry<'_>> {
        self.catalog
            .get(&region.currency_code)
            .ok_or_else(|| CoreError::UnsupportedCurrency(region.currency_code.clone()))
    }
}

impl AmountFormatter for RegionFormatter {
    fn format_amount(
        &self,
        amount: Money,
        region: &Region,
        include_taxes: bool,
    ) -> CoreResult<String> {
        let currency = self.currency_for(region)?;

        let amount = if include_taxes {
            amount
                .checked_add_tax(region.tax_rate)
                .ok_or_else(|| CoreError::AmountOverflow {
                    amount: amount.minor_units(),
                    currency: currency.code().to_string(),
                })?
        } else {
            amount
        };

        Ok(match currency.display {
            Some(display) => format_with_override(amount, currency.iso, display),
            None => {
                let money = rusty_money::Money::from_minor(amount.minor_units(), currency.iso);
                money.to_string()
            }
        })
    }
}

/// Writes `amount` with the separators, symbol and placement of `display`.
fn format_with_override(
    amount: Money,
    currency: &'static iso::Currency,
    display: &Currency,
) -> String {
    let money = rusty_money::Money::from_minor(amount.minor_units(), currency);
    let number = Formatter::money(
        &money,
        Params {
            digit_separator: display.group_separator,
            exponent_separator: display.decimal_separator,
            separator_pattern: GROUPS_OF_THREE.to_vec(),
            positions: vec![Position::Amount],
            rounding: Some(currency.exponent),
            ..Default::default()
        },
    );

    let sign = if amount.is_negative() { "-" } else { "" };
    let symbol = &display.symbol;

    match display.symbol_position {
        SymbolPosition::Prefix => format!("{sign}{symbol}{number}"),
        SymbolPosition::PrefixSpaced => format!("{sign}{symbol} {number}"),
        SymbolPosition::SuffixSpaced => format!("{sign}{number} {symbol}"),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
