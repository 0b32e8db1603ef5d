//! # Validation Module
//!
//! Checks applied to configuration before any record is presented.
//!
//! The presenter itself validates nothing: a bad region surfaces as a
//! formatter error at render time. These helpers let an application catch
//! the same problems once, at startup, with a field name attached.
//!
//! ## Usage
//! ```rust
//! use totals_core::region::Region;
//! use totals_core::validation::{validate_region, validate_width};
//!
//! assert!(validate_region(&Region::new("reg_us", "usd")).is_ok());
//! assert!(validate_region(&Region::new("", "usd")).is_err());
//! assert!(validate_width(8).is_err());
//! ```

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::region::{iso_currency, Currency, Region};
use crate::render::{MAX_WIDTH, MIN_WIDTH};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Highest accepted tax rate: 100%.
pub const MAX_TAX_RATE_BPS: u32 = 10_000;

/// Validates an ISO 4217 currency code.
///
/// ## Rules
/// - Exactly three ASCII letters (any case)
/// - Listed in the ISO 4217 table
pub fn validate_currency_code(field: &str, code: &str) -> ValidationResult<()> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: format!("'{code}' is not a three-letter currency code"),
        });
    }

    if iso_currency(code).is_none() {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: format!("'{code}' is not an ISO 4217 currency"),
        });
    }

    Ok(())
}

/// Validates a region descriptor.
///
/// ## Rules
/// - `id` must not be empty
/// - `currency_code` must be a known ISO 4217 code
/// - `tax_rate` must not exceed 100%
pub fn validate_region(region: &Region) -> ValidationResult<()> {
    if region.id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "region.id".to_string(),
        });
    }

    validate_currency_code("region.currency_code", &region.currency_code)?;

    if region.tax_rate.bps() > MAX_TAX_RATE_BPS {
        return Err(ValidationError::OutOfRange {
            field: "region.tax_rate".to_string(),
            min: 0,
            max: i64::from(MAX_TAX_RATE_BPS),
        });
    }

    Ok(())
}

/// Validates a list of regions, additionally rejecting duplicate ids.
pub fn validate_regions(regions: &[Region]) -> ValidationResult<()> {
    let mut seen = HashSet::new();

    for region in regions {
        validate_region(region)?;
        if !seen.insert(region.id.as_str()) {
            return Err(ValidationError::Duplicate {
                field: "region.id".to_string(),
                value: region.id.clone(),
            });
        }
    }

    Ok(())
}

/// Validates a currency display override.
pub fn validate_currency(currency: &Currency) -> ValidationResult<()> {
    validate_currency_code("currency.code", &currency.code)?;

    if currency.symbol.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "currency.symbol".to_string(),
        });
    }

    if currency.decimal_separator == currency.group_separator {
        return Err(ValidationError::InvalidFormat {
            field: "currency.decimal_separator".to_string(),
            reason: "must differ from the group separator".to_string(),
        });
    }

    Ok(())
}

/// Validates a text render width.
pub fn validate_width(width: usize) -> ValidationResult<()> {
    if !(MIN_WIDTH..=MAX_WIDTH).contains(&width) {
        return Err(ValidationError::OutOfRange {
            field: "width".to_string(),
            min: MIN_WIDTH as i64,
            max: MAX_WIDTH as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
