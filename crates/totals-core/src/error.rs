//! # Error Types
//!
//! Domain-specific error types for totals-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  totals-core errors (this file)                                        │
//! │  ├── CoreError        - Formatter / region failures                    │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  totals-cli errors (app)                                               │
//! │  └── CliError         - Config, I/O, JSON                              │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → stderr                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The presenter itself never produces an error. Everything here originates
//! in the formatter (or in validating what the formatter will be fed) and
//! travels through `present` unchanged.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised while turning an amount into display text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// The region's currency is not in the formatter's catalog.
    ///
    /// ## When This Occurs
    /// - Region was configured with a code the catalog does not know
    /// - Typo in the currency code of an upstream record (`"UDS"`)
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),

    /// Amount overflowed while applying taxes or converting units.
    #[error("Amount {amount} overflows while formatting in {currency}")]
    AmountOverflow { amount: i64, currency: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., lowercase or four-letter currency code).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., two regions sharing an id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
