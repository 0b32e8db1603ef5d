//! # Money Module
//!
//! Provides the `Money` type and the two rules every totals field goes
//! through before it reaches the formatter.
//!
//! ## Integer Minor Units
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Every amount in a totals record is an integer in the smallest         │
//! │  currency subunit:                                                      │
//! │                                                                         │
//! │    USD 12.34  → 1234   (exponent 2)                                     │
//! │    JPY 1234   → 1234   (exponent 0)                                     │
//! │                                                                         │
//! │  No floating point is involved: the formatter hands minor units to     │
//! │  rusty_money, which scales them with an exact decimal.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Absent Amounts
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Field value      effective()     is_non_zero()                         │
//! │  ─────────────    ───────────     ─────────────                         │
//! │  None             0               false                                 │
//! │  Some(0)          0               false                                 │
//! │  Some(200)        200             true                                  │
//! │  Some(-200)       -200            true                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! Absence and zero are intentionally the same thing for display purposes.
//!
//! ## Usage
//! ```rust
//! use totals_core::money::{effective, is_non_zero, Money};
//!
//! let discount: Option<Money> = None;
//! assert_eq!(effective(discount), Money::zero());
//! assert!(!is_non_zero(discount));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::region::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit of its region.
///
/// ## Design Decisions
/// - **i64 (signed)**: upstream records may carry negative adjustments
/// - **No currency tag**: the region travels next to the record, not inside
///   every amount; all fields of one record share a scale
/// - **Transparent serde**: serializes as a bare JSON number, so records from
///   a storefront API deserialize without wrapping
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units (cents, pence, yen).
    ///
    /// ## Example
    /// ```rust
    /// use totals_core::money::Money;
    ///
    /// let shipping = Money::from_minor(500);
    /// assert_eq!(shipping.minor_units(), 500);
    /// ```
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor_units(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Adds two amounts, returning `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(sum) => Some(Money(sum)),
            None => None,
        }
    }

    /// Calculates the tax owed on this amount at `rate`.
    ///
    /// ## Rounding
    /// Half away from zero, matching what a locale-aware number formatter
    /// does when it rounds a fractional minor unit for display:
    /// ```text
    /// 1000 × 8.25% = 82.5  → 83
    /// -1000 × 8.25% = -82.5 → -83
    /// ```
    ///
    /// Returns `None` if the result does not fit in `i64`.
    ///
    /// ## Example
    /// ```rust
    /// use totals_core::money::Money;
    /// use totals_core::region::TaxRate;
    ///
    /// let tax = Money::from_minor(1000).checked_tax(TaxRate::from_bps(825));
    /// assert_eq!(tax, Some(Money::from_minor(83)));
    /// ```
    pub fn checked_tax(&self, rate: TaxRate) -> Option<Money> {
        // i128 so that amount × bps can never overflow
        let scaled = self.0 as i128 * rate.bps() as i128;
        let half = if scaled < 0 { -5000 } else { 5000 };
        let tax = (scaled + half) / 10000;
        i64::try_from(tax).ok().map(Money)
    }

    /// Returns this amount with tax at `rate` added on top.
    pub fn checked_add_tax(&self, rate: TaxRate) -> Option<Money> {
        self.checked_tax(rate).and_then(|tax| self.checked_add(tax))
    }
}

// =============================================================================
// Amount Resolution Rules
// =============================================================================

/// The effective value of an optional totals field: absent means zero.
///
/// Total over its domain; never fails, never reports missing data.
#[inline]
pub fn effective(amount: Option<Money>) -> Money {
    amount.unwrap_or_default()
}

/// Whether an optional line item should be shown.
///
/// `true` exactly when the amount is present and not zero. Negative amounts
/// count as non-zero.
#[inline]
pub fn is_non_zero(amount: Option<Money>) -> bool {
    matches!(amount, Some(m) if !m.is_zero())
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-style rendering in raw minor units.
///
/// ## Note
/// This is NOT the display format shown to shoppers. Currency-aware text
/// comes from an `AmountFormatter`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Money {
    fn from(minor: i64) -> Self {
        Money(minor)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minor() {
        let money = Money::from_minor(1099);
        assert_eq!(money.minor_units(), 1099);
        assert_eq!(Money::from(1099), money);
    }

    #[test]
    fn test_effective_coalesces_none_to_zero() {
        assert_eq!(effective(None), Money::zero());
        assert_eq!(effective(Some(Money::zero())), Money::zero());
        assert_eq!(effective(Some(Money::from_minor(250))).minor_units(), 250);
        assert_eq!(effective(Some(Money::from_minor(-250))).minor_units(), -250);
    }

    #[test]
    fn test_is_non_zero() {
        assert!(!is_non_zero(None));
        assert!(!is_non_zero(Some(Money::zero())));
        assert!(is_non_zero(Some(Money::from_minor(1))));
        assert!(is_non_zero(Some(Money::from_minor(-1))));
    }

    #[test]
    fn test_tax_calculation_with_rounding() {
        // 1000 at 8.25% = 82.5 → 83
        let tax = Money::from_minor(1000).checked_tax(TaxRate::from_bps(825));
        assert_eq!(tax, Some(Money::from_minor(83)));

        // Negative amounts round away from zero too
        let tax = Money::from_minor(-1000).checked_tax(TaxRate::from_bps(825));
        assert_eq!(tax, Some(Money::from_minor(-83)));
    }

    #[test]
    fn test_add_tax() {
        let gross = Money::from_minor(1000).checked_add_tax(TaxRate::from_bps(2500));
        assert_eq!(gross, Some(Money::from_minor(1250)));

        let untouched = Money::from_minor(1000).checked_add_tax(TaxRate::zero());
        assert_eq!(untouched, Some(Money::from_minor(1000)));
    }

    #[test]
    fn test_add_tax_overflow_is_none() {
        let huge = Money::from_minor(i64::MAX);
        assert_eq!(huge.checked_add_tax(TaxRate::from_bps(10000)), None);
    }

    #[test]
    fn test_sign() {
        assert!(Money::from_minor(-5).is_negative());
        assert!(Money::from_minor(i64::MIN).is_negative());
        assert!(!Money::zero().is_negative());
    }

    #[test]
    fn test_checked_add() {
        let sum = Money::from_minor(1000).checked_add(Money::from_minor(-250));
        assert_eq!(sum, Some(Money::from_minor(750)));
        assert_eq!(Money::from_minor(i64::MAX).checked_add(Money::from_minor(1)), None);
    }

    #[test]
    fn test_serde_is_a_bare_number() {
        let json = serde_json::to_string(&Money::from_minor(1600)).unwrap();
        assert_eq!(json, "1600");
        let back: Money = serde_json::from_str("880").unwrap();
        assert_eq!(back, Money::from_minor(880));
    }
}
