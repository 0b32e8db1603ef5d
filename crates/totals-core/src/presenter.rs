//! # Totals Presenter
//!
//! Turns a [`TotalsRecord`] into the six rows of a totals breakdown.
//!
//! ## Row Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  #  Row         Visible when                  Amount text               │
//! │  ─  ──────────  ────────────────────────────  ──────────────────────    │
//! │  1  Subtotal    always                        format(subtotal)          │
//! │  2  Discount    discount_total is non-zero    "- " + format(|discount|) │
//! │  3  Shipping    always                        format(shipping_total)    │
//! │  4  Taxes       always                        format(tax_total)         │
//! │  5  Gift card   gift_card_total is non-zero   "- " + format(|gift card|)│
//! │  6  Total       always (emphasised)           format(total)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! Absent amounts are zero. The order is fixed. `total` is displayed as
//! supplied, never recomputed.
//!
//! ## Usage
//! ```rust
//! use totals_core::format::RegionFormatter;
//! use totals_core::money::Money;
//! use totals_core::presenter::{present, RowKind};
//! use totals_core::record::TotalsRecord;
//! use totals_core::region::Region;
//!
//! let mut record = TotalsRecord::empty(Region::new("reg_us", "usd"));
//! record.subtotal = Some(Money::from_minor(1000));
//! record.discount_total = Some(Money::from_minor(200));
//!
//! let breakdown = present(&record, &RegionFormatter::new()).unwrap();
//! assert_eq!(breakdown.row(RowKind::Discount).unwrap().formatted, "- $2.00");
//! assert_eq!(breakdown.row(RowKind::Total).unwrap().formatted, "$0.00");
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use ts_rs::TS;

use crate::error::CoreResult;
use crate::format::AmountFormatter;
use crate::money::{effective, is_non_zero, Money};
use crate::record::TotalsRecord;

/// Marker placed in front of deductions.
pub const DEDUCTION_PREFIX: &str = "- ";

// =============================================================================
// Row Types
// =============================================================================

/// Stable machine identifier of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RowKind {
    Subtotal,
    Discount,
    Shipping,
    Taxes,
    GiftCard,
    Total,
}

impl RowKind {
    /// Every kind, in display order.
    pub const ALL: [RowKind; 6] = [
        RowKind::Subtotal,
        RowKind::Discount,
        RowKind::Shipping,
        RowKind::Taxes,
        RowKind::GiftCard,
        RowKind::Total,
    ];

    /// Rows that subtract from what the shopper pays.
    pub const fn is_deduction(&self) -> bool {
        matches!(self, RowKind::Discount | RowKind::GiftCard)
    }

    /// Rows that are only shown for non-zero amounts.
    pub const fn is_optional(&self) -> bool {
        self.is_deduction()
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            RowKind::Subtotal => "subtotal",
            RowKind::Discount => "discount",
            RowKind::Shipping => "shipping",
            RowKind::Taxes => "taxes",
            RowKind::GiftCard => "gift_card",
            RowKind::Total => "total",
        }
    }
}

impl std::fmt::Display for RowKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How prominently a row is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    #[default]
    Regular,
    /// Larger type, set apart from the rows around it.
    Total,
}

/// One labelled line of the breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DisplayRow {
    pub kind: RowKind,
    pub label: String,
    /// Effective raw value, for assertions that should not parse text.
    pub amount: Money,
    pub formatted: String,
    pub visible: bool,
    pub emphasis: Emphasis,
}

// =============================================================================
// Labels
// =============================================================================

/// Display labels per row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub subtotal: String,
    pub discount: String,
    pub shipping: String,
    pub taxes: String,
    pub gift_card: String,
    pub total: String,
}

impl Default for Labels {
    fn default() -> Self {
        Labels {
            subtotal: "Subtotal".to_string(),
            discount: "Discount".to_string(),
            shipping: "Shipping".to_string(),
            taxes: "Taxes".to_string(),
            gift_card: "Gift card".to_string(),
            total: "Total".to_string(),
        }
    }
}

impl Labels {
    pub fn for_kind(&self, kind: RowKind) -> &str {
        match kind {
            RowKind::Subtotal => &self.subtotal,
            RowKind::Discount => &self.discount,
            RowKind::Shipping => &self.shipping,
            RowKind::Taxes => &self.taxes,
            RowKind::GiftCard => &self.gift_card,
            RowKind::Total => &self.total,
        }
    }
}

// =============================================================================
// Breakdown
// =============================================================================

/// All six rows, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TotalsBreakdown {
    pub rows: Vec<DisplayRow>,
}

impl TotalsBreakdown {
    /// Rows the shopper sees.
    pub fn visible_rows(&self) -> impl Iterator<Item = &DisplayRow> {
        self.rows.iter().filter(|row| row.visible)
    }

    /// The row of a given kind.
    ///
    /// A presented breakdown carries all six; one deserialized from
    /// elsewhere may not.
    pub fn row(&self, kind: RowKind) -> Option<&DisplayRow> {
        self.rows.iter().find(|row| row.kind == kind)
    }

    /// `false` for hidden rows and for rows the breakdown lacks.
    pub fn is_visible(&self, kind: RowKind) -> bool {
        self.row(kind).is_some_and(|row| row.visible)
    }
}

// =============================================================================
// Presenter
// =============================================================================

/// Presents with the default labels.
pub fn present<F>(record: &TotalsRecord, formatter: &F) -> CoreResult<TotalsBreakdown>
where
    F: AmountFormatter + ?Sized,
{
    build(record, formatter, &Labels::default())
}

/// Presenter bound to a formatter and a label set.
#[derive(Debug, Clone)]
pub struct TotalsPresenter<F> {
    formatter: F,
    labels: Labels,
}

impl<F: AmountFormatter> TotalsPresenter<F> {
    pub fn new(formatter: F) -> Self {
        TotalsPresenter {
            formatter,
            labels: Labels::default(),
        }
    }

    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    pub fn formatter(&self) -> &F {
        &self.formatter
    }

    /// Builds the breakdown for `record`.
    ///
    /// Identical input always yields identical output. Errors come only
    /// from the formatter and are returned unchanged.
    pub fn present(&self, record: &TotalsRecord) -> CoreResult<TotalsBreakdown> {
        build(record, &self.formatter, &self.labels)
    }
}

fn build<F>(record: &TotalsRecord, formatter: &F, labels: &Labels) -> CoreResult<TotalsBreakdown>
where
    F: AmountFormatter + ?Sized,
{
    let mut rows = Vec::with_capacity(RowKind::ALL.len());

    for kind in RowKind::ALL {
        let field = field_for(record, kind);
        let amount = effective(field);
        let visible = !kind.is_optional() || is_non_zero(field);

        let formatted = if kind.is_deduction() {
            if amount.is_negative() {
                warn!(
                    row = %kind,
                    amount = amount.minor_units(),
                    region = %record.region.id,
                    "Negative deduction, showing its magnitude"
                );
            }
            let text = formatter.format_amount(amount, &record.region, false)?;
            // The marker stands in for the formatter's own minus sign
            let magnitude = text.strip_prefix('-').unwrap_or(&text);
            format!("{DEDUCTION_PREFIX}{magnitude}")
        } else {
            formatter.format_amount(amount, &record.region, false)?
        };

        rows.push(DisplayRow {
            kind,
            label: labels.for_kind(kind).to_string(),
            amount,
            formatted,
            visible,
            emphasis: if kind == RowKind::Total {
                Emphasis::Total
            } else {
                Emphasis::Regular
            },
        });
    }

    let breakdown = TotalsBreakdown { rows };
    debug!(
        region = %record.region.id,
        visible = breakdown.visible_rows().count(),
        "Presented totals"
    );

    Ok(breakdown)
}

fn field_for(record: &TotalsRecord, kind: RowKind) -> Option<Money> {
    match kind {
        RowKind::Subtotal => record.subtotal,
        RowKind::Discount => record.discount_total,
        RowKind::Shipping => record.shipping_total,
        RowKind::Taxes => record.tax_total,
        RowKind::GiftCard => record.gift_card_total,
        RowKind::Total => record.total,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
