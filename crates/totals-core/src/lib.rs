//! # totals-core: Cart & Order Totals Presentation
//!
//! Turns the monetary totals of a cart or a placed order into a labelled,
//! currency-formatted breakdown. Pure functions, zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │           Storefront API (carts, orders, regions)               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON                                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ totals-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌───────────┐  ┌──────────────┐  │   │
//! │  │   │  record  │─►│presenter │─►│  render   │  │   format     │  │   │
//! │  │   │Cart/Order│  │ 6 rows   │  │ text block│  │ RegionFormat │  │   │
//! │  │   └──────────┘  └────┬─────┘  └───────────┘  └──────▲───────┘  │   │
//! │  │                      └──── format_amount() ─────────┘          │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO STATE • SAME INPUT = SAME OUTPUT     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │         totals-cli / storefront view (via ts-rs types)          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Minor-unit `Money`, `effective` and `is_non_zero`
//! - [`region`] - Region, ISO currency catalog with display overrides, tax rate
//! - [`format`] - The `AmountFormatter` seam and `RegionFormatter`
//! - [`record`] - `TotalsRecord` and the cart/order adapters
//! - [`presenter`] - Row construction and visibility
//! - [`render`] - Fixed-width text output
//! - [`validation`] - Startup checks for regions and settings
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use totals_core::{present, render_text, Money, RegionFormatter, Region, TotalsRecord};
//!
//! let mut record = TotalsRecord::empty(Region::new("reg_us", "usd"));
//! record.subtotal = Some(Money::from_minor(1000));
//! record.shipping_total = Some(Money::from_minor(500));
//! record.tax_total = Some(Money::from_minor(100));
//! record.total = Some(Money::from_minor(1600));
//!
//! let breakdown = present(&record, &RegionFormatter::new()).unwrap();
//! assert_eq!(breakdown.visible_rows().count(), 4);
//!
//! let text = render_text(&breakdown, 32);
//! assert!(text.contains("$16.00"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod format;
pub mod money;
pub mod presenter;
pub mod record;
pub mod region;
pub mod render;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use format::{AmountFormatter, RegionFormatter};
pub use money::{effective, is_non_zero, Money};
pub use presenter::{
    present, DisplayRow, Emphasis, Labels, RowKind, TotalsBreakdown, TotalsPresenter,
};
pub use record::{Cart, Order, TotalsRecord, TotalsSource};
pub use region::{
    iso_currency, CatalogEntry, Currency, CurrencyCatalog, Region, SymbolPosition, TaxRate,
};
pub use render::render_text;
