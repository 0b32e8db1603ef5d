//! # Totals Records
//!
//! The input side of the presenter, plus the adapters that narrow richer
//! cart and order payloads down to it.
//!
//! ## Narrowing at the Boundary
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Cart ─────────────┐                                                   │
//! │   (id, email,       │  From<&Cart>                                      │
//! │    item_total, ...) ├────────────────►  TotalsRecord ──► presenter      │
//! │                     │  From<&Order>     (6 amounts + region)            │
//! │   Order ────────────┘                                                   │
//! │   (display_id, paid_total, refunded_total, ...)                         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! The presenter only ever sees `TotalsRecord`, so it cannot grow a
//! dependency on fields it does not display.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::region::Region;

// =============================================================================
// Totals Record
// =============================================================================

/// The amounts a totals breakdown is built from.
///
/// Every amount is optional. `None` and a missing JSON key both mean
/// "nothing to show" and display as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TotalsRecord {
    #[serde(default)]
    pub subtotal: Option<Money>,

    #[serde(default)]
    pub discount_total: Option<Money>,

    #[serde(default)]
    pub gift_card_total: Option<Money>,

    #[serde(default)]
    pub tax_total: Option<Money>,

    #[serde(default)]
    pub shipping_total: Option<Money>,

    /// Trusted as supplied; never recomputed from the other fields.
    #[serde(default)]
    pub total: Option<Money>,

    pub region: Region,
}

impl TotalsRecord {
    /// A record with every amount absent.
    pub fn empty(region: Region) -> Self {
        TotalsRecord {
            subtotal: None,
            discount_total: None,
            gift_card_total: None,
            tax_total: None,
            shipping_total: None,
            total: None,
            region,
        }
    }
}

// =============================================================================
// Cart
// =============================================================================

/// A shopping cart as delivered by the storefront API.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cart {
    pub id: String,

    #[serde(default)]
    pub email: Option<String>,

    /// Sum of line items before discounts.
    #[serde(default)]
    pub item_total: Option<Money>,

    #[serde(default)]
    pub subtotal: Option<Money>,
    #[serde(default)]
    pub discount_total: Option<Money>,
    #[serde(default)]
    pub gift_card_total: Option<Money>,
    #[serde(default)]
    pub tax_total: Option<Money>,
    #[serde(default)]
    pub shipping_total: Option<Money>,
    #[serde(default)]
    pub total: Option<Money>,

    pub region: Region,
}

impl From<&Cart> for TotalsRecord {
    fn from(cart: &Cart) -> Self {
        TotalsRecord {
            subtotal: cart.subtotal,
            discount_total: cart.discount_total,
            gift_card_total: cart.gift_card_total,
            tax_total: cart.tax_total,
            shipping_total: cart.shipping_total,
            total: cart.total,
            region: cart.region.clone(),
        }
    }
}

// =============================================================================
// Order
// =============================================================================

/// A placed order as delivered by the storefront API.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Order {
    pub id: String,

    /// Human-facing order number.
    #[serde(default)]
    pub display_id: Option<i64>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub subtotal: Option<Money>,
    #[serde(default)]
    pub discount_total: Option<Money>,
    #[serde(default)]
    pub gift_card_total: Option<Money>,
    #[serde(default)]
    pub tax_total: Option<Money>,
    #[serde(default)]
    pub shipping_total: Option<Money>,
    #[serde(default)]
    pub total: Option<Money>,

    #[serde(default)]
    pub paid_total: Option<Money>,

    #[serde(default)]
    pub refunded_total: Option<Money>,

    pub region: Region,
}

impl From<&Order> for TotalsRecord {
    fn from(order: &Order) -> Self {
        TotalsRecord {
            subtotal: order.subtotal,
            discount_total: order.discount_total,
            gift_card_total: order.gift_card_total,
            tax_total: order.tax_total,
            shipping_total: order.shipping_total,
            total: order.total,
            region: order.region.clone(),
        }
    }
}

// =============================================================================
// Totals Source
// =============================================================================

/// Anything a totals breakdown can be shown for.
///
/// ## JSON Shape
/// ```json
/// { "cart":  { "id": "cart_01", "subtotal": 1000, "region": { ... } } }
/// { "order": { "id": "order_01", "display_id": 42, "region": { ... } } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TotalsSource {
    Cart(Cart),
    Order(Order),
    /// An already-narrowed record.
    Totals(TotalsRecord),
}

impl TotalsSource {
    /// Identifier for log lines (`cart_01`, `order_01`, or the region id).
    pub fn id(&self) -> &str {
        match self {
            TotalsSource::Cart(cart) => &cart.id,
            TotalsSource::Order(order) => &order.id,
            TotalsSource::Totals(record) => &record.region.id,
        }
    }

    /// Narrows to the fields the presenter reads.
    pub fn to_record(&self) -> TotalsRecord {
        match self {
            TotalsSource::Cart(cart) => cart.into(),
            TotalsSource::Order(order) => order.into(),
            TotalsSource::Totals(record) => record.clone(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_and_null_fields_deserialize_as_none() {
        let record: TotalsRecord = serde_json::from_str(
            r#"{
                "subtotal": 1000,
                "discount_total": null,
                "region": { "id": "reg_us", "currency_code": "usd" }
            }"#,
        )
        .unwrap();

        assert_eq!(record.subtotal, Some(Money::from_minor(1000)));
        assert_eq!(record.discount_total, None);
        assert_eq!(record.total, None);
        assert_eq!(record.region.id, "reg_us");
    }

    #[test]
    fn test_empty_record() {
        let record = TotalsRecord::empty(Region::new("reg_us", "usd"));
        assert!(record.subtotal.is_none());
        assert!(record.total.is_none());
    }

    #[test]
    fn test_cart_narrows_to_record() {
        let cart: Cart = serde_json::from_str(
            r#"{
                "id": "cart_01",
                "email": "shopper@example.com",
                "item_total": 1200,
                "subtotal": 1000,
                "discount_total": 200,
                "tax_total": 80,
                "total": 880,
                "region": { "id": "reg_us", "currency_code": "usd" }
            }"#,
        )
        .unwrap();

        let record = TotalsRecord::from(&cart);
        assert_eq!(record.subtotal, Some(Money::from_minor(1000)));
        assert_eq!(record.discount_total, Some(Money::from_minor(200)));
        assert_eq!(record.gift_card_total, None);
        assert_eq!(record.total, Some(Money::from_minor(880)));
        assert_eq!(record.region, cart.region);
    }

    #[test]
    fn test_order_narrows_to_record() {
        let order: Order = serde_json::from_str(
            r#"{
                "id": "order_01",
                "display_id": 42,
                "subtotal": 5000,
                "gift_card_total": 1000,
                "paid_total": 4000,
                "refunded_total": 0,
                "total": 4000,
                "region": { "id": "reg_eu", "currency_code": "eur" }
            }"#,
        )
        .unwrap();

        let record: TotalsRecord = (&order).into();
        assert_eq!(record.gift_card_total, Some(Money::from_minor(1000)));
        assert_eq!(record.total, Some(Money::from_minor(4000)));
        assert_eq!(record.region.currency_code, "eur");
    }

    #[test]
    fn test_source_is_tagged() {
        let source: TotalsSource = serde_json::from_str(
            r#"{ "order": { "id": "order_07", "region": { "id": "reg_us", "currency_code": "usd" } } }"#,
        )
        .unwrap();

        assert_eq!(source.id(), "order_07");
        assert!(matches!(source, TotalsSource::Order(_)));
        assert_eq!(
            source.to_record(),
            TotalsRecord::empty(Region::new("reg_us", "usd"))
        );
    }
}
