use chrono::{DateTime, Datelike, Duration, Utc, Weekday};
use serde::{Deserialize, Serialize};

use orderdesk_core::{OrderId, ProductId};

/// One committed product/quantity pair within an order.
///
/// Name and unit price are snapshotted at commit time so the order stays
/// self-contained no matter what happens to the catalog afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub line_no: u32,
    pub product_id: ProductId,
    pub name: String,
    pub quantity: u32,
    /// Price in smallest currency unit (e.g., cents).
    pub unit_price: u64,
}

impl OrderLine {
    /// Unit price × quantity.
    pub fn subtotal(&self) -> u64 {
        self.unit_price * u64::from(self.quantity)
    }
}

/// A committed order. Immutable once stored in the ledger.
///
/// Delivery date and total amount are recomputed from the committed data on
/// demand rather than cached in fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    lines: Vec<OrderLine>,
    placed_at: DateTime<Utc>,
}

impl Order {
    pub(crate) fn new(id: OrderId, lines: Vec<OrderLine>, placed_at: DateTime<Utc>) -> Self {
        Self {
            id,
            lines,
            placed_at,
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }

    /// Total amount: the sum over lines of unit price × quantity.
    pub fn total(&self) -> u64 {
        self.lines.iter().map(OrderLine::subtotal).sum()
    }

    /// Estimated delivery date for this order.
    pub fn delivery_due(&self) -> DateTime<Utc> {
        delivery_due(self.placed_at)
    }
}

/// Two days after `placed_at`, shifted forward to Monday when that lands on
/// a weekend.
pub fn delivery_due(placed_at: DateTime<Utc>) -> DateTime<Utc> {
    let estimated = placed_at + Duration::days(2);
    match estimated.weekday() {
        Weekday::Sat => estimated + Duration::days(2),
        Weekday::Sun => estimated + Duration::days(1),
        _ => estimated,
    }
}
