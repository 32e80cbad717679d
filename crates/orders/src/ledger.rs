//! Append-only ledger of committed orders.

use chrono::{DateTime, Utc};

use orderdesk_core::OrderId;

use crate::order::{Order, OrderLine};

/// Stores committed orders in creation order and assigns their identifiers.
///
/// Purely additive; there is no update or delete, so the next identifier can
/// be derived from what is already stored.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    orders: Vec<Order>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifier the next committed order will receive. Starts at 1 and
    /// increases by 1 per commit.
    pub fn next_order_id(&self) -> OrderId {
        OrderId::new(self.orders.len() as u32 + 1)
    }

    /// Finalize an order: assign the next identifier and store it.
    ///
    /// Only the placement workflow commits, which is what keeps "an order
    /// exists" equivalent to "its stock was decremented".
    pub(crate) fn commit(&mut self, lines: Vec<OrderLine>, placed_at: DateTime<Utc>) -> &Order {
        let id = self.next_order_id();
        self.orders.push(Order::new(id, lines, placed_at));
        self.orders.last().expect("order pushed above")
    }

    /// Committed orders, oldest first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| order.id() == id)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
