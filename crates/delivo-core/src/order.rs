//! # Order
//!
//! An immutable snapshot of checked-out items plus a mutable status.
//!
//! ## Ownership
//! ```text
//!            Rc<Order>                        Rc<Order>
//!  User.orders ──────────►  ┌──────────────┐ ◄────────── OrderRegistry.orders
//!  (display only)           │ id, items    │             (may change status)
//!                           │ status: Cell │
//!                           └──────────────┘
//! ```
//! Both sides hold the same handle, so a status change made by the registry
//! is what the user sees. Only the registry can call the status setter.

use std::cell::Cell;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::item::{Item, ItemLine};
use crate::money::Money;
use crate::types::{OrderId, OrderStatus};

/// A checked-out order.
#[derive(Debug)]
pub struct Order {
    id: OrderId,
    items: Vec<Item>,
    status: Cell<OrderStatus>,
    placed_at: DateTime<Utc>,
    updated_at: Cell<DateTime<Utc>>,
}

impl Order {
    /// Builds a PLACED order. `items` must already be the caller's copy.
    pub(crate) fn new(id: OrderId, items: Vec<Item>) -> Self {
        let now = Utc::now();
        Order {
            id,
            items,
            status: Cell::new(OrderStatus::Placed),
            placed_at: now,
            updated_at: Cell::new(now),
        }
    }

    #[inline]
    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[inline]
    pub fn status(&self) -> OrderStatus {
        self.status.get()
    }

    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }

    /// Time of the last status write (equal to `placed_at` until then).
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at.get()
    }

    /// Sum of item prices.
    pub fn total(&self) -> Money {
        self.items.iter().map(Item::price).sum()
    }

    /// One-line receipt, e.g. `Order #1 | Total $15.50 | PLACED`.
    pub fn receipt(&self) -> String {
        format!(
            "Order #{} | Total {} | {}",
            self.id,
            self.total(),
            self.status()
        )
    }

    /// Serializable snapshot of the order as it is right now.
    pub fn summary(&self) -> OrderSummary {
        OrderSummary {
            id: self.id,
            status: self.status(),
            items: self.items.iter().map(Item::line).collect(),
            total_cents: self.total().cents(),
            placed_at: self.placed_at,
            updated_at: self.updated_at(),
        }
    }

    /// Writes a new status and returns the previous one.
    pub(crate) fn set_status(&self, status: OrderStatus) -> OrderStatus {
        self.updated_at.set(Utc::now());
        self.status.replace(status)
    }
}

/// JSON-friendly view of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub id: OrderId,
    pub status: OrderStatus,
    pub items: Vec<ItemLine>,
    pub total_cents: i64,
    pub placed_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ItemType, Modifier};

    fn sample_items() -> Vec<Item> {
        vec![
            Item::base(ItemType::Pizza)
                .with_modifier(Modifier::Cheese)
                .with_modifier(Modifier::Large),
            Item::base(ItemType::Cola),
        ]
    }

    #[test]
    fn test_new_order_is_placed() {
        let order = Order::new(OrderId::new(1), sample_items());
        assert_eq!(order.status(), OrderStatus::Placed);
        assert_eq!(order.placed_at(), order.updated_at());
    }

    #[test]
    fn test_receipt_total_and_status() {
        let order = Order::new(OrderId::new(1), sample_items());
        assert_eq!(order.total().cents(), 1550);
        assert_eq!(order.receipt(), "Order #1 | Total $15.50 | PLACED");
    }

    #[test]
    fn test_set_status_returns_previous() {
        let order = Order::new(OrderId::new(2), sample_items());
        assert_eq!(order.set_status(OrderStatus::Cooking), OrderStatus::Placed);
        assert_eq!(order.set_status(OrderStatus::Cooking), OrderStatus::Cooking);
        assert_eq!(order.receipt(), "Order #2 | Total $15.50 | COOKING");
        assert!(order.updated_at() >= order.placed_at());
    }

    #[test]
    fn test_summary_serializes() {
        let order = Order::new(OrderId::new(9), sample_items());
        let summary = order.summary();
        assert_eq!(summary.items.len(), 2);
        assert_eq!(summary.items[0].description, "Classic pizza, cheese, large");

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["id"], 9);
        assert_eq!(json["status"], "PLACED");
        assert_eq!(json["total_cents"], 1550);
        assert_eq!(json["items"][1]["item_type"], "COLA");
    }
}
