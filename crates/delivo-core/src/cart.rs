//! # Cart
//!
//! The items a user has composed but not yet checked out.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Shell Action             Cart Call               State Change          │
//! │  ────────────             ─────────               ────────────          │
//! │                                                                         │
//! │  Add food + extras ──────► add(item) ───────────► items.push(item)      │
//! │                                                                         │
//! │  Show cart ──────────────► items() ─────────────► (read only)           │
//! │                                                                         │
//! │  Checkout ───────────────► checkout_items() ────► (copy handed to       │
//! │                                                    the registry)        │
//! │                                                                         │
//! │  NOTE: There is no per-line removal. A cancelled cart is dropped.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};

use crate::item::Item;
use crate::money::Money;

/// Ordered, append-only list of composed items.
///
/// ## Invariants
/// - Lines keep insertion order
/// - The same composed item may appear on several lines
/// - Lines are only added through [`Cart::add`]
#[derive(Debug, Clone)]
pub struct Cart {
    items: Vec<Item>,
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Appends a line to the end of the cart.
    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Read-only view of the lines.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Owned copy of the lines for checkout.
    pub fn checkout_items(&self) -> Vec<Item> {
        self.items.clone()
    }

    /// Empties the cart and restarts its clock.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of line prices.
    pub fn total(&self) -> Money {
        self.items.iter().map(Item::price).sum()
    }

    /// When the cart was created/last cleared.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}
