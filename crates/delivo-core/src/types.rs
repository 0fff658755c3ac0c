//! # Domain Types
//!
//! Identifiers and enums shared by every module of delivo-core.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐        │
//! │  │    ItemType     │   │    Modifier     │   │   OrderStatus   │        │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │        │
//! │  │  PIZZA          │   │  CHEESE  +1.50  │   │  PLACED         │        │
//! │  │  BURGER         │   │  SPICY   +0.80  │   │  COOKING        │        │
//! │  │  FRIES          │   │  LARGE   +2.00  │   │  READY          │        │
//! │  │  COLA           │   └─────────────────┘   │  DELIVERED      │        │
//! │  │  COFFEE         │                         └─────────────────┘        │
//! │  └─────────────────┘   ┌─────────────────┐                              │
//! │                        │    OrderId      │                              │
//! │                        │  u64, from 1    │                              │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Textual Identifiers
//! Every enum has a stable upper-case identifier (`"PIZZA"`, `"CHEESE"`,
//! `"COOKING"`) used for parsing, display and serde. Parsing matches the
//! identifier exactly: `"pizza"` and `" PIZZA"` are unknown.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::money::Money;

// =============================================================================
// Item Type
// =============================================================================

/// The five purchasable base items.
///
/// Name, description and price live in the [`catalog`](crate::catalog).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemType {
    Pizza,
    Burger,
    Fries,
    Cola,
    Coffee,
}

impl ItemType {
    /// All base items in menu order.
    pub const ALL: [ItemType; 5] = [
        ItemType::Pizza,
        ItemType::Burger,
        ItemType::Fries,
        ItemType::Cola,
        ItemType::Coffee,
    ];

    /// Stable identifier, e.g. `"PIZZA"`.
    pub const fn id(&self) -> &'static str {
        match self {
            ItemType::Pizza => "PIZZA",
            ItemType::Burger => "BURGER",
            ItemType::Fries => "FRIES",
            ItemType::Cola => "COLA",
            ItemType::Coffee => "COFFEE",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ItemType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemType::ALL
            .into_iter()
            .find(|t| t.id() == s)
            .ok_or_else(|| CoreError::UnknownItemType(s.to_string()))
    }
}

// =============================================================================
// Modifier
// =============================================================================

/// A priced add-on that wraps an item.
///
/// ## Modifier Table
/// ```text
/// ┌──────────┬────────────┬────────┐
/// │ Modifier │ Suffix     │ Delta  │
/// ├──────────┼────────────┼────────┤
/// │ CHEESE   │ ", cheese" │ +$1.50 │
/// │ SPICY    │ ", spicy"  │ +$0.80 │
/// │ LARGE    │ ", large"  │ +$2.00 │
/// └──────────┴────────────┴────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Modifier {
    Cheese,
    Spicy,
    Large,
}

impl Modifier {
    pub const ALL: [Modifier; 3] = [Modifier::Cheese, Modifier::Spicy, Modifier::Large];

    /// Stable identifier, e.g. `"CHEESE"`.
    pub const fn id(&self) -> &'static str {
        match self {
            Modifier::Cheese => "CHEESE",
            Modifier::Spicy => "SPICY",
            Modifier::Large => "LARGE",
        }
    }

    /// Text appended to the wrapped item's description.
    pub const fn suffix(&self) -> &'static str {
        match self {
            Modifier::Cheese => ", cheese",
            Modifier::Spicy => ", spicy",
            Modifier::Large => ", large",
        }
    }

    /// Price added on top of the wrapped item. Never negative.
    pub const fn delta(&self) -> Money {
        match self {
            Modifier::Cheese => Money::from_cents(150),
            Modifier::Spicy => Money::from_cents(80),
            Modifier::Large => Money::from_cents(200),
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Modifier {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Modifier::ALL
            .into_iter()
            .find(|m| m.id() == s)
            .ok_or_else(|| CoreError::UnknownModifier(s.to_string()))
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// Lifecycle status of an order.
///
/// ## Lifecycle
/// ```text
/// PLACED ──► COOKING ──► READY ──► DELIVERED
/// ```
/// The arrows are the forward chain used by the strict transition policy.
/// The default (permissive) policy allows any status to be set at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Order was just created at checkout.
    #[default]
    Placed,
    /// Kitchen is preparing the order.
    Cooking,
    /// Ready for pickup / dispatch.
    Ready,
    /// Handed to the customer.
    Delivered,
}

impl OrderStatus {
    /// All statuses in lifecycle order.
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Placed,
        OrderStatus::Cooking,
        OrderStatus::Ready,
        OrderStatus::Delivered,
    ];

    pub const fn id(&self) -> &'static str {
        match self {
            OrderStatus::Placed => "PLACED",
            OrderStatus::Cooking => "COOKING",
            OrderStatus::Ready => "READY",
            OrderStatus::Delivered => "DELIVERED",
        }
    }

    /// The single forward step from this status, if any.
    pub const fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Placed => Some(OrderStatus::Cooking),
            OrderStatus::Cooking => Some(OrderStatus::Ready),
            OrderStatus::Ready => Some(OrderStatus::Delivered),
            OrderStatus::Delivered => None,
        }
    }

    /// Conceptually terminal. Nothing enforces it under the permissive policy.
    pub const fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for OrderStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|st| st.id() == s)
            .ok_or_else(|| CoreError::UnknownStatus(s.to_string()))
    }
}

// =============================================================================
// Order Id
// =============================================================================

/// Registry-assigned order identifier. The first order of a registry is 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(u64);

impl OrderId {
    #[inline]
    pub const fn new(value: u64) -> Self {
        OrderId(value)
    }

    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for OrderId {
    fn from(value: u64) -> Self {
        OrderId(value)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
