//! # Item Catalog
//!
//! The fixed set of purchasable base items and their intrinsic data.
//!
//! ## Menu
//! ```text
//! ┌────────┬───────────────┬────────┬───────────────────────┐
//! │ Item   │ Description   │ Price  │ Extras                │
//! ├────────┼───────────────┼────────┼───────────────────────┤
//! │ Pizza  │ Classic pizza │ $10.00 │ CHEESE, SPICY, LARGE  │
//! │ Burger │ Beef burger   │  $7.00 │ CHEESE, SPICY, LARGE  │
//! │ Fries  │ Crispy fries  │  $3.50 │ SPICY, LARGE          │
//! │ Cola   │ Coca cola     │  $2.00 │ LARGE                 │
//! │ Coffee │ Hot coffee    │  $2.50 │ LARGE                 │
//! └────────┴───────────────┴────────┴───────────────────────┘
//! ```
//!
//! The catalog is stateless: the same type always yields an identical item.
//!
//! ## Usage
//! ```rust
//! use delivo_core::catalog;
//!
//! let pizza = catalog::create_item("PIZZA").unwrap();
//! assert_eq!(pizza.name(), "Pizza");
//! assert_eq!(pizza.price().to_string(), "$10.00");
//!
//! assert!(catalog::create_item("SUSHI").is_err());
//! ```

use serde::Serialize;

use crate::error::CoreResult;
use crate::item::{allowed_modifiers, Item};
use crate::money::Money;
use crate::types::{ItemType, Modifier};

/// Intrinsic data of a base item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseItem {
    pub item_type: ItemType,
    pub name: &'static str,
    pub description: &'static str,
    pub price: Money,
}

const BASE_ITEMS: [BaseItem; 5] = [
    BaseItem {
        item_type: ItemType::Pizza,
        name: "Pizza",
        description: "Classic pizza",
        price: Money::from_cents(1000),
    },
    BaseItem {
        item_type: ItemType::Burger,
        name: "Burger",
        description: "Beef burger",
        price: Money::from_cents(700),
    },
    BaseItem {
        item_type: ItemType::Fries,
        name: "Fries",
        description: "Crispy fries",
        price: Money::from_cents(350),
    },
    BaseItem {
        item_type: ItemType::Cola,
        name: "Cola",
        description: "Coca cola",
        price: Money::from_cents(200),
    },
    BaseItem {
        item_type: ItemType::Coffee,
        name: "Coffee",
        description: "Hot coffee",
        price: Money::from_cents(250),
    },
];

/// Looks up the intrinsic data for a base type.
pub fn base(item_type: ItemType) -> &'static BaseItem {
    // BASE_ITEMS is laid out in ItemType declaration order.
    &BASE_ITEMS[item_type as usize]
}

/// Creates an undecorated item of the given type.
#[inline]
pub fn create(item_type: ItemType) -> Item {
    Item::base(item_type)
}

/// Creates an undecorated item from its type identifier.
///
/// ## Errors
/// `CoreError::UnknownItemType` when `type_id` is not one of the five
/// catalog identifiers. Callers enumerate [`ItemType::ALL`] or [`menu`], so
/// hitting this means the caller is broken.
pub fn create_item(type_id: &str) -> CoreResult<Item> {
    let item_type: ItemType = type_id.parse()?;
    Ok(create(item_type))
}

// =============================================================================
// Menu Listing
// =============================================================================

/// One line of the printed menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub item_type: ItemType,
    pub name: &'static str,
    pub description: &'static str,
    pub price: Money,
    pub extras: &'static [Modifier],
}

/// The whole menu in display order.
pub fn menu() -> Vec<MenuEntry> {
    ItemType::ALL
        .into_iter()
        .map(|t| {
            let b = base(t);
            MenuEntry {
                item_type: t,
                name: b.name,
                description: b.description,
                price: b.price,
                extras: allowed_modifiers(t),
            }
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
