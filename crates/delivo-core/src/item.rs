//! # Composed Items
//!
//! A base catalog item wrapped by zero or more priced modifiers.
//!
//! ## Structure
//! ```text
//! Item::Modified { modifier: LARGE }
//!   └── Item::Modified { modifier: CHEESE }
//!         └── Item::Base(PIZZA)
//!
//! description() = "Classic pizza" + ", cheese" + ", large"
//! price()       = $10.00 + $1.50 + $2.00 = $13.50
//! type()/name() = PIZZA / "Pizza"   (always the innermost base)
//! ```
//!
//! Every layer owns the layer below it. `price()` and `description()` walk
//! the chain and add one delta / suffix per layer; nothing is ever flattened
//! into the base.
//!
//! ## Usage
//! ```rust
//! use delivo_core::catalog;
//! use delivo_core::item::apply_modifier;
//!
//! let pizza = catalog::create_item("PIZZA").unwrap();
//! let pizza = apply_modifier(pizza, "CHEESE");
//! let pizza = apply_modifier(pizza, "LARGE");
//!
//! assert_eq!(pizza.description(), "Classic pizza, cheese, large");
//! assert_eq!(pizza.price().cents(), 1350);
//! assert_eq!(pizza.name(), "Pizza");
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;
use tracing::debug;

use crate::catalog;
use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{ItemType, Modifier};

// =============================================================================
// Item
// =============================================================================

/// A base item or a modifier wrapping another item.
///
/// Chains can be arbitrarily deep. Every walk over the chain (accessors,
/// `Clone`, `PartialEq`, `Hash`, `Debug` and `Drop`) is a loop, not a
/// recursion.
pub enum Item {
    /// An undecorated catalog item.
    Base(ItemType),
    /// `inner` with one extra modifier on top.
    Modified { inner: Box<Item>, modifier: Modifier },
}

impl Item {
    #[inline]
    pub fn base(item_type: ItemType) -> Self {
        Item::Base(item_type)
    }

    /// Wraps this item in one more modifier layer.
    pub fn with_modifier(self, modifier: Modifier) -> Self {
        Item::Modified {
            inner: Box::new(self),
            modifier,
        }
    }

    /// Type of the innermost base item.
    pub fn item_type(&self) -> ItemType {
        let mut current = self;
        loop {
            match current {
                Item::Base(t) => return *t,
                Item::Modified { inner, .. } => current = &**inner,
            }
        }
    }

    /// Name of the innermost base item.
    pub fn name(&self) -> &'static str {
        catalog::base(self.item_type()).name
    }

    /// Base description followed by one suffix per modifier, innermost first.
    pub fn description(&self) -> String {
        let mut text = catalog::base(self.item_type()).description.to_string();
        for modifier in self.modifiers() {
            text.push_str(modifier.suffix());
        }
        text
    }

    pub fn price(&self) -> Money {
        let mut total = Money::zero();
        let mut current = self;
        loop {
            match current {
                Item::Base(t) => return total + catalog::base(*t).price,
                Item::Modified { inner, modifier } => {
                    total += modifier.delta();
                    current = &**inner;
                }
            }
        }
    }

    /// Modifiers in application order (first applied first).
    pub fn modifiers(&self) -> Vec<Modifier> {
        let mut applied = Vec::new();
        let mut current = self;
        while let Item::Modified { inner, modifier } = current {
            applied.push(*modifier);
            current = &**inner;
        }
        applied.reverse();
        applied
    }

    /// Number of modifier layers.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self;
        while let Item::Modified { inner, .. } = current {
            depth += 1;
            current = &**inner;
        }
        depth
    }

    /// Frozen line for receipts and JSON output.
    pub fn line(&self) -> ItemLine {
        ItemLine {
            item_type: self.item_type(),
            name: self.name(),
            description: self.description(),
            modifiers: self.modifiers(),
            price_cents: self.price().cents(),
        }
    }
}

/// Flattened, serializable view of an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemLine {
    pub item_type: ItemType,
    pub name: &'static str,
    pub description: String,
    pub modifiers: Vec<Modifier>,
    pub price_cents: i64,
}

// =============================================================================
// Chain Traits
// =============================================================================

impl Clone for Item {
    fn clone(&self) -> Self {
        self.modifiers()
            .into_iter()
            .fold(Item::Base(self.item_type()), Item::with_modifier)
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.item_type() == other.item_type() && self.modifiers() == other.modifiers()
    }
}

impl Eq for Item {}

impl Hash for Item {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.item_type().hash(state);
        self.modifiers().hash(state);
    }
}

impl fmt::Debug for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Item")
            .field("item_type", &self.item_type())
            .field("modifiers", &self.modifiers())
            .finish()
    }
}

/// Unlinks the chain one layer at a time.
impl Drop for Item {
    fn drop(&mut self) {
        let Item::Modified { inner, .. } = self else {
            return;
        };
        let mut next = std::mem::replace(&mut **inner, Item::Base(ItemType::Cola));
        while let Item::Modified { inner, .. } = &mut next {
            let below = std::mem::replace(&mut **inner, Item::Base(ItemType::Cola));
            next = below;
        }
    }
}

// =============================================================================
// Decorator Entry Point
// =============================================================================

/// Applies a modifier by name.
///
/// Unknown names return the item unchanged. Callers are expected to offer
/// only names from [`allowed_modifiers`]; this function does not check that
/// the modifier is allowed for the item's type.
pub fn apply_modifier(item: Item, modifier_name: &str) -> Item {
    match modifier_name.parse::<Modifier>() {
        Ok(modifier) => {
            debug!(item = item.name(), %modifier, "Applying modifier");
            item.with_modifier(modifier)
        }
        Err(_) => {
            debug!(item = item.name(), modifier_name, "Ignoring unknown modifier");
            item
        }
    }
}

// =============================================================================
// Allowed Modifiers
// =============================================================================

const FULL_EXTRAS: [Modifier; 3] = [Modifier::Cheese, Modifier::Spicy, Modifier::Large];
const FRIES_EXTRAS: [Modifier; 2] = [Modifier::Spicy, Modifier::Large];
const DRINK_EXTRAS: [Modifier; 1] = [Modifier::Large];

/// Modifiers offered for a base type, in offer order.
pub fn allowed_modifiers(item_type: ItemType) -> &'static [Modifier] {
    match item_type {
        ItemType::Pizza | ItemType::Burger => &FULL_EXTRAS,
        ItemType::Fries => &FRIES_EXTRAS,
        ItemType::Cola | ItemType::Coffee => &DRINK_EXTRAS,
    }
}

/// Same as [`allowed_modifiers`] but keyed by type identifier.
///
/// ## Errors
/// `CoreError::UnknownItemType` for identifiers outside the catalog.
pub fn allowed_modifiers_for(type_id: &str) -> CoreResult<&'static [Modifier]> {
    let item_type: ItemType = type_id.parse()?;
    Ok(allowed_modifiers(item_type))
}

// =============================================================================
// Customization Session
// =============================================================================

/// One pass of picking extras for a single item.
///
/// Each selected modifier is removed from the remaining options, so the same
/// modifier is never offered twice for the same item.
///
/// ```text
/// remaining: [CHEESE, SPICY, LARGE]  select(0) ──► item + CHEESE
/// remaining: [SPICY, LARGE]          select(1) ──► item + CHEESE + LARGE
/// remaining: [SPICY]                 finish()  ──► composed item
/// ```
#[derive(Debug, Clone)]
pub struct Customization {
    item: Item,
    remaining: Vec<Modifier>,
}

impl Customization {
    /// Starts a session for `item`, offering everything allowed for its type.
    pub fn new(item: Item) -> Self {
        let applied = item.modifiers();
        let remaining = allowed_modifiers(item.item_type())
            .iter()
            .copied()
            .filter(|m| !applied.contains(m))
            .collect();
        Customization { item, remaining }
    }

    /// Options still on offer.
    pub fn remaining(&self) -> &[Modifier] {
        &self.remaining
    }

    /// True once every allowed modifier has been taken.
    pub fn is_exhausted(&self) -> bool {
        self.remaining.is_empty()
    }

    /// The item as composed so far.
    pub fn current(&self) -> &Item {
        &self.item
    }

    /// Applies the option at `index` (0-based) and removes it from the offer.
    ///
    /// ## Errors
    /// `ValidationError::OutOfRange` if `index` does not name a remaining option.
    pub fn select(&mut self, index: usize) -> Result<Modifier, ValidationError> {
        if index >= self.remaining.len() {
            return Err(ValidationError::OutOfRange {
                field: "extra".to_string(),
                min: 1,
                max: self.remaining.len() as i64,
            });
        }
        let modifier = self.remaining.remove(index);
        self.item = self.item.clone().with_modifier(modifier);
        Ok(modifier)
    }

    /// Ends the session and returns the composed item.
    pub fn finish(self) -> Item {
        self.item
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
