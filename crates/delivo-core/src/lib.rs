//! # delivo-core: Pure Ordering Logic for Delivo
//!
//! This crate is the **heart** of Delivo. It models composed food items, the
//! cart, orders and their lifecycle, and the observers that follow it. It has
//! zero I/O dependencies; the terminal shell lives in `apps/delivo-shell`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Delivo Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐    │
//! │  │                    delivo-shell (terminal)                      │    │
//! │  │    Role menu ──► User menu ──► Cart loop ──► Admin menu         │    │
//! │  └─────────────────────────────┬───────────────────────────────────┘    │
//! │                                │ plain function calls                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐    │
//! │  │               ★ delivo-core (THIS CRATE) ★                      │    │
//! │  │                                                                 │    │
//! │  │   ┌─────────┐  ┌─────────┐  ┌──────┐  ┌──────────┐  ┌────────┐  │    │
//! │  │   │ catalog │─►│  item   │─►│ cart │─►│ registry │─►│notifier│  │    │
//! │  │   │ 5 bases │  │modifiers│  │      │  │ orders   │  │fan-out │  │    │
//! │  │   └─────────┘  └─────────┘  └──────┘  └──────────┘  └────────┘  │    │
//! │  │                                                                 │    │
//! │  │   NO STDIN • NO FILES • NO NETWORK • SINGLE-THREADED            │    │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Integer-cent money type
//! - [`types`] - `ItemType`, `Modifier`, `OrderStatus`, `OrderId`
//! - [`catalog`] - Base items and the menu
//! - [`item`] - Composed items, allowed modifiers, customization sessions
//! - [`cart`] - Pending items before checkout
//! - [`order`] - Checked-out orders, receipts, summaries
//! - [`user`] - Purchaser and notification inbox
//! - [`notifier`] - Observer trait and fan-out
//! - [`registry`] - Order creation, lookup and status changes
//! - [`validation`] - Input checks for the shell
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use std::rc::Rc;
//! use delivo_core::{catalog, Cart, Customization, OrderRegistry, User};
//!
//! let user = Rc::new(User::new("Guest"));
//! let mut registry = OrderRegistry::new();
//! registry.subscribe(user.clone());
//!
//! // Pizza with cheese and large
//! let mut session = Customization::new(catalog::create_item("PIZZA").unwrap());
//! session.select(0).unwrap(); // CHEESE
//! session.select(1).unwrap(); // LARGE (SPICY is now at 0)
//!
//! let mut cart = Cart::new();
//! cart.add(session.finish());
//! cart.add(catalog::create_item("COLA").unwrap());
//!
//! let order = registry.create_order(&user, cart.items());
//! assert_eq!(order.receipt(), "Order #1 | Total $15.50 | PLACED");
//! assert_eq!(user.notifications(), ["Order #1 created"]);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod item;
pub mod money;
pub mod notifier;
pub mod order;
pub mod registry;
pub mod types;
pub mod user;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::Cart;
pub use error::{CoreError, CoreResult, ObserverError, ValidationError};
pub use item::{allowed_modifiers, apply_modifier, Customization, Item};
pub use money::Money;
pub use notifier::{Notifier, OrderEvent, OrderObserver};
pub use order::{Order, OrderSummary};
pub use registry::{OrderRegistry, TransitionPolicy};
pub use types::*;
pub use user::User;
