//! # Order Registry
//!
//! Creates orders, indexes them by id, changes their status and tells every
//! subscribed observer about it.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  create_order(user, items)                                              │
//! │     ├── id = next_id++           (per registry, starts at 1)            │
//! │     ├── Order { items: copy, status: PLACED }                           │
//! │     ├── user.orders.push(order)                                         │
//! │     ├── orders.insert(id, order)                                        │
//! │     └── notify "Order #<id> created"                                    │
//! │                                                                         │
//! │  update_status(id, status)                                              │
//! │     ├── unknown id ──► Err(OrderNotFound), nobody notified              │
//! │     ├── strict policy + not the next step ──► Err(IllegalTransition)    │
//! │     └── order.status = status                                           │
//! │         notify "Order #<id> status -> <STATUS>"                         │
//! │         (also when the status did not change)                           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use std::rc::Rc;
//! use delivo_core::{catalog, OrderRegistry, OrderStatus, User};
//!
//! let user = Rc::new(User::new("Guest"));
//! let mut registry = OrderRegistry::new();
//! registry.subscribe(user.clone());
//!
//! let order = registry.create_order(&user, &[catalog::create_item("COLA").unwrap()]);
//! registry.update_status(order.id(), OrderStatus::Cooking).unwrap();
//!
//! assert_eq!(order.status(), OrderStatus::Cooking);
//! assert_eq!(
//!     user.notifications(),
//!     ["Order #1 created", "Order #1 status -> COOKING"]
//! );
//! ```

use std::collections::BTreeMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{CoreError, CoreResult};
use crate::item::Item;
use crate::notifier::{Notifier, OrderEvent, OrderObserver};
use crate::order::Order;
use crate::types::{OrderId, OrderStatus};
use crate::user::User;

// =============================================================================
// Transition Policy
// =============================================================================

/// Which status changes `update_status` accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionPolicy {
    /// Any status may be set from any status, including the same one.
    #[default]
    Permissive,
    /// Only the single forward step PLACED→COOKING→READY→DELIVERED.
    Strict,
}

impl TransitionPolicy {
    pub fn allows(&self, from: OrderStatus, to: OrderStatus) -> bool {
        match self {
            TransitionPolicy::Permissive => true,
            TransitionPolicy::Strict => from.next() == Some(to),
        }
    }
}

// =============================================================================
// Registry
// =============================================================================

/// Owner of the order index and the id sequence.
#[derive(Debug)]
pub struct OrderRegistry {
    next_id: u64,
    orders: BTreeMap<OrderId, Rc<Order>>,
    notifier: Notifier,
    policy: TransitionPolicy,
}

impl OrderRegistry {
    /// Permissive registry whose first order gets id 1.
    pub fn new() -> Self {
        Self::with_policy(TransitionPolicy::default())
    }

    pub fn with_policy(policy: TransitionPolicy) -> Self {
        OrderRegistry {
            next_id: 1,
            orders: BTreeMap::new(),
            notifier: Notifier::new(),
            policy,
        }
    }

    pub fn policy(&self) -> TransitionPolicy {
        self.policy
    }

    /// Adds an observer for every future creation and status change.
    pub fn subscribe(&mut self, observer: Rc<dyn OrderObserver>) {
        self.notifier.subscribe(observer);
    }

    /// Checks out `items` as a new PLACED order for `user`.
    pub fn create_order(&mut self, user: &User, items: &[Item]) -> Rc<Order> {
        let id = OrderId::new(self.next_id);
        self.next_id += 1;

        let order = Rc::new(Order::new(id, items.to_vec()));
        user.add_order(Rc::clone(&order));
        self.orders.insert(id, Rc::clone(&order));

        info!(
            order_id = %id,
            user = user.name(),
            items = order.items().len(),
            total = %order.total(),
            "Order created"
        );

        self.notifier.notify(&OrderEvent::Created { id });
        order
    }

    /// Sets the status of an order and returns the status it had before.
    ///
    /// ## Errors
    /// - `CoreError::OrderNotFound` when no order has this id. No observer
    ///   is notified.
    /// - `CoreError::IllegalTransition` under [`TransitionPolicy::Strict`]
    ///   when `status` is not the next step. No observer is notified.
    pub fn update_status(&mut self, id: OrderId, status: OrderStatus) -> CoreResult<OrderStatus> {
        let Some(order) = self.orders.get(&id) else {
            warn!(order_id = %id, "Status update for unknown order");
            return Err(CoreError::OrderNotFound(id));
        };

        let current = order.status();
        if !self.policy.allows(current, status) {
            warn!(order_id = %id, from = %current, to = %status, "Rejected status transition");
            return Err(CoreError::IllegalTransition {
                id,
                from: current,
                to: status,
            });
        }

        let previous = order.set_status(status);
        info!(order_id = %id, from = %previous, to = %status, "Order status updated");

        self.notifier.notify(&OrderEvent::StatusChanged { id, status });
        Ok(previous)
    }

    pub fn get(&self, id: OrderId) -> Option<Rc<Order>> {
        self.orders.get(&id).cloned()
    }

    pub fn has_orders(&self) -> bool {
        !self.orders.is_empty()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Every order, ascending by id.
    pub fn all_orders(&self) -> Vec<Rc<Order>> {
        self.orders.values().cloned().collect()
    }
}

impl Default for OrderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ObserverError;
    use crate::types::{ItemType, Modifier};
    use std::cell::RefCell;

    /// Observer that records `<tag>:<message>` into a shared log.
    fn recorder(tag: &'static str, log: &Rc<RefCell<Vec<String>>>) -> Rc<dyn OrderObserver> {
        let log = Rc::clone(log);
        Rc::new(move |msg: &str| -> Result<(), ObserverError> {
            log.borrow_mut().push(format!("{tag}:{msg}"));
            Ok(())
        })
    }

    fn cheesy_large_pizza() -> Item {
        Item::base(ItemType::Pizza)
            .with_modifier(Modifier::Cheese)
            .with_modifier(Modifier::Large)
    }

    #[test]
    fn test_ids_start_at_one_and_increase() {
        let user = User::new("Guest");
        let mut registry = OrderRegistry::new();

        let first = registry.create_order(&user, &[Item::base(ItemType::Cola)]);
        let second = registry.create_order(&user, &[Item::base(ItemType::Fries)]);
        let third = registry.create_order(&user, &[Item::base(ItemType::Coffee)]);

        assert_eq!(first.id(), OrderId::new(1));
        assert_eq!(second.id(), OrderId::new(2));
        assert_eq!(third.id(), OrderId::new(3));
    }

    #[test]
    fn test_registries_do_not_share_ids() {
        let user = User::new("Guest");
        let mut a = OrderRegistry::new();
        let mut b = OrderRegistry::new();

        a.create_order(&user, &[Item::base(ItemType::Cola)]);
        let from_b = b.create_order(&user, &[Item::base(ItemType::Cola)]);

        assert_eq!(from_b.id(), OrderId::new(1));
    }

    #[test]
    fn test_checkout_receipt() {
        let user = User::new("Guest");
        let mut registry = OrderRegistry::new();

        let order = registry.create_order(
            &user,
            &[cheesy_large_pizza(), Item::base(ItemType::Cola)],
        );

        assert_eq!(order.total().cents(), 1550);
        assert_eq!(order.status(), OrderStatus::Placed);
        assert_eq!(order.receipt(), "Order #1 | Total $15.50 | PLACED");
    }

    #[test]
    fn test_create_notifies_observers() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let user = User::new("Guest");
        let mut registry = OrderRegistry::new();
        registry.subscribe(recorder("x", &log));

        registry.create_order(&user, &[Item::base(ItemType::Burger)]);

        assert_eq!(*log.borrow(), ["x:Order #1 created"]);
    }

    #[test]
    fn test_items_are_copied_at_checkout() {
        let user = User::new("Guest");
        let mut registry = OrderRegistry::new();
        let mut items = vec![Item::base(ItemType::Pizza)];

        let order = registry.create_order(&user, &items);
        items.push(Item::base(ItemType::Cola));
        items[0] = Item::base(ItemType::Burger);

        assert_eq!(order.items().len(), 1);
        assert_eq!(order.items()[0].item_type(), ItemType::Pizza);
    }

    #[test]
    fn test_update_unknown_order_is_silent() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = OrderRegistry::new();
        registry.subscribe(recorder("x", &log));

        let result = registry.update_status(OrderId::new(42), OrderStatus::Cooking);

        assert_eq!(result, Err(CoreError::OrderNotFound(OrderId::new(42))));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_update_notifies_once_per_observer_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let user = User::new("Guest");
        let mut registry = OrderRegistry::new();
        let order = registry.create_order(&user, &[Item::base(ItemType::Fries)]);

        registry.subscribe(recorder("first", &log));
        registry.subscribe(recorder("second", &log));

        let previous = registry
            .update_status(order.id(), OrderStatus::Ready)
            .unwrap();

        assert_eq!(previous, OrderStatus::Placed);
        assert_eq!(
            *log.borrow(),
            [
                "first:Order #1 status -> READY",
                "second:Order #1 status -> READY"
            ]
        );
    }

    #[test]
    fn test_repeated_status_still_notifies() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let user = User::new("Guest");
        let mut registry = OrderRegistry::new();
        registry.subscribe(recorder("x", &log));
        let order = registry.create_order(&user, &[Item::base(ItemType::Pizza)]);

        registry.update_status(order.id(), OrderStatus::Cooking).unwrap();
        let previous = registry.update_status(order.id(), OrderStatus::Cooking).unwrap();

        assert_eq!(previous, OrderStatus::Cooking);
        assert_eq!(
            *log.borrow(),
            [
                "x:Order #1 created",
                "x:Order #1 status -> COOKING",
                "x:Order #1 status -> COOKING"
            ]
        );
    }

    #[test]
    fn test_permissive_policy_allows_any_transition() {
        let user = User::new("Guest");
        let mut registry = OrderRegistry::new();
        let order = registry.create_order(&user, &[Item::base(ItemType::Cola)]);

        registry.update_status(order.id(), OrderStatus::Delivered).unwrap();
        registry.update_status(order.id(), OrderStatus::Placed).unwrap();

        assert_eq!(order.status(), OrderStatus::Placed);
    }

    #[test]
    fn test_strict_policy_enforces_chain() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let user = User::new("Guest");
        let mut registry = OrderRegistry::with_policy(TransitionPolicy::Strict);
        let order = registry.create_order(&user, &[Item::base(ItemType::Cola)]);
        registry.subscribe(recorder("x", &log));

        let skipped = registry.update_status(order.id(), OrderStatus::Ready);
        assert_eq!(
            skipped,
            Err(CoreError::IllegalTransition {
                id: order.id(),
                from: OrderStatus::Placed,
                to: OrderStatus::Ready,
            })
        );
        assert!(log.borrow().is_empty());

        for status in [OrderStatus::Cooking, OrderStatus::Ready, OrderStatus::Delivered] {
            registry.update_status(order.id(), status).unwrap();
        }
        assert_eq!(order.status(), OrderStatus::Delivered);
        assert!(registry
            .update_status(order.id(), OrderStatus::Delivered)
            .is_err());
        assert_eq!(log.borrow().len(), 3);
    }

    #[test]
    fn test_user_sees_both_orders_and_registry_indexes_them() {
        let user = Rc::new(User::new("Guest"));
        let mut registry = OrderRegistry::new();
        registry.subscribe(user.clone());

        let first = registry.create_order(&user, &[Item::base(ItemType::Pizza)]);
        let second = registry.create_order(&user, &[Item::base(ItemType::Burger)]);

        let ids: Vec<_> = user.orders().iter().map(|o| o.id()).collect();
        assert_eq!(ids, [first.id(), second.id()]);

        assert_eq!(
            registry.get(first.id()).unwrap().items()[0].item_type(),
            ItemType::Pizza
        );
        assert_eq!(
            registry.get(second.id()).unwrap().items()[0].item_type(),
            ItemType::Burger
        );

        registry.update_status(second.id(), OrderStatus::Ready).unwrap();
        assert_eq!(user.orders()[1].status(), OrderStatus::Ready);
        assert_eq!(user.notifications().len(), 3);
    }

    #[test]
    fn test_has_orders_and_listing() {
        let user = User::new("Guest");
        let mut registry = OrderRegistry::default();
        assert!(!registry.has_orders());
        assert!(registry.all_orders().is_empty());

        registry.create_order(&user, &[Item::base(ItemType::Cola)]);
        registry.create_order(&user, &[Item::base(ItemType::Coffee)]);

        assert!(registry.has_orders());
        assert_eq!(registry.len(), 2);
        let ids: Vec<u64> = registry.all_orders().iter().map(|o| o.id().value()).collect();
        assert_eq!(ids, [1, 2]);
    }
}
