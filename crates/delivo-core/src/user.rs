//! # User
//!
//! The purchaser. Keeps its own order history and doubles as an order
//! observer that collects notifications for display.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::info;

use crate::error::ObserverError;
use crate::notifier::OrderObserver;
use crate::order::Order;
use crate::types::OrderId;

/// A customer and notification sink.
#[derive(Debug)]
pub struct User {
    name: String,
    orders: RefCell<Vec<Rc<Order>>>,
    inbox: RefCell<Vec<String>>,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        User {
            name: name.into(),
            orders: RefCell::new(Vec::new()),
            inbox: RefCell::new(Vec::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Orders in creation order. The handles are shared with the registry,
    /// so statuses are always current.
    pub fn orders(&self) -> Vec<Rc<Order>> {
        self.orders.borrow().clone()
    }

    pub fn has_orders(&self) -> bool {
        !self.orders.borrow().is_empty()
    }

    pub fn order(&self, id: OrderId) -> Option<Rc<Order>> {
        self.orders.borrow().iter().find(|o| o.id() == id).cloned()
    }

    /// Called by the registry at checkout.
    pub(crate) fn add_order(&self, order: Rc<Order>) {
        self.orders.borrow_mut().push(order);
    }

    /// Messages received so far, oldest first.
    pub fn notifications(&self) -> Vec<String> {
        self.inbox.borrow().clone()
    }

    /// Drains the inbox.
    pub fn take_notifications(&self) -> Vec<String> {
        self.inbox.take()
    }
}

impl OrderObserver for User {
    fn update(&self, message: &str) -> Result<(), ObserverError> {
        info!(user = %self.name, message, "Notification received");
        self.inbox
            .try_borrow_mut()
            .map_err(|_| ObserverError::Rejected(format!("inbox of {} is busy", self.name)))?
            .push(message.to_string());
        Ok(())
    }
}
