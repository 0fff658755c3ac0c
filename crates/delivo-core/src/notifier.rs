//! # Notifier
//!
//! Observer registration and synchronous fan-out of order lifecycle events.
//!
//! ## Delivery
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  registry.create_order(..) / registry.update_status(..)                 │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  notifier.notify(&event)                                                │
//! │        │                                                                │
//! │        ├──► observer #1.update("Order #1 created")                      │
//! │        ├──► observer #2.update("Order #1 created")  Err: warn!, skip    │
//! │        └──► observer #3.update("Order #1 created")                      │
//! │                                                                         │
//! │  All calls finish before the registry call returns.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Observers are called in subscription order. A failing observer is logged
//! and skipped; it neither stops delivery to the rest nor fails the registry
//! operation that raised the event.

use std::fmt;
use std::rc::Rc;

use tracing::warn;

use crate::error::ObserverError;
use crate::types::{OrderId, OrderStatus};

// =============================================================================
// Observer Trait
// =============================================================================

/// Anything that wants order lifecycle messages.
pub trait OrderObserver {
    /// Receives one rendered lifecycle message.
    fn update(&self, message: &str) -> Result<(), ObserverError>;
}

/// Closures can subscribe directly.
impl<F> OrderObserver for F
where
    F: Fn(&str) -> Result<(), ObserverError>,
{
    fn update(&self, message: &str) -> Result<(), ObserverError> {
        self(message)
    }
}

// =============================================================================
// Events
// =============================================================================

/// A lifecycle event raised by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderEvent {
    Created { id: OrderId },
    StatusChanged { id: OrderId, status: OrderStatus },
}

impl OrderEvent {
    pub fn order_id(&self) -> OrderId {
        match self {
            OrderEvent::Created { id } | OrderEvent::StatusChanged { id, .. } => *id,
        }
    }
}

/// The exact text observers receive.
impl fmt::Display for OrderEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderEvent::Created { id } => write!(f, "Order #{id} created"),
            OrderEvent::StatusChanged { id, status } => {
                write!(f, "Order #{id} status -> {status}")
            }
        }
    }
}

// =============================================================================
// Notifier
// =============================================================================

/// Ordered list of subscribed observers.
#[derive(Default)]
pub struct Notifier {
    observers: Vec<Rc<dyn OrderObserver>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an observer. There is no unsubscribe.
    pub fn subscribe(&mut self, observer: Rc<dyn OrderObserver>) {
        self.observers.push(observer);
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Delivers `event` to every observer and returns how many accepted it.
    pub fn notify(&self, event: &OrderEvent) -> usize {
        let message = event.to_string();
        let mut delivered = 0;
        for (position, observer) in self.observers.iter().enumerate() {
            match observer.update(&message) {
                Ok(()) => delivered += 1,
                Err(e) => warn!(
                    order_id = %event.order_id(),
                    observer = position,
                    error = %e,
                    "Observer failed to handle notification"
                ),
            }
        }
        delivered
    }
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("observers", &self.observers.len())
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
