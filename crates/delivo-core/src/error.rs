//! # Error Types
//!
//! Domain-specific error types for delivo-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  delivo-core errors (this file)                                         │
//! │  ├── CoreError        - Catalog, registry and lifecycle failures        │
//! │  ├── ValidationError  - Input validation failures                       │
//! │  └── ObserverError    - A subscriber refused a notification             │
//! │                                                                         │
//! │  delivo-shell errors (separate crate)                                   │
//! │  ├── ConfigError      - Config file / environment problems              │
//! │  └── ShellError       - What `main` reports                             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ShellError → stderr                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Recoverable vs. Contract Violations
//! - `UnknownItemType` / `UnknownModifier`: the caller passed an identifier it
//!   should have taken from the catalog. Treat as a bug in the caller.
//! - `OrderNotFound`: expected outcome of an admin typing a wrong id.
//! - `IllegalTransition`: only produced under the strict transition policy.

use thiserror::Error;

use crate::types::{OrderId, OrderStatus};

// =============================================================================
// Core Error
// =============================================================================

/// Core ordering errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Catalog was asked for a type outside PIZZA/BURGER/FRIES/COLA/COFFEE.
    #[error("Unknown item type: {0}")]
    UnknownItemType(String),

    /// Modifier name outside CHEESE/SPICY/LARGE.
    ///
    /// `item::apply_modifier` never surfaces this; it passes the item through.
    #[error("Unknown modifier: {0}")]
    UnknownModifier(String),

    /// Status name outside PLACED/COOKING/READY/DELIVERED.
    #[error("Unknown order status: {0}")]
    UnknownStatus(String),

    /// No order with this id exists in the registry.
    ///
    /// ## User Workflow
    /// ```text
    /// Admin enters order id: 42
    ///      │
    ///      ▼
    /// registry.update_status(42, COOKING)
    ///      │
    ///      ▼
    /// OrderNotFound(42)  ──►  "Order not found."  (no notification sent)
    /// ```
    #[error("Order #{0} not found")]
    OrderNotFound(OrderId),

    /// Status change rejected by the strict transition policy.
    #[error("Order #{id} cannot move from {from} to {to}")]
    IllegalTransition {
        id: OrderId,
        from: OrderStatus,
        to: OrderStatus,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Returns true for outcomes the caller is expected to handle and move on.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CoreError::OrderNotFound(_)
                | CoreError::IllegalTransition { .. }
                | CoreError::Validation(_)
        )
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before business logic runs, mostly for values typed into the shell.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g. a menu choice that is not a number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Observer Error
// =============================================================================

/// Failure reported by an order observer while handling a notification.
///
/// The notifier logs these and keeps delivering to the remaining observers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ObserverError {
    /// The observer could not accept the message.
    #[error("observer rejected notification: {0}")]
    Rejected(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CoreError::UnknownItemType("SUSHI".to_string()).to_string(),
            "Unknown item type: SUSHI"
        );
        assert_eq!(
            CoreError::OrderNotFound(OrderId::new(7)).to_string(),
            "Order #7 not found"
        );

        let err = CoreError::IllegalTransition {
            id: OrderId::new(3),
            from: OrderStatus::Placed,
            to: OrderStatus::Ready,
        };
        assert_eq!(err.to_string(), "Order #3 cannot move from PLACED to READY");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::OutOfRange {
            field: "choice".to_string(),
            min: 0,
            max: 5,
        };
        assert_eq!(err.to_string(), "choice must be between 0 and 5");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert!(core_err.is_recoverable());
    }

    #[test]
    fn test_catalog_errors_are_contract_violations() {
        assert!(!CoreError::UnknownItemType("X".into()).is_recoverable());
        assert!(!CoreError::UnknownModifier("X".into()).is_recoverable());
        assert!(CoreError::OrderNotFound(OrderId::new(1)).is_recoverable());
    }
}
