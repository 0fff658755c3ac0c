//! # Validation Module
//!
//! Checks applied to shell input before it reaches the core.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Shell                                                         │
//! │  └── Reads a line, hands it to THIS MODULE                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                   │
//! │  ├── Menu choices are numbers within range                              │
//! │  ├── Order ids are positive numbers                                     │
//! │  └── User names are present and short                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Core (catalog / registry)                                     │
//! │  └── Typed errors for anything that still slips through                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use delivo_core::validation::parse_menu_choice;
//!
//! assert_eq!(parse_menu_choice("2", 5).unwrap(), 2);
//! assert!(parse_menu_choice("9", 5).is_err());
//! assert!(parse_menu_choice("abc", 5).is_err());
//! ```

use crate::error::ValidationError;
use crate::item::allowed_modifiers;
use crate::types::{ItemType, Modifier, OrderId};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted user name.
pub const MAX_USER_NAME_LEN: usize = 50;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a user name and returns it trimmed.
///
/// ## Rules
/// - Must not be empty
/// - At most 50 characters
pub fn validate_user_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "user name".to_string(),
        });
    }

    if name.chars().count() > MAX_USER_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "user name".to_string(),
            max: MAX_USER_NAME_LEN,
        });
    }

    Ok(name.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses a numbered menu choice in `0..=max`. `0` is always "back"/"done".
///
/// ## User Workflow
/// ```text
/// Choose: 7
///      │
///      ▼
/// parse_menu_choice("7", 5) ← THIS FUNCTION
///      │
///      ├── not a number? → InvalidFormat
///      ├── > 5?          → OutOfRange
///      └── OK(7)
/// ```
pub fn parse_menu_choice(input: &str, max: usize) -> ValidationResult<usize> {
    let choice: usize = input
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidFormat {
            field: "choice".to_string(),
            reason: "must be a number".to_string(),
        })?;

    if choice > max {
        return Err(ValidationError::OutOfRange {
            field: "choice".to_string(),
            min: 0,
            max: max as i64,
        });
    }

    Ok(choice)
}

/// Parses an order id typed by the admin.
///
/// ## Rules
/// - Must be a whole number
/// - Must be positive (ids start at 1)
///
/// Whether the order exists is the registry's call, not this function's.
pub fn parse_order_id(input: &str) -> ValidationResult<OrderId> {
    let value: u64 = input
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidFormat {
            field: "order id".to_string(),
            reason: "must be a number".to_string(),
        })?;

    if value == 0 {
        return Err(ValidationError::OutOfRange {
            field: "order id".to_string(),
            min: 1,
            max: i64::MAX,
        });
    }

    Ok(OrderId::new(value))
}

// =============================================================================
// Modifier Validators
// =============================================================================

/// Checks `modifier` against the allowed-modifier table for `item_type`.
///
/// The shell never needs this: a [`Customization`](crate::item::Customization)
/// only offers allowed modifiers. It is for callers that build items with
/// [`Item::with_modifier`](crate::item::Item::with_modifier) directly.
///
/// ## Example
/// ```rust
/// use delivo_core::validation::validate_modifier_for;
/// use delivo_core::{ItemType, Modifier};
///
/// assert!(validate_modifier_for(ItemType::Pizza, Modifier::Cheese).is_ok());
/// assert!(validate_modifier_for(ItemType::Cola, Modifier::Cheese).is_err());
/// ```
pub fn validate_modifier_for(item_type: ItemType, modifier: Modifier) -> ValidationResult<()> {
    let allowed = allowed_modifiers(item_type);
    if allowed.contains(&modifier) {
        return Ok(());
    }

    Err(ValidationError::NotAllowed {
        field: format!("extra for {}", item_type),
        allowed: allowed.iter().map(|m| m.id().to_string()).collect(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_user_name() {
        assert_eq!(validate_user_name("  Guest ").unwrap(), "Guest");
        assert!(validate_user_name("").is_err());
        assert!(validate_user_name("   ").is_err());
        assert!(validate_user_name(&"A".repeat(51)).is_err());
        assert!(validate_user_name(&"A".repeat(50)).is_ok());
    }

    #[test]
    fn test_parse_menu_choice() {
        assert_eq!(parse_menu_choice("0", 3).unwrap(), 0);
        assert_eq!(parse_menu_choice(" 3 ", 3).unwrap(), 3);

        assert!(matches!(
            parse_menu_choice("4", 3),
            Err(ValidationError::OutOfRange { max: 3, .. })
        ));
        assert!(matches!(
            parse_menu_choice("-1", 3),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(parse_menu_choice("", 3).is_err());
    }

    #[test]
    fn test_parse_order_id() {
        assert_eq!(parse_order_id("12").unwrap(), OrderId::new(12));
        assert!(parse_order_id("0").is_err());
        assert!(parse_order_id("x1").is_err());
    }

    #[test]
    fn test_validate_modifier_for() {
        assert!(validate_modifier_for(ItemType::Fries, Modifier::Spicy).is_ok());

        let err = validate_modifier_for(ItemType::Fries, Modifier::Cheese).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NotAllowed {
                field: "extra for FRIES".to_string(),
                allowed: vec!["SPICY".to_string(), "LARGE".to_string()],
            }
        );
    }
}
