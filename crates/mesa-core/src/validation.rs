//! # Validation Module
//!
//! Checks the product configuration received from the catalog provider
//! before an assembly session is opened.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Catalog REST API                                             │
//! │  └── Owns the data; enforces its own constraints                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (before a session opens)                         │
//! │  ├── Required ids and names                                            │
//! │  ├── Prices 0..=MAX_PRICE_CENTS                                        │
//! │  ├── max_count ≥ 1, min_count ≤ max_count                              │
//! │  └── Unique group ids, unique item ids                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Toggle / confirm rules (selection, session)                  │
//! │  └── Cardinality per tap, minimums at confirmation                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `included_count` is not compared with `max_count`; a group whose free tier
//! covers every possible pick is simply always free.
//!
//! ## Usage
//! ```rust
//! use mesa_core::validation::{validate_configuration, validate_price_cents};
//! use mesa_core::{BaseProduct, ProductConfiguration};
//!
//! let config = ProductConfiguration {
//!     product: BaseProduct::new("bowl", "Poke Bowl", 1250),
//!     groups: Vec::new(),
//! };
//! assert!(validate_configuration(&config).is_ok());
//! assert!(validate_price_cents("price", -1).is_err());
//! ```

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::types::{BaseProduct, OptionGroup, OptionItem, ProductConfiguration};
use crate::{MAX_NAME_LENGTH, MAX_PRICE_CENTS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Rejects empty or whitespace-only values.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a display name: required, at most [`MAX_NAME_LENGTH`] characters.
pub fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    validate_required(field, name)?;

    if name.trim().chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free add-ons like ketchup)
/// - Must not exceed [`MAX_PRICE_CENTS`]
pub fn validate_price_cents(field: &str, cents: i64) -> ValidationResult<()> {
    if !(0..=MAX_PRICE_CENTS).contains(&cents) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

// =============================================================================
// Catalog Validators
// =============================================================================

/// Validates the base product.
pub fn validate_product(product: &BaseProduct) -> ValidationResult<()> {
    validate_required("product id", &product.id)?;
    validate_name("product name", &product.name)?;
    validate_price_cents("product price", product.price_cents)
}

/// Validates one option item.
pub fn validate_item(item: &OptionItem) -> ValidationResult<()> {
    validate_required("option id", &item.id)?;
    validate_price_cents(&format!("price of option {}", item.id), item.additional_price_cents)
}

/// Validates a group's own fields and its items.
///
/// ## Rules
/// ```text
/// max_count ≥ 1            a group nobody can pick from is a catalog error
/// min_count ≤ max_count    otherwise confirmation could never succeed
/// ```
pub fn validate_group(group: &OptionGroup) -> ValidationResult<()> {
    validate_required("group id", &group.id)?;
    validate_name("group name", &group.name)?;

    if group.max_count == 0 {
        return Err(ValidationError::OutOfRange {
            field: format!("max count of group {}", group.id),
            min: 1,
            max: i64::from(u32::MAX),
        });
    }

    if group.min_count > group.max_count {
        return Err(ValidationError::OutOfRange {
            field: format!("min count of group {}", group.id),
            min: 0,
            max: i64::from(group.max_count),
        });
    }

    group.items.iter().try_for_each(validate_item)
}

/// Validates a whole product configuration, stopping at the first problem.
///
/// Item ids must be unique across all groups, because selections are looked
/// up by item id.
pub fn validate_configuration(config: &ProductConfiguration) -> ValidationResult<()> {
    validate_product(&config.product)?;

    let mut group_ids = HashSet::new();
    let mut item_ids = HashSet::new();

    for group in &config.groups {
        validate_group(group)?;

        if !group_ids.insert(group.id.as_str()) {
            return Err(ValidationError::Duplicate {
                field: "group id".to_string(),
                value: group.id.clone(),
            });
        }

        for item in &group.items {
            if !item_ids.insert(item.id.as_str()) {
                return Err(ValidationError::Duplicate {
                    field: "option id".to_string(),
                    value: item.id.clone(),
                });
            }
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ProductConfiguration {
        ProductConfiguration {
            product: BaseProduct::new("bowl", "Poke Bowl", 1250),
            groups: vec![
                OptionGroup::new("base", "Base", 1, 1)
                    .with_item(OptionItem::new("rice", "Rice", 0))
                    .with_item(OptionItem::new("greens", "Greens", 0)),
                OptionGroup::new("protein", "Protein", 1, 2)
                    .with_included(1)
                    .with_item(OptionItem::new("tuna", "Tuna", 400))
                    .with_item(OptionItem::new("tofu", "Tofu", 200)),
            ],
        }
    }

    #[test]
    fn test_valid_configuration() {
        assert!(validate_configuration(&config()).is_ok());
    }

    #[test]
    fn test_validate_required() {
        assert!(validate_required("id", "abc").is_ok());
        assert!(validate_required("id", "").is_err());
        assert!(validate_required("id", "   ").is_err());
    }

    #[test]
    fn test_validate_name_length() {
        assert!(validate_name("name", "Toppings").is_ok());
        assert_eq!(
            validate_name("name", &"A".repeat(300)).unwrap_err(),
            ValidationError::TooLong {
                field: "name".to_string(),
                max: MAX_NAME_LENGTH,
            }
        );
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents("price", 0).is_ok());
        assert!(validate_price_cents("price", 1099).is_ok());
        assert!(validate_price_cents("price", -100).is_err());
    }

    #[test]
    fn test_validate_price_cents_upper_bound() {
        assert!(validate_price_cents("price", MAX_PRICE_CENTS).is_ok());
        assert_eq!(
            validate_price_cents("price", MAX_PRICE_CENTS + 1).unwrap_err(),
            ValidationError::OutOfRange {
                field: "price".to_string(),
                min: 0,
                max: MAX_PRICE_CENTS,
            }
        );
        assert!(validate_price_cents("price", i64::MAX).is_err());
    }

    #[test]
    fn test_rejects_oversized_base_price() {
        let mut config = config();
        config.product.price_cents = i64::MAX;
        assert!(matches!(
            validate_configuration(&config),
            Err(ValidationError::OutOfRange { max: MAX_PRICE_CENTS, .. })
        ));
    }

    #[test]
    fn test_rejects_negative_base_price() {
        let mut config = config();
        config.product.price_cents = -1;
        assert!(validate_configuration(&config).is_err());
    }

    #[test]
    fn test_rejects_negative_item_price() {
        let mut config = config();
        config.groups[1].items[0].additional_price_cents = -50;

        let err = validate_configuration(&config).unwrap_err();
        assert_eq!(err.to_string(), format!("price of option tuna must be between 0 and {MAX_PRICE_CENTS}"));
    }

    #[test]
    fn test_rejects_zero_max_count() {
        let mut config = config();
        config.groups[0].max_count = 0;
        assert!(matches!(
            validate_configuration(&config),
            Err(ValidationError::OutOfRange { min: 1, .. })
        ));
    }

    #[test]
    fn test_rejects_min_above_max() {
        let mut config = config();
        config.groups[1].min_count = 3;
        assert!(validate_configuration(&config).is_err());
    }

    #[test]
    fn test_accepts_included_above_max() {
        let mut config = config();
        config.groups[1].included_count = 10;
        assert!(validate_configuration(&config).is_ok());
    }

    #[test]
    fn test_rejects_duplicate_group_id() {
        let mut config = config();
        let mut copy = config.groups[0].clone();
        copy.items.clear();
        config.groups.push(copy);

        assert_eq!(
            validate_configuration(&config).unwrap_err(),
            ValidationError::Duplicate {
                field: "group id".to_string(),
                value: "base".to_string(),
            }
        );
    }

    #[test]
    fn test_rejects_item_shared_between_groups() {
        let mut config = config();
        config.groups[1]
            .items
            .push(OptionItem::new("rice", "Extra Rice", 100));

        assert!(matches!(
            validate_configuration(&config),
            Err(ValidationError::Duplicate { ref value, .. }) if value == "rice"
        ));
    }

    #[test]
    fn test_rejects_blank_group_name() {
        let mut config = config();
        config.groups[0].name = " ".to_string();
        assert_eq!(
            validate_configuration(&config).unwrap_err(),
            ValidationError::Required {
                field: "group name".to_string()
            }
        );
    }
}
