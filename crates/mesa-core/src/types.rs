//! # Domain Types
//!
//! Catalog types consumed by the assembly flow and the line it produces.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ProductConfiguration (inbound, from the catalog provider)             │
//! │  ├── BaseProduct          id, name, price_cents                         │
//! │  └── OptionGroup[]        min / max / included counts                   │
//! │      └── OptionItem[]     id, label, additional_price_cents             │
//! │                                                                         │
//! │  AssembledLine (outbound, to the cart collaborator)                    │
//! │  └── lineId, baseProductId, quantity, unitPrice, subtotal,             │
//! │      selectedItemIds                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All wire types use camelCase field names to match the REST API.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::money::Money;
use crate::ASSEMBLED_LINE_QUANTITY;

// =============================================================================
// Base Product
// =============================================================================

/// The configurable product whose price the add-ons build on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BaseProduct {
    /// Product identifier in the catalog.
    pub id: String,

    /// Display name shown on the assembly screen.
    pub name: String,

    /// Base price in cents, before any add-on.
    pub price_cents: i64,
}

impl BaseProduct {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price_cents: i64) -> Self {
        BaseProduct {
            id: id.into(),
            name: name.into(),
            price_cents,
        }
    }

    /// Returns the base price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Option Item
// =============================================================================

/// A single selectable add-on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OptionItem {
    /// Unique across the whole product configuration.
    pub id: String,

    /// Display name, usually the linked product's name.
    pub label: String,

    /// Price added when this item is selected and not covered by the free tier.
    pub additional_price_cents: i64,
}

impl OptionItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>, additional_price_cents: i64) -> Self {
        OptionItem {
            id: id.into(),
            label: label.into(),
            additional_price_cents,
        }
    }

    /// Returns the additional price as a Money type.
    #[inline]
    pub fn additional_price(&self) -> Money {
        Money::from_cents(self.additional_price_cents)
    }
}

// =============================================================================
// Option Group
// =============================================================================

/// A named, cardinality-constrained bucket of add-ons.
///
/// ## Counts
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  "Pick up to 3 toppings, first one included"                           │
/// │                                                                         │
/// │   min_count      = 0   confirmation needs at least this many picks     │
/// │   max_count      = 3   toggles beyond this are rejected                │
/// │   included_count = 1   the cheapest pick is free                       │
/// │                                                                         │
/// │   max_count == 1 → radio buttons (a new pick replaces the old one)     │
/// │   max_count  > 1 → checkboxes                                          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OptionGroup {
    pub id: String,

    pub name: String,

    /// Minimum picks required before the line can be confirmed.
    #[serde(default)]
    pub min_count: u32,

    /// Maximum picks allowed.
    pub max_count: u32,

    /// Number of picks priced at zero. Not capped at `max_count`.
    #[serde(default)]
    pub included_count: u32,

    /// Items in display order.
    #[serde(default)]
    pub items: Vec<OptionItem>,
}

impl OptionGroup {
    /// Creates an empty group with no free tier.
    pub fn new(id: impl Into<String>, name: impl Into<String>, min_count: u32, max_count: u32) -> Self {
        OptionGroup {
            id: id.into(),
            name: name.into(),
            min_count,
            max_count,
            included_count: 0,
            items: Vec::new(),
        }
    }

    /// Sets the number of free picks.
    pub fn with_included(mut self, included_count: u32) -> Self {
        self.included_count = included_count;
        self
    }

    /// Appends an item.
    pub fn with_item(mut self, item: OptionItem) -> Self {
        self.items.push(item);
        self
    }

    /// Single-choice group: selecting a new item evicts the old one.
    #[inline]
    pub fn is_exclusive(&self) -> bool {
        self.max_count == 1
    }

    /// Looks up an item listed in this group.
    pub fn item(&self, item_id: &str) -> Option<&OptionItem> {
        self.items.iter().find(|item| item.id == item_id)
    }
}

// =============================================================================
// Product Configuration
// =============================================================================

/// Everything the catalog provider returns for one configurable product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductConfiguration {
    pub product: BaseProduct,

    /// Groups in display order. Validation and flattening follow this order.
    #[serde(default)]
    pub groups: Vec<OptionGroup>,
}

// =============================================================================
// Assembled Line
// =============================================================================

/// The finished, priced cart line handed to the cart collaborator.
///
/// Created once at confirmation and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AssembledLine {
    /// Fresh UUID v4, distinct from the base product id.
    pub line_id: String,

    pub base_product_id: String,

    /// Always 1.
    pub quantity: i64,

    #[serde(rename = "unitPrice")]
    pub unit_price_cents: i64,

    /// Equal to the unit price since quantity is 1.
    #[serde(rename = "subtotal")]
    pub subtotal_cents: i64,

    /// Every selected item id, group order first, then selection order.
    pub selected_item_ids: Vec<String>,
}

impl AssembledLine {
    /// Builds a line with a newly generated line id.
    pub fn new(base_product_id: impl Into<String>, price: Money, selected_item_ids: Vec<String>) -> Self {
        AssembledLine {
            line_id: Uuid::new_v4().to_string(),
            base_product_id: base_product_id.into(),
            quantity: ASSEMBLED_LINE_QUANTITY,
            unit_price_cents: price.cents(),
            subtotal_cents: price.cents(),
            selected_item_ids,
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Returns the subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_exclusive() {
        assert!(OptionGroup::new("bread", "Bread", 1, 1).is_exclusive());
        assert!(!OptionGroup::new("sauces", "Sauces", 0, 3).is_exclusive());
    }

    #[test]
    fn test_group_item_lookup() {
        let group = OptionGroup::new("sauces", "Sauces", 0, 2)
            .with_item(OptionItem::new("ketchup", "Ketchup", 0))
            .with_item(OptionItem::new("bbq", "BBQ", 50));

        assert_eq!(group.item("bbq").map(|i| i.additional_price_cents), Some(50));
        assert!(group.item("mustard").is_none());
    }

    #[test]
    fn test_configuration_from_catalog_json() {
        let json = r#"{
            "product": { "id": "pizza", "name": "Custom Pizza", "priceCents": 1200 },
            "groups": [
                {
                    "id": "toppings",
                    "name": "Toppings",
                    "minCount": 1,
                    "maxCount": 4,
                    "items": [
                        { "id": "olives", "label": "Olives", "additionalPriceCents": 150 }
                    ]
                }
            ]
        }"#;

        let config: ProductConfiguration = serde_json::from_str(json).unwrap();
        assert_eq!(config.product.price().cents(), 1200);
        assert_eq!(config.groups.len(), 1);

        let group = &config.groups[0];
        assert_eq!(group.min_count, 1);
        assert_eq!(group.max_count, 4);
        // includedCount defaults to zero when the provider omits it
        assert_eq!(group.included_count, 0);
        assert_eq!(group.items[0].additional_price().cents(), 150);
    }

    #[test]
    fn test_assembled_line_wire_shape() {
        let line = AssembledLine::new(
            "pizza",
            Money::from_cents(1800),
            vec!["olives".to_string(), "ham".to_string()],
        );
        let value = serde_json::to_value(&line).unwrap();

        assert_eq!(value["lineId"], serde_json::json!(line.line_id));
        assert_eq!(value["baseProductId"], "pizza");
        assert_eq!(value["quantity"], 1);
        assert_eq!(value["unitPrice"], 1800);
        assert_eq!(value["subtotal"], 1800);
        assert_eq!(value["selectedItemIds"], serde_json::json!(["olives", "ham"]));
    }

    #[test]
    fn test_assembled_line_ids_are_fresh() {
        let a = AssembledLine::new("pizza", Money::zero(), Vec::new());
        let b = AssembledLine::new("pizza", Money::zero(), Vec::new());

        assert_ne!(a.line_id, b.line_id);
        assert_ne!(a.line_id, a.base_product_id);
        assert!(Uuid::parse_str(&a.line_id).is_ok());
        assert_eq!(a.unit_price(), a.subtotal());
    }
}
