//! # Pricing
//!
//! Computes the price of an assembled product from its base price and the
//! current selection.
//!
//! ## Free-Tier Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Toppings: included_count = 1, picks = [Bacon $5, Lettuce $2, Egg $3]   │
//! │                                                                         │
//! │  1. Sort picks by price, cheapest first (stable: ties keep click order) │
//! │       [Lettuce $2, Egg $3, Bacon $5]                                    │
//! │                                                                         │
//! │  2. The first included_count picks are free                             │
//! │       Lettuce → free                                                    │
//! │                                                                         │
//! │  3. Everything after that is charged in full                            │
//! │       Egg $3 + Bacon $5 = $8                                            │
//! │                                                                         │
//! │  The customer only ever pays for the most expensive picks.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The total is always recomputed from scratch; nothing here keeps state
//! between calls.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::selection::SelectionState;
use crate::types::{OptionGroup, OptionItem};

/// What one group adds to the price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct GroupCharge {
    pub group_id: String,

    /// Picks absorbed by the free tier, cheapest first.
    pub free_item_ids: Vec<String>,

    /// Picks charged in full, cheapest first.
    pub charged_item_ids: Vec<String>,

    /// Sum of the charged picks' additional prices.
    pub charge: Money,
}

/// Itemised price of an assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub base: Money,

    /// One entry per group with at least one pick, in group order.
    pub groups: Vec<GroupCharge>,

    pub total: Money,
}

/// Prices the picks of a single group.
///
/// Returns `None` when the group has no picks.
pub fn group_charge(group: &OptionGroup, selection: &SelectionState) -> Option<GroupCharge> {
    let mut picked: Vec<&OptionItem> = selection.selected_items(group);
    if picked.is_empty() {
        return None;
    }

    let included = group.included_count as usize;

    if picked.len() <= included {
        return Some(GroupCharge {
            group_id: group.id.clone(),
            free_item_ids: picked.iter().map(|item| item.id.clone()).collect(),
            charged_item_ids: Vec::new(),
            charge: Money::zero(),
        });
    }

    // sort_by_key is stable, so equal prices stay in click order
    picked.sort_by_key(|item| item.additional_price_cents);
    let (free, charged) = picked.split_at(included);

    Some(GroupCharge {
        group_id: group.id.clone(),
        free_item_ids: free.iter().map(|item| item.id.clone()).collect(),
        charged_item_ids: charged.iter().map(|item| item.id.clone()).collect(),
        charge: charged.iter().map(|item| item.additional_price()).sum(),
    })
}

/// Prices every group and totals the result.
pub fn price_breakdown(base: Money, groups: &[OptionGroup], selection: &SelectionState) -> PriceBreakdown {
    let charges: Vec<GroupCharge> = groups
        .iter()
        .filter_map(|group| group_charge(group, selection))
        .collect();

    let total = base + charges.iter().map(|charge| charge.charge).sum::<Money>();

    PriceBreakdown {
        base,
        groups: charges,
        total,
    }
}

/// Total price of the assembly.
///
/// ## Example
/// ```rust
/// use mesa_core::money::Money;
/// use mesa_core::pricing::compute_total;
/// use mesa_core::{OptionGroup, OptionItem, SelectionState};
///
/// let toppings = OptionGroup::new("toppings", "Toppings", 0, 3)
///     .with_included(1)
///     .with_item(OptionItem::new("a", "A", 200))
///     .with_item(OptionItem::new("b", "B", 300))
///     .with_item(OptionItem::new("c", "C", 500));
///
/// let mut selection = SelectionState::new();
/// for id in ["a", "b", "c"] {
///     selection.toggle(&toppings, id).unwrap();
/// }
///
/// let total = compute_total(Money::from_cents(1000), &[toppings], &selection);
/// assert_eq!(total.cents(), 1800);
/// ```
pub fn compute_total(base: Money, groups: &[OptionGroup], selection: &SelectionState) -> Money {
    price_breakdown(base, groups, selection).total
}

// =============================================================================
// Unit Tests
// =============================================================================
