//! # Assembly Session
//!
//! One customer configuring one instance of a configurable product, from the
//! moment the assembly screen opens until it is confirmed or cancelled.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Assembly Session Lifecycle                           │
//! │                                                                         │
//! │              toggle (price recomputed before returning)                 │
//! │                 ┌────┐                                                  │
//! │                 ▼    │                                                  │
//! │  open() ──► ┌──────────┐   confirm() ok   ┌───────────┐                │
//! │             │   Open   │─────────────────►│ Confirmed │──► AssembledLine│
//! │             └──────────┘                  └───────────┘                │
//! │               │      ▲                                                  │
//! │               │      │ MinimumNotMet (stays Open, nothing emitted)      │
//! │               │      └── confirm() fails                                │
//! │               │                                                         │
//! │               └── cancel() ──────────────►┌───────────┐                │
//! │                                           │ Cancelled │                │
//! │                                           └───────────┘                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The session exclusively owns its [`SelectionState`]; selections are
//! dropped as soon as the session leaves `Open`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::pricing::{self, PriceBreakdown};
use crate::selection::{SelectionState, ToggleOutcome};
use crate::types::{AssembledLine, BaseProduct, OptionGroup, ProductConfiguration};
use crate::validation::validate_configuration;

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// Selections can change.
    #[default]
    Open,
    /// A line was produced; terminal.
    Confirmed,
    /// Aborted without output; terminal.
    Cancelled,
}

/// Checks every group's minimum, in group order.
///
/// Stops at the first group below its minimum. Maximums are not checked here
/// because [`SelectionState::toggle`] never lets a group exceed one.
pub fn validate_selection(groups: &[OptionGroup], selection: &SelectionState) -> CoreResult<()> {
    match groups
        .iter()
        .find(|group| selection.count(&group.id) < group.min_count as usize)
    {
        Some(group) => Err(CoreError::MinimumNotMet {
            group_id: group.id.clone(),
            group_name: group.name.clone(),
            min: group.min_count,
        }),
        None => Ok(()),
    }
}

/// An in-progress assembly.
#[derive(Debug, Clone)]
pub struct AssemblySession {
    product: BaseProduct,
    groups: Vec<OptionGroup>,
    selection: SelectionState,
    total: Money,
    status: SessionStatus,
}

impl AssemblySession {
    /// Opens a session for a validated configuration.
    ///
    /// ## Errors
    /// [`CoreError::Validation`] if the catalog data is malformed.
    pub fn open(configuration: ProductConfiguration) -> CoreResult<Self> {
        validate_configuration(&configuration)?;

        let ProductConfiguration { product, groups } = configuration;
        let total = product.price();

        Ok(AssemblySession {
            product,
            groups,
            selection: SelectionState::new(),
            total,
            status: SessionStatus::Open,
        })
    }

    fn ensure_open(&self) -> CoreResult<()> {
        if self.status != SessionStatus::Open {
            return Err(CoreError::SessionClosed {
                status: self.status,
            });
        }
        Ok(())
    }

    fn recompute(&mut self) {
        self.total = pricing::compute_total(self.product.price(), &self.groups, &self.selection);
    }

    /// Toggles an item and recomputes the total before returning.
    ///
    /// ## Errors
    /// - [`CoreError::SessionClosed`] after confirm or cancel
    /// - [`CoreError::UnknownGroup`] / [`CoreError::UnknownOption`] for ids
    ///   not in the configuration
    /// - [`CoreError::GroupLimitReached`] when a multi-choice group is full
    pub fn toggle(&mut self, group_id: &str, item_id: &str) -> CoreResult<ToggleOutcome> {
        self.ensure_open()?;

        let group = self
            .groups
            .iter()
            .find(|group| group.id == group_id)
            .ok_or_else(|| CoreError::UnknownGroup(group_id.to_string()))?;

        let outcome = self.selection.toggle(group, item_id)?;
        self.recompute();
        Ok(outcome)
    }

    /// Whether `item_id` is currently picked in `group_id`.
    pub fn is_selected(&self, group_id: &str, item_id: &str) -> bool {
        self.selection.is_selected(group_id, item_id)
    }

    /// The last computed total.
    pub fn total(&self) -> Money {
        self.total
    }

    /// Itemised price for display.
    pub fn breakdown(&self) -> PriceBreakdown {
        pricing::price_breakdown(self.product.price(), &self.groups, &self.selection)
    }

    /// Checks group minimums without changing the session.
    pub fn validate(&self) -> CoreResult<()> {
        validate_selection(&self.groups, &self.selection)
    }

    /// Validates and produces the cart line.
    ///
    /// On `MinimumNotMet` the session stays open with its selections intact.
    pub fn confirm(&mut self) -> CoreResult<AssembledLine> {
        self.ensure_open()?;
        self.validate()?;

        let line = AssembledLine::new(
            self.product.id.clone(),
            self.total,
            self.selection.flattened_ids(&self.groups),
        );

        self.selection.clear();
        self.status = SessionStatus::Confirmed;
        Ok(line)
    }

    /// Abandons the session without producing anything.
    pub fn cancel(&mut self) -> CoreResult<()> {
        self.ensure_open()?;
        self.selection.clear();
        self.status = SessionStatus::Cancelled;
        Ok(())
    }

    pub fn product(&self) -> &BaseProduct {
        &self.product
    }

    pub fn groups(&self) -> &[OptionGroup] {
        &self.groups
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OptionItem;
    use crate::MAX_PRICE_CENTS;

    fn sandwich() -> ProductConfiguration {
        ProductConfiguration {
            product: BaseProduct::new("sandwich", "Build a Sandwich", 1000),
            groups: vec![
                OptionGroup::new("bread", "Bread", 1, 1)
                    .with_item(OptionItem::new("white", "White", 150))
                    .with_item(OptionItem::new("rye", "Rye", 200)),
                OptionGroup::new("sauces", "Sauces", 0, 2)
                    .with_item(OptionItem::new("ketchup", "Ketchup", 0))
                    .with_item(OptionItem::new("mayo", "Mayo", 25))
                    .with_item(OptionItem::new("bbq", "BBQ", 50)),
                OptionGroup::new("toppings", "Toppings", 0, 3)
                    .with_included(1)
                    .with_item(OptionItem::new("lettuce", "Lettuce", 200))
                    .with_item(OptionItem::new("egg", "Egg", 300))
                    .with_item(OptionItem::new("bacon", "Bacon", 500)),
            ],
        }
    }

    #[test]
    fn test_open_starts_at_base_price() {
        let session = AssemblySession::open(sandwich()).unwrap();
        assert_eq!(session.status(), SessionStatus::Open);
        assert_eq!(session.total().cents(), 1000);
        assert!(session.selection().is_empty());
    }

    #[test]
    fn test_open_rejects_malformed_catalog() {
        let mut config = sandwich();
        config.groups[1].max_count = 0;

        let err = AssemblySession::open(config).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_open_rejects_price_beyond_cap() {
        let config = ProductConfiguration {
            product: BaseProduct::new("p", "P", i64::MAX),
            groups: vec![OptionGroup::new("g", "G", 0, 1).with_item(OptionItem::new("a", "A", 1))],
        };

        let err = AssemblySession::open(config).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_max_priced_catalog_totals_exactly() {
        let config = ProductConfiguration {
            product: BaseProduct::new("p", "P", MAX_PRICE_CENTS),
            groups: vec![OptionGroup::new("g", "G", 0, 2)
                .with_item(OptionItem::new("a", "A", MAX_PRICE_CENTS))
                .with_item(OptionItem::new("b", "B", MAX_PRICE_CENTS))],
        };
        let mut session = AssemblySession::open(config).unwrap();

        session.toggle("g", "a").unwrap();
        session.toggle("g", "b").unwrap();

        assert_eq!(session.total().cents(), 3 * MAX_PRICE_CENTS);
        assert_eq!(session.confirm().unwrap().subtotal_cents, 3 * MAX_PRICE_CENTS);
    }

    #[test]
    fn test_default_status_is_open() {
        assert_eq!(SessionStatus::default(), SessionStatus::Open);
    }

    #[test]
    fn test_free_tier_scenario() {
        let mut session = AssemblySession::open(sandwich()).unwrap();
        for id in ["lettuce", "egg", "bacon"] {
            session.toggle("toppings", id).unwrap();
        }

        // Lettuce is absorbed by the free tier: 10.00 + 3.00 + 5.00
        assert_eq!(session.total().cents(), 1800);
    }

    #[test]
    fn test_exclusive_replacement_reprices() {
        let mut session = AssemblySession::open(sandwich()).unwrap();

        session.toggle("bread", "white").unwrap();
        assert_eq!(session.total().cents(), 1150);

        session.toggle("bread", "rye").unwrap();
        assert!(!session.is_selected("bread", "white"));
        assert!(session.is_selected("bread", "rye"));
        assert_eq!(session.total().cents(), 1200);
    }

    #[test]
    fn test_limit_reached_keeps_selection_and_price() {
        let mut session = AssemblySession::open(sandwich()).unwrap();
        session.toggle("sauces", "ketchup").unwrap();
        session.toggle("sauces", "mayo").unwrap();
        let total = session.total();

        let err = session.toggle("sauces", "bbq").unwrap_err();
        assert!(matches!(err, CoreError::GroupLimitReached { max: 2, .. }));
        assert!(session.is_selected("sauces", "ketchup"));
        assert!(session.is_selected("sauces", "mayo"));
        assert!(!session.is_selected("sauces", "bbq"));
        assert_eq!(session.total(), total);
    }

    #[test]
    fn test_unknown_group_is_defect() {
        let mut session = AssemblySession::open(sandwich()).unwrap();

        let err = session.toggle("drinks", "cola").unwrap_err();
        assert_eq!(err, CoreError::UnknownGroup("drinks".to_string()));
        assert!(err.is_defect());

        // An item from another group is not accepted either
        let err = session.toggle("sauces", "bacon").unwrap_err();
        assert!(err.is_defect());
        assert!(session.selection().is_empty());
    }

    #[test]
    fn test_confirm_fails_below_minimum_and_stays_open() {
        let mut session = AssemblySession::open(sandwich()).unwrap();
        session.toggle("sauces", "mayo").unwrap();

        let err = session.confirm().unwrap_err();
        assert_eq!(
            err,
            CoreError::MinimumNotMet {
                group_id: "bread".to_string(),
                group_name: "Bread".to_string(),
                min: 1,
            }
        );
        assert_eq!(session.status(), SessionStatus::Open);
        assert!(session.is_selected("sauces", "mayo"));

        // Fix and retry
        session.toggle("bread", "rye").unwrap();
        assert!(session.confirm().is_ok());
    }

    #[test]
    fn test_validation_reports_first_failing_group() {
        let mut config = sandwich();
        config.groups[2].min_count = 2;
        let session = AssemblySession::open(config).unwrap();

        // Both bread and toppings are short; bread comes first
        let err = session.validate().unwrap_err();
        assert!(matches!(err, CoreError::MinimumNotMet { ref group_id, .. } if group_id == "bread"));
    }

    #[test]
    fn test_confirm_builds_line() {
        let mut session = AssemblySession::open(sandwich()).unwrap();
        session.toggle("toppings", "bacon").unwrap();
        session.toggle("sauces", "bbq").unwrap();
        session.toggle("bread", "white").unwrap();
        session.toggle("toppings", "egg").unwrap();

        let expected_total = session.total();
        let line = session.confirm().unwrap();

        assert_eq!(line.base_product_id, "sandwich");
        assert_eq!(line.quantity, 1);
        assert_eq!(line.unit_price(), expected_total);
        assert_eq!(line.subtotal(), expected_total);
        // 10.00 + white 1.50 + bbq 0.50 + bacon 5.00 (egg is free)
        assert_eq!(line.unit_price_cents, 1700);
        assert_eq!(line.selected_item_ids, ["white", "bbq", "bacon", "egg"]);

        assert_eq!(session.status(), SessionStatus::Confirmed);
        assert!(session.selection().is_empty());
    }

    #[test]
    fn test_optional_groups_left_empty() {
        let mut session = AssemblySession::open(sandwich()).unwrap();
        session.toggle("bread", "rye").unwrap();

        let line = session.confirm().unwrap();
        assert_eq!(line.selected_item_ids, ["rye"]);
    }

    #[test]
    fn test_empty_configuration_confirms_trivially() {
        let config = ProductConfiguration {
            product: BaseProduct::new("coffee", "Coffee", 300),
            groups: Vec::new(),
        };
        let mut session = AssemblySession::open(config).unwrap();

        let line = session.confirm().unwrap();
        assert!(line.selected_item_ids.is_empty());
        assert_eq!(line.unit_price_cents, 300);
    }

    #[test]
    fn test_closed_session_rejects_operations() {
        let mut session = AssemblySession::open(sandwich()).unwrap();
        session.toggle("sauces", "mayo").unwrap();
        session.cancel().unwrap();

        assert_eq!(session.status(), SessionStatus::Cancelled);
        assert!(session.selection().is_empty());

        let closed = CoreError::SessionClosed {
            status: SessionStatus::Cancelled,
        };
        assert_eq!(session.toggle("bread", "rye").unwrap_err(), closed);
        assert_eq!(session.confirm().unwrap_err(), closed);
        assert_eq!(session.cancel().unwrap_err(), closed);
    }

    #[test]
    fn test_confirmed_session_cannot_confirm_twice() {
        let mut session = AssemblySession::open(sandwich()).unwrap();
        session.toggle("bread", "white").unwrap();
        session.confirm().unwrap();

        assert!(matches!(
            session.confirm(),
            Err(CoreError::SessionClosed {
                status: SessionStatus::Confirmed
            })
        ));
    }

    #[test]
    fn test_breakdown_matches_total() {
        let mut session = AssemblySession::open(sandwich()).unwrap();
        session.toggle("bread", "rye").unwrap();
        session.toggle("toppings", "egg").unwrap();
        session.toggle("toppings", "lettuce").unwrap();

        let breakdown = session.breakdown();
        assert_eq!(breakdown.total, session.total());
        assert_eq!(breakdown.groups.len(), 2);
        assert_eq!(breakdown.groups[1].free_item_ids, ["lettuce"]);
    }
}
