//! # Selection State
//!
//! Tracks which add-ons the customer picked in each option group and enforces
//! the group's cardinality at the moment of every toggle.
//!
//! ## Toggle Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    toggle(group, item)                                  │
//! │                                                                         │
//! │  max_count == 1 (radio)                                                │
//! │  ├── item is the current pick ──────► clear the group                  │
//! │  └── otherwise ─────────────────────► replace the pick with item       │
//! │                                                                         │
//! │  max_count > 1 (checkbox)                                              │
//! │  ├── item already picked ───────────► remove it                        │
//! │  ├── picks < max_count ─────────────► append it (click order kept)     │
//! │  └── picks == max_count ────────────► GroupLimitReached, no change     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Groups are independent: a toggle in one group never touches another.

use std::collections::HashMap;

use crate::error::{CoreError, CoreResult};
use crate::types::{OptionGroup, OptionItem};

/// What a successful toggle did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The item was added to the group's picks.
    Selected,
    /// The item was removed from the group's picks.
    Deselected,
    /// Single-choice group: the item replaced `evicted`.
    Replaced { evicted: String },
}

/// Per-group picks, in the order the customer made them.
///
/// Item ids are stored rather than items so the catalog stays the single
/// source of prices. Groups with no picks have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selections: HashMap<String, Vec<String>>,
}

impl SelectionState {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles `item_id` within `group`.
    ///
    /// ## Errors
    /// - [`CoreError::UnknownOption`] if the item is not listed in `group`
    /// - [`CoreError::GroupLimitReached`] if a multi-choice group is full
    ///
    /// The selection is unchanged whenever an error is returned.
    ///
    /// ## Example
    /// ```rust
    /// use mesa_core::{OptionGroup, OptionItem, SelectionState, ToggleOutcome};
    ///
    /// let bread = OptionGroup::new("bread", "Bread", 1, 1)
    ///     .with_item(OptionItem::new("white", "White", 0))
    ///     .with_item(OptionItem::new("rye", "Rye", 50));
    ///
    /// let mut selection = SelectionState::new();
    /// selection.toggle(&bread, "white").unwrap();
    /// let outcome = selection.toggle(&bread, "rye").unwrap();
    ///
    /// assert_eq!(outcome, ToggleOutcome::Replaced { evicted: "white".to_string() });
    /// assert!(selection.is_selected("bread", "rye"));
    /// assert!(!selection.is_selected("bread", "white"));
    /// ```
    pub fn toggle(&mut self, group: &OptionGroup, item_id: &str) -> CoreResult<ToggleOutcome> {
        if group.item(item_id).is_none() {
            return Err(CoreError::UnknownOption {
                group_id: group.id.clone(),
                item_id: item_id.to_string(),
            });
        }

        if group.is_exclusive() {
            return Ok(self.toggle_exclusive(&group.id, item_id));
        }

        let picked = self.selections.get(&group.id).map_or(&[][..], Vec::as_slice);

        if let Some(position) = picked.iter().position(|id| id == item_id) {
            self.remove_at(&group.id, position);
            return Ok(ToggleOutcome::Deselected);
        }

        if picked.len() >= group.max_count as usize {
            return Err(CoreError::GroupLimitReached {
                group_id: group.id.clone(),
                group_name: group.name.clone(),
                max: group.max_count,
            });
        }

        self.selections
            .entry(group.id.clone())
            .or_default()
            .push(item_id.to_string());
        Ok(ToggleOutcome::Selected)
    }

    fn toggle_exclusive(&mut self, group_id: &str, item_id: &str) -> ToggleOutcome {
        match self.selections.remove(group_id) {
            Some(previous) if previous.len() == 1 && previous[0] == item_id => {
                ToggleOutcome::Deselected
            }
            previous => {
                self.selections
                    .insert(group_id.to_string(), vec![item_id.to_string()]);
                match previous.and_then(|ids| ids.into_iter().next()) {
                    Some(evicted) => ToggleOutcome::Replaced { evicted },
                    None => ToggleOutcome::Selected,
                }
            }
        }
    }

    fn remove_at(&mut self, group_id: &str, position: usize) {
        if let Some(picked) = self.selections.get_mut(group_id) {
            picked.remove(position);
            if picked.is_empty() {
                self.selections.remove(group_id);
            }
        }
    }

    /// Whether `item_id` is currently picked in `group_id`.
    pub fn is_selected(&self, group_id: &str, item_id: &str) -> bool {
        self.selections
            .get(group_id)
            .is_some_and(|picked| picked.iter().any(|id| id == item_id))
    }

    /// Number of picks in a group.
    pub fn count(&self, group_id: &str) -> usize {
        self.selections.get(group_id).map_or(0, Vec::len)
    }

    /// Picked item ids for a group, oldest first.
    pub fn selected_ids(&self, group_id: &str) -> &[String] {
        self.selections.get(group_id).map_or(&[][..], Vec::as_slice)
    }

    /// Picked items of `group`, resolved against its catalog entries, oldest first.
    pub fn selected_items<'g>(&self, group: &'g OptionGroup) -> Vec<&'g OptionItem> {
        self.selected_ids(&group.id)
            .iter()
            .filter_map(|id| group.item(id))
            .collect()
    }

    /// All picked ids across `groups`: group order, then selection order.
    pub fn flattened_ids(&self, groups: &[OptionGroup]) -> Vec<String> {
        groups
            .iter()
            .flat_map(|group| self.selected_ids(&group.id).iter().cloned())
            .collect()
    }

    /// Drops every pick in one group.
    pub fn clear_group(&mut self, group_id: &str) {
        self.selections.remove(group_id);
    }

    /// Drops every pick.
    pub fn clear(&mut self) {
        self.selections.clear();
    }

    /// True when nothing is picked anywhere.
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
