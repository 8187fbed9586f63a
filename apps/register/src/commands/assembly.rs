//! # Assembly Commands
//!
//! Commands behind the "build your own" screen.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cashier taps "Build a Sandwich"                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  open_assembly(configuration) ──► AssemblyView (total = base price)    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  toggle_option(group, item) ────► AssemblyView (total recomputed)      │
//! │       │        ▲                                                        │
//! │       │        └── LIMIT_REACHED: view unchanged, message shown        │
//! │       ▼                                                                 │
//! │  confirm_assembly() ────────────► CartResponse (line appended)         │
//! │       │                                                                 │
//! │       └── MINIMUM_NOT_MET: assembly stays open                         │
//! │                                                                         │
//! │  cancel_assembly() at any point discards everything                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use mesa_core::{AssemblySession, PriceBreakdown, ProductConfiguration};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::commands::cart::CartResponse;
use crate::error::ApiError;
use crate::state::{AssemblyState, CartState, ConfigState};

/// One selectable item as the assembly screen shows it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ItemView {
    pub id: String,
    pub label: String,
    pub additional_price_cents: i64,
    pub selected: bool,
}

/// One option group with its current picks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GroupView {
    pub id: String,
    pub name: String,
    pub min_count: u32,
    pub max_count: u32,
    pub included_count: u32,
    pub selected_count: usize,
    /// Radio buttons instead of checkboxes
    pub exclusive: bool,
    pub items: Vec<ItemView>,
}

/// Everything the assembly screen renders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AssemblyView {
    pub product_id: String,
    pub product_name: String,
    pub groups: Vec<GroupView>,
    pub total_cents: i64,
    /// Total formatted with the store currency
    pub total_display: String,
    pub breakdown: PriceBreakdown,
}

impl AssemblyView {
    /// Builds the view from a session.
    pub fn from_session(session: &AssemblySession, config: &ConfigState) -> Self {
        let selection = session.selection();

        let groups = session
            .groups()
            .iter()
            .map(|group| GroupView {
                id: group.id.clone(),
                name: group.name.clone(),
                min_count: group.min_count,
                max_count: group.max_count,
                included_count: group.included_count,
                selected_count: selection.count(&group.id),
                exclusive: group.is_exclusive(),
                items: group
                    .items
                    .iter()
                    .map(|item| ItemView {
                        id: item.id.clone(),
                        label: item.label.clone(),
                        additional_price_cents: item.additional_price_cents,
                        selected: selection.is_selected(&group.id, &item.id),
                    })
                    .collect(),
            })
            .collect();

        AssemblyView {
            product_id: session.product().id.clone(),
            product_name: session.product().name.clone(),
            groups,
            total_cents: session.total().cents(),
            total_display: config.format_currency(session.total().cents()),
            breakdown: session.breakdown(),
        }
    }
}

/// Opens the assembly screen for a configurable product.
///
/// A previous assembly still open is discarded, as if cancelled.
pub fn open_assembly(
    assembly: &AssemblyState,
    config: &ConfigState,
    configuration: ProductConfiguration,
) -> Result<AssemblyView, ApiError> {
    debug!(product_id = %configuration.product.id, "open_assembly command");

    let session = AssemblySession::open(configuration)?;
    let view = AssemblyView::from_session(&session, config);

    assembly.with_slot_mut(|slot| {
        if let Some(previous) = slot.replace(session) {
            warn!(
                product_id = %previous.product().id,
                "Discarding unfinished assembly"
            );
        }
    });

    info!(product_id = %view.product_id, groups = view.groups.len(), "Assembly opened");
    Ok(view)
}

/// Returns the open assembly.
pub fn get_assembly(assembly: &AssemblyState, config: &ConfigState) -> Result<AssemblyView, ApiError> {
    debug!("get_assembly command");
    assembly.with_session(|session| {
        session
            .map(|session| AssemblyView::from_session(session, config))
            .ok_or_else(ApiError::no_assembly)
    })
}

/// Toggles an option and returns the repriced view.
pub fn toggle_option(
    assembly: &AssemblyState,
    config: &ConfigState,
    group_id: &str,
    item_id: &str,
) -> Result<AssemblyView, ApiError> {
    debug!(group_id, item_id, "toggle_option command");

    assembly.with_slot_mut(|slot| -> Result<AssemblyView, ApiError> {
        let session = slot.as_mut().ok_or_else(ApiError::no_assembly)?;

        match session.toggle(group_id, item_id) {
            Ok(outcome) => {
                debug!(?outcome, total = %session.total(), "Option toggled");
                Ok(AssemblyView::from_session(session, config))
            }
            Err(err) => {
                if !err.is_defect() {
                    warn!(error = %err, "Toggle rejected");
                }
                Err(err.into())
            }
        }
    })
}

/// Confirms the assembly and hands the line to the cart.
///
/// ## Behavior
/// - Cart full: rejected before validation, assembly stays open
/// - A group below its minimum: rejected, assembly stays open
/// - Cart refuses the line: rejected, assembly stays open with its picks
/// - Success: line appended to the cart, assembly slot emptied
///
/// The cart lock is held from the capacity check until the line is stored;
/// the slot is only emptied once the cart has accepted the line.
pub fn confirm_assembly(
    assembly: &AssemblyState,
    cart: &CartState,
    config: &ConfigState,
) -> Result<CartResponse, ApiError> {
    debug!("confirm_assembly command");

    assembly.with_slot_mut(|slot| -> Result<CartResponse, ApiError> {
        let session = slot.as_ref().ok_or_else(ApiError::no_assembly)?;

        let response = cart.with_cart_mut(|c| -> Result<CartResponse, ApiError> {
            if !c.has_capacity(config.max_cart_lines) {
                return Err(ApiError::cart(format!(
                    "Cart cannot have more than {} lines",
                    config.max_cart_lines
                )));
            }

            // Confirm a copy so a refused line leaves the open session intact
            let mut pending = session.clone();
            let line = pending.confirm().map_err(|err| {
                warn!(error = %err, "Confirmation rejected");
                ApiError::from(err)
            })?;

            info!(
                line_id = %line.line_id,
                product_id = %line.base_product_id,
                price = %line.unit_price(),
                options = line.selected_item_ids.len(),
                "Assembly confirmed"
            );

            c.add_line(line, pending.product().name.clone(), config.max_cart_lines)
                .map_err(ApiError::cart)?;
            Ok(CartResponse::from(&*c))
        })?;

        *slot = None;
        Ok(response)
    })
}

/// Discards the open assembly without touching the cart.
pub fn cancel_assembly(assembly: &AssemblyState) -> Result<(), ApiError> {
    debug!("cancel_assembly command");

    assembly.with_slot_mut(|slot| -> Result<(), ApiError> {
        let mut session = slot.take().ok_or_else(ApiError::no_assembly)?;
        session.cancel()?;
        info!(product_id = %session.product().id, "Assembly cancelled");
        Ok(())
    })
}
