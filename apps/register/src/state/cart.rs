//! # Cart State
//!
//! Receives assembled lines and keeps the running order.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` so a host shell can share it
//! between handlers; every operation is short and synchronous.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Front end Action          Command                Cart State Change     │
//! │  ────────────────          ───────                ─────────────────     │
//! │                                                                         │
//! │  Confirm assembly ───────► confirm_assembly() ──► lines.push(line)     │
//! │                                                                         │
//! │  Click Remove ───────────► remove_cart_line() ──► lines.retain(..)     │
//! │                                                                         │
//! │  Click Clear ────────────► clear_cart() ────────► lines.clear()        │
//! │                                                                         │
//! │  View Cart ──────────────► get_cart() ──────────► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use mesa_core::AssembledLine;
use serde::{Deserialize, Serialize};

/// A confirmed assembly sitting in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// The line exactly as the assembly produced it
    #[serde(flatten)]
    pub line: AssembledLine,

    /// Product name at time of adding (frozen)
    pub product_name: String,

    /// When this line was added to cart
    pub added_at: DateTime<Utc>,
}

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by `line_id` (every assembly yields a fresh id)
/// - Line count never exceeds the configured cap
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Lines in the order they were confirmed
    pub lines: Vec<CartLine>,

    /// When the cart was created/last cleared
    pub created_at: DateTime<Utc>,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Whether one more line fits under `max_lines`.
    pub fn has_capacity(&self, max_lines: usize) -> bool {
        self.lines.len() < max_lines
    }

    /// Appends an assembled line.
    ///
    /// ## Returns
    /// - `Ok(())` on success
    /// - `Err(String)` if the cart is full or the line id is already present
    pub fn add_line(
        &mut self,
        line: AssembledLine,
        product_name: impl Into<String>,
        max_lines: usize,
    ) -> Result<(), String> {
        if !self.has_capacity(max_lines) {
            return Err(format!("Cart cannot have more than {} lines", max_lines));
        }

        if self.lines.iter().any(|l| l.line.line_id == line.line_id) {
            return Err(format!("Line {} is already in the cart", line.line_id));
        }

        self.lines.push(CartLine {
            line,
            product_name: product_name.into(),
            added_at: Utc::now(),
        });
        Ok(())
    }

    /// Removes a line by its line id.
    pub fn remove_line(&mut self, line_id: &str) -> Result<(), String> {
        let initial_len = self.lines.len();
        self.lines.retain(|l| l.line.line_id != line_id);

        if self.lines.len() == initial_len {
            Err(format!("Line {} not in cart", line_id))
        } else {
            Ok(())
        }
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.created_at = Utc::now();
    }

    /// Returns the number of lines in the cart.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity of all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.line.quantity).sum()
    }

    /// Sum of line subtotals.
    pub fn subtotal_cents(&self) -> i64 {
        self.lines.iter().map(|l| l.line.subtotal_cents).sum()
    }

    /// Every selected option id across the cart, in line order.
    ///
    /// This is what the order API persists alongside the lines.
    pub fn order_item_ids(&self) -> Vec<String> {
        self.lines
            .iter()
            .flat_map(|l| l.line.selected_item_ids.iter().cloned())
            .collect()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Cart totals summary for API responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub line_count: usize,
    pub total_quantity: i64,
    pub subtotal_cents: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: cart.line_count(),
            total_quantity: cart.total_quantity(),
            subtotal_cents: cart.subtotal_cents(),
        }
    }
}

/// Shared cart state.
///
/// ## Why Not RwLock?
/// Cart operations are quick, and most of them modify state.
#[derive(Debug, Default)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the cart.
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut cart)
    }
}
