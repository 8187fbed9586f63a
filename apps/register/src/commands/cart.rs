//! # Cart Commands
//!
//! Commands for reading and trimming the cart. Lines only enter the cart
//! through `confirm_assembly`.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{Cart, CartLine, CartState, CartTotals};

/// Cart response including lines and totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
    /// Flattened option ids for the order API
    pub order_item_ids: Vec<String>,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            lines: cart.lines.clone(),
            totals: CartTotals::from(cart),
            order_item_ids: cart.order_item_ids(),
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(cart: &CartState) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::from(c))
}

/// Removes one line from the cart.
pub fn remove_cart_line(cart: &CartState, line_id: &str) -> Result<CartResponse, ApiError> {
    debug!(line_id, "remove_cart_line command");

    cart.with_cart_mut(|c| -> Result<CartResponse, ApiError> {
        c.remove_line(line_id)
            .map_err(|_| ApiError::not_found("Cart line", line_id))?;
        Ok(CartResponse::from(&*c))
    })
}

/// Empties the cart.
pub fn clear_cart(cart: &CartState) -> CartResponse {
    debug!("clear_cart command");

    cart.with_cart_mut(|c| {
        let removed = c.line_count();
        c.clear();
        info!(removed, "Cart cleared");
        CartResponse::from(&*c)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use mesa_core::{AssembledLine, Money};

    fn cart_with_lines(count: usize) -> (CartState, Vec<String>) {
        let state = CartState::new();
        let ids = (0..count)
            .map(|i| {
                let line = AssembledLine::new(
                    "wrap",
                    Money::from_cents(700),
                    vec![format!("opt-{i}")],
                );
                let id = line.line_id.clone();
                state
                    .with_cart_mut(|c| c.add_line(line, "Wrap", 10))
                    .unwrap();
                id
            })
            .collect();
        (state, ids)
    }

    #[test]
    fn test_get_cart() {
        let (state, _) = cart_with_lines(2);
        let response = get_cart(&state);

        assert_eq!(response.lines.len(), 2);
        assert_eq!(response.totals.subtotal_cents, 1400);
        assert_eq!(response.order_item_ids, ["opt-0", "opt-1"]);
    }

    #[test]
    fn test_remove_cart_line() {
        let (state, ids) = cart_with_lines(2);

        let response = remove_cart_line(&state, &ids[0]).unwrap();
        assert_eq!(response.totals.line_count, 1);
        assert_eq!(response.order_item_ids, ["opt-1"]);

        let err = remove_cart_line(&state, &ids[0]).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_clear_cart() {
        let (state, _) = cart_with_lines(3);
        let response = clear_cart(&state);

        assert!(response.lines.is_empty());
        assert_eq!(response.totals.total_quantity, 0);
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let (state, _) = cart_with_lines(1);
        let json = serde_json::to_value(get_cart(&state)).unwrap();

        assert_eq!(json["totals"]["lineCount"], 1);
        assert_eq!(json["orderItemIds"], serde_json::json!(["opt-0"]));
        assert_eq!(json["lines"][0]["quantity"], 1);
    }
}
