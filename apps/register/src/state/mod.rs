//! # State Module
//!
//! Manages register state.
//!
//! ## Why Multiple State Types?
//! Instead of a single struct containing everything, each concern gets its
//! own state type and each command declares exactly the state it needs.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌──────────────┐  ┌──────────────────┐          │
//! │  │  AssemblyState   │  │  CartState   │  │   ConfigState    │          │
//! │  │                  │  │              │  │                  │          │
//! │  │  Arc<Mutex<      │  │  Arc<Mutex<  │  │  store_name      │          │
//! │  │   Option<        │  │    Cart      │  │  currency        │          │
//! │  │    Session>>>    │  │  >>          │  │  max_cart_lines  │          │
//! │  └──────────────────┘  └──────────────┘  └──────────────────┘          │
//! │                                                                         │
//! │  LOCK ORDER: AssemblyState before CartState, never the reverse.        │
//! │  ConfigState is read-only after initialization.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod assembly;
mod cart;
mod config;

pub use assembly::AssemblyState;
pub use cart::{Cart, CartLine, CartState, CartTotals};
pub use config::ConfigState;
