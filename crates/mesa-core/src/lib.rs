//! # mesa-core: Pure Assembly Logic for Mesa POS
//!
//! This crate prices and validates configurable ("build your own") products.
//! A customer picks add-ons from option groups; each group limits how many
//! items may be picked and may include some of them for free. Everything here
//! is a pure function over plain data.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Mesa POS Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │            Catalog / Options Provider (REST API)                │   │
//! │  │        GET product configuration ──► ProductConfiguration       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ mesa-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ selection │  │  pricing  │  │  session  │  │ validation│  │   │
//! │  │   │  toggle   │  │ free tier │  │  confirm  │  │  catalog  │  │   │
//! │  │   │  limits   │  │  totals   │  │  cancel   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO LOGGING • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ AssembledLine                          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              Cart / Order Collaborator (mesa-register)           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Catalog types (OptionGroup, OptionItem) and the AssembledLine
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`selection`] - Per-group selection state and cardinality rules
//! - [`pricing`] - Total price with free-tier discounting
//! - [`session`] - The assembly session state machine
//! - [`validation`] - Catalog validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use mesa_core::{AssemblySession, BaseProduct, OptionGroup, OptionItem, ProductConfiguration};
//!
//! let configuration = ProductConfiguration {
//!     product: BaseProduct::new("burger", "Build Your Burger", 1000),
//!     groups: vec![OptionGroup::new("toppings", "Toppings", 0, 3)
//!         .with_included(1)
//!         .with_item(OptionItem::new("lettuce", "Lettuce", 200))
//!         .with_item(OptionItem::new("bacon", "Bacon", 500))],
//! };
//!
//! let mut session = AssemblySession::open(configuration).unwrap();
//! session.toggle("toppings", "lettuce").unwrap();
//! session.toggle("toppings", "bacon").unwrap();
//!
//! // Lettuce is the cheapest pick, so it is the one covered by the free tier
//! assert_eq!(session.total().cents(), 1500);
//!
//! let line = session.confirm().unwrap();
//! assert_eq!(line.selected_item_ids, vec!["lettuce", "bacon"]);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pricing;
pub mod selection;
pub mod session;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{GroupCharge, PriceBreakdown};
pub use selection::{SelectionState, ToggleOutcome};
pub use session::{AssemblySession, SessionStatus};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Quantity of every assembled line.
///
/// Each assembly produces exactly one unit; ordering two of the same build
/// means running the assembly twice.
pub const ASSEMBLED_LINE_QUANTITY: i64 = 1;

/// Maximum length of product and group display names.
pub const MAX_NAME_LENGTH: usize = 200;

/// Maximum price in cents for a base product or a single option ($1,000,000).
///
/// Totals of validated catalogs stay far below `i64::MAX`.
pub const MAX_PRICE_CENTS: i64 = 100_000_000;
