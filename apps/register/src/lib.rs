//! # mesa-register: Register Layer for Mesa POS
//!
//! The thin orchestration layer between the browser front end and
//! `mesa-core`. It owns the open assembly session and the cart, converts
//! domain errors into `{ code, message }` responses, and sets up logging.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        mesa-register                                    │
//! │                                                                         │
//! │  lib.rs ─────► Register (bundled state), init_tracing()                 │
//! │                                                                         │
//! │  commands/ ──► open_assembly, toggle_option, confirm_assembly, ...      │
//! │                                                                         │
//! │  state/ ─────► AssemblyState, CartState, ConfigState                    │
//! │                                                                         │
//! │  error.rs ───► ApiError, ErrorCode                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use mesa_core::{BaseProduct, OptionGroup, OptionItem, ProductConfiguration};
//! use mesa_register::commands::assembly::{confirm_assembly, open_assembly, toggle_option};
//! use mesa_register::Register;
//!
//! let register = Register::default();
//! let configuration = ProductConfiguration {
//!     product: BaseProduct::new("salad", "Build a Salad", 800),
//!     groups: vec![OptionGroup::new("dressing", "Dressing", 1, 1)
//!         .with_item(OptionItem::new("ranch", "Ranch", 50))],
//! };
//!
//! open_assembly(&register.assembly, &register.config, configuration).unwrap();
//! toggle_option(&register.assembly, &register.config, "dressing", "ranch").unwrap();
//! let cart = confirm_assembly(&register.assembly, &register.cart, &register.config).unwrap();
//!
//! assert_eq!(cart.totals.subtotal_cents, 850);
//! ```

pub mod commands;
pub mod error;
pub mod state;

use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{AssemblyState, CartState, ConfigState};

/// Default cap on cart lines.
///
/// Prevents runaway carts; overridable with `MESA_MAX_CART_LINES`.
pub const DEFAULT_MAX_CART_LINES: usize = 100;

/// All register state, one value per concern.
#[derive(Debug, Default)]
pub struct Register {
    pub assembly: AssemblyState,
    pub cart: CartState,
    pub config: ConfigState,
}

impl Register {
    /// Creates a register with an explicit configuration.
    pub fn new(config: ConfigState) -> Self {
        Register {
            assembly: AssemblyState::new(),
            cart: CartState::new(),
            config,
        }
    }

    /// Creates a register configured from the environment.
    pub fn from_env() -> Self {
        let register = Register::new(ConfigState::from_env());
        info!(store = %register.config.store_name, "Register initialized");
        register
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=mesa_register=trace` - Show trace for the register only
/// - Default: INFO, DEBUG for the register
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,mesa_register=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
}
