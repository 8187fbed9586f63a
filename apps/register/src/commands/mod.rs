//! # Commands Module
//!
//! Everything the front end can invoke on the register.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── assembly.rs  ◄─── Open, toggle, confirm, cancel an assembly
//! ├── cart.rs      ◄─── Cart read, remove, clear
//! └── config.rs    ◄─── Configuration retrieval
//! ```
//!
//! ## State Injection
//! Each command takes only the state it needs:
//! ```rust,ignore
//! // Only needs the assembly slot
//! fn cancel_assembly(assembly: &AssemblyState)
//!
//! // Only needs the cart
//! fn get_cart(cart: &CartState)
//!
//! // Needs all three
//! fn confirm_assembly(assembly: &AssemblyState, cart: &CartState, config: &ConfigState)
//! ```
//!
//! Every fallible command returns `Result<T, ApiError>`; the error serializes
//! to `{ code, message }` for the front end.

pub mod assembly;
pub mod cart;
pub mod config;
