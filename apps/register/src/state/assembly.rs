//! # Assembly State
//!
//! Holds the single assembly session the register is working on.
//!
//! Only one product is configured at a time. The slot is empty when no
//! assembly screen is open; confirming or cancelling empties it again.

use std::sync::{Arc, Mutex, PoisonError};

use mesa_core::AssemblySession;

/// Shared slot for the active assembly session.
#[derive(Debug, Default)]
pub struct AssemblyState {
    session: Arc<Mutex<Option<AssemblySession>>>,
}

impl AssemblyState {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the slot.
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(Option<&AssemblySession>) -> R,
    {
        let slot = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        f(slot.as_ref())
    }

    /// Executes a function with write access to the slot.
    ///
    /// The closure may replace or take the session.
    pub fn with_slot_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Option<AssemblySession>) -> R,
    {
        let mut slot = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut slot)
    }

    /// Whether an assembly is in progress.
    pub fn is_active(&self) -> bool {
        self.with_session(|session| session.is_some())
    }
}
