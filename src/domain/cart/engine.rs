//! Cart engine core

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::{Mutex, MutexGuard};

use super::{CartLine, CartState, CartStore, GuestCartStorage, OwnerMode};

/// Owns the session's cart and serializes every mutation through one lock,
/// so two read-modify-write round trips can never race the same line.
pub struct CartEngine {
    store: Arc<dyn CartStore>,
    guest_storage: Option<Arc<dyn GuestCartStorage>>,
    state: Mutex<CartState>,
    busy: AtomicBool,
}

impl CartEngine {
    /// Engine with no durable guest storage; the guest cart lives in memory
    /// only.
    pub fn new(store: Arc<dyn CartStore>) -> Self {
        Self {
            store,
            guest_storage: None,
            state: Mutex::new(CartState::default()),
            busy: AtomicBool::new(false),
        }
    }

    /// Engine that rehydrates the guest cart from durable storage and keeps
    /// it saved across mutations. A failed load degrades to an empty cart.
    pub fn with_guest_storage(store: Arc<dyn CartStore>, storage: Arc<dyn GuestCartStorage>) -> Self {
        let lines = storage.load().unwrap_or_else(|error| {
            tracing::warn!(%error, "failed to load guest cart snapshot, starting empty");
            Vec::new()
        });
        let mut state = CartState::default();
        state.replace_lines(OwnerMode::Guest, lines);
        Self {
            store,
            guest_storage: Some(storage),
            state: Mutex::new(state),
            busy: AtomicBool::new(false),
        }
    }

    /// True while a mutation is in flight. Presentation code uses this to
    /// disable controls that would issue overlapping mutations.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// A read-only clone of the current cart for presentation and checkout.
    pub async fn state(&self) -> CartState {
        self.state.lock().await.clone()
    }

    pub(super) fn store(&self) -> &dyn CartStore {
        self.store.as_ref()
    }

    pub(super) async fn begin_mutation(&self) -> MutationGuard<'_> {
        let state = self.state.lock().await;
        self.busy.store(true, Ordering::SeqCst);
        MutationGuard {
            state,
            busy: &self.busy,
        }
    }

    /// Writes the given lines to durable guest storage, if configured.
    /// Save failures are logged and swallowed; they never fail the mutation.
    pub(super) fn save_guest_snapshot(&self, lines: &[CartLine]) {
        let Some(storage) = &self.guest_storage else {
            return;
        };
        if let Err(error) = storage.save(lines) {
            tracing::warn!(%error, "failed to save guest cart snapshot");
        }
    }
}

/// Holds the cart lock and the busy flag for the duration of one mutation.
pub(super) struct MutationGuard<'a> {
    pub(super) state: MutexGuard<'a, CartState>,
    busy: &'a AtomicBool,
}

impl Drop for MutationGuard<'_> {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::SeqCst);
    }
}
