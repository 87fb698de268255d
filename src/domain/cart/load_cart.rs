//! Load Cart slice — session transitions between guest and authenticated.

use super::{CartEngine, CartError, OwnerMode, UserId};

impl CartEngine {
    /// Switches the cart to `Authenticated(user_id)` and replaces its lines
    /// wholesale with the user's persisted cart.
    ///
    /// Any guest lines are discarded, never merged. A user who filled a cart
    /// while signed out loses it on sign-in; this mirrors the hosted
    /// backend's behavior and is deliberately left uncorrected here.
    pub async fn load_cart(&self, user_id: UserId) -> Result<(), CartError> {
        let mut guard = self.begin_mutation().await;
        let lines = self.store().list_cart_lines(user_id).await?;
        tracing::debug!(%user_id, line_count = lines.len(), "loaded persisted cart");
        guard
            .state
            .replace_lines(OwnerMode::Authenticated(user_id), lines);
        // The durable guest snapshot is emptied along with the in-memory
        // guest lines, so a stale cart cannot resurrect after sign-out.
        self.save_guest_snapshot(&[]);
        Ok(())
    }

    /// Asks the data-access collaborator for the current session user and
    /// loads that user's cart, or stays in guest mode for an anonymous
    /// session. Called once at session start.
    pub async fn resume_session(&self) -> Result<(), CartError> {
        match self.store().current_session_user().await? {
            Some(user_id) => self.load_cart(user_id).await,
            None => Ok(()),
        }
    }

    /// Resets to an empty guest cart. The reverse of `load_cart`; nothing is
    /// deleted server-side.
    pub async fn sign_out(&self) {
        let mut guard = self.begin_mutation().await;
        guard.state.reset_to_guest();
        self.save_guest_snapshot(&[]);
    }
}
