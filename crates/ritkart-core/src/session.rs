//! Signed-in session marker.
//!
//! The storefront gates wishlist mutations behind sign-in; here that gate is
//! a session record in the snapshot store. Authentication itself belongs to
//! the hosted backend; this is only the local marker the CLI checks.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::saved::SnapshotStore;

/// Snapshot key for the session marker.
pub const SESSION_KEY: &str = "ritkart_session";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    /// Unix timestamp (seconds) of sign-in.
    pub signed_in_at: u64,
}

/// Session accessor over a snapshot store.
#[derive(Debug)]
pub struct SessionStore<S: SnapshotStore> {
    store: S,
}

impl<S: SnapshotStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Store a session marker for `email`, replacing any previous session.
    pub fn login(&self, email: &str) -> anyhow::Result<Session> {
        let session = Session {
            email: email.to_string(),
            signed_in_at: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0),
        };
        let bytes = serde_json::to_vec(&session)?;
        self.store.save(SESSION_KEY, &bytes)?;
        Ok(session)
    }

    /// Remove the session marker. Signing out twice is fine.
    pub fn logout(&self) -> anyhow::Result<()> {
        self.store.remove(SESSION_KEY)?;
        Ok(())
    }

    /// The current session, if signed in. A corrupt marker counts as
    /// signed out.
    pub fn current(&self) -> Option<Session> {
        let bytes = self.store.load(SESSION_KEY).ok()??;
        match serde_json::from_slice(&bytes) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!("discarding corrupt session marker: {e}");
                None
            }
        }
    }
}
