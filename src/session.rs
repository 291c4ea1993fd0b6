//! Signed-in user state.
//!
//! Identity itself lives with an external auth provider; this module only
//! models what the rest of the SDK needs from it: who is signed in, and
//! whether that is still being determined.

use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SneakPeakError};

/// Display name shown for users who never set one.
pub const DEFAULT_DISPLAY_NAME: &str = "Sneakerhead";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            email: None,
            display_name: None,
            created_at: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn display_name_or_default(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(DEFAULT_DISPLAY_NAME)
    }
}

// ---------------------------------------------------------------------------
// SessionProvider
// ---------------------------------------------------------------------------

/// Source of the current user's identity.
pub trait SessionProvider: Send {
    fn current_user(&self) -> Option<User>;

    fn is_loading(&self) -> bool;

    /// The signed-in user, or an error suitable for gating an action.
    fn require_user(&self) -> Result<User> {
        if self.is_loading() {
            return Err(SneakPeakError::SessionLoading);
        }
        self.current_user()
            .ok_or_else(|| SneakPeakError::LoginRequired("please log in to continue".into()))
    }
}

// ---------------------------------------------------------------------------
// SessionHandle
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
struct SessionState {
    user: Option<User>,
    loading: bool,
}

/// Shared, cloneable session state. Clones observe each other's updates.
#[derive(Debug, Clone, Default)]
pub struct SessionHandle {
    state: Arc<RwLock<SessionState>>,
}

impl SessionHandle {
    pub fn guest() -> Self {
        Self::default()
    }

    pub fn signed_in(user: User) -> Self {
        let handle = Self::default();
        handle.sign_in(user);
        handle
    }

    /// A session whose auth state has not resolved yet.
    pub fn loading() -> Self {
        let handle = Self::default();
        handle.write(|s| s.loading = true);
        handle
    }

    pub fn sign_in(&self, user: User) {
        tracing::info!(uid = %user.uid, "user signed in");
        self.write(|s| {
            s.user = Some(user);
            s.loading = false;
        });
    }

    pub fn sign_out(&self) {
        tracing::info!("user signed out");
        self.write(|s| s.user = None);
    }

    pub fn finish_loading(&self) {
        self.write(|s| s.loading = false);
    }

    /// Change the signed-in user's display name.
    pub fn rename(&self, display_name: &str) -> Result<User> {
        let name = display_name.trim();
        if name.is_empty() {
            return Err(SneakPeakError::InvalidArgument(
                "display name must not be empty".into(),
            ));
        }
        let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let user = guard
            .user
            .as_mut()
            .ok_or_else(|| SneakPeakError::LoginRequired("please log in to rename".into()))?;
        user.display_name = Some(name.to_string());
        Ok(user.clone())
    }

    fn write(&self, f: impl FnOnce(&mut SessionState)) {
        let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard);
    }
}

impl SessionProvider for SessionHandle {
    fn current_user(&self) -> Option<User> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .user
            .clone()
    }

    fn is_loading(&self) -> bool {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .loading
    }
}
