//! Like/unlike operations gated on the current session.

use chrono::Utc;

use crate::error::Result;
use crate::likes::LikeStore;
use crate::models::{LikeSort, LikedEntry, ProductSummary};
use crate::session::SessionProvider;

// ---------------------------------------------------------------------------
// LikeQuery
// ---------------------------------------------------------------------------

/// Query interface for the current user's liked products.
///
/// Reads and writes require a signed-in user, except [`is_liked`](Self::is_liked)
/// which simply reports `false` for guests.
pub struct LikeQuery<'a> {
    store: &'a dyn LikeStore,
    session: &'a dyn SessionProvider,
}

impl<'a> LikeQuery<'a> {
    pub fn new(store: &'a dyn LikeStore, session: &'a dyn SessionProvider) -> Self {
        Self { store, session }
    }

    /// The user's liked products in the requested order.
    pub fn list(&self, sort: LikeSort) -> Result<Vec<LikedEntry>> {
        let user = self.session.require_user()?;
        let mut entries = self.store.list(&user.uid)?;
        sort.apply(&mut entries);
        Ok(entries)
    }

    pub fn is_liked(&self, name: &str) -> Result<bool> {
        match self.session.current_user() {
            Some(user) => Ok(self.store.get(&user.uid, name)?.is_some()),
            None => Ok(false),
        }
    }

    /// Like a product, recording its headline fields as of now.
    pub fn like(&self, product: &ProductSummary) -> Result<LikedEntry> {
        let user = self.session.require_user()?;
        let entry = LikedEntry::from_product(product, Utc::now());
        self.store.put(&user.uid, &entry)?;
        tracing::debug!(uid = %user.uid, name = %entry.name, "liked");
        Ok(entry)
    }

    /// Remove a like; returns whether the product had been liked.
    pub fn unlike(&self, name: &str) -> Result<bool> {
        let user = self.session.require_user()?;
        let removed = self.store.remove(&user.uid, name)?;
        tracing::debug!(uid = %user.uid, %name, removed, "unliked");
        Ok(removed)
    }

    /// Flip the like state of a product; returns the new state.
    pub fn toggle(&self, product: &ProductSummary) -> Result<bool> {
        if self.is_liked(&product.name)? {
            self.unlike(&product.name)?;
            Ok(false)
        } else {
            self.like(product)?;
            Ok(true)
        }
    }
}
