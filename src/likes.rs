//! Per-user persistence of liked products.
//!
//! Entries are keyed by (user id, product name). Writes are upserts, so a
//! later `put` for the same key replaces the earlier one.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::config::LIKES_TABLE;
use crate::connection::Connection;
use crate::error::Result;
use crate::models::LikedEntry;
use crate::sql_builder::SqlBuilder;

/// Storage backend for liked products.
pub trait LikeStore {
    /// All entries for a user, in no particular order.
    fn list(&self, user_id: &str) -> Result<Vec<LikedEntry>>;

    fn get(&self, user_id: &str, name: &str) -> Result<Option<LikedEntry>>;

    /// Insert or replace the entry keyed by `entry.name`.
    fn put(&self, user_id: &str, entry: &LikedEntry) -> Result<()>;

    /// Delete an entry; returns whether one existed.
    fn remove(&self, user_id: &str, name: &str) -> Result<bool>;
}

// ---------------------------------------------------------------------------
// DuckDB-backed store
// ---------------------------------------------------------------------------

const ENTRY_COLUMNS: &[&str] = &[
    "name",
    "brand",
    "retail_price",
    "predicted_price",
    "release_date",
    "liked_at",
];

impl LikeStore for Connection {
    fn list(&self, user_id: &str) -> Result<Vec<LikedEntry>> {
        let (sql, params) = SqlBuilder::new(LIKES_TABLE)
            .select(ENTRY_COLUMNS)
            .where_eq("user_id", user_id)
            .order_by(&["liked_at DESC", "name ASC"])
            .build();
        self.execute_into(&sql, &params)
    }

    fn get(&self, user_id: &str, name: &str) -> Result<Option<LikedEntry>> {
        let (sql, params) = SqlBuilder::new(LIKES_TABLE)
            .select(ENTRY_COLUMNS)
            .where_eq("user_id", user_id)
            .where_eq("name", name)
            .limit(1)
            .build();
        Ok(self.execute_into(&sql, &params)?.into_iter().next())
    }

    fn put(&self, user_id: &str, entry: &LikedEntry) -> Result<()> {
        let liked_at = entry
            .liked_at
            .to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        self.execute_statement(
            &format!(
                "INSERT OR REPLACE INTO {LIKES_TABLE} \
                 (user_id, name, brand, retail_price, predicted_price, release_date, liked_at) \
                 VALUES (?, ?, ?, ?, ?, ?, ?)"
            ),
            &[
                &user_id,
                &entry.name,
                &entry.brand,
                &entry.retail_price,
                &entry.predicted_price,
                &entry.release_date,
                &liked_at,
            ],
        )?;
        Ok(())
    }

    fn remove(&self, user_id: &str, name: &str) -> Result<bool> {
        let removed = self.execute_statement(
            &format!("DELETE FROM {LIKES_TABLE} WHERE user_id = ? AND name = ?"),
            &[&user_id, &name],
        )?;
        Ok(removed > 0)
    }
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// Process-local store, useful for tests and guest-side previews.
#[derive(Debug, Default)]
pub struct MemoryLikeStore {
    entries: RefCell<HashMap<String, HashMap<String, LikedEntry>>>,
}

impl MemoryLikeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LikeStore for MemoryLikeStore {
    fn list(&self, user_id: &str) -> Result<Vec<LikedEntry>> {
        Ok(self
            .entries
            .borrow()
            .get(user_id)
            .map(|m| m.values().cloned().collect())
            .unwrap_or_default())
    }

    fn get(&self, user_id: &str, name: &str) -> Result<Option<LikedEntry>> {
        Ok(self
            .entries
            .borrow()
            .get(user_id)
            .and_then(|m| m.get(name))
            .cloned())
    }

    fn put(&self, user_id: &str, entry: &LikedEntry) -> Result<()> {
        self.entries
            .borrow_mut()
            .entry(user_id.to_string())
            .or_default()
            .insert(entry.name.clone(), entry.clone());
        Ok(())
    }

    fn remove(&self, user_id: &str, name: &str) -> Result<bool> {
        Ok(self
            .entries
            .borrow_mut()
            .get_mut(user_id)
            .and_then(|m| m.remove(name))
            .is_some())
    }
}
