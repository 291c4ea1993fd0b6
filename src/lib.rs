//! SneakPeak SDK for Rust.
//!
//! Browse sneaker resale-price predictions from a static dataset: products
//! aggregated from individual sales, name search, a Rising/Falling/Steady
//! trend per product, and a down-sampled price-history chart whose points
//! map back to the sale they came from. Liked products are stored per user
//! in DuckDB.
//!
//! # Quick start
//!
//! ```no_run
//! use sneakpeak_sdk::{SneakPeakSdk, User};
//! use sneakpeak_sdk::session::SessionHandle;
//!
//! let sdk = SneakPeakSdk::builder()
//!     .dataset_path("assets/predicted_sneaker_prices.json")
//!     .session(SessionHandle::signed_in(User::new("uid-1")))
//!     .build()
//!     .unwrap();
//!
//! // Search and open a product
//! let hits = sdk.catalog().search("jordan").unwrap();
//! let detail = sdk.detail(hits[0].clone());
//! let first_sale = detail.select_at(0);
//!
//! // Like it
//! sdk.likes().like(detail.product()).unwrap();
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod connection;
pub mod error;
pub mod likes;
pub mod models;
pub mod navigation;
pub mod queries;
pub mod session;
pub mod sql_builder;
pub mod theme;

#[cfg(feature = "async")]
pub use async_client::AsyncSneakPeakSdk;
pub use cache::CacheManager;
pub use catalog::{Catalog, SneakerDetail};
pub use connection::Connection;
pub use error::{Result, SneakPeakError};
pub use likes::{LikeStore, MemoryLikeStore};
pub use models::*;
pub use session::{SessionHandle, SessionProvider, User};
pub use sql_builder::SqlBuilder;

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ---------------------------------------------------------------------------
// SneakPeakSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`SneakPeakSdk`] instance.
///
/// Use [`SneakPeakSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](SneakPeakSdkBuilder::build) to create the SDK.
pub struct SneakPeakSdkBuilder {
    cache_dir: Option<PathBuf>,
    offline: bool,
    timeout: Duration,
    dataset_url: Option<String>,
    dataset_path: Option<PathBuf>,
    likes_db: Option<PathBuf>,
    session: SessionHandle,
}

impl Default for SneakPeakSdkBuilder {
    fn default() -> Self {
        Self {
            cache_dir: None,
            offline: false,
            timeout: Duration::from_secs(120),
            dataset_url: None,
            dataset_path: None,
            likes_db: None,
            session: SessionHandle::guest(),
        }
    }
}

impl SneakPeakSdkBuilder {
    /// Set a custom cache directory.
    ///
    /// If not set, the platform-appropriate default cache directory is used
    /// (e.g. `~/.cache/sneakpeak-sdk` on Linux).
    pub fn cache_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.cache_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Enable or disable offline mode.
    ///
    /// When offline, the SDK never downloads the dataset and only uses a
    /// cached copy or an explicit [`dataset_path`](Self::dataset_path).
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// Set the HTTP request timeout for dataset downloads. Defaults to 120 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Remote URL of the dataset (`.json` or `.json.gz`).
    ///
    /// Overrides the `SNEAKPEAK_DATASET_URL` environment variable.
    pub fn dataset_url(mut self, url: impl Into<String>) -> Self {
        self.dataset_url = Some(url.into());
        self
    }

    /// Read the dataset from this file instead of the cache.
    pub fn dataset_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.dataset_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Persist likes in a DuckDB file. Without this, likes live in memory.
    pub fn likes_db<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.likes_db = Some(path.as_ref().to_path_buf());
        self
    }

    /// Session used to gate like operations. Defaults to a guest session.
    pub fn session(mut self, session: SessionHandle) -> Self {
        self.session = session;
        self
    }

    /// Build the SDK, initializing the cache and DuckDB connection.
    ///
    /// Does **not** load the dataset; it is read lazily on first query.
    pub fn build(self) -> Result<SneakPeakSdk> {
        let mut cache = CacheManager::new(self.cache_dir, self.offline, self.timeout)?;
        if self.dataset_url.is_some() {
            cache.dataset_url = self.dataset_url;
        }
        cache.dataset_path = self.dataset_path;

        let conn = match self.likes_db {
            Some(path) => Connection::open(path, cache)?,
            None => Connection::new(cache)?,
        };
        Ok(SneakPeakSdk {
            conn,
            session: self.session,
        })
    }
}

// ---------------------------------------------------------------------------
// SneakPeakSdk
// ---------------------------------------------------------------------------

/// The main entry point for the SneakPeak SDK.
///
/// Wraps a [`Connection`] (which owns the [`CacheManager`] and DuckDB database)
/// plus the session, and exposes query interfaces as lightweight borrowing
/// wrappers.
pub struct SneakPeakSdk {
    conn: Connection,
    session: SessionHandle,
}

impl SneakPeakSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> SneakPeakSdkBuilder {
        SneakPeakSdkBuilder::default()
    }

    /// Access the catalog query interface (products, search, trending).
    pub fn catalog(&self) -> queries::CatalogQuery<'_> {
        queries::CatalogQuery::new(&self.conn)
    }

    /// Access the liked-products interface for the current session.
    pub fn likes(&self) -> queries::LikeQuery<'_> {
        queries::LikeQuery::new(&self.conn, &self.session)
    }

    /// Build the detail view (trend and chart) for a product.
    pub fn detail(&self, product: ProductSummary) -> SneakerDetail {
        SneakerDetail::new(product)
    }

    /// The session handle; clones share state with the SDK.
    pub fn session(&self) -> &SessionHandle {
        &self.session
    }

    /// Check for a newer dataset and clear the cache if stale.
    ///
    /// Returns `true` if the cached dataset was stale and removed (the next
    /// query downloads it again), or `false` if already up to date.
    pub fn refresh(&self) -> Result<bool> {
        let mut cache = self.conn.cache.borrow_mut();
        if cache.dataset_path.is_some() {
            return Ok(false);
        }
        cache.forget_remote_version();
        let stale = cache.is_stale()?;
        if stale {
            cache.clear()?;
            tracing::info!("sneaker dataset was stale; cache cleared");
        }
        Ok(stale)
    }

    /// Consume the SDK and release all resources.
    pub fn close(self) {
        self.conn.cache.borrow_mut().close();
        drop(self);
    }

    /// Return a reference to the underlying [`Connection`] for advanced usage.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for SneakPeakSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cache = self.conn.cache.borrow();
        write!(
            f,
            "SneakPeakSdk(cache_dir={}, offline={}, signed_in={})",
            cache.cache_dir.display(),
            cache.offline,
            self.session.current_user().is_some()
        )
    }
}
