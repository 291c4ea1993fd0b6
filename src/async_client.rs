//! Async wrapper around [`SneakPeakSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free.
//! Dataset downloads and DuckDB writes block, so they must not run on the
//! event loop directly.
//!
//! # Example
//!
//! ```no_run
//! use sneakpeak_sdk::AsyncSneakPeakSdk;
//!
//! #[tokio::main]
//! async fn main() {
//!     let sdk = AsyncSneakPeakSdk::builder().build().await.unwrap();
//!
//!     // Run any sync SDK method via closure
//!     let trending = sdk.run(|s| s.catalog().trending(None)).await.unwrap();
//!
//!     // Convenience method for search
//!     let hits = sdk.search("dunk").await.unwrap();
//! }
//! ```

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::{Result, SneakPeakError};
use crate::models::ProductSummary;
use crate::session::SessionHandle;
use crate::SneakPeakSdk;

// ---------------------------------------------------------------------------
// AsyncSneakPeakSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncSneakPeakSdk`] instance.
#[derive(Default)]
pub struct AsyncSneakPeakSdkBuilder {
    cache_dir: Option<PathBuf>,
    offline: bool,
    timeout: Option<Duration>,
    dataset_url: Option<String>,
    dataset_path: Option<PathBuf>,
    likes_db: Option<PathBuf>,
    session: Option<SessionHandle>,
}

impl AsyncSneakPeakSdkBuilder {
    /// Set a custom cache directory.
    pub fn cache_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.cache_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Enable or disable offline mode.
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// Set the HTTP request timeout for dataset downloads.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn dataset_url(mut self, url: impl Into<String>) -> Self {
        self.dataset_url = Some(url.into());
        self
    }

    pub fn dataset_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.dataset_path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn likes_db<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.likes_db = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn session(mut self, session: SessionHandle) -> Self {
        self.session = Some(session);
        self
    }

    /// Build the async SDK, initializing the cache and DuckDB connection.
    ///
    /// Initialization runs on the blocking thread pool so it won't block
    /// the async event loop.
    pub async fn build(self) -> Result<AsyncSneakPeakSdk> {
        tokio::task::spawn_blocking(move || {
            let mut builder = SneakPeakSdk::builder().offline(self.offline);
            if let Some(dir) = self.cache_dir {
                builder = builder.cache_dir(dir);
            }
            if let Some(timeout) = self.timeout {
                builder = builder.timeout(timeout);
            }
            if let Some(url) = self.dataset_url {
                builder = builder.dataset_url(url);
            }
            if let Some(path) = self.dataset_path {
                builder = builder.dataset_path(path);
            }
            if let Some(path) = self.likes_db {
                builder = builder.likes_db(path);
            }
            if let Some(session) = self.session {
                builder = builder.session(session);
            }
            let sdk = builder.build()?;
            Ok(AsyncSneakPeakSdk {
                inner: Arc::new(Mutex::new(sdk)),
            })
        })
        .await
        .map_err(|e| SneakPeakError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncSneakPeakSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`SneakPeakSdk`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The underlying [`SneakPeakSdk`] is
/// protected by a [`Mutex`] since it uses `RefCell` internally.
#[derive(Clone)]
pub struct AsyncSneakPeakSdk {
    inner: Arc<Mutex<SneakPeakSdk>>,
}

impl AsyncSneakPeakSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncSneakPeakSdkBuilder {
        AsyncSneakPeakSdkBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// The closure receives an `&SneakPeakSdk` reference and should return
    /// a `Result<T>`.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&SneakPeakSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = sdk
                .lock()
                .map_err(|_| SneakPeakError::InvalidArgument("SDK lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| SneakPeakError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Search products by name asynchronously.
    pub async fn search(&self, query: &str) -> Result<Vec<ProductSummary>> {
        let query = query.to_string();
        self.run(move |s| s.catalog().search(&query)).await
    }

    /// Check for a newer dataset and clear the cache if stale.
    pub async fn refresh(&self) -> Result<bool> {
        self.run(|s| s.refresh()).await
    }
}
