//! Dataset location, download and local file cache.
//!
//! The sneaker dataset is a single JSON array (optionally gzip-compressed).
//! It is read from an explicit path when one is configured, otherwise from
//! the cache directory, downloading it from the configured URL when missing
//! or stale.

use crate::config;
use crate::error::{Result, SneakPeakError};
use crate::models::SaleRecord;
use flate2::read::GzDecoder;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Accepted top-level shapes of the dataset file.
#[derive(Deserialize)]
#[serde(untagged)]
enum DatasetFile {
    Records(Vec<SaleRecord>),
    Wrapped { data: Vec<SaleRecord> },
}

/// Locates, downloads and caches the sneaker dataset.
pub struct CacheManager {
    /// Directory where cached files are stored.
    pub cache_dir: PathBuf,
    /// If true, never download (use cached or explicit files only).
    pub offline: bool,
    /// Remote location of the dataset, if any.
    pub dataset_url: Option<String>,
    /// Explicit dataset file; bypasses the cache entirely when set.
    pub dataset_path: Option<PathBuf>,
    timeout: Duration,
    client: Option<Client>,
    remote_ver: Option<String>,
}

impl CacheManager {
    /// Create a new cache manager.
    ///
    /// If `cache_dir` is `None`, uses the platform-appropriate default cache directory.
    /// Creates the cache directory if it does not exist. The dataset URL
    /// defaults to the `SNEAKPEAK_DATASET_URL` environment variable.
    pub fn new(cache_dir: Option<PathBuf>, offline: bool, timeout: Duration) -> Result<Self> {
        let dir = cache_dir.unwrap_or_else(config::default_cache_dir);
        fs::create_dir_all(&dir)?;
        Ok(Self {
            cache_dir: dir,
            offline,
            dataset_url: config::dataset_url_from_env(),
            dataset_path: None,
            timeout,
            client: None,
            remote_ver: None,
        })
    }

    /// Lazy HTTP client, created on first use.
    pub fn client(&mut self) -> Result<&Client> {
        if self.client.is_none() {
            let client = Client::builder()
                .timeout(self.timeout)
                .redirect(reqwest::redirect::Policy::limited(10))
                .build()?;
            self.client = Some(client);
        }
        self.client
            .as_ref()
            .ok_or_else(|| SneakPeakError::InvalidArgument("HTTP client unavailable".into()))
    }

    /// Read the locally cached version string from `version.txt`.
    fn local_version(&self) -> Option<String> {
        let version_file = self.cache_dir.join(config::VERSION_FILE);
        fs::read_to_string(&version_file)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    fn save_version(&self, version: &str) {
        let version_file = self.cache_dir.join(config::VERSION_FILE);
        if let Err(e) = fs::write(&version_file, version) {
            tracing::warn!(path = %version_file.display(), "failed to save dataset version: {e}");
        }
    }

    /// Fetch the remote dataset version (its `ETag`, else `Last-Modified`).
    ///
    /// Returns `None` if offline, no URL is configured, the server sends
    /// neither header, answers with a non-success status, or is unreachable.
    /// Cached after the first successful call until [`forget_remote_version`].
    ///
    /// [`forget_remote_version`]: Self::forget_remote_version
    pub fn remote_version(&mut self) -> Result<Option<String>> {
        if self.remote_ver.is_some() {
            return Ok(self.remote_ver.clone());
        }
        if self.offline {
            return Ok(None);
        }
        let Some(url) = self.dataset_url.clone() else {
            return Ok(None);
        };
        let client = self.client()?.clone();
        match client.head(&url).send() {
            Ok(resp) if !resp.status().is_success() => {
                tracing::warn!(%url, status = %resp.status(), "dataset version check rejected");
                Ok(None)
            }
            Ok(resp) => {
                let headers = resp.headers();
                let version = headers
                    .get(reqwest::header::ETAG)
                    .or_else(|| headers.get(reqwest::header::LAST_MODIFIED))
                    .and_then(|v| v.to_str().ok())
                    .map(|s| s.to_string());
                self.remote_ver = version.clone();
                Ok(version)
            }
            Err(e) => {
                tracing::warn!(%url, "failed to check dataset version: {e}");
                Ok(None)
            }
        }
    }

    /// Drop the memoized remote version so the next check asks the server again.
    pub fn forget_remote_version(&mut self) {
        self.remote_ver = None;
    }

    /// Check if the cached dataset is out of date.
    ///
    /// Returns `true` if nothing is cached or the remote version differs.
    /// Returns `false` if up to date or the remote cannot be checked.
    pub fn is_stale(&mut self) -> Result<bool> {
        if self.cached_dataset().is_none() {
            return Ok(true);
        }
        match self.local_version() {
            None => Ok(self.remote_version()?.is_some()),
            Some(local_ver) => match self.remote_version()? {
                None => Ok(false),
                Some(remote_ver) => Ok(local_ver != remote_ver),
            },
        }
    }

    /// The dataset file currently in the cache directory, if any.
    pub fn cached_dataset(&self) -> Option<PathBuf> {
        [config::DATASET_FILE, config::DATASET_GZ_FILE]
            .iter()
            .map(|name| self.cache_dir.join(name))
            .find(|p| p.exists())
    }

    /// Download the dataset into `dest`.
    ///
    /// Downloads to a temp file first and renames on success, so an
    /// interrupted download never leaves a corrupt partial file behind.
    fn download_dataset(&mut self, url: &str, dest: &Path) -> Result<()> {
        tracing::info!(%url, "downloading sneaker dataset");

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp_dest = dest.with_extension("tmp");

        let client = self.client()?.clone();
        let result = (|| -> Result<()> {
            let resp = client.get(url).send()?.error_for_status()?;
            let bytes = resp.bytes()?;
            fs::write(&tmp_dest, &bytes)?;
            fs::rename(&tmp_dest, dest)?;
            Ok(())
        })();

        if result.is_err() {
            let _ = fs::remove_file(&tmp_dest);
        }

        result
    }

    /// Ensure a dataset file is available locally and return its path.
    pub fn ensure_dataset(&mut self) -> Result<PathBuf> {
        if let Some(path) = &self.dataset_path {
            if path.exists() {
                return Ok(path.clone());
            }
            return Err(SneakPeakError::NotFound(format!(
                "Dataset file {} does not exist",
                path.display()
            )));
        }

        let cached = self.cached_dataset();
        let url = match (&cached, self.dataset_url.clone()) {
            (Some(path), _) if self.offline => return Ok(path.clone()),
            (Some(path), None) => return Ok(path.clone()),
            (None, _) if self.offline => {
                return Err(SneakPeakError::NotFound(
                    "Dataset not cached and offline mode is enabled".into(),
                ))
            }
            (None, None) => {
                return Err(SneakPeakError::NotFound(format!(
                    "Dataset not cached and no dataset URL configured (set {})",
                    config::DATASET_URL_ENV
                )))
            }
            (_, Some(url)) => url,
        };

        if let Some(path) = &cached {
            if !self.is_stale()? {
                return Ok(path.clone());
            }
        }

        let filename = if url.ends_with(".gz") {
            config::DATASET_GZ_FILE
        } else {
            config::DATASET_FILE
        };
        let local_path = self.cache_dir.join(filename);
        self.download_dataset(&url, &local_path)?;
        // Drop a cached copy in the other encoding so it cannot shadow the new one.
        if let Some(old) = cached.filter(|p| p != &local_path) {
            let _ = fs::remove_file(old);
        }
        if let Ok(Some(version)) = self.remote_version() {
            self.save_version(&version);
        }

        Ok(local_path)
    }

    /// Load and parse the dataset (handles `.gz` transparently).
    ///
    /// If a cached copy is corrupt (truncated download, disk error) it is
    /// deleted so the next call re-downloads. An explicit dataset path is
    /// never deleted.
    pub fn load_records(&mut self) -> Result<Vec<SaleRecord>> {
        let path = self.ensure_dataset()?;

        let contents = read_maybe_gz(&path)?;
        match serde_json::from_str::<DatasetFile>(&contents) {
            Ok(DatasetFile::Records(records)) | Ok(DatasetFile::Wrapped { data: records }) => {
                tracing::debug!(path = %path.display(), records = records.len(), "loaded dataset");
                Ok(records)
            }
            Err(e) if self.dataset_path.is_some() => Err(SneakPeakError::Json(e)),
            Err(e) => {
                tracing::warn!(path = %path.display(), "corrupt cached dataset: {e} -- removing");
                let _ = fs::remove_file(&path);
                Err(SneakPeakError::NotFound(format!(
                    "Cache file '{}' was corrupt and has been removed. \
                     Retry to re-download. Original error: {}",
                    path.file_name()
                        .and_then(|n| n.to_str())
                        .unwrap_or("unknown"),
                    e
                )))
            }
        }
    }

    /// Remove all cached files and recreate the cache directory.
    pub fn clear(&mut self) -> Result<()> {
        if self.cache_dir.exists() {
            fs::remove_dir_all(&self.cache_dir)?;
            fs::create_dir_all(&self.cache_dir)?;
        }
        self.remote_ver = None;
        Ok(())
    }

    /// Close the HTTP client, if open.
    pub fn close(&mut self) {
        self.client = None;
    }
}

fn read_maybe_gz(path: &Path) -> Result<String> {
    let mut contents = String::new();
    if path.extension().and_then(|e| e.to_str()) == Some("gz") {
        let file = fs::File::open(path)?;
        let mut decoder = BufReader::new(GzDecoder::new(BufReader::new(file)));
        decoder.read_to_string(&mut contents)?;
    } else {
        contents = fs::read_to_string(path)?;
    }
    Ok(contents)
}
