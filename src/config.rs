use std::path::PathBuf;

/// File name of the uncompressed dataset inside the cache directory.
pub const DATASET_FILE: &str = "predicted_sneaker_prices.json";
/// File name of the gzip-compressed dataset inside the cache directory.
pub const DATASET_GZ_FILE: &str = "predicted_sneaker_prices.json.gz";
/// Stores the remote ETag / Last-Modified of the cached dataset.
pub const VERSION_FILE: &str = "version.txt";

/// Environment variable consulted when no dataset URL is given to the builder.
pub const DATASET_URL_ENV: &str = "SNEAKPEAK_DATASET_URL";

/// DuckDB table holding liked products.
pub const LIKES_TABLE: &str = "liked_sneakers";

/// Profit (predicted minus retail) beyond which a product counts as
/// Rising, or below the negation of which it counts as Falling.
pub const TREND_THRESHOLD: f64 = 10.0;

/// Maximum number of points plotted on a price-history chart.
pub const DEFAULT_MAX_CHART_POINTS: usize = 7;

/// Number of products shown in the "Trending Now" section.
pub const TRENDING_COUNT: usize = 4;

pub fn default_cache_dir() -> PathBuf {
    if let Some(cache) = dirs::cache_dir() {
        cache.join("sneakpeak-sdk")
    } else {
        PathBuf::from(".sneakpeak-sdk-cache")
    }
}

/// Dataset URL from [`DATASET_URL_ENV`], if set and non-empty.
pub fn dataset_url_from_env() -> Option<String> {
    std::env::var(DATASET_URL_ENV)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
