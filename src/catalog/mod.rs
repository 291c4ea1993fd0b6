//! Pure, in-memory catalog operations over an already-loaded dataset.
//!
//! Nothing here performs I/O or holds shared state, so every function can be
//! called repeatedly and from any thread.

pub mod aggregate;
pub mod detail;
pub mod downsample;
pub mod search;
pub mod trend;

pub use aggregate::{aggregate, Catalog};
pub use detail::SneakerDetail;
pub use downsample::{chart_points, downsample, downsample_indices, resolve_point};
pub use search::{display_name, normalize_name, search};
pub use trend::{classify, classify_product};
