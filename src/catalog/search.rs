//! Name search over aggregated products.

use crate::models::ProductSummary;

/// Lower-case and turn hyphens into spaces: `"Air-Jordan-1"` -> `"air jordan 1"`.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase().replace('-', " ")
}

/// Hyphens become spaces, case is kept: `"Air-Jordan-1"` -> `"Air Jordan 1"`.
pub fn display_name(name: &str) -> String {
    name.replace('-', " ")
}

/// Products whose normalized name contains the normalized query.
///
/// A blank query matches nothing; callers showing a default view for an
/// empty search box should check the raw input first.
pub fn search<'a>(products: &'a [ProductSummary], query: &str) -> Vec<&'a ProductSummary> {
    let needle = normalize_name(query.trim());
    if needle.trim().is_empty() {
        return Vec::new();
    }

    products
        .iter()
        .filter(|p| normalize_name(&p.name).contains(&needle))
        .collect()
}
