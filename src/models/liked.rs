use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::product::ProductSummary;

// ---------------------------------------------------------------------------
// LikedEntry — A product a user has liked
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikedEntry {
    pub name: String,
    pub brand: String,
    pub retail_price: Option<f64>,
    pub predicted_price: Option<f64>,
    pub release_date: String,
    pub liked_at: DateTime<Utc>,
}

impl LikedEntry {
    /// Snapshot a product's headline fields at `liked_at`.
    pub fn from_product(product: &ProductSummary, liked_at: DateTime<Utc>) -> Self {
        Self {
            name: product.name.clone(),
            brand: product.brand.clone(),
            retail_price: product.retail_price,
            predicted_price: product.predicted_price,
            release_date: product.release_date.clone(),
            liked_at,
        }
    }

    pub fn profit(&self) -> Option<f64> {
        match (self.retail_price, self.predicted_price) {
            (Some(r), Some(p)) => Some(p - r),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// LikeSort — Ordering of the liked list
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LikeSort {
    /// Most recently liked first.
    #[default]
    Newest,
    /// Highest predicted profit first; unknown profit last.
    Profit,
}

impl LikeSort {
    pub fn toggled(self) -> Self {
        match self {
            LikeSort::Newest => LikeSort::Profit,
            LikeSort::Profit => LikeSort::Newest,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LikeSort::Newest => "Sort: Newest",
            LikeSort::Profit => "Sort: Profit",
        }
    }

    /// Sort `entries` in place according to this mode.
    pub fn apply(self, entries: &mut [LikedEntry]) {
        match self {
            LikeSort::Newest => entries.sort_by(|a, b| {
                b.liked_at
                    .cmp(&a.liked_at)
                    .then_with(|| a.name.cmp(&b.name))
            }),
            LikeSort::Profit => entries.sort_by(|a, b| match (a.profit(), b.profit()) {
                (Some(pa), Some(pb)) => pb.total_cmp(&pa),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => std::cmp::Ordering::Equal,
            }),
        }
    }
}
