use serde::{Deserialize, Serialize};

use super::product::{ExplanatoryFeature, SaleEvent};

/// Feature name shown when a sale carries no explanatory features.
pub const NO_FEATURE_PLACEHOLDER: &str = "No SHAP data";

// ---------------------------------------------------------------------------
// ChartPoint — Downsampled, chart-ready projection of a SaleEvent
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub value: f64,
    pub label: String,
    /// Position of the source event in the full, pre-downsample series.
    pub original_index: usize,
}

// ---------------------------------------------------------------------------
// SaleDetail — What the detail card shows after a point is tapped
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleDetail {
    pub date: String,
    pub price: Option<f64>,
    pub size: String,
    pub features: Vec<ExplanatoryFeature>,
}

impl From<&SaleEvent> for SaleDetail {
    fn from(event: &SaleEvent) -> Self {
        let features = if event.features.is_empty() {
            vec![ExplanatoryFeature {
                feature: NO_FEATURE_PLACEHOLDER.to_string(),
                impact: None,
            }]
        } else {
            event.features.iter().take(3).cloned().collect()
        };
        Self {
            date: event.date.clone(),
            price: event.price,
            size: event.size.clone(),
            features,
        }
    }
}
