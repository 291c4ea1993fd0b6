use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ExplanatoryFeature — One SHAP (feature, impact) pair
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplanatoryFeature {
    pub feature: String,
    pub impact: Option<f64>,
}

impl ExplanatoryFeature {
    /// Impact rendered for display, `"N/A"` when unknown.
    pub fn impact_label(&self) -> String {
        match self.impact {
            Some(v) => v.to_string(),
            None => "N/A".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// SaleEvent — One transaction nested under a product
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleEvent {
    pub date: String,
    pub price: Option<f64>,
    pub size: String,
    #[serde(default)]
    pub features: Vec<ExplanatoryFeature>,
}

// ---------------------------------------------------------------------------
// ProductSummary — Aggregated view of all sales of one sneaker
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub name: String,
    pub brand: String,
    pub retail_price: Option<f64>,
    pub predicted_price: Option<f64>,
    pub release_date: String,
    #[serde(default)]
    pub sales: Vec<SaleEvent>,
}

impl ProductSummary {
    /// Predicted minus retail price, when both are known.
    pub fn profit(&self) -> Option<f64> {
        match (self.retail_price, self.predicted_price) {
            (Some(r), Some(p)) => Some(p - r),
            _ => None,
        }
    }
}
