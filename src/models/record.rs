use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// SaleRecord — One row of the predicted sneaker price dataset
// ---------------------------------------------------------------------------

/// A single historical sale as shipped in the static dataset.
///
/// Prices arrive either as JSON numbers or as stringified numbers; both are
/// coerced into `f64`. Values that cannot be coerced (or are not finite)
/// become `None` instead of failing the whole dataset load.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SaleRecord {
    #[serde(rename = "Sneaker Name", default, deserialize_with = "de_text")]
    pub product_name: String,
    #[serde(rename = "Brand", default, deserialize_with = "de_text")]
    pub brand: String,
    #[serde(rename = "Retail Price", default, deserialize_with = "de_price")]
    pub retail_price: Option<f64>,
    #[serde(rename = "Predicted Price", default, deserialize_with = "de_price")]
    pub predicted_price: Option<f64>,
    #[serde(rename = "Release Date", default, deserialize_with = "de_text")]
    pub release_date: String,
    #[serde(rename = "Order Date", default, deserialize_with = "de_text")]
    pub order_date: String,
    #[serde(rename = "Sale Price", default, deserialize_with = "de_price")]
    pub sale_price: Option<f64>,
    #[serde(rename = "Shoe Size", default, deserialize_with = "de_text")]
    pub shoe_size: String,
    #[serde(rename = "SHAP Feature 1", default, deserialize_with = "de_opt_text")]
    pub feature_1: Option<String>,
    #[serde(rename = "SHAP Impact 1", default, deserialize_with = "de_price")]
    pub impact_1: Option<f64>,
    #[serde(rename = "SHAP Feature 2", default, deserialize_with = "de_opt_text")]
    pub feature_2: Option<String>,
    #[serde(rename = "SHAP Impact 2", default, deserialize_with = "de_price")]
    pub impact_2: Option<f64>,
    #[serde(rename = "SHAP Feature 3", default, deserialize_with = "de_opt_text")]
    pub feature_3: Option<String>,
    #[serde(rename = "SHAP Impact 3", default, deserialize_with = "de_price")]
    pub impact_3: Option<f64>,
}

impl SaleRecord {
    /// The (feature, impact) pairs that carry a non-empty feature name, in order.
    pub fn feature_pairs(&self) -> Vec<(&str, Option<f64>)> {
        [
            (&self.feature_1, self.impact_1),
            (&self.feature_2, self.impact_2),
            (&self.feature_3, self.impact_3),
        ]
        .into_iter()
        .filter_map(|(name, impact)| {
            name.as_deref()
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(|n| (n, impact))
        })
        .collect()
    }
}

// ---------------------------------------------------------------------------
// Lenient field decoding
// ---------------------------------------------------------------------------

/// Coerce a JSON number or numeric string into a finite `f64`.
pub fn coerce_price(value: &serde_json::Value) -> Option<f64> {
    let parsed = match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|p| p.is_finite())
}

fn de_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(coerce_price(&value))
}

fn value_to_text(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn de_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value_to_text(value).unwrap_or_default())
}

fn de_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value_to_text(value))
}
