use serde::{Deserialize, Serialize};

use super::product::ProductSummary;

// ---------------------------------------------------------------------------
// TrendDirection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Rising,
    Falling,
    Steady,
    /// Retail or predicted price could not be read as a number.
    Unknown,
}

impl TrendDirection {
    pub fn label(&self) -> &'static str {
        match self {
            TrendDirection::Rising => "Rising",
            TrendDirection::Falling => "Falling",
            TrendDirection::Steady => "Steady",
            TrendDirection::Unknown => "Unknown",
        }
    }

    /// Icon name used by the mobile client for this direction.
    pub fn icon(&self) -> &'static str {
        match self {
            TrendDirection::Rising => "trending-up",
            TrendDirection::Falling => "trending-down",
            TrendDirection::Steady => "remove",
            TrendDirection::Unknown => "help-circle-outline",
        }
    }
}

impl std::fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Trend — Classified direction plus signed profit
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    pub direction: TrendDirection,
    /// `None` exactly when `direction` is `Unknown`.
    pub profit: Option<f64>,
}

impl Trend {
    /// Signed profit with two decimals, e.g. `"+12.34"` or `"-8.00"`.
    pub fn profit_label(&self) -> String {
        match self.profit {
            Some(p) if p >= 0.0 => format!("+{:.2}", p.abs()),
            Some(p) => format!("-{:.2}", p.abs()),
            None => "N/A".to_string(),
        }
    }

    /// Signed profit as currency, e.g. `"+$12.34"` or `"-$8.00"`.
    pub fn profit_currency(&self) -> String {
        match self.profit {
            Some(p) if p >= 0.0 => format!("+${:.2}", p.abs()),
            Some(p) => format!("-${:.2}", p.abs()),
            None => "N/A".to_string(),
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.direction, self.profit_label())
    }
}

// ---------------------------------------------------------------------------
// TrendingItem — Home screen card
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingItem {
    pub product: ProductSummary,
    pub trend: Trend,
}
