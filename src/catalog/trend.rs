//! Trend classification from predicted-vs-retail profit.

use crate::config::TREND_THRESHOLD;
use crate::models::{ProductSummary, Trend, TrendDirection};

/// Classify the expected resale trend.
///
/// Profit above `TREND_THRESHOLD` is Rising, below its negation Falling,
/// anything in between Steady. A missing or non-finite price yields
/// `Unknown` rather than letting NaN fall through to Steady.
pub fn classify(retail: Option<f64>, predicted: Option<f64>) -> Trend {
    let profit = match (retail, predicted) {
        (Some(r), Some(p)) if r.is_finite() && p.is_finite() => p - r,
        _ => {
            return Trend {
                direction: TrendDirection::Unknown,
                profit: None,
            }
        }
    };

    let direction = if profit > TREND_THRESHOLD {
        TrendDirection::Rising
    } else if profit < -TREND_THRESHOLD {
        TrendDirection::Falling
    } else {
        TrendDirection::Steady
    };

    Trend {
        direction,
        profit: Some(profit),
    }
}

pub fn classify_product(product: &ProductSummary) -> Trend {
    classify(product.retail_price, product.predicted_price)
}
