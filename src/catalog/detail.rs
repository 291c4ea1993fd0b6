//! Detail view model for a single product.

use crate::models::{ChartPoint, ProductSummary, SaleDetail, Trend};

use super::downsample::{self, DEFAULT_MAX_POINTS};
use super::trend;

/// Trend, chart and point selection for one product.
///
/// Chart points are computed once on construction and dropped with the
/// detail when the viewer navigates away.
#[derive(Debug, Clone, PartialEq)]
pub struct SneakerDetail {
    product: ProductSummary,
    trend: Trend,
    chart: Vec<ChartPoint>,
}

impl SneakerDetail {
    pub fn new(product: ProductSummary) -> Self {
        Self::with_max_points(product, DEFAULT_MAX_POINTS)
    }

    pub fn with_max_points(product: ProductSummary, max_points: usize) -> Self {
        let trend = trend::classify_product(&product);
        let chart = downsample::chart_points(&product.sales, max_points);
        Self {
            product,
            trend,
            chart,
        }
    }

    pub fn product(&self) -> &ProductSummary {
        &self.product
    }

    pub fn trend(&self) -> Trend {
        self.trend
    }

    pub fn chart(&self) -> &[ChartPoint] {
        &self.chart
    }

    /// Whether there is any sale history to plot.
    pub fn has_history(&self) -> bool {
        !self.product.sales.is_empty()
    }

    /// Details of the sale behind a tapped chart point.
    pub fn select(&self, point: &ChartPoint) -> Option<SaleDetail> {
        downsample::resolve_point(&self.product.sales, point).map(SaleDetail::from)
    }

    /// Like [`select`](Self::select), addressing the point by its chart position.
    pub fn select_at(&self, chart_position: usize) -> Option<SaleDetail> {
        self.chart.get(chart_position).and_then(|p| self.select(p))
    }
}
