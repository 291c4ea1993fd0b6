//! Catalog queries over the sneaker dataset loaded via the cache manager.
//!
//! The dataset is small and static, so every call reloads it and
//! re-aggregates in memory rather than keeping a derived copy around.

use crate::catalog::{self, Catalog, SneakerDetail};
use crate::config::TRENDING_COUNT;
use crate::connection::Connection;
use crate::error::Result;
use crate::models::{ProductSummary, SaleRecord, TrendingItem};

// ---------------------------------------------------------------------------
// CatalogQuery
// ---------------------------------------------------------------------------

/// Query interface for aggregated sneaker products.
pub struct CatalogQuery<'a> {
    conn: &'a Connection,
}

impl<'a> CatalogQuery<'a> {
    /// Create a new `CatalogQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Raw sale records as shipped in the dataset.
    pub fn records(&self) -> Result<Vec<SaleRecord>> {
        self.conn.cache.borrow_mut().load_records()
    }

    /// All products, grouped by name in first-seen order.
    pub fn products(&self) -> Result<Catalog> {
        Ok(catalog::aggregate(&self.records()?))
    }

    /// Look up one product by its exact name.
    pub fn get(&self, name: &str) -> Result<Option<ProductSummary>> {
        Ok(self.products()?.get(name).cloned())
    }

    /// Products whose name contains `query`, ignoring case and hyphens.
    pub fn search(&self, query: &str) -> Result<Vec<ProductSummary>> {
        let catalog = self.products()?;
        Ok(catalog::search(catalog.products(), query)
            .into_iter()
            .cloned()
            .collect())
    }

    /// The first `limit` products with their trend, for the home screen.
    ///
    /// `None` uses the default of four.
    pub fn trending(&self, limit: Option<usize>) -> Result<Vec<TrendingItem>> {
        let limit = limit.unwrap_or(TRENDING_COUNT);
        Ok(self
            .products()?
            .into_products()
            .into_iter()
            .take(limit)
            .map(|product| TrendingItem {
                trend: catalog::classify_product(&product),
                product,
            })
            .collect())
    }

    /// Detail view for one product, if it exists.
    pub fn detail(&self, name: &str) -> Result<Option<SneakerDetail>> {
        Ok(self.get(name)?.map(SneakerDetail::new))
    }

    /// Number of distinct products.
    pub fn count(&self) -> Result<usize> {
        Ok(self.products()?.len())
    }
}
