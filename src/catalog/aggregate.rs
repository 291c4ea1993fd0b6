//! Grouping of flat sale records into per-product summaries.

use std::collections::HashMap;

use crate::models::{ExplanatoryFeature, ProductSummary, SaleEvent, SaleRecord};

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Products in first-seen order, addressable by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<ProductSummary>,
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn products(&self) -> &[ProductSummary] {
        &self.products
    }

    pub fn into_products(self) -> Vec<ProductSummary> {
        self.products
    }

    pub fn get(&self, name: &str) -> Option<&ProductSummary> {
        self.index.get(name).map(|&i| &self.products[i])
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProductSummary> {
        self.products.iter()
    }

    /// Total number of sale events across all products.
    pub fn sale_count(&self) -> usize {
        self.products.iter().map(|p| p.sales.len()).sum()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ProductSummary;
    type IntoIter = std::slice::Iter<'a, ProductSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

// ---------------------------------------------------------------------------
// aggregate
// ---------------------------------------------------------------------------

/// Group records by product name.
///
/// Distinct names keep their first-seen order and each product's sales keep
/// the relative order of the input. Headline fields (brand, retail,
/// predicted, release) come from the first record for a name; later records
/// that disagree are ignored. Records with an empty name are grouped under
/// the empty name like any other.
pub fn aggregate(records: &[SaleRecord]) -> Catalog {
    let mut catalog = Catalog::default();

    for record in records {
        let pos = match catalog.index.get(&record.product_name) {
            Some(&pos) => {
                let existing = &catalog.products[pos];
                if conflicts(existing, record) {
                    tracing::debug!(
                        name = %record.product_name,
                        "ignoring conflicting headline fields; keeping first record"
                    );
                }
                pos
            }
            None => {
                catalog.products.push(ProductSummary {
                    name: record.product_name.clone(),
                    brand: record.brand.clone(),
                    retail_price: record.retail_price,
                    predicted_price: record.predicted_price,
                    release_date: record.release_date.clone(),
                    sales: Vec::new(),
                });
                let pos = catalog.products.len() - 1;
                catalog.index.insert(record.product_name.clone(), pos);
                pos
            }
        };

        catalog.products[pos].sales.push(sale_event(record));
    }

    catalog
}

fn sale_event(record: &SaleRecord) -> SaleEvent {
    SaleEvent {
        date: record.order_date.clone(),
        price: record.sale_price,
        size: record.shoe_size.clone(),
        features: record
            .feature_pairs()
            .into_iter()
            .map(|(feature, impact)| ExplanatoryFeature {
                feature: feature.to_string(),
                impact,
            })
            .collect(),
    }
}

fn conflicts(existing: &ProductSummary, record: &SaleRecord) -> bool {
    existing.brand != record.brand
        || existing.retail_price != record.retail_price
        || existing.predicted_price != record.predicted_price
        || existing.release_date != record.release_date
}
