//! Shared test fixtures for the SneakPeak SDK integration tests.
//!
//! Provides a small sample dataset (three products, one with stringified
//! prices and one with an unparseable retail price) and helpers that write it
//! to a temp directory and build an offline SDK on top of it.

#![allow(dead_code)]

use sneakpeak_sdk::catalog::{self, Catalog};
use sneakpeak_sdk::session::SessionHandle;
use sneakpeak_sdk::{SaleRecord, SneakPeakSdk};
use std::path::PathBuf;

pub const JORDAN: &str = "Air-Jordan-1-Retro-High-Off-White-Chicago";
pub const YEEZY: &str = "Adidas-Yeezy-Boost-350-V2-Beluga";
pub const DUNK: &str = "Nike-Dunk-Low-Panda";

/// Sample dataset rows, in file order.
pub fn sample_rows() -> Vec<serde_json::Value> {
    vec![
        serde_json::json!({
            "Sneaker Name": JORDAN,
            "Brand": "Off-White",
            "Retail Price": 190,
            "Predicted Price": 1097.5,
            "Release Date": "2017-09-09",
            "Order Date": "2019-01-05",
            "Sale Price": 1500,
            "Shoe Size": 10,
            "SHAP Feature 1": "Days Since Release",
            "SHAP Impact 1": 41.2,
            "SHAP Feature 2": "Shoe Size",
            "SHAP Impact 2": -3.5,
            "SHAP Feature 3": "Brand",
            "SHAP Impact 3": 12
        }),
        serde_json::json!({
            "Sneaker Name": YEEZY,
            "Brand": "Yeezy",
            "Retail Price": "220",
            "Predicted Price": "215.5",
            "Release Date": "2016-11-23",
            "Order Date": "2019-01-06",
            "Sale Price": "340",
            "Shoe Size": "9.5"
        }),
        serde_json::json!({
            "Sneaker Name": JORDAN,
            "Brand": "Off-White",
            "Retail Price": 190,
            "Predicted Price": 1097.5,
            "Release Date": "2017-09-09",
            "Order Date": "2019-02-11",
            "Sale Price": 1620,
            "Shoe Size": 9,
            "SHAP Feature 1": "Days Since Release",
            "SHAP Impact 1": 38.0
        }),
        serde_json::json!({
            "Sneaker Name": DUNK,
            "Brand": "Nike",
            "Retail Price": "TBD",
            "Predicted Price": 160,
            "Release Date": "2021-03-10",
            "Order Date": "2021-04-01",
            "Sale Price": 180,
            "Shoe Size": 11
        }),
        serde_json::json!({
            "Sneaker Name": JORDAN,
            "Brand": "Nike",
            "Retail Price": 999,
            "Predicted Price": 1,
            "Release Date": "2030-01-01",
            "Order Date": "2019-03-20",
            "Sale Price": 1710,
            "Shoe Size": 8.5
        }),
    ]
}

pub fn sample_records() -> Vec<SaleRecord> {
    sample_rows()
        .into_iter()
        .map(|row| serde_json::from_value(row).unwrap())
        .collect()
}

pub fn sample_catalog() -> Catalog {
    catalog::aggregate(&sample_records())
}

/// Write the sample dataset as a JSON array and return its path.
pub fn write_dataset(dir: &std::path::Path) -> PathBuf {
    let path = dir.join("predicted_sneaker_prices.json");
    std::fs::write(&path, serde_json::to_string(&sample_rows()).unwrap()).unwrap();
    path
}

/// Offline SDK reading the sample dataset from a temp directory.
///
/// The caller must keep the returned `TempDir` alive for the duration of
/// the test so the dataset file and cache directory are not deleted.
pub fn setup_sample_sdk(session: SessionHandle) -> (SneakPeakSdk, tempfile::TempDir) {
    let tmp_dir = tempfile::tempdir().unwrap();
    let dataset = write_dataset(tmp_dir.path());
    let sdk = SneakPeakSdk::builder()
        .cache_dir(tmp_dir.path().join("cache"))
        .offline(true)
        .dataset_path(dataset)
        .session(session)
        .build()
        .unwrap();
    (sdk, tmp_dir)
}
