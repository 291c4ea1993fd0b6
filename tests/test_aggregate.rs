//! Record aggregation tests.

mod common;

use sneakpeak_sdk::catalog::aggregate;
use sneakpeak_sdk::SaleRecord;
use std::collections::HashSet;

// ---------------------------------------------------------------------------
// grouping
// ---------------------------------------------------------------------------

#[test]
fn one_summary_per_distinct_name() {
    let records = common::sample_records();
    let catalog = aggregate(&records);

    let distinct: HashSet<&str> = records.iter().map(|r| r.product_name.as_str()).collect();
    assert_eq!(catalog.len(), distinct.len());
    assert_eq!(catalog.sale_count(), records.len());
}

#[test]
fn keeps_first_seen_order_of_names() {
    let catalog = common::sample_catalog();
    let names: Vec<&str> = catalog.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec![common::JORDAN, common::YEEZY, common::DUNK]);
}

#[test]
fn keeps_sale_order_within_product() {
    let catalog = common::sample_catalog();
    let jordan = catalog.get(common::JORDAN).unwrap();
    let dates: Vec<&str> = jordan.sales.iter().map(|s| s.date.as_str()).collect();
    assert_eq!(dates, vec!["2019-01-05", "2019-02-11", "2019-03-20"]);
}

#[test]
fn first_record_wins_headline_fields() {
    let catalog = common::sample_catalog();
    let jordan = catalog.get(common::JORDAN).unwrap();
    assert_eq!(jordan.brand, "Off-White");
    assert_eq!(jordan.retail_price, Some(190.0));
    assert_eq!(jordan.predicted_price, Some(1097.5));
    assert_eq!(jordan.release_date, "2017-09-09");
}

#[test]
fn empty_input_gives_empty_catalog() {
    let catalog = aggregate(&[]);
    assert!(catalog.is_empty());
    assert_eq!(catalog.sale_count(), 0);
}

#[test]
fn missing_name_is_grouped_under_empty_key() {
    let records: Vec<SaleRecord> = vec![
        serde_json::from_value(serde_json::json!({"Brand": "Nike", "Sale Price": 100})).unwrap(),
        serde_json::from_value(serde_json::json!({"Sneaker Name": "", "Sale Price": 120})).unwrap(),
    ];
    let catalog = aggregate(&records);
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.get("").unwrap().sales.len(), 2);
}

#[test]
fn aggregation_is_repeatable() {
    let records = common::sample_records();
    assert_eq!(aggregate(&records), aggregate(&records));
}

// ---------------------------------------------------------------------------
// coercion
// ---------------------------------------------------------------------------

#[test]
fn stringified_prices_are_coerced() {
    let catalog = common::sample_catalog();
    let yeezy = catalog.get(common::YEEZY).unwrap();
    assert_eq!(yeezy.retail_price, Some(220.0));
    assert_eq!(yeezy.predicted_price, Some(215.5));
    assert_eq!(yeezy.sales[0].price, Some(340.0));
    assert_eq!(yeezy.sales[0].size, "9.5");
}

#[test]
fn unparseable_price_becomes_none() {
    let catalog = common::sample_catalog();
    let dunk = catalog.get(common::DUNK).unwrap();
    assert_eq!(dunk.retail_price, None);
    assert_eq!(dunk.predicted_price, Some(160.0));
    assert_eq!(dunk.profit(), None);
}

#[test]
fn numeric_shoe_size_is_kept_as_text() {
    let catalog = common::sample_catalog();
    let jordan = catalog.get(common::JORDAN).unwrap();
    assert_eq!(jordan.sales[0].size, "10");
    assert_eq!(jordan.sales[2].size, "8.5");
}

// ---------------------------------------------------------------------------
// explanatory features
// ---------------------------------------------------------------------------

#[test]
fn features_only_include_named_pairs() {
    let catalog = common::sample_catalog();
    let jordan = catalog.get(common::JORDAN).unwrap();

    assert_eq!(jordan.sales[0].features.len(), 3);
    assert_eq!(jordan.sales[0].features[0].feature, "Days Since Release");
    assert_eq!(jordan.sales[0].features[1].impact, Some(-3.5));
    assert_eq!(jordan.sales[1].features.len(), 1);
    assert!(jordan.sales[2].features.is_empty());
}
