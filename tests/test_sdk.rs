//! SDK-level tests: dataset loading through the cache, catalog queries and
//! likes wired to the SDK's session.

mod common;

use flate2::write::GzEncoder;
use flate2::Compression;
use sneakpeak_sdk::session::{SessionHandle, SessionProvider};
use sneakpeak_sdk::{LikeSort, SneakPeakError, SneakPeakSdk, TrendDirection, User};
use std::io::Write;

// ---------------------------------------------------------------------------
// dataset loading
// ---------------------------------------------------------------------------

#[test]
fn explicit_dataset_path_is_used() {
    let (sdk, _tmp) = common::setup_sample_sdk(SessionHandle::guest());
    assert_eq!(sdk.catalog().records().unwrap().len(), 5);
    assert_eq!(sdk.catalog().count().unwrap(), 3);
}

#[test]
fn missing_explicit_dataset_is_not_found() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let sdk = SneakPeakSdk::builder()
        .cache_dir(tmp_dir.path())
        .offline(true)
        .dataset_path(tmp_dir.path().join("nope.json"))
        .build()
        .unwrap();
    assert!(matches!(
        sdk.catalog().products(),
        Err(SneakPeakError::NotFound(_))
    ));
}

#[test]
fn offline_without_cache_is_not_found() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let sdk = SneakPeakSdk::builder()
        .cache_dir(tmp_dir.path())
        .offline(true)
        .build()
        .unwrap();
    assert!(matches!(
        sdk.catalog().products(),
        Err(SneakPeakError::NotFound(_))
    ));
}

#[test]
fn gzipped_cached_dataset_is_read() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let gz_path = tmp_dir.path().join("predicted_sneaker_prices.json.gz");
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(serde_json::to_string(&common::sample_rows()).unwrap().as_bytes())
        .unwrap();
    std::fs::write(&gz_path, encoder.finish().unwrap()).unwrap();

    let sdk = SneakPeakSdk::builder()
        .cache_dir(tmp_dir.path())
        .offline(true)
        .build()
        .unwrap();
    assert_eq!(sdk.catalog().count().unwrap(), 3);
}

#[test]
fn wrapped_dataset_is_accepted() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let path = tmp_dir.path().join("predicted_sneaker_prices.json");
    let wrapped = serde_json::json!({ "data": common::sample_rows() });
    std::fs::write(&path, wrapped.to_string()).unwrap();

    let sdk = SneakPeakSdk::builder()
        .cache_dir(tmp_dir.path())
        .offline(true)
        .build()
        .unwrap();
    assert_eq!(sdk.catalog().records().unwrap().len(), 5);
}

#[test]
fn corrupt_cached_dataset_is_removed() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let path = tmp_dir.path().join("predicted_sneaker_prices.json");
    std::fs::write(&path, "[{\"Sneaker Name\": ").unwrap();

    let sdk = SneakPeakSdk::builder()
        .cache_dir(tmp_dir.path())
        .offline(true)
        .build()
        .unwrap();
    assert!(matches!(
        sdk.catalog().products(),
        Err(SneakPeakError::NotFound(_))
    ));
    assert!(!path.exists());
}

#[test]
fn corrupt_explicit_dataset_is_kept() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let path = tmp_dir.path().join("mine.json");
    std::fs::write(&path, "not json").unwrap();

    let sdk = SneakPeakSdk::builder()
        .cache_dir(tmp_dir.path().join("cache"))
        .offline(true)
        .dataset_path(&path)
        .build()
        .unwrap();
    assert!(matches!(sdk.catalog().products(), Err(SneakPeakError::Json(_))));
    assert!(path.exists());
}

#[test]
fn empty_dataset_is_not_an_error() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let path = tmp_dir.path().join("empty.json");
    std::fs::write(&path, "[]").unwrap();

    let sdk = SneakPeakSdk::builder()
        .cache_dir(tmp_dir.path().join("cache"))
        .offline(true)
        .dataset_path(&path)
        .build()
        .unwrap();
    assert!(sdk.catalog().products().unwrap().is_empty());
    assert!(sdk.catalog().search("jordan").unwrap().is_empty());
    assert!(sdk.catalog().trending(None).unwrap().is_empty());
}

#[test]
fn refresh_with_explicit_dataset_is_noop() {
    let (sdk, _tmp) = common::setup_sample_sdk(SessionHandle::guest());
    assert!(!sdk.refresh().unwrap());
}

// ---------------------------------------------------------------------------
// catalog queries
// ---------------------------------------------------------------------------

#[test]
fn get_and_search() {
    let (sdk, _tmp) = common::setup_sample_sdk(SessionHandle::guest());
    let catalog = sdk.catalog();

    assert_eq!(catalog.get(common::DUNK).unwrap().unwrap().brand, "Nike");
    assert!(catalog.get("Nope").unwrap().is_none());

    let hits = catalog.search("YEEZY boost").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, common::YEEZY);
}

#[test]
fn trending_attaches_trend() {
    let (sdk, _tmp) = common::setup_sample_sdk(SessionHandle::guest());

    let all = sdk.catalog().trending(None).unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].trend.direction, TrendDirection::Rising);
    assert_eq!(all[1].trend.direction, TrendDirection::Steady);
    assert_eq!(all[2].trend.direction, TrendDirection::Unknown);

    let two = sdk.catalog().trending(Some(2)).unwrap();
    assert_eq!(two.len(), 2);
    assert_eq!(two[1].product.name, common::YEEZY);
}

#[test]
fn detail_from_catalog() {
    let (sdk, _tmp) = common::setup_sample_sdk(SessionHandle::guest());

    let detail = sdk.catalog().detail(common::JORDAN).unwrap().unwrap();
    assert_eq!(detail.chart().len(), 3);
    assert_eq!(detail.chart()[0].label, "Jan 5");
    let sale = detail.select_at(1).unwrap();
    assert_eq!(sale.price, Some(1620.0));
    assert_eq!(sale.size, "9");

    assert!(sdk.catalog().detail("Nope").unwrap().is_none());
}

// ---------------------------------------------------------------------------
// likes via the SDK session
// ---------------------------------------------------------------------------

#[test]
fn sdk_likes_follow_session() {
    let session = SessionHandle::guest();
    let (sdk, _tmp) = common::setup_sample_sdk(session.clone());
    let jordan = sdk.catalog().get(common::JORDAN).unwrap().unwrap();

    assert!(matches!(
        sdk.likes().like(&jordan),
        Err(SneakPeakError::LoginRequired(_))
    ));

    session.sign_in(User::new("u1").with_email("u1@example.com"));
    assert!(sdk.session().current_user().is_some());
    assert!(sdk.likes().toggle(&jordan).unwrap());
    assert_eq!(sdk.likes().list(LikeSort::Profit).unwrap()[0].name, common::JORDAN);

    session.sign_out();
    assert!(!sdk.likes().is_liked(common::JORDAN).unwrap());
}

#[test]
fn likes_db_file_survives_rebuild() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let dataset = common::write_dataset(tmp_dir.path());
    let build = || {
        SneakPeakSdk::builder()
            .cache_dir(tmp_dir.path().join("cache"))
            .offline(true)
            .dataset_path(&dataset)
            .likes_db(tmp_dir.path().join("likes.duckdb"))
            .session(SessionHandle::signed_in(User::new("u1")))
            .build()
            .unwrap()
    };

    {
        let sdk = build();
        let dunk = sdk.catalog().get(common::DUNK).unwrap().unwrap();
        sdk.likes().like(&dunk).unwrap();
        sdk.close();
    }

    let sdk = build();
    let liked = sdk.likes().list(LikeSort::Newest).unwrap();
    assert_eq!(liked.len(), 1);
    assert_eq!(liked[0].retail_price, None);
}

#[test]
fn display_mentions_session() {
    let (sdk, _tmp) = common::setup_sample_sdk(SessionHandle::guest());
    let text = sdk.to_string();
    assert!(text.starts_with("SneakPeakSdk("));
    assert!(text.contains("offline=true"));
    assert!(text.contains("signed_in=false"));
}
