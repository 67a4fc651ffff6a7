//! Batch pipeline tests
//!
//! Drive `run_batch` end to end against a mock server: translation on the
//! wire, the sentinel, failure isolation, and output ordering.

use geoscraper_rs::{BatchOptions, BatchRecord, ScrapeError, run_batch};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common;

#[tokio::test]
async fn test_map_search_payload_on_the_wire() {
    let server = MockServer::start().await;

    // The full payload: variant fields plus the cross-cutting defaults
    Mock::given(method("POST"))
        .and(path("/google/map/results"))
        .and(header("X-Berserker-Token", common::TEST_TOKEN))
        .and(body_json(json!({
            "ll": "@41.6948377,44.8015781,13z",
            "query": "hotels",
            "hl": "en",
            "useCached": true,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"title": "Hotel"}])))
        .expect(1)
        .mount(&server)
        .await;

    let records = run_batch(
        &common::client_for(&server),
        &common::credentials(),
        &[common::map_search("hotels")],
        &BatchOptions::default(),
    )
    .await
    .unwrap();

    assert_eq!(records.len(), 1);
    assert!(!records[0].is_error());
}

#[tokio::test]
async fn test_array_response_flattens_in_order() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/google/map/results"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"rank": 1},
            {"rank": 2},
            {"rank": 3},
        ])))
        .mount(&server)
        .await;

    let records = run_batch(
        &common::client_for(&server),
        &common::credentials(),
        &[common::map_search("hotels")],
        &BatchOptions::default(),
    )
    .await
    .unwrap();

    assert_eq!(records.len(), 3);
    for (position, record) in records.iter().enumerate() {
        let BatchRecord::Output(output) = record else {
            panic!("expected output record");
        };
        assert_eq!(output.item_index, 0);
        assert_eq!(output.payload["rank"], position as u64 + 1);
    }
}

#[tokio::test]
async fn test_empty_array_yields_zero_records() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/google/map/results"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let records = run_batch(
        &common::client_for(&server),
        &common::credentials(),
        &[common::map_search("hotels")],
        &BatchOptions::default(),
    )
    .await
    .unwrap();

    assert!(records.is_empty());
}

#[tokio::test]
async fn test_no_data_sentinel_is_not_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/google/map/results"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"detail": "No data found"})),
        )
        .mount(&server)
        .await;

    // continue_on_fail off: the sentinel still must not abort the run
    let records = run_batch(
        &common::client_for(&server),
        &common::credentials(),
        &[common::map_search("hotels")],
        &BatchOptions {
            continue_on_fail: false,
        },
    )
    .await
    .unwrap();

    assert_eq!(records.len(), 1);
    let BatchRecord::Output(output) = &records[0] else {
        panic!("expected output record");
    };
    assert_eq!(output.payload["message"], "No more results");
    assert_eq!(output.payload["detail"], "No data found");
}

#[tokio::test]
async fn test_fatal_failure_aborts_and_skips_later_items() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/google/map/results"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"rank": 1}])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/google/map/search/place"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;
    // Item 2's endpoint must never be reached
    Mock::given(method("POST"))
        .and(path("/google/map/review"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let err = run_batch(
        &common::client_for(&server),
        &common::credentials(),
        &[
            common::map_search("hotels"),
            common::place_search("museums"),
            common::review("0x123:0x456"),
        ],
        &BatchOptions {
            continue_on_fail: false,
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ScrapeError::Request { item_index: 1, .. }));
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn test_continue_on_fail_keeps_later_items_in_order() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/google/map/results"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"rank": 1},
            {"rank": 2},
        ])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/google/map/search/place"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/google/map/review"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"review": "ok"})))
        .mount(&server)
        .await;

    let records = run_batch(
        &common::client_for(&server),
        &common::credentials(),
        &[
            common::map_search("hotels"),
            common::place_search("museums"),
            common::review("0x123:0x456"),
        ],
        &BatchOptions {
            continue_on_fail: true,
        },
    )
    .await
    .unwrap();

    let indexes: Vec<usize> = records.iter().map(BatchRecord::item_index).collect();
    assert_eq!(indexes, vec![0, 0, 1, 2]);

    let errors: Vec<bool> = records.iter().map(BatchRecord::is_error).collect();
    assert_eq!(errors, vec![false, false, true, false]);

    let BatchRecord::Error(error) = &records[2] else {
        panic!("expected error record for item 1");
    };
    assert!(error.message.contains("500"));
}

#[tokio::test]
async fn test_validation_failure_degrades_like_dispatch_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/google/map/review"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"review": "ok"})))
        .mount(&server)
        .await;

    let bad_item = geoscraper_rs::ParameterBag::new().with("operation", "streetView");
    let records = run_batch(
        &common::client_for(&server),
        &common::credentials(),
        &[bad_item, common::review("0x123:0x456")],
        &BatchOptions {
            continue_on_fail: true,
        },
    )
    .await
    .unwrap();

    assert_eq!(records.len(), 2);
    assert!(records[0].is_error());
    assert!(!records[1].is_error());
    assert_eq!(records[1].item_index(), 1);
}
