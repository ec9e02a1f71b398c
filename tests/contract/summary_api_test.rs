//! Contract tests for GET /summary/{date}
//!
//! Validates the wire format: key order, number rendering, the plain-text
//! invalid-date sentinel and the error envelope for store faults.

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::*;
use sales_summary::config::SummaryConfig;

#[actix_web::test]
async fn test_summary_body_has_fixed_key_order() {
    let pool = create_test_pool().await;
    seed_single_order_day(&pool).await;

    let resp = get(&pool, SummaryConfig::default(), "/summary/2019-08-01").await;

    assert_eq!(resp.status, 200);
    assert_eq!(resp.content_type.as_deref(), Some("application/json"));
    assert_eq!(
        resp.body,
        r#"{"items":5,"customers":1,"total_discount_amount":0.0,"discount_rate_avg":0.0,"order_total_avg":25.0,"commissions":{"total":2.5,"order_average":2.5}}"#
    );
}

#[actix_web::test]
async fn test_empty_day_returns_zeros() {
    let pool = create_test_pool().await;
    seed_single_order_day(&pool).await;

    let resp = get(&pool, SummaryConfig::default(), "/summary/2021-03-15").await;

    assert_eq!(resp.status, 200);
    assert_eq!(
        resp.body,
        r#"{"items":0,"customers":0,"total_discount_amount":0.0,"discount_rate_avg":0.0,"order_total_avg":0.0,"commissions":{"total":0.0,"order_average":0.0}}"#
    );
}

#[actix_web::test]
async fn test_empty_day_without_commissions() {
    let pool = create_test_pool().await;
    let settings = SummaryConfig {
        include_commissions: false,
        ..SummaryConfig::default()
    };

    let resp = get(&pool, settings, "/summary/2021-03-15").await;

    assert_eq!(resp.status, 200);
    assert_eq!(
        resp.body,
        r#"{"items":0,"customers":0,"total_discount_amount":0.0,"discount_rate_avg":0.0,"order_total_avg":0.0}"#
    );
}

#[actix_web::test]
async fn test_invalid_date_returns_plain_sentinel() {
    let pool = create_test_pool().await;

    for uri in [
        "/summary/not-a-date",
        "/summary/2019-13-01",
        "/summary/2019-02-29",
        "/summary/9999-12-31",
    ] {
        let resp = get(&pool, SummaryConfig::default(), uri).await;
        assert_eq!(resp.status, 200, "status for {}", uri);
        assert_eq!(resp.body, "Invalid date", "body for {}", uri);
        assert!(resp
            .content_type
            .as_deref()
            .unwrap_or_default()
            .starts_with("text/plain"));
    }
}

#[actix_web::test]
async fn test_invalid_date_with_strict_status() {
    let pool = create_test_pool().await;
    let settings = SummaryConfig {
        strict_status: true,
        ..SummaryConfig::default()
    };

    let resp = get(&pool, settings, "/summary/not-a-date").await;

    assert_eq!(resp.status, 400);
    assert_eq!(resp.body, "Invalid date");
}

#[actix_web::test]
async fn test_missing_commission_rate_is_server_error() {
    let pool = create_test_pool().await;
    insert_order(&pool, 1, "2019-08-01 12:00:00", 99, 1).await;
    insert_line(&pool, LineFixture::new(1, 1, 10.0)).await;

    let resp = get(&pool, SummaryConfig::default(), "/summary/2019-08-01").await;

    assert_eq!(resp.status, 500);
    let body = resp.json();
    assert_eq!(body["error"]["code"], 500);
    assert_eq!(
        body["error"]["message"],
        "No commission rate for vendor 99"
    );
}

#[actix_web::test]
async fn test_missing_rate_ignored_without_commissions() {
    let pool = create_test_pool().await;
    insert_order(&pool, 1, "2019-08-01 12:00:00", 99, 1).await;
    insert_line(&pool, LineFixture::new(1, 4, 10.0)).await;
    let settings = SummaryConfig {
        include_commissions: false,
        ..SummaryConfig::default()
    };

    let resp = get(&pool, settings, "/summary/2019-08-01").await;

    assert_eq!(resp.status, 200);
    let body = resp.json();
    assert_eq!(body["items"], 4);
    assert!(body.get("commissions").is_none());
}

#[actix_web::test]
async fn test_rounded_output() {
    let pool = create_test_pool().await;
    insert_order(&pool, 1, "2019-08-01 12:00:00", 7, 1).await;
    insert_line(&pool, LineFixture::new(1, 1, 10.0)).await;
    insert_commission(&pool, "2019-08-01", 7, 0.123).await;
    let settings = SummaryConfig {
        decimal_places: Some(2),
        ..SummaryConfig::default()
    };

    let resp = get(&pool, settings, "/summary/2019-08-01").await;

    let body = resp.json();
    // 10.0 * 0.123 = 1.23
    assert_eq!(body["commissions"]["total"], serde_json::json!(1.23));
    assert_eq!(body["order_total_avg"], serde_json::json!(10.0));
}

#[actix_web::test]
async fn test_request_id_header_is_returned() {
    let pool = create_test_pool().await;

    let resp = get(&pool, SummaryConfig::default(), "/summary/2019-08-01").await;

    assert!(resp.request_id.is_some());
}

#[actix_web::test]
async fn test_probes() {
    let pool = create_test_pool().await;

    let health = get(&pool, SummaryConfig::default(), "/health").await;
    assert_eq!(health.status, 200);
    assert_eq!(health.json()["status"], "healthy");

    let ready = get(&pool, SummaryConfig::default(), "/ready").await;
    assert_eq!(ready.status, 200);
    assert_eq!(ready.json()["ready"], true);
}

#[actix_web::test]
async fn test_overflowing_totals_are_server_error() {
    let pool = create_test_pool().await;
    insert_order(&pool, 1, "2019-08-01 08:00:00", 7, 1).await;
    insert_order(&pool, 2, "2019-08-01 09:00:00", 7, 2).await;
    for order_id in [1, 2] {
        insert_line(&pool, LineFixture::new(order_id, 1, 5.0e28).discounted(0.0, 1.0, 1.0)).await;
    }

    let resp = get(&pool, SummaryConfig::default(), "/summary/2019-08-01").await;

    assert_eq!(resp.status, 500);
    assert_eq!(resp.json()["error"]["code"], 500);
}
