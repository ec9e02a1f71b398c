//! Integration tests for building the sales store from CSV files
//!
//! Builds a database file in a temp dir, then serves a summary from it
//! through the read-only pool the server uses.

use rust_decimal_macros::dec;
use std::fs;
use std::path::Path;

use sales_summary::bootstrap::{build_database, BuildOutcome, LoadReport};
use sales_summary::config::DatabaseConfig;
use sales_summary::summaries::{SqliteSalesRepository, SummaryOptions, SummaryService};

const ORDERS_CSV: &str = "\
id,created_at,vendor_id,customer_id
1,2019-08-01 09:15:00.000000,7,100
2,2019-08-01 17:40:00.000000,8,101
3,2019-08-02 11:00:00.000000,7,100
";

const ORDER_LINES_CSV: &str = "\
order_id,product_id,product_description,product_price,product_vat_rate,discount_rate,quantity,full_price_amount,discounted_amount,vat_amount,total_amount
1,10,Coffee,500,0.2,0.0,2,10.0,10.0,0.0,10.0
1,11,Tea,500,0.2,0.0,3,15.0,15.0,0.0,15.0
2,12,Cake,1000,0.2,0.5,1,20.0,10.0,2.0,12.0
3,10,Coffee,500,0.2,0.0,1,5.0,5.0,1.0,6.0
";

const COMMISSIONS_CSV: &str = "\
date,vendor_id,rate
2019-08-01,7,0.1
2019-08-01,8,0.25
";

fn write_data_dir(dir: &Path, with_commissions: bool) {
    fs::write(dir.join("orders.csv"), ORDERS_CSV).unwrap();
    fs::write(dir.join("order_lines.csv"), ORDER_LINES_CSV).unwrap();
    if with_commissions {
        fs::write(dir.join("commissions.csv"), COMMISSIONS_CSV).unwrap();
    }
}

fn read_only_config(db_path: &Path) -> DatabaseConfig {
    DatabaseConfig {
        url: format!("sqlite://{}", db_path.display()),
        pool_size: 1,
        max_connections: 2,
        acquire_timeout_secs: 5,
    }
}

#[tokio::test]
async fn test_build_and_summarize() {
    let data_dir = tempfile::tempdir().unwrap();
    let db_dir = tempfile::tempdir().unwrap();
    let db_path = db_dir.path().join("sales.db");
    write_data_dir(data_dir.path(), true);

    let outcome = build_database(data_dir.path(), &db_path, false).await.unwrap();
    assert_eq!(
        outcome,
        BuildOutcome::Built(LoadReport {
            orders: 3,
            order_lines: 4,
            commissions: Some(2),
            product_promotions: None,
        })
    );

    let pool = read_only_config(&db_path).create_pool().await.unwrap();
    let service = SummaryService::new(SqliteSalesRepository::new(pool), SummaryOptions::default());
    let summary = service.summarize("2019-08-01").await.unwrap();

    assert_eq!(summary.items, 6);
    assert_eq!(summary.customers, 2);
    assert_eq!(summary.total_discount_amount, dec!(10));
    assert_eq!(summary.discount_rate_avg, dec!(0.5));
    // (25 + 12) / 2
    assert_eq!(summary.order_total_avg, dec!(18.5));
    let commissions = summary.commissions.unwrap();
    // 25 * 0.1 + 12 * 0.25
    assert_eq!(commissions.total, dec!(5.5));
    assert_eq!(commissions.order_average, dec!(2.75));
}

#[tokio::test]
async fn test_existing_database_is_kept_without_rebuild() {
    let data_dir = tempfile::tempdir().unwrap();
    let db_dir = tempfile::tempdir().unwrap();
    let db_path = db_dir.path().join("sales.db");
    write_data_dir(data_dir.path(), false);

    let first = build_database(data_dir.path(), &db_path, false).await.unwrap();
    assert!(matches!(first, BuildOutcome::Built(ref r) if r.commissions.is_none()));

    let second = build_database(data_dir.path(), &db_path, false).await.unwrap();
    assert_eq!(second, BuildOutcome::AlreadyExists);

    // rebuilding starts from an empty file, so ids do not collide
    let third = build_database(data_dir.path(), &db_path, true).await.unwrap();
    assert!(matches!(third, BuildOutcome::Built(ref r) if r.orders == 3));
}

#[tokio::test]
async fn test_missing_required_csv_fails() {
    let data_dir = tempfile::tempdir().unwrap();
    let db_dir = tempfile::tempdir().unwrap();
    let db_path = db_dir.path().join("sales.db");
    fs::write(data_dir.path().join("orders.csv"), ORDERS_CSV).unwrap();

    let result = build_database(data_dir.path(), &db_path, false).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_read_only_pool_rejects_missing_file() {
    let db_dir = tempfile::tempdir().unwrap();
    let db_path = db_dir.path().join("absent.db");

    assert!(read_only_config(&db_path).create_pool().await.is_err());
}
