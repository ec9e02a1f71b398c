//! Bulk loading of the sales store from CSV exports.
//!
//! Each file carries a header row whose names match the table columns.
//! Empty fields load as NULL.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use sqlx::query::Query;
use sqlx::sqlite::SqliteArguments;
use sqlx::{Sqlite, SqlitePool};
use std::path::Path;
use tracing::{info, warn};

use crate::core::Result;

type InsertQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

/// A CSV file that maps one-to-one onto a table
pub trait CsvTable: DeserializeOwned {
    /// File name inside the data directory
    const FILE: &'static str;
    /// Parameterized insert for one record
    const INSERT: &'static str;

    fn bind(self, query: InsertQuery<'_>) -> InsertQuery<'_>;
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderRecord {
    pub id: i64,
    pub created_at: Option<String>,
    pub vendor_id: Option<i64>,
    pub customer_id: Option<i64>,
}

impl CsvTable for OrderRecord {
    const FILE: &'static str = "orders.csv";
    const INSERT: &'static str =
        "INSERT INTO orders (id, created_at, vendor_id, customer_id) VALUES (?, ?, ?, ?)";

    fn bind(self, query: InsertQuery<'_>) -> InsertQuery<'_> {
        query
            .bind(self.id)
            .bind(self.created_at)
            .bind(self.vendor_id)
            .bind(self.customer_id)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderLineRecord {
    pub order_id: i64,
    pub product_id: i64,
    pub product_description: Option<String>,
    pub product_price: Option<i64>,
    pub product_vat_rate: Option<f64>,
    pub discount_rate: Option<f64>,
    pub quantity: Option<i64>,
    pub full_price_amount: Option<f64>,
    pub discounted_amount: Option<f64>,
    pub vat_amount: Option<f64>,
    pub total_amount: Option<f64>,
}

impl CsvTable for OrderLineRecord {
    const FILE: &'static str = "order_lines.csv";
    const INSERT: &'static str = r#"
        INSERT INTO order_lines (
            order_id, product_id, product_description, product_price, product_vat_rate,
            discount_rate, quantity, full_price_amount, discounted_amount, vat_amount, total_amount
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

    fn bind(self, query: InsertQuery<'_>) -> InsertQuery<'_> {
        query
            .bind(self.order_id)
            .bind(self.product_id)
            .bind(self.product_description)
            .bind(self.product_price)
            .bind(self.product_vat_rate)
            .bind(self.discount_rate)
            .bind(self.quantity)
            .bind(self.full_price_amount)
            .bind(self.discounted_amount)
            .bind(self.vat_amount)
            .bind(self.total_amount)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommissionRecord {
    pub date: Option<String>,
    pub vendor_id: Option<i64>,
    pub rate: Option<f64>,
}

impl CsvTable for CommissionRecord {
    const FILE: &'static str = "commissions.csv";
    const INSERT: &'static str = "INSERT INTO commissions (date, vendor_id, rate) VALUES (?, ?, ?)";

    fn bind(self, query: InsertQuery<'_>) -> InsertQuery<'_> {
        query.bind(self.date).bind(self.vendor_id).bind(self.rate)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductPromotionRecord {
    pub date: Option<String>,
    pub product_id: Option<i64>,
    pub promotion_id: Option<i64>,
}

impl CsvTable for ProductPromotionRecord {
    const FILE: &'static str = "product_promotions.csv";
    const INSERT: &'static str =
        "INSERT INTO product_promotions (date, product_id, promotion_id) VALUES (?, ?, ?)";

    fn bind(self, query: InsertQuery<'_>) -> InsertQuery<'_> {
        query
            .bind(self.date)
            .bind(self.product_id)
            .bind(self.promotion_id)
    }
}

/// Row counts written per table; `None` for optional files that were absent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub orders: u64,
    pub order_lines: u64,
    pub commissions: Option<u64>,
    pub product_promotions: Option<u64>,
}

/// Parse every record of a CSV file
pub fn read_records<T: CsvTable>(path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let records = reader.deserialize().collect::<std::result::Result<Vec<T>, _>>()?;
    Ok(records)
}

/// Insert records into their table inside one transaction
pub async fn insert_records<T: CsvTable>(pool: &SqlitePool, records: Vec<T>) -> Result<u64> {
    let mut tx = pool.begin().await?;
    let mut written = 0;

    for record in records {
        written += record
            .bind(sqlx::query(T::INSERT))
            .execute(&mut *tx)
            .await?
            .rows_affected();
    }

    tx.commit().await?;
    Ok(written)
}

/// Load one required CSV file into its table
pub async fn load_table<T: CsvTable>(pool: &SqlitePool, data_dir: &Path) -> Result<u64> {
    let path = data_dir.join(T::FILE);
    let records = read_records::<T>(&path)?;
    let written = insert_records(pool, records).await?;
    info!("Loaded {} rows from {}", written, path.display());
    Ok(written)
}

/// Load an optional CSV file; a missing file is skipped
pub async fn load_optional_table<T: CsvTable>(
    pool: &SqlitePool,
    data_dir: &Path,
) -> Result<Option<u64>> {
    if !data_dir.join(T::FILE).exists() {
        warn!("{} not found in {}, skipping", T::FILE, data_dir.display());
        return Ok(None);
    }
    load_table::<T>(pool, data_dir).await.map(Some)
}

/// Populate every table from the CSV files in `data_dir`
pub async fn populate_tables(pool: &SqlitePool, data_dir: &Path) -> Result<LoadReport> {
    Ok(LoadReport {
        orders: load_table::<OrderRecord>(pool, data_dir).await?,
        order_lines: load_table::<OrderLineRecord>(pool, data_dir).await?,
        commissions: load_optional_table::<CommissionRecord>(pool, data_dir).await?,
        product_promotions: load_optional_table::<ProductPromotionRecord>(pool, data_dir).await?,
    })
}
