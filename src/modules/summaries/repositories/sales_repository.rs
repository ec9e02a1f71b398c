use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::core::{DateRange, Result};
use crate::modules::summaries::models::{CommissionRate, DiscountSums, OrderTotal, VendorTotal};

/// Read-only aggregate queries behind the daily summary.
///
/// Every order-based query filters with `orders.created_at BETWEEN from AND to`,
/// inclusive on both ends, so a row stamped exactly `to` (midnight of the next
/// day written as a bare date) is counted as well.
#[async_trait]
pub trait SalesRepository: Send + Sync {
    /// `SUM(quantity)` over lines of orders in range, NULL when there are none
    async fn sum_quantity(&self, range: &DateRange) -> Result<Option<i64>>;

    /// Number of distinct customers with orders in range
    async fn count_distinct_customers(&self, range: &DateRange) -> Result<i64>;

    /// Full-price and discounted sums, computed independently
    async fn discount_sums(&self, range: &DateRange) -> Result<DiscountSums>;

    /// Discount rate of every line in range, one entry per line
    async fn discount_rates(&self, range: &DateRange) -> Result<Vec<Option<f64>>>;

    /// Line totals grouped by order
    async fn order_totals(&self, range: &DateRange) -> Result<Vec<OrderTotal>>;

    /// Line totals grouped by vendor over the whole range
    async fn vendor_totals(&self, range: &DateRange) -> Result<Vec<VendorTotal>>;

    /// Commission rates dated within `[from, to]`, oldest first
    async fn commission_rates(&self, range: &DateRange) -> Result<Vec<CommissionRate>>;
}

pub struct SqliteSalesRepository {
    pool: SqlitePool,
}

impl SqliteSalesRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SalesRepository for SqliteSalesRepository {
    async fn sum_quantity(&self, range: &DateRange) -> Result<Option<i64>> {
        let total = sqlx::query_scalar::<_, Option<i64>>(
            r#"
            SELECT SUM(order_lines.quantity)
            FROM order_lines INNER JOIN orders ON orders.id = order_lines.order_id
            WHERE orders.created_at BETWEEN ? AND ?
            "#,
        )
        .bind(range.from.as_str())
        .bind(range.to.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }

    async fn count_distinct_customers(&self, range: &DateRange) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM (
                SELECT DISTINCT orders.customer_id
                FROM orders
                WHERE orders.created_at BETWEEN ? AND ?
            )
            "#,
        )
        .bind(range.from.as_str())
        .bind(range.to.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    async fn discount_sums(&self, range: &DateRange) -> Result<DiscountSums> {
        let sums = sqlx::query_as::<_, DiscountSums>(
            r#"
            SELECT
                SUM(order_lines.full_price_amount) AS full_price,
                SUM(order_lines.discounted_amount) AS discounted
            FROM order_lines INNER JOIN orders ON orders.id = order_lines.order_id
            WHERE orders.created_at BETWEEN ? AND ?
            "#,
        )
        .bind(range.from.as_str())
        .bind(range.to.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(sums)
    }

    async fn discount_rates(&self, range: &DateRange) -> Result<Vec<Option<f64>>> {
        let rates = sqlx::query_scalar::<_, Option<f64>>(
            r#"
            SELECT order_lines.discount_rate
            FROM order_lines INNER JOIN orders ON orders.id = order_lines.order_id
            WHERE orders.created_at BETWEEN ? AND ?
            "#,
        )
        .bind(range.from.as_str())
        .bind(range.to.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(rates)
    }

    async fn order_totals(&self, range: &DateRange) -> Result<Vec<OrderTotal>> {
        let totals = sqlx::query_as::<_, OrderTotal>(
            r#"
            SELECT
                orders.id AS order_id,
                orders.vendor_id AS vendor_id,
                SUM(order_lines.total_amount) AS total
            FROM order_lines INNER JOIN orders ON orders.id = order_lines.order_id
            WHERE orders.created_at BETWEEN ? AND ?
            GROUP BY orders.id
            ORDER BY orders.id
            "#,
        )
        .bind(range.from.as_str())
        .bind(range.to.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(totals)
    }

    async fn vendor_totals(&self, range: &DateRange) -> Result<Vec<VendorTotal>> {
        let totals = sqlx::query_as::<_, VendorTotal>(
            r#"
            SELECT
                orders.vendor_id AS vendor_id,
                SUM(order_lines.total_amount) AS total
            FROM order_lines INNER JOIN orders ON orders.id = order_lines.order_id
            WHERE orders.created_at BETWEEN ? AND ?
            GROUP BY orders.vendor_id
            ORDER BY orders.vendor_id
            "#,
        )
        .bind(range.from.as_str())
        .bind(range.to.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(totals)
    }

    async fn commission_rates(&self, range: &DateRange) -> Result<Vec<CommissionRate>> {
        let rates = sqlx::query_as::<_, CommissionRate>(
            r#"
            SELECT vendor_id, rate
            FROM commissions
            WHERE date BETWEEN ? AND ?
            ORDER BY date, rowid
            "#,
        )
        .bind(range.from.as_str())
        .bind(range.to.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(rates)
    }
}
