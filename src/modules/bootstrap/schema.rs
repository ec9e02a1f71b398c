use sqlx::SqlitePool;

use crate::core::Result;

/// Table definitions of the sales store, in dependency order
pub const SCHEMA: [&str; 4] = [
    r#"
    CREATE TABLE IF NOT EXISTS orders (
        id INTEGER PRIMARY KEY,
        created_at TEXT,
        vendor_id INTEGER,
        customer_id INTEGER
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS order_lines (
        order_id INTEGER NOT NULL,
        product_id INTEGER NOT NULL,
        product_description TEXT,
        product_price INTEGER,
        product_vat_rate REAL,
        discount_rate REAL,
        quantity INTEGER,
        full_price_amount REAL,
        discounted_amount REAL,
        vat_amount REAL,
        total_amount REAL,
        FOREIGN KEY (order_id) REFERENCES orders(id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS commissions (
        date TEXT,
        vendor_id INTEGER,
        rate REAL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS product_promotions (
        date TEXT,
        product_id INTEGER,
        promotion_id INTEGER
    )
    "#,
];

/// Create every table that does not exist yet
pub async fn create_tables(pool: &SqlitePool) -> Result<()> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
