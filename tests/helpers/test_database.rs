// Test Database Helpers
//
// Provides isolated in-memory stores with the real schema.

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use sales_summary::bootstrap::create_tables;

/// Create an in-memory SQLite pool with all sales tables
///
/// # Behavior
/// - One connection only: every `:memory:` connection is its own database
/// - Connection is never recycled while the pool lives
/// - Panics with a clear message if the schema cannot be created
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap_or_else(|e| panic!("Failed to open in-memory test database: {}", e));

    create_tables(&pool)
        .await
        .unwrap_or_else(|e| panic!("Failed to create test schema: {}", e));

    pool
}

/// Count rows of a table
pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .expect("Failed to count rows")
}
