//! Creation and bulk loading of the SQLite sales store.

pub mod csv_loader;
pub mod schema;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use tracing::info;

use crate::core::Result;

pub use csv_loader::{populate_tables, LoadReport};
pub use schema::create_tables;

/// What `build_database` did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    /// The database file was already there and `rebuild` was not requested
    AlreadyExists,
    /// A fresh database was created and loaded
    Built(LoadReport),
}

/// Open (creating if needed) a writable pool on a database file
pub async fn open_writable(db_path: &Path) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Create the schema at `db_path` and load it from the CSV files in `data_dir`.
///
/// An existing database is left untouched unless `rebuild` is set, in which
/// case it is deleted first.
pub async fn build_database(
    data_dir: &Path,
    db_path: &Path,
    rebuild: bool,
) -> Result<BuildOutcome> {
    if db_path.exists() {
        if !rebuild {
            return Ok(BuildOutcome::AlreadyExists);
        }
        info!("Removing existing database at {}", db_path.display());
        std::fs::remove_file(db_path)?;
    }

    let pool = open_writable(db_path).await?;
    create_tables(&pool).await?;
    let report = populate_tables(&pool, data_dir).await?;
    pool.close().await;

    Ok(BuildOutcome::Built(report))
}
