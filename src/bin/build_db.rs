use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sales_summary::modules::bootstrap::{build_database, BuildOutcome};

/// Build the sample sales database from CSV exports.
#[derive(Parser, Debug)]
#[command(name = "build-db")]
#[command(version, about, long_about = None)]
struct Args {
    /// Folder containing the CSV files
    data_dir: PathBuf,

    /// Path to the SQLite database file
    db_path: PathBuf,

    /// Delete and rebuild the database if it already exists
    #[arg(long)]
    rebuild: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sales_summary=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let outcome = build_database(&args.data_dir, &args.db_path, args.rebuild)
        .await
        .with_context(|| {
            format!(
                "Failed to build {} from {}",
                args.db_path.display(),
                args.data_dir.display()
            )
        })?;

    match outcome {
        BuildOutcome::AlreadyExists => println!("Database already exists."),
        BuildOutcome::Built(report) => {
            tracing::info!(
                orders = report.orders,
                order_lines = report.order_lines,
                commissions = ?report.commissions,
                product_promotions = ?report.product_promotions,
                "Load complete"
            );
            println!("Database ready.");
        }
    }

    Ok(())
}
