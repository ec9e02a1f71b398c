use actix_web::{web, App, HttpResponse, HttpServer};
use sales_summary::config::{AppConfig, Config};
use sales_summary::middleware::RequestId;
use sales_summary::modules::{health, summaries};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(app: &AppConfig) {
    let json = app.log_format == "json";

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("sales_summary={},actix_web=info", app.log_level).into()
            }),
        )
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(|| tracing_subscriber::fmt::layer()))
        .init();
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load configuration
    let config = Config::from_env().map_err(std::io::Error::other)?;
    config.validate().map_err(std::io::Error::other)?;

    init_tracing(&config.app);

    tracing::info!("Starting Daily Sales Summary service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Create database connection pool
    let db_pool = config
        .database
        .create_pool()
        .await
        .map_err(std::io::Error::other)?;

    tracing::info!(
        "Database pool initialized ({}..={} connections, read-only)",
        config.database.pool_size,
        config.database.max_connections
    );
    tracing::info!(
        "Summary shape: commissions={}, decimal_places={:?}, strict_status={}",
        config.summary.include_commissions,
        config.summary.decimal_places,
        config.summary.strict_status
    );

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let summary_settings = web::Data::new(config.summary.clone());
    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestId)
            .app_data(web::Data::new(db_pool.clone()))
            .app_data(summary_settings.clone())
            .configure(health::configure)
            .configure(summaries::controllers::configure)
            .route("/", web::get().to(index))
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await
}

async fn index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "service": "Daily Sales Summary",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running"
    }))
}
