use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Liveness body; the process answering is the whole check
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: String,
}

/// Readiness body
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub checks: ReadinessChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessChecks {
    pub database: bool,
    pub application: bool,
}

/// GET /health
///
/// Never queries the sales store, so a locked or missing database file does
/// not take the process out of rotation. Use `/ready` for that.
pub async fn health_check() -> impl Responder {
    let response = HealthResponse {
        status: "healthy".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    HttpResponse::Ok().json(response)
}

/// GET /ready
///
/// 503 until a pooled read-only connection answers `SELECT 1`.
pub async fn readiness_check(pool: web::Data<SqlitePool>) -> impl Responder {
    let mut checks = ReadinessChecks {
        database: false,
        application: true,
    };

    match sqlx::query("SELECT 1").fetch_one(pool.get_ref()).await {
        Ok(_) => checks.database = true,
        Err(e) => tracing::error!("Database readiness check failed: {}", e),
    }

    let ready = checks.database && checks.application;
    let response = ReadinessResponse { ready, checks };

    if ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/ready", web::get().to(readiness_check));
}
