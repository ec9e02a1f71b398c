use actix_web::{http::header::ContentType, web, HttpResponse};
use sqlx::SqlitePool;
use tracing::{error, warn};

use crate::config::SummaryConfig;
use crate::core::Result;
use crate::modules::summaries::repositories::SqliteSalesRepository;
use crate::modules::summaries::services::SummaryService;

/// Body returned for a date that does not parse
pub const INVALID_DATE_BODY: &str = "Invalid date";

/// GET /summary/{date}
///
/// Returns the daily sales summary as JSON. An unparseable date yields the
/// plain-text body `Invalid date`, with status 200 unless strict status is
/// configured. Store faults surface as 500 with the JSON error envelope.
pub async fn get_summary(
    pool: web::Data<SqlitePool>,
    settings: web::Data<SummaryConfig>,
    date: web::Path<String>,
) -> Result<HttpResponse> {
    let date = date.into_inner();
    let repository = SqliteSalesRepository::new(pool.get_ref().clone());
    let service = SummaryService::new(repository, settings.options());

    match service.summarize(&date).await {
        Ok(summary) => Ok(HttpResponse::Ok().json(summary)),
        Err(e) if e.is_invalid_date() => {
            warn!("Rejected summary request: {}", e);
            Ok(invalid_date_response(settings.strict_status))
        }
        Err(e) => {
            error!("Failed to generate sales summary for {}: {}", date, e);
            Err(e)
        }
    }
}

fn invalid_date_response(strict_status: bool) -> HttpResponse {
    let mut response = if strict_status {
        HttpResponse::BadRequest()
    } else {
        HttpResponse::Ok()
    };

    response
        .content_type(ContentType::plaintext())
        .body(INVALID_DATE_BODY)
}

/// Configure routes for summaries module
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/summary/{date}", web::get().to(get_summary));
}
