// Test Server Helpers
//
// Builds the production route table around a test pool and issues requests
// through actix-web's in-process test service.

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use sqlx::SqlitePool;

use sales_summary::config::SummaryConfig;
use sales_summary::middleware::RequestId;
use sales_summary::modules::{health, summaries};

/// Response pieces a test cares about
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub request_id: Option<String>,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body)
            .unwrap_or_else(|e| panic!("Body is not JSON ({}): {}", e, self.body))
    }
}

/// Send `GET uri` to an app configured like production
pub async fn get(pool: &SqlitePool, settings: SummaryConfig, uri: &str) -> TestResponse {
    let app = test::init_service(
        App::new()
            .wrap(RequestId)
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(settings))
            .configure(health::configure)
            .configure(summaries::controllers::configure),
    )
    .await;

    let req = test::TestRequest::get().uri(uri).to_request();
    let resp = test::call_service(&app, req).await;

    let status = resp.status();
    let header = |name: &str| {
        resp.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    let content_type = header("content-type");
    let request_id = header("x-request-id");
    let body = test::read_body(resp).await;

    TestResponse {
        status,
        content_type,
        request_id,
        body: String::from_utf8(body.to_vec()).expect("Body is not UTF-8"),
    }
}
