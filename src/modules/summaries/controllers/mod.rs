mod summary_controller;

pub use summary_controller::{get_summary, INVALID_DATE_BODY};

// Re-export configure for main.rs
pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    summary_controller::configure(cfg);
}
