pub mod health_controller;

pub use health_controller::{health_check, readiness_check};

pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    health_controller::configure(cfg);
}
