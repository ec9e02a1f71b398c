pub mod metrics;
mod summary_service;

pub use summary_service::{SummaryOptions, SummaryService};
