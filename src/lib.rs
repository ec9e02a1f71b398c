//! Daily Sales Summary Service Library
//!
//! Computes per-day sales summaries (items, customers, discounts, commissions)
//! from an orders store and serves them over HTTP.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::bootstrap;
pub use modules::summaries;
