pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{CommissionSummary, SalesSummary};
pub use repositories::{SalesRepository, SqliteSalesRepository};
pub use services::{SummaryOptions, SummaryService};
