pub mod sales_repository;

pub use sales_repository::{SalesRepository, SqliteSalesRepository};
