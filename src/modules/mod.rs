pub mod bootstrap;
pub mod health;
pub mod summaries;
