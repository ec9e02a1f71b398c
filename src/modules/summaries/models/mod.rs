pub mod aggregates;
pub mod sales_summary;

pub use aggregates::{CommissionRate, DiscountSums, OrderTotal, VendorTotal};
pub use sales_summary::{CommissionSummary, SalesSummary};
