pub mod amount;
pub mod date_range;
pub mod error;

pub use date_range::DateRange;
pub use error::{AppError, Result};
