//! Raw aggregate rows read from the store, before any decimal arithmetic.

use sqlx::FromRow;

/// Independent sums of full-price and discounted amounts
#[derive(Debug, Clone, Copy, Default, PartialEq, FromRow)]
pub struct DiscountSums {
    pub full_price: Option<f64>,
    pub discounted: Option<f64>,
}

/// One order's line totals, summed
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct OrderTotal {
    pub order_id: i64,
    pub vendor_id: Option<i64>,
    pub total: Option<f64>,
}

/// One vendor's line totals across the whole range, summed
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct VendorTotal {
    pub vendor_id: Option<i64>,
    pub total: Option<f64>,
}

/// A commission rate row
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct CommissionRate {
    pub vendor_id: Option<i64>,
    pub rate: Option<f64>,
}
