//! Summary metrics computed from raw aggregate rows.
//!
//! The store returns sums and rows; everything here is plain decimal
//! arithmetic, and every metric has a zero value for an empty range.

use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::core::amount::{self, from_nullable, from_store};
use crate::core::{AppError, Result};
use crate::modules::summaries::models::{CommissionRate, DiscountSums, OrderTotal, VendorTotal};

/// Units sold; NULL (no lines) counts as zero
pub fn total_items(quantity_sum: Option<i64>) -> i64 {
    quantity_sum.unwrap_or(0)
}

/// `SUM(full_price_amount) - SUM(discounted_amount)`.
///
/// Both sums come from the store independently; the difference is taken
/// once, not per line. A NULL or zero full-price sum yields zero.
pub fn total_discount_amount(sums: DiscountSums) -> Result<Decimal> {
    match sums.full_price {
        Some(full) if full != 0.0 => {
            amount::sub(from_store(full)?, from_nullable(sums.discounted)?)
        }
        _ => Ok(Decimal::ZERO),
    }
}

/// Mean rate over discounted lines only; non-positive and NULL rates are skipped
pub fn discount_rate_avg(rates: &[Option<f64>]) -> Result<Decimal> {
    let discounted = rates
        .iter()
        .flatten()
        .filter(|rate| **rate > 0.0)
        .map(|rate| from_store(*rate))
        .collect::<Result<Vec<_>>>()?;

    amount::mean(&discounted)
}

/// Mean of per-order totals (average of sums, not of lines)
pub fn order_total_avg(orders: &[OrderTotal]) -> Result<Decimal> {
    let totals = orders
        .iter()
        .map(|order| from_nullable(order.total))
        .collect::<Result<Vec<_>>>()?;

    amount::mean(&totals)
}

/// Commission rate per vendor for a date range.
///
/// Rows are applied in order, so when a vendor has several rates in the
/// range the last one wins and the earlier ones are dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateTable {
    rates: HashMap<i64, Decimal>,
}

impl RateTable {
    pub fn from_rows(rows: &[CommissionRate]) -> Result<Self> {
        let mut rates = HashMap::with_capacity(rows.len());
        for row in rows {
            if let Some(vendor_id) = row.vendor_id {
                rates.insert(vendor_id, from_nullable(row.rate)?);
            }
        }
        Ok(Self { rates })
    }

    pub fn get(&self, vendor_id: Option<i64>) -> Option<Decimal> {
        vendor_id.and_then(|id| self.rates.get(&id).copied())
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }
}

/// Sum over vendors of (vendor total over the range × vendor rate).
///
/// Vendors without a rate contribute nothing.
pub fn commission_total(vendors: &[VendorTotal], rates: &RateTable) -> Result<Decimal> {
    if rates.is_empty() || vendors.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let mut total = Decimal::ZERO;
    for vendor in vendors {
        if let Some(rate) = rates.get(vendor.vendor_id) {
            total = amount::add(total, amount::mul(from_nullable(vendor.total)?, rate)?)?;
        }
    }
    Ok(total)
}

/// Mean over orders of (order total × vendor rate).
///
/// Unlike [`commission_total`], a vendor without a rate is an error.
pub fn commission_order_average(orders: &[OrderTotal], rates: &RateTable) -> Result<Decimal> {
    let commissions = orders
        .iter()
        .map(|order| {
            let rate = rates
                .get(order.vendor_id)
                .ok_or_else(|| AppError::missing_rate(order.vendor_id))?;
            amount::mul(from_nullable(order.total)?, rate)
        })
        .collect::<Result<Vec<_>>>()?;

    amount::mean(&commissions)
}
