use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::amount;

/// Daily sales summary returned by `GET /summary/{date}`.
///
/// Field order is the wire key order. Decimals serialize as JSON numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesSummary {
    /// Units sold across all order lines in range
    pub items: i64,
    /// Distinct customers with at least one order in range
    pub customers: i64,
    /// Sum of full prices minus sum of discounted prices
    #[serde(with = "rust_decimal::serde::float")]
    pub total_discount_amount: Decimal,
    /// Mean discount rate over discounted lines only
    #[serde(with = "rust_decimal::serde::float")]
    pub discount_rate_avg: Decimal,
    /// Mean of per-order totals
    #[serde(with = "rust_decimal::serde::float")]
    pub order_total_avg: Decimal,
    /// Absent when the summary is assembled without commission metrics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commissions: Option<CommissionSummary>,
}

/// Commission figures for the day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommissionSummary {
    /// Vendor-grouped totals times vendor rate, summed
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    /// Per-order totals times vendor rate, averaged over orders
    #[serde(with = "rust_decimal::serde::float")]
    pub order_average: Decimal,
}

impl SalesSummary {
    /// Summary of a day with no orders
    pub fn empty(with_commissions: bool) -> Self {
        Self {
            items: 0,
            customers: 0,
            total_discount_amount: Decimal::ZERO,
            discount_rate_avg: Decimal::ZERO,
            order_total_avg: Decimal::ZERO,
            commissions: with_commissions.then(CommissionSummary::zero),
        }
    }

    /// True when nothing was sold in the range
    pub fn is_empty(&self) -> bool {
        self.items == 0 && self.customers == 0 && self.order_total_avg.is_zero()
    }

    /// Apply the configured precision to every decimal figure
    pub fn rounded(self, decimal_places: Option<u32>) -> Self {
        Self {
            total_discount_amount: amount::round(self.total_discount_amount, decimal_places),
            discount_rate_avg: amount::round(self.discount_rate_avg, decimal_places),
            order_total_avg: amount::round(self.order_total_avg, decimal_places),
            commissions: self.commissions.map(|c| CommissionSummary {
                total: amount::round(c.total, decimal_places),
                order_average: amount::round(c.order_average, decimal_places),
            }),
            ..self
        }
    }
}

impl CommissionSummary {
    pub fn zero() -> Self {
        Self {
            total: Decimal::ZERO,
            order_average: Decimal::ZERO,
        }
    }
}
