use tracing::{debug, info};

use crate::core::{DateRange, Result};
use crate::modules::summaries::models::{CommissionSummary, OrderTotal, SalesSummary};
use crate::modules::summaries::repositories::SalesRepository;
use crate::modules::summaries::services::metrics::{self, RateTable};

/// Shape and precision of the assembled summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryOptions {
    /// Run the commission metrics and attach the `commissions` block
    pub include_commissions: bool,
    /// Round decimal figures to this many places
    pub decimal_places: Option<u32>,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            include_commissions: true,
            decimal_places: None,
        }
    }
}

/// Service assembling the daily sales summary
pub struct SummaryService<R: SalesRepository> {
    sales_repo: R,
    options: SummaryOptions,
}

impl<R: SalesRepository> SummaryService<R> {
    /// Create a new summary service
    pub fn new(sales_repo: R, options: SummaryOptions) -> Self {
        Self {
            sales_repo,
            options,
        }
    }

    pub fn options(&self) -> SummaryOptions {
        self.options
    }

    /// Generate the sales summary for one calendar day
    ///
    /// # Arguments
    /// * `date` - Day to summarize, `YYYY-MM-DD`
    ///
    /// # Errors
    /// * `AppError::InvalidDate` if `date` is not a calendar day
    /// * `AppError::Database` if any query fails; there is no per-metric fallback
    /// * `AppError::MissingCommissionRate` if an order's vendor has no rate
    pub async fn summarize(&self, date: &str) -> Result<SalesSummary> {
        let range = DateRange::for_day(date)?;

        info!(
            "Generating sales summary: range={}, commissions={}",
            range, self.options.include_commissions
        );

        let summary = self.summarize_range(&range).await?;

        if summary.is_empty() {
            info!("No sales recorded in {}", range);
        } else {
            debug!(
                items = summary.items,
                customers = summary.customers,
                "Sales summary generated for {}",
                range
            );
        }

        Ok(summary.rounded(self.options.decimal_places))
    }

    /// Run every metric for an already validated range, one after another
    pub async fn summarize_range(&self, range: &DateRange) -> Result<SalesSummary> {
        let items = metrics::total_items(self.sales_repo.sum_quantity(range).await?);
        let customers = self.sales_repo.count_distinct_customers(range).await?;
        let total_discount_amount =
            metrics::total_discount_amount(self.sales_repo.discount_sums(range).await?)?;
        let discount_rate_avg =
            metrics::discount_rate_avg(&self.sales_repo.discount_rates(range).await?)?;
        let order_totals = self.sales_repo.order_totals(range).await?;
        let order_total_avg = metrics::order_total_avg(&order_totals)?;

        let commissions = if self.options.include_commissions {
            Some(self.commissions(range, &order_totals).await?)
        } else {
            None
        };

        Ok(SalesSummary {
            items,
            customers,
            total_discount_amount,
            discount_rate_avg,
            order_total_avg,
            commissions,
        })
    }

    async fn commissions(
        &self,
        range: &DateRange,
        order_totals: &[OrderTotal],
    ) -> Result<CommissionSummary> {
        let rates = RateTable::from_rows(&self.sales_repo.commission_rates(range).await?)?;
        let vendor_totals = self.sales_repo.vendor_totals(range).await?;

        debug!(
            "Commission inputs for {}: {} vendor rates, {} vendors, {} orders",
            range,
            rates.len(),
            vendor_totals.len(),
            order_totals.len()
        );

        Ok(CommissionSummary {
            total: metrics::commission_total(&vendor_totals, &rates)?,
            order_average: metrics::commission_order_average(order_totals, &rates)?,
        })
    }
}
