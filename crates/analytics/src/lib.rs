//! `storefront-analytics`
//!
//! **Responsibility:** turn a snapshot of orders and products into the figures
//! the seller dashboard renders.
//!
//! Everything here is a pure projection:
//! - inputs are borrowed and never mutated,
//! - nothing is cached between calls (each refresh recomputes from scratch),
//! - the clock and the calendar time zone are explicit parameters.

pub mod distribution;
pub mod recent;
pub mod report;
pub mod sales;
pub mod summary;

pub use distribution::{
    PaymentCounts, StatusCounts, StockStatus, aggregate_payment_methods, aggregate_status_counts,
    aggregate_stock_status, count_payment_type, count_status,
};
pub use recent::{RECENT_WINDOW_DAYS, bucket_by_trailing_day, select_recent_orders};
pub use report::{CategorySales, MonthlyReport, ProductSales, ReportPeriod, WEEKS_PER_REPORT};
pub use sales::{MonthlySales, aggregate_monthly_sales, monthly_series};
pub use summary::{DashboardSummary, LATEST_ORDERS_LIMIT, OrderRow, summarize};

#[cfg(test)]
mod test_support;
