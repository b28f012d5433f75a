//! Per-month sales report (month picker view).
//!
//! Narrows the order list to one calendar month and breaks it down by week,
//! product and category. Product revenue is valued at the product's current
//! offer price times the quantity ordered.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Datelike, TimeZone};
use serde::Serialize;

use storefront_catalog::Product;
use storefront_core::{DomainError, DomainResult, OrderId, ProductId, index_by_id};
use storefront_orders::Order;

use crate::distribution::{
    PaymentCounts, StatusCounts, aggregate_payment_methods, aggregate_status_counts,
};

/// Weekly buckets in a report: days 1-6, 7-13, 14-20, 21-27, 28-31.
pub const WEEKS_PER_REPORT: usize = 5;

/// Number of entries in `top_products`.
const TOP_PRODUCTS: usize = 5;

/// A calendar month (`month0` is 0 for January).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportPeriod {
    year: i32,
    month0: u32,
}

impl ReportPeriod {
    pub fn new(year: i32, month0: u32) -> DomainResult<Self> {
        if month0 > 11 {
            return Err(DomainError::validation(format!(
                "month index must be 0..=11, got {month0}"
            )));
        }
        Ok(Self { year, month0 })
    }

    /// Period containing `at` in the calendar of `at`'s zone.
    pub fn containing<Tz: TimeZone>(at: &DateTime<Tz>) -> Self {
        Self {
            year: at.year(),
            month0: at.month0(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month0(&self) -> u32 {
        self.month0
    }

    fn contains<Tz: TimeZone>(&self, at: &DateTime<Tz>) -> bool {
        at.year() == self.year && at.month0() == self.month0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSales {
    pub product_id: ProductId,
    pub name: String,
    pub category: String,
    pub units_sold: u64,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySales {
    pub category: String,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReport {
    pub period: ReportPeriod,
    pub order_ids: Vec<OrderId>,
    pub total_orders: usize,
    /// Sum of order amounts (what customers were charged).
    pub total_revenue: f64,
    pub total_units: u64,
    pub status_counts: StatusCounts,
    pub payment_methods: PaymentCounts,
    pub weekly_sales: [f64; WEEKS_PER_REPORT],
    /// Every product sold in the period, highest revenue first.
    pub product_sales: Vec<ProductSales>,
    pub top_products: Vec<ProductSales>,
    /// Every category sold in the period, highest revenue first.
    pub top_categories: Vec<CategorySales>,
    /// Line items whose product is not in the catalog snapshot.
    pub unmatched_items: usize,
}

impl MonthlyReport {
    #[tracing::instrument(
        skip_all,
        fields(year = period.year, month0 = period.month0, orders = orders.len())
    )]
    pub fn build<Tz: TimeZone>(
        orders: &[Order],
        products: &[Product],
        period: ReportPeriod,
        tz: &Tz,
    ) -> Self {
        let in_period: Vec<&Order> = orders
            .iter()
            .filter(|order| period.contains(&order.created_at().with_timezone(tz)))
            .collect();

        let catalog = index_by_id(products);

        let mut weekly_sales = [0.0; WEEKS_PER_REPORT];
        let mut by_product: HashMap<&ProductId, ProductSales> = HashMap::new();
        let mut by_category: BTreeMap<&str, f64> = BTreeMap::new();
        let mut unmatched_items = 0usize;

        for order in &in_period {
            let day = order.created_at().with_timezone(tz).day();
            weekly_sales[week_of_month(day)] += order.amount().value();

            for item in order.items() {
                let Some(&product) = catalog.get(item.product_id()) else {
                    unmatched_items += 1;
                    continue;
                };
                let revenue = product.line_revenue(item.quantity()).value();

                let entry = by_product
                    .entry(product.id_typed())
                    .or_insert_with(|| ProductSales {
                        product_id: product.id_typed().clone(),
                        name: product.name().to_string(),
                        category: product.category().to_string(),
                        units_sold: 0,
                        revenue: 0.0,
                    });
                entry.units_sold += u64::from(item.quantity());
                entry.revenue += revenue;

                *by_category.entry(product.category()).or_insert(0.0) += revenue;
            }
        }

        if unmatched_items > 0 {
            tracing::warn!(unmatched_items, "line items reference products missing from catalog");
        }

        let mut product_sales: Vec<ProductSales> = by_product.into_values().collect();
        product_sales.sort_by(|a, b| {
            b.revenue
                .total_cmp(&a.revenue)
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.product_id.cmp(&b.product_id))
        });

        let mut top_categories: Vec<CategorySales> = by_category
            .into_iter()
            .map(|(category, revenue)| CategorySales {
                category: category.to_string(),
                revenue,
            })
            .collect();
        top_categories.sort_by(|a, b| {
            b.revenue
                .total_cmp(&a.revenue)
                .then_with(|| a.category.cmp(&b.category))
        });

        let report = Self {
            period,
            order_ids: in_period.iter().map(|o| o.id_typed().clone()).collect(),
            total_orders: in_period.len(),
            total_revenue: in_period.iter().map(|o| o.amount().value()).sum(),
            total_units: product_sales.iter().map(|p| p.units_sold).sum(),
            status_counts: aggregate_status_counts(in_period.iter().copied()),
            payment_methods: aggregate_payment_methods(in_period.iter().copied()),
            weekly_sales,
            top_products: product_sales.iter().take(TOP_PRODUCTS).cloned().collect(),
            product_sales,
            top_categories,
            unmatched_items,
        };

        tracing::debug!(
            total_orders = report.total_orders,
            products = report.product_sales.len(),
            categories = report.top_categories.len(),
            "monthly report computed"
        );

        report
    }
}

/// Week bucket for a day of month (1..=31): `day / 7`, so day 7 opens week 2.
fn week_of_month(day: u32) -> usize {
    ((day / 7) as usize).min(WEEKS_PER_REPORT - 1)
}
