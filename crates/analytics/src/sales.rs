//! Sales totals grouped by calendar month.

use std::collections::BTreeMap;

use chrono::{Datelike, TimeZone};

use storefront_orders::Order;

/// Sum of order amounts keyed by month index (0 = January .. 11 = December).
///
/// Orders from different years that share a month index land in the same key.
pub type MonthlySales = BTreeMap<u32, f64>;

/// Groups order amounts by the month of `created_at` in the calendar of `tz`.
///
/// Production callers pass `chrono::Local`; tests pin a fixed zone. Months with
/// no orders are absent.
pub fn aggregate_monthly_sales<'a, I, Tz>(orders: I, tz: &Tz) -> MonthlySales
where
    I: IntoIterator<Item = &'a Order>,
    Tz: TimeZone,
{
    let mut sales = MonthlySales::new();
    for order in orders {
        let month = order.created_at().with_timezone(tz).month0();
        *sales.entry(month).or_insert(0.0) += order.amount().value();
    }
    sales
}

/// Fixed 12-slot series (January first) with missing months as 0.
pub fn monthly_series(sales: &MonthlySales) -> [f64; 12] {
    let mut series = [0.0; 12];
    for (month, total) in sales {
        if let Some(slot) = series.get_mut(*month as usize) {
            *slot = *total;
        }
    }
    series
}
