//! "Recent orders" views.
//!
//! Two different notions of recent coexist and must not be merged:
//! - [`select_recent_orders`] keeps orders from the rolling 7×24h window
//!   `(now - 7 days, now]`;
//! - [`bucket_by_trailing_day`] counts orders per local calendar date over the
//!   seven dates ending today.
//!
//! They disagree at day boundaries: an order placed 6 days and 23 hours ago is
//! inside the rolling window but can fall on the date seven days back, which
//! has no slot in the daily trend.

use chrono::{DateTime, TimeDelta, TimeZone, Utc};

use storefront_orders::Order;

/// Width of the rolling window, and the number of daily trend slots.
pub const RECENT_WINDOW_DAYS: i64 = 7;

/// Orders with `now - 7 days < created_at <= now`, in input order.
pub fn select_recent_orders<'a, I>(orders: I, now: DateTime<Utc>) -> Vec<&'a Order>
where
    I: IntoIterator<Item = &'a Order>,
{
    let window_start = now - TimeDelta::days(RECENT_WINDOW_DAYS);
    orders
        .into_iter()
        .filter(|order| {
            let created_at = order.created_at();
            created_at > window_start && created_at <= now
        })
        .collect()
}

/// Daily order counts for the seven local calendar dates ending at `now`.
///
/// Slot 6 is today, slot 0 is six dates earlier. Orders dated outside those
/// seven dates (including future dates) are ignored.
pub fn bucket_by_trailing_day<'a, I, Tz>(orders: I, now: DateTime<Utc>, tz: &Tz) -> [usize; 7]
where
    I: IntoIterator<Item = &'a Order>,
    Tz: TimeZone,
{
    let today = now.with_timezone(tz).date_naive();
    let mut buckets = [0usize; 7];

    for order in orders {
        let day = order.created_at().with_timezone(tz).date_naive();
        let days_ago = today.signed_duration_since(day).num_days();
        if (0..RECENT_WINDOW_DAYS).contains(&days_ago) {
            buckets[(RECENT_WINDOW_DAYS - 1 - days_ago) as usize] += 1;
        }
    }

    buckets
}
