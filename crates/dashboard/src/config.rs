//! Environment-driven configuration.
//!
//! | Variable                   | Default         |
//! |----------------------------|-----------------|
//! | `STOREFRONT_ORDERS_PATH`   | `orders.json`   |
//! | `STOREFRONT_PRODUCTS_PATH` | `products.json` |
//! | `STOREFRONT_NOW`           | wall clock      |
//! | `STOREFRONT_TIMEZONE`      | `local`         |
//! | `STOREFRONT_REPORT_MONTH`  | unset (`YYYY-MM` or `current`) |
//! | `STOREFRONT_LOG_FORMAT`    | `json`          |

use std::path::PathBuf;

use anyhow::{Context, anyhow, bail};
use chrono::{DateTime, FixedOffset, TimeZone, Utc};

use storefront_analytics::ReportPeriod;
use storefront_observability::LogFormat;

pub const ORDERS_PATH_VAR: &str = "STOREFRONT_ORDERS_PATH";
pub const PRODUCTS_PATH_VAR: &str = "STOREFRONT_PRODUCTS_PATH";
pub const NOW_VAR: &str = "STOREFRONT_NOW";
pub const TIMEZONE_VAR: &str = "STOREFRONT_TIMEZONE";
pub const REPORT_MONTH_VAR: &str = "STOREFRONT_REPORT_MONTH";
pub const LOG_FORMAT_VAR: &str = "STOREFRONT_LOG_FORMAT";

/// Calendar used for month keys, weekly buckets and trailing-day slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Local,
    Utc,
    Fixed(FixedOffset),
}

impl Zone {
    /// `local`, `utc`/`z`, or an offset such as `+05:30`, `-0800`, `+02`.
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let raw = raw.trim();
        match raw.to_ascii_lowercase().as_str() {
            "local" => return Ok(Self::Local),
            "utc" | "z" => return Ok(Self::Utc),
            _ => {}
        }

        let (sign, rest) = match raw.split_at_checked(1) {
            Some(("+", rest)) => (1, rest),
            Some(("-", rest)) => (-1, rest),
            _ => bail!("unrecognised time zone `{raw}`"),
        };

        let digits: String = rest.chars().filter(|c| *c != ':').collect();
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            bail!("unrecognised time zone offset `{raw}`");
        }
        let (hours, minutes) = match digits.len() {
            2 => (digits.as_str(), "00"),
            4 => digits.split_at(2),
            _ => bail!("unrecognised time zone offset `{raw}`"),
        };
        let hours: i32 = hours
            .parse()
            .with_context(|| format!("invalid hours in offset `{raw}`"))?;
        let minutes: i32 = minutes
            .parse()
            .with_context(|| format!("invalid minutes in offset `{raw}`"))?;
        if minutes >= 60 {
            bail!("invalid minutes in offset `{raw}`");
        }

        FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
            .map(Self::Fixed)
            .ok_or_else(|| anyhow!("offset out of range: `{raw}`"))
    }
}

/// Month the optional report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMonth {
    /// The month containing `now` in the dashboard's calendar.
    Current,
    Fixed(ReportPeriod),
}

impl ReportMonth {
    pub fn resolve<Tz: TimeZone>(self, now: DateTime<Utc>, tz: &Tz) -> ReportPeriod {
        match self {
            ReportMonth::Current => ReportPeriod::containing(&now.with_timezone(tz)),
            ReportMonth::Fixed(period) => period,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub orders_path: PathBuf,
    pub products_path: PathBuf,
    /// `None` means read the wall clock when the dashboard is built.
    pub now: Option<DateTime<Utc>>,
    pub zone: Zone,
    pub report_month: Option<ReportMonth>,
    pub log_format: LogFormat,
}

impl DashboardConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let now = get(NOW_VAR)
            .map(|raw| {
                DateTime::parse_from_rfc3339(raw.trim())
                    .map(|dt| dt.with_timezone(&Utc))
                    .with_context(|| format!("{NOW_VAR} must be RFC 3339, got `{raw}`"))
            })
            .transpose()?;

        let zone = get(TIMEZONE_VAR)
            .map(|raw| Zone::parse(&raw).with_context(|| format!("invalid {TIMEZONE_VAR}")))
            .transpose()?
            .unwrap_or(Zone::Local);

        let report_month = get(REPORT_MONTH_VAR)
            .map(|raw| parse_report_month(&raw).with_context(|| format!("invalid {REPORT_MONTH_VAR}")))
            .transpose()?;

        let log_format = match get(LOG_FORMAT_VAR) {
            Some(raw) => LogFormat::parse(&raw)
                .ok_or_else(|| anyhow!("{LOG_FORMAT_VAR} must be `json` or `pretty`, got `{raw}`"))?,
            None => LogFormat::default(),
        };

        Ok(Self {
            orders_path: get(ORDERS_PATH_VAR)
                .unwrap_or_else(|| "orders.json".to_string())
                .into(),
            products_path: get(PRODUCTS_PATH_VAR)
                .unwrap_or_else(|| "products.json".to_string())
                .into(),
            now,
            zone,
            report_month,
            log_format,
        })
    }
}

/// `current`, or `YYYY-MM` with a 1-based month.
fn parse_report_month(raw: &str) -> anyhow::Result<ReportMonth> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("current") {
        return Ok(ReportMonth::Current);
    }

    let (year, month) = raw
        .split_once('-')
        .ok_or_else(|| anyhow!("expected YYYY-MM, got `{raw}`"))?;
    let year: i32 = year
        .parse()
        .with_context(|| format!("invalid year in `{raw}`"))?;
    let month: u32 = month
        .parse()
        .with_context(|| format!("invalid month in `{raw}`"))?;
    if !(1..=12).contains(&month) {
        bail!("month must be 01..=12, got `{raw}`");
    }
    Ok(ReportMonth::Fixed(ReportPeriod::new(year, month - 1)?))
}
