use std::fs;
use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Local, TimeZone, Utc};
use serde::Serialize;

use storefront_analytics::{DashboardSummary, MonthlyReport, summarize};
use storefront_catalog::Product;
use storefront_feed::{FeedError, decode_orders, decode_products};
use storefront_orders::Order;

use crate::config::{DashboardConfig, ReportMonth, Zone};

/// What the binary prints.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOutput {
    pub summary: DashboardSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_report: Option<MonthlyReport>,
}

/// Load both snapshots, aggregate them and return pretty-printed JSON.
pub fn run(config: &DashboardConfig) -> anyhow::Result<String> {
    let orders = load(&config.orders_path, decode_orders)?;
    let products = load(&config.products_path, decode_products)?;
    let now = config.now.unwrap_or_else(Utc::now);

    let output = match config.zone {
        Zone::Local => render(&orders, &products, now, config.report_month, &Local),
        Zone::Utc => render(&orders, &products, now, config.report_month, &Utc),
        Zone::Fixed(offset) => render(&orders, &products, now, config.report_month, &offset),
    };

    serde_json::to_string_pretty(&output).context("failed to serialize dashboard output")
}

pub fn render<Tz: TimeZone>(
    orders: &[Order],
    products: &[Product],
    now: DateTime<Utc>,
    report_month: Option<ReportMonth>,
    tz: &Tz,
) -> DashboardOutput {
    DashboardOutput {
        summary: summarize(orders, products, now, tz),
        monthly_report: report_month.map(|month| {
            MonthlyReport::build(orders, products, month.resolve(now, tz), tz)
        }),
    }
}

fn load<T>(path: &Path, decode: fn(&str) -> Result<Vec<T>, FeedError>) -> anyhow::Result<Vec<T>> {
    let body = fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;
    decode(&body).with_context(|| format!("failed to decode snapshot {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use storefront_analytics::ReportPeriod;
    use storefront_observability::LogFormat;
    use storefront_orders::OrderStatus;

    const ORDERS: &str = r#"{
        "success": true,
        "orders": [
            { "_id": "a1", "amount": 100, "status": "Placed", "paymentType": "COD",
              "createdAt": "2024-01-15T10:00:00Z", "items": [{ "product": "p1", "quantity": 1 }] },
            { "_id": "a2", "amount": 200, "status": "Delivered", "paymentType": "Online", "isPaid": true,
              "createdAt": "2024-01-20T10:00:00Z", "items": [{ "product": "p2", "quantity": 2 }] },
            { "_id": "a3", "amount": 50, "status": "Placed", "paymentType": "COD",
              "createdAt": "2024-02-01T10:00:00Z", "items": [{ "product": "p1", "quantity": 1 }] }
        ]
    }"#;

    const PRODUCTS: &str = r#"{
        "success": true,
        "products": [
            { "_id": "p1", "name": "Phone", "category": "Phones", "offerPrice": 100, "inStock": true },
            { "_id": "p2", "name": "Case", "category": "Accessories", "offerPrice": 100, "inStock": false }
        ]
    }"#;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 3, 12, 0, 0).unwrap()
    }

    #[test]
    fn render_includes_report_only_when_requested() {
        let orders = decode_orders(ORDERS).unwrap();
        let products = decode_products(PRODUCTS).unwrap();

        let without = render(&orders, &products, now(), None, &Utc);
        assert!(without.monthly_report.is_none());
        assert_eq!(without.summary.total_orders, 3);

        let period = ReportPeriod::new(2024, 0).unwrap();
        let with = render(&orders, &products, now(), Some(ReportMonth::Fixed(period)), &Utc);
        let report = with.monthly_report.expect("report requested");
        assert_eq!(report.total_orders, 2);
        assert_eq!(report.total_revenue, 300.0);
    }

    #[test]
    fn output_json_uses_camel_case_and_omits_missing_report() {
        let orders = decode_orders(ORDERS).unwrap();
        let products = decode_products(PRODUCTS).unwrap();

        let output = render(&orders, &products, now(), None, &Utc);
        let json = serde_json::to_value(&output).unwrap();

        assert!(json.get("monthlyReport").is_none());
        let summary = &json["summary"];
        assert_eq!(summary["statusCounts"][OrderStatus::Placed.as_str()], 2);
        assert_eq!(summary["stockStatus"]["inStock"], 1);
        assert_eq!(summary["stockStatus"]["outOfStock"], 1);
    }

    #[test]
    fn missing_snapshot_file_names_the_path() {
        let config = DashboardConfig {
            orders_path: PathBuf::from("/nonexistent/storefront/orders.json"),
            products_path: PathBuf::from("/nonexistent/storefront/products.json"),
            now: Some(now()),
            zone: Zone::Utc,
            report_month: None,
            log_format: LogFormat::Json,
        };

        let err = run(&config).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/storefront/orders.json"));
    }
}
