use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use storefront_analytics::{MonthlyReport, ReportPeriod, summarize};
use storefront_catalog::Product;
use storefront_core::{Amount, OrderId, ProductId};
use storefront_orders::{LineItem, NewOrder, Order, OrderStatus, PaymentType, ShippingAddress};

const STATUSES: [OrderStatus; 4] = OrderStatus::SELECTABLE;

fn bench_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap()
}

fn catalog(size: usize) -> Vec<Product> {
    (0..size)
        .map(|i| {
            Product::new(
                ProductId::new(format!("product-{i}")).unwrap(),
                format!("Product {i}"),
                format!("Category {}", i % 7),
                Amount::new(10.0 + i as f64).unwrap(),
                i % 5 != 0,
            )
            .unwrap()
        })
        .collect()
}

/// Orders spread hourly backwards from `bench_now`, each with two line items.
fn order_history(size: usize, products: usize) -> Vec<Order> {
    (0..size)
        .map(|i| {
            let items = vec![
                LineItem::new(ProductId::new(format!("product-{}", i % products)).unwrap(), 1)
                    .unwrap(),
                LineItem::new(
                    ProductId::new(format!("product-{}", (i * 7) % products)).unwrap(),
                    (i % 3 + 1) as u32,
                )
                .unwrap(),
            ];

            Order::new(NewOrder {
                id: OrderId::new(format!("order-{i:08}")).unwrap(),
                customer_id: None,
                created_at: bench_now() - TimeDelta::hours(i as i64),
                amount: Amount::new(50.0 + (i % 100) as f64).unwrap(),
                status: STATUSES[i % STATUSES.len()].clone(),
                payment_type: if i % 2 == 0 {
                    PaymentType::Cod
                } else {
                    PaymentType::Online
                },
                is_paid: i % 2 == 1,
                items,
                address: ShippingAddress::default(),
            })
        })
        .collect()
}

fn bench_summarize(c: &mut Criterion) {
    let mut group = c.benchmark_group("dashboard_summary");
    let products = catalog(200);

    for size in [100usize, 1_000, 10_000] {
        let orders = order_history(size, products.len());
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &orders, |b, orders| {
            b.iter(|| summarize(black_box(orders), black_box(&products), bench_now(), &Utc));
        });
    }

    group.finish();
}

fn bench_monthly_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("monthly_report");
    let products = catalog(200);
    let period = ReportPeriod::new(2024, 1).unwrap();

    for size in [100usize, 1_000, 10_000] {
        let orders = order_history(size, products.len());
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &orders, |b, orders| {
            b.iter(|| MonthlyReport::build(black_box(orders), black_box(&products), period, &Utc));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_summarize, bench_monthly_report);
criterion_main!(benches);
