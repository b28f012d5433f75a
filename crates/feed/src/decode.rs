use chrono::{DateTime, Utc};

use storefront_catalog::Product;
use storefront_core::{Amount, CustomerId, DomainError, DomainResult, OrderId, ProductId};
use storefront_orders::{LineItem, NewOrder, Order, OrderStatus, PaymentType, ShippingAddress};

use crate::dto::{LineItemRecord, OrderRecord, OrdersResponse, ProductRecord, ProductsResponse};
use crate::error::{FeedError, RecordKind};

/// Decode an orders response body into validated orders, in backend order.
///
/// The first invalid record aborts the whole decode; partial snapshots are
/// never returned.
pub fn decode_orders(body: &str) -> Result<Vec<Order>, FeedError> {
    let response: OrdersResponse = serde_json::from_str(body)?;
    if !response.success {
        tracing::warn!(message = ?response.message, "orders request rejected by backend");
        return Err(FeedError::rejected(response.message));
    }

    let orders = response
        .orders
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            order_from_record(record).map_err(|source| FeedError::Contract {
                kind: RecordKind::Order,
                index,
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(count = orders.len(), "decoded orders");
    Ok(orders)
}

/// Decode a product list response body into validated products.
pub fn decode_products(body: &str) -> Result<Vec<Product>, FeedError> {
    let response: ProductsResponse = serde_json::from_str(body)?;
    if !response.success {
        tracing::warn!(message = ?response.message, "product list request rejected by backend");
        return Err(FeedError::rejected(response.message));
    }

    let products = response
        .products
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            product_from_record(record).map_err(|source| FeedError::Contract {
                kind: RecordKind::Product,
                index,
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(count = products.len(), "decoded products");
    Ok(products)
}

pub fn order_from_record(record: OrderRecord) -> DomainResult<Order> {
    let id = OrderId::new(required(record.id, "_id")?)?;
    let customer_id = record.user_id.map(CustomerId::new).transpose()?;
    let amount = Amount::new(required(record.amount, "amount")?)?;
    let status = OrderStatus::from(required(record.status, "status")?);
    let payment_type = PaymentType::from(required(record.payment_type, "paymentType")?);
    let created_at = parse_timestamp(&required(record.created_at, "createdAt")?)?;

    let items = required(record.items, "items")?
        .into_iter()
        .map(line_item_from_record)
        .collect::<DomainResult<Vec<_>>>()?;

    Ok(Order::new(NewOrder {
        id,
        customer_id,
        created_at,
        amount,
        status,
        payment_type,
        is_paid: record.is_paid,
        items,
        address: record.address.map(ShippingAddress::new).unwrap_or_default(),
    }))
}

pub fn product_from_record(record: ProductRecord) -> DomainResult<Product> {
    Product::new(
        ProductId::new(required(record.id, "_id")?)?,
        required(record.name, "name")?,
        record.category.unwrap_or_default(),
        Amount::new(required(record.offer_price, "offerPrice")?)?,
        required(record.in_stock, "inStock")?,
    )
}

fn line_item_from_record(record: LineItemRecord) -> DomainResult<LineItem> {
    let product = required(record.product, "items[].product")?;
    let quantity = required(record.quantity, "items[].quantity")?;
    let quantity = u32::try_from(quantity)
        .map_err(|_| DomainError::validation(format!("quantity out of range: {quantity}")))?;

    LineItem::new(ProductId::new(product.id())?, quantity)
}

fn required<T>(value: Option<T>, field: &str) -> DomainResult<T> {
    value.ok_or_else(|| DomainError::missing_field(field))
}

fn parse_timestamp(raw: &str) -> DomainResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DomainError::validation(format!("createdAt `{raw}`: {e}")))
}
