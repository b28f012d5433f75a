//! `storefront-feed`: boundary between backend JSON and the domain.
//!
//! The fetch layer hands us response bodies from `/api/order/*` and
//! `/api/product/list`. This crate decodes them and validates every record
//! into domain types, so aggregation never sees a half-filled order.

pub mod decode;
pub mod dto;
pub mod error;

pub use decode::{decode_orders, decode_products, order_from_record, product_from_record};
pub use error::{FeedError, RecordKind};
