//! `storefront-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the catalog, order
//! and analytics crates (no IO, no HTTP, no storage).

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use aggregate::{Aggregate, AggregateRoot, Event};
pub use entity::{Entity, index_by_id};
pub use error::{DomainError, DomainResult};
pub use id::{CustomerId, OrderId, ProductId};
pub use money::Amount;
pub use value_object::ValueObject;
