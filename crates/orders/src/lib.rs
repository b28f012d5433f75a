//! Orders domain module.
//!
//! Orders as placed by customers and managed from the seller console: status
//! and payment vocabularies, line items, and the cancel/update-status rules.
//! Pure domain logic (no IO, no HTTP, no storage).

pub mod order;
pub mod status;

pub use order::{
    Actor, CancelOrder, LineItem, NewOrder, Order, OrderCancelled, OrderCommand, OrderEvent,
    PaymentState, ShippingAddress, StatusChanged, UpdateStatus,
};
pub use status::{OrderStatus, PaymentType};
