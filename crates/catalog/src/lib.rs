//! Catalog domain module.
//!
//! Products as the storefront sees them: a priced, categorized listing with a
//! stock flag. Pure domain logic (no IO, no HTTP, no storage).

pub mod product;

pub use product::Product;
