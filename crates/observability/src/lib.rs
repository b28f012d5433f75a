//! Process-wide log setup shared by the storefront binaries.

pub mod tracing;

pub use crate::tracing::{LogFormat, init, init_with};
