//! Offline dashboard: reads saved backend responses from disk and prints the
//! aggregated dashboard (and optionally a monthly report) as JSON.

pub mod config;
pub mod render;

pub use config::{DashboardConfig, ReportMonth, Zone};
pub use render::{DashboardOutput, render, run};
