//! Inventory domain module.
//!
//! Product and sale records plus the analytics engine that turns a snapshot of
//! them into dashboard metrics and reorder suggestions. Everything here is
//! deterministic domain logic (no IO, no HTTP, no storage); callers fetch the
//! snapshot and decide how to render the results.

pub mod analytics;
pub mod config;
mod lenient;
pub mod product;
pub mod sale;
pub mod snapshot;
pub mod window;

pub use analytics::{
    DashboardMetrics, InventoryAnalytics, ReorderSuggestion, compute_dashboard_metrics,
    compute_reorder_suggestions,
};
pub use config::AnalyticsConfig;
pub use product::{Product, ProductEdit, StockStatus};
pub use sale::{SaleEvent, SalesHistory};
pub use snapshot::InventorySnapshot;
pub use window::LookbackWindow;
