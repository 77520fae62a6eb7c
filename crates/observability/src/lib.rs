//! Tracing/logging setup shared by StockPilot binaries.

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use crate::tracing::{LogFormat, ObservabilityConfig};

/// Initialize process-wide tracing with an explicit configuration.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init_with(config: &ObservabilityConfig) {
    tracing::init(config);
}
