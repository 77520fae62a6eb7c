//! Dashboard metrics and reorder suggestions.
//!
//! Both computations are pure functions of a product list, a sales list, and a
//! reference instant `now`. They never fail: empty input yields zeroed metrics
//! and no suggestions, and malformed quantities are classified as zero stock.

mod metrics;
mod reorder;

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use stockpilot_core::ProductId;

use crate::config::AnalyticsConfig;
use crate::product::Product;
use crate::sale::{SaleEvent, SalesHistory};
use crate::window::LookbackWindow;

pub use metrics::DashboardMetrics;
pub use reorder::ReorderSuggestion;

/// Analytics engine bound to a configuration.
///
/// Holds no state besides its configuration, so one instance can be shared
/// freely across threads and refreshes.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct InventoryAnalytics {
    config: AnalyticsConfig,
}

impl InventoryAnalytics {
    pub fn new(config: AnalyticsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    fn window(&self, now: DateTime<Utc>) -> LookbackWindow {
        LookbackWindow::ending_at(now, self.config.lookback_days)
    }

    /// Stock counts and trailing-window sales volume as of `now`.
    pub fn dashboard_metrics(
        &self,
        products: &[Product],
        sales: &[SaleEvent],
        now: DateTime<Utc>,
    ) -> DashboardMetrics {
        warn_malformed(products);
        let metrics = metrics::dashboard_metrics(products, sales, &self.window(now), &self.config);
        debug!(
            total = metrics.total_products,
            low = metrics.low_stock_count,
            recent_sales = metrics.last_30_day_sales,
            "computed dashboard metrics"
        );
        metrics
    }

    pub fn dashboard_metrics_now(
        &self,
        products: &[Product],
        sales: &[SaleEvent],
    ) -> DashboardMetrics {
        self.dashboard_metrics(products, sales, Utc::now())
    }

    /// Reorder suggestions as of `now`, in the order of `products`.
    ///
    /// Sales whose product is not part of `products` are ignored.
    pub fn reorder_suggestions(
        &self,
        products: &[Product],
        sales: &[SaleEvent],
        now: DateTime<Utc>,
    ) -> Vec<ReorderSuggestion> {
        warn_malformed(products);
        let history = SalesHistory::within(sales, &self.window(now));

        let suggestions: Vec<ReorderSuggestion> = products
            .iter()
            .filter_map(|p| reorder::evaluate(p, &history, &self.config))
            .collect();

        let known: HashSet<&ProductId> = products.iter().map(Product::id_typed).collect();
        let orphaned = history.product_ids().filter(|id| !known.contains(id)).count();
        debug!(
            products = products.len(),
            suggestions = suggestions.len(),
            orphaned_products = orphaned,
            "computed reorder suggestions"
        );

        suggestions
    }

    pub fn reorder_suggestions_now(
        &self,
        products: &[Product],
        sales: &[SaleEvent],
    ) -> Vec<ReorderSuggestion> {
        self.reorder_suggestions(products, sales, Utc::now())
    }
}

/// [`InventoryAnalytics::dashboard_metrics`] with the default configuration.
pub fn compute_dashboard_metrics(
    products: &[Product],
    sales: &[SaleEvent],
    now: DateTime<Utc>,
) -> DashboardMetrics {
    InventoryAnalytics::default().dashboard_metrics(products, sales, now)
}

/// [`InventoryAnalytics::reorder_suggestions`] with the default configuration.
pub fn compute_reorder_suggestions(
    products: &[Product],
    sales: &[SaleEvent],
    now: DateTime<Utc>,
) -> Vec<ReorderSuggestion> {
    InventoryAnalytics::default().reorder_suggestions(products, sales, now)
}

fn warn_malformed(products: &[Product]) {
    for p in products.iter().filter(|p| p.quantity() < 0) {
        warn!(
            product = %p.id_typed(),
            quantity = p.quantity(),
            "negative quantity treated as 0"
        );
    }
}
