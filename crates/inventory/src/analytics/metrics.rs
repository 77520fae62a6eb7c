use serde::{Deserialize, Serialize};

use stockpilot_core::ValueObject;

use crate::config::AnalyticsConfig;
use crate::product::Product;
use crate::sale::SaleEvent;
use crate::window::LookbackWindow;

/// Aggregate stock counts shown on the dashboard.
///
/// Always satisfies `low_stock_count + healthy_stock_count == total_products`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_products: u64,
    pub low_stock_count: u64,
    pub healthy_stock_count: u64,
    /// Units sold inside the lookback window (30 days by default).
    #[serde(rename = "last30DaySales")]
    pub last_30_day_sales: u64,
}

impl ValueObject for DashboardMetrics {}

pub(super) fn dashboard_metrics(
    products: &[Product],
    sales: &[SaleEvent],
    window: &LookbackWindow,
    config: &AnalyticsConfig,
) -> DashboardMetrics {
    let total_products = products.len() as u64;
    let low_stock_count = products
        .iter()
        .filter(|p| p.stock_status(config.low_stock_threshold).is_low())
        .count() as u64;

    let last_30_day_sales = sales
        .iter()
        .filter(|s| window.contains(s.sale_date()))
        .fold(0u64, |acc, s| acc.saturating_add(s.units()));

    DashboardMetrics {
        total_products,
        low_stock_count,
        healthy_stock_count: total_products - low_stock_count,
        last_30_day_sales,
    }
}
