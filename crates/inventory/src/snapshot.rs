use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockpilot_core::{DomainError, DomainResult, Entity, ProductId};

use crate::analytics::{DashboardMetrics, InventoryAnalytics, ReorderSuggestion};
use crate::product::Product;
use crate::sale::SaleEvent;

/// Products and sales as fetched together for one dashboard refresh.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventorySnapshot {
    pub products: Vec<Product>,
    pub sales: Vec<SaleEvent>,
}

impl InventorySnapshot {
    pub fn new(products: Vec<Product>, sales: Vec<SaleEvent>) -> Self {
        Self { products, sales }
    }

    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    /// Sell `units` of a product and append the resulting sale.
    ///
    /// The snapshot is unchanged when the sale is rejected.
    pub fn record_sale(
        &mut self,
        product_id: &ProductId,
        units: u64,
        at: DateTime<Utc>,
    ) -> DomainResult<&SaleEvent> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id() == product_id)
            .ok_or_else(|| DomainError::not_found(format!("product {product_id}")))?;

        let sale = product.sell(units, at)?;
        self.sales.push(sale);
        Ok(&self.sales[self.sales.len() - 1])
    }

    pub fn dashboard_metrics(
        &self,
        analytics: &InventoryAnalytics,
        now: DateTime<Utc>,
    ) -> DashboardMetrics {
        analytics.dashboard_metrics(&self.products, &self.sales, now)
    }

    pub fn reorder_suggestions(
        &self,
        analytics: &InventoryAnalytics,
        now: DateTime<Utc>,
    ) -> Vec<ReorderSuggestion> {
        analytics.reorder_suggestions(&self.products, &self.sales, now)
    }
}
