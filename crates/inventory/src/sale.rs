use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockpilot_core::{ProductId, SaleId};

use crate::lenient;
use crate::window::LookbackWindow;

/// A recorded sale. Created once per transaction and never modified.
///
/// `product_id` is a weak reference: the product may since have been deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<SaleId>,
    product_id: ProductId,
    #[serde(default)]
    product_name: String,
    #[serde(default, deserialize_with = "lenient::integer")]
    quantity_sold: i64,
    sale_date: DateTime<Utc>,
}

impl SaleEvent {
    pub fn new(
        product_id: ProductId,
        product_name: impl Into<String>,
        quantity_sold: u64,
        sale_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: None,
            product_id,
            product_name: product_name.into(),
            quantity_sold: i64::try_from(quantity_sold).unwrap_or(i64::MAX),
            sale_date,
        }
    }

    pub fn with_id(mut self, id: SaleId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn id(&self) -> Option<SaleId> {
        self.id
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    /// Stored quantity, possibly non-positive if the record is malformed.
    pub fn quantity_sold(&self) -> i64 {
        self.quantity_sold
    }

    /// Units counted towards totals; malformed negative quantities count as zero.
    pub fn units(&self) -> u64 {
        u64::try_from(self.quantity_sold).unwrap_or(0)
    }

    pub fn sale_date(&self) -> DateTime<Utc> {
        self.sale_date
    }
}

/// In-window units sold, grouped by product id.
///
/// Built once per computation so per-product lookups are constant time
/// regardless of sale volume.
#[derive(Debug, Clone, Default)]
pub struct SalesHistory<'a> {
    units_by_product: HashMap<&'a ProductId, u64>,
}

impl<'a> SalesHistory<'a> {
    pub fn within(sales: &'a [SaleEvent], window: &LookbackWindow) -> Self {
        let mut units_by_product: HashMap<&'a ProductId, u64> = HashMap::new();
        for sale in sales.iter().filter(|s| window.contains(s.sale_date)) {
            let units = units_by_product.entry(&sale.product_id).or_insert(0);
            *units = units.saturating_add(sale.units());
        }
        Self { units_by_product }
    }

    /// Units sold for `product_id` inside the window; zero when it has no history.
    pub fn units_sold(&self, product_id: &ProductId) -> u64 {
        self.units_by_product.get(product_id).copied().unwrap_or(0)
    }

    pub fn product_ids(&self) -> impl Iterator<Item = &'a ProductId> + '_ {
        self.units_by_product.keys().copied()
    }

    pub fn total_units(&self) -> u64 {
        self.units_by_product
            .values()
            .fold(0u64, |acc, u| acc.saturating_add(*u))
    }
}
