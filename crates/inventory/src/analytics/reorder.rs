use serde::{Deserialize, Serialize};

use stockpilot_core::{ProductId, ValueObject};

use crate::config::AnalyticsConfig;
use crate::product::Product;
use crate::sale::SalesHistory;

/// Replenishment recommendation for a single product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderSuggestion {
    pub product_id: ProductId,
    pub product_name: String,
    pub current_quantity: u64,
    pub average_daily_consumption: f64,
    /// Stock level at which replenishment is due, from the safety-stock window.
    pub reorder_point: u64,
    /// `None` when there is no sales history to project from.
    pub suggested_reorder_quantity: Option<u64>,
    pub is_critical: bool,
    pub rationale: String,
}

impl ValueObject for ReorderSuggestion {}

impl ReorderSuggestion {
    pub fn has_projection(&self) -> bool {
        self.suggested_reorder_quantity.is_some()
    }
}

/// Evaluate one product against its in-window sales.
///
/// Day-based projections use exact integer ceiling division over the units sold
/// rather than rounding the floating-point daily average, so
/// `ceil(units / lookback * days)` never drifts by one on representation error.
pub(super) fn evaluate(
    product: &Product,
    history: &SalesHistory<'_>,
    config: &AnalyticsConfig,
) -> Option<ReorderSuggestion> {
    let lookback = u64::from(config.lookback_days.max(1));
    let on_hand = product.on_hand();
    let recent_units = history.units_sold(product.id_typed());

    let average_daily_consumption = if recent_units > 0 {
        recent_units as f64 / lookback as f64
    } else {
        0.0
    };
    let reorder_point = project(recent_units, config.safety_stock_days, lookback);

    let is_critical = on_hand <= config.min_stock_threshold;
    let below_reorder_point = recent_units > 0 && on_hand <= reorder_point;
    if !is_critical && !below_reorder_point {
        return None;
    }

    let suggested_reorder_quantity = (recent_units > 0).then(|| {
        project(recent_units, config.reorder_horizon_days, lookback)
            .saturating_sub(on_hand)
            .max(config.min_reorder_quantity)
    });

    let rationale = rationale(
        on_hand,
        is_critical,
        average_daily_consumption,
        suggested_reorder_quantity,
    );

    Some(ReorderSuggestion {
        product_id: product.id_typed().clone(),
        product_name: product.name().to_string(),
        current_quantity: on_hand,
        average_daily_consumption,
        reorder_point,
        suggested_reorder_quantity,
        is_critical,
        rationale,
    })
}

/// `ceil(units / lookback * days)` in integer arithmetic.
fn project(units: u64, days: u32, lookback: u64) -> u64 {
    units.saturating_mul(u64::from(days)).div_ceil(lookback)
}

fn rationale(
    on_hand: u64,
    is_critical: bool,
    average_daily_consumption: f64,
    suggested: Option<u64>,
) -> String {
    let mut text = format!("Current stock: {on_hand}.");
    if is_critical {
        text.push_str(" Warning: stock is critically low!");
    }
    match suggested {
        Some(units) => text.push_str(&format!(
            " Estimated daily consumption: {average_daily_consumption:.1}. \
             Suggested restock of about {units} units."
        )),
        None => text.push_str(
            " Sales history is insufficient for a detailed projection. \
             Consider restocking as needed.",
        ),
    }
    text
}
