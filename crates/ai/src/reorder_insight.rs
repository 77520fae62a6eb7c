use chrono::{DateTime, Utc};
use serde_json::json;
use tracing::debug;

use stockpilot_inventory::{AnalyticsConfig, InventoryAnalytics, InventorySnapshot};

use crate::job::AiJob;
use crate::result::{AiError, AiResult};

/// Predictive restocking insight for an inventory snapshot.
///
/// Model:
/// - Project daily consumption from the trailing sales window.
/// - Flag products at or below the minimum stock level, or at or below their
///   safety-stock reorder point.
/// - Suggest enough units to cover the reorder horizon, never below the floor.
///
/// `score` is the number of suggested products. `confidence` is the share of
/// suggestions backed by a consumption projection (1.0 when nothing is suggested).
#[derive(Debug, Clone)]
pub struct ReorderInsightJob {
    input: InventorySnapshot,
    config: AnalyticsConfig,
    now: DateTime<Utc>,
}

impl ReorderInsightJob {
    pub fn new(input: InventorySnapshot, now: DateTime<Utc>) -> Self {
        Self {
            input,
            config: AnalyticsConfig::default(),
            now,
        }
    }

    pub fn with_config(mut self, config: AnalyticsConfig) -> Self {
        self.config = config;
        self
    }
}

impl AiJob for ReorderInsightJob {
    fn run(&self) -> Result<AiResult, AiError> {
        self.config
            .validate()
            .map_err(|e| AiError::InvalidInput(e.to_string()))?;

        let analytics = InventoryAnalytics::new(self.config);
        let metrics = self.input.dashboard_metrics(&analytics, self.now);
        let suggestions = self.input.reorder_suggestions(&analytics, self.now);

        let critical = suggestions.iter().filter(|s| s.is_critical).count();
        let projected = suggestions.iter().filter(|s| s.has_projection()).count();
        let confidence = if suggestions.is_empty() {
            1.0
        } else {
            projected as f64 / suggestions.len() as f64
        };

        let explanation = if suggestions.is_empty() {
            "no reorder suggestions at the moment; stock looks in order or sales history is limited"
                .to_string()
        } else {
            format!(
                "{} product(s) need restocking ({critical} critical) based on {}-day sales history",
                suggestions.len(),
                self.config.lookback_days
            )
        };

        debug!(
            suggestions = suggestions.len(),
            critical, projected, "reorder insight computed"
        );

        Ok(AiResult::new(suggestions.len() as f64, confidence)
            .with_explanation(explanation)
            .with_metadata(json!({
                "kind": "inventory.reorder_suggestions",
                "as_of": self.now.to_rfc3339(),
                "config": self.config,
                "metrics": metrics,
                "suggestions": suggestions,
            })))
    }
}
