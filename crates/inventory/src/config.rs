use serde::{Deserialize, Serialize};

use stockpilot_core::{DomainError, DomainResult};

/// Thresholds and horizons used by the analytics engine.
///
/// Defaults reproduce the dashboard's long-standing behaviour: 10-unit low and
/// minimum stock thresholds, 7 safety-stock days, a 30-day lookback, a 14-day
/// reorder horizon, and a 15-unit reorder floor.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// A product is low on stock when strictly below this many units.
    pub low_stock_threshold: u64,
    /// A product at or below this many units is critical and always suggested.
    pub min_stock_threshold: u64,
    /// Days of projected demand the reorder point must cover.
    pub safety_stock_days: u32,
    /// Length of the trailing sales window, in days.
    pub lookback_days: u32,
    /// Days of projected demand a reorder should cover.
    pub reorder_horizon_days: u32,
    /// Smallest quantity ever suggested for a reorder.
    pub min_reorder_quantity: u64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            low_stock_threshold: 10,
            min_stock_threshold: 10,
            safety_stock_days: 7,
            lookback_days: 30,
            reorder_horizon_days: 14,
            min_reorder_quantity: 15,
        }
    }
}

impl AnalyticsConfig {
    pub fn with_low_stock_threshold(mut self, units: u64) -> Self {
        self.low_stock_threshold = units;
        self
    }

    pub fn with_min_stock_threshold(mut self, units: u64) -> Self {
        self.min_stock_threshold = units;
        self
    }

    pub fn with_safety_stock_days(mut self, days: u32) -> Self {
        self.safety_stock_days = days;
        self
    }

    pub fn with_lookback_days(mut self, days: u32) -> Self {
        self.lookback_days = days;
        self
    }

    pub fn with_reorder_horizon_days(mut self, days: u32) -> Self {
        self.reorder_horizon_days = days;
        self
    }

    pub fn with_min_reorder_quantity(mut self, units: u64) -> Self {
        self.min_reorder_quantity = units;
        self
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.lookback_days == 0 {
            return Err(DomainError::validation("lookback_days must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dashboard_constants() {
        let cfg = AnalyticsConfig::default();
        assert_eq!(cfg.low_stock_threshold, 10);
        assert_eq!(cfg.min_stock_threshold, 10);
        assert_eq!(cfg.safety_stock_days, 7);
        assert_eq!(cfg.lookback_days, 30);
        assert_eq!(cfg.reorder_horizon_days, 14);
        assert_eq!(cfg.min_reorder_quantity, 15);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_lookback_is_rejected() {
        let cfg = AnalyticsConfig::default().with_lookback_days(0);
        assert!(matches!(cfg.validate(), Err(DomainError::Validation(_))));
    }
}
