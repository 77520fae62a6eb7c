use chrono::{DateTime, Duration, Utc};

/// Trailing time window ending at a reference instant.
///
/// The start boundary is inclusive: an event stamped exactly `days` before the
/// reference instant is inside the window. Events after the reference instant
/// are not excluded.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LookbackWindow {
    start: DateTime<Utc>,
}

impl LookbackWindow {
    /// A window reaching back further than representable time starts at the
    /// earliest representable instant.
    pub fn ending_at(now: DateTime<Utc>, days: u32) -> Self {
        let start = Duration::try_days(i64::from(days))
            .and_then(|span| now.checked_sub_signed(span))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        Self { start }
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        at >= self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn start_boundary_is_inclusive() {
        let now = Utc.with_ymd_and_hms(2024, 3, 31, 0, 0, 0).unwrap();
        let window = LookbackWindow::ending_at(now, 30);

        assert_eq!(window.start(), Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
        assert!(window.contains(window.start()));
        assert!(!window.contains(window.start() - Duration::milliseconds(1)));
        assert!(window.contains(now));
    }

    #[test]
    fn oversized_lookback_saturates_at_earliest_instant() {
        let now = Utc.with_ymd_and_hms(2024, 3, 31, 0, 0, 0).unwrap();
        let window = LookbackWindow::ending_at(now, u32::MAX);

        assert_eq!(window.start(), DateTime::<Utc>::MIN_UTC);
        assert!(window.contains(Utc.with_ymd_and_hms(1, 1, 1, 0, 0, 0).unwrap()));
    }
}
