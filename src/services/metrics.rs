use crate::analytics::DashboardResults;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

/// Counters for dashboard computations and their degraded outcomes
#[derive(Debug, Default)]
pub struct Metrics {
    /// Total dashboard computations completed
    pub dashboards_computed: AtomicU64,
    /// Badges that fell back to "N/A"
    pub badge_fallbacks: AtomicU64,
    /// Computations whose consistency chart had no data
    pub consistency_no_data: AtomicU64,
    /// Requests rejected for a malformed filter selection
    pub requests_rejected: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one computation and the fallbacks it produced
    pub fn record_dashboard(&self, results: &DashboardResults) {
        self.dashboards_computed.fetch_add(1, Ordering::Relaxed);

        let badges = &results.badges;
        let fallbacks = [&badges.most_successful_team, &badges.most_impactful_player]
            .into_iter()
            .filter(|b| b.as_str() == crate::analytics::NOT_AVAILABLE)
            .count() as u64;
        if fallbacks > 0 {
            self.badge_fallbacks.fetch_add(fallbacks, Ordering::Relaxed);
        }

        if results.team_consistency_message.is_some() {
            self.consistency_no_data.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn inc_requests_rejected(&self) {
        self.requests_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn summary(&self) -> String {
        format!(
            "dashboards={} badge_fallbacks={} consistency_no_data={} rejected={}",
            self.dashboards_computed.load(Ordering::Relaxed),
            self.badge_fallbacks.load(Ordering::Relaxed),
            self.consistency_no_data.load(Ordering::Relaxed),
            self.requests_rejected.load(Ordering::Relaxed),
        )
    }

    /// Export metrics in Prometheus format
    pub fn prometheus(&self, uptime_seconds: u64, team_rows: usize, player_rows: usize) -> String {
        format!(
            r#"# HELP statistella_uptime_seconds Uptime in seconds
# TYPE statistella_uptime_seconds counter
statistella_uptime_seconds {}

# HELP statistella_team_rows Team-game rows loaded
# TYPE statistella_team_rows gauge
statistella_team_rows {}

# HELP statistella_player_rows Player-game rows loaded
# TYPE statistella_player_rows gauge
statistella_player_rows {}

# HELP statistella_dashboards_computed_total Dashboard computations completed
# TYPE statistella_dashboards_computed_total counter
statistella_dashboards_computed_total {}

# HELP statistella_badge_fallbacks_total Badges that fell back to N/A
# TYPE statistella_badge_fallbacks_total counter
statistella_badge_fallbacks_total {}

# HELP statistella_consistency_no_data_total Computations without consistency data
# TYPE statistella_consistency_no_data_total counter
statistella_consistency_no_data_total {}

# HELP statistella_requests_rejected_total Requests rejected for malformed filters
# TYPE statistella_requests_rejected_total counter
statistella_requests_rejected_total {}
"#,
            uptime_seconds,
            team_rows,
            player_rows,
            self.dashboards_computed.load(Ordering::Relaxed),
            self.badge_fallbacks.load(Ordering::Relaxed),
            self.consistency_no_data.load(Ordering::Relaxed),
            self.requests_rejected.load(Ordering::Relaxed),
        )
    }

    /// Log current counters
    pub fn log_status(&self) {
        info!("{}", self.summary());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::compute;
    use crate::config::AnalyticsConfig;
    use crate::dataset::Dataset;
    use crate::domain::FilterSelection;

    #[test]
    fn test_empty_dashboard_counts_fallbacks() {
        let metrics = Metrics::new();
        let dataset = Dataset::new(Vec::new(), Vec::new());
        let results = compute(&dataset, &FilterSelection::default(), &AnalyticsConfig::default());

        metrics.record_dashboard(&results);
        metrics.record_dashboard(&results);

        assert_eq!(metrics.dashboards_computed.load(Ordering::Relaxed), 2);
        assert_eq!(metrics.badge_fallbacks.load(Ordering::Relaxed), 4);
        assert_eq!(metrics.consistency_no_data.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn test_prometheus_output() {
        let metrics = Metrics::new();
        metrics.inc_requests_rejected();

        let text = metrics.prometheus(42, 10, 20);
        assert!(text.contains("statistella_uptime_seconds 42"));
        assert!(text.contains("statistella_player_rows 20"));
        assert!(text.contains("statistella_requests_rejected_total 1"));
        assert!(text.contains("# TYPE statistella_dashboards_computed_total counter"));
    }
}
