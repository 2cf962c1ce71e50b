//! Collector tally and threshold classification

use crate::model::Collector;
use crate::status::engine::CheckConfig;
use crate::status::schema::ServiceState;
use log::debug;

/// Counters gathered from one collector listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectorStats {
    pub total: u64,
    pub failing: u64,
    pub offline: u64,
}

impl CollectorStats {
    /// Single pass over the listing
    ///
    /// Inactive collectors count as offline whatever their status code.
    /// Active collectors with a positive or missing status count as failing.
    pub fn tally(collectors: &[Collector]) -> Self {
        let mut stats = Self::default();

        for collector in collectors {
            stats.total += 1;

            if !collector.active {
                debug!("collector {} is inactive", collector.label());
                stats.offline += 1;
                continue;
            }

            match collector.health() {
                Some(health) if !health.is_failing() => {}
                health => {
                    debug!("collector {} is failing ({health:?})", collector.label());
                    stats.failing += 1;
                }
            }
        }

        stats
    }

    /// Failing and offline collectors together
    pub fn unhealthy(&self) -> u64 {
        self.failing + self.offline
    }
}

/// Non-OK classification of a collector tally
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub state: ServiceState,
    pub message: String,
}

impl Verdict {
    fn new(state: ServiceState, message: String) -> Self {
        Self { state, message }
    }
}

/// Applies the thresholds, then the expected collector count
///
/// Returns `None` when the tally is healthy.
pub fn classify(stats: &CollectorStats, config: &CheckConfig) -> Option<Verdict> {
    let unhealthy = stats.unhealthy();

    if unhealthy >= config.thresholds.critical {
        return Some(Verdict::new(ServiceState::Critical, unhealthy_message(stats)));
    }

    if unhealthy >= config.thresholds.warning {
        return Some(Verdict::new(ServiceState::Warning, unhealthy_message(stats)));
    }

    if config.expected_collectors > 0 && config.expected_collectors != stats.total {
        return Some(Verdict::new(
            ServiceState::Critical,
            format!(
                "Expecting {} collectors but {} reported in",
                config.expected_collectors, stats.total
            ),
        ));
    }

    None
}

fn unhealthy_message(stats: &CollectorStats) -> String {
    if stats.failing > 0 && stats.offline > 0 {
        format!(
            "{} collectors are failing and {} are inactive",
            stats.failing, stats.offline
        )
    } else if stats.failing > 0 {
        format!("{} collectors are failing", stats.failing)
    } else {
        format!("{} collectors are inactive", stats.offline)
    }
}
