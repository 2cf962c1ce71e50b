//! Check evaluator - runs the endpoint sequence and classifies the result

use crate::{
    client::GraylogApi,
    error::CheckError,
    status::{
        checks::{CollectorStats, classify, verify_system},
        schema::{CheckReport, PerfData, ServiceState},
    },
};
use log::debug;
use std::time::{Duration, Instant};

pub const DEFAULT_WARNING_THRESHOLD: u64 = 1;
pub const DEFAULT_CRITICAL_THRESHOLD: u64 = 2;

/// Unhealthy collector counts at which the check escalates (inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub warning: u64,
    pub critical: u64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            warning: DEFAULT_WARNING_THRESHOLD,
            critical: DEFAULT_CRITICAL_THRESHOLD,
        }
    }
}

/// Evaluation settings for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckConfig {
    pub thresholds: Thresholds,
    /// Number of collectors that must report in; 0 disables the check
    pub expected_collectors: u64,
}

/// Runs the check sequence against a [`GraylogApi`]
pub struct Evaluator {
    config: CheckConfig,
}

impl Evaluator {
    pub fn new(config: CheckConfig) -> Self {
        Self { config }
    }

    /// Runs the check; every outcome, including errors, becomes a report
    pub fn run<A: GraylogApi + ?Sized>(&self, api: &A) -> CheckReport {
        self.evaluate(api)
            .unwrap_or_else(|err| CheckReport::from_error(&err))
    }

    /// Runs the check, stopping at the first terminal condition
    ///
    /// # Errors
    ///
    /// Returns the first fetch failure or `/system` state violation.
    /// Threshold violations are returned as non-OK reports instead.
    pub fn evaluate<A: GraylogApi + ?Sized>(&self, api: &A) -> Result<CheckReport, CheckError> {
        let start = Instant::now();

        let system = api.system()?;
        verify_system(&system)?;

        let index = api.indexer_failures()?;
        let throughput = api.throughput()?;
        let inputs = api.inputs()?;
        let total = api.total_count()?;
        let listing = api.collectors()?;

        let stats = CollectorStats::tally(&listing.collectors);
        let elapsed = start.elapsed();
        debug!("collectors: {stats:?}, check took {elapsed:?}");

        let perf = PerfData {
            elapsed,
            total_events: total.events,
            sources: inputs.total,
            throughput: throughput.throughput,
            index_failures: index.total,
            collectors: stats.total,
            collector_failure: stats.failing,
            collector_offline: stats.offline,
        };

        let report = match classify(&stats, &self.config) {
            Some(verdict) => CheckReport::new(verdict.state, verdict.message, perf),
            None => {
                let message = summary(&perf, elapsed);
                CheckReport::new(ServiceState::Ok, message, perf)
            }
        };

        Ok(report)
    }
}

fn summary(perf: &PerfData, elapsed: Duration) -> String {
    format!(
        "Service is running!\n\
         {} total events processed\n\
         {} index failures\n\
         {:.0} throughput\n\
         {} sources\n\
         {} collectors detected\n\
         {} collectors offline\n\
         {} collectors failing\n\
         Check took {:?}",
        perf.total_events,
        perf.index_failures,
        perf.throughput,
        perf.sources,
        perf.collectors,
        perf.collector_offline,
        perf.collector_failure,
        elapsed,
    )
}
