//! Report types: service state, performance data and the final check line

use crate::error::CheckError;
use log::debug;
use std::fmt;
use std::time::Duration;

/// Monitoring plugin state, ordered by severity for OK..CRITICAL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceState {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl ServiceState {
    /// Plugin exit code: 0, 1, 2 or 3
    pub fn exit_code(self) -> i32 {
        match self {
            ServiceState::Ok => 0,
            ServiceState::Warning => 1,
            ServiceState::Critical => 2,
            ServiceState::Unknown => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ServiceState::Ok => "OK",
            ServiceState::Warning => "WARNING",
            ServiceState::Critical => "CRITICAL",
            ServiceState::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for ServiceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Performance data appended to every report
///
/// The default value is all zeros; runs that end before collectors are
/// tallied report it unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PerfData {
    pub elapsed: Duration,
    pub total_events: u64,
    pub sources: u64,
    pub throughput: f64,
    pub index_failures: u64,
    pub collectors: u64,
    pub collector_failure: u64,
    pub collector_offline: u64,
}

impl fmt::Display for PerfData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "time={:.6};;;; total={};;;; sources={};;;; throughput={:.0};;;; \
             index_failures={};;;; collectors={};;;; collector_failure={};;;; \
             collector_offline={};;;;",
            self.elapsed.as_secs_f64(),
            self.total_events,
            self.sources,
            self.throughput,
            self.index_failures,
            self.collectors,
            self.collector_failure,
            self.collector_offline,
        )
    }
}

/// Outcome of one check run
#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport {
    pub state: ServiceState,
    pub message: String,
    pub perf: PerfData,
}

impl CheckReport {
    pub fn new(state: ServiceState, message: impl Into<String>, perf: PerfData) -> Self {
        Self {
            state,
            message: message.into(),
            perf,
        }
    }

    /// Report for a run that stopped on `err`
    ///
    /// Carries zeroed performance data. The underlying error chain is only
    /// logged at debug level.
    pub fn from_error(err: &CheckError) -> Self {
        let mut source = std::error::Error::source(err);
        while let Some(cause) = source {
            debug!("caused by: {cause}");
            source = cause.source();
        }
        if let Some(url) = err.fetch_url() {
            debug!("failed request: {url}");
        }

        Self::new(err.state(), err.to_string(), PerfData::default())
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}|{}", self.state, self.message, self.perf)
    }
}
