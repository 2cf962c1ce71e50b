//! Typed response models for the Graylog2 REST endpoints
//!
//! Only the fields the check consumes are modelled; everything else in the
//! payloads is ignored. A missing required field fails deserialization.

use serde::Deserialize;

/// `GET /system`
pub const SYSTEM_PATH: &str = "/system";
/// `GET /system/indexer/failures`
pub const INDEXER_FAILURES_PATH: &str = "/system/indexer/failures";
/// `GET /system/throughput`
pub const THROUGHPUT_PATH: &str = "/system/throughput";
/// `GET /system/inputs`
pub const INPUTS_PATH: &str = "/system/inputs";
/// `GET /count/total`
pub const TOTAL_COUNT_PATH: &str = "/count/total";
/// `GET` listing of the collector plugin
pub const COLLECTORS_PATH: &str = "/plugins/org.graylog.plugins.collector/collectors";

/// Node overview from `/system`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SystemOverview {
    pub is_processing: bool,
    /// Lifecycle phase, `"running"` when healthy
    pub lifecycle: String,
    /// Load balancer status, `"alive"` when healthy
    pub lb_status: String,
}

/// Indexer failure count from `/system/indexer/failures`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IndexerFailures {
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Throughput {
    pub throughput: f64,
}

/// Input listing from `/system/inputs`; only the count is used
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InputList {
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TotalCount {
    pub events: u64,
}

/// Collector listing from the collector plugin
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CollectorList {
    pub collectors: Vec<Collector>,
}

/// One registered collector
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Collector {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub node_id: Option<String>,
    pub active: bool,
    #[serde(default)]
    pub node_details: Option<NodeDetails>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NodeDetails {
    #[serde(default)]
    pub status: Option<CollectorStatus>,
}

/// Health report a collector sends along with its heartbeat
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CollectorStatus {
    pub status: i64,
}

/// Decoded collector status code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectorHealth {
    /// Code 0
    Running,
    /// Code 1
    Unknown,
    /// Code 2
    Failing,
    /// Any other code
    Unrecognized(i64),
}

impl CollectorHealth {
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Running,
            1 => Self::Unknown,
            2 => Self::Failing,
            other => Self::Unrecognized(other),
        }
    }

    /// Whether the collector counts towards the failing total
    ///
    /// Every positive code counts, including `Unknown` and unrecognized ones.
    pub fn is_failing(self) -> bool {
        match self {
            Self::Running => false,
            Self::Unknown | Self::Failing => true,
            Self::Unrecognized(code) => code > 0,
        }
    }
}

impl Collector {
    /// Status code reported under `node_details.status.status`
    pub fn status_code(&self) -> Option<i64> {
        self.node_details
            .as_ref()
            .and_then(|details| details.status.as_ref())
            .map(|status| status.status)
    }

    /// Decoded health; `None` when the collector reported no status
    pub fn health(&self) -> Option<CollectorHealth> {
        self.status_code().map(CollectorHealth::from_code)
    }

    /// Best available identifier for log output
    pub fn label(&self) -> &str {
        self.node_id
            .as_deref()
            .or(self.id.as_deref())
            .unwrap_or("<unnamed>")
    }
}
