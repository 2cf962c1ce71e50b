//! Check evaluation and Nagios-style reporting

pub mod checks;
pub mod engine;
pub mod schema;

pub use engine::{CheckConfig, Evaluator, Thresholds};
pub use schema::{CheckReport, PerfData, ServiceState};
