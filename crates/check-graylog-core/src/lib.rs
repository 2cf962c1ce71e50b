//! Graylog2 cluster health evaluation for Nagios-style monitoring.
//!
//! The crate is split along the two halves of a check run:
//!
//! - [`client`]: blocking, authenticated access to the Graylog2 REST API
//! - [`status`]: the evaluator that turns API snapshots into a [`CheckReport`]
//!
//! # Check Flow
//!
//! ```text
//! BaseUrl::parse(-l)
//!     ↓
//! GraylogClient::new(ClientConfig)
//!     ↓
//! Evaluator::run()
//!     → /system                 (processing, lifecycle, lb_status)
//!     → /system/indexer/failures
//!     → /system/throughput
//!     → /system/inputs
//!     → /count/total
//!     → collector plugin listing (tally total / failing / offline)
//!     → thresholds, expected collector count
//!     ↓
//! CheckReport  "<LEVEL> - <message>|<perfdata>"
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use check_graylog_core::{
//!     BaseUrl, CheckConfig, ClientConfig, Credentials, Evaluator, GraylogClient,
//! };
//!
//! let base = BaseUrl::parse("http://localhost:12900").unwrap();
//! let client = GraylogClient::new(ClientConfig {
//!     base,
//!     credentials: Credentials::new("admin", "secret"),
//!     insecure: false,
//! })
//! .unwrap();
//!
//! let report = Evaluator::new(CheckConfig::default()).run(&client);
//! println!("{report}");
//! std::process::exit(report.state.exit_code());
//! ```

// Core modules
pub mod client;
pub mod error;
pub mod model;
pub mod status;
pub mod target;

// Re-export commonly used types
pub use client::{ClientConfig, FetchError, GraylogApi, GraylogClient};
pub use error::CheckError;
pub use status::{CheckConfig, CheckReport, Evaluator, PerfData, ServiceState, Thresholds};
pub use target::{BaseUrl, Credentials, TargetError};

pub type Result<T> = std::result::Result<T, CheckError>;
