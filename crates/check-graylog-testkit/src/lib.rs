//! Test utilities for check-graylog
//!
//! This crate provides a mockito-backed fake of the Graylog2 REST API, a
//! self-signed HTTPS endpoint and JSON fixtures, shared by the workspace's
//! tests.

pub mod fixtures;
pub mod mock;
pub mod tls;

pub use fixtures::{
    collectors_json, count_json, healthy_collectors, system_json, throughput_json, total_json,
};
pub use mock::{FakeGraylog, GraylogFixture, Reply, basic_auth_header};
pub use tls::TlsGraylog;

/// Username the fake API expects
pub const TEST_USER: &str = "admin";

/// Password the fake API expects
pub const TEST_PASSWORD: &str = "secret";
