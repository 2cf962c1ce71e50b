//! Fake Graylog2 API on a local mockito server
//!
//! Each test starts its own server, so tests run in parallel without
//! sharing mocks. Mocks live as long as the [`FakeGraylog`] that owns them.

use crate::fixtures::{count_json, healthy_collectors, system_json, throughput_json, total_json};
use crate::{TEST_PASSWORD, TEST_USER};
use base64ct::{Base64, Encoding};
use mockito::{Mock, Server, ServerGuard};

/// Canned HTTP reply for one endpoint
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: usize,
    pub body: String,
}

impl Reply {
    /// 200 with a JSON body
    pub fn json(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn status(status: usize, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Replies for all six endpoints the check queries
///
/// The default is a healthy node with four running collectors.
#[derive(Debug, Clone)]
pub struct GraylogFixture {
    pub system: Reply,
    pub indexer_failures: Reply,
    pub throughput: Reply,
    pub inputs: Reply,
    pub total: Reply,
    pub collectors: Reply,
}

impl Default for GraylogFixture {
    fn default() -> Self {
        Self {
            system: Reply::json(system_json(true, "running", "alive")),
            indexer_failures: Reply::json(count_json(0)),
            throughput: Reply::json(throughput_json(42)),
            inputs: Reply::json(count_json(3)),
            total: Reply::json(total_json(1_234_567)),
            collectors: Reply::json(healthy_collectors(4)),
        }
    }
}

impl GraylogFixture {
    pub fn with_collectors(mut self, body: impl Into<String>) -> Self {
        self.collectors = Reply::json(body);
        self
    }

    fn routes(&self) -> [(&'static str, &Reply); 6] {
        [
            ("/system", &self.system),
            ("/system/indexer/failures", &self.indexer_failures),
            ("/system/throughput", &self.throughput),
            ("/system/inputs", &self.inputs),
            ("/count/total", &self.total),
            (
                "/plugins/org.graylog.plugins.collector/collectors",
                &self.collectors,
            ),
        ]
    }
}

/// Running fake API
///
/// Every route only answers requests authenticated as
/// [`TEST_USER`]/[`TEST_PASSWORD`]; anything else gets mockito's 501.
pub struct FakeGraylog {
    server: ServerGuard,
    mocks: Vec<Mock>,
}

impl FakeGraylog {
    /// Starts a server serving `fixture`
    pub fn start(fixture: &GraylogFixture) -> Self {
        let mut server = Server::new();
        let auth = basic_auth_header(TEST_USER, TEST_PASSWORD);

        let mocks = fixture
            .routes()
            .into_iter()
            .map(|(path, reply)| {
                server
                    .mock("GET", path)
                    .match_header("authorization", auth.as_str())
                    .with_status(reply.status)
                    .with_header("content-type", "application/json")
                    .with_body(&reply.body)
                    .create()
            })
            .collect();

        Self { server, mocks }
    }

    /// Healthy node, four running collectors
    pub fn healthy() -> Self {
        Self::start(&GraylogFixture::default())
    }

    /// Base URL, e.g. `http://127.0.0.1:38211`
    pub fn url(&self) -> String {
        self.server.url()
    }

    /// Mocks in route order: system, indexer failures, throughput,
    /// inputs, total count, collectors
    pub fn mocks(&self) -> &[Mock] {
        &self.mocks
    }
}

/// `Authorization` header value for HTTP Basic auth
pub fn basic_auth_header(user: &str, password: &str) -> String {
    format!(
        "Basic {}",
        Base64::encode_string(format!("{user}:{password}").as_bytes())
    )
}
