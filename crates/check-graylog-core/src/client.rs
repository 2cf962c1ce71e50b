//! HTTP client for the Graylog2 REST API

use crate::model::{
    COLLECTORS_PATH, CollectorList, INDEXER_FAILURES_PATH, INPUTS_PATH, IndexerFailures,
    InputList, SYSTEM_PATH, SystemOverview, THROUGHPUT_PATH, TOTAL_COUNT_PATH, Throughput,
    TotalCount,
};
use crate::status::ServiceState;
use crate::target::{BaseUrl, Credentials};
use log::debug;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

/// Default timeout for API requests (30 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// User agent sent with every request
pub const USER_AGENT: &str = "check-graylog";

/// Everything needed to talk to one Graylog2 node
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base: BaseUrl,
    pub credentials: Credentials,
    /// Accept server certificates that fail verification
    pub insecure: bool,
}

/// Builds the blocking HTTP client
///
/// # Arguments
///
/// * `insecure` - Skip TLS certificate verification (self-signed deployments)
/// * `timeout` - Request timeout duration
///
/// # Errors
///
/// Returns error if client construction fails
pub fn build_client(insecure: bool, timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .danger_accept_invalid_certs(insecure)
        .build()
}

/// Source of typed Graylog2 API snapshots
///
/// Implemented by [`GraylogClient`]; the evaluator only depends on this.
pub trait GraylogApi {
    fn system(&self) -> Result<SystemOverview, FetchError>;
    fn indexer_failures(&self) -> Result<IndexerFailures, FetchError>;
    fn throughput(&self) -> Result<Throughput, FetchError>;
    fn inputs(&self) -> Result<InputList, FetchError>;
    fn total_count(&self) -> Result<TotalCount, FetchError>;
    fn collectors(&self) -> Result<CollectorList, FetchError>;
}

/// Authenticated client bound to one base URL
pub struct GraylogClient {
    http: Client,
    base: BaseUrl,
    credentials: Credentials,
}

impl GraylogClient {
    /// # Errors
    ///
    /// Returns [`FetchError::Client`] if the HTTP client cannot be built
    pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
        let http = build_client(config.insecure, DEFAULT_TIMEOUT).map_err(FetchError::Client)?;
        if config.insecure {
            debug!("TLS certificate verification disabled");
        }

        Ok(Self {
            http,
            base: config.base,
            credentials: config.credentials,
        })
    }

    pub fn base(&self) -> &BaseUrl {
        &self.base
    }

    /// GETs `path` and decodes the JSON body into `T`
    ///
    /// The body is read in full before the status is inspected, so the
    /// connection is released on every path.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The server cannot be reached
    /// - The body cannot be read
    /// - The status is anything but 200
    /// - The body does not decode into `T`
    pub fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = self.base.join(path);
        debug!("GET {url}");

        let response = self
            .http
            .get(&url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .send()
            .map_err(|source| FetchError::Connect {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        let body = response.text().map_err(|source| FetchError::NoResponse {
            url: url.clone(),
            source,
        })?;

        debug!("{url} replied {status}: {body}");

        if status != StatusCode::OK {
            return Err(FetchError::HttpStatus {
                url,
                status: status.as_u16(),
            });
        }

        serde_json::from_str(&body).map_err(|source| FetchError::Decode { url, source })
    }
}

impl GraylogApi for GraylogClient {
    fn system(&self) -> Result<SystemOverview, FetchError> {
        self.fetch(SYSTEM_PATH)
    }

    fn indexer_failures(&self) -> Result<IndexerFailures, FetchError> {
        self.fetch(INDEXER_FAILURES_PATH)
    }

    fn throughput(&self) -> Result<Throughput, FetchError> {
        self.fetch(THROUGHPUT_PATH)
    }

    fn inputs(&self) -> Result<InputList, FetchError> {
        self.fetch(INPUTS_PATH)
    }

    fn total_count(&self) -> Result<TotalCount, FetchError> {
        self.fetch(TOTAL_COUNT_PATH)
    }

    fn collectors(&self) -> Result<CollectorList, FetchError> {
        self.fetch(COLLECTORS_PATH)
    }
}

/// API access errors
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP client could not be constructed
    #[error("Can not initialize HTTP client")]
    Client(#[source] reqwest::Error),

    /// Connection or request failure
    #[error("Can not connect to Graylog2 API")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Body could not be read
    #[error("No response received from Graylog2 API")]
    NoResponse {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Graylog2 API replied with HTTP code {status}")]
    HttpStatus { url: String, status: u16 },

    /// Body is not the expected JSON document
    #[error("Can not parse JSON from Graylog2 API")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    pub fn state(&self) -> ServiceState {
        match self {
            FetchError::Connect { .. }
            | FetchError::NoResponse { .. }
            | FetchError::HttpStatus { .. } => ServiceState::Critical,
            FetchError::Client(_) | FetchError::Decode { .. } => ServiceState::Unknown,
        }
    }

    /// URL of the failed request, if one was made
    pub fn url(&self) -> Option<&str> {
        match self {
            FetchError::Client(_) => None,
            FetchError::Connect { url, .. }
            | FetchError::NoResponse { url, .. }
            | FetchError::HttpStatus { url, .. }
            | FetchError::Decode { url, .. } => Some(url),
        }
    }
}
