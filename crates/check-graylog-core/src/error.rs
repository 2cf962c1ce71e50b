use crate::client::FetchError;
use crate::status::ServiceState;
use crate::target::TargetError;
use thiserror::Error;

/// Terminal conditions that end a check before thresholds are evaluated
#[derive(Error, Debug)]
pub enum CheckError {
    // Input errors
    #[error(transparent)]
    Target(#[from] TargetError),

    // API errors
    #[error(transparent)]
    Fetch(#[from] FetchError),

    // Node state errors
    #[error("Service is not processing")]
    NotProcessing,

    #[error("lifecycle: {0}")]
    Lifecycle(String),

    #[error("lb_status: {0}")]
    LoadBalancer(String),
}

impl CheckError {
    /// Monitoring state this error is reported as
    pub fn state(&self) -> ServiceState {
        match self {
            CheckError::Target(_) => ServiceState::Unknown,
            CheckError::Fetch(err) => err.state(),
            CheckError::NotProcessing => ServiceState::Critical,
            CheckError::Lifecycle(_) | CheckError::LoadBalancer(_) => ServiceState::Warning,
        }
    }

    /// URL of the failed API request, for fetch errors only
    pub fn fetch_url(&self) -> Option<&str> {
        match self {
            CheckError::Fetch(err) => err.url(),
            _ => None,
        }
    }
}
