use thiserror::Error;

/// Errors raised while resolving parameters or triggering a job
#[derive(Debug, Error)]
pub enum TriggerError {
    #[error("Invalid build reference '{0}': no tag can be derived from it")]
    InvalidReference(String),

    #[error("Request to job endpoint failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Job endpoint responded with unexpected status {0}")]
    UnexpectedStatus(u16),
}
