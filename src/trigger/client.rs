use colored::Colorize;
use reqwest::StatusCode;
use url::Url;

use super::params::BuildParams;
use crate::config::settings::Settings;
use crate::error::TriggerError;

/// HTTP client wrapper for triggering a parameterized job
pub struct JobTrigger {
    http: reqwest::Client,
    job_url: Url,
}

/// Result of a trigger request that reached the job endpoint
#[derive(Debug, Clone)]
pub struct TriggerOutcome {
    pub url: Url,
    pub status: StatusCode,
}

impl TriggerOutcome {
    /// Jenkins answers 201 when a build is queued, some proxies answer 200
    pub fn is_success(&self) -> bool {
        matches!(self.status, StatusCode::OK | StatusCode::CREATED)
    }

    pub fn into_result(self) -> Result<Self, TriggerError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(TriggerError::UnexpectedStatus(self.status.as_u16()))
        }
    }
}

impl JobTrigger {
    /// Create a new trigger client for the configured endpoint
    pub fn new(settings: &Settings) -> Result<Self, TriggerError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            job_url: settings.job_url.clone(),
        })
    }

    /// Issue the GET request that starts the job.
    ///
    /// Any HTTP status counts as a completed request; callers decide what a
    /// non-2xx status means via [`TriggerOutcome::into_result`].
    pub async fn trigger(&self, params: &BuildParams) -> Result<TriggerOutcome, TriggerError> {
        let url = params.to_url(&self.job_url);
        eprintln!("GET {}", url);
        tracing::debug!(host = url.host_str().unwrap_or_default(), "Sending trigger request");

        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        eprintln!("Response.Code: {}", status.as_u16());

        let outcome = TriggerOutcome { url, status };
        if outcome.is_success() {
            eprintln!("{}", "Success".green().bold());
        } else {
            tracing::warn!(status = status.as_u16(), "Job endpoint rejected the trigger");
            eprintln!("{}", "Failed".red().bold());
        }

        Ok(outcome)
    }
}
