use std::time::Duration;
use url::Url;

/// Release job endpoint triggered when no override is given
pub const DEFAULT_JOB_URL: &str =
    "https://internal.pingcap.net/idc-jenkins/job/release_advanced_statefulset/buildWithParameters";

/// Connection settings for the job trigger.
///
/// There is no settings file; values come from CLI flags or their environment variables.
#[derive(Debug, Clone)]
pub struct Settings {
    /// `buildWithParameters` endpoint of the job
    pub job_url: Url,

    /// Request timeout, unbounded when unset
    pub timeout: Option<Duration>,
}

impl Settings {
    pub fn new(job_url: Url, timeout_secs: Option<u64>) -> Self {
        Self {
            job_url,
            timeout: timeout_secs.map(Duration::from_secs),
        }
    }
}

/// Parse an absolute job URL (used as a clap value parser)
pub fn parse_job_url(value: &str) -> Result<Url, String> {
    let url = Url::parse(value).map_err(|e| format!("invalid job URL '{}': {}", value, e))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(format!("unsupported scheme '{}' in job URL, expected http or https", other)),
    }
}
