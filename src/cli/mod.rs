use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use url::Url;

use crate::config::settings::{self, Settings};
use crate::trigger::client::JobTrigger;
use crate::trigger::params::BuildParams;

#[derive(Parser, Debug)]
#[command(name = "trigger-jenkins-job")]
#[command(author = "Release Engineering Team")]
#[command(version)]
#[command(about = "Trigger the parameterized Jenkins release job for a git ref", long_about = None)]
pub struct Cli {
    /// Jenkins job token, forwarded as the `token` parameter
    #[arg(long, env = "JENKINS_TOKEN", hide_env_values = true)]
    token: String,

    /// Git ref to build (e.g. refs/heads/master, refs/tags/v1.0.0)
    #[arg(long, value_name = "REF")]
    build_ref: String,

    /// Image tag to publish. Derived from the ref when omitted (master -> latest)
    #[arg(long, value_name = "TAG")]
    image_tag: Option<String>,

    /// Job `buildWithParameters` endpoint
    #[arg(
        long,
        env = "JENKINS_JOB_URL",
        value_name = "URL",
        default_value = settings::DEFAULT_JOB_URL,
        value_parser = settings::parse_job_url
    )]
    job_url: Url,

    /// Request timeout in seconds (no timeout by default)
    #[arg(long, env = "JENKINS_TRIGGER_TIMEOUT", value_name = "SECONDS")]
    timeout: Option<u64>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Resolve parameters, trigger the job and map the HTTP outcome to an exit code
    pub async fn execute(self) -> Result<ExitCode> {
        let params = BuildParams::new(&self.token, &self.build_ref, self.image_tag.as_deref())
            .context("Failed to resolve build parameters")?;
        tracing::debug!(
            build_ref = %self.build_ref,
            image_tag = params.get(crate::trigger::params::IMAGE_TAG).unwrap_or_default(),
            "Resolved build parameters"
        );

        let settings = Settings::new(self.job_url, self.timeout);
        let trigger = JobTrigger::new(&settings).context("Failed to create HTTP client")?;
        let outcome = trigger
            .trigger(&params)
            .await
            .context("Failed to trigger Jenkins job")?;

        match outcome.into_result() {
            Ok(outcome) => {
                tracing::info!(job = outcome.url.path(), "Jenkins job triggered");
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                tracing::debug!("{}", e);
                Ok(ExitCode::FAILURE)
            }
        }
    }
}
