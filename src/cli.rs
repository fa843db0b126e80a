//! CLI argument parsing and repository configuration.
use clap::Parser;
use secrecy::SecretString;
use std::env;

use crate::{
    command::cancel::CancelRequest,
    error::{Result, RunsweepError},
    forge::{
        config::{DEFAULT_REPO, RemoteConfig},
        types::{RunEvent, RunStatus},
    },
};

/// Cancel queued or in-progress GitHub Actions workflow runs for a branch
/// or pull request.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Branch name, optionally prefixed with an actor login
    /// (login:branch), or a pull request number.
    pub branch_or_pull: String,

    #[arg(long, default_value = DEFAULT_REPO)]
    /// Repository to target in owner/name form.
    pub repo: String,

    #[arg(long = "event", value_enum, default_values_t = vec![RunEvent::PullRequest, RunEvent::Push])]
    /// Event kind that triggered the runs. Repeat to cover several kinds.
    pub events: Vec<RunEvent>,

    #[arg(long, overrides_with = "no_keep_last")]
    /// Leave runs for the most recent commit alone (default).
    pub keep_last: bool,

    #[arg(long, overrides_with = "keep_last")]
    /// Cancel runs for the most recent commit as well.
    pub no_keep_last: bool,

    #[arg(long, overrides_with = "no_keep_running")]
    /// Only target queued runs and leave in-progress ones alone (default).
    pub keep_running: bool,

    #[arg(long, overrides_with = "keep_running")]
    /// Target in-progress runs in addition to queued ones.
    pub no_keep_running: bool,

    #[arg(long, default_value = "")]
    /// GitHub personal access token. Falls back to GITHUB_TOKEN env var.
    pub github_token: String,

    #[arg(long, default_value_t = false)]
    /// Enable debug logging.
    pub debug: bool,
}

impl Args {
    /// Configure remote repository connection from CLI arguments.
    pub fn get_remote(&self) -> Result<RemoteConfig> {
        let mut token = self.github_token.clone();

        if token.is_empty()
            && let Ok(env_var_token) = env::var("GITHUB_TOKEN")
        {
            token = env_var_token;
        }

        if token.is_empty() {
            return Err(RunsweepError::MissingToken);
        }

        let (owner, repo) = self.repo.split_once('/').ok_or_else(|| {
            RunsweepError::invalid_args(format!(
                "repository must be in owner/name form: {}",
                self.repo
            ))
        })?;

        if owner.is_empty() || repo.is_empty() {
            return Err(RunsweepError::invalid_args(format!(
                "repository must be in owner/name form: {}",
                self.repo
            )));
        }

        Ok(RemoteConfig {
            owner: owner.to_string(),
            repo: repo.to_string(),
            token: SecretString::from(token),
        })
    }

    /// Assemble the cancellation inputs from the parsed flags.
    pub fn cancel_request(&self) -> CancelRequest {
        // leaving running workflows alone means only queued ones are targeted
        let statuses = if self.no_keep_running {
            vec![RunStatus::Queued, RunStatus::InProgress]
        } else {
            vec![RunStatus::Queued]
        };

        CancelRequest {
            branch_or_pull: self.branch_or_pull.clone(),
            events: self.events.clone(),
            statuses,
            keep_last: !self.no_keep_last,
        }
    }
}
