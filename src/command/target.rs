//! Resolution of the command-line specifier into a cancellation target.

use log::*;

use crate::{
    error::{Result, RunsweepError},
    forge::traits::Forge,
};

/// Branch plus optional actor filter that cancellation applies to.
#[derive(Debug, Clone)]
pub struct CancelTarget {
    pub branch: String,
    pub actor: Option<String>,
    /// Human readable description used in the banner output.
    pub title: String,
    pub is_pull_request: bool,
}

/// Resolve the positional specifier into a concrete target. An all-digit
/// specifier is always a pull request number; anything else is a branch
/// name, optionally prefixed with an actor login and a colon.
pub async fn resolve_target(
    forge: &dyn Forge,
    input: &str,
) -> Result<CancelTarget> {
    if !input.is_empty() && input.chars().all(|c| c.is_ascii_digit()) {
        let number: u64 = input.parse().map_err(|_| {
            RunsweepError::invalid_args(format!(
                "pull request number out of range: {input}"
            ))
        })?;

        let pr = forge.get_pull_request(number).await?;

        debug!(
            "resolved pull request #{} to branch {} by {}",
            pr.number, pr.head.branch, pr.user.login
        );

        return Ok(CancelTarget {
            branch: pr.head.branch,
            actor: Some(pr.user.login),
            title: format!("#{} - {}", pr.number, pr.title),
            is_pull_request: true,
        });
    }

    // everything after the first colon is the branch name
    let target = match input.split_once(':') {
        Some((login, branch)) => CancelTarget {
            branch: branch.to_string(),
            actor: Some(login.to_string()),
            title: input.to_string(),
            is_pull_request: false,
        },
        None => CancelTarget {
            branch: input.to_string(),
            actor: None,
            title: input.to_string(),
            is_pull_request: false,
        },
    };

    Ok(target)
}
