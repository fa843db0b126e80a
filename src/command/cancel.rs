//! Workflow run cancellation command implementation.

use chrono::{DateTime, Local};
use log::*;

use crate::{
    command::{
        query::{self, RunQuery},
        target,
    },
    error::Result,
    forge::{
        traits::Forge,
        types::{HeadCommit, RunEvent, RunStatus, WorkflowRun},
    },
};

/// Inputs for one cancellation pass.
#[derive(Debug, Clone)]
pub struct CancelRequest {
    pub branch_or_pull: String,
    pub events: Vec<RunEvent>,
    pub statuses: Vec<RunStatus>,
    pub keep_last: bool,
}

/// Per-run result of a cancellation attempt.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub run_id: u64,
    pub name: String,
    pub error: Option<String>,
}

/// How a cancellation pass ended.
#[derive(Debug)]
pub enum CancelReport {
    /// Nothing matched the selection criteria.
    NoMatchingRuns,
    /// Matches existed but all belong to the most recent commit.
    OnlyLatestRuns,
    /// Cancellations were attempted, one outcome per run.
    Completed(Vec<RunOutcome>),
}

/// Resolve the target, select its runs, and cancel them oldest first.
/// A failed cancellation is recorded and the rest of the batch proceeds.
pub async fn execute(
    forge: &dyn Forge,
    req: &CancelRequest,
) -> Result<CancelReport> {
    let target = target::resolve_target(forge, &req.branch_or_pull).await?;

    let target_type = if target.is_pull_request {
        "pull request"
    } else {
        "branch"
    };

    println!(
        "\nCancelling workflow runs for {target_type}\n\n    {}\n",
        target.title
    );

    let query = RunQuery {
        branch: target.branch,
        actor: target.actor,
        events: req.events.clone(),
        statuses: req.statuses.clone(),
    };

    let mut runs = query::collect_runs(forge, &query).await?;

    if runs.is_empty() {
        println!(
            "No {} workflow runs found.\n",
            join_statuses(&query.statuses)
        );
        return Ok(CancelReport::NoMatchingRuns);
    }

    // created_at is RFC 3339, so string order is chronological order
    runs.sort_by(|a, b| a.created_at.cmp(&b.created_at));

    if req.keep_last
        && let Some(last) = runs.last()
    {
        let last_sha = last.head_commit.id.clone();
        runs.retain(|run| run.head_commit.id != last_sha);

        if runs.is_empty() {
            println!(
                "Only the latest runs are in queue. \
                Use --no-keep-last to force cancelling them.\n"
            );
            return Ok(CancelReport::OnlyLatestRuns);
        }
    }

    debug!("cancelling {} runs", runs.len());

    let mut outcomes = Vec::with_capacity(runs.len());

    for (run, new_commit) in mark_commit_starts(&runs) {
        if new_commit {
            print_commit(&run.head_commit)?;
        }

        match forge.cancel_run(run.id).await {
            Ok(()) => {
                println!("[Cancelled] {}", run.name);
                outcomes.push(RunOutcome {
                    run_id: run.id,
                    name: run.name.clone(),
                    error: None,
                });
            }
            Err(err) => {
                println!("[Failed] {} [Error: {err}]", run.name);
                outcomes.push(RunOutcome {
                    run_id: run.id,
                    name: run.name.clone(),
                    error: Some(err.to_string()),
                });
            }
        }
    }

    println!();

    Ok(CancelReport::Completed(outcomes))
}

fn join_statuses(statuses: &[RunStatus]) -> String {
    statuses
        .iter()
        .map(RunStatus::as_str)
        .collect::<Vec<_>>()
        .join(" or ")
}

/// Pair each run with whether it opens a new head-commit group. Groups are
/// contiguous spans of runs sharing a commit id.
fn mark_commit_starts(runs: &[WorkflowRun]) -> Vec<(&WorkflowRun, bool)> {
    let mut previous: Option<&str> = None;

    runs.iter()
        .map(|run| {
            let fresh = previous != Some(run.head_commit.id.as_str());
            previous = Some(run.head_commit.id.as_str());
            (run, fresh)
        })
        .collect()
}

fn print_commit(commit: &HeadCommit) -> Result<()> {
    let date = DateTime::parse_from_rfc3339(&commit.timestamp)?
        .with_timezone(&Local)
        .format("%a, %d %b %Y %H:%M:%S");

    let message = commit
        .message
        .lines()
        .map(|line| format!("    {line}"))
        .collect::<Vec<_>>()
        .join("\n");

    println!("\nHEAD {}", commit.id);
    println!("Author: {} <{}>", commit.author.name, commit.author.email);
    println!("Date:   {date}\n");
    println!("{message}\n");

    Ok(())
}
