//! Workflow run querying and filtering.

use log::*;
use std::collections::HashSet;

use crate::{
    error::Result,
    forge::{
        traits::Forge,
        types::{RunEvent, RunStatus, WorkflowRun},
    },
};

/// Selection criteria for one batch of workflow runs.
#[derive(Debug, Clone)]
pub struct RunQuery {
    pub branch: String,
    pub actor: Option<String>,
    pub events: Vec<RunEvent>,
    pub statuses: Vec<RunStatus>,
}

/// Fetch runs for every event/status pair, keep the ones matching the
/// branch and actor filter, and deduplicate by run id with the first
/// occurrence winning.
pub async fn collect_runs(
    forge: &dyn Forge,
    query: &RunQuery,
) -> Result<Vec<WorkflowRun>> {
    let mut runs: Vec<WorkflowRun> = vec![];

    for event in query.events.iter() {
        for status in query.statuses.iter() {
            let page = forge.list_runs(*event, *status).await?;
            debug!("{event}/{status}: {} candidate runs", page.len());
            runs.extend(page);
        }
    }

    runs.retain(|run| {
        run.head_branch == query.branch
            && query
                .actor
                .as_ref()
                .is_none_or(|actor| run.triggering_actor.login == *actor)
    });

    let mut seen = HashSet::new();
    runs.retain(|run| seen.insert(run.id));

    debug!("{} runs selected for branch {}", runs.len(), query.branch);

    Ok(runs)
}
