//! Traits related to the remote forge API
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::{
    error::Result,
    forge::types::{PullRequest, RunEvent, RunStatus, WorkflowRun},
};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait Forge {
    fn repo_path(&self) -> String;
    async fn list_runs(
        &self,
        event: RunEvent,
        status: RunStatus,
    ) -> Result<Vec<WorkflowRun>>;
    async fn cancel_run(&self, run_id: u64) -> Result<()>;
    async fn get_pull_request(&self, number: u64) -> Result<PullRequest>;
}
