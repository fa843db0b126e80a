//! Wire and domain types for workflow runs and pull requests.
use clap::ValueEnum;
use serde::Deserialize;
use std::fmt;

/// Event kind that triggered a workflow run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum RunEvent {
    PullRequest,
    Push,
    Issue,
}

impl RunEvent {
    /// Query parameter value for this event kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PullRequest => "pull_request",
            Self::Push => "push",
            Self::Issue => "issue",
        }
    }
}

impl fmt::Display for RunEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status a run can be targeted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Queued,
    InProgress,
}

impl RunStatus {
    /// Query parameter value for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Queued => "queued",
            Self::InProgress => "in_progress",
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Actor {
    pub login: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitAuthor {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HeadCommit {
    pub id: String,
    pub message: String,
    pub timestamp: String,
    pub author: CommitAuthor,
}

/// Single workflow run as returned by the runs listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowRun {
    pub id: u64,
    pub name: String,
    pub head_branch: String,
    pub head_commit: HeadCommit,
    pub triggering_actor: Actor,
    pub created_at: String,
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct WorkflowRunList {
    pub workflow_runs: Vec<WorkflowRun>,
}

#[derive(Debug, Deserialize)]
pub struct PullRequestHead {
    #[serde(rename = "ref")]
    pub branch: String,
}

#[derive(Debug, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub head: PullRequestHead,
    pub user: Actor,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_and_status_wire_values() {
        assert_eq!(RunEvent::PullRequest.as_str(), "pull_request");
        assert_eq!(RunEvent::Push.as_str(), "push");
        assert_eq!(RunEvent::Issue.as_str(), "issue");
        assert_eq!(RunStatus::Queued.as_str(), "queued");
        assert_eq!(RunStatus::InProgress.as_str(), "in_progress");
    }

    #[test]
    fn deserializes_workflow_run_list() {
        let body = r#"{
            "total_count": 1,
            "workflow_runs": [
                {
                    "id": 30433642,
                    "name": "CI",
                    "head_branch": "feature-x",
                    "status": "queued",
                    "event": "push",
                    "created_at": "2024-05-01T12:34:56Z",
                    "triggering_actor": { "login": "octocat", "id": 1 },
                    "head_commit": {
                        "id": "abc123",
                        "message": "Fix parser",
                        "timestamp": "2024-05-01T12:30:00Z",
                        "author": { "name": "Mona", "email": "mona@example.com" }
                    }
                }
            ]
        }"#;

        let list: WorkflowRunList = serde_json::from_str(body).unwrap();
        assert_eq!(list.workflow_runs.len(), 1);

        let run = &list.workflow_runs[0];
        assert_eq!(run.id, 30433642);
        assert_eq!(run.head_branch, "feature-x");
        assert_eq!(run.triggering_actor.login, "octocat");
        assert_eq!(run.head_commit.author.email, "mona@example.com");
    }

    #[test]
    fn deserializes_pull_request_head_ref() {
        let body = r#"{
            "number": 42,
            "title": "Add cache layer",
            "state": "open",
            "head": { "ref": "cache-branch", "sha": "def456" },
            "user": { "login": "alice" }
        }"#;

        let pr: PullRequest = serde_json::from_str(body).unwrap();
        assert_eq!(pr.number, 42);
        assert_eq!(pr.head.branch, "cache-branch");
        assert_eq!(pr.user.login, "alice");
    }
}
