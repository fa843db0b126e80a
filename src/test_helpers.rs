//! Common test helper functions shared across test modules.
//!
//! This module provides reusable utilities for creating test fixtures,
//! reducing code duplication across different test suites.
use secrecy::SecretString;

use crate::forge::{
    config::RemoteConfig,
    types::{
        Actor, CommitAuthor, HeadCommit, PullRequest, PullRequestHead,
        WorkflowRun,
    },
};

/// Creates a test RemoteConfig with sensible defaults.
///
/// # Example
/// ```ignore
/// let config = create_test_remote_config();
/// ```
pub fn create_test_remote_config() -> RemoteConfig {
    RemoteConfig {
        owner: "test-owner".to_string(),
        repo: "test-repo".to_string(),
        token: SecretString::from("test-token".to_string()),
    }
}

/// Creates a queued workflow run on the given branch.
///
/// The commit id, name, and timestamps are derived defaults; tests that
/// care about those fields overwrite them directly.
///
/// # Arguments
/// * `id` - Run id
/// * `branch` - Head branch the run belongs to
///
/// # Example
/// ```ignore
/// let mut run = create_test_run(1, "feature-x");
/// run.head_commit.id = "abc123".to_string();
/// ```
pub fn create_test_run(id: u64, branch: &str) -> WorkflowRun {
    WorkflowRun {
        id,
        name: format!("workflow-{id}"),
        head_branch: branch.to_string(),
        head_commit: HeadCommit {
            id: format!("sha-{id}"),
            message: "test: add coverage".to_string(),
            timestamp: "2024-05-01T11:59:00Z".to_string(),
            author: CommitAuthor {
                name: "Test Author".to_string(),
                email: "test@example.com".to_string(),
            },
        },
        triggering_actor: Actor {
            login: "octocat".to_string(),
        },
        created_at: "2024-05-01T12:00:00Z".to_string(),
        status: "queued".to_string(),
    }
}

/// Creates a test PullRequest pointing at the given head branch.
///
/// # Arguments
/// * `number` - PR number
/// * `title` - PR title
/// * `branch` - Head branch name
/// * `login` - Author login
///
/// # Example
/// ```ignore
/// let pr = create_test_pull_request(42, "Fix parser", "fix-parser", "alice");
/// ```
pub fn create_test_pull_request(
    number: u64,
    title: &str,
    branch: &str,
    login: &str,
) -> PullRequest {
    PullRequest {
        number,
        title: title.to_string(),
        head: PullRequestHead {
            branch: branch.to_string(),
        },
        user: Actor {
            login: login.to_string(),
        },
    }
}
