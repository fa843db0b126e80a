//! GitHub API access for workflow run cancellation.
//!
//! Provides token-based authentication, run listing and cancellation, and
//! pull request lookups through a common trait.

/// Configuration and authentication for the GitHub connection.
pub mod config;

/// GitHub REST API client implementation.
pub mod github;

/// Common trait for forge API abstraction.
pub mod traits;

/// Shared data types for workflow runs and pull requests.
pub mod types;
