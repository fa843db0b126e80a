//! Configuration for the GitHub API connection.
use secrecy::SecretString;
use std::time::Duration;

/// Repository targeted when --repo is not given.
pub const DEFAULT_REPO: &str = "dataloom/dataloom";
/// Base URL that endpoint paths are joined onto.
pub const GITHUB_API_BASE_URL: &str = "https://api.github.com/";
/// Per-request timeout for API calls.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Remote repository connection configuration for authenticating and
/// interacting with the GitHub API.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Access token for authentication.
    pub token: SecretString,
}

impl RemoteConfig {
    /// Full owner/name path used when building endpoint URLs.
    pub fn repo_path(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            owner: "".to_string(),
            repo: "".to_string(),
            token: SecretString::from("".to_string()),
        }
    }
}
