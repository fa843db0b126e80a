//! Custom error types for runsweep with improved type safety and error handling.

use thiserror::Error;

/// Main error type for runsweep operations.
#[derive(Error, Debug)]
pub enum RunsweepError {
    // Cli args errors
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    // Configuration errors
    #[error(
        "must provide a GitHub token via --github-token or the GITHUB_TOKEN environment variable"
    )]
    MissingToken,

    // GitHub API errors: method and endpoint identify the failing call,
    // message carries the platform-provided text verbatim
    #[error("{method} {endpoint}: {message}")]
    Api {
        method: String,
        endpoint: String,
        message: String,
    },

    #[error("Invalid authorization header: {0}")]
    InvalidAuthHeader(#[from] reqwest::header::InvalidHeaderValue),

    // Parsing errors - automatic conversions via #[from]
    #[error("Datetime parse error: {0}")]
    ChronoParseError(#[from] chrono::ParseError),

    #[error("URL parse error: {0}")]
    UrlError(#[from] url::ParseError),

    // Generic wrapper for other errors
    #[error(transparent)]
    Other(#[from] color_eyre::Report),
}

/// Result type alias using RunsweepError
pub type Result<T> = std::result::Result<T, RunsweepError>;

impl RunsweepError {
    /// Create an API error for a specific method and endpoint
    pub fn api(
        method: impl Into<String>,
        endpoint: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Api {
            method: method.into(),
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    /// Create an invalid arguments error
    pub fn invalid_args(msg: impl Into<String>) -> Self {
        Self::InvalidArgs(msg.into())
    }
}

// Implement From for reqwest errors - wraps in Other variant; request
// failures tied to an endpoint are mapped to Api at the call site
impl From<reqwest::Error> for RunsweepError {
    fn from(err: reqwest::Error) -> Self {
        Self::Other(color_eyre::Report::from(err))
    }
}
