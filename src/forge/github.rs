//! Implements the Forge trait for the GitHub REST API
use async_trait::async_trait;
use log::*;
use reqwest::{
    Client, Method, Url,
    header::{HeaderMap, HeaderValue},
};
use secrecy::ExposeSecret;
use serde_json::Value;

use crate::{
    error::{Result, RunsweepError},
    forge::{
        config::{GITHUB_API_BASE_URL, REQUEST_TIMEOUT, RemoteConfig},
        traits::Forge,
        types::{
            PullRequest, RunEvent, RunStatus, WorkflowRun, WorkflowRunList,
        },
    },
};

/// GitHub forge implementation using reqwest for API interactions with
/// workflow runs and pull requests.
pub struct Github {
    config: RemoteConfig,
    base_url: Url,
    client: Client,
}

impl Github {
    /// Create GitHub client with bearer token authentication.
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let token = config.token.expose_secret();

        let mut headers = HeaderMap::new();

        let mut token_value =
            HeaderValue::from_str(format!("Bearer {}", token).as_str())?;
        token_value.set_sensitive(true);

        headers.append("Authorization", token_value);
        headers.append(
            "Accept",
            HeaderValue::from_static("application/vnd.github+json"),
        );

        // GitHub rejects requests without a user agent
        let client = reqwest::Client::builder()
            .user_agent(concat!("runsweep/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        let base_url = Url::parse(GITHUB_API_BASE_URL)?;

        Ok(Self {
            config,
            base_url,
            client,
        })
    }

    async fn api_request(
        &self,
        method: Method,
        endpoint: &str,
        query: Option<&[(&str, &str)]>,
    ) -> Result<Value> {
        let url = self.base_url.join(endpoint.trim_start_matches('/'))?;

        debug!("{method} {url}");

        let mut builder = self.client.request(method.clone(), url);

        if let Some(params) = query {
            builder = builder.query(params);
        }

        let request = builder.build().map_err(|err| {
            RunsweepError::api(method.as_str(), endpoint, err.to_string())
        })?;
        let response = self.client.execute(request).await.map_err(|err| {
            RunsweepError::api(method.as_str(), endpoint, err.to_string())
        })?;
        let body = response.text().await.map_err(|err| {
            RunsweepError::api(method.as_str(), endpoint, err.to_string())
        })?;

        parse_body(method.as_str(), endpoint, &body)
    }
}

/// Interpret a response body: a top-level "message" field means the call
/// failed regardless of the status line.
fn parse_body(method: &str, endpoint: &str, body: &str) -> Result<Value> {
    // cancellation acknowledgements come back with no body at all
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }

    let value: Value = serde_json::from_str(body).map_err(|err| {
        RunsweepError::api(
            method,
            endpoint,
            format!("unparseable response body: {err}"),
        )
    })?;

    if let Some(message) = value.get("message") {
        let message = message
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| message.to_string());
        return Err(RunsweepError::api(method, endpoint, message));
    }

    Ok(value)
}

#[async_trait]
impl Forge for Github {
    fn repo_path(&self) -> String {
        self.config.repo_path()
    }

    async fn list_runs(
        &self,
        event: RunEvent,
        status: RunStatus,
    ) -> Result<Vec<WorkflowRun>> {
        let endpoint =
            format!("repos/{}/actions/runs", self.config.repo_path());
        let params = [("event", event.as_str()), ("status", status.as_str())];

        let value = self
            .api_request(Method::GET, &endpoint, Some(&params))
            .await?;

        let list: WorkflowRunList =
            serde_json::from_value(value).map_err(|err| {
                RunsweepError::api(
                    Method::GET.as_str(),
                    &endpoint,
                    format!("unexpected response shape: {err}"),
                )
            })?;

        debug!("fetched {} {status} {event} runs", list.workflow_runs.len());

        Ok(list.workflow_runs)
    }

    async fn cancel_run(&self, run_id: u64) -> Result<()> {
        let endpoint = format!(
            "repos/{}/actions/runs/{run_id}/cancel",
            self.config.repo_path()
        );

        self.api_request(Method::POST, &endpoint, None).await?;

        Ok(())
    }

    async fn get_pull_request(&self, number: u64) -> Result<PullRequest> {
        let endpoint =
            format!("repos/{}/pulls/{number}", self.config.repo_path());

        let value = self.api_request(Method::GET, &endpoint, None).await?;

        serde_json::from_value(value).map_err(|err| {
            RunsweepError::api(
                Method::GET.as_str(),
                &endpoint,
                format!("unexpected response shape: {err}"),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers;

    #[test]
    fn parse_body_passes_through_clean_payloads() {
        let body = r#"{"total_count": 0, "workflow_runs": []}"#;
        let value = parse_body("GET", "repos/o/r/actions/runs", body).unwrap();
        assert!(value.get("workflow_runs").is_some());
    }

    #[test]
    fn parse_body_surfaces_platform_error_message() {
        let body = r#"{"message": "Bad credentials", "documentation_url": "https://docs.github.com"}"#;
        let result = parse_body("GET", "repos/o/r/actions/runs", body);
        assert!(result.is_err());

        let err = result.unwrap_err().to_string();
        assert!(err.contains("GET repos/o/r/actions/runs"));
        assert!(err.contains("Bad credentials"));
    }

    #[test]
    fn parse_body_treats_empty_body_as_success() {
        let value =
            parse_body("POST", "repos/o/r/actions/runs/1/cancel", "").unwrap();
        assert!(value.is_null());

        let value = parse_body("POST", "repos/o/r/actions/runs/1/cancel", " \n")
            .unwrap();
        assert!(value.is_null());
    }

    #[test]
    fn parse_body_rejects_unparseable_payloads() {
        let result =
            parse_body("GET", "repos/o/r/pulls/1", "<html>nope</html>");
        assert!(result.is_err());
    }

    #[test]
    fn parse_body_ignores_nested_message_fields() {
        let body =
            r#"{"workflow_runs": [{"head_commit": {"message": "a fix"}}]}"#;
        assert!(parse_body("GET", "repos/o/r/actions/runs", body).is_ok());
    }

    #[test]
    fn builds_client_for_configured_repo() {
        let github =
            Github::new(test_helpers::create_test_remote_config()).unwrap();
        assert_eq!(github.repo_path(), "test-owner/test-repo");
    }
}
