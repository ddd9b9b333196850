use crate::config::Config;
use crate::error::ClientError;
use crate::github::issues::Issue;
use async_trait::async_trait;
use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Upper bound for a single request, connect to last body byte.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";
const CLIENT_USER_AGENT: &str = "ghissues-cli";

/// Makes one authenticated request against the GitHub REST API.
///
/// Returns the raw body of a successful (`< 400`) response.
#[async_trait]
pub trait GitHubClient: Send + Sync {
    async fn request(
        &self,
        method: Method,
        url: &str,
        payload: Option<&Issue>,
    ) -> Result<Vec<u8>, ClientError>;
}

/// Error body returned by GitHub alongside 4xx/5xx statuses.
#[derive(Deserialize, Debug, Default)]
struct ApiErrorResponse {
    #[serde(default)]
    message: String,
}

/// Best-effort extraction of the `message` field from an error body.
fn extract_error_message(body: &[u8]) -> String {
    serde_json::from_slice::<ApiErrorResponse>(body)
        .map(|response| response.message)
        .unwrap_or_default()
}

/// [`GitHubClient`] backed by `reqwest`.
pub struct HttpGitHubClient {
    token: String,
    timeout: Duration,
}

impl HttpGitHubClient {
    pub fn new(config: &Config) -> Self {
        HttpGitHubClient {
            token: config.token.clone(),
            timeout: REQUEST_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl GitHubClient for HttpGitHubClient {
    async fn request(
        &self,
        method: Method,
        url: &str,
        payload: Option<&Issue>,
    ) -> Result<Vec<u8>, ClientError> {
        let body = payload
            .map(serde_json::to_vec)
            .transpose()
            .map_err(ClientError::Encoding)?;

        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(ClientError::RequestCreation)?;

        let mut builder = client
            .request(method.clone(), url)
            .bearer_auth(&self.token)
            .header(ACCEPT, GITHUB_ACCEPT)
            .header(USER_AGENT, CLIENT_USER_AGENT);
        if let Some(body) = body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }
        let request = builder.build().map_err(ClientError::RequestCreation)?;

        debug!(%method, url, "sending GitHub request");
        let response = client
            .execute(request)
            .await
            .map_err(ClientError::Request)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(ClientError::Read)?;
        debug!(%method, url, status = status.as_u16(), len = bytes.len(), "received GitHub response");

        if status.as_u16() >= 400 {
            let message = extract_error_message(&bytes);
            warn!(status = status.as_u16(), error_message = %message, "GitHub API returned an error");
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(bytes.to_vec())
    }
}
