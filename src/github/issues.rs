use serde::{Deserialize, Serialize};
use std::fmt;

/// A GitHub issue as sent to and decoded from the issues API.
///
/// `number` and `html_url` are assigned by the server and never serialized
/// back into request payloads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(default, skip_serializing)]
    pub number: Option<u64>,
    #[serde(default)]
    pub title: String,
    /// An empty body is left out of payloads so the server keeps its own.
    #[serde(default, skip_serializing_if = "is_blank_body")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<IssueState>,
    #[serde(default, skip_serializing)]
    pub html_url: Option<String>,
}

fn is_blank_body(body: &Option<String>) -> bool {
    body.as_deref().is_none_or(str::is_empty)
}

impl Issue {
    pub fn body_text(&self) -> &str {
        self.body.as_deref().unwrap_or_default()
    }

    pub fn number_text(&self) -> String {
        self.number.map(|n| n.to_string()).unwrap_or_default()
    }

    pub fn state_text(&self) -> String {
        self.state.as_ref().map(ToString::to_string).unwrap_or_default()
    }

    pub fn url_text(&self) -> &str {
        self.html_url.as_deref().unwrap_or_default()
    }
}

/// Issue state. Anything other than `open`/`closed` is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IssueState {
    Open,
    Closed,
    Other(String),
}

impl From<String> for IssueState {
    fn from(value: String) -> Self {
        match value.as_str() {
            "open" => IssueState::Open,
            "closed" => IssueState::Closed,
            _ => IssueState::Other(value),
        }
    }
}

impl From<IssueState> for String {
    fn from(state: IssueState) -> Self {
        state.to_string()
    }
}

impl fmt::Display for IssueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueState::Open => f.write_str("open"),
            IssueState::Closed => f.write_str("closed"),
            IssueState::Other(state) => f.write_str(state),
        }
    }
}

/// Decodes a single-issue response body.
pub fn parse_issue(body: &[u8]) -> serde_json::Result<Issue> {
    serde_json::from_slice(body)
}

/// Decodes an issue-list response body, preserving order.
pub fn parse_issues(body: &[u8]) -> serde_json::Result<Vec<Issue>> {
    serde_json::from_slice(body)
}
