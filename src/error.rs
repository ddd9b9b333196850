use crate::github::issues::IssueState;
use thiserror::Error;

/// Failures of a single request made through a [`crate::github::client::GitHubClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("could not encode request payload")]
    Encoding(#[source] serde_json::Error),

    #[error("could not create request")]
    RequestCreation(#[source] reqwest::Error),

    #[error("request failed")]
    Request(#[source] reqwest::Error),

    #[error("could not read response body")]
    Read(#[source] reqwest::Error),

    #[error("GitHub API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// Failures of the editor capture round-trip.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("could not create temp file")]
    TempFile(#[source] std::io::Error),

    #[error("no editor command configured")]
    EmptyCommand,

    #[error("could not exec editor `{command}`")]
    Exec {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("editor `{command}` exited with {status}")]
    ExitStatus {
        command: String,
        status: std::process::ExitStatus,
    },

    #[error("could not read editor output")]
    Read(#[source] std::io::Error),
}

/// Failures of the issue operations.
#[derive(Debug, Error)]
pub enum IssueError {
    #[error("title is required")]
    TitleRequired,

    #[error("body is required")]
    BodyRequired,

    #[error("issue number is required")]
    NumberRequired,

    #[error("editor error")]
    Editor(#[source] EditorError),

    #[error("could not create issue")]
    Create(#[source] ClientError),

    #[error("issue not found")]
    NotFound(#[source] ClientError),

    #[error("could not process response")]
    Processing(#[from] serde_json::Error),

    #[error("could not update issue")]
    Update(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("could not close issue: state is `{0}`")]
    Close(IssueState),

    #[error("could not close issue: response has no state")]
    CloseStateMissing,

    #[error(transparent)]
    Client(#[from] ClientError),
}

impl IssueError {
    #[cfg(test)]
    pub(crate) fn is_validation(&self) -> bool {
        matches!(
            self,
            IssueError::TitleRequired | IssueError::BodyRequired | IssueError::NumberRequired
        )
    }
}
