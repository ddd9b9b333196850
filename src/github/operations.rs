use crate::config::Config;
use crate::editor::IssueEditor;
use crate::error::IssueError;
use crate::github::client::GitHubClient;
use crate::github::issues::{self, Issue, IssueState};
use reqwest::Method;
use tracing::info;

/// The issue commands, each one request/decode round-trip (two for update and
/// close) against the configured repository.
pub struct IssueOperations<C, E> {
    config: Config,
    client: C,
    editor: E,
}

impl<C, E> IssueOperations<C, E>
where
    C: GitHubClient,
    E: IssueEditor,
{
    pub fn new(config: Config, client: C, editor: E) -> Self {
        IssueOperations {
            config,
            client,
            editor,
        }
    }

    #[cfg(test)]
    pub(crate) fn client(&self) -> &C {
        &self.client
    }

    /// Captures a new issue in the editor and creates it.
    ///
    /// Title and body must both be non-empty; nothing is sent otherwise.
    pub async fn create(&self) -> Result<Issue, IssueError> {
        let mut issue = Issue::default();
        self.editor
            .capture(&mut issue)
            .map_err(IssueError::Editor)?;

        if issue.title.is_empty() {
            return Err(IssueError::TitleRequired);
        }
        if issue.body_text().is_empty() {
            return Err(IssueError::BodyRequired);
        }

        let response = self
            .client
            .request(Method::POST, &self.config.issues_url(), Some(&issue))
            .await
            .map_err(IssueError::Create)?;
        let created = issues::parse_issue(&response)?;
        info!(number = ?created.number, "issue created");
        Ok(created)
    }

    pub async fn list(&self) -> Result<Vec<Issue>, IssueError> {
        let response = self
            .client
            .request(Method::GET, &self.config.issues_url(), None)
            .await?;
        Ok(issues::parse_issues(&response)?)
    }

    pub async fn view(&self, number: u64) -> Result<Issue, IssueError> {
        if number == 0 {
            return Err(IssueError::NumberRequired);
        }
        let response = self
            .client
            .request(Method::GET, &self.config.issue_url(number), None)
            .await?;
        Ok(issues::parse_issue(&response)?)
    }

    /// Fetches an issue, lets the user edit it, and sends the edit back.
    pub async fn update(&self, number: u64) -> Result<Issue, IssueError> {
        if number == 0 {
            return Err(IssueError::NumberRequired);
        }
        let url = self.config.issue_url(number);

        let mut issue = self.fetch_existing(&url).await?;
        self.editor
            .capture(&mut issue)
            .map_err(|e| IssueError::Update(Box::new(e)))?;

        let response = self
            .client
            .request(Method::PATCH, &url, Some(&issue))
            .await
            .map_err(|e| IssueError::Update(Box::new(e)))?;
        let updated = issues::parse_issue(&response)?;
        info!(number, "issue updated");
        Ok(updated)
    }

    /// Closes an issue and checks the server reports it closed.
    pub async fn close(&self, number: u64) -> Result<Issue, IssueError> {
        if number == 0 {
            return Err(IssueError::NumberRequired);
        }
        let url = self.config.issue_url(number);

        let mut issue = self.fetch_existing(&url).await?;
        issue.state = Some(IssueState::Closed);

        let response = self
            .client
            .request(Method::PATCH, &url, Some(&issue))
            .await?;
        let closed = issues::parse_issue(&response)?;
        match closed.state {
            Some(IssueState::Closed) => {
                info!(number, "issue closed");
                Ok(closed)
            }
            Some(other) => Err(IssueError::Close(other)),
            None => Err(IssueError::CloseStateMissing),
        }
    }

    async fn fetch_existing(&self, url: &str) -> Result<Issue, IssueError> {
        let response = self
            .client
            .request(Method::GET, url, None)
            .await
            .map_err(IssueError::NotFound)?;
        Ok(issues::parse_issue(&response)?)
    }
}
