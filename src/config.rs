use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Filename of the configuration, resolved against the working directory.
pub const CONFIG_FILENAME: &str = ".ghissuescli";
/// Base URL used when the config does not name one.
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// Credentials and repository target shared by every command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub token: String,
    pub owner: String,
    pub repo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Config {
    pub fn new(token: &str, owner: &str, repo: &str, editor: Option<&str>) -> Self {
        Config {
            token: token.to_string(),
            owner: owner.to_string(),
            repo: repo.to_string(),
            editor: editor.filter(|e| !e.is_empty()).map(str::to_string),
            api_base_url: default_api_base_url(),
        }
    }

    /// Fails if `token`, `owner` or `repo` is blank.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("token", &self.token),
            ("owner", &self.owner),
            ("repo", &self.repo),
        ] {
            if value.trim().is_empty() {
                anyhow::bail!("Config field `{field}` must not be empty");
            }
        }
        Ok(())
    }

    /// URL of the repository's issue collection.
    pub fn issues_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/issues",
            self.api_base_url.trim_end_matches('/'),
            self.owner,
            self.repo
        )
    }

    /// URL of a single issue.
    pub fn issue_url(&self, number: u64) -> String {
        format!("{}/{}", self.issues_url(), number)
    }
}

/// Parses the JSON configuration file content.
///
/// - Returns an `Err` if the JSON is invalid or not an object of the expected shape.
/// - Returns an `Err` if `token`, `owner` or `repo` is empty.
/// - A missing or empty `api_base_url` falls back to [`DEFAULT_API_BASE_URL`].
/// - An empty `editor` is treated as absent.
pub fn parse_config(content: &[u8]) -> Result<Config> {
    let mut config: Config =
        serde_json::from_slice(content).context("Failed to parse config JSON")?;

    config.validate()?;

    if config.api_base_url.trim().is_empty() {
        config.api_base_url = default_api_base_url();
    }
    if config.editor.as_deref().is_some_and(|e| e.trim().is_empty()) {
        config.editor = None;
    }

    Ok(config)
}

/// Serializes the configuration as pretty-printed JSON.
pub fn serialize_config(config: &Config) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(config).context("Failed to encode config JSON")
}
