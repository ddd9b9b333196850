use crate::error::EditorError;
use crate::github::issues::Issue;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Editor used on Windows when neither config nor `EDITOR` names one.
pub const WINDOWS_DEFAULT_EDITOR: &str = "notepad";
/// Editor used elsewhere when neither config nor `EDITOR` names one.
pub const DEFAULT_EDITOR: &str = "vi";

/// Lets the user edit an issue's title and body.
pub trait IssueEditor {
    fn capture(&self, issue: &mut Issue) -> Result<(), EditorError>;
}

/// Picks the editor command: config value, then `EDITOR`, then the OS default.
///
/// `os` follows `std::env::consts::OS` naming.
pub fn resolve_editor(configured: Option<&str>, env_editor: Option<&str>, os: &str) -> String {
    configured
        .filter(|e| !e.trim().is_empty())
        .or(env_editor.filter(|e| !e.trim().is_empty()))
        .map(str::to_string)
        .unwrap_or_else(|| {
            if os == "windows" {
                WINDOWS_DEFAULT_EDITOR.to_string()
            } else {
                DEFAULT_EDITOR.to_string()
            }
        })
}

/// Splits an editor command into program and arguments.
///
/// A command naming an existing file is taken whole, so paths containing
/// spaces work; otherwise it is split on whitespace (`code --wait`).
pub fn editor_argv(command: &str) -> Option<(String, Vec<String>)> {
    let trimmed = command.trim();
    if trimmed.is_empty() {
        return None;
    }
    if Path::new(trimmed).is_file() {
        return Some((trimmed.to_string(), Vec::new()));
    }
    let mut words = trimmed.split_whitespace().map(str::to_string);
    let program = words.next()?;
    Some((program, words.collect()))
}

/// Text the editor is opened with.
pub fn render_content(issue: &Issue) -> String {
    format!("{}\n\n{}", issue.title, issue.body_text())
}

/// Applies edited text to `issue`.
///
/// The first line becomes the title unless the issue already has one; the
/// trimmed remainder becomes the body.
pub fn apply_content(issue: &mut Issue, content: &str) {
    let normalized = content.replace("\r\n", "\n").replace('\r', "");
    let (first, rest) = match normalized.split_once('\n') {
        Some((first, rest)) => (first, Some(rest)),
        None => (normalized.as_str(), None),
    };

    if issue.title.is_empty() {
        issue.title = first.trim().to_string();
    }
    issue.body = Some(rest.map(str::trim).unwrap_or_default().to_string());
}

/// [`IssueEditor`] that spawns an external editor on a temp file.
pub struct ProcessEditor {
    command: String,
}

impl ProcessEditor {
    pub fn new(command: impl Into<String>) -> Self {
        ProcessEditor {
            command: command.into(),
        }
    }

    /// Editor resolved from the configured value and the current environment.
    pub fn from_env(configured: Option<&str>) -> Self {
        let env_editor = std::env::var("EDITOR").ok();
        Self::new(resolve_editor(
            configured,
            env_editor.as_deref(),
            std::env::consts::OS,
        ))
    }
}

impl IssueEditor for ProcessEditor {
    fn capture(&self, issue: &mut Issue) -> Result<(), EditorError> {
        let mut file = tempfile::Builder::new()
            .prefix("ghissue-")
            .suffix(".md")
            .tempfile()
            .map_err(EditorError::TempFile)?;
        file.write_all(render_content(issue).as_bytes())
            .map_err(EditorError::TempFile)?;
        // Closes the handle; the path is still removed on drop.
        let path = file.into_temp_path();

        let (program, args) = editor_argv(&self.command).ok_or(EditorError::EmptyCommand)?;

        debug!(editor = %self.command, path = %path.display(), "launching editor");
        let status = Command::new(program)
            .args(&args)
            .arg(&*path)
            .status()
            .map_err(|source| EditorError::Exec {
                command: self.command.clone(),
                source,
            })?;
        if !status.success() {
            return Err(EditorError::ExitStatus {
                command: self.command.clone(),
                status,
            });
        }

        let content = std::fs::read_to_string(&*path).map_err(EditorError::Read)?;
        apply_content(issue, &content);
        Ok(())
    }
}
