use crate::cli;
use crate::cli::parser::{Command, IssueCommand};
use crate::config::{self, Config};
use crate::editor::{IssueEditor, ProcessEditor};
use crate::github::client::{GitHubClient, HttpGitHubClient};
use crate::github::operations::IssueOperations;
use crate::init;
use crate::output;
use crate::storage::{self, ConfigStorage};
use anyhow::{Context, Result};
use std::io::Write;

const INIT_HINT: &str = "please run 'ghissues init' to configure.";

pub async fn run(args: Vec<String>, mut stdout_additional: Option<&mut dyn Write>) -> Result<()> {
    match cli::parser::parse_args(&args) {
        Command::Help => output::println(cli::help::HELP, &mut stdout_additional)?,
        Command::Version => output::println(cli::help::VERSION, &mut stdout_additional)?,
        Command::Usage(message) => output::println(&message, &mut stdout_additional)?,
        Command::Unknown(cmd) => {
            output::println(&format!("command not found: {cmd}"), &mut stdout_additional)?;
            output::println(cli::help::HELP, &mut stdout_additional)?;
        }
        Command::Init => {
            let storage = storage::FileConfigStorage::new();
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            init::init_config(&mut input, &storage, &mut stdout_additional)
                .context("error on start the application")?;
        }
        Command::Issue(command) => {
            let storage = storage::FileConfigStorage::new();
            let config = load_config(&storage, &mut stdout_additional)?;
            let client = HttpGitHubClient::new(&config);
            let editor = ProcessEditor::from_env(config.editor.as_deref());
            let operations = IssueOperations::new(config, client, editor);
            execute(command, &operations, &mut stdout_additional).await?;
        }
    }
    Ok(())
}

fn load_config(
    storage: &dyn ConfigStorage,
    stdout_additional: &mut Option<&mut dyn Write>,
) -> Result<Config> {
    let loaded = storage.load().and_then(|config| {
        config.ok_or_else(|| anyhow::anyhow!("{} not found", config::CONFIG_FILENAME))
    });
    match loaded {
        Ok(config) => Ok(config),
        Err(err) => {
            output::println(INIT_HINT, stdout_additional)?;
            Err(err.context("could not load config"))
        }
    }
}

/// Runs one issue command and prints its result.
pub async fn execute<C, E>(
    command: IssueCommand,
    operations: &IssueOperations<C, E>,
    stdout_additional: &mut Option<&mut dyn Write>,
) -> Result<()>
where
    C: GitHubClient,
    E: IssueEditor,
{
    match command {
        IssueCommand::Create => {
            let created = operations.create().await.context("error on create issue")?;
            output::println(&output::created_message(&created), stdout_additional)?;
        }
        IssueCommand::List => {
            let issues = operations.list().await.context("error on list issues")?;
            if issues.is_empty() {
                output::println("no issues found.", stdout_additional)?;
            } else {
                let mut buf = Vec::new();
                output::write_issues(&mut buf, &issues).context("error on print issues")?;
                print_rendered(&buf, stdout_additional)?;
            }
        }
        IssueCommand::View { number } => {
            let issue = operations.view(number).await.context("error on view issue")?;
            let mut buf = Vec::new();
            output::write_issue(&mut buf, &issue).context("error on print issue")?;
            print_rendered(&buf, stdout_additional)?;
        }
        IssueCommand::Update { number } => {
            let updated = operations
                .update(number)
                .await
                .context("error on update issue")?;
            output::println(&output::updated_message(&updated), stdout_additional)?;
        }
        IssueCommand::Close { number } => {
            operations.close(number).await.context("error on close issue")?;
            output::println("issue closed successfully", stdout_additional)?;
        }
    }
    Ok(())
}

fn print_rendered(buf: &[u8], stdout_additional: &mut Option<&mut dyn Write>) -> Result<()> {
    let text = String::from_utf8_lossy(buf);
    output::println(text.trim_end_matches('\n'), stdout_additional)?;
    Ok(())
}
