/// Enum representing CLI commands
#[derive(Debug, PartialEq)]
pub enum Command {
    Init,
    Issue(IssueCommand),
    Help,
    Version,
    /// Recognised verb used wrongly; carries the message to show.
    Usage(String),
    Unknown(String),
}

/// Commands that talk to the issues API
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IssueCommand {
    Create,
    List,
    View { number: u64 },
    Update { number: u64 },
    Close { number: u64 },
}

/// Verbs that take an issue number argument
const NUMBER_COMMANDS: &[&str] = &["view", "update", "close"];

pub const MISSING_NUMBER_MESSAGE: &str = "please provide an issue number";
pub const INVALID_NUMBER_MESSAGE: &str = "please provide a valid issue number";

/// Parse command line arguments and return a Command
///
/// # Arguments
/// * `args` - Command line arguments (including program name)
///
/// # Returns
/// * `Command` - The parsed command
pub fn parse_args(args: &[String]) -> Command {
    let Some(verb) = args.get(1).map(String::as_str) else {
        return Command::Help;
    };

    if NUMBER_COMMANDS.contains(&verb) {
        let Some(arg) = args.get(2) else {
            return Command::Usage(format!(
                "{MISSING_NUMBER_MESSAGE}. Usage: ghissues {verb} <number>"
            ));
        };
        let Ok(number) = arg.parse::<u64>() else {
            return Command::Usage(INVALID_NUMBER_MESSAGE.to_string());
        };
        return Command::Issue(match verb {
            "view" => IssueCommand::View { number },
            "update" => IssueCommand::Update { number },
            _ => IssueCommand::Close { number },
        });
    }

    match verb {
        "init" => Command::Init,
        "create" => Command::Issue(IssueCommand::Create),
        "list" => Command::Issue(IssueCommand::List),
        "help" | "--help" | "-h" => Command::Help,
        "version" | "--version" | "-V" => Command::Version,
        cmd => Command::Unknown(cmd.to_string()),
    }
}
