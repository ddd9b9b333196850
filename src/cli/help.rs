pub const VERSION: &str = concat!(
    env!("CARGO_PKG_NAME"),
    " version ",
    env!("CARGO_PKG_VERSION"),
    " (rev:",
    env!("GIT_HASH"),
    ")"
);

pub const HELP: &str = "GitHub Issues CLI - manage the issues of one GitHub repository

Usage:
  ghissues <command> [args]

Commands:
  init        Configure token, repository and editor
  create      Create a new issue
  list        List the repository's issues
  view <n>    View issue number n
  update <n>  Update issue number n
  close <n>   Close issue number n
  version     Display version
  help        Display help

Examples:
  ghissues init
  ghissues create
  ghissues list
  ghissues view 123
  ghissues update 123
  ghissues close 123";
