use crate::github::issues::Issue;
use std::io::{self, Write};

/// Writes `message` to stdout and mirrors it to `writer` when given.
pub fn println(message: &str, writer: &mut Option<&mut dyn Write>) -> io::Result<()> {
    if let Err(e) = writeln!(io::stdout(), "{message}") {
        eprintln!("Failed to write to stdout: {e}");
    }

    if let Some(w) = writer {
        writeln!(w, "{message}")?;
    }

    Ok(())
}

/// Like [`println`] without the trailing newline; used for prompts.
pub fn print(message: &str, writer: &mut Option<&mut dyn Write>) -> io::Result<()> {
    let mut stdout = io::stdout();
    if let Err(e) = write!(stdout, "{message}").and_then(|_| stdout.flush()) {
        eprintln!("Failed to write to stdout: {e}");
    }

    if let Some(w) = writer {
        write!(w, "{message}")?;
    }

    Ok(())
}

/// Writes the list header and one `#<number> - <title> (<state>)` line per issue.
pub fn write_issues<W: Write + ?Sized>(w: &mut W, issues: &[Issue]) -> io::Result<()> {
    writeln!(w, "\nIssues:")?;
    for issue in issues {
        writeln!(
            w,
            "#{} - {} ({})",
            issue.number_text(),
            issue.title,
            issue.state_text()
        )?;
    }
    Ok(())
}

/// Writes the detail block of a single issue.
pub fn write_issue<W: Write + ?Sized>(w: &mut W, issue: &Issue) -> io::Result<()> {
    write!(
        w,
        "\nIssue #{}\nTitle: {}\nState: {}\nBody:\n{}\n",
        issue.number_text(),
        issue.title,
        issue.state_text(),
        issue.body_text()
    )
}

pub fn created_message(issue: &Issue) -> String {
    format!(
        "Issue created with success!\nNumber: {}\nURL: {}",
        issue.number_text(),
        issue.url_text()
    )
}

pub fn updated_message(issue: &Issue) -> String {
    format!("Issue updated with success!\nURL: {}", issue.url_text())
}
