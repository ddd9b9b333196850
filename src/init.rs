use crate::config::Config;
use crate::output;
use crate::storage::ConfigStorage;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

const PROMPTS: [&str; 4] = [
    "GitHub Personal Access Token: ",
    "Repository Owner (username/organization): ",
    "Repository Name: ",
    "Default text editor (empty for system default): ",
];

/// Prompts for the config values on `input` and saves them through `storage`.
pub fn init_config(
    input: &mut dyn BufRead,
    storage: &dyn ConfigStorage,
    stdout_additional: &mut Option<&mut dyn Write>,
) -> Result<Config> {
    let mut answers = Vec::with_capacity(PROMPTS.len());
    for prompt in PROMPTS {
        output::print(prompt, stdout_additional)?;
        let answer = read_answer(input)
            .with_context(|| format!("Failed to read `{}`", prompt.trim_end_matches(": ")))?;
        answers.push(answer);
    }

    let editor = Some(answers[3].as_str());
    let config = Config::new(&answers[0], &answers[1], &answers[2], editor);
    config.validate()?;
    storage.save(&config).context("could not save config")?;

    output::println("config created with success!", stdout_additional)?;
    Ok(config)
}

fn read_answer(input: &mut dyn BufRead) -> Result<String> {
    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    if read == 0 {
        anyhow::bail!("unexpected end of input");
    }
    Ok(line.trim().to_string())
}
