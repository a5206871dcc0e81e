use anyhow::{bail, Result};
use console::Term;
use dialoguer::{theme::SimpleTheme, Input};
use std::io::{self, BufRead, IsTerminal, Write};

/// Ask whether the existing `project_name` directory may be replaced.
///
/// The prompt is written to stdout. With a terminal on both stdin and stdout
/// it is a dialoguer prompt; otherwise the same text is printed and one line
/// is read from stdin.
pub fn overwrite(project_name: &str) -> Result<bool> {
    let prompt = overwrite_prompt(project_name);
    let stdout = Term::stdout();
    let reply = if io::stdin().is_terminal() && stdout.is_term() {
        Input::<String>::with_theme(&SimpleTheme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text_on(&stdout)?
    } else {
        prompt_reply(&prompt, &mut io::stdin().lock(), &mut io::stdout())?
    };
    Ok(is_affirmative(&reply))
}

/// Rendered as `{prompt}: ` by both prompt paths.
fn overwrite_prompt(project_name: &str) -> String {
    format!("Directory {project_name} already exists. Overwrite? (y/n)")
}

fn prompt_reply(prompt: &str, input: &mut impl BufRead, output: &mut impl Write) -> Result<String> {
    write!(output, "{prompt}: ")?;
    output.flush()?;
    let mut reply = String::new();
    if input.read_line(&mut reply)? == 0 {
        bail!("stdin closed before answering: {prompt}");
    }
    Ok(reply)
}

/// Only a lone `y` or `Y` accepts.
pub fn is_affirmative(reply: &str) -> bool {
    reply
        .trim_end_matches(['\r', '\n'])
        .eq_ignore_ascii_case("y")
}
