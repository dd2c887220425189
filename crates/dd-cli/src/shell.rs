//! `dd shell`: many commands against one manager, so an ephemeral session
//! lives until the shell exits.

use crate::cli::ShellLine;
use crate::{CliResult, Commands, runner, shell_words};

use std::io::Write;

use clap::Parser;
use dd_session::SessionManager;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

const EXIT_WORDS: [&str; 2] = ["exit", "quit"];

/// Run every line from `input`, writing results and errors to `out`.
///
/// Stops at EOF or on `exit` / `quit`. A bad line is reported and skipped.
pub async fn run_lines<R, W>(
    manager: &SessionManager,
    input: R,
    out: &mut W,
    pretty: bool,
) -> CliResult<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if EXIT_WORDS.contains(&line) {
            break;
        }

        let words = match shell_words::split(line) {
            Ok(words) => words,
            Err(e) => {
                writeln!(out, "Error: {}", e)?;
                continue;
            }
        };

        let command = match ShellLine::try_parse_from(words) {
            Ok(parsed) => parsed.command,
            Err(e) => {
                write!(out, "{}", e.render())?;
                continue;
            }
        };

        match run_command(manager, command, pretty).await {
            Ok(json) => writeln!(out, "{}", json)?,
            Err(e) => writeln!(out, "Error: {}", e)?,
        }
        out.flush()?;
    }

    Ok(())
}

async fn run_command(manager: &SessionManager, command: Commands, pretty: bool) -> CliResult<String> {
    let value = runner::execute(manager, command).await?;
    runner::render(&value, pretty)
}
