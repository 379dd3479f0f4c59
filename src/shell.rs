#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::{render, session::Session};

/// Prompt printed before each command.
const PROMPT: &str = "cgpa> ";

/// Help text listing every shell command.
const HELP: &str = "\
Commands:
  add <name> <grade> <credits>   record a subject (grade and credits last)
  list                           show everything recorded so far
  cgpa                           calculate the CGPA over recorded subjects
  scale                          show the grade-point scale
  json                           dump recorded subjects as JSON
  help                           show this message
  quit                           end the session";

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Record a subject from raw text fields.
    Add {
        /// The subject name; may be empty or contain spaces.
        name:    String,
        /// The raw grade symbol, validated by the session.
        grade:   String,
        /// The raw credits text, validated by the session.
        credits: String,
    },
    /// `add` was given fewer than two arguments.
    AddUsage,
    /// Show the recorded subjects.
    List,
    /// Calculate and show the CGPA.
    Cgpa,
    /// Show the grade-point scale.
    Scale,
    /// Dump the recorded subjects as JSON.
    Json,
    /// Show the command summary.
    Help,
    /// End the session.
    Quit,
    /// Anything unrecognized, carrying the offending keyword.
    Unknown(String),
}

/// Parses one input line. Returns `None` for blank lines.
///
/// For `add`, the grade and credits are the last two whitespace-separated
/// tokens and the name is everything in between, so multi-word names need no
/// quoting: `add Data Structures A+ 4`.
pub fn parse_command(line: &str) -> Option<Command> {
    let mut tokens = line.split_whitespace();
    let keyword = tokens.next()?;

    Some(match keyword.to_lowercase().as_str() {
        "add" => {
            let rest: Vec<&str> = tokens.collect();
            if rest.len() < 2 {
                Command::AddUsage
            } else {
                Command::Add {
                    name:    rest[..rest.len() - 2].join(" "),
                    grade:   rest[rest.len() - 2].to_string(),
                    credits: rest[rest.len() - 1].to_string(),
                }
            }
        }
        "list" => Command::List,
        "cgpa" | "calc" | "calculate" => Command::Cgpa,
        "scale" => Command::Scale,
        "json" => Command::Json,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    })
}

/// Runs the interactive loop over `input`, writing everything to `out`.
///
/// Every error a command produces is rendered and the loop continues; only
/// `quit`/`exit` or end of input ends the session.
pub fn run<R: BufRead, W: Write>(session: &mut Session, mut input: R, mut out: W) -> Result<()> {
    let mut line = String::new();
    loop {
        write!(out, "{PROMPT}").context("Could not write prompt")?;
        out.flush().context("Could not flush output")?;

        line.clear();
        if input.read_line(&mut line).context("Could not read input")? == 0 {
            writeln!(out).context("Could not write output")?;
            break;
        }

        let Some(command) = parse_command(&line) else {
            continue;
        };

        match command {
            Command::Add {
                name,
                grade,
                credits,
            } => match session.add_subject(&name, &grade, &credits) {
                Ok(subject) => {
                    writeln!(out, "added {subject}")?;
                    writeln!(out, "{}", render::subject_table(session.subjects()))?;
                }
                Err(e) => writeln!(out, "{}", render::error_line(&e))?,
            },
            Command::AddUsage => {
                writeln!(out, "usage: add <name> <grade> <credits>")?;
            }
            Command::List => {
                if session.subjects().is_empty() {
                    writeln!(out, "nothing recorded yet; try `add <name> <grade> <credits>`")?;
                } else {
                    writeln!(out, "{}", render::subject_table(session.subjects()))?;
                }
            }
            Command::Cgpa => match session.cgpa() {
                Ok(cgpa) => writeln!(out, "{}", render::cgpa_line(cgpa))?,
                Err(e) => writeln!(out, "{}", render::error_line(&e))?,
            },
            Command::Scale => writeln!(out, "{}", render::scale_table())?,
            Command::Json => {
                let json = serde_json::to_string_pretty(session.subjects())
                    .context("Could not serialize subjects")?;
                writeln!(out, "{json}")?;
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => break,
            Command::Unknown(keyword) => {
                writeln!(out, "unknown command `{keyword}`; try `help`")?;
            }
        }
    }

    Ok(())
}
