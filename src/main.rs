#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # cgpa
//!
//! An interactive CGPA calculator. Start a session with `cgpa shell`, record
//! subjects with their letter grade and credit hours, and ask for the
//! credit-weighted grade-point average at any point. Everything lives in
//! memory for the duration of one run; nothing is persisted.

use anyhow::Result;
use bpaf::*;
use cgpa::{Session, render, shell};
use tracing::{Level, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Run an interactive session on stdin/stdout
    Shell,
    /// Print the grade-point scale and exit
    Scale,
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    let shell = pure(Cmd::Shell)
        .to_options()
        .command("shell")
        .help("Start an interactive session");

    let scale = pure(Cmd::Scale)
        .to_options()
        .command("scale")
        .help("Print the grade-point scale");

    let cmd = construct!([shell, scale]);

    cmd.to_options()
        .descr("CGPA calculator for students")
        .run()
}

fn main() -> Result<()> {
    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false);
    let filter_layer = LevelFilter::from_level(Level::INFO);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    let cmd = options();

    match cmd {
        Cmd::Shell => {
            let mut session = Session::new();
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            shell::run(&mut session, stdin.lock(), stdout.lock())?;
        }
        Cmd::Scale => println!("{}", render::scale_table()),
    };

    Ok(())
}
