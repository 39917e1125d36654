//! `todolist` process entry point.
//!
//! # Responsibility
//! - Build the single in-memory store for this process.
//! - Serve tool calls over stdin/stdout, or print the tool catalog.

mod channel;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use todolist_core::{default_log_level, init_logging};
use todolist_tools::{catalog_listing, ToolHost};

#[derive(Debug, Parser)]
#[command(name = "todolist", version, about = "In-memory todo lists exposed as agent tools")]
struct Cli {
    /// trace|debug|info|warn|error; defaults by build mode.
    #[arg(long, env = "TODOLIST_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long, env = "TODOLIST_LOG_DIR")]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
enum Command {
    /// Answer line-delimited JSON tool calls until stdin closes.
    Serve,
    /// Print every tool with its argument schema as JSON.
    Tools,
}

impl Cli {
    fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(default_log_level())
    }

    fn command(&self) -> Command {
        self.command.unwrap_or(Command::Serve)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout carries the message channel, so logs only ever go to files.
    if let Some(log_dir) = cli.log_dir.as_deref() {
        init_logging(cli.log_level(), log_dir).context("failed to initialize logging")?;
    }

    match cli.command() {
        Command::Serve => {
            let mut host = ToolHost::new();
            let stdin = io::stdin();
            let stdout = io::stdout();
            channel::serve(&mut host, stdin.lock(), stdout.lock())
                .context("tool channel failed")?;
        }
        Command::Tools => write_catalog(io::stdout().lock())?,
    }

    Ok(())
}

fn write_catalog<W: Write>(mut output: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut output, &catalog_listing())?;
    writeln!(output)?;
    Ok(())
}
