//! # nuages — Ti Kloud Réunion container dashboard
//!
//! Single binary for browsing the simulated container dashboard and
//! replaying scripted sessions.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::panic))]

mod commands;
mod output;

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use crate::commands::{Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli)?;
    commands::execute(cli)
}

/// Routes logs to `--log-file` when given. Otherwise the dashboard discards
/// them, since it owns the terminal, and every other command logs to stderr.
/// `--log-json` switches the format to JSON lines.
fn init_tracing(cli: &Cli) -> anyhow::Result<()> {
    let writer = match &cli.log_file {
        Some(path) => BoxMakeWriter::new(Mutex::new(open_log(path)?)),
        None if matches!(cli.command, Command::Dashboard(_)) => BoxMakeWriter::new(std::io::sink),
        None => BoxMakeWriter::new(std::io::stderr),
    };
    let builder = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(writer);
    if cli.log_json {
        builder.json().init();
    } else {
        builder.with_ansi(cli.log_file.is_none()).init();
    }
    Ok(())
}

fn open_log(path: &Path) -> anyhow::Result<std::fs::File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}
