//! `nuages replay` — Apply a JSON action script to a fresh session.
//!
//! Each action goes through the same controller entry point the dashboard
//! uses. The final snapshot is printed as pretty JSON on stdout.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use nuages_common::config::NuagesConfig;
use nuages_core::action::{self, ActionOutcome};
use nuages_core::controller::{Controller, Snapshot};
use nuages_core::metrics::FixedCpu;

/// Arguments for the `replay` command.
#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// Path to the JSON action script.
    pub script: PathBuf,

    /// Start with an empty registry instead of the demo containers.
    #[arg(long)]
    pub no_demo: bool,

    /// Report this CPU percentage for every started container.
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub cpu: Option<u8>,
}

/// Executes the `replay` command.
///
/// # Errors
///
/// Returns an error if the script cannot be loaded or the snapshot cannot
/// be serialized.
#[allow(clippy::print_stdout)]
pub fn execute(args: &ReplayArgs, config: NuagesConfig) -> anyhow::Result<()> {
    let snapshot = replay(args, config)?;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

fn replay(args: &ReplayArgs, mut config: NuagesConfig) -> anyhow::Result<Snapshot> {
    if args.no_demo {
        config.seed_demo_data = false;
    }
    let actions = action::load_script(&args.script)
        .with_context(|| format!("failed to load script {}", args.script.display()))?;

    let mut controller = match args.cpu {
        Some(cpu) => Controller::new(&config, Box::new(FixedCpu(cpu))),
        None => Controller::from_config(&config, None).context("invalid metrics configuration")?,
    };

    let total = actions.len();
    let mut applied = 0_usize;
    for (step, action) in actions.into_iter().enumerate() {
        match controller.dispatch(action) {
            ActionOutcome::Applied => applied += 1,
            ActionOutcome::Skipped => tracing::debug!(step, "action skipped"),
            ActionOutcome::Rejected(errors) => {
                tracing::warn!(step, %errors, "action rejected");
            }
        }
    }
    tracing::info!(total, applied, "script replayed");
    Ok(controller.snapshot())
}
