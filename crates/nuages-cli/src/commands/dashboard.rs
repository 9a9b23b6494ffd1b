//! `nuages dashboard` — Open the interactive terminal dashboard.

use anyhow::Context;
use clap::Args;
use nuages_common::config::NuagesConfig;
use nuages_core::controller::Controller;
use nuages_tui::app::App;

/// Arguments for the `dashboard` command.
#[derive(Args, Debug)]
pub struct DashboardArgs {
    /// Start with an empty registry instead of the demo containers.
    #[arg(long)]
    pub no_demo: bool,

    /// Seed for the simulated CPU values, for reproducible sessions.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Executes the `dashboard` command.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the terminal fails.
pub fn execute(args: DashboardArgs, mut config: NuagesConfig) -> anyhow::Result<()> {
    if args.no_demo {
        config.seed_demo_data = false;
    }
    let controller =
        Controller::from_config(&config, args.seed).context("invalid metrics configuration")?;
    let mut app = App::new(controller);
    nuages_tui::run(&mut app).context("dashboard terminated with an error")?;
    tracing::info!(
        containers = app.controller.containers().len(),
        "dashboard closed"
    );
    Ok(())
}
