//! CLI command definitions and dispatch.

pub mod dashboard;
pub mod images;
pub mod replay;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use nuages_common::config::NuagesConfig;

/// Nuages — container dashboard for Ti Kloud Réunion.
#[derive(Parser, Debug)]
#[command(name = "nuages", version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Path to a JSON configuration file.
    #[arg(long, global = true, env = "NUAGES_CONFIG")]
    pub config: Option<PathBuf>,

    /// Append logs to this file instead of the terminal.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    pub log_json: bool,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the interactive dashboard.
    Dashboard(dashboard::DashboardArgs),
    /// Apply a JSON action script and print the resulting state.
    Replay(replay::ReplayArgs),
    /// List the base images and services a Nuage can be built from.
    Images(images::ImagesArgs),
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if configuration loading or the command fails.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    match cli.command {
        Command::Dashboard(args) => dashboard::execute(args, config),
        Command::Replay(args) => replay::execute(&args, config),
        Command::Images(args) => images::execute(&args),
    }
}

/// Reads the config file if one was given, falling back to defaults.
fn load_config(path: Option<&Path>) -> anyhow::Result<NuagesConfig> {
    let Some(path) = path else {
        return Ok(NuagesConfig::default());
    };
    tracing::debug!(path = %path.display(), "loading configuration");
    NuagesConfig::load(path)
        .with_context(|| format!("failed to load configuration from {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn parses_dashboard_flags() {
        let cli = Cli::try_parse_from(["nuages", "dashboard", "--no-demo", "--seed", "7"]).unwrap();
        let Command::Dashboard(args) = cli.command else {
            panic!("expected dashboard");
        };
        assert!(args.no_demo);
        assert_eq!(args.seed, Some(7));
    }

    #[test]
    fn parses_replay_with_global_flags() {
        let cli = Cli::try_parse_from([
            "nuages",
            "replay",
            "script.json",
            "--cpu",
            "42",
            "--log-file",
            "nuages.log",
        ])
        .unwrap();
        assert_eq!(cli.log_file, Some(PathBuf::from("nuages.log")));
        assert!(!cli.log_json);
        let Command::Replay(args) = cli.command else {
            panic!("expected replay");
        };
        assert_eq!(args.script, PathBuf::from("script.json"));
        assert_eq!(args.cpu, Some(42));
        assert!(!args.no_demo);
    }

    #[test]
    fn log_json_is_accepted_after_the_subcommand() {
        let cli = Cli::try_parse_from(["nuages", "images", "--log-json"]).unwrap();
        assert!(cli.log_json);
        assert!(matches!(cli.command, Command::Images(_)));
    }

    #[test]
    fn rejects_cpu_above_one_hundred() {
        assert!(Cli::try_parse_from(["nuages", "replay", "s.json", "--cpu", "150"]).is_err());
    }

    #[test]
    fn missing_config_path_uses_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config, NuagesConfig::default());
    }

    #[test]
    fn config_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"domain_suffix": "cloud.test"}}"#).unwrap();
        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.domain_suffix, "cloud.test");
    }

    #[test]
    fn unreadable_config_is_reported() {
        let err = load_config(Some(Path::new("/nonexistent/nuages.json"))).unwrap_err();
        assert!(err.to_string().contains("failed to load configuration"));
    }
}
