//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for phase descriptors
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Machine-readable JSON
    Json,
    /// Human-readable summary
    Summary,
}

/// Pipeline phase to run
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Choose the queue backend and emit install-time settings
    Install,
    /// Define queue workers and emit the deployment descriptor
    Deploy,
}

/// CLI arguments for queue-setup
#[derive(Parser, Debug)]
#[command(name = "queue-setup")]
#[command(author, version, about = "Interactive queue worker setup for deployment pipelines")]
#[command(long_about = r#"
queue-setup captures how an application's background job queue should run.

Phases:
  install   Choose a queue backend. Emits QUEUE_CONNECTION and, for the
            database backend, the command that creates the jobs table.
  deploy    Define one or more workers (backend, queue, tuning). Emits the
            worker list, QUEUE_CONNECTION, and a deploy-script line that
            restarts workers before PHP reloads.

Configuration files are loaded from (in priority order):
1. QUEUE_SETUP_* environment variables
2. --config <path>          Explicit config file
3. ./queue-setup.toml       Project-level config
4. ~/.config/queue-setup/config.toml   Global config

Example:
  queue-setup install
  queue-setup deploy --env-file .env.production --out deploy.json
  queue-setup deploy --defaults -o summary
"#)]
pub struct Cli {
    /// Phase to run
    #[command(subcommand)]
    pub phase: Option<Phase>,

    /// Project env file consulted for the current queue connection
    #[arg(long, value_name = "PATH", global = true)]
    pub env_file: Option<PathBuf>,

    /// Output format (overrides config)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Write the descriptor to a file instead of stdout
    #[arg(long, value_name = "PATH", global = true)]
    pub out: Option<PathBuf>,

    /// Answer every question with its default (non-interactive)
    #[arg(long, global = true)]
    pub defaults: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and effective settings, then exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_deploy_with_flags() {
        let cli = Cli::try_parse_from([
            "queue-setup",
            "deploy",
            "--env-file",
            ".env.prod",
            "-o",
            "summary",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.phase, Some(Phase::Deploy));
        assert_eq!(cli.env_file, Some(PathBuf::from(".env.prod")));
        assert_eq!(cli.output, Some(OutputFormat::Summary));
        assert_eq!(cli.verbose, 2);
        assert!(!cli.defaults);
    }

    #[test]
    fn test_parse_install_defaults() {
        let cli = Cli::try_parse_from(["queue-setup", "--defaults", "install"]).unwrap();
        assert_eq!(cli.phase, Some(Phase::Install));
        assert!(cli.defaults);
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_show_config_without_phase() {
        let cli = Cli::try_parse_from(["queue-setup", "--show-config"]).unwrap();
        assert!(cli.show_config);
        assert!(cli.phase.is_none());
    }
}
