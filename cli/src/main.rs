//! CLI entrypoint for queue-setup
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod logging;

use anyhow::{Context, Result, bail};
use clap::Parser;
use queue_setup_application::{
    AcceptDefaults, DeployQueueWorkersUseCase, InstallQueueUseCase, PromptSession,
};
use queue_setup_domain::{DeployDescriptor, InstallDescriptor};
use queue_setup_infrastructure::{
    ConfigLoader, DescriptorWriter, DotenvEnvironment, FileConfig, FileOutputFormat,
};
use queue_setup_presentation::{Cli, ConsoleFormatter, ConsolePromptSession, OutputFormat, Phase};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    config.validate().context("Invalid configuration")?;

    if cli.show_config {
        ConfigLoader::print_config_sources();
        println!();
        println!("{}", config.to_toml()?);
        return Ok(());
    }

    let _log_guard = logging::init(cli.verbose, &config.logging)
        .context("Failed to initialize logging")?;

    let color = config.output.color && !cli.no_color;
    if !color {
        colored::control::set_override(false);
    }

    let Some(phase) = cli.phase else {
        bail!("A phase is required: `queue-setup install` or `queue-setup deploy`. See --help.");
    };

    let format = cli.output.unwrap_or(match config.output.format {
        FileOutputFormat::Json => OutputFormat::Json,
        FileOutputFormat::Summary => OutputFormat::Summary,
    });

    // === Dependency Injection ===
    let mut prompt: Box<dyn PromptSession> = if cli.defaults {
        Box::new(AcceptDefaults)
    } else {
        Box::new(ConsolePromptSession::terminal().with_color(color))
    };

    info!(?phase, "Starting queue-setup");

    match phase {
        Phase::Install => {
            let mut descriptor = InstallDescriptor::new();
            InstallQueueUseCase::new().execute(prompt.as_mut(), &mut descriptor)?;

            emit(&descriptor, format, cli.out.as_deref(), || {
                ConsoleFormatter::format_install(&descriptor)
            })
        }
        Phase::Deploy => {
            let env_file = env_file_path(cli.env_file, &config);
            let env = DotenvEnvironment::from_file(&env_file)?;

            let mut descriptor = DeployDescriptor::new();
            DeployQueueWorkersUseCase::new(config.setup_config()).execute(
                prompt.as_mut(),
                &env,
                &mut descriptor,
            )?;

            emit(&descriptor, format, cli.out.as_deref(), || {
                ConsoleFormatter::format_deploy(&descriptor)
            })
        }
    }
}

fn env_file_path(flag: Option<PathBuf>, config: &FileConfig) -> PathBuf {
    flag.unwrap_or_else(|| PathBuf::from(&config.environment.file))
}

/// Write the descriptor: JSON to `out` when given, then stdout in the
/// requested format (nothing on stdout for JSON already sent to a file).
fn emit<T: Serialize>(
    descriptor: &T,
    format: OutputFormat,
    out: Option<&Path>,
    summary: impl FnOnce() -> String,
) -> Result<()> {
    if let Some(path) = out {
        DescriptorWriter::write_file(descriptor, path)?;
    }

    match (format, out) {
        (OutputFormat::Summary, _) => print!("{}", summary()),
        (OutputFormat::Json, None) => DescriptorWriter::write(descriptor, &mut std::io::stdout())?,
        (OutputFormat::Json, Some(_)) => {}
    }
    Ok(())
}
