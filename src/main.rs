//! Pomodoro Timer - a terminal work/break countdown
//!
//! This tool helps you stay focused using the Pomodoro Technique:
//! - 25 minutes of focused work
//! - 5 minutes of break
//! - repeat, counting every finished work interval

use std::fs::File;
use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

use pomodoro_tui::app::runner;
use pomodoro_tui::cli::{Cli, Commands, Display, RunArgs};
use pomodoro_tui::config::AppConfig;
use pomodoro_tui::notification::DesktopNotifier;

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    if let Err(e) = init_tracing(cli.verbose, cli.log_file.as_deref()) {
        Display::show_error(&format!("{e:#}"));
        std::process::exit(1);
    }

    // Execute command
    if let Err(e) = execute(cli).await {
        Display::show_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
///
/// The terminal belongs to the UI, so logs go to a file or nowhere.
fn init_tracing(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_ansi(false);

    match log_file {
        Some(path) => {
            let file = File::options()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            builder.with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(std::io::sink).init(),
    }

    Ok(())
}

/// Executes the CLI command.
async fn execute(cli: Cli) -> Result<()> {
    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::PrintConfig) => {
            let config = load_config(&cli.run)?;
            Display::show_config(&config)?;
        }
        Some(Commands::Completions { shell }) => {
            generate_completions(shell);
        }
        None => {
            let config = load_config(&cli.run)?;
            let sender = Arc::new(DesktopNotifier::new(config.notifications));
            let state = runner::run(config, sender).await?;
            Display::show_summary(&state);
        }
    }

    Ok(())
}

/// Loads the config file and applies command-line overrides.
fn load_config(args: &RunArgs) -> Result<AppConfig> {
    let config = AppConfig::load(args.config.as_deref()).context("failed to load configuration")?;
    Ok(args.apply_to(config))
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

// ============================================================================
// Tests
// ============================================================================
