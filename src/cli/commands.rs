//! Command definitions for the Pomodoro Timer CLI.
//!
//! Uses clap derive macro for argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::AppConfig;
use crate::types::Theme;

// ============================================================================
// CLI Structure
// ============================================================================

/// Pomodoro Timer - work/break countdown in your terminal
#[derive(Parser, Debug)]
#[command(
    name = "pomodoro-tui",
    version,
    about = "Terminal Pomodoro timer",
    long_about = "A full-screen Pomodoro timer that alternates work and break intervals,\n\
                  counts completed pomodoros and notifies you when an interval ends.",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute (runs the timer when omitted)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Timer options
    #[command(flatten)]
    pub run: RunArgs,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write logs to this file (logs are discarded otherwise)
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the effective configuration as TOML
    PrintConfig,

    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ============================================================================
// Run Arguments
// ============================================================================

/// Options that override the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Work duration in minutes (1-120)
    #[arg(
        short,
        long,
        value_parser = clap::value_parser!(u32).range(1..=120)
    )]
    pub work: Option<u32>,

    /// Break duration in minutes (1-120)
    #[arg(
        short,
        long,
        value_parser = clap::value_parser!(u32).range(1..=120)
    )]
    pub break_time: Option<u32>,

    /// Start with the dark theme
    #[arg(long)]
    pub dark: bool,

    /// Disable desktop notifications
    #[arg(long)]
    pub no_notify: bool,

    /// Read defaults from this config file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl RunArgs {
    /// Applies the command-line overrides on top of a loaded config.
    pub fn apply_to(&self, mut config: AppConfig) -> AppConfig {
        if let Some(work) = self.work {
            config.work_minutes = work;
        }
        if let Some(break_time) = self.break_time {
            config.break_minutes = break_time;
        }
        if self.dark {
            config.theme = Theme::Dark;
        }
        if self.no_notify {
            config.notifications = false;
        }
        config
    }
}

// ============================================================================
// Tests
// ============================================================================
