//! scrollpin - Entry Point

use clap::Parser;
use scrollpin::config::{CliOverrides, TriggerPolicy};
use std::path::PathBuf;
use tracing::info;

/// scrollpin - streaming transcript demo with bottom pinning
#[derive(Parser, Debug)]
#[command(name = "scrollpin")]
#[command(version)]
#[command(about = "Terminal demo of auto-scroll that yields to the user")]
pub struct Args {
    /// When to pin to the bottom on new content
    #[arg(long, value_parser = ["idle-timer", "bottom-visibility"])]
    pub policy: Option<String>,

    /// Seconds of idleness before auto-scroll re-arms
    #[arg(long, value_name = "SECS")]
    pub idle_threshold: Option<f64>,

    /// Seconds between idle-timer ticks
    #[arg(long, value_name = "SECS")]
    pub timer_period: Option<f64>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Start streaming immediately and keep starting new messages
    #[arg(long)]
    pub auto: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = scrollpin::config::load_config_with_precedence(args.config.clone())?;
        let merged = scrollpin::config::merge_config(config_file);
        let with_env = scrollpin::config::apply_env_overrides(merged)?;

        let overrides = CliOverrides {
            trigger_policy: args
                .policy
                .as_deref()
                .map(str::parse::<TriggerPolicy>)
                .transpose()?,
            idle_threshold_secs: args.idle_threshold,
            timer_period_secs: args.timer_period,
        };
        scrollpin::config::apply_cli_overrides(with_env, overrides)
    };

    // Invalid durations are rejected before anything starts
    let surface_config = config.surface_config()?;

    let _log_guard = scrollpin::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    scrollpin::view::run(surface_config, config.gesture_settle(), args.auto)?;

    Ok(())
}
