//! Configuration file loading with precedence handling.

use crate::config::surface::{
    Axis, SurfaceConfig, TriggerPolicy, DEFAULT_IDLE_THRESHOLD_SECS, DEFAULT_TIMER_PERIOD_SECS,
};
use crate::model::ConfigError;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "SCROLLPIN_CONFIG";

/// Environment variable overriding the trigger policy.
pub const POLICY_ENV_VAR: &str = "SCROLLPIN_POLICY";

/// Default gesture settle interval in milliseconds.
pub const DEFAULT_GESTURE_SETTLE_MS: u64 = 250;

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/scrollpin/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Trigger policy ("idle-timer" or "bottom-visibility").
    #[serde(default)]
    pub trigger_policy: Option<TriggerPolicy>,

    /// Scroll axis ("vertical" or "horizontal").
    #[serde(default)]
    pub axis: Option<Axis>,

    /// Idle seconds before auto-scroll re-arms.
    #[serde(default)]
    pub idle_threshold_secs: Option<f64>,

    /// Idle timer period in seconds.
    #[serde(default)]
    pub timer_period_secs: Option<f64>,

    /// Quiet milliseconds after which a terminal gesture counts as finished.
    #[serde(default)]
    pub gesture_settle_ms: Option<u64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args. Values
/// are not validated until [`ResolvedConfig::surface_config`].
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Trigger policy.
    pub trigger_policy: TriggerPolicy,
    /// Scroll axis.
    pub axis: Axis,
    /// Idle threshold in seconds.
    pub idle_threshold_secs: f64,
    /// Timer period in seconds.
    pub timer_period_secs: f64,
    /// Gesture settle interval in milliseconds.
    pub gesture_settle_ms: u64,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            trigger_policy: TriggerPolicy::IdleTimer,
            axis: Axis::Vertical,
            idle_threshold_secs: DEFAULT_IDLE_THRESHOLD_SECS,
            timer_period_secs: DEFAULT_TIMER_PERIOD_SECS,
            gesture_settle_ms: DEFAULT_GESTURE_SETTLE_MS,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Validate and build the surface configuration.
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`] from [`SurfaceConfig::from_secs`].
    pub fn surface_config(&self) -> Result<SurfaceConfig, ConfigError> {
        SurfaceConfig::from_secs(
            self.axis,
            self.trigger_policy,
            self.idle_threshold_secs,
            self.timer_period_secs,
        )
    }

    /// Gesture settle interval.
    pub fn gesture_settle(&self) -> Duration {
        Duration::from_millis(self.gesture_settle_ms)
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/scrollpin/scrollpin.log` on Unix-like systems, or
/// the platform equivalent. Falls back to the current directory when no
/// state directory exists.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("scrollpin").join("scrollpin.log")
    } else {
        PathBuf::from("scrollpin.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/scrollpin/config.toml` on Unix, appropriate path on
/// other platforms. Returns `None` if the config directory cannot be
/// determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("scrollpin").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `SCROLLPIN_CONFIG` environment variable
/// 3. Default path `~/.config/scrollpin/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Some(env_path) = std::env::var_os(CONFIG_ENV_VAR) {
        let env_path = env_path
            .into_string()
            .map_err(|raw| ConfigError::InvalidPath(raw.to_string_lossy().into_owned()))?;
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        trigger_policy: config.trigger_policy.unwrap_or(defaults.trigger_policy),
        axis: config.axis.unwrap_or(defaults.axis),
        idle_threshold_secs: config
            .idle_threshold_secs
            .unwrap_or(defaults.idle_threshold_secs),
        timer_period_secs: config.timer_period_secs.unwrap_or(defaults.timer_period_secs),
        gesture_settle_ms: config.gesture_settle_ms.unwrap_or(defaults.gesture_settle_ms),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks `SCROLLPIN_POLICY` for the trigger policy.
///
/// # Errors
///
/// [`ConfigError::UnknownPolicy`] if the variable is set to an unknown name.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(policy) = std::env::var(POLICY_ENV_VAR) {
        config.trigger_policy = policy.parse()?;
    }

    Ok(config)
}

/// Overrides taken from command-line flags. `None` means "not given".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOverrides {
    /// `--policy`
    pub trigger_policy: Option<TriggerPolicy>,
    /// `--idle-threshold`
    pub idle_threshold_secs: Option<f64>,
    /// `--timer-period`
    pub timer_period_secs: Option<f64>,
}

/// Apply CLI argument overrides to resolved config.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, overrides: CliOverrides) -> ResolvedConfig {
    if let Some(policy) = overrides.trigger_policy {
        config.trigger_policy = policy;
    }

    if let Some(secs) = overrides.idle_threshold_secs {
        config.idle_threshold_secs = secs;
    }

    if let Some(secs) = overrides.timer_period_secs {
        config.timer_period_secs = secs;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
