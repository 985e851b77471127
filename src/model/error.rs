//! Error types for scrollpin.
//!
//! Errors are `thiserror` enums, one per concern, composed into [`AppError`]
//! through `From` conversions so they propagate with `?`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned by the demo binary
//!   - [`ConfigError`] - Config file loading and surface configuration validation
//!   - [`TimerError`] - Idle timer thread could not be started
//!   - `std::io::Error` - Terminal failures
//! - [`SinkError`] - Scroll target gone; never leaves the state machine
//!
//! # Recovery Strategy
//!
//! The engagement state machine itself has no failure modes. The only fallible
//! call it makes is the scroll command, and a [`SinkError`] there is swallowed
//! because it can legitimately race against teardown. Configuration errors are
//! fatal and surface at construction, never at runtime.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The idle timer could not be started.
    #[error("Timer error: {0}")]
    Timer(#[from] TimerError),

    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors from loading or validating configuration.
///
/// Carries only owned, comparable data so tests can assert on exact variants.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file.
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A duration setting is NaN or infinite.
    #[error("{field} must be a finite number of seconds, got {value}")]
    NonFiniteDuration {
        /// Setting name.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },

    /// A threshold setting is negative.
    #[error("{field} must not be negative, got {value}")]
    NegativeDuration {
        /// Setting name.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },

    /// A period setting is zero or negative.
    #[error("{field} must be greater than zero, got {value}")]
    NonPositiveDuration {
        /// Setting name.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },

    /// A duration setting is too large to represent.
    #[error("{field} is out of range, got {value}")]
    DurationOutOfRange {
        /// Setting name.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },

    /// Unrecognized trigger policy name.
    #[error("Unknown trigger policy {0:?} (expected \"idle-timer\" or \"bottom-visibility\")")]
    UnknownPolicy(String),

    /// Unrecognized scroll axis name.
    #[error("Unknown axis {0:?} (expected \"vertical\" or \"horizontal\")")]
    UnknownAxis(String),
}

/// Failure to deliver a scroll command.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SinkError {
    /// The rendering surface that owned the scroll target has been torn down.
    #[error("Scroll target has been torn down")]
    Detached,

    /// The scroll target is mid-update on the owning context (re-entrant call).
    #[error("Scroll target is busy")]
    Busy,
}

/// Failure to start a background ticker.
#[derive(Debug, Error)]
pub enum TimerError {
    /// The OS refused to spawn the timer thread.
    #[error("Failed to spawn timer thread: {0}")]
    Spawn(#[source] std::io::Error),
}
