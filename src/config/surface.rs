//! Construction-time configuration of a scrollable surface.

use crate::model::ConfigError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Default idle period after which auto-scroll re-arms.
pub const DEFAULT_IDLE_THRESHOLD_SECS: f64 = 10.0;

/// Default idle-timer cadence.
pub const DEFAULT_TIMER_PERIOD_SECS: f64 = 2.0;

/// Scroll axis of the surface.
///
/// The engagement logic is axis-agnostic: "bottom" is the trailing edge of
/// whichever axis is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Axis {
    /// Top-to-bottom scrolling.
    #[default]
    Vertical,
    /// Left-to-right scrolling.
    Horizontal,
}

impl FromStr for Axis {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vertical" => Ok(Axis::Vertical),
            "horizontal" => Ok(Axis::Horizontal),
            other => Err(ConfigError::UnknownAxis(other.to_string())),
        }
    }
}

/// Which rule decides whether a content change scrolls to the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TriggerPolicy {
    /// Follow the engagement phase; re-arm after a sustained idle period.
    #[default]
    IdleTimer,
    /// Scroll whenever the bottom sentinel is currently visible.
    BottomVisibility,
}

impl TriggerPolicy {
    /// Name used in config files, env vars and CLI flags.
    pub fn as_str(self) -> &'static str {
        match self {
            TriggerPolicy::IdleTimer => "idle-timer",
            TriggerPolicy::BottomVisibility => "bottom-visibility",
        }
    }
}

impl fmt::Display for TriggerPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TriggerPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "idle-timer" => Ok(TriggerPolicy::IdleTimer),
            "bottom-visibility" => Ok(TriggerPolicy::BottomVisibility),
            other => Err(ConfigError::UnknownPolicy(other.to_string())),
        }
    }
}

/// Validated surface configuration.
///
/// Fields are private so every instance has passed validation; build one with
/// [`SurfaceConfig::new`] or [`SurfaceConfig::from_secs`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceConfig {
    axis: Axis,
    trigger_policy: TriggerPolicy,
    idle_threshold: Duration,
    timer_period: Duration,
}

impl SurfaceConfig {
    /// Default configuration with the given policy.
    pub fn new(trigger_policy: TriggerPolicy) -> Self {
        Self {
            trigger_policy,
            ..Self::default()
        }
    }

    /// Build a configuration from second-based values, validating them.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::NonFiniteDuration`] if either value is NaN or infinite
    /// - [`ConfigError::NegativeDuration`] if the idle threshold is negative
    /// - [`ConfigError::NonPositiveDuration`] if the timer period is not positive
    /// - [`ConfigError::DurationOutOfRange`] if either value overflows a [`Duration`]
    pub fn from_secs(
        axis: Axis,
        trigger_policy: TriggerPolicy,
        idle_threshold_secs: f64,
        timer_period_secs: f64,
    ) -> Result<Self, ConfigError> {
        let idle_threshold = checked_secs("idle_threshold_secs", idle_threshold_secs, true)?;
        let timer_period = checked_secs("timer_period_secs", timer_period_secs, false)?;

        Ok(Self {
            axis,
            trigger_policy,
            idle_threshold,
            timer_period,
        })
    }

    /// Replace the idle threshold.
    ///
    /// # Errors
    ///
    /// Same validation as [`SurfaceConfig::from_secs`].
    pub fn with_idle_threshold_secs(mut self, secs: f64) -> Result<Self, ConfigError> {
        self.idle_threshold = checked_secs("idle_threshold_secs", secs, true)?;
        Ok(self)
    }

    /// Replace the timer period.
    ///
    /// # Errors
    ///
    /// Same validation as [`SurfaceConfig::from_secs`].
    pub fn with_timer_period_secs(mut self, secs: f64) -> Result<Self, ConfigError> {
        self.timer_period = checked_secs("timer_period_secs", secs, false)?;
        Ok(self)
    }

    /// Scroll axis.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Trigger policy.
    pub fn trigger_policy(&self) -> TriggerPolicy {
        self.trigger_policy
    }

    /// Idle duration that must be exceeded before auto-scroll re-arms.
    pub fn idle_threshold(&self) -> Duration {
        self.idle_threshold
    }

    /// Idle-timer cadence.
    pub fn timer_period(&self) -> Duration {
        self.timer_period
    }
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            axis: Axis::Vertical,
            trigger_policy: TriggerPolicy::IdleTimer,
            idle_threshold: Duration::from_secs_f64(DEFAULT_IDLE_THRESHOLD_SECS),
            timer_period: Duration::from_secs_f64(DEFAULT_TIMER_PERIOD_SECS),
        }
    }
}

fn checked_secs(field: &'static str, value: f64, allow_zero: bool) -> Result<Duration, ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFiniteDuration { field, value });
    }
    if value < 0.0 {
        return if allow_zero {
            Err(ConfigError::NegativeDuration { field, value })
        } else {
            Err(ConfigError::NonPositiveDuration { field, value })
        };
    }
    if value == 0.0 && !allow_zero {
        return Err(ConfigError::NonPositiveDuration { field, value });
    }
    Duration::try_from_secs_f64(value).map_err(|_| ConfigError::DurationOutOfRange { field, value })
}
