//! Engagement phase and state owned by the auto-scroll state machine.

use std::fmt;
use std::time::{Duration, Instant};

/// Who currently "owns" scroll motion on a surface.
///
/// Exactly one variant is active at any instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EngagementPhase {
    /// The user is driving the viewport; auto-scroll must not interfere.
    UserScrolling,
    /// A scroll-to-bottom issued by the state machine is in flight.
    AutoScrolling,
    /// The viewport is motionless but not yet idle long enough to re-arm.
    #[default]
    Idle,
    /// The viewport has been motionless past the threshold; the next content
    /// change scrolls to the bottom.
    IdleExpired,
}

impl EngagementPhase {
    /// Every phase, in declaration order.
    pub const ALL: [EngagementPhase; 4] = [
        EngagementPhase::UserScrolling,
        EngagementPhase::AutoScrolling,
        EngagementPhase::Idle,
        EngagementPhase::IdleExpired,
    ];

    /// Short human-readable label for status displays.
    pub fn label(self) -> &'static str {
        match self {
            EngagementPhase::AutoScrolling => "AUTO SCROLLING",
            EngagementPhase::UserScrolling => "USER SCROLLING",
            EngagementPhase::Idle => "idle",
            EngagementPhase::IdleExpired => "idle [timer expired]",
        }
    }
}

impl fmt::Display for EngagementPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Instant the viewport entered [`EngagementPhase::Idle`].
///
/// `Instant` cannot express "infinitely far" in either direction, so the two
/// sentinels are explicit variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IdleSince {
    /// Infinitely in the past: always eligible to expire.
    #[default]
    DistantPast,
    /// Idle since this instant.
    At(Instant),
    /// Infinitely in the future: never eligible to expire.
    DistantFuture,
}

impl IdleSince {
    /// Whether more than `threshold` has elapsed between `self` and `now`.
    ///
    /// Strictly greater: being idle for exactly `threshold` does not expire.
    pub fn has_exceeded(self, now: Instant, threshold: Duration) -> bool {
        match self {
            IdleSince::DistantPast => true,
            IdleSince::At(since) => now.saturating_duration_since(since) > threshold,
            IdleSince::DistantFuture => false,
        }
    }
}

/// Engagement state of one scrollable surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EngagementState {
    /// Current phase.
    pub phase: EngagementPhase,
    /// When the surface last became idle.
    pub idle_since: IdleSince,
}

impl EngagementState {
    /// Fresh state: idle, and immediately eligible to expire.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_idle_since_distant_past() {
        let state = EngagementState::new();
        assert_eq!(state.phase, EngagementPhase::Idle);
        assert_eq!(state.idle_since, IdleSince::DistantPast);
    }

    #[test]
    fn distant_past_always_exceeds() {
        let now = Instant::now();
        assert!(IdleSince::DistantPast.has_exceeded(now, Duration::from_secs(3600)));
    }

    #[test]
    fn distant_future_never_exceeds() {
        let now = Instant::now();
        assert!(!IdleSince::DistantFuture.has_exceeded(now, Duration::ZERO));
    }

    #[test]
    fn exact_threshold_does_not_exceed() {
        let since = Instant::now();
        let threshold = Duration::from_secs(10);
        assert!(!IdleSince::At(since).has_exceeded(since + threshold, threshold));
        assert!(IdleSince::At(since).has_exceeded(
            since + threshold + Duration::from_millis(1),
            threshold
        ));
    }

    #[test]
    fn instant_before_since_does_not_exceed() {
        let now = Instant::now();
        let since = now + Duration::from_secs(5);
        assert!(!IdleSince::At(since).has_exceeded(now, Duration::ZERO));
    }

    #[test]
    fn labels_match_status_text() {
        assert_eq!(EngagementPhase::AutoScrolling.to_string(), "AUTO SCROLLING");
        assert_eq!(EngagementPhase::UserScrolling.to_string(), "USER SCROLLING");
        assert_eq!(EngagementPhase::Idle.to_string(), "idle");
        assert_eq!(EngagementPhase::IdleExpired.to_string(), "idle [timer expired]");
    }
}
