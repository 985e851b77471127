//! Raw interaction phase reported by a scroll surface.

use std::fmt;

/// Physical interaction state of a scroll surface.
///
/// Only the idle/non-idle boundary is significant to the engagement state
/// machine; the remaining distinctions are informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RawScrollPhase {
    /// Not moving.
    #[default]
    Idle,
    /// Finger or pointer down and following the content.
    Tracking,
    /// Dragging or otherwise directly interacting (wheel, keys).
    Interacting,
    /// Released and coasting to a stop.
    Decelerating,
    /// Moving toward a programmatic target.
    Animating,
}

impl RawScrollPhase {
    /// `true` for [`RawScrollPhase::Idle`].
    pub fn is_idle(self) -> bool {
        matches!(self, RawScrollPhase::Idle)
    }

    /// Lowercase label for status displays.
    pub fn label(self) -> &'static str {
        match self {
            RawScrollPhase::Idle => "IDLE",
            RawScrollPhase::Tracking => "tracking",
            RawScrollPhase::Interacting => "interacting",
            RawScrollPhase::Decelerating => "decelerating",
            RawScrollPhase::Animating => "animating",
        }
    }
}

impl fmt::Display for RawScrollPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A transition of the raw phase, delivered in surface order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhaseChange {
    /// Phase before the transition.
    pub previous: RawScrollPhase,
    /// Phase after the transition.
    pub new: RawScrollPhase,
}

impl PhaseChange {
    /// Create a transition from `previous` to `new`.
    pub fn new(previous: RawScrollPhase, new: RawScrollPhase) -> Self {
        Self { previous, new }
    }

    /// The surface just came to rest.
    pub fn enters_idle(&self) -> bool {
        self.new.is_idle() && !self.previous.is_idle()
    }

    /// The surface just started moving.
    pub fn leaves_idle(&self) -> bool {
        self.previous.is_idle() && !self.new.is_idle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_crossings_are_classified() {
        let start = PhaseChange::new(RawScrollPhase::Idle, RawScrollPhase::Interacting);
        assert!(start.leaves_idle());
        assert!(!start.enters_idle());

        let stop = PhaseChange::new(RawScrollPhase::Decelerating, RawScrollPhase::Idle);
        assert!(stop.enters_idle());
        assert!(!stop.leaves_idle());
    }

    #[test]
    fn non_idle_to_non_idle_is_not_a_boundary() {
        let change = PhaseChange::new(RawScrollPhase::Tracking, RawScrollPhase::Decelerating);
        assert!(!change.enters_idle());
        assert!(!change.leaves_idle());
    }

    #[test]
    fn only_idle_is_idle() {
        assert!(RawScrollPhase::Idle.is_idle());
        assert!(!RawScrollPhase::Tracking.is_idle());
        assert!(!RawScrollPhase::Interacting.is_idle());
        assert!(!RawScrollPhase::Decelerating.is_idle());
        assert!(!RawScrollPhase::Animating.is_idle());
    }
}
