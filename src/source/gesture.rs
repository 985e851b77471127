//! Terminal input to raw scroll phases.
//!
//! Terminals report discrete scroll inputs, not a continuous interaction
//! phase. [`GestureTracker`] reconstructs one: inputs move the phase out of
//! idle immediately, and the phase settles back to idle once no input has
//! arrived for the settle interval.

use crate::model::RawScrollPhase;
use crate::source::phase::{PhaseEmitter, PhaseHandler, RawScrollPhaseSource};
use std::time::{Duration, Instant};

/// Default quiet interval after which a gesture is considered finished.
pub const DEFAULT_SETTLE: Duration = Duration::from_millis(250);

/// A discrete scroll input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Mouse wheel notch.
    Wheel,
    /// Scroll key (arrows, page keys, home/end).
    Key,
    /// Pointer pressed on the scroll area, or moved while pressed.
    Drag,
    /// Pointer released after a drag.
    Release,
    /// Scroll issued by the application rather than the user.
    Programmatic,
}

/// Derives [`RawScrollPhase`] transitions from terminal scroll input.
#[derive(Debug)]
pub struct GestureTracker {
    emitter: PhaseEmitter,
    settle: Duration,
    last_activity: Option<Instant>,
    pressed: bool,
}

impl GestureTracker {
    /// Tracker that settles after `settle` without input.
    pub fn new(settle: Duration) -> Self {
        Self {
            emitter: PhaseEmitter::new(),
            settle,
            last_activity: None,
            pressed: false,
        }
    }

    /// Current raw phase.
    pub fn phase(&self) -> RawScrollPhase {
        self.emitter.current()
    }

    /// Record one input at `now`.
    pub fn record(&mut self, gesture: Gesture, now: Instant) {
        self.last_activity = Some(now);
        let current = self.emitter.current();

        let next = match gesture {
            Gesture::Drag => {
                self.pressed = true;
                RawScrollPhase::Tracking
            }
            Gesture::Release => {
                self.pressed = false;
                if current.is_idle() {
                    return;
                }
                RawScrollPhase::Decelerating
            }
            Gesture::Wheel | Gesture::Key if self.pressed => RawScrollPhase::Tracking,
            Gesture::Wheel | Gesture::Key => RawScrollPhase::Interacting,
            // User motion already in progress wins over an app-driven scroll.
            Gesture::Programmatic => match current {
                RawScrollPhase::Idle | RawScrollPhase::Animating => RawScrollPhase::Animating,
                other => other,
            },
        };
        self.emitter.set(next);
    }

    /// Settle to idle if the quiet interval has passed.
    pub fn poll(&mut self, now: Instant) {
        if let Some(deadline) = self.settle_deadline() {
            if now >= deadline {
                self.last_activity = None;
                self.emitter.set(RawScrollPhase::Idle);
            }
        }
    }

    /// When [`GestureTracker::poll`] will next change the phase, if ever.
    pub fn settle_deadline(&self) -> Option<Instant> {
        if self.pressed || self.emitter.current().is_idle() {
            return None;
        }
        // An unrepresentable deadline never settles.
        self.last_activity.and_then(|at| at.checked_add(self.settle))
    }
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SETTLE)
    }
}

impl RawScrollPhaseSource for GestureTracker {
    fn subscribe(&mut self, handler: PhaseHandler) {
        self.emitter.subscribe(handler);
    }
}
