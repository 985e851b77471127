//! Auto-scroll decision core.
//!
//! [`transition`] is the pure idle-timer-gated transition function: it maps an
//! [`EngagementState`] and one event to the next state plus a scroll decision.
//! [`AutoScrollStateMachine`] wraps it together with the bottom-visibility
//! policy behind one configuration switch, and is the only writer of the
//! engagement state.
//!
//! # Idle-timer policy
//!
//! | Event | Guard | Result |
//! |---|---|---|
//! | raw phase enters idle | | `Idle`, idle since now |
//! | raw phase leaves idle | `AutoScrolling` / `UserScrolling` | unchanged |
//! | raw phase leaves idle | `Idle` / `IdleExpired` | `UserScrolling`, idle since never |
//! | tick | `Idle` past threshold | `IdleExpired` |
//! | content changed | `IdleExpired` | scroll, `AutoScrolling` |
//! | content changed | any other phase | unchanged, no scroll |
//!
//! Only a tick moves `Idle` to `IdleExpired`, and only a scroll command moves
//! the phase to `AutoScrolling`. A raw boundary crossing while `IdleExpired`
//! had no command behind it, so it is the user.

use crate::config::{SurfaceConfig, TriggerPolicy};
use crate::model::{EngagementPhase, EngagementState, IdleSince, PhaseChange, SinkError};
use crate::sink::ScrollCommandSink;
use crate::state::visibility::BottomVisibilityMonitor;
use std::time::{Duration, Instant};
use tracing::debug;

/// Input to the idle-timer-gated transition function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngagementEvent {
    /// The raw scroll phase changed.
    PhaseChanged(PhaseChange),
    /// The idle timer fired.
    Tick,
    /// The watched content changed.
    ContentChanged,
}

/// Result of applying one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// State after the event.
    pub state: EngagementState,
    /// Whether a scroll-to-bottom command must be issued.
    pub scroll: bool,
}

impl Transition {
    fn stay(state: EngagementState) -> Self {
        Self {
            state,
            scroll: false,
        }
    }
}

/// Apply one event to an engagement state.
///
/// Pure: the caller supplies `now` and performs the scroll itself when
/// [`Transition::scroll`] is set.
pub fn transition(
    state: EngagementState,
    event: EngagementEvent,
    now: Instant,
    idle_threshold: Duration,
) -> Transition {
    match event {
        EngagementEvent::PhaseChanged(change) => Transition::stay(apply_phase_change(state, change, now)),
        EngagementEvent::Tick => Transition::stay(expire_if_idle(state, now, idle_threshold)),
        EngagementEvent::ContentChanged => {
            if state.phase == EngagementPhase::IdleExpired {
                Transition {
                    state: EngagementState {
                        phase: EngagementPhase::AutoScrolling,
                        ..state
                    },
                    scroll: true,
                }
            } else {
                Transition::stay(state)
            }
        }
    }
}

fn apply_phase_change(state: EngagementState, change: PhaseChange, now: Instant) -> EngagementState {
    if change.enters_idle() {
        return EngagementState {
            phase: EngagementPhase::Idle,
            idle_since: IdleSince::At(now),
        };
    }

    if !change.leaves_idle() {
        return state;
    }

    match state.phase {
        // In-flight motion continues uninterrupted.
        EngagementPhase::AutoScrolling | EngagementPhase::UserScrolling => state,
        EngagementPhase::Idle | EngagementPhase::IdleExpired => EngagementState {
            phase: EngagementPhase::UserScrolling,
            idle_since: IdleSince::DistantFuture,
        },
    }
}

fn expire_if_idle(state: EngagementState, now: Instant, idle_threshold: Duration) -> EngagementState {
    if state.phase == EngagementPhase::Idle && state.idle_since.has_exceeded(now, idle_threshold) {
        EngagementState {
            phase: EngagementPhase::IdleExpired,
            ..state
        }
    } else {
        state
    }
}

/// What happened to a content change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollOutcome {
    /// The policy decided not to scroll.
    Held,
    /// A scroll-to-bottom command was delivered.
    Issued,
    /// The policy decided to scroll but the target was gone or busy.
    Dropped,
}

impl ScrollOutcome {
    /// The policy asked for a scroll, whether or not it was delivered.
    pub fn requested(self) -> bool {
        !matches!(self, ScrollOutcome::Held)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy {
    IdleTimer(EngagementState),
    BottomVisibility,
}

/// Per-surface auto-scroll decision maker.
///
/// Single-owner: every method takes `&mut self` and completes synchronously,
/// so each event observes the fully applied result of the previous one.
#[derive(Debug, Clone)]
pub struct AutoScrollStateMachine {
    strategy: Strategy,
    visibility: BottomVisibilityMonitor,
    idle_threshold: Duration,
}

impl AutoScrollStateMachine {
    /// Create a machine for the configured policy.
    pub fn new(config: &SurfaceConfig) -> Self {
        let strategy = match config.trigger_policy() {
            TriggerPolicy::IdleTimer => Strategy::IdleTimer(EngagementState::new()),
            TriggerPolicy::BottomVisibility => Strategy::BottomVisibility,
        };
        Self {
            strategy,
            visibility: BottomVisibilityMonitor::new(),
            idle_threshold: config.idle_threshold(),
        }
    }

    /// Active trigger policy.
    pub fn policy(&self) -> TriggerPolicy {
        match self.strategy {
            Strategy::IdleTimer(_) => TriggerPolicy::IdleTimer,
            Strategy::BottomVisibility => TriggerPolicy::BottomVisibility,
        }
    }

    /// Engagement state; `None` under the bottom-visibility policy.
    pub fn engagement(&self) -> Option<EngagementState> {
        match self.strategy {
            Strategy::IdleTimer(state) => Some(state),
            Strategy::BottomVisibility => None,
        }
    }

    /// Current phase; `None` under the bottom-visibility policy.
    pub fn current_phase(&self) -> Option<EngagementPhase> {
        self.engagement().map(|state| state.phase)
    }

    /// Last reported bottom visibility.
    pub fn bottom_visible(&self) -> bool {
        self.visibility.is_visible()
    }

    /// Handle a raw phase transition.
    pub fn on_phase_change(&mut self, change: PhaseChange, now: Instant) {
        self.apply(EngagementEvent::PhaseChanged(change), now);
    }

    /// Handle an idle-timer tick.
    pub fn on_tick(&mut self, now: Instant) {
        self.apply(EngagementEvent::Tick, now);
    }

    /// Handle a bottom-sentinel visibility transition.
    pub fn on_visibility_change(&mut self, visible: bool) {
        if self.visibility.on_visibility_change(visible) {
            debug!(visible, "bottom visibility changed");
        }
    }

    /// Handle a content change, scrolling through `sink` if the policy says so.
    ///
    /// A sink that fails is ignored: the state still advances as if the
    /// command had been delivered.
    pub fn on_content_changed(&mut self, now: Instant, sink: &mut dyn ScrollCommandSink) -> ScrollOutcome {
        let scroll = match self.strategy {
            Strategy::IdleTimer(_) => self.apply(EngagementEvent::ContentChanged, now),
            Strategy::BottomVisibility => self.visibility.is_visible(),
        };

        if !scroll {
            debug!(policy = %self.policy(), "content changed, holding position");
            return ScrollOutcome::Held;
        }

        match sink.scroll_to_bottom() {
            Ok(()) => {
                debug!(policy = %self.policy(), "content changed, scrolled to bottom");
                ScrollOutcome::Issued
            }
            Err(err @ (SinkError::Detached | SinkError::Busy)) => {
                debug!(error = %err, "scroll command dropped");
                ScrollOutcome::Dropped
            }
        }
    }

    /// Run the transition function; returns whether to scroll.
    fn apply(&mut self, event: EngagementEvent, now: Instant) -> bool {
        let Strategy::IdleTimer(state) = self.strategy else {
            return false;
        };

        let next = transition(state, event, now, self.idle_threshold);
        if next.state.phase != state.phase {
            debug!(
                from = %state.phase,
                to = %next.state.phase,
                event = ?event,
                "engagement phase changed"
            );
        }
        self.strategy = Strategy::IdleTimer(next.state);
        next.scroll
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "engagement_tests.rs"]
mod tests;
