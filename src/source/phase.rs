//! Raw scroll phase publication.

use crate::model::{PhaseChange, RawScrollPhase};
use std::fmt;

/// Callback receiving raw phase transitions.
pub type PhaseHandler = Box<dyn FnMut(PhaseChange)>;

/// Producer of ordered raw phase transitions.
///
/// Implementations deliver every change in the order the surface went
/// through it. Repeats of the current phase may be collapsed, but a crossing
/// between idle and non-idle is never dropped.
pub trait RawScrollPhaseSource {
    /// Register `handler` for every subsequent transition.
    fn subscribe(&mut self, handler: PhaseHandler);
}

/// Tracks the current raw phase and fans transitions out to subscribers.
pub struct PhaseEmitter {
    current: RawScrollPhase,
    handlers: Vec<PhaseHandler>,
}

impl PhaseEmitter {
    /// Emitter starting at [`RawScrollPhase::Idle`].
    pub fn new() -> Self {
        Self {
            current: RawScrollPhase::Idle,
            handlers: Vec::new(),
        }
    }

    /// Current raw phase.
    pub fn current(&self) -> RawScrollPhase {
        self.current
    }

    /// Move to `phase`, notifying subscribers if it differs from the current one.
    pub fn set(&mut self, phase: RawScrollPhase) -> Option<PhaseChange> {
        if phase == self.current {
            return None;
        }
        let change = PhaseChange::new(self.current, phase);
        self.current = phase;
        for handler in &mut self.handlers {
            handler(change);
        }
        Some(change)
    }
}

impl Default for PhaseEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PhaseEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhaseEmitter")
            .field("current", &self.current)
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

impl RawScrollPhaseSource for PhaseEmitter {
    fn subscribe(&mut self, handler: PhaseHandler) {
        self.handlers.push(handler);
    }
}
