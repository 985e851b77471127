//! One scrollable region: watcher, decision core and clock bundled together.

use crate::clock::{Clock, SystemClock};
use crate::config::{SurfaceConfig, TriggerPolicy};
use crate::model::{EngagementPhase, EngagementState, PhaseChange, TimerError};
use crate::sink::ScrollCommandSink;
use crate::source::phase::PhaseHandler;
use crate::source::timer::IdleTimer;
use crate::state::{AutoScrollStateMachine, ContentChangeWatcher, ScrollOutcome};
use std::sync::mpsc::Sender;

/// Anything a surface reacts to, in channel-friendly form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent<T> {
    /// Raw scroll phase transition.
    PhaseChanged(PhaseChange),
    /// Idle-timer tick.
    Tick,
    /// Bottom sentinel visibility transition.
    VisibilityChanged(bool),
    /// New content snapshot, possibly unchanged.
    Content(T),
}

/// Auto-scroll controller for one scrollable region.
///
/// Owns an independent engagement state; nothing is shared between surfaces.
/// All methods run on the owning context and return without blocking.
///
/// # Examples
///
/// ```
/// use scrollpin::clock::ManualClock;
/// use scrollpin::config::{SurfaceConfig, TriggerPolicy};
/// use scrollpin::sink::CountingSink;
/// use scrollpin::surface::ScrollSurface;
///
/// let clock = ManualClock::new();
/// let mut surface = ScrollSurface::with_clock(
///     SurfaceConfig::new(TriggerPolicy::BottomVisibility),
///     clock.clone(),
/// );
/// let mut sink = CountingSink::new();
///
/// surface.on_visibility_change(true);
/// surface.observe("hello".to_string(), &mut sink);
/// assert_eq!(sink.commands, 1);
/// ```
#[derive(Debug)]
pub struct ScrollSurface<T, C = SystemClock> {
    config: SurfaceConfig,
    machine: AutoScrollStateMachine,
    watcher: ContentChangeWatcher<T>,
    clock: C,
}

impl<T: PartialEq> ScrollSurface<T, SystemClock> {
    /// Surface driven by the system clock.
    pub fn new(config: SurfaceConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<T: PartialEq, C: Clock> ScrollSurface<T, C> {
    /// Surface driven by `clock`.
    pub fn with_clock(config: SurfaceConfig, clock: C) -> Self {
        Self {
            config,
            machine: AutoScrollStateMachine::new(&config),
            watcher: ContentChangeWatcher::new(),
            clock,
        }
    }

    /// Seed the content watcher with what is already displayed, so the first
    /// identical snapshot is not treated as a change.
    pub fn with_initial_content(mut self, snapshot: T) -> Self {
        self.watcher = ContentChangeWatcher::with_initial(snapshot);
        self
    }

    /// Offer a content snapshot.
    ///
    /// Returns `None` if it equals the previous snapshot, otherwise what the
    /// policy did with the change.
    pub fn observe(&mut self, snapshot: T, sink: &mut dyn ScrollCommandSink) -> Option<ScrollOutcome> {
        if !self.watcher.observe(snapshot) {
            return None;
        }
        Some(self.machine.on_content_changed(self.clock.now(), sink))
    }

    /// Handle a raw scroll phase transition.
    pub fn on_phase_change(&mut self, change: PhaseChange) {
        self.machine.on_phase_change(change, self.clock.now());
    }

    /// Handle an idle-timer tick.
    pub fn on_tick(&mut self) {
        self.machine.on_tick(self.clock.now());
    }

    /// Handle a bottom-sentinel visibility transition.
    pub fn on_visibility_change(&mut self, visible: bool) {
        self.machine.on_visibility_change(visible);
    }

    /// Route one event to the matching handler.
    ///
    /// Returns a scroll outcome only for content events that changed the
    /// content.
    pub fn dispatch(&mut self, event: SurfaceEvent<T>, sink: &mut dyn ScrollCommandSink) -> Option<ScrollOutcome> {
        match event {
            SurfaceEvent::PhaseChanged(change) => {
                self.on_phase_change(change);
                None
            }
            SurfaceEvent::Tick => {
                self.on_tick();
                None
            }
            SurfaceEvent::VisibilityChanged(visible) => {
                self.on_visibility_change(visible);
                None
            }
            SurfaceEvent::Content(snapshot) => self.observe(snapshot, sink),
        }
    }

    /// Current engagement phase; `None` under the bottom-visibility policy.
    pub fn current_phase(&self) -> Option<EngagementPhase> {
        self.machine.current_phase()
    }

    /// Full engagement state; `None` under the bottom-visibility policy.
    pub fn engagement(&self) -> Option<EngagementState> {
        self.machine.engagement()
    }

    /// Last reported bottom visibility.
    pub fn bottom_visible(&self) -> bool {
        self.machine.bottom_visible()
    }

    /// Active trigger policy.
    pub fn policy(&self) -> TriggerPolicy {
        self.machine.policy()
    }

    /// Configuration the surface was built with.
    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    /// Start this surface's idle timer, delivering `event` into `tx` at the
    /// configured period. The timer stops when the returned handle is dropped.
    ///
    /// # Errors
    ///
    /// [`TimerError::Spawn`] if the timer thread cannot be created.
    pub fn start_timer<E>(&self, tx: Sender<E>, event: E) -> Result<IdleTimer, TimerError>
    where
        E: Clone + Send + 'static,
    {
        IdleTimer::forward(self.config.timer_period(), tx, event)
    }
}

/// Phase handler that forwards each change into a channel.
///
/// Send failures are ignored: a closed channel means the surface is gone.
pub fn forward_phases<E, F>(tx: Sender<E>, wrap: F) -> PhaseHandler
where
    E: 'static,
    F: Fn(PhaseChange) -> E + 'static,
{
    Box::new(move |change| {
        let _ = tx.send(wrap(change));
    })
}
