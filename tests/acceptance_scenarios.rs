//! Acceptance scenarios for both trigger policies.
//!
//! Each test drives a `ScrollSurface` through the public API with a manual
//! clock and counts the scroll commands that reach the sink.

use scrollpin::clock::ManualClock;
use scrollpin::config::{SurfaceConfig, TriggerPolicy};
use scrollpin::model::{EngagementPhase, PhaseChange, RawScrollPhase};
use scrollpin::sink::{CountingSink, WeakSink};
use scrollpin::state::ScrollOutcome;
use scrollpin::surface::{ScrollSurface, SurfaceEvent};
use std::cell::RefCell;
use std::rc::Rc;

// ===== Helpers =====

fn surface(policy: TriggerPolicy, clock: &ManualClock) -> ScrollSurface<u32, ManualClock> {
    ScrollSurface::with_clock(SurfaceConfig::new(policy), clock.clone()).with_initial_content(0)
}

fn settle(surface: &mut ScrollSurface<u32, ManualClock>, from: RawScrollPhase) {
    surface.on_phase_change(PhaseChange::new(from, RawScrollPhase::Idle));
}

/// Advance in timer-period steps, ticking after each one.
fn tick_for(surface: &mut ScrollSurface<u32, ManualClock>, clock: &ManualClock, secs: u32) {
    for _ in 0..secs / 2 {
        clock.advance_secs(2.0);
        surface.on_tick();
    }
}

// ===== Scenario 1: idle long enough re-arms =====

#[test]
fn scenario1_content_after_threshold_scrolls_once() {
    // GIVEN: idle-timer policy, fresh surface idle since the distant past
    let clock = ManualClock::new();
    let mut surface = surface(TriggerPolicy::IdleTimer, &clock);
    let mut sink = CountingSink::new();

    // WHEN: the timer runs with no interaction until t=11s, then content arrives
    tick_for(&mut surface, &clock, 10);
    assert_eq!(surface.current_phase(), Some(EngagementPhase::IdleExpired));
    clock.advance_secs(1.0);
    let outcome = surface.observe(1, &mut sink);

    // THEN: exactly one scroll, phase is auto-scrolling
    assert_eq!(outcome, Some(ScrollOutcome::Issued));
    assert_eq!(sink.commands, 1);
    assert_eq!(surface.current_phase(), Some(EngagementPhase::AutoScrolling));
}

#[test]
fn content_before_the_expiring_tick_is_held() {
    // GIVEN: idle-timer policy, surface came to rest at t=0
    let clock = ManualClock::new();
    let mut surface = surface(TriggerPolicy::IdleTimer, &clock);
    let mut sink = CountingSink::new();
    settle(&mut surface, RawScrollPhase::Decelerating);

    // WHEN: ticks at t=2..10 never exceed the threshold, content at t=10.5
    tick_for(&mut surface, &clock, 10);
    assert_eq!(surface.current_phase(), Some(EngagementPhase::Idle));
    clock.advance_secs(0.5);
    let outcome = surface.observe(1, &mut sink);

    // THEN: held until the next tick expires the window
    assert_eq!(outcome, Some(ScrollOutcome::Held));
    assert_eq!(surface.current_phase(), Some(EngagementPhase::Idle));
    assert_eq!(sink.commands, 0);

    clock.advance_secs(1.5);
    surface.on_tick();
    assert_eq!(surface.observe(2, &mut sink), Some(ScrollOutcome::Issued));
    assert_eq!(sink.commands, 1);
}

#[test]
fn fresh_surface_waits_for_the_first_tick() {
    let clock = ManualClock::new();
    let mut surface = surface(TriggerPolicy::IdleTimer, &clock);
    let mut sink = CountingSink::new();

    assert_eq!(surface.observe(1, &mut sink), Some(ScrollOutcome::Held));
    assert_eq!(sink.commands, 0);

    clock.advance_secs(2.0);
    surface.on_tick();
    assert_eq!(surface.observe(2, &mut sink), Some(ScrollOutcome::Issued));
}

// ===== Scenario 2: user drag suppresses =====

#[test]
fn scenario2_drag_suppresses_scrolling() {
    // GIVEN: idle-timer policy, surface came to rest at t=0
    let clock = ManualClock::new();
    let mut surface = surface(TriggerPolicy::IdleTimer, &clock);
    let mut sink = CountingSink::new();
    settle(&mut surface, RawScrollPhase::Decelerating);

    // WHEN: the user starts dragging at t=3s
    clock.advance_secs(3.0);
    surface.on_phase_change(PhaseChange::new(RawScrollPhase::Idle, RawScrollPhase::Tracking));
    assert_eq!(surface.current_phase(), Some(EngagementPhase::UserScrolling));

    // AND: content changes at t=5s
    clock.advance_secs(2.0);
    surface.on_tick();
    let outcome = surface.observe(1, &mut sink);

    // THEN: nothing scrolls
    assert_eq!(outcome, Some(ScrollOutcome::Held));
    assert_eq!(sink.commands, 0);
    assert_eq!(surface.current_phase(), Some(EngagementPhase::UserScrolling));
}

// ===== Scenario 3: bottom visibility gate =====

#[test]
fn scenario3_visibility_gates_each_change() {
    // GIVEN: bottom-visibility policy with the sentinel off screen
    let clock = ManualClock::new();
    let mut surface = surface(TriggerPolicy::BottomVisibility, &clock);
    let mut sink = CountingSink::new();
    surface.on_visibility_change(false);

    // WHEN: content changes three times
    for value in 1..=3 {
        surface.observe(value, &mut sink);
    }

    // THEN: no scroll
    assert_eq!(sink.commands, 0);

    // WHEN: the sentinel comes into view and content changes once more
    surface.on_visibility_change(true);
    surface.observe(4, &mut sink);

    // THEN: exactly one scroll
    assert_eq!(sink.commands, 1);
    assert_eq!(surface.current_phase(), None);
}

// ===== Further behavior =====

#[test]
fn idle_window_restarts_after_each_auto_scroll() {
    let clock = ManualClock::new();
    let mut surface = surface(TriggerPolicy::IdleTimer, &clock);
    let mut sink = CountingSink::new();
    settle(&mut surface, RawScrollPhase::Decelerating);
    tick_for(&mut surface, &clock, 12);

    assert_eq!(surface.observe(1, &mut sink), Some(ScrollOutcome::Issued));

    // The programmatic scroll animates, then comes to rest.
    surface.on_phase_change(PhaseChange::new(RawScrollPhase::Idle, RawScrollPhase::Animating));
    assert_eq!(surface.current_phase(), Some(EngagementPhase::AutoScrolling));
    clock.advance_secs(0.3);
    settle(&mut surface, RawScrollPhase::Animating);
    assert_eq!(surface.current_phase(), Some(EngagementPhase::Idle));

    // Streaming continues inside the new idle window: no scroll.
    clock.advance_secs(5.0);
    assert_eq!(surface.observe(2, &mut sink), Some(ScrollOutcome::Held));
    assert_eq!(sink.commands, 1);
}

#[test]
fn unchanged_content_is_not_a_change() {
    let clock = ManualClock::new();
    let mut surface = surface(TriggerPolicy::BottomVisibility, &clock);
    let mut sink = CountingSink::new();
    surface.on_visibility_change(true);

    surface.observe(1, &mut sink);
    assert_eq!(surface.observe(1, &mut sink), None);
    assert_eq!(sink.commands, 1);
}

#[test]
fn torn_down_target_is_a_silent_no_op() {
    let clock = ManualClock::new();
    let mut surface = surface(TriggerPolicy::BottomVisibility, &clock);
    surface.on_visibility_change(true);

    let target = Rc::new(RefCell::new(CountingSink::new()));
    let mut sink = WeakSink::new(&target);
    drop(target);

    assert_eq!(surface.observe(1, &mut sink), Some(ScrollOutcome::Dropped));
    assert!(!sink.is_attached());
}

#[test]
fn channel_events_dispatch_like_direct_calls() {
    let clock = ManualClock::new();
    let mut surface = surface(TriggerPolicy::IdleTimer, &clock);
    let mut sink = CountingSink::new();

    let events = [
        SurfaceEvent::PhaseChanged(PhaseChange::new(RawScrollPhase::Interacting, RawScrollPhase::Idle)),
        SurfaceEvent::Tick,
        SurfaceEvent::Content(1),
    ];
    clock.advance_secs(0.5);
    for event in events {
        surface.dispatch(event, &mut sink);
    }
    assert_eq!(sink.commands, 0);

    clock.advance_secs(11.0);
    surface.dispatch(SurfaceEvent::Tick, &mut sink);
    assert_eq!(surface.current_phase(), Some(EngagementPhase::IdleExpired));
    let outcome = surface.dispatch(SurfaceEvent::Content(2), &mut sink);
    assert_eq!(outcome, Some(ScrollOutcome::Issued));
    assert_eq!(sink.commands, 1);
}

#[test]
fn surfaces_do_not_share_state() {
    let clock = ManualClock::new();
    let mut first = surface(TriggerPolicy::IdleTimer, &clock);
    let second = surface(TriggerPolicy::IdleTimer, &clock);

    first.on_phase_change(PhaseChange::new(RawScrollPhase::Idle, RawScrollPhase::Interacting));

    assert_eq!(first.current_phase(), Some(EngagementPhase::UserScrolling));
    assert_eq!(second.current_phase(), Some(EngagementPhase::Idle));
}
