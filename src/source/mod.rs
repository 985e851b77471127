//! Event sources feeding a scroll surface.
//!
//! - Raw scroll phases, published through [`RawScrollPhaseSource`]
//! - Terminal gestures turned into raw phases ([`GestureTracker`])
//! - Periodic idle ticks ([`IdleTimer`])
//! - Synthetic streaming content for the demo ([`ContentGenerator`])
//!
//! Sources that run off the owning thread deliver over `std::sync::mpsc`
//! and stop when dropped.

pub mod generator;
pub mod gesture;
pub mod phase;
pub mod timer;
mod worker;

pub use generator::ContentGenerator;
pub use gesture::{Gesture, GestureTracker};
pub use phase::{PhaseEmitter, PhaseHandler, RawScrollPhaseSource};
pub use timer::IdleTimer;
