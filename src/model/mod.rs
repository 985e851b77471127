//! Domain model types (pure).
//!
//! All types in this module are plain data with no I/O.

pub mod error;
pub mod key_action;
pub mod phase;
pub mod raw_phase;

// Re-export for convenience
pub use error::{AppError, ConfigError, SinkError, TimerError};
pub use key_action::KeyAction;
pub use phase::{EngagementPhase, EngagementState, IdleSince};
pub use raw_phase::{PhaseChange, RawScrollPhase};
