//! Auto-scroll state (pure).
//!
//! All transitions are synchronous functions of their inputs, testable
//! without a terminal.

pub mod content_watcher;
pub mod engagement;
pub mod visibility;

// Re-export for convenience
pub use content_watcher::ContentChangeWatcher;
pub use engagement::{transition, AutoScrollStateMachine, EngagementEvent, ScrollOutcome, Transition};
pub use visibility::{sentinel_visible, BottomVisibilityMonitor, Extent};
