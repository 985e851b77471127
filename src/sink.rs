//! Outbound scroll capability.
//!
//! The rendering layer owns whatever actually moves the viewport. The state
//! machine only ever sees it as a [`ScrollCommandSink`] borrowed for the
//! duration of one event, or through a [`WeakSink`] that does not keep the
//! target alive.

use crate::model::SinkError;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Something that can move a viewport so its bottom becomes visible.
///
/// Implementations must be idempotent: a command while already at the bottom,
/// or while a previous scroll-to-bottom is still animating, must not fail and
/// must not cause visible jitter.
pub trait ScrollCommandSink {
    /// Move the viewport to the bottom anchor.
    ///
    /// # Errors
    ///
    /// [`SinkError::Detached`] if the target has been torn down.
    fn scroll_to_bottom(&mut self) -> Result<(), SinkError>;
}

impl<S: ScrollCommandSink + ?Sized> ScrollCommandSink for &mut S {
    fn scroll_to_bottom(&mut self) -> Result<(), SinkError> {
        (**self).scroll_to_bottom()
    }
}

impl<S: ScrollCommandSink + ?Sized> ScrollCommandSink for Box<S> {
    fn scroll_to_bottom(&mut self) -> Result<(), SinkError> {
        (**self).scroll_to_bottom()
    }
}

/// Non-owning handle to a shared scroll target.
///
/// Once every strong reference to the target is dropped, commands report
/// [`SinkError::Detached`] instead of touching freed state.
#[derive(Debug)]
pub struct WeakSink<S> {
    target: Weak<RefCell<S>>,
}

impl<S> WeakSink<S> {
    /// Downgrade a shared target into a capability reference.
    pub fn new(target: &Rc<RefCell<S>>) -> Self {
        Self {
            target: Rc::downgrade(target),
        }
    }

    /// Whether the target is still alive.
    pub fn is_attached(&self) -> bool {
        self.target.strong_count() > 0
    }
}

impl<S> Clone for WeakSink<S> {
    fn clone(&self) -> Self {
        Self {
            target: self.target.clone(),
        }
    }
}

impl<S: ScrollCommandSink> ScrollCommandSink for WeakSink<S> {
    fn scroll_to_bottom(&mut self) -> Result<(), SinkError> {
        let target = self.target.upgrade().ok_or(SinkError::Detached)?;
        let mut target = target.try_borrow_mut().map_err(|_| SinkError::Busy)?;
        target.scroll_to_bottom()
    }
}

/// Sink that only counts commands.
///
/// Useful wherever the decision matters but no viewport exists: tests,
/// benchmarks, headless telemetry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountingSink {
    /// Number of scroll-to-bottom commands received.
    pub commands: usize,
}

impl CountingSink {
    /// Create a sink with a zero count.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScrollCommandSink for CountingSink {
    fn scroll_to_bottom(&mut self) -> Result<(), SinkError> {
        self.commands += 1;
        Ok(())
    }
}
