//! Scroll offset of the demo transcript pane.
//!
//! Positions are semantic until layout: a bottom request made before the new
//! content height is known is resolved against that height at the next
//! [`Viewport::layout`], then becomes a plain offset again.

use crate::model::SinkError;
use crate::sink::ScrollCommandSink;
use crate::state::{sentinel_visible, Extent};

/// Where the viewport wants to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollPosition {
    /// First row of content.
    #[default]
    Top,
    /// Last page, sentinel row included. Resolved once at layout.
    Bottom,
    /// Absolute first visible row, clamped at layout.
    AtLine(usize),
}

impl ScrollPosition {
    /// Resolve to a concrete offset for the given scrollable height.
    pub fn resolve(self, scrollable_rows: usize, viewport_rows: usize) -> usize {
        let max_offset = scrollable_rows.saturating_sub(viewport_rows);
        match self {
            ScrollPosition::Top => 0,
            ScrollPosition::Bottom => max_offset,
            ScrollPosition::AtLine(line) => line.min(max_offset),
        }
    }
}

/// Vertical viewport over wrapped transcript rows.
///
/// Content rows are `[0, content_rows)`; the bottom sentinel is the single
/// blank row at index `content_rows`.
#[derive(Debug, Clone, Default)]
pub struct Viewport {
    position: ScrollPosition,
    offset: usize,
    height: usize,
    content_rows: usize,
    programmatic_pending: bool,
}

impl Viewport {
    /// Empty viewport at the top.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolved first visible row.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Visible rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Content rows at last layout, sentinel excluded.
    pub fn content_rows(&self) -> usize {
        self.content_rows
    }

    /// Pending semantic position.
    pub fn position(&self) -> ScrollPosition {
        self.position
    }

    /// Apply new content and viewport heights, resolving any pending position.
    pub fn layout(&mut self, content_rows: usize, height: usize) {
        self.content_rows = content_rows;
        self.height = height;
        self.offset = self.position.resolve(self.scrollable_rows(), height);
        self.position = ScrollPosition::AtLine(self.offset);
    }

    /// Whether the sentinel row lies inside the visible range.
    pub fn sentinel_visible(&self) -> bool {
        sentinel_visible(
            Extent::new(self.content_rows, 1),
            Extent::new(self.offset, self.height),
        )
    }

    /// Scroll up by `rows`, user initiated.
    pub fn scroll_up(&mut self, rows: usize) {
        self.position = ScrollPosition::AtLine(self.current_line().saturating_sub(rows));
    }

    /// Scroll down by `rows`, user initiated.
    pub fn scroll_down(&mut self, rows: usize) {
        self.position = ScrollPosition::AtLine(self.current_line().saturating_add(rows));
    }

    /// Jump to the first row, user initiated.
    pub fn scroll_to_top(&mut self) {
        self.position = ScrollPosition::Top;
    }

    /// Jump to the last page, user initiated.
    pub fn jump_to_bottom(&mut self) {
        self.position = ScrollPosition::Bottom;
    }

    /// Page size for page up/down.
    pub fn page(&self) -> usize {
        self.height.saturating_sub(1).max(1)
    }

    /// Take the flag set by the last programmatic scroll, if any.
    pub fn take_programmatic(&mut self) -> bool {
        std::mem::take(&mut self.programmatic_pending)
    }

    fn scrollable_rows(&self) -> usize {
        self.content_rows + 1
    }

    fn current_line(&self) -> usize {
        match self.position {
            ScrollPosition::Top => 0,
            ScrollPosition::Bottom => self.scrollable_rows().saturating_sub(self.height),
            ScrollPosition::AtLine(line) => line,
        }
    }
}

impl ScrollCommandSink for Viewport {
    fn scroll_to_bottom(&mut self) -> Result<(), SinkError> {
        self.position = ScrollPosition::Bottom;
        self.programmatic_pending = true;
        Ok(())
    }
}

// ===== Tests =====
