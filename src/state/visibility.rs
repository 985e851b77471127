//! Bottom-sentinel visibility tracking.

/// Half-open span `[start, start + len)` along the scroll axis, in rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Extent {
    /// First row.
    pub start: usize,
    /// Number of rows.
    pub len: usize,
}

impl Extent {
    /// Create an extent.
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// One past the last row.
    pub fn end(&self) -> usize {
        self.start.saturating_add(self.len)
    }

    /// Whether the two bounding regions intersect.
    ///
    /// A zero-length extent is a point: it intersects when it lies within the
    /// other extent, edges included.
    pub fn intersects(&self, other: &Extent) -> bool {
        match (self.len, other.len) {
            (0, 0) => self.start == other.start,
            (0, _) => other.start <= self.start && self.start <= other.end(),
            (_, 0) => self.start <= other.start && other.start <= self.end(),
            _ => self.start < other.end() && other.start < self.end(),
        }
    }
}

/// Whether a sentinel at `sentinel` is inside `viewport`.
///
/// An empty viewport shows no rows, so only a zero-size sentinel at the same
/// position counts as visible in it.
pub fn sentinel_visible(sentinel: Extent, viewport: Extent) -> bool {
    if viewport.len == 0 && sentinel.len > 0 {
        return false;
    }
    sentinel.intersects(&viewport)
}

/// Holds the last reported visibility of the bottom sentinel.
///
/// No debouncing: every call is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BottomVisibilityMonitor {
    visible: bool,
}

impl BottomVisibilityMonitor {
    /// Create a monitor that assumes the bottom is not visible until told
    /// otherwise.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a visibility report. Returns `true` if it differs from the
    /// previous one.
    pub fn on_visibility_change(&mut self, visible: bool) -> bool {
        let changed = self.visible != visible;
        self.visible = visible;
        changed
    }

    /// Last reported visibility.
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monitor_starts_not_visible() {
        assert!(!BottomVisibilityMonitor::new().is_visible());
    }

    #[test]
    fn monitor_reports_changes_only_on_transitions() {
        let mut monitor = BottomVisibilityMonitor::new();
        assert!(monitor.on_visibility_change(true));
        assert!(!monitor.on_visibility_change(true));
        assert!(monitor.is_visible());
        assert!(monitor.on_visibility_change(false));
        assert!(!monitor.is_visible());
    }

    #[test]
    fn one_row_sentinel_inside_viewport_is_visible() {
        let viewport = Extent::new(10, 20);
        assert!(sentinel_visible(Extent::new(10, 1), viewport));
        assert!(sentinel_visible(Extent::new(29, 1), viewport));
    }

    #[test]
    fn one_row_sentinel_outside_viewport_is_hidden() {
        let viewport = Extent::new(10, 20);
        assert!(!sentinel_visible(Extent::new(30, 1), viewport));
        assert!(!sentinel_visible(Extent::new(9, 1), viewport));
    }

    #[test]
    fn zero_size_sentinel_on_viewport_edge_is_visible() {
        let viewport = Extent::new(10, 20);
        assert!(sentinel_visible(Extent::new(30, 0), viewport));
        assert!(sentinel_visible(Extent::new(10, 0), viewport));
        assert!(!sentinel_visible(Extent::new(31, 0), viewport));
    }

    #[test]
    fn empty_viewport_sees_only_coincident_point() {
        let viewport = Extent::new(5, 0);
        assert!(sentinel_visible(Extent::new(5, 0), viewport));
        assert!(!sentinel_visible(Extent::new(6, 0), viewport));
    }

    #[test]
    fn empty_viewport_hides_one_row_sentinel() {
        let viewport = Extent::new(5, 0);
        assert!(!sentinel_visible(Extent::new(5, 1), viewport));
        assert!(!sentinel_visible(Extent::new(4, 1), viewport));
    }
}
