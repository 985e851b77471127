//! Content change detection by value equality.

/// Emits one change per distinct consecutive content snapshot.
///
/// Snapshots are compared with `PartialEq`, never by identity. The watcher
/// keeps the last snapshot it was given and nothing else.
#[derive(Debug, Clone, Default)]
pub struct ContentChangeWatcher<T> {
    last: Option<T>,
}

impl<T: PartialEq> ContentChangeWatcher<T> {
    /// Watcher that has seen nothing; the first snapshot counts as a change.
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Watcher seeded with the content already on screen.
    pub fn with_initial(snapshot: T) -> Self {
        Self {
            last: Some(snapshot),
        }
    }

    /// Record `snapshot`. Returns `true` if it differs from the previous one.
    pub fn observe(&mut self, snapshot: T) -> bool {
        let changed = self.last.as_ref() != Some(&snapshot);
        self.last = Some(snapshot);
        changed
    }

    /// Most recent snapshot.
    pub fn last(&self) -> Option<&T> {
        self.last.as_ref()
    }
}
