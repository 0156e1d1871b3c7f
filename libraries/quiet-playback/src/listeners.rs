//! Listener registry
//!
//! Fan-out list used by the queue (change notifications) and the session
//! (playback events). Listeners are notified synchronously, in registration
//! order, on the caller's thread.

use std::fmt;
use std::sync::Arc;

/// Handle returned by [`Listeners::register`]
///
/// Ids are never reused within one list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Ordered list of shared listeners
pub struct Listeners<T: ?Sized> {
    entries: Vec<(ListenerId, Arc<T>)>,
    next_id: u64,
}

impl<T: ?Sized> Listeners<T> {
    /// Create an empty list
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Add a listener; it will be notified after all earlier ones
    pub fn register(&mut self, listener: Arc<T>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    /// Remove a listener
    ///
    /// Returns false if the id was never registered or is already gone.
    pub fn unregister(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Call `f` once per listener
    pub fn notify_all(&self, mut f: impl FnMut(&T)) {
        for (_, listener) in &self.entries {
            f(listener);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T: ?Sized> Default for Listeners<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for Listeners<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.entries.len())
            .finish()
    }
}
