//! Change/start/end notifications for host-side render scheduling.
//!
//! Observers are plain callbacks on an explicit list; emission is
//! synchronous within the `advance`/input-handler call that caused the
//! event, so hosts observe events in the same order the state changed.

/// Notification emitted by the orbit controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    /// An interactive drag (or wheel step) began.
    Start,
    /// The camera pose changed this frame.
    Change,
    /// The interactive drag ended; damped decay may still be settling.
    End,
}

/// Handle returned by [`ObserverSet::add`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// An explicit observer list with synchronous, in-order emission.
#[derive(Default)]
pub struct ObserverSet {
    next_id: u64,
    entries: Vec<(ObserverId, Box<dyn FnMut(ControlEvent)>)>,
}

impl ObserverSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer; returns a handle for [`remove`](Self::remove).
    pub fn add(&mut self, observer: impl FnMut(ControlEvent) + 'static) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Unknown handles are ignored.
    pub fn remove(&mut self, id: ObserverId) {
        self.entries.retain(|(entry_id, _)| *entry_id != id);
    }

    /// Invoke every observer with `event`, in registration order.
    pub fn emit(&mut self, event: ControlEvent) {
        for (_, observer) in &mut self.entries {
            observer(event);
        }
    }

    /// Number of registered observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for ObserverSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverSet")
            .field("len", &self.entries.len())
            .finish()
    }
}
