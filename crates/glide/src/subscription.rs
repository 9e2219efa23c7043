#![forbid(unsafe_code)]

//! Explicit handler identities for event (de)registration.
//!
//! Teardown must remove exactly what was registered. Rather than relying on
//! re-derivable handler references (which need not compare equal to what the
//! host stored), every registration returns a [`HandlerId`] that the slider
//! retains and hands back verbatim on removal.

/// Identity of a registered event handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(pub u64);

/// The event streams a slider subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubscriptionKind {
    /// Pointer lifecycle (start/move/end) on the viewport.
    Pointer,

    /// Native scroll on one pane's content.
    PaneScroll(usize),

    /// Resize notifications from the global surface.
    Resize,
}

/// Handler identities held by one slider instance.
#[derive(Debug, Default)]
pub struct SubscriptionSet {
    ids: Vec<HandlerId>,
}

impl SubscriptionSet {
    /// An empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self { ids: Vec::new() }
    }

    /// Retain a freshly registered handler identity.
    pub fn record(&mut self, id: HandlerId) {
        self.ids.push(id);
    }

    /// Drain every held identity for removal; leaves the set empty, so a
    /// second teardown has nothing to remove.
    pub fn drain(&mut self) -> Vec<HandlerId> {
        std::mem::take(&mut self.ids)
    }

    /// Number of held identities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
