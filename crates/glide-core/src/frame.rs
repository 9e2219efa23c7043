#![forbid(unsafe_code)]

//! Latest-wins coalescing of per-frame visual offset writes.
//!
//! Many gesture moves can land between two animation frames. Writing the
//! offset once per move would thrash the host's style system for positions
//! nobody ever sees; only the most recent clamped offset needs to be
//! painted. [`VisualCoalescer`] is the single pending slot: pushes replace,
//! the frame poll takes.

/// Pending slot for the next frame's visual offset write.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VisualCoalescer {
    pending: Option<f32>,
}

impl VisualCoalescer {
    /// An empty coalescer.
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Queue an offset for the next frame; replaces any pending value.
    pub fn push(&mut self, offset: f32) {
        self.pending = Some(offset);
    }

    /// Take the pending offset for application this frame.
    #[must_use]
    pub fn take(&mut self) -> Option<f32> {
        self.pending.take()
    }

    /// Whether a write is pending.
    #[must_use]
    pub const fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Discard any pending write.
    pub fn clear(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_push_wins() {
        let mut coalescer = VisualCoalescer::new();
        coalescer.push(-10.0);
        coalescer.push(-20.0);
        coalescer.push(-35.0);
        assert_eq!(coalescer.take(), Some(-35.0));
    }

    #[test]
    fn take_empties_the_slot() {
        let mut coalescer = VisualCoalescer::new();
        coalescer.push(-10.0);
        assert_eq!(coalescer.take(), Some(-10.0));
        assert_eq!(coalescer.take(), None);
        assert!(!coalescer.has_pending());
    }

    #[test]
    fn clear_discards_pending() {
        let mut coalescer = VisualCoalescer::new();
        coalescer.push(-10.0);
        coalescer.clear();
        assert_eq!(coalescer.take(), None);
    }

    #[test]
    fn empty_take_is_none() {
        let mut coalescer = VisualCoalescer::new();
        assert_eq!(coalescer.take(), None);
    }
}
