#![forbid(unsafe_code)]

//! Native-scroll suspension window.
//!
//! When a pane's own content scrolls natively, gesture handling must stand
//! down or the drag handler fights momentum scrolling. Every scroll event
//! opens (or extends) a short window during which pointer events are
//! ignored. The window is a deadline checked lazily against injected time —
//! no timer fires behind the host's back.

use std::time::Duration;

use web_time::Instant;

/// How long gesture handling stays suspended after the last native scroll.
pub const SCROLL_SETTLE_WINDOW: Duration = Duration::from_millis(250);

/// Suspension window that keeps drags from fighting native scrolling.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollLock {
    deadline: Option<Instant>,
}

impl ScrollLock {
    /// A lock with no window open.
    #[must_use]
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Note a native scroll event: opens or extends the suspension window.
    pub fn note_scroll(&mut self, now: Instant) {
        self.deadline = Some(now + SCROLL_SETTLE_WINDOW);
    }

    /// Whether gesture handling is currently suspended.
    #[must_use]
    pub fn is_locked(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now < deadline)
    }

    /// Drop an expired window; returns whether the lock is still held.
    pub fn refresh(&mut self, now: Instant) -> bool {
        if let Some(deadline) = self.deadline
            && now >= deadline
        {
            self.deadline = None;
        }
        self.deadline.is_some()
    }

    /// Close the window unconditionally.
    pub fn clear(&mut self) {
        self.deadline = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_100: Duration = Duration::from_millis(100);

    #[test]
    fn new_lock_is_open() {
        let lock = ScrollLock::new();
        assert!(!lock.is_locked(Instant::now()));
    }

    #[test]
    fn scroll_opens_window() {
        let mut lock = ScrollLock::new();
        let t = Instant::now();
        lock.note_scroll(t);
        assert!(lock.is_locked(t));
        assert!(lock.is_locked(t + Duration::from_millis(249)));
        assert!(!lock.is_locked(t + SCROLL_SETTLE_WINDOW));
    }

    #[test]
    fn repeated_scrolls_extend_window() {
        let mut lock = ScrollLock::new();
        let t = Instant::now();
        lock.note_scroll(t);
        lock.note_scroll(t + MS_100);
        // The window is measured from the latest event.
        assert!(lock.is_locked(t + Duration::from_millis(300)));
        assert!(!lock.is_locked(t + Duration::from_millis(350)));
    }

    #[test]
    fn refresh_drops_expired_window() {
        let mut lock = ScrollLock::new();
        let t = Instant::now();
        lock.note_scroll(t);
        assert!(lock.refresh(t + MS_100));
        assert!(!lock.refresh(t + SCROLL_SETTLE_WINDOW));
        assert!(!lock.is_locked(t + MS_100));
    }

    #[test]
    fn clear_closes_window() {
        let mut lock = ScrollLock::new();
        let t = Instant::now();
        lock.note_scroll(t);
        lock.clear();
        assert!(!lock.is_locked(t));
    }
}
