#![forbid(unsafe_code)]

//! In-progress drag bookkeeping and the horizontal/vertical axis lock.
//!
//! A [`DragTracker`] exists only while a contact is down. It records the
//! origin, the running delta from the origin, and the start instant; the
//! owning component decides what the delta means. Timestamps are injected so
//! elapsed time is deterministic under test.
//!
//! # Axis lock
//!
//! A move whose horizontal travel is less than [`AXIS_LOCK_RATIO`] times its
//! vertical travel reads as vertical scrolling, not a horizontal swipe, and
//! must not produce a horizontal offset change. The delta is still recorded
//! (gesture-end classification sees the full travel either way).

use std::time::Duration;

use web_time::Instant;

use crate::event::Point;

/// Horizontal travel below `ratio * vertical` reads as vertical scrolling.
pub const AXIS_LOCK_RATIO: f32 = 3.0;

/// Whether a drag delta reads as vertical scrolling rather than a swipe.
#[must_use]
pub fn is_vertical_scroll(delta: Point) -> bool {
    delta.x.abs() < delta.y.abs() * AXIS_LOCK_RATIO
}

/// Bookkeeping for one in-progress drag.
#[derive(Debug, Clone, Copy)]
pub struct DragTracker {
    origin: Point,
    delta: Point,
    started_at: Instant,
}

impl DragTracker {
    /// Begin tracking a contact at `origin`.
    #[must_use]
    pub const fn begin(origin: Point, now: Instant) -> Self {
        Self {
            origin,
            delta: Point::new(0.0, 0.0),
            started_at: now,
        }
    }

    /// Record a move, returning the running delta from the origin.
    pub fn record(&mut self, current: Point) -> Point {
        self.delta = current.delta_from(self.origin);
        self.delta
    }

    /// The contact's origin.
    #[inline]
    #[must_use]
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// The latest recorded delta from the origin.
    #[inline]
    #[must_use]
    pub const fn delta(&self) -> Point {
        self.delta
    }

    /// When the contact began.
    #[inline]
    #[must_use]
    pub const fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Time since the contact began.
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }
}
