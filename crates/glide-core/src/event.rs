#![forbid(unsafe_code)]

//! Canonical pointer-event types.
//!
//! The host delivers one [`PointerEvent`] per touch lifecycle step. All types
//! derive `Clone` and `PartialEq` for use in tests and pattern matching.
//!
//! # Design Notes
//!
//! - Coordinates are page-space floats (the host's natural unit).
//! - An `End` event carries the final contact point, but classification uses
//!   the delta tracked across `Move` events, not the end coordinates.
//! - Multi-touch is out of scope: the host forwards the primary contact only.

/// A 2D point in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component-wise travel from `origin` to `self`.
    #[must_use]
    pub fn delta_from(self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }
}

/// Phase of a pointer contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// Contact began.
    Start,

    /// Contact moved.
    Move,

    /// Contact lifted.
    End,
}

/// A pointer lifecycle event in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Which lifecycle step this event represents.
    pub phase: PointerPhase,

    /// Horizontal page coordinate of the contact.
    pub x: f32,

    /// Vertical page coordinate of the contact.
    pub y: f32,
}

impl PointerEvent {
    /// Create a new pointer event.
    #[must_use]
    pub const fn new(phase: PointerPhase, x: f32, y: f32) -> Self {
        Self { phase, x, y }
    }

    /// A contact-start event.
    #[must_use]
    pub const fn start(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Start, x, y)
    }

    /// A contact-move event.
    #[must_use]
    pub const fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Move, x, y)
    }

    /// A contact-end event.
    #[must_use]
    pub const fn end(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::End, x, y)
    }

    /// The contact position as a [`Point`].
    #[must_use]
    pub const fn point(&self) -> Point {
        Point {
            x: self.x,
            y: self.y,
        }
    }
}
