#![forbid(unsafe_code)]

//! Time-bounded animated moves to a pane boundary.
//!
//! A [`Transition`] is deliberately two-phase: it is created *pending*, arms
//! on the next frame poll (that is when the host applies transition timing
//! and the target offset), and settles on the first frame at or past the
//! armed deadline. The extra frame lets the container's starting state paint
//! before the timing style takes effect, avoiding an unanimated snap.
//!
//! # Invariants
//!
//! 1. Each transition arms at most once and settles at most once, in that
//!    order.
//! 2. `on_frame` never returns [`FrameAction::Settle`] before the armed
//!    deadline.
//! 3. Serialization against overlapping transitions is the owner's job: the
//!    owner holds at most one `Transition` and refuses new ones while it
//!    exists.
//!
//! # Failure Modes
//!
//! - Zero duration: the transition arms on one frame and settles on the
//!   next; both phases still happen.
//! - A stalled host that never polls frames simply leaves the transition
//!   armed; no timer fires behind its back.

use std::time::Duration;

use web_time::Instant;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Internal lifecycle of one animated move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    /// Waiting for the next frame to apply timing and the target offset.
    Pending,
    /// Timing applied; waiting out the configured duration.
    Running { settle_at: Instant },
}

/// What the controller wants done at a frame boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameAction {
    /// Nothing to do this frame.
    None,

    /// Apply transition timing, then move to the target offset.
    Arm {
        /// Pane index being moved to.
        target: usize,
        /// Settled offset of the target pane.
        offset: f32,
        /// Timing to apply before the offset write.
        duration: Duration,
    },

    /// The move completed: clear timing and commit the target.
    Settle {
        /// Pane index that was reached.
        target: usize,
        /// Settled offset of the target pane.
        offset: f32,
    },
}

/// One in-flight animated move.
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    target: usize,
    offset: f32,
    duration: Duration,
    stage: Stage,
}

// ---------------------------------------------------------------------------
// Implementation
// ---------------------------------------------------------------------------

impl Transition {
    /// Begin a pending transition toward `target` at `offset`.
    #[must_use]
    pub const fn begin(target: usize, offset: f32, duration: Duration) -> Self {
        Self {
            target,
            offset,
            duration,
            stage: Stage::Pending,
        }
    }

    /// Pane index this transition moves to.
    #[inline]
    #[must_use]
    pub const fn target(&self) -> usize {
        self.target
    }

    /// Whether timing has been applied yet.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        matches!(self.stage, Stage::Running { .. })
    }

    /// Advance the controller at a frame boundary.
    ///
    /// The owner drops the transition after acting on
    /// [`FrameAction::Settle`]; polling past that point would re-report the
    /// settle.
    pub fn on_frame(&mut self, now: Instant) -> FrameAction {
        match self.stage {
            Stage::Pending => {
                self.stage = Stage::Running {
                    settle_at: now + self.duration,
                };
                FrameAction::Arm {
                    target: self.target,
                    offset: self.offset,
                    duration: self.duration,
                }
            }
            Stage::Running { settle_at } if now >= settle_at => FrameAction::Settle {
                target: self.target,
                offset: self.offset,
            },
            Stage::Running { .. } => FrameAction::None,
        }
    }
}
