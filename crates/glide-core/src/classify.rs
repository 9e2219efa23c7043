#![forbid(unsafe_code)]

//! Gesture classification: what a completed drag means.
//!
//! Two independent configuration axes combine here:
//!
//! - **swipe**: any completed gesture pages exactly one pane in the drag's
//!   direction; magnitude and duration matter only for picking the direction.
//! - **non-swipe**: a *valid slide* (fast flick, or a short drag that never
//!   crossed the pane midpoint) steps one pane; anything else resolves via
//!   nearest-pane math on the actually-dragged position, rounding toward the
//!   direction of travel.
//!
//! # Invariants
//!
//! 1. The returned target never differs from the active index by more than
//!    one step, and always lies in `[0, pane_count - 1]`.
//! 2. `None` means the gesture resolves to nothing at all (swipe mode at a
//!    boundary, or a `resolve_*` replay against its boundary). `Some(active)`
//!    is a snap-back: an animated return to the current pane.
//! 3. A gesture with no horizontal travel classifies as a snap-back, never a
//!    page turn.

use std::time::Duration;

use crate::event::Point;
use crate::geometry::PaneGeometry;

/// Gestures completing faster than this window qualify as flicks.
pub const FLICK_WINDOW: Duration = Duration::from_millis(250);

/// Minimum horizontal travel for a flick, in pixels.
pub const FLICK_MIN_TRAVEL: f32 = 20.0;

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// What a completed (or in-progress) gesture looked like.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSummary {
    /// Total drag delta from origin to the last processed move.
    pub delta: Point,
    /// Time from gesture start to gesture end.
    pub elapsed: Duration,
}

impl GestureSummary {
    /// Summary of "no gesture has happened": zero travel, unbounded age.
    #[must_use]
    pub const fn idle() -> Self {
        Self {
            delta: Point::new(0.0, 0.0),
            elapsed: Duration::MAX,
        }
    }
}

impl Default for GestureSummary {
    fn default() -> Self {
        Self::idle()
    }
}

/// Slider state the classifier consults.
#[derive(Debug, Clone, Copy)]
pub struct ClassifyContext {
    /// Current pane geometry.
    pub geometry: PaneGeometry,
    /// Offset baseline at gesture end (the sealed live offset).
    pub committed_offset: f32,
    /// The committed pane index.
    pub active_index: usize,
    /// Total pane count (at least 1).
    pub pane_count: usize,
    /// Whether the drag followed the pointer visually.
    pub sticky: bool,
    /// Whether any completed gesture pages one pane in its direction.
    pub swipe: bool,
}

/// Travel direction of a completed gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward higher indices (finger moved left, negative delta).
    Advance,
    /// Toward lower indices (finger moved right, positive delta).
    Retreat,
}

impl Direction {
    /// Direction from a horizontal delta; `None` when there is no travel.
    #[must_use]
    pub fn from_delta_x(dx: f32) -> Option<Self> {
        if dx < 0.0 {
            Some(Self::Advance)
        } else if dx > 0.0 {
            Some(Self::Retreat)
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// A fast flick, or a short drag that never crossed the pane midpoint.
#[must_use]
pub fn is_valid_slide(summary: &GestureSummary, pane_width: f32) -> bool {
    let travel = summary.delta.x.abs();
    (summary.elapsed < FLICK_WINDOW && travel > FLICK_MIN_TRAVEL) || travel < pane_width / 2.0
}

/// Resolve a completed gesture into a target pane.
///
/// `None` means nothing happens at all (swipe mode at its boundary);
/// `Some(index)` requests an animated move, possibly back to the current
/// pane.
#[must_use]
pub fn classify(summary: &GestureSummary, ctx: &ClassifyContext) -> Option<usize> {
    let Some(direction) = Direction::from_delta_x(summary.delta.x) else {
        // No horizontal travel: settle back onto the current pane.
        return Some(ctx.active_index);
    };

    if ctx.swipe {
        return match direction {
            Direction::Retreat if ctx.active_index == 0 => None,
            Direction::Advance if ctx.active_index + 1 >= ctx.pane_count => None,
            Direction::Retreat => Some(ctx.active_index - 1),
            Direction::Advance => Some(ctx.active_index + 1),
        };
    }

    Some(derive(direction, summary, ctx))
}

/// Re-derive a step in a forced direction from current drag state: the
/// programmatic-replay path behind `resolve_prev` / `resolve_next`.
///
/// Unlike [`classify`], the boundary in the requested direction is a total
/// no-op (`None`) rather than a snap-back.
#[must_use]
pub fn resolve_step(
    direction: Direction,
    summary: &GestureSummary,
    ctx: &ClassifyContext,
) -> Option<usize> {
    match direction {
        Direction::Retreat if ctx.active_index == 0 => return None,
        Direction::Advance if ctx.active_index + 1 >= ctx.pane_count => return None,
        _ => {}
    }
    Some(derive(direction, summary, ctx))
}

/// Shared valid-slide / nearest-pane derivation, clamped to one step.
fn derive(direction: Direction, summary: &GestureSummary, ctx: &ClassifyContext) -> usize {
    let has_travel = summary.delta.x != 0.0;
    let target = if has_travel && is_valid_slide(summary, ctx.geometry.pane_width) {
        step_index(direction, ctx.active_index)
    } else {
        nearest_pane(direction, ctx)
    };
    clamp_single_step(target, ctx.active_index, ctx.pane_count)
}

/// Round the dragged position toward the direction of travel.
fn nearest_pane(direction: Direction, ctx: &ClassifyContext) -> usize {
    if !ctx.sticky {
        // No offset was tracked during the drag; degenerate to one step.
        return step_index(direction, ctx.active_index);
    }
    if ctx.geometry.pane_width <= 0.0 {
        return ctx.active_index;
    }
    let travelled = ctx.committed_offset.abs() / ctx.geometry.pane_width;
    match direction {
        Direction::Advance => travelled.ceil() as usize,
        Direction::Retreat => travelled.floor() as usize,
    }
}

const fn step_index(direction: Direction, active_index: usize) -> usize {
    match direction {
        Direction::Advance => active_index + 1,
        Direction::Retreat => active_index.saturating_sub(1),
    }
}

fn clamp_single_step(target: usize, active_index: usize, pane_count: usize) -> usize {
    let last = pane_count.max(1) - 1;
    let lo = active_index.saturating_sub(1);
    let hi = (active_index + 1).min(last);
    target.clamp(lo.min(hi), hi)
}
