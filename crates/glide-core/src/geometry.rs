#![forbid(unsafe_code)]

//! Pane geometry derived from the measured viewport.
//!
//! Geometry is recomputed at construction and on every resize notification.
//! Resolution is pure and idempotent: the same measured width always yields
//! the same geometry, and resolving never touches the active index or any
//! offset.
//!
//! # Invariants
//!
//! 1. `pane_width >= 0` (negative measurements are clamped to zero).
//! 2. `max_offset == pane_width * (pane_count - 1)` with `pane_count >= 1`.
//! 3. A zero width degenerates `max_offset` to 0 — a single effective
//!    position, which is valid.

/// Resolved pane geometry for a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PaneGeometry {
    /// Width of one pane: the measured width of the viewport's containing box.
    pub pane_width: f32,

    /// Largest magnitude the scroll offset may reach (as a positive number).
    pub max_offset: f32,
}

impl PaneGeometry {
    /// Resolve geometry from the measured width of the viewport's containing
    /// box. The containing box is measured (rather than the viewport itself)
    /// to avoid feedback from the component's own styling.
    #[must_use]
    pub fn resolve(viewport_width: f32, pane_count: usize) -> Self {
        let width = viewport_width.max(0.0);
        let count = pane_count.max(1);
        Self {
            pane_width: width,
            max_offset: width * count as f32 - width,
        }
    }

    /// The settled offset for a pane index.
    #[must_use]
    pub fn offset_for(&self, index: usize) -> f32 {
        -(index as f32) * self.pane_width
    }

    /// Clamp an arbitrary offset into `[-max_offset, 0]`.
    #[must_use]
    pub fn clamp(&self, offset: f32) -> f32 {
        offset.clamp(-self.max_offset, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_basic() {
        let g = PaneGeometry::resolve(300.0, 4);
        assert_eq!(g.pane_width, 300.0);
        assert_eq!(g.max_offset, 900.0);
    }

    #[test]
    fn resolve_single_pane() {
        let g = PaneGeometry::resolve(300.0, 1);
        assert_eq!(g.pane_width, 300.0);
        assert_eq!(g.max_offset, 0.0);
    }

    #[test]
    fn resolve_zero_width_degenerates() {
        let g = PaneGeometry::resolve(0.0, 5);
        assert_eq!(g.pane_width, 0.0);
        assert_eq!(g.max_offset, 0.0);
        assert_eq!(g.clamp(-100.0), 0.0);
    }

    #[test]
    fn resolve_clamps_negative_width() {
        let g = PaneGeometry::resolve(-10.0, 3);
        assert_eq!(g.pane_width, 0.0);
        assert_eq!(g.max_offset, 0.0);
    }

    #[test]
    fn resolve_zero_count_treated_as_one() {
        let g = PaneGeometry::resolve(200.0, 0);
        assert_eq!(g.max_offset, 0.0);
    }

    #[test]
    fn resolve_is_idempotent() {
        let a = PaneGeometry::resolve(375.0, 3);
        let b = PaneGeometry::resolve(375.0, 3);
        assert_eq!(a, b);
    }

    #[test]
    fn offset_for_index() {
        let g = PaneGeometry::resolve(300.0, 4);
        assert_eq!(g.offset_for(0), 0.0);
        assert_eq!(g.offset_for(2), -600.0);
    }

    #[test]
    fn clamp_both_bounds() {
        let g = PaneGeometry::resolve(300.0, 3);
        assert_eq!(g.clamp(50.0), 0.0);
        assert_eq!(g.clamp(-1000.0), -600.0);
        assert_eq!(g.clamp(-123.0), -123.0);
    }
}
