#![forbid(unsafe_code)]

//! Core: gesture, geometry, and transition state machines for the glide pager.
//!
//! # Role in glide
//! `glide-core` is the decision layer. It owns the pure state machines that
//! turn raw pointer input into pane positions: drag tracking, boundary
//! clamping, gesture classification, and the timed transition controller.
//!
//! # Primary responsibilities
//! - **PointerEvent**: canonical pointer lifecycle events.
//! - **PaneGeometry**: pane width and scroll bounds from the measured viewport.
//! - **DragTracker / OffsetModel**: in-progress drag state and clamped offsets.
//! - **classify**: advance/retreat/snap-back resolution at gesture end.
//! - **Transition / ScrollLock / VisualCoalescer**: poll-driven timing.
//!
//! # How it fits in the system
//! The component crate (`glide`) consumes these machines and applies their
//! output to a host surface. Everything here takes injected timestamps and
//! performs no I/O, so the whole layer is deterministic under test.

pub mod classify;
pub mod config;
pub mod drag;
pub mod event;
pub mod frame;
pub mod geometry;
pub mod logging;
pub mod offset;
pub mod scroll_lock;
pub mod transition;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
