#![forbid(unsafe_code)]

//! Convenience re-exports for typical hosts.
//!
//! ```ignore
//! use glide::prelude::*;
//! ```

pub use crate::slider::{Phase, ScrollResponse, Slider, SliderOptions};
pub use crate::subscription::{HandlerId, SubscriptionKind};
pub use crate::surface::{Surface, SurfaceCaps, TransformProperty};
pub use glide_core::config::SliderConfig;
pub use glide_core::event::{Point, PointerEvent, PointerPhase};
pub use glide_core::geometry::PaneGeometry;
