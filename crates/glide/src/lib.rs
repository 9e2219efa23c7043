#![forbid(unsafe_code)]

//! glide: touch-driven horizontal pager.
//!
//! # Role in the workspace
//! `glide` is the component layer. It wires the pure state machines from
//! [`glide_core`] to an opaque host [`Surface`] and exposes the public
//! slider API: gesture/scroll/resize entry points, frame polling, explicit
//! paging, and teardown.
//!
//! # Design
//! The slider never fails loudly. Construction without a surface yields an
//! inert instance; out-of-range configuration is clamped; paging at a
//! boundary, or any gesture arriving while disabled, animating, or
//! scroll-suspended, is a silent no-op. This defensive posture is deliberate
//! for a component embedded in arbitrary hosts.
//!
//! [`Surface`]: surface::Surface

pub mod prelude;
pub mod slider;
pub mod subscription;
pub mod surface;

pub use glide_core as core;
pub use slider::{Phase, ScrollResponse, SettleCallback, Slider, SliderOptions};
pub use subscription::{HandlerId, SubscriptionKind};
pub use surface::{Surface, SurfaceCaps, TransformProperty};
