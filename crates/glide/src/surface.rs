#![forbid(unsafe_code)]

//! The opaque viewport/pane handle a slider mutates.
//!
//! The slider treats the host's viewport and panes as a single [`Surface`]:
//! it reads one measurement (the containing box's width) and writes computed
//! geometry (pane widths, the strip offset, transition timing). Everything
//! else about the host's tree is none of the slider's business.
//!
//! The surface is also where event registration lives: the slider asks for
//! subscriptions by kind and retains the returned [`HandlerId`]s so teardown
//! removes exactly what was registered.
//!
//! # Transform capability
//!
//! Which transform property the environment supports is a per-process
//! capability, not slider state. It is resolved once and stored in a
//! process-wide slot; hosts that probe a vendor-prefixed name inject it via
//! [`set_transform_property`] before constructing sliders.

use std::sync::{Arc, LazyLock};
use std::time::Duration;

use arc_swap::ArcSwap;
use bitflags::bitflags;

use crate::subscription::{HandlerId, SubscriptionKind};

bitflags! {
    /// Style capabilities a surface advertises.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SurfaceCaps: u8 {
        /// 2D transforms can be applied to the viewport.
        const TRANSFORM = 0b001;
        /// Timed transitions can be applied to the viewport.
        const TRANSITION = 0b010;
        /// The surface honors a will-change style hint.
        const WILL_CHANGE = 0b100;
    }
}

/// The transform property name the host environment supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformProperty {
    /// Unprefixed `transform`.
    Standard,
    /// A vendor-prefixed variant, e.g. `-webkit-transform`.
    Prefixed(&'static str),
}

impl TransformProperty {
    /// The style property name to write.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Standard => "transform",
            Self::Prefixed(name) => name,
        }
    }
}

static TRANSFORM_PROPERTY: LazyLock<ArcSwap<TransformProperty>> =
    LazyLock::new(|| ArcSwap::from_pointee(TransformProperty::Standard));

/// The process-wide resolved transform property.
#[must_use]
pub fn transform_property() -> TransformProperty {
    **TRANSFORM_PROPERTY.load()
}

/// Inject the probed transform property for this process.
pub fn set_transform_property(property: TransformProperty) {
    TRANSFORM_PROPERTY.store(Arc::new(property));
}

/// Opaque viewport/pane handle.
///
/// Implementations apply the slider's computed geometry to whatever the host
/// actually renders. The slider is the only writer of these properties; a
/// host that also writes them corrupts the committed-offset invariant.
pub trait Surface {
    /// Measured width of the viewport's *containing box* (not the viewport
    /// itself, to avoid feedback from the component's own styling).
    fn container_width(&self) -> f32;

    /// Capabilities this surface supports.
    fn caps(&self) -> SurfaceCaps {
        SurfaceCaps::all()
    }

    /// Apply the resolved pane width to every pane's layout box.
    fn set_pane_width(&mut self, width: f32);

    /// Move the pane strip to a horizontal offset. Honors any transition
    /// timing currently in effect.
    fn set_offset(&mut self, x: f32);

    /// Apply transition timing so subsequent offset writes animate.
    fn begin_transition(&mut self, duration: Duration);

    /// Clear transition timing so offset writes apply immediately.
    fn clear_transition(&mut self);

    /// Register interest in a host event stream; returns the handler
    /// identity for later removal.
    fn subscribe(&mut self, kind: SubscriptionKind) -> HandlerId;

    /// Remove a previously registered handler. Unknown identities are
    /// ignored.
    fn unsubscribe(&mut self, id: HandlerId);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_property_name() {
        assert_eq!(TransformProperty::Standard.name(), "transform");
    }

    #[test]
    fn prefixed_property_name() {
        assert_eq!(
            TransformProperty::Prefixed("-webkit-transform").name(),
            "-webkit-transform"
        );
    }

    #[test]
    fn process_wide_override_round_trips() {
        set_transform_property(TransformProperty::Prefixed("-o-transform"));
        assert_eq!(
            transform_property(),
            TransformProperty::Prefixed("-o-transform")
        );
        set_transform_property(TransformProperty::Standard);
        assert_eq!(transform_property(), TransformProperty::Standard);
    }

    #[test]
    fn caps_combine() {
        let caps = SurfaceCaps::TRANSFORM | SurfaceCaps::TRANSITION;
        assert!(caps.contains(SurfaceCaps::TRANSFORM));
        assert!(!caps.contains(SurfaceCaps::WILL_CHANGE));
    }
}
