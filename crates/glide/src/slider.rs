#![forbid(unsafe_code)]

//! The slider component: gesture-to-position state machine over a surface.
//!
//! [`Slider`] owns all mutable state and wires the `glide-core` machines
//! together: the drag tracker feeds the offset model, the classifier decides
//! what a completed gesture means, and the transition controller drives the
//! animated move. The host delivers pointer/scroll/resize events and polls
//! [`on_frame`](Slider::on_frame) at animation-frame boundaries.
//!
//! # State Machine
//!
//! The slider's `phase` moves through four states:
//!
//! - **Idle → Dragging**: pointer-start, only while idle, enabled, and not
//!   scroll-suspended.
//! - **Dragging → Idle/Animating**: pointer-end seals the live offset as the
//!   next gesture's baseline, then classification either starts a transition
//!   (→ Animating) or resolves to nothing (→ Idle).
//! - **Animating → Idle**: the transition settles on a frame poll at or past
//!   its deadline; the settle callback fires exactly once.
//! - **ScrollSuspended**: native scrolling inside a pane holds gestures off
//!   for a short window; the window is re-checked lazily against injected
//!   time on every entry point.
//!
//! # Invariants
//!
//! 1. `live_offset` and `committed_offset` always lie in `[-max_offset, 0]`.
//! 2. `active_index` always lies in `[0, pane_count - 1]`.
//! 3. A settled slider satisfies
//!    `committed_offset == live_offset == -active_index * pane_width`.
//! 4. At most one transition is in flight; a second request is silently
//!    refused.
//! 5. The settle callback fires exactly once per transition, including
//!    snap-backs, and never for a boundary no-op.
//!
//! # Failure Modes
//!
//! There are none that report: every misuse is a defensive no-op. A missing
//! surface yields an inert instance; events while disabled, animating, or
//! scroll-suspended are dropped; paging at a boundary does nothing. The one
//! deliberate loose end: disabling mid-drag abandons the drag in place,
//! leaving the live offset uncommitted until the next gesture or settle.

use std::time::Duration;

use web_time::Instant;

use glide_core::classify::{self, ClassifyContext, Direction, GestureSummary};
use glide_core::config::SliderConfig;
use glide_core::drag::{self, DragTracker};
use glide_core::event::{Point, PointerEvent, PointerPhase};
use glide_core::frame::VisualCoalescer;
use glide_core::geometry::PaneGeometry;
use glide_core::offset::OffsetModel;
use glide_core::scroll_lock::ScrollLock;
use glide_core::transition::{FrameAction, Transition};

use crate::subscription::{SubscriptionKind, SubscriptionSet};
use crate::surface::Surface;

/// Callback invoked once per completed transition with the settled index.
pub type SettleCallback = Box<dyn FnMut(usize)>;

/// Where the slider is in its gesture/animation lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Settled; ready for gestures.
    Idle,

    /// A contact is down and being tracked.
    Dragging,

    /// A transition is in flight.
    Animating,

    /// Native scrolling holds gestures off.
    ScrollSuspended,
}

/// How the host should treat a native scroll event it just reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollResponse {
    /// Let the native scroll proceed.
    Observe,

    /// Cancel the native scroll; the drag owns this gesture.
    Suppress,
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Construction input for a [`Slider`].
pub struct SliderOptions<S> {
    surface: Option<S>,
    config: SliderConfig,
    on_settled: Option<SettleCallback>,
}

impl<S> SliderOptions<S> {
    /// Options for a slider attached to `surface`.
    #[must_use]
    pub fn new(surface: S) -> Self {
        Self {
            surface: Some(surface),
            config: SliderConfig::default(),
            on_settled: None,
        }
    }

    /// Options with no surface: the resulting slider is inert.
    #[must_use]
    pub fn detached() -> Self {
        Self {
            surface: None,
            config: SliderConfig::default(),
            on_settled: None,
        }
    }

    /// Set the pane count (builder pattern).
    #[must_use]
    pub fn count(mut self, count: usize) -> Self {
        self.config = self.config.with_count(count);
        self
    }

    /// Set the initially active pane (builder pattern, clamped into range).
    #[must_use]
    pub fn index(mut self, index: usize) -> Self {
        self.config = self.config.with_index(index);
        self
    }

    /// Set the transition duration (builder pattern).
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.config = self.config.with_duration(duration);
        self
    }

    /// Set sticky drag-follow (builder pattern).
    #[must_use]
    pub fn sticky(mut self, sticky: bool) -> Self {
        self.config = self.config.sticky(sticky);
        self
    }

    /// Set swipe paging (builder pattern).
    #[must_use]
    pub fn swipe(mut self, swipe: bool) -> Self {
        self.config = self.config.swipe(swipe);
        self
    }

    /// Start disabled (builder pattern).
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.config = self.config.disabled(disabled);
        self
    }

    /// Set the settle callback (builder pattern).
    #[must_use]
    pub fn on_settled(mut self, callback: impl FnMut(usize) + 'static) -> Self {
        self.on_settled = Some(Box::new(callback));
        self
    }
}

// ---------------------------------------------------------------------------
// Slider
// ---------------------------------------------------------------------------

/// A touch-driven horizontal pager over an opaque [`Surface`].
pub struct Slider<S: Surface> {
    inner: Option<Inner<S>>,
}

struct Inner<S> {
    surface: S,
    config: SliderConfig,
    on_settled: Option<SettleCallback>,

    geometry: PaneGeometry,
    active_index: usize,
    offsets: OffsetModel,
    phase: Phase,

    drag: Option<DragTracker>,
    last_delta: Point,
    last_started_at: Option<Instant>,

    scroll_lock: ScrollLock,
    transition: Option<Transition>,
    visual: VisualCoalescer,
    subs: SubscriptionSet,
}

impl<S: Surface> std::fmt::Debug for Slider<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slider")
            .field("inert", &self.is_inert())
            .field("phase", &self.phase())
            .field("active_index", &self.active_index())
            .finish()
    }
}

impl<S: Surface> Slider<S> {
    /// Build a slider from `options`.
    ///
    /// Without a surface the instance is inert: no subscriptions are taken
    /// and every operation is a safe no-op. With a surface, geometry is
    /// resolved, the initial pane's offset is applied, pane widths are set
    /// (when there is more than one pane), and event subscriptions are
    /// registered.
    #[must_use]
    pub fn new(options: SliderOptions<S>) -> Self {
        let SliderOptions {
            surface,
            config,
            on_settled,
        } = options;
        let Some(mut surface) = surface else {
            return Self { inner: None };
        };

        let config = config.normalized();
        let geometry = PaneGeometry::resolve(surface.container_width(), config.count);
        let active_index = config.index;
        let start_offset = geometry.offset_for(active_index);

        if config.count > 1 {
            surface.set_pane_width(geometry.pane_width);
        }
        if active_index > 0 {
            surface.set_offset(start_offset);
        }

        let mut subs = SubscriptionSet::new();
        subs.record(surface.subscribe(SubscriptionKind::Pointer));
        if config.count > 1 {
            for pane in 0..config.count {
                subs.record(surface.subscribe(SubscriptionKind::PaneScroll(pane)));
            }
        }
        subs.record(surface.subscribe(SubscriptionKind::Resize));

        Self {
            inner: Some(Inner {
                surface,
                config,
                on_settled,
                geometry,
                active_index,
                offsets: OffsetModel::with_offset(start_offset),
                phase: Phase::Idle,
                drag: None,
                last_delta: Point::new(0.0, 0.0),
                last_started_at: None,
                scroll_lock: ScrollLock::new(),
                transition: None,
                visual: VisualCoalescer::new(),
                subs,
            }),
        }
    }

    // --- Event entry points ---

    /// Feed one pointer lifecycle event.
    pub fn handle_pointer(&mut self, event: PointerEvent, now: Instant) {
        let Some(inner) = self.inner.as_mut() else {
            return;
        };
        inner.refresh_scroll_lock(now);
        if inner.phase == Phase::Animating
            || inner.phase == Phase::ScrollSuspended
            || inner.config.disabled
        {
            return;
        }
        match event.phase {
            PointerPhase::Start => inner.on_start(event.point(), now),
            PointerPhase::Move => inner.on_move(event.point()),
            PointerPhase::End => inner.on_end(now),
        }
    }

    /// Report a native scroll event observed on a pane's content.
    ///
    /// Returns [`ScrollResponse::Suppress`] when a drag owns the gesture and
    /// the host should cancel the native scroll; otherwise the scroll opens
    /// (or extends) the gesture suspension window.
    pub fn notify_scroll(&mut self, now: Instant) -> ScrollResponse {
        let Some(inner) = self.inner.as_mut() else {
            return ScrollResponse::Observe;
        };
        if inner.phase == Phase::Dragging {
            return ScrollResponse::Suppress;
        }
        inner.scroll_lock.note_scroll(now);
        if inner.phase == Phase::Idle {
            #[cfg(feature = "tracing")]
            tracing::trace!("gestures suspended by native scroll");
            inner.phase = Phase::ScrollSuspended;
        }
        ScrollResponse::Observe
    }

    /// Re-measure the viewport after a host resize notification.
    pub fn notify_resize(&mut self) {
        let Some(inner) = self.inner.as_mut() else {
            return;
        };
        inner.geometry = PaneGeometry::resolve(inner.surface.container_width(), inner.config.count);
        if inner.config.count > 1 {
            inner.surface.set_pane_width(inner.geometry.pane_width);
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(pane_width = inner.geometry.pane_width, "geometry resolved");
    }

    /// Drive deferred work at an animation-frame boundary.
    ///
    /// Applies the coalesced visual offset (if any), then advances the
    /// transition controller: arming applies timing plus the target offset,
    /// settling commits the target and fires the callback. Returns whether
    /// another frame is needed.
    pub fn on_frame(&mut self, now: Instant) -> bool {
        let Some(inner) = self.inner.as_mut() else {
            return false;
        };
        inner.refresh_scroll_lock(now);

        if let Some(offset) = inner.visual.take() {
            inner.surface.set_offset(offset);
        }

        let action = match inner.transition.as_mut() {
            Some(transition) => transition.on_frame(now),
            None => FrameAction::None,
        };
        match action {
            FrameAction::Arm {
                offset, duration, ..
            } => {
                inner.surface.begin_transition(duration);
                inner.surface.set_offset(offset);
            }
            FrameAction::Settle { target, offset } => {
                inner.transition = None;
                inner.surface.clear_transition();
                inner.offsets.settle(offset);
                inner.active_index = target;
                inner.phase = Phase::Idle;
                #[cfg(feature = "tracing")]
                tracing::debug!(index = target, "transition settled");
                if let Some(callback) = inner.on_settled.as_mut() {
                    callback(target);
                }
            }
            FrameAction::None => {}
        }

        inner.visual.has_pending() || inner.transition.is_some()
    }

    // --- Paging operations ---

    /// Step to the previous pane unconditionally (bounded) and animate.
    pub fn prev(&mut self) {
        let Some(inner) = self.inner.as_mut() else {
            return;
        };
        if inner.phase == Phase::Animating || inner.active_index == 0 {
            return;
        }
        let target = inner.active_index - 1;
        inner.animate_to(target);
    }

    /// Step to the next pane unconditionally (bounded) and animate.
    pub fn next(&mut self) {
        let Some(inner) = self.inner.as_mut() else {
            return;
        };
        if inner.phase == Phase::Animating || inner.active_index + 1 >= inner.config.count {
            return;
        }
        let target = inner.active_index + 1;
        inner.animate_to(target);
    }

    /// Re-derive a retreat from current drag state and animate.
    ///
    /// The programmatic replay of the gesture-end path: the target comes
    /// from the classifier's valid-slide / nearest-pane logic, not a plain
    /// decrement.
    pub fn resolve_prev(&mut self, now: Instant) {
        self.resolve(Direction::Retreat, now);
    }

    /// Re-derive an advance from current drag state and animate.
    pub fn resolve_next(&mut self, now: Instant) {
        self.resolve(Direction::Advance, now);
    }

    fn resolve(&mut self, direction: Direction, now: Instant) {
        let Some(inner) = self.inner.as_mut() else {
            return;
        };
        if inner.phase == Phase::Animating {
            return;
        }
        let summary = inner.current_summary(now);
        if let Some(target) = classify::resolve_step(direction, &summary, &inner.classify_context())
        {
            inner.animate_to(target);
        }
    }

    // --- Inputs and teardown ---

    /// Toggle the externally owned `disabled` input.
    ///
    /// Disabling mid-drag abandons the drag in place: the live offset stays
    /// wherever the last move put it until the next gesture or settle.
    pub fn set_disabled(&mut self, disabled: bool) {
        let Some(inner) = self.inner.as_mut() else {
            return;
        };
        inner.config.disabled = disabled;
        if disabled && inner.phase == Phase::Dragging {
            inner.drag = None;
            inner.phase = Phase::Idle;
        }
    }

    /// Release every registered subscription. Idempotent: a second call
    /// observes an inert instance and does nothing.
    pub fn destroy(&mut self) {
        let Some(mut inner) = self.inner.take() else {
            return;
        };
        for id in inner.subs.drain() {
            inner.surface.unsubscribe(id);
        }
    }

    // --- Accessors ---

    /// Whether construction produced an inert instance (or `destroy` ran).
    #[must_use]
    pub fn is_inert(&self) -> bool {
        self.inner.is_none()
    }

    /// The committed, settled pane index (0 when inert).
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.inner.as_ref().map_or(0, |inner| inner.active_index)
    }

    /// Current lifecycle phase (`Idle` when inert).
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.inner.as_ref().map_or(Phase::Idle, |inner| inner.phase)
    }

    /// The visually current offset.
    #[must_use]
    pub fn live_offset(&self) -> f32 {
        self.inner
            .as_ref()
            .map_or(0.0, |inner| inner.offsets.live())
    }

    /// The baseline offset of the last settled or sealed state.
    #[must_use]
    pub fn committed_offset(&self) -> f32 {
        self.inner
            .as_ref()
            .map_or(0.0, |inner| inner.offsets.committed())
    }

    /// Current pane geometry.
    #[must_use]
    pub fn geometry(&self) -> PaneGeometry {
        self.inner
            .as_ref()
            .map_or_else(PaneGeometry::default, |inner| inner.geometry)
    }

    /// Whether gesture input is currently disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.inner
            .as_ref()
            .is_some_and(|inner| inner.config.disabled)
    }

    /// Whether deferred work is waiting on a frame poll.
    #[must_use]
    pub fn needs_frame(&self) -> bool {
        self.inner
            .as_ref()
            .is_some_and(|inner| inner.visual.has_pending() || inner.transition.is_some())
    }

    /// The attached surface, if any.
    #[must_use]
    pub fn surface(&self) -> Option<&S> {
        self.inner.as_ref().map(|inner| &inner.surface)
    }
}

// ---------------------------------------------------------------------------
// Internal event handlers
// ---------------------------------------------------------------------------

impl<S: Surface> Inner<S> {
    fn on_start(&mut self, point: Point, now: Instant) {
        if self.phase != Phase::Idle {
            return;
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(x = point.x, y = point.y, "drag started");
        self.drag = Some(DragTracker::begin(point, now));
        self.phase = Phase::Dragging;
    }

    fn on_move(&mut self, point: Point) {
        if self.phase != Phase::Dragging {
            return;
        }
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        let delta = drag.record(point);
        self.last_delta = delta;
        if drag::is_vertical_scroll(delta) {
            return;
        }
        if let Some(live) = self.offsets.apply(delta.x, &self.geometry, self.config.sticky) {
            self.visual.push(live);
        }
    }

    fn on_end(&mut self, now: Instant) {
        if self.phase != Phase::Dragging {
            return;
        }
        let Some(drag) = self.drag.take() else {
            self.phase = Phase::Idle;
            return;
        };
        let summary = GestureSummary {
            delta: drag.delta(),
            elapsed: drag.elapsed(now),
        };
        self.last_delta = summary.delta;
        self.last_started_at = Some(drag.started_at());
        self.offsets.commit_live();
        self.phase = Phase::Idle;

        // A non-sticky gesture that stayed vertical never moved anything;
        // drop it without classification.
        if !self.config.sticky && drag::is_vertical_scroll(summary.delta) {
            return;
        }

        let target = classify::classify(&summary, &self.classify_context());
        #[cfg(feature = "tracing")]
        tracing::debug!(
            dx = summary.delta.x,
            elapsed_ms = summary.elapsed.as_millis() as u64,
            ?target,
            "gesture classified"
        );
        if let Some(target) = target {
            self.animate_to(target);
        }
    }

    /// Start a transition toward `target`. Refused while one is in flight.
    fn animate_to(&mut self, target: usize) {
        if self.transition.is_some() {
            return;
        }
        let offset = self.geometry.offset_for(target);
        self.transition = Some(Transition::begin(target, offset, self.config.duration));
        self.phase = Phase::Animating;
    }

    /// Lazily sync `phase` with the scroll suspension window.
    fn refresh_scroll_lock(&mut self, now: Instant) {
        if self.scroll_lock.refresh(now) {
            if self.phase == Phase::Idle {
                self.phase = Phase::ScrollSuspended;
            }
        } else if self.phase == Phase::ScrollSuspended {
            self.phase = Phase::Idle;
        }
    }

    /// Drag state as the classifier sees it right now. Elapsed time is
    /// measured to `now`, so a long-finished flick goes stale the same way
    /// it would for a fresh gesture-end.
    fn current_summary(&self, now: Instant) -> GestureSummary {
        if let Some(drag) = self.drag.as_ref() {
            return GestureSummary {
                delta: drag.delta(),
                elapsed: drag.elapsed(now),
            };
        }
        GestureSummary {
            delta: self.last_delta,
            elapsed: self
                .last_started_at
                .map_or(Duration::MAX, |started| {
                    now.saturating_duration_since(started)
                }),
        }
    }

    fn classify_context(&self) -> ClassifyContext {
        ClassifyContext {
            geometry: self.geometry,
            committed_offset: self.offsets.committed(),
            active_index: self.active_index,
            pane_count: self.config.count,
            sticky: self.config.sticky,
            swipe: self.config.swipe,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
