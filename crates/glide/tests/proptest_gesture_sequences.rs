//! Property tests driving the full slider through arbitrary event sequences.
//!
//! Whatever the host throws at it — out-of-order pointer phases, scrolls,
//! resizes, paging calls, frame polls — the slider must hold its invariants:
//!
//! 1. No panics
//! 2. `active_index` stays in `[0, pane_count - 1]`
//! 3. Both offsets stay in `[-max_offset, 0]`
//! 4. Every surface offset write stays in `[-max_offset, 0]`

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use glide::prelude::*;
use proptest::prelude::*;
use web_time::Instant;

#[derive(Debug, Clone)]
enum HostEvent {
    Start(f32, f32),
    Move(f32, f32),
    End(f32, f32),
    Scroll,
    Resize,
    Prev,
    Next,
    ResolvePrev,
    ResolveNext,
    SetDisabled(bool),
    Frame,
    Wait(u16),
}

fn coord() -> impl Strategy<Value = f32> {
    -2000.0f32..2000.0
}

fn event_strategy() -> impl Strategy<Value = HostEvent> {
    prop_oneof![
        (coord(), coord()).prop_map(|(x, y)| HostEvent::Start(x, y)),
        (coord(), coord()).prop_map(|(x, y)| HostEvent::Move(x, y)),
        (coord(), coord()).prop_map(|(x, y)| HostEvent::End(x, y)),
        Just(HostEvent::Scroll),
        Just(HostEvent::Resize),
        Just(HostEvent::Prev),
        Just(HostEvent::Next),
        Just(HostEvent::ResolvePrev),
        Just(HostEvent::ResolveNext),
        any::<bool>().prop_map(HostEvent::SetDisabled),
        Just(HostEvent::Frame),
        (0u16..600).prop_map(HostEvent::Wait),
    ]
}

#[derive(Debug, Default)]
struct CheckingSurface {
    width: f32,
    max_offset: Rc<RefCell<f32>>,
    next_id: u64,
}

impl Surface for CheckingSurface {
    fn container_width(&self) -> f32 {
        self.width
    }

    fn set_pane_width(&mut self, _width: f32) {}

    fn set_offset(&mut self, x: f32) {
        let max = *self.max_offset.borrow();
        assert!(x <= 0.0, "offset {x} above zero");
        assert!(x >= -max, "offset {x} beyond -{max}");
    }

    fn begin_transition(&mut self, _duration: Duration) {}

    fn clear_transition(&mut self) {}

    fn subscribe(&mut self, _kind: SubscriptionKind) -> HandlerId {
        self.next_id += 1;
        HandlerId(self.next_id)
    }

    fn unsubscribe(&mut self, _id: HandlerId) {}
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn arbitrary_host_sequences_hold_invariants(
        count in 1usize..8,
        width in prop_oneof![Just(0.0f32), 50.0f32..800.0],
        sticky in any::<bool>(),
        swipe in any::<bool>(),
        events in proptest::collection::vec(event_strategy(), 1..80),
    ) {
        let max_offset = Rc::new(RefCell::new(width * (count as f32 - 1.0)));
        let surface = CheckingSurface {
            width,
            max_offset: Rc::clone(&max_offset),
            next_id: 0,
        };
        let mut slider = Slider::new(
            SliderOptions::new(surface)
                .count(count)
                .sticky(sticky)
                .swipe(swipe)
                .duration(Duration::from_millis(120)),
        );

        let start = Instant::now();
        let mut clock = Duration::ZERO;

        for event in events {
            let now = start + clock;
            match event {
                HostEvent::Start(x, y) => {
                    slider.handle_pointer(PointerEvent::start(x, y), now);
                }
                HostEvent::Move(x, y) => {
                    slider.handle_pointer(PointerEvent::moved(x, y), now);
                }
                HostEvent::End(x, y) => {
                    slider.handle_pointer(PointerEvent::end(x, y), now);
                }
                HostEvent::Scroll => {
                    let _ = slider.notify_scroll(now);
                }
                HostEvent::Resize => slider.notify_resize(),
                HostEvent::Prev => slider.prev(),
                HostEvent::Next => slider.next(),
                HostEvent::ResolvePrev => slider.resolve_prev(now),
                HostEvent::ResolveNext => slider.resolve_next(now),
                HostEvent::SetDisabled(disabled) => slider.set_disabled(disabled),
                HostEvent::Frame => {
                    let _ = slider.on_frame(now);
                }
                HostEvent::Wait(ms) => clock += Duration::from_millis(u64::from(ms)),
            }

            let geometry = slider.geometry();
            prop_assert!(slider.active_index() < count);
            prop_assert!(slider.live_offset() <= 0.0);
            prop_assert!(slider.live_offset() >= -geometry.max_offset);
            prop_assert!(slider.committed_offset() <= 0.0);
            prop_assert!(slider.committed_offset() >= -geometry.max_offset);
        }

        // Drain whatever is still pending; the slider must come to rest.
        for tick in 1..=40u64 {
            let _ = slider.on_frame(start + clock + Duration::from_millis(tick * 16));
        }
        prop_assert!(!slider.needs_frame());

        slider.destroy();
        slider.destroy();
    }
}
