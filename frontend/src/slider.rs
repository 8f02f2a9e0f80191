//! Divider state for the before/after comparison.
//!
//! Everything here is plain data so the drag math and the preload join can be
//! exercised without a browser. The component in
//! `components::comparison` owns one `SliderState` per slider through
//! `use_reducer`.

use std::rc::Rc;

use yew::prelude::*;

use crate::preload::{ImageLoadError, ImagePair, PreloadLatch, PreloadStatus, Slot};

pub const INITIAL_POSITION: f64 = 50.0;

/// Horizontal extent of the slider container in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerBounds {
    pub left: f64,
    pub width: f64,
}

/// The one thing mouse and touch input have in common for the divider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub client_x: f64,
}

impl PointerSample {
    pub fn new(client_x: f64) -> Self {
        Self { client_x }
    }
}

/// Percentage of the container width under the pointer, clamped to 0..=100.
///
/// Returns `None` for a container with no usable width (not laid out yet).
pub fn split_position(pointer: PointerSample, bounds: ContainerBounds) -> Option<f64> {
    if !(bounds.width.is_finite() && bounds.width > 0.0) || !pointer.client_x.is_finite() {
        return None;
    }
    let x = pointer.client_x - bounds.left;
    Some((x / bounds.width * 100.0).clamp(0.0, 100.0))
}

#[derive(Debug, Clone, PartialEq)]
pub enum SliderAction {
    /// The component was handed a (possibly new) image pair.
    Track(ImagePair),
    Loaded { pair: ImagePair, slot: Slot },
    LoadFailed { pair: ImagePair, error: ImageLoadError },
    BeginDrag { pointer: PointerSample, bounds: ContainerBounds },
    ContinueDrag { pointer: PointerSample, bounds: ContainerBounds },
    EndDrag,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SliderState {
    position: f64,
    dragging: bool,
    pair: ImagePair,
    latch: PreloadLatch,
}

impl SliderState {
    pub fn new(pair: ImagePair) -> Self {
        Self {
            position: INITIAL_POSITION,
            dragging: false,
            pair,
            latch: PreloadLatch::new(),
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn images_ready(&self) -> bool {
        self.latch.is_ready()
    }

    pub fn preload_status(&self) -> PreloadStatus {
        self.latch.status()
    }

    pub fn pair(&self) -> &ImagePair {
        &self.pair
    }

    /// Moves the divider under the pointer and starts a drag. A plain tap or
    /// click therefore repositions the divider too.
    pub fn begin_drag(&mut self, pointer: PointerSample, bounds: ContainerBounds) -> f64 {
        if !self.images_ready() {
            return self.position;
        }
        self.dragging = true;
        if let Some(position) = split_position(pointer, bounds) {
            self.position = position;
        }
        self.position
    }

    /// Same math as `begin_drag`, but only while a drag is active.
    pub fn continue_drag(&mut self, pointer: PointerSample, bounds: ContainerBounds) -> Option<f64> {
        if !self.dragging {
            return None;
        }
        let position = split_position(pointer, bounds)?;
        self.position = position;
        Some(position)
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Returns true when the state changed.
    pub fn apply(&mut self, action: SliderAction) -> bool {
        match action {
            SliderAction::Track(pair) => {
                if pair == self.pair {
                    return false;
                }
                self.pair = pair;
                self.latch = PreloadLatch::new();
                self.dragging = false;
                true
            }
            // Results for a pair we are no longer showing are dropped.
            SliderAction::Loaded { pair, slot } => {
                if pair != self.pair {
                    return false;
                }
                let before = self.latch.clone();
                self.latch.mark_loaded(slot);
                before != self.latch
            }
            SliderAction::LoadFailed { pair, error } => {
                pair == self.pair && self.latch.mark_failed(error)
            }
            SliderAction::BeginDrag { pointer, bounds } => {
                let before = (self.position, self.dragging);
                self.begin_drag(pointer, bounds);
                before != (self.position, self.dragging)
            }
            SliderAction::ContinueDrag { pointer, bounds } => {
                let before = self.position;
                self.continue_drag(pointer, bounds);
                before != self.position
            }
            SliderAction::EndDrag => {
                let was_dragging = self.dragging;
                self.end_drag();
                was_dragging
            }
        }
    }

    /// `clip-path` for the "after" layer: only the part left of the divider shows.
    pub fn after_clip(&self) -> String {
        format!("clip-path: inset(0 {}% 0 0);", 100.0 - self.position)
    }

    pub fn divider_offset(&self) -> String {
        format!("left: {}%;", self.position)
    }
}

impl Reducible for SliderState {
    type Action = SliderAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> ImagePair {
        ImagePair::new("/before.jpg", "/after.jpg")
    }

    fn bounds() -> ContainerBounds {
        ContainerBounds {
            left: 100.0,
            width: 400.0,
        }
    }

    fn ready_slider() -> SliderState {
        let mut state = SliderState::new(pair());
        state.apply(SliderAction::Loaded { pair: pair(), slot: Slot::Before });
        state.apply(SliderAction::Loaded { pair: pair(), slot: Slot::After });
        state
    }

    #[test]
    fn new_slider_starts_centered_and_locked() {
        let state = SliderState::new(pair());
        assert_eq!(state.position(), 50.0);
        assert!(!state.is_dragging());
        assert!(!state.images_ready());
        assert_eq!(state.preload_status(), PreloadStatus::Loading);
    }

    #[test]
    fn split_position_follows_pointer_inside_container() {
        for x in [100.0, 150.0, 300.0, 433.0, 500.0] {
            let expected = (x - 100.0) / 400.0 * 100.0;
            assert_eq!(split_position(PointerSample::new(x), bounds()), Some(expected));
        }
    }

    #[test]
    fn split_position_clamps_outside_container() {
        assert_eq!(split_position(PointerSample::new(20.0), bounds()), Some(0.0));
        assert_eq!(split_position(PointerSample::new(900.0), bounds()), Some(100.0));
    }

    #[test]
    fn split_position_rejects_zero_width() {
        let collapsed = ContainerBounds { left: 0.0, width: 0.0 };
        assert_eq!(split_position(PointerSample::new(10.0), collapsed), None);
    }

    #[test]
    fn images_ready_only_after_both_loads() {
        let mut state = SliderState::new(pair());
        assert!(state.apply(SliderAction::Loaded { pair: pair(), slot: Slot::After }));
        assert!(!state.images_ready());
        state.apply(SliderAction::Loaded { pair: pair(), slot: Slot::Before });
        assert!(state.images_ready());
    }

    #[test]
    fn preload_then_quarter_tap() {
        let mut state = SliderState::new(pair());
        assert_eq!(state.preload_status(), PreloadStatus::Loading);
        state.apply(SliderAction::Loaded { pair: pair(), slot: Slot::Before });
        assert_eq!(state.preload_status(), PreloadStatus::Loading);
        state.apply(SliderAction::Loaded { pair: pair(), slot: Slot::After });
        assert_eq!(state.preload_status(), PreloadStatus::Ready);

        let position = state.begin_drag(PointerSample::new(100.0 + 400.0 * 0.25), bounds());
        assert_eq!(position, 25.0);
        assert!(state.is_dragging());
    }

    #[test]
    fn input_ignored_until_images_ready() {
        let mut state = SliderState::new(pair());
        state.begin_drag(PointerSample::new(120.0), bounds());
        assert_eq!(state.position(), 50.0);
        assert!(!state.is_dragging());
    }

    #[test]
    fn continue_drag_without_press_is_noop() {
        let mut state = ready_slider();
        assert_eq!(state.continue_drag(PointerSample::new(140.0), bounds()), None);
        assert_eq!(state.position(), 50.0);
    }

    #[test]
    fn continue_drag_after_release_is_noop() {
        let mut state = ready_slider();
        state.begin_drag(PointerSample::new(200.0), bounds());
        state.end_drag();
        assert!(!state.apply(SliderAction::ContinueDrag {
            pointer: PointerSample::new(460.0),
            bounds: bounds(),
        }));
        assert_eq!(state.position(), 25.0);
    }

    #[test]
    fn drag_tracks_pointer_until_release() {
        let mut state = ready_slider();
        state.begin_drag(PointerSample::new(300.0), bounds());
        assert_eq!(state.continue_drag(PointerSample::new(400.0), bounds()), Some(75.0));
        assert_eq!(state.continue_drag(PointerSample::new(1000.0), bounds()), Some(100.0));
        state.apply(SliderAction::EndDrag);
        assert!(!state.is_dragging());
        assert_eq!(state.position(), 100.0);
    }

    #[test]
    fn new_pair_must_load_again() {
        let mut state = ready_slider();
        let next = ImagePair::new("/before1.jpg", "/after1.jpg");
        assert!(state.apply(SliderAction::Track(next.clone())));
        assert!(!state.images_ready());

        // a late event for the old pair does not count
        state.apply(SliderAction::Loaded { pair: pair(), slot: Slot::Before });
        state.apply(SliderAction::Loaded { pair: next.clone(), slot: Slot::After });
        assert!(!state.images_ready());
        state.apply(SliderAction::Loaded { pair: next, slot: Slot::Before });
        assert!(state.images_ready());
    }

    #[test]
    fn tracking_same_pair_keeps_ready() {
        let mut state = ready_slider();
        assert!(!state.apply(SliderAction::Track(pair())));
        assert!(state.images_ready());
    }

    #[test]
    fn failed_load_surfaces_error() {
        let mut state = SliderState::new(pair());
        let error = ImageLoadError::Failed {
            url: "/after.jpg".to_string(),
        };
        state.apply(SliderAction::LoadFailed { pair: pair(), error: error.clone() });
        assert_eq!(state.preload_status(), PreloadStatus::Failed(error));
        assert!(!state.images_ready());
    }

    fn reduce_all(state: SliderState, actions: Vec<SliderAction>) -> Rc<SliderState> {
        actions
            .into_iter()
            .fold(Rc::new(state), |state, action| state.reduce(action))
    }

    #[test]
    fn reducer_keeps_first_load_in_either_order() {
        for (first, second) in [(Slot::Before, Slot::After), (Slot::After, Slot::Before)] {
            let state = Rc::new(SliderState::new(pair()));
            let half = state.clone().reduce(SliderAction::Loaded { pair: pair(), slot: first });
            assert!(!Rc::ptr_eq(&state, &half));
            assert!(!half.images_ready());

            let full = half.reduce(SliderAction::Loaded { pair: pair(), slot: second });
            assert!(full.images_ready());
            assert_eq!(full.preload_status(), PreloadStatus::Ready);
        }
    }

    #[test]
    fn reducer_skips_repeat_load() {
        let state = reduce_all(
            SliderState::new(pair()),
            vec![SliderAction::Loaded { pair: pair(), slot: Slot::Before }],
        );
        let again = state.clone().reduce(SliderAction::Loaded { pair: pair(), slot: Slot::Before });
        assert!(Rc::ptr_eq(&state, &again));
    }

    #[test]
    fn reducer_drag_after_both_loads() {
        let state = reduce_all(
            SliderState::new(pair()),
            vec![
                SliderAction::Loaded { pair: pair(), slot: Slot::After },
                SliderAction::Loaded { pair: pair(), slot: Slot::Before },
                SliderAction::BeginDrag {
                    pointer: PointerSample::new(200.0),
                    bounds: bounds(),
                },
                SliderAction::ContinueDrag {
                    pointer: PointerSample::new(400.0),
                    bounds: bounds(),
                },
                SliderAction::EndDrag,
            ],
        );
        assert_eq!(state.position(), 75.0);
        assert!(!state.is_dragging());
    }

    #[test]
    fn reducer_track_resets_latch_and_drops_stale_loads() {
        let next = ImagePair::new("/before1.jpg", "/after1.jpg");
        let state = reduce_all(
            ready_slider(),
            vec![
                SliderAction::Track(next.clone()),
                SliderAction::Loaded { pair: pair(), slot: Slot::Before },
                SliderAction::Loaded { pair: pair(), slot: Slot::After },
            ],
        );
        assert_eq!(state.pair(), &next);
        assert!(!state.images_ready());

        let state = reduce_all(
            (*state).clone(),
            vec![
                SliderAction::Loaded { pair: next.clone(), slot: Slot::Before },
                SliderAction::Loaded { pair: next, slot: Slot::After },
            ],
        );
        assert!(state.images_ready());
    }

    #[test]
    fn clip_and_divider_follow_position() {
        let mut state = ready_slider();
        state.begin_drag(PointerSample::new(200.0), bounds());
        assert_eq!(state.after_clip(), "clip-path: inset(0 75% 0 0);");
        assert_eq!(state.divider_offset(), "left: 25%;");
    }
}
