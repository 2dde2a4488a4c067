// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drag/position state machine.
//!
//! [`CarouselState`] owns the drag session, the strip offsets and the settled
//! index. [`CarouselState::handle`] is a reducer: it folds one
//! [`CarouselInput`] into the state and returns the [`Effects`] the host has
//! to apply, in order.
//!
//! ```
//! use kurbo::Size;
//! use understory_carousel::{CarouselConfig, CarouselInput, CarouselState, Effect};
//!
//! let mut state = CarouselState::new(8, CarouselConfig::default()).unwrap();
//! state.handle(CarouselInput::Mount(Size::new(300.0, 200.0)));
//!
//! state.handle(CarouselInput::DragStart { pane: 0, x: 400.0 });
//! state.handle(CarouselInput::DragMove { x: 250.0 });
//! let effects = state.handle(CarouselInput::DragEnd);
//!
//! assert_eq!(state.settled_index(), 1);
//! assert_eq!(state.current_translate(), -300.0);
//! assert_eq!(effects.last(), Some(&Effect::SlideComplete(1)));
//! ```

use kurbo::Size;

use crate::config::CarouselConfig;
use crate::drag::DragSession;
use crate::effect::{Affordance, Effect, Effects, Transition};
use crate::error::CarouselError;
use crate::geometry::GeometryTracker;
use crate::input::{ArrowKey, CarouselInput};
use crate::snap;

/// Drag, offset and index state for one carousel instance.
///
/// Whenever no drag session is active, `current_translate()` equals
/// `-settled_index() * width`.
#[derive(Clone, Debug)]
pub struct CarouselState {
    config: CarouselConfig,
    pane_count: usize,
    geometry: GeometryTracker,
    settled_index: usize,
    current_translate: f64,
    previous_translate: f64,
    drag: Option<DragSession>,
}

impl CarouselState {
    /// Creates the state for a strip of `pane_count` panes.
    ///
    /// The initial settled index is the configured active index, clamped into
    /// range, or `0` when uncontrolled.
    pub fn new(pane_count: usize, config: CarouselConfig) -> Result<Self, CarouselError> {
        if pane_count == 0 {
            return Err(CarouselError::NoPanes);
        }
        config.validate()?;
        let settled_index = config.active_index.unwrap_or(0).min(pane_count - 1);
        Ok(Self {
            config,
            pane_count,
            geometry: GeometryTracker::new(),
            settled_index,
            current_translate: 0.0,
            previous_translate: 0.0,
            drag: None,
        })
    }

    /// Folds one input into the state, returning the effects to apply.
    pub fn handle(&mut self, input: CarouselInput) -> Effects {
        let mut effects = Effects::new();
        match input {
            CarouselInput::Mount(size) => {
                tracing::debug!(width = size.width, height = size.height, "carousel mounted");
                self.relayout(size, &mut effects);
            }
            CarouselInput::Resize(size) => {
                tracing::debug!(width = size.width, height = size.height, "frame resized");
                self.relayout(size, &mut effects);
            }
            CarouselInput::DragStart { pane, x } => self.drag_start(pane, x, &mut effects),
            CarouselInput::DragMove { x } => self.drag_move(x),
            CarouselInput::DragEnd => self.drag_end(&mut effects),
            CarouselInput::KeyDown(key) => self.key_down(key, &mut effects),
            CarouselInput::ActiveIndex(index) => self.sync_active_index(index, &mut effects),
            CarouselInput::Frame => self.frame(&mut effects),
        }
        effects
    }

    /// Number of panes in the strip.
    #[must_use]
    pub fn pane_count(&self) -> usize {
        self.pane_count
    }

    /// Index of the last pane.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.pane_count - 1
    }

    /// The pane considered current.
    #[must_use]
    pub fn settled_index(&self) -> usize {
        self.settled_index
    }

    /// Live horizontal strip offset in pixels.
    #[must_use]
    pub fn current_translate(&self) -> f64 {
        self.current_translate
    }

    /// Resting offset that drag deltas are measured against.
    #[must_use]
    pub fn previous_translate(&self) -> f64 {
        self.previous_translate
    }

    /// Returns `true` while a drag session is open.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The open drag session, if any.
    #[must_use]
    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// Frame geometry as last measured.
    #[must_use]
    pub fn geometry(&self) -> &GeometryTracker {
        &self.geometry
    }

    /// The configuration this state was built with.
    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    fn animated(&self) -> Effect {
        Effect::SetTransition(Transition::Animated(self.config.transition))
    }

    fn clamp_index(&self, index: usize) -> usize {
        index.min(self.last_index())
    }

    /// Snaps both offsets to the settled pane and writes the result.
    fn position_by_index(&mut self, effects: &mut Effects) {
        self.current_translate = self.geometry.offset_for(self.settled_index);
        self.previous_translate = self.current_translate;
        effects.push(Effect::ApplyOffset(self.current_translate));
    }

    /// Moves both offsets onto the settled pane.
    ///
    /// Mid-drag the render loop owns the transform, so the open session is
    /// rebased and nothing is written; otherwise the offset is applied.
    fn settle_offsets(&mut self, effects: &mut Effects) {
        let resting = self.geometry.offset_for(self.settled_index);
        if let Some(drag) = self.drag.as_mut() {
            self.previous_translate = resting;
            self.current_translate = drag.rebase(resting);
        } else {
            self.position_by_index(effects);
        }
    }

    fn relayout(&mut self, size: Size, effects: &mut Effects) {
        self.geometry.measure(size);
        effects.push(Effect::SetTransition(Transition::Instant));
        self.settle_offsets(effects);
    }

    fn drag_start(&mut self, pane: usize, x: f64, effects: &mut Effects) {
        if self.drag.is_some() {
            tracing::trace!(pane, "drag start ignored, session already open");
            return;
        }
        if !x.is_finite() {
            tracing::trace!(pane, "drag start ignored, pointer position is not finite");
            return;
        }
        self.settled_index = self.clamp_index(pane);
        effects.push(self.animated());
        self.drag = Some(DragSession::start(x, self.previous_translate));
        effects.push(Effect::RequestFrame);
        effects.push(Effect::SlideStart(self.settled_index));
        effects.push(Effect::SetAffordance(Affordance::Grabbing {
            scaled: self.config.scale_on_drag,
        }));
        tracing::debug!(index = self.settled_index, x, "drag started");
    }

    fn drag_move(&mut self, x: f64) {
        if let Some(drag) = self.drag.as_mut() {
            self.current_translate = drag.update(x);
            tracing::trace!(offset = self.current_translate, "drag moved");
        }
    }

    fn drag_end(&mut self, effects: &mut Effects) {
        let Some(session) = self.drag.take() else {
            return;
        };
        let moved_by = self.current_translate - self.previous_translate;
        let outcome = snap::resolve(
            moved_by,
            self.config.threshold,
            self.settled_index,
            self.pane_count,
        );
        let from = self.settled_index;
        self.settled_index = outcome.apply(from);

        effects.push(Effect::CancelFrame);
        effects.push(self.animated());
        self.position_by_index(effects);
        effects.push(Effect::SetAffordance(Affordance::Resting));
        effects.push(Effect::SlideComplete(self.settled_index));
        tracing::debug!(
            from,
            to = self.settled_index,
            moved_by,
            pointer_delta = session.delta(),
            ?outcome,
            "drag ended"
        );
    }

    fn key_down(&mut self, key: ArrowKey, effects: &mut Effects) {
        let from = self.settled_index;
        effects.push(self.animated());
        effects.push(Effect::SlideStart(from));
        self.settled_index = match key {
            ArrowKey::Right if from < self.last_index() => from + 1,
            ArrowKey::Left if from > 0 => from - 1,
            _ => from,
        };
        effects.push(Effect::SlideComplete(self.settled_index));
        self.settle_offsets(effects);
        tracing::debug!(
            ?key,
            from,
            to = self.settled_index,
            dragging = self.drag.is_some(),
            "keyboard commit"
        );
    }

    fn sync_active_index(&mut self, index: Option<usize>, effects: &mut Effects) {
        let Some(index) = index else {
            return;
        };
        let index = self.clamp_index(index);
        if index == self.settled_index {
            return;
        }
        tracing::debug!(
            from = self.settled_index,
            to = index,
            dragging = self.drag.is_some(),
            "external index adopted"
        );
        self.settled_index = index;
        if self.drag.is_none() {
            effects.push(self.animated());
        }
        self.settle_offsets(effects);
    }

    fn frame(&mut self, effects: &mut Effects) {
        if self.drag.is_some() {
            effects.push(Effect::ApplyOffset(self.current_translate));
            effects.push(Effect::RequestFrame);
        } else {
            tracing::trace!("frame ignored outside a drag session");
        }
    }
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use super::*;

    const ANIMATED: Effect = Effect::SetTransition(Transition::Animated(Duration::from_millis(300)));

    fn mounted(panes: usize, width: f64) -> CarouselState {
        let mut state = CarouselState::new(panes, CarouselConfig::default()).unwrap();
        state.handle(CarouselInput::Mount(Size::new(width, 200.0)));
        state
    }

    fn drag(state: &mut CarouselState, pane: usize, delta: f64) -> Effects {
        state.handle(CarouselInput::DragStart { pane, x: 500.0 });
        state.handle(CarouselInput::DragMove { x: 500.0 + delta });
        state.handle(CarouselInput::DragEnd)
    }

    #[test]
    fn empty_strip_is_rejected() {
        let err = CarouselState::new(0, CarouselConfig::default()).unwrap_err();
        assert_eq!(err, CarouselError::NoPanes);
    }

    #[test]
    fn invalid_threshold_is_rejected() {
        let config = CarouselConfig::new().with_threshold(f64::NAN);
        assert!(CarouselState::new(3, config).is_err());
    }

    #[test]
    fn initial_active_index_is_clamped() {
        let config = CarouselConfig::new().with_active_index(Some(42));
        let state = CarouselState::new(8, config).unwrap();
        assert_eq!(state.settled_index(), 7);
    }

    #[test]
    fn mount_positions_without_animation() {
        let config = CarouselConfig::new().with_active_index(Some(3));
        let mut state = CarouselState::new(8, config).unwrap();
        let effects = state.handle(CarouselInput::Mount(Size::new(300.0, 200.0)));
        assert_eq!(
            effects.as_slice(),
            &[
                Effect::SetTransition(Transition::Instant),
                Effect::ApplyOffset(-900.0),
            ]
        );
        assert_eq!(state.previous_translate(), -900.0);
    }

    #[test]
    fn drag_start_effects_in_order() {
        let mut state = mounted(8, 300.0);
        let effects = state.handle(CarouselInput::DragStart { pane: 0, x: 10.0 });
        assert_eq!(
            effects.as_slice(),
            &[
                ANIMATED,
                Effect::RequestFrame,
                Effect::SlideStart(0),
                Effect::SetAffordance(Affordance::Grabbing { scaled: false }),
            ]
        );
        assert!(state.is_dragging());
    }

    #[test]
    fn drag_start_binds_to_targeted_pane() {
        let mut state = mounted(8, 300.0);
        let effects = state.handle(CarouselInput::DragStart { pane: 4, x: 10.0 });
        assert_eq!(state.settled_index(), 4);
        assert!(effects.contains(&Effect::SlideStart(4)));
    }

    #[test]
    fn drag_move_tracks_raw_delta_without_effects() {
        let mut state = mounted(8, 300.0);
        state.handle(CarouselInput::DragStart { pane: 0, x: 100.0 });
        let effects = state.handle(CarouselInput::DragMove { x: 340.0 });
        assert!(effects.is_empty());
        assert_eq!(state.current_translate(), 240.0);
    }

    #[test]
    fn move_outside_session_is_ignored() {
        let mut state = mounted(8, 300.0);
        state.handle(CarouselInput::DragMove { x: 340.0 });
        assert_eq!(state.current_translate(), 0.0);
    }

    #[test]
    fn drag_end_effects_in_order() {
        let mut state = mounted(8, 300.0);
        let effects = drag(&mut state, 2, -150.0);
        assert_eq!(
            effects.as_slice(),
            &[
                Effect::CancelFrame,
                ANIMATED,
                Effect::ApplyOffset(-900.0),
                Effect::SetAffordance(Affordance::Resting),
                Effect::SlideComplete(3),
            ]
        );
        assert!(!state.is_dragging());
    }

    #[test]
    fn short_drag_springs_back() {
        let mut state = mounted(8, 300.0);
        drag(&mut state, 0, -60.0);
        let effects = drag(&mut state, 0, -99.0);
        assert_eq!(state.settled_index(), 0);
        assert!(effects.contains(&Effect::ApplyOffset(0.0)));
        assert!(effects.contains(&Effect::SlideComplete(0)));
    }

    #[test]
    fn drag_end_without_session_is_noop() {
        let mut state = mounted(8, 300.0);
        assert!(state.handle(CarouselInput::DragEnd).is_empty());
    }

    #[test]
    fn second_drag_start_is_ignored() {
        let mut state = mounted(8, 300.0);
        state.handle(CarouselInput::DragStart { pane: 1, x: 100.0 });
        let effects = state.handle(CarouselInput::DragStart { pane: 5, x: 0.0 });
        assert!(effects.is_empty());
        assert_eq!(state.settled_index(), 1);
        assert_eq!(state.drag_session().map(|d| d.start_x), Some(100.0));
    }

    #[test]
    fn frames_only_render_during_drag() {
        let mut state = mounted(8, 300.0);
        assert!(state.handle(CarouselInput::Frame).is_empty());

        state.handle(CarouselInput::DragStart { pane: 0, x: 100.0 });
        state.handle(CarouselInput::DragMove { x: 80.0 });
        let effects = state.handle(CarouselInput::Frame);
        assert_eq!(
            effects.as_slice(),
            &[Effect::ApplyOffset(-20.0), Effect::RequestFrame]
        );

        state.handle(CarouselInput::DragEnd);
        assert!(state.handle(CarouselInput::Frame).is_empty());
    }

    #[test]
    fn arrow_right_commits_next_pane() {
        let mut state = mounted(8, 300.0);
        let effects = state.handle(CarouselInput::KeyDown(ArrowKey::Right));
        assert_eq!(
            effects.as_slice(),
            &[
                ANIMATED,
                Effect::SlideStart(0),
                Effect::SlideComplete(1),
                Effect::ApplyOffset(-300.0),
            ]
        );
    }

    #[test]
    fn arrow_left_at_first_pane_keeps_index() {
        let mut state = mounted(8, 300.0);
        let effects = state.handle(CarouselInput::KeyDown(ArrowKey::Left));
        assert_eq!(state.settled_index(), 0);
        assert!(effects.contains(&Effect::SlideStart(0)));
        assert!(effects.contains(&Effect::SlideComplete(0)));
        assert_eq!(state.current_translate(), 0.0);
    }

    #[test]
    fn arrow_key_mid_drag_commits_and_rebases() {
        let mut state = mounted(8, 300.0);
        state.handle(CarouselInput::DragStart { pane: 2, x: 100.0 });
        state.handle(CarouselInput::DragMove { x: 60.0 });
        let effects = state.handle(CarouselInput::KeyDown(ArrowKey::Right));
        assert_eq!(
            effects.as_slice(),
            &[ANIMATED, Effect::SlideStart(2), Effect::SlideComplete(3)]
        );
        assert_eq!(state.settled_index(), 3);
        assert!(state.is_dragging());
        assert_eq!(state.previous_translate(), -900.0);
        assert_eq!(state.current_translate(), -940.0);

        // The drag keeps going from the new pane.
        let effects = state.handle(CarouselInput::DragEnd);
        assert_eq!(state.settled_index(), 3);
        assert_eq!(effects.last(), Some(&Effect::SlideComplete(3)));
    }

    #[test]
    fn external_index_is_adopted_without_callbacks() {
        let mut state = mounted(8, 300.0);
        let effects = state.handle(CarouselInput::ActiveIndex(Some(5)));
        assert_eq!(
            effects.as_slice(),
            &[ANIMATED, Effect::ApplyOffset(-1500.0)]
        );
        assert_eq!(state.settled_index(), 5);
    }

    #[test]
    fn external_index_matching_settled_is_noop() {
        let mut state = mounted(8, 300.0);
        assert!(state.handle(CarouselInput::ActiveIndex(Some(0))).is_empty());
        assert!(state.handle(CarouselInput::ActiveIndex(None)).is_empty());
    }

    #[test]
    fn external_index_is_clamped() {
        let mut state = mounted(4, 100.0);
        state.handle(CarouselInput::ActiveIndex(Some(99)));
        assert_eq!(state.settled_index(), 3);
        assert_eq!(state.current_translate(), -300.0);
    }

    #[test]
    fn external_index_mid_drag_is_adopted_and_rebases() {
        let mut state = mounted(8, 300.0);
        state.handle(CarouselInput::DragStart { pane: 2, x: 500.0 });
        state.handle(CarouselInput::DragMove { x: 450.0 });
        assert!(state.handle(CarouselInput::ActiveIndex(Some(6))).is_empty());
        assert_eq!(state.settled_index(), 6);
        assert!(state.is_dragging());
        assert_eq!(state.previous_translate(), -1800.0);
        assert_eq!(state.current_translate(), -1850.0);

        // The render loop picks up the rebased offset.
        assert_eq!(
            state.handle(CarouselInput::Frame).as_slice(),
            &[Effect::ApplyOffset(-1850.0), Effect::RequestFrame]
        );

        // Completion reports the index the drag settled on, measured from pane 6.
        state.handle(CarouselInput::DragMove { x: 350.0 });
        let effects = state.handle(CarouselInput::DragEnd);
        assert_eq!(effects.last(), Some(&Effect::SlideComplete(7)));
        assert_eq!(state.settled_index(), 7);
        assert_eq!(state.current_translate(), -2100.0);
    }

    #[test]
    fn resize_while_idle_repositions_instantly() {
        let mut state = mounted(8, 300.0);
        state.handle(CarouselInput::KeyDown(ArrowKey::Right));
        state.handle(CarouselInput::KeyDown(ArrowKey::Right));
        let effects = state.handle(CarouselInput::Resize(Size::new(500.0, 200.0)));
        assert_eq!(
            effects.as_slice(),
            &[
                Effect::SetTransition(Transition::Instant),
                Effect::ApplyOffset(-1000.0),
            ]
        );
    }

    #[test]
    fn resize_mid_drag_rebases_without_writing() {
        let mut state = mounted(8, 300.0);
        state.handle(CarouselInput::DragStart { pane: 1, x: 500.0 });
        state.handle(CarouselInput::DragMove { x: 450.0 });
        let effects = state.handle(CarouselInput::Resize(Size::new(400.0, 200.0)));
        assert_eq!(
            effects.as_slice(),
            &[Effect::SetTransition(Transition::Instant)]
        );
        assert_eq!(state.previous_translate(), -400.0);
        assert_eq!(state.current_translate(), -450.0);
    }

    #[test]
    fn positions_are_zero_before_mount() {
        let mut state = CarouselState::new(8, CarouselConfig::default()).unwrap();
        let effects = state.handle(CarouselInput::KeyDown(ArrowKey::Right));
        assert_eq!(state.settled_index(), 1);
        assert!(effects.contains(&Effect::ApplyOffset(0.0)));
    }

    #[test]
    fn scale_on_drag_is_reported_in_affordance() {
        let config = CarouselConfig::new().with_scale_on_drag(true);
        let mut state = CarouselState::new(3, config).unwrap();
        let effects = state.handle(CarouselInput::DragStart { pane: 0, x: 0.0 });
        assert!(effects.contains(&Effect::SetAffordance(Affordance::Grabbing { scaled: true })));
    }
}
