// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Translate [`ui_events`] pointer and keyboard events into carousel inputs.
//!
//! Mouse, pen and touch all arrive as [`PointerEvent`]s, so one mapping
//! covers every drag source. Which pane a pointer-down landed on is a hit-test
//! concern of the host and is passed in alongside the event.
//!
//! [`Carousel::handle_pointer`] captures the pointer that opened a drag; events
//! from any other pointer are ignored until that drag ends.

use ui_events::keyboard::{Key, KeyboardEvent, NamedKey};
use ui_events::pointer::{
    PointerButtonEvent, PointerEvent, PointerGestureEvent, PointerInfo, PointerScrollEvent,
    PointerUpdate,
};

use crate::carousel::{Carousel, CarouselHost};
use crate::input::{ArrowKey, CarouselInput};

/// Maps a pointer event to a carousel input.
///
/// `pane` is the pane under the pointer; a pointer-down that hit no pane does
/// not start a drag. Leaving the frame or cancelling the pointer ends the drag
/// just like releasing it.
#[must_use]
pub fn pointer_input(event: &PointerEvent, pane: Option<usize>) -> Option<CarouselInput> {
    match event {
        PointerEvent::Down(e) => pane.map(|pane| CarouselInput::DragStart {
            pane,
            x: e.state.logical_point().x,
        }),
        PointerEvent::Move(e) => Some(CarouselInput::DragMove {
            x: e.current.logical_point().x,
        }),
        PointerEvent::Up(_) | PointerEvent::Cancel(_) | PointerEvent::Leave(_) => {
            Some(CarouselInput::DragEnd)
        }
        _ => None,
    }
}

/// Maps a key-down of `ArrowLeft`/`ArrowRight` to a carousel input.
#[must_use]
pub fn keyboard_input(event: &KeyboardEvent) -> Option<CarouselInput> {
    if !event.state.is_down() {
        return None;
    }
    arrow_key(&event.key).map(CarouselInput::KeyDown)
}

fn pointer_info(event: &PointerEvent) -> PointerInfo {
    match event {
        PointerEvent::Down(PointerButtonEvent { pointer, .. })
        | PointerEvent::Up(PointerButtonEvent { pointer, .. })
        | PointerEvent::Move(PointerUpdate { pointer, .. })
        | PointerEvent::Cancel(pointer)
        | PointerEvent::Enter(pointer)
        | PointerEvent::Leave(pointer)
        | PointerEvent::Scroll(PointerScrollEvent { pointer, .. })
        | PointerEvent::Gesture(PointerGestureEvent { pointer, .. }) => *pointer,
    }
}

fn arrow_key(key: &Key) -> Option<ArrowKey> {
    match key {
        Key::Named(NamedKey::ArrowLeft) => Some(ArrowKey::Left),
        Key::Named(NamedKey::ArrowRight) => Some(ArrowKey::Right),
        _ => None,
    }
}

impl<H: CarouselHost, T> Carousel<H, T> {
    /// Processes a pointer event over the frame.
    ///
    /// Returns `true` if the event mapped to a carousel input. While a drag
    /// opened here is in progress, events from other pointers return `false`.
    pub fn handle_pointer(&mut self, event: &PointerEvent, pane: Option<usize>) -> bool {
        let was_dragging = self.state().is_dragging();
        if !was_dragging {
            self.captured_pointer = None;
        }
        let pointer = pointer_info(event);
        if self
            .captured_pointer
            .is_some_and(|captured| captured.pointer_id != pointer.pointer_id)
        {
            tracing::trace!(?pointer.pointer_id, "event from uncaptured pointer ignored");
            return false;
        }
        let Some(input) = pointer_input(event, pane) else {
            return false;
        };
        self.dispatch(input);
        self.captured_pointer = match (was_dragging, self.state().is_dragging()) {
            (false, true) => Some(pointer),
            (_, false) => None,
            (true, true) => self.captured_pointer,
        };
        true
    }

    /// Processes a window-level keyboard event.
    ///
    /// Returns `true` if the event mapped to a carousel input.
    pub fn handle_keyboard(&mut self, event: &KeyboardEvent) -> bool {
        let Some(input) = keyboard_input(event) else {
            return false;
        };
        self.dispatch(input);
        true
    }
}
