// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drive an eight-pane carousel through the gestures a user would make.
//!
//! The page owns the active index: it logs every slide start, stores every
//! completed index, and feeds it back into the carousel. Run with
//! `RUST_LOG=debug` to also see the state machine transitions.

use std::cell::Cell;
use std::rc::Rc;

use kurbo::Size;
use ui_events::keyboard::{Key, KeyState, KeyboardEvent, NamedKey};
use ui_events::pointer::{
    PointerButton, PointerButtonEvent, PointerEvent, PointerId, PointerInfo, PointerState,
    PointerType, PointerUpdate,
};
use understory_carousel::{Carousel, CarouselConfig, CarouselError};
use understory_carousel_demos::{HeadlessFrame, init_logging, pump_frames};

const PANES: [&str; 8] = [
    "nft01.png",
    "nft02.png",
    "nft03.png",
    "nft04.png",
    "nft05.png",
    "nft06.png",
    "nft07.png",
    "nft08.png",
];

fn arrow(key: NamedKey) -> KeyboardEvent {
    KeyboardEvent {
        key: Key::Named(key),
        state: KeyState::Down,
        ..KeyboardEvent::default()
    }
}

const MOUSE: PointerInfo = PointerInfo {
    pointer_id: Some(PointerId::PRIMARY),
    persistent_device_id: None,
    pointer_type: PointerType::Mouse,
};

fn mouse_at(x: f64, count: u8) -> PointerState {
    let mut state = PointerState {
        count,
        ..PointerState::default()
    };
    state.position.x = x;
    state
}

fn press(x: f64) -> PointerEvent {
    PointerEvent::Down(PointerButtonEvent {
        button: Some(PointerButton::Primary),
        pointer: MOUSE,
        state: mouse_at(x, 1),
    })
}

fn drag_to(x: f64) -> PointerEvent {
    PointerEvent::Move(PointerUpdate {
        pointer: MOUSE,
        current: mouse_at(x, 0),
        coalesced: Vec::new(),
        predicted: Vec::new(),
    })
}

fn release(x: f64) -> PointerEvent {
    PointerEvent::Up(PointerButtonEvent {
        button: Some(PointerButton::Primary),
        pointer: MOUSE,
        state: mouse_at(x, 1),
    })
}

fn main() -> Result<(), CarouselError> {
    init_logging();

    let index = Rc::new(Cell::new(0_usize));
    let completed = Rc::clone(&index);

    let config = CarouselConfig::new()
        .with_threshold(100.0)
        .with_transition_secs(0.3)?
        .with_scale_on_drag(true)
        .with_active_index(Some(index.get()));

    let mut carousel = Carousel::new(HeadlessFrame::new(Size::new(800.0, 450.0)), PANES, config)?
        .on_slide_start(|i| tracing::info!("started dragging on slide {i}"))
        .on_slide_complete(move |i| completed.set(i));
    carousel.mount();

    // Drag the mouse left across the first pane, rendering a frame per move.
    carousel.handle_pointer(&press(640.0), Some(index.get()));
    for x in [600.0, 540.0, 470.0, 420.0] {
        carousel.handle_pointer(&drag_to(x), None);
        pump_frames(&mut carousel);
    }
    carousel.handle_pointer(&release(420.0), None);
    pump_frames(&mut carousel);
    carousel.set_active_index(Some(index.get()));
    tracing::info!(index = index.get(), pane = ?carousel.current_item(), "after swipe");

    // A short touch swipe springs back.
    carousel.drag_start(1, 300.0);
    carousel.drag_move(340.0);
    pump_frames(&mut carousel);
    carousel.drag_end();
    carousel.set_active_index(Some(index.get()));

    // Arrow keys arrive from the window, through `ui-events`.
    carousel.handle_keyboard(&arrow(NamedKey::ArrowRight));
    carousel.handle_keyboard(&arrow(NamedKey::ArrowRight));
    carousel.set_active_index(Some(index.get()));
    tracing::info!(index = index.get(), pane = ?carousel.current_item(), "after arrows");

    // The window shrinks; the strip jumps without animating.
    carousel.host_mut().size = Size::new(600.0, 340.0);
    carousel.resize();

    // The page jumps straight to the last pane.
    index.set(PANES.len() - 1);
    carousel.set_active_index(Some(index.get()));
    carousel.handle_keyboard(&arrow(NamedKey::ArrowRight));

    let frame = carousel.host();
    tracing::info!(
        index = index.get(),
        transform = %frame.transform,
        cursor = frame.cursor,
        "done"
    );
    Ok(())
}
