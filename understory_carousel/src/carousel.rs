// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host driver: wire a [`CarouselState`] to a concrete frame element.
//!
//! [`Carousel`] owns the pane items, the state machine and the render loop,
//! and applies every [`Effect`] to a [`CarouselHost`]. The two gesture
//! callbacks are the only outbound channel; [`Carousel::set_active_index`] is
//! the only inbound one and never calls them.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Size;

use crate::config::CarouselConfig;
use crate::effect::{Affordance, Effect, Transition};
use crate::error::CarouselError;
use crate::frame::RenderLoop;
use crate::input::{ArrowKey, CarouselInput};
use crate::state::CarouselState;

/// The embedding UI layer: the visible frame element and its frame scheduler.
pub trait CarouselHost {
    /// Handle identifying a scheduled animation frame.
    type FrameHandle: Copy + PartialEq + fmt::Debug;

    /// Reads the rendered size of the frame element.
    fn measure(&self) -> Size;

    /// Writes the horizontal strip translation, in pixels.
    fn apply_offset(&mut self, offset: f64);

    /// Sets the transition used for subsequent translation writes.
    fn set_transition(&mut self, transition: Transition);

    /// Switches the cursor (and optional scale) affordance.
    fn set_affordance(&mut self, affordance: Affordance);

    /// Schedules one animation frame.
    ///
    /// When the frame fires the host calls [`Carousel::frame`] with the
    /// returned handle.
    fn request_frame(&mut self) -> Self::FrameHandle;

    /// Cancels a previously scheduled frame.
    fn cancel_frame(&mut self, handle: Self::FrameHandle);
}

type Callback = Box<dyn FnMut(usize)>;

/// A draggable, snapping strip of panes bound to a host.
pub struct Carousel<H: CarouselHost, T = ()> {
    host: H,
    items: Vec<T>,
    state: CarouselState,
    frames: RenderLoop<H::FrameHandle>,
    on_slide_start: Option<Callback>,
    on_slide_complete: Option<Callback>,
    /// Pointer that opened the current drag, when it came through the adapter.
    #[cfg(feature = "ui_events_adapter")]
    pub(crate) captured_pointer: Option<ui_events::pointer::PointerInfo>,
}

impl<H, T> fmt::Debug for Carousel<H, T>
where
    H: CarouselHost + fmt::Debug,
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Carousel")
            .field("host", &self.host)
            .field("items", &self.items)
            .field("state", &self.state)
            .field("frames", &self.frames)
            .field("on_slide_start", &self.on_slide_start.as_ref().map(|_| "<function>"))
            .field(
                "on_slide_complete",
                &self.on_slide_complete.as_ref().map(|_| "<function>"),
            )
            .finish()
    }
}

impl<H: CarouselHost, T> Carousel<H, T> {
    /// Builds a carousel over `items`, rendered through `host`.
    ///
    /// Fails when `items` is empty or the configuration is invalid. Nothing is
    /// positioned until [`Carousel::mount`] is called after the first layout.
    pub fn new(
        host: H,
        items: impl IntoIterator<Item = T>,
        config: CarouselConfig,
    ) -> Result<Self, CarouselError> {
        let items: Vec<T> = items.into_iter().collect();
        let state = CarouselState::new(items.len(), config).inspect_err(|err| {
            tracing::error!(%err, "carousel construction failed");
        })?;
        Ok(Self {
            host,
            items,
            state,
            frames: RenderLoop::new(),
            on_slide_start: None,
            on_slide_complete: None,
            #[cfg(feature = "ui_events_adapter")]
            captured_pointer: None,
        })
    }

    /// Sets the callback invoked when a user gesture starts.
    #[must_use]
    pub fn on_slide_start(mut self, callback: impl FnMut(usize) + 'static) -> Self {
        self.on_slide_start = Some(Box::new(callback));
        self
    }

    /// Sets the callback invoked when a user gesture settles.
    #[must_use]
    pub fn on_slide_complete(mut self, callback: impl FnMut(usize) + 'static) -> Self {
        self.on_slide_complete = Some(Box::new(callback));
        self
    }

    /// Measures the frame after the first layout and places the active pane.
    pub fn mount(&mut self) {
        let size = self.host.measure();
        self.dispatch(CarouselInput::Mount(size));
    }

    /// Re-measures the frame after a viewport resize.
    pub fn resize(&mut self) {
        let size = self.host.measure();
        self.dispatch(CarouselInput::Resize(size));
    }

    /// Pointer-down or touch-start on `pane` at pointer X `x`.
    pub fn drag_start(&mut self, pane: usize, x: f64) {
        self.dispatch(CarouselInput::DragStart { pane, x });
    }

    /// Pointer-move or touch-move at pointer X `x`.
    pub fn drag_move(&mut self, x: f64) {
        self.dispatch(CarouselInput::DragMove { x });
    }

    /// Pointer-up, pointer-leave or touch-end.
    pub fn drag_end(&mut self) {
        self.dispatch(CarouselInput::DragEnd);
    }

    /// Window-level arrow key press.
    pub fn key_down(&mut self, key: ArrowKey) {
        self.dispatch(CarouselInput::KeyDown(key));
    }

    /// Syncs the externally owned active index into the carousel.
    pub fn set_active_index(&mut self, index: Option<usize>) {
        self.dispatch(CarouselInput::ActiveIndex(index));
    }

    /// Runs the render loop for a fired frame.
    ///
    /// Frames that were cancelled or superseded are dropped.
    pub fn frame(&mut self, handle: H::FrameHandle) {
        if !self.frames.fire(handle) {
            tracing::trace!(?handle, "stray frame dropped");
            return;
        }
        self.dispatch(CarouselInput::Frame);
    }

    /// Feeds one input through the state machine and applies its effects.
    pub fn dispatch(&mut self, input: CarouselInput) {
        for effect in self.state.handle(input) {
            self.apply(effect);
        }
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::SetTransition(transition) => self.host.set_transition(transition),
            Effect::ApplyOffset(offset) => self.host.apply_offset(offset),
            Effect::SetAffordance(affordance) => self.host.set_affordance(affordance),
            Effect::RequestFrame => {
                if !self.frames.is_running() {
                    let handle = self.host.request_frame();
                    self.frames.schedule(handle);
                }
            }
            Effect::CancelFrame => {
                if let Some(handle) = self.frames.stop() {
                    self.host.cancel_frame(handle);
                }
            }
            Effect::SlideStart(index) => {
                if let Some(callback) = self.on_slide_start.as_mut() {
                    callback(index);
                }
            }
            Effect::SlideComplete(index) => {
                if let Some(callback) = self.on_slide_complete.as_mut() {
                    callback(index);
                }
            }
        }
    }

    /// The underlying state machine.
    #[must_use]
    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    /// The pane the carousel currently rests on.
    #[must_use]
    pub fn settled_index(&self) -> usize {
        self.state.settled_index()
    }

    /// Number of panes.
    #[must_use]
    pub fn pane_count(&self) -> usize {
        self.items.len()
    }

    /// Pane content in strip order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Content of the settled pane.
    #[must_use]
    pub fn current_item(&self) -> Option<&T> {
        self.items.get(self.state.settled_index())
    }

    /// Returns `true` while the render loop has a frame scheduled.
    #[must_use]
    pub fn is_rendering(&self) -> bool {
        self.frames.is_running()
    }

    /// The host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consumes the carousel, returning the host.
    pub fn into_host(self) -> H {
        self.host
    }
}
