// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless host helpers for the carousel demos.
//!
//! [`HeadlessFrame`] stands in for a DOM or widget frame element: it keeps the
//! style values a browser would see (`transform`, `transition`, `cursor`) and
//! queues animation frames until the demo pumps them.

use kurbo::Size;
use understory_carousel::{Affordance, Carousel, CarouselHost, Transition};

/// A frame element that only records what would be rendered.
#[derive(Debug)]
pub struct HeadlessFrame {
    /// Size reported to the carousel when it measures.
    pub size: Size,
    /// Last `transform` style value.
    pub transform: String,
    /// Last `transition` style value.
    pub transition: String,
    /// Last `cursor` style value.
    pub cursor: &'static str,
    /// Whether panes are drawn scaled down.
    pub scaled: bool,
    next_frame: u64,
    queued: Vec<u64>,
}

impl HeadlessFrame {
    /// Creates a frame of the given size.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            transform: String::from("translateX(0px)"),
            transition: Transition::Instant.to_string(),
            cursor: Affordance::Resting.cursor(),
            scaled: false,
            next_frame: 0,
            queued: Vec::new(),
        }
    }

    /// Returns the frames that are due, oldest first.
    pub fn take_due_frames(&mut self) -> Vec<u64> {
        std::mem::take(&mut self.queued)
    }
}

impl CarouselHost for HeadlessFrame {
    type FrameHandle = u64;

    fn measure(&self) -> Size {
        self.size
    }

    fn apply_offset(&mut self, offset: f64) {
        self.transform = format!("translateX({offset}px)");
        tracing::info!(transform = %self.transform, transition = %self.transition, "style");
    }

    fn set_transition(&mut self, transition: Transition) {
        self.transition = transition.to_string();
    }

    fn set_affordance(&mut self, affordance: Affordance) {
        self.cursor = affordance.cursor();
        self.scaled = matches!(affordance, Affordance::Grabbing { scaled: true });
    }

    fn request_frame(&mut self) -> u64 {
        self.next_frame += 1;
        self.queued.push(self.next_frame);
        self.next_frame
    }

    fn cancel_frame(&mut self, handle: u64) {
        self.queued.retain(|&queued| queued != handle);
    }
}

/// Runs every due animation frame once, as a browser would on the next tick.
pub fn pump_frames<T>(carousel: &mut Carousel<HeadlessFrame, T>) {
    for handle in carousel.host_mut().take_due_frames() {
        carousel.frame(handle);
    }
}

/// Installs a `tracing` subscriber honoring `RUST_LOG`, defaulting to `info`.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}
