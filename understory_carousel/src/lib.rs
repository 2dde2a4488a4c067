// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_carousel --heading-base-level=0

//! Understory Carousel: a drag/snap state machine for paged carousels.
//!
//! A carousel here is a horizontal strip of panes, each exactly one frame
//! wide. The user pulls the strip with a mouse or finger, or steps it with the
//! arrow keys; when a drag ends the strip snaps to the nearest sensible pane.
//! An embedding application can also set the active pane from outside.
//!
//! This crate does not draw anything. It is split into:
//!
//! - [`CarouselState`]: a reducer that owns the drag session, the strip
//!   offsets and the settled index. [`CarouselState::handle`] folds one
//!   [`CarouselInput`] into the state and returns the [`Effect`]s the host
//!   must apply.
//! - [`Carousel`]: a driver that owns the pane items, applies effects to a
//!   [`CarouselHost`] (the frame element and its frame scheduler), runs the
//!   per-frame render loop while dragging, and invokes the gesture callbacks.
//! - [`adapter`]: optional translation from `ui-events` pointer and keyboard
//!   events (feature `ui_events_adapter`).
//!
//! ## Behavior
//!
//! - While idle, the strip offset is always `-settled_index * frame_width`.
//! - During a drag the offset follows the raw pointer delta, without clamping
//!   or resistance, and is pushed to the host once per animation frame.
//! - When the drag ends, a move further than the snap threshold commits to the
//!   adjacent pane if one exists; otherwise the strip springs back.
//! - The index never leaves `0..pane_count`; stepping past either end is a
//!   silent no-op.
//! - External index changes reposition the strip but never invoke the gesture
//!   callbacks, so a host may feed the completed index straight back in.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use understory_carousel::{
//!     Affordance, Carousel, CarouselConfig, CarouselHost, Transition,
//! };
//!
//! #[derive(Default)]
//! struct Frame {
//!     offset: f64,
//! }
//!
//! impl CarouselHost for Frame {
//!     type FrameHandle = u32;
//!
//!     fn measure(&self) -> Size {
//!         Size::new(400.0, 300.0)
//!     }
//!     fn apply_offset(&mut self, offset: f64) {
//!         self.offset = offset;
//!     }
//!     fn set_transition(&mut self, _: Transition) {}
//!     fn set_affordance(&mut self, _: Affordance) {}
//!     fn request_frame(&mut self) -> u32 {
//!         1
//!     }
//!     fn cancel_frame(&mut self, _: u32) {}
//! }
//!
//! let mut carousel = Carousel::new(
//!     Frame::default(),
//!     ["a.png", "b.png", "c.png"],
//!     CarouselConfig::default(),
//! )
//! .unwrap()
//! .on_slide_complete(|index| println!("settled on {index}"));
//!
//! carousel.mount();
//! carousel.drag_start(0, 350.0);
//! carousel.drag_move(120.0);
//! carousel.drag_end();
//!
//! assert_eq!(carousel.settled_index(), 1);
//! assert_eq!(carousel.host().offset, -400.0);
//! assert_eq!(carousel.current_item(), Some(&"b.png"));
//! ```
//!
//! ## Features
//!
//! - `std` (default): forward `std` to dependencies.
//! - `ui_events_adapter` (default): enable the [`adapter`] module.
//! - `serde`: derive `Serialize`/`Deserialize` for [`CarouselConfig`].
//! - `libm`: use `libm` for Kurbo float math in `no_std` builds.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

#[cfg(feature = "ui_events_adapter")]
pub mod adapter;
mod carousel;
mod config;
pub mod drag;
mod effect;
mod error;
pub mod frame;
pub mod geometry;
mod input;
pub mod snap;
mod state;

pub use carousel::{Carousel, CarouselHost};
pub use config::{CarouselConfig, DEFAULT_THRESHOLD, DEFAULT_TRANSITION};
pub use effect::{Affordance, Effect, Effects, Transition};
pub use error::CarouselError;
pub use input::{ArrowKey, CarouselInput};
pub use state::CarouselState;
