// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame geometry tracking.
//!
//! The visible frame is one pane wide. Its width is what turns a pane index
//! into a strip offset, so the tracker is fed a fresh measurement once after
//! the first layout and again on every viewport resize.
//!
//! Until the first measurement arrives the frame is treated as zero-sized, so
//! every offset computed before mount is `0.0`.

use kurbo::Size;

/// Last measured size of the visible frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GeometryTracker {
    size: Option<Size>,
}

impl GeometryTracker {
    /// Creates an unmeasured tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new measurement of the frame.
    ///
    /// Negative or non-finite extents are clamped to zero. Returns the
    /// sanitized size that was stored.
    pub fn measure(&mut self, size: Size) -> Size {
        let size = Size::new(sanitize_extent(size.width), sanitize_extent(size.height));
        self.size = Some(size);
        size
    }

    /// Returns `true` once at least one measurement has been recorded.
    #[must_use]
    pub fn is_measured(&self) -> bool {
        self.size.is_some()
    }

    /// Returns the measured size, or [`Size::ZERO`] before the first measurement.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size.unwrap_or(Size::ZERO)
    }

    /// Width of one pane in pixels.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.size().width
    }

    /// Height of the frame in pixels.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.size().height
    }

    /// Strip offset that aligns pane `index` with the frame.
    #[must_use]
    pub fn offset_for(&self, index: usize) -> f64 {
        offset_for(index, self.width())
    }
}

/// Strip offset for pane `index` with panes `width` pixels wide.
#[must_use]
pub fn offset_for(index: usize, width: f64) -> f64 {
    -(index as f64) * width
}

fn sanitize_extent(extent: f64) -> f64 {
    if extent.is_finite() && extent > 0.0 {
        extent
    } else {
        0.0
    }
}
