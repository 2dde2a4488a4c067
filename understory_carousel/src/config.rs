// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel configuration.
//!
//! [`CarouselConfig`] carries the tunables a host passes when building a
//! carousel: the snap threshold, the animation duration used for committed
//! moves, the optional drag scale affordance, and the initial active index.
//!
//! ```
//! use core::time::Duration;
//! use understory_carousel::CarouselConfig;
//!
//! let config = CarouselConfig::new()
//!     .with_threshold(60.0)
//!     .with_transition(Duration::from_millis(250))
//!     .with_scale_on_drag(true)
//!     .with_active_index(Some(2));
//!
//! assert_eq!(config.threshold, 60.0);
//! assert_eq!(config.active_index, Some(2));
//! ```

use core::time::Duration;

use crate::CarouselError;

/// Pixel distance a drag must cover before it commits to the adjacent pane.
pub const DEFAULT_THRESHOLD: f64 = 100.0;

/// Animation duration applied to programmatic and committed moves.
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(300);

/// Tunables for a carousel instance.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarouselConfig {
    /// Snap threshold in pixels.
    pub threshold: f64,
    /// Duration of the transform transition for committed moves.
    pub transition: Duration,
    /// Whether panes scale down while a drag is in progress.
    pub scale_on_drag: bool,
    /// Externally owned active index at construction time.
    ///
    /// `None` leaves the carousel uncontrolled, starting at pane 0.
    pub active_index: Option<usize>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            transition: DEFAULT_TRANSITION,
            scale_on_drag: false,
            active_index: None,
        }
    }
}

impl CarouselConfig {
    /// Creates a configuration with the default tunables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the snap threshold in pixels.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Sets the committed-move transition duration.
    #[must_use]
    pub fn with_transition(mut self, transition: Duration) -> Self {
        self.transition = transition;
        self
    }

    /// Sets the committed-move transition duration from seconds.
    ///
    /// Negative or non-finite values are rejected, since a transition duration
    /// of that kind has no meaning for the host.
    pub fn with_transition_secs(mut self, secs: f64) -> Result<Self, CarouselError> {
        self.transition =
            Duration::try_from_secs_f64(secs).map_err(|_| CarouselError::InvalidTransition(secs))?;
        Ok(self)
    }

    /// Enables or disables the drag scale affordance.
    #[must_use]
    pub fn with_scale_on_drag(mut self, scale_on_drag: bool) -> Self {
        self.scale_on_drag = scale_on_drag;
        self
    }

    /// Sets the initial externally owned active index.
    #[must_use]
    pub fn with_active_index(mut self, active_index: Option<usize>) -> Self {
        self.active_index = active_index;
        self
    }

    /// Checks the tunables that cannot be sanitized by clamping.
    pub fn validate(&self) -> Result<(), CarouselError> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(CarouselError::InvalidThreshold(self.threshold));
        }
        Ok(())
    }
}
