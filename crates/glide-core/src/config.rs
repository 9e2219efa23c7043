#![forbid(unsafe_code)]

//! Behavioral configuration for a slider.
//!
//! All fields are fixed at construction except `disabled`, which the host
//! may toggle at any time (it is an input, not owned state). Out-of-range
//! values are clamped, never rejected.

use std::time::Duration;

/// Default transition duration.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(300);

/// Behavioral configuration for a slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderConfig {
    /// Number of panes (at least 1).
    pub count: usize,

    /// Initially active pane (clamped into range by [`normalized`]).
    ///
    /// [`normalized`]: SliderConfig::normalized
    pub index: usize,

    /// Animated transition duration.
    pub duration: Duration,

    /// Follow the pointer visually during the drag.
    pub sticky: bool,

    /// A completed gesture always pages one pane in its direction.
    pub swipe: bool,

    /// Ignore all gesture input.
    pub disabled: bool,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            count: 1,
            index: 0,
            duration: DEFAULT_DURATION,
            sticky: true,
            swipe: true,
            disabled: false,
        }
    }
}

impl SliderConfig {
    /// Default configuration: one pane, 300 ms transitions, sticky swipe.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pane count (builder pattern).
    #[must_use]
    pub const fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Set the initial pane index (builder pattern).
    #[must_use]
    pub const fn with_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    /// Set the transition duration (builder pattern).
    #[must_use]
    pub const fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set sticky drag-follow (builder pattern).
    #[must_use]
    pub const fn sticky(mut self, sticky: bool) -> Self {
        self.sticky = sticky;
        self
    }

    /// Set swipe paging (builder pattern).
    #[must_use]
    pub const fn swipe(mut self, swipe: bool) -> Self {
        self.swipe = swipe;
        self
    }

    /// Set the disabled input (builder pattern).
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Clamp interdependent fields into their valid ranges.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.count = self.count.max(1);
        self.index = self.index.min(self.count - 1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SliderConfig::default();
        assert_eq!(config.count, 1);
        assert_eq!(config.index, 0);
        assert_eq!(config.duration, Duration::from_millis(300));
        assert!(config.sticky);
        assert!(config.swipe);
        assert!(!config.disabled);
    }

    #[test]
    fn normalized_clamps_count_to_one() {
        let config = SliderConfig::new().with_count(0).normalized();
        assert_eq!(config.count, 1);
    }

    #[test]
    fn normalized_clamps_index_into_range() {
        let config = SliderConfig::new().with_count(3).with_index(9).normalized();
        assert_eq!(config.index, 2);
    }

    #[test]
    fn builder_chain() {
        let config = SliderConfig::new()
            .with_count(4)
            .with_index(1)
            .with_duration(Duration::from_millis(150))
            .sticky(false)
            .swipe(false)
            .disabled(true)
            .normalized();
        assert_eq!(config.count, 4);
        assert_eq!(config.index, 1);
        assert_eq!(config.duration, Duration::from_millis(150));
        assert!(!config.sticky);
        assert!(!config.swipe);
        assert!(config.disabled);
    }
}
