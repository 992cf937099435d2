//! Default filter configuration.
//!
//! All defaults are compile-time constants with validation assertions, and
//! [`FilterConfig`] bundles them into a value passed to
//! [`DebounceFilter::new`](crate::DebounceFilter::new).
//!
//! # Usage
//!
//! ```ignore
//! use bounce_common::{DebounceStrategy, FilterConfig, ThresholdRange};
//!
//! const CONFIG: FilterConfig = FilterConfig::new()
//!     .with_interval_ms(25)
//!     .with_threshold(ThresholdRange::new(0, 4095))
//!     .with_strategy(DebounceStrategy::Lockout);
//! ```

use crate::strategy::DebounceStrategy;
use crate::threshold::ThresholdRange;

// =============================================================================
// Defaults
// =============================================================================

/// Default minimum stable duration before a new value is accepted.
pub const DEFAULT_INTERVAL_MS: u32 = 10;

/// Default lower bound of the sample domain (10-bit ADC).
pub const DEFAULT_ANALOG_MIN: u16 = 0;

/// Default upper bound of the sample domain (10-bit ADC).
pub const DEFAULT_ANALOG_MAX: u16 = 1023;

const _: () = assert!(DEFAULT_ANALOG_MIN < DEFAULT_ANALOG_MAX);
const _: () = assert!(DEFAULT_INTERVAL_MS > 0);

// =============================================================================
// Filter Configuration
// =============================================================================

/// Construction-time configuration of a [`DebounceFilter`](crate::DebounceFilter).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FilterConfig {
    /// Sample domain used for thresholding.
    pub threshold: ThresholdRange,
    /// Minimum stable duration in milliseconds.
    pub interval_ms: u32,
    /// Debounce algorithm.
    pub strategy: DebounceStrategy,
}

impl FilterConfig {
    /// Configuration with all defaults (0..1023, 10 ms, stability-timeout).
    pub const fn new() -> Self {
        Self {
            threshold: ThresholdRange::new(DEFAULT_ANALOG_MIN, DEFAULT_ANALOG_MAX),
            interval_ms: DEFAULT_INTERVAL_MS,
            strategy: DebounceStrategy::StabilityTimeout,
        }
    }

    /// Set the debounce interval.
    #[must_use]
    pub const fn with_interval_ms(
        mut self,
        interval_ms: u32,
    ) -> Self {
        self.interval_ms = interval_ms;
        self
    }

    /// Set the sample domain.
    #[must_use]
    pub const fn with_threshold(
        mut self,
        threshold: ThresholdRange,
    ) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the debounce algorithm.
    #[must_use]
    pub const fn with_strategy(
        mut self,
        strategy: DebounceStrategy,
    ) -> Self {
        self.strategy = strategy;
        self
    }
}

impl Default for FilterConfig {
    fn default() -> Self { Self::new() }
}
