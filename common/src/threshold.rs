//! Analog range and the sample-to-boolean decision rule.
//!
//! A raw sample is considered "high" when it is strictly greater than
//! `(high - low) / 2`. The formula is the half-width of the range, not the
//! midpoint between the bounds, so a non-zero `low` shifts the decision
//! point down rather than up. A sample exactly at the decision point reads
//! as low.

use crate::config::{DEFAULT_ANALOG_MAX, DEFAULT_ANALOG_MIN};

/// Lower and upper bound of the raw sample domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ThresholdRange {
    /// Lower bound of the sample domain.
    pub low: u16,
    /// Upper bound of the sample domain. Overwritten by calibration.
    pub high: u16,
}

impl ThresholdRange {
    /// Create a range from explicit bounds.
    ///
    /// Bounds are not validated: `high < low` yields a negative decision
    /// point, so every sample reads as high.
    pub const fn new(
        low: u16,
        high: u16,
    ) -> Self {
        Self { low, high }
    }

    /// Decision point that a sample has to exceed to read as high.
    #[inline]
    pub const fn decision_point(&self) -> i32 { (self.high as i32 - self.low as i32) / 2 }

    /// Threshold a raw sample into a boolean.
    #[inline]
    pub const fn is_high(
        &self,
        sample: u16,
    ) -> bool {
        sample as i32 > self.decision_point()
    }
}

impl Default for ThresholdRange {
    fn default() -> Self { Self::new(DEFAULT_ANALOG_MIN, DEFAULT_ANALOG_MAX) }
}
