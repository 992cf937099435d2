//! Debounce, polling and reporting parameters.
//!
//! All values are compile-time constants with validation assertions. The
//! debounce algorithm is chosen with the `lockout` cargo feature.

use bounce_common::{DebounceStrategy, FilterConfig, ThresholdRange};

// =============================================================================
// ADC Range
// =============================================================================

/// Lowest raw ADC reading (12-bit SAR ADC).
pub const ADC_MIN: u16 = 0;

/// Highest raw ADC reading before calibration.
pub const ADC_MAX: u16 = 4095;

const _: () = assert!(ADC_MIN < ADC_MAX);

// =============================================================================
// Debounce Timing
// =============================================================================

/// Main loop period. The filter is polled once per tick.
pub const POLL_PERIOD_MS: u64 = 1;

/// Minimum stable duration before a threshold crossing is reported.
pub const DEBOUNCE_INTERVAL_MS: u32 = 20;

/// Debounce for the calibrate button (simple time-based edge detection).
pub const BUTTON_DEBOUNCE_MS: u32 = 50;

// The filter needs several polls per interval to time stability meaningfully
const _: () = assert!(POLL_PERIOD_MS * 4 <= DEBOUNCE_INTERVAL_MS as u64);

/// Debounce algorithm for the sensor filter.
#[cfg(feature = "lockout")]
pub const STRATEGY: DebounceStrategy = DebounceStrategy::Lockout;

/// Debounce algorithm for the sensor filter.
#[cfg(not(feature = "lockout"))]
pub const STRATEGY: DebounceStrategy = DebounceStrategy::StabilityTimeout;

/// Filter configuration used by the firmware.
pub const fn filter_config() -> FilterConfig {
    FilterConfig::new()
        .with_threshold(ThresholdRange::new(ADC_MIN, ADC_MAX))
        .with_interval_ms(DEBOUNCE_INTERVAL_MS)
        .with_strategy(STRATEGY)
}

// =============================================================================
// Reporting
// =============================================================================

/// How often the statistics summary is logged.
pub const STATS_REPORT_PERIOD_MS: u32 = 5_000;

/// Number of recent edges kept for the summary.
pub const EDGE_LOG_SIZE: usize = 8;

const _: () = assert!(STATS_REPORT_PERIOD_MS > DEBOUNCE_INTERVAL_MS);
const _: () = assert!(EDGE_LOG_SIZE > 0);
