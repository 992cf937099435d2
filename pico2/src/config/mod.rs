//! Application configuration.
//!
//! - `pins`: GPIO/ADC pin assignment on the Pico 2
//! - `tuning`: Debounce, polling and reporting parameters

pub mod pins;
pub mod tuning;

// Re-export pin numbers at config level for convenience
pub use pins::{CALIBRATE_BUTTON_GPIO, LED_GPIO, SENSOR_ADC_CHANNEL, SENSOR_GPIO};
// Re-export tuning values at config level for convenience
pub use tuning::{
    ADC_MAX,
    ADC_MIN,
    BUTTON_DEBOUNCE_MS,
    DEBOUNCE_INTERVAL_MS,
    EDGE_LOG_SIZE,
    POLL_PERIOD_MS,
    STATS_REPORT_PERIOD_MS,
    STRATEGY,
    filter_config,
};
