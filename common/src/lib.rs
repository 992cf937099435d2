//! Debounce filter for a boolean derived from an analog input.
//!
//! This crate contains the platform-agnostic core shared between the Pico 2
//! firmware and the desktop simulator:
//!
//! - [`filter`]: The [`DebounceFilter`] state machine (attach, poll, queries)
//! - [`strategy`]: Lockout vs. stability-timeout algorithm selection
//! - [`threshold`]: Analog range and the sample-to-boolean decision rule
//! - [`platform`]: Traits for the analog input and millisecond clock
//! - [`config`]: Default values and the [`FilterConfig`] builder
//! - [`edge`]: Edge type and a fixed-capacity history of accepted transitions
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` and allocation-free. Tests run on the host with
//! `std` enabled via `cfg_attr`.
//!
//! # Example
//!
//! ```ignore
//! use bounce_common::{DebounceFilter, FilterConfig};
//!
//! let mut filter = DebounceFilter::new(adc, clock, FilterConfig::new().with_interval_ms(20));
//! filter.attach(SENSOR_PIN);
//! loop {
//!     if filter.poll() && filter.rose() {
//!         // threshold crossed upwards and stayed there for 20 ms
//!     }
//! }
//! ```

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod edge;
pub mod filter;
pub mod platform;
pub mod strategy;
pub mod threshold;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used items
pub use config::FilterConfig;
pub use edge::{Edge, EdgeLog, EdgeRecord};
pub use filter::DebounceFilter;
pub use platform::{AnalogInput, MillisClock};
pub use strategy::DebounceStrategy;
pub use threshold::ThresholdRange;
