//! Firmware library - testable modules for the Pico 2 debounce firmware.
//!
//! This library contains the logic that can be tested on the host machine.
//! The binary (`main.rs`) uses this library and adds the embedded-specific code
//! (ADC adapter, embassy clock, RTT logging).
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test -p bounce-pico2 --lib --target x86_64-unknown-linux-gnu  # Linux/macOS
//! cargo test -p bounce-pico2 --lib --target x86_64-pc-windows-msvc    # Windows
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the actual firmware runs as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]

// === Pure logic modules (testable on host, no ARM dependencies) ===

// Configuration
pub mod config;

// Input handling
pub mod button;

// Reporting
pub mod stats;

pub use button::ButtonState;
pub use stats::TransitionStats;
