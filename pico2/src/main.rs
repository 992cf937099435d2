//! Debounced analog threshold input for Raspberry Pi Pico 2 (RP2350)
//!
//! Reads an analog sensor on GPIO26/ADC0, thresholds it at half the ADC range
//! and debounces the result with [`bounce_common::DebounceFilter`].
//!
//! # Behaviour
//!
//! - **LED (GPIO25)**: mirrors the debounced value
//! - **Button (GPIO15)**: calibrate, stores the current reading as the new
//!   upper bound of the range (hold the sensor at its maximum and press)
//! - **RTT log**: every accepted edge, plus a statistics summary every
//!   `STATS_REPORT_PERIOD_MS`
//!
//! The debounce algorithm is stability-timeout unless built with
//! `--features lockout`.
//!
//! Host builds compile an empty `main` so the package links during
//! `cargo test`; all firmware code is ARM-only.

#![cfg_attr(target_arch = "arm", no_std)]
#![cfg_attr(target_arch = "arm", no_main)]
// Crate-level lints (match lib.rs for consistency)
#![allow(clippy::cast_possible_truncation)]

// Modules only used in the binary (not testable on host)
#[cfg(target_arch = "arm")]
mod platform;

#[cfg(target_arch = "arm")]
use {
    bounce_common::{DebounceFilter, MillisClock},
    bounce_pico2::config::{
        CALIBRATE_BUTTON_GPIO,
        DEBOUNCE_INTERVAL_MS,
        LED_GPIO,
        POLL_PERIOD_MS,
        SENSOR_ADC_CHANNEL,
        SENSOR_GPIO,
        STRATEGY,
        filter_config,
    },
    bounce_pico2::{ButtonState, TransitionStats},
    defmt::{debug, info},
    defmt_rtt as _,
    embassy_executor::Spawner,
    embassy_rp::adc::{Adc, Channel as AdcChannel, Config as AdcConfig},
    embassy_rp::gpio::{Input, Level, Output, Pull},
    embassy_time::{Duration, Ticker},
    panic_probe as _,
    platform::{EmbassyClock, RpAnalogInput},
};

// Program metadata for `picotool info`
#[cfg(target_arch = "arm")]
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"pico2-analog-bounce"),
    embassy_rp::binary_info::rp_program_description!(c"Debounced analog threshold input"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

/// LED level for a debounced value.
#[cfg(target_arch = "arm")]
#[inline]
const fn led_level(on: bool) -> Level { if on { Level::High } else { Level::Low } }

/// Log the periodic statistics summary.
#[cfg(target_arch = "arm")]
fn log_summary(stats: &TransitionStats) {
    info!(
        "Stats: {} edges ({} rises, {} falls), {} polls this period",
        stats.total_edges(),
        stats.rises,
        stats.falls,
        stats.polls_since_report
    );

    if let Some(spacing) = stats.recent.min_spacing_ms() {
        debug!("Closest recent edges: {} ms apart", spacing);
    }
    for record in stats.recent.iter() {
        debug!("  {} at {} ms", record.edge, record.timestamp_ms);
    }
}

#[cfg(target_arch = "arm")]
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Analog debounce firmware starting...");

    let p = embassy_rp::init(Default::default());

    // Sensor on ADC0; no pull so the divider sets the level
    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let sensor = AdcChannel::new_pin(p.PIN_26, Pull::None);
    let input = RpAnalogInput::new(adc, [sensor]);

    let clock = EmbassyClock;
    let mut filter = DebounceFilter::new(input, clock, filter_config());
    filter.attach_with_mode(SENSOR_ADC_CHANNEL, Pull::None);
    info!(
        "Sensor on GPIO{} attached: level={} strategy={} interval={} ms",
        SENSOR_GPIO,
        filter.read(),
        STRATEGY,
        DEBOUNCE_INTERVAL_MS
    );

    // Calibrate button (active-low with internal pull-up)
    let calibrate_btn = Input::new(p.PIN_15, Pull::Up);
    let mut calibrate_state = ButtonState::new();
    info!("Calibrate button on GPIO{}", CALIBRATE_BUTTON_GPIO);

    let mut led = Output::new(p.PIN_25, led_level(filter.read()));
    info!("Status LED on GPIO{}", LED_GPIO);

    let mut stats = TransitionStats::new(clock.now_ms());
    let mut ticker = Ticker::every(Duration::from_millis(POLL_PERIOD_MS));

    loop {
        let now = clock.now_ms();

        if calibrate_state.just_pressed(calibrate_btn.is_low(), now) {
            filter.calibrate_high_bound();
            let threshold = filter.threshold();
            info!(
                "Calibrated: high={} decision point={}",
                threshold.high,
                threshold.decision_point()
            );
        }

        let changed = filter.poll();
        stats.record_poll(filter.edge(), filter.last_transition_ms());

        if changed {
            led.set_level(led_level(filter.read()));
            if filter.rose() {
                info!("Rose at {} ms", filter.last_transition_ms());
            } else {
                info!("Fell at {} ms", filter.last_transition_ms());
            }
        }

        if stats.report_due(now) {
            log_summary(&stats);
            stats.finish_report();
        }

        ticker.next().await;
    }
}

/// Host placeholder; the firmware entry point only exists on ARM.
#[cfg(not(target_arch = "arm"))]
fn main() {}
