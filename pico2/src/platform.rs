//! RP2350 implementations of the filter's platform traits.
//!
//! - [`RpAnalogInput`]: blocking reads from the on-chip SAR ADC
//! - [`EmbassyClock`]: milliseconds from the embassy time driver

use bounce_common::{AnalogInput, MillisClock};
use defmt::{Debug2Format, info, warn};
use embassy_rp::Blocking;
use embassy_rp::adc::{Adc, Channel};
use embassy_rp::gpio::Pull;
use embassy_time::Instant;

/// ADC channels addressed by their index in the channel table.
pub struct RpAnalogInput<'d, const N: usize> {
    adc: Adc<'d, Blocking>,
    channels: [Channel<'d>; N],
    last_good: [u16; N],
}

impl<'d, const N: usize> RpAnalogInput<'d, N> {
    pub fn new(
        adc: Adc<'d, Blocking>,
        channels: [Channel<'d>; N],
    ) -> Self {
        Self {
            adc,
            channels,
            last_good: [0; N],
        }
    }
}

impl<const N: usize> AnalogInput for RpAnalogInput<'_, N> {
    type Mode = Pull;
    type Pin = usize;

    /// Blocking conversion. A failed conversion returns the last good sample
    /// for that channel; an unknown channel reads as 0.
    fn sample(
        &mut self,
        pin: usize,
    ) -> u16 {
        let Some(channel) = self.channels.get_mut(pin) else {
            warn!("ADC channel {} out of range", pin);
            return 0;
        };

        match self.adc.blocking_read(channel) {
            Ok(value) => {
                self.last_good[pin] = value;
                value
            }
            Err(e) => {
                warn!("ADC read failed on channel {}: {}", pin, Debug2Format(&e));
                self.last_good[pin]
            }
        }
    }

    /// Ignores `mode` apart from logging it. embassy-rp fixes the pull when an
    /// ADC channel is created, so the mode requested here must match what
    /// `main` passed to `Channel::new_pin`.
    fn configure(
        &mut self,
        pin: usize,
        mode: Pull,
    ) {
        info!("ADC channel {} mode {}", pin, Debug2Format(&mode));
    }
}

/// Millisecond clock backed by `embassy_time::Instant`.
///
/// Truncating to `u32` wraps after ~49.7 days, which the filter handles.
#[derive(Clone, Copy, Default)]
pub struct EmbassyClock;

impl MillisClock for EmbassyClock {
    #[inline]
    fn now_ms(&self) -> u32 { Instant::now().as_millis() as u32 }
}
