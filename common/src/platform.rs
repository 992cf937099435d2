//! Platform primitives the filter calls into.
//!
//! The filter never touches hardware directly. Firmware provides an ADC-backed
//! [`AnalogInput`] and a timer-backed [`MillisClock`]; tests and the simulator
//! provide synthetic ones.

/// Source of raw analog samples, addressed by pin.
pub trait AnalogInput {
    /// Opaque pin handle. `Default` is the pin used before attachment.
    type Pin: Copy + Default;

    /// Pin direction/mode accepted by [`configure`](Self::configure).
    type Mode;

    /// Take one instantaneous sample.
    ///
    /// Failures are the implementation's concern: whatever value is returned
    /// is treated as a valid reading.
    fn sample(
        &mut self,
        pin: Self::Pin,
    ) -> u16;

    /// Configure pin direction/mode before the first sample.
    fn configure(
        &mut self,
        pin: Self::Pin,
        mode: Self::Mode,
    );
}

/// Monotonically non-decreasing millisecond clock.
///
/// The counter is allowed to wrap; elapsed time is computed with wrapping
/// subtraction.
pub trait MillisClock {
    /// Current time in milliseconds.
    fn now_ms(&self) -> u32;
}

impl<T: MillisClock + ?Sized> MillisClock for &T {
    #[inline]
    fn now_ms(&self) -> u32 { (**self).now_ms() }
}
