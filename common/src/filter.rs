//! The debounce state machine.
//!
//! A [`DebounceFilter`] thresholds one analog pin into a boolean and only
//! reports a new value once it has settled. It is driven by repeated calls to
//! [`poll`](DebounceFilter::poll) from a single control loop, several times
//! per debounce interval.
//!
//! # State
//!
//! Three flags are tracked per filter:
//!
//! - `debounced`: the accepted, stable output returned by `read()`
//! - `unstable`: the latest raw reading (stability-timeout only)
//! - `changed`: set by the poll that flipped `debounced`, cleared by the next
//!
//! `debounced` is only ever modified by `poll()`. Configuration calls and
//! calibration never touch the flags; `attach()` reseeds all of them.
//!
//! # Timing
//!
//! All elapsed-time math uses wrapping `u32` subtraction, so a millisecond
//! counter rolling over does not stall or trigger the filter.

use crate::config::FilterConfig;
use crate::edge::Edge;
use crate::platform::{AnalogInput, MillisClock};
use crate::strategy::DebounceStrategy;
use crate::threshold::ThresholdRange;

/// Per-filter state flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct StateFlags {
    debounced: bool,
    unstable: bool,
    changed: bool,
}

impl StateFlags {
    /// Settled state: raw and debounced agree, nothing changed yet.
    const fn settled(level: bool) -> Self {
        Self {
            debounced: level,
            unstable: level,
            changed: false,
        }
    }
}

/// Debounce filter over one thresholded analog input.
pub struct DebounceFilter<I: AnalogInput, C: MillisClock> {
    input: I,
    clock: C,
    pin: I::Pin,
    threshold: ThresholdRange,
    interval_ms: u32,
    strategy: DebounceStrategy,
    last_transition_ms: u32,
    flags: StateFlags,
}

impl<I: AnalogInput, C: MillisClock> DebounceFilter<I, C> {
    /// Create an unattached filter.
    ///
    /// Until [`attach`](Self::attach) is called the filter samples the
    /// default pin and reports `false`.
    pub fn new(
        input: I,
        clock: C,
        config: FilterConfig,
    ) -> Self {
        Self {
            input,
            clock,
            pin: I::Pin::default(),
            threshold: config.threshold,
            interval_ms: config.interval_ms,
            strategy: config.strategy,
            last_transition_ms: 0,
            flags: StateFlags::default(),
        }
    }

    /// Create an unattached filter with [`FilterConfig::default`].
    pub fn with_defaults(
        input: I,
        clock: C,
    ) -> Self {
        Self::new(input, clock, FilterConfig::default())
    }

    // =========================================================================
    // Attachment
    // =========================================================================

    /// Bind the filter to `pin` and seed all state from a fresh sample.
    ///
    /// The filter starts settled: the initial reading becomes both the
    /// debounced value and the candidate, and no change is reported.
    pub fn attach(
        &mut self,
        pin: I::Pin,
    ) {
        self.pin = pin;
        let level = self.sample_level();
        self.flags = StateFlags::settled(level);
        self.last_transition_ms = self.strategy.attach_timestamp(self.clock.now_ms());

        #[cfg(feature = "defmt")]
        defmt::trace!("attach: level={} strategy={}", level, self.strategy);
    }

    /// Configure the pin's mode, then [`attach`](Self::attach) to it.
    pub fn attach_with_mode(
        &mut self,
        pin: I::Pin,
        mode: I::Mode,
    ) {
        self.input.configure(pin, mode);
        self.attach(pin);
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Set the debounce interval. Takes effect on the next poll.
    pub fn set_interval(
        &mut self,
        interval_ms: u32,
    ) {
        self.interval_ms = interval_ms;
    }

    /// Replace both threshold bounds. Does not touch the state flags.
    pub fn set_threshold(
        &mut self,
        threshold: ThresholdRange,
    ) {
        self.threshold = threshold;
    }

    /// Sample the input now and use the raw value as the new upper bound.
    ///
    /// Meant to be called once with the sensor at its known maximum.
    pub fn calibrate_high_bound(&mut self) {
        let sample = self.input.sample(self.pin);
        self.threshold.high = sample;

        #[cfg(feature = "defmt")]
        defmt::trace!("calibrate: high={=u16}", sample);
    }

    // =========================================================================
    // Polling
    // =========================================================================

    /// Take a sample, run the configured algorithm and return whether the
    /// debounced value changed during this poll.
    pub fn poll(&mut self) -> bool {
        match self.strategy {
            DebounceStrategy::Lockout => self.poll_lockout(),
            DebounceStrategy::StabilityTimeout => self.poll_stability_timeout(),
        }

        #[cfg(feature = "defmt")]
        {
            if let Some(edge) = self.edge() {
                defmt::trace!("edge: {} at {=u32} ms", edge, self.last_transition_ms);
            }
        }

        self.flags.changed
    }

    /// Accept the first differing sample outside the lockout window.
    fn poll_lockout(&mut self) {
        self.flags.changed = false;

        let now = self.clock.now_ms();
        if now.wrapping_sub(self.last_transition_ms) < self.interval_ms {
            return;
        }

        let level = self.sample_level();
        if level != self.flags.debounced {
            self.last_transition_ms = now;
            self.flags.debounced = level;
            self.flags.changed = true;
        }
    }

    /// Accept a sample only after it held for the full interval.
    fn poll_stability_timeout(&mut self) {
        let level = self.sample_level();
        self.flags.changed = false;

        // Still settling: restart the stability timer
        if level != self.flags.unstable {
            self.last_transition_ms = self.clock.now_ms();
            self.flags.unstable = level;
            return;
        }

        let now = self.clock.now_ms();
        if now.wrapping_sub(self.last_transition_ms) >= self.interval_ms && level != self.flags.debounced {
            self.last_transition_ms = now;
            self.flags.debounced = level;
            self.flags.changed = true;
        }
    }

    #[inline]
    fn sample_level(&mut self) -> bool {
        let sample = self.input.sample(self.pin);
        self.threshold.is_high(sample)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Current debounced value.
    #[inline]
    pub const fn read(&self) -> bool { self.flags.debounced }

    /// Check if the last poll caused a false → true transition.
    #[inline]
    pub const fn rose(&self) -> bool { self.flags.debounced && self.flags.changed }

    /// Check if the last poll caused a true → false transition.
    #[inline]
    pub const fn fell(&self) -> bool { !self.flags.debounced && self.flags.changed }

    /// Transition caused by the last poll, if any.
    #[inline]
    pub const fn edge(&self) -> Option<Edge> {
        if self.flags.changed { Some(Edge::from_level(self.flags.debounced)) } else { None }
    }

    /// Timestamp of the last timer restart (see module docs).
    #[inline]
    pub const fn last_transition_ms(&self) -> u32 { self.last_transition_ms }

    #[inline]
    pub const fn interval_ms(&self) -> u32 { self.interval_ms }

    #[inline]
    pub const fn threshold(&self) -> ThresholdRange { self.threshold }

    #[inline]
    pub const fn strategy(&self) -> DebounceStrategy { self.strategy }

    /// Pin the filter is attached to.
    #[inline]
    pub fn pin(&self) -> I::Pin { self.pin }

    // =========================================================================
    // Platform access
    // =========================================================================

    /// Mutable access to the analog input (e.g. to sample other pins).
    pub fn input_mut(&mut self) -> &mut I { &mut self.input }

    pub fn clock(&self) -> &C { &self.clock }

    /// Give back the platform primitives.
    pub fn release(self) -> (I, C) { (self.input, self.clock) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ManualClock, ScriptedInput, TestMode};

    const HIGH: u16 = 1000;
    const LOW: u16 = 100;

    type TestFilter = DebounceFilter<ScriptedInput, ManualClock>;

    /// Filter over a 0..1024 range (decision point 512).
    fn filter(
        strategy: DebounceStrategy,
        interval_ms: u32,
        initial: u16,
        now_ms: u32,
    ) -> TestFilter {
        let config = FilterConfig::new()
            .with_threshold(ThresholdRange::new(0, 1024))
            .with_interval_ms(interval_ms)
            .with_strategy(strategy);
        let mut filter = DebounceFilter::new(ScriptedInput::reading(initial), ManualClock::at(now_ms), config);
        filter.attach(3);
        filter
    }

    /// Set the raw reading and poll at `t`.
    fn poll_at(
        filter: &mut TestFilter,
        t: u32,
        value: u16,
    ) -> bool {
        filter.input_mut().value = value;
        filter.clock().set(t);
        filter.poll()
    }

    /// Small deterministic noise source for long randomized runs.
    struct Lcg(u32);

    impl Lcg {
        fn next_u32(&mut self) -> u32 {
            self.0 = self.0.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            self.0 >> 16
        }
    }

    // -------------------------------------------------------------------------
    // Attachment and configuration
    // -------------------------------------------------------------------------

    #[test]
    fn test_unattached_filter_reads_low() {
        let filter = DebounceFilter::with_defaults(ScriptedInput::reading(HIGH), ManualClock::default());
        assert!(!filter.read());
        assert!(filter.edge().is_none());
        assert_eq!(filter.pin(), 0);
        assert_eq!(filter.interval_ms(), 10);
    }

    #[test]
    fn test_attach_seeds_settled_state() {
        let filter = filter(DebounceStrategy::StabilityTimeout, 10, HIGH, 500);
        assert!(filter.read());
        assert!(!filter.rose());
        assert!(!filter.fell());
        assert_eq!(filter.pin(), 3);
        assert_eq!(filter.last_transition_ms(), 500);
    }

    #[test]
    fn test_attach_lockout_seeds_zero_timestamp() {
        let filter = filter(DebounceStrategy::Lockout, 10, LOW, 500);
        assert!(!filter.read());
        assert_eq!(filter.last_transition_ms(), 0);
    }

    #[test]
    fn test_attach_at_decision_point_reads_low() {
        let filter = filter(DebounceStrategy::StabilityTimeout, 10, 512, 0);
        assert!(!filter.read());
    }

    #[test]
    fn test_attach_with_mode_configures_pin_first() {
        let mut filter = DebounceFilter::with_defaults(ScriptedInput::reading(HIGH), ManualClock::default());
        filter.attach_with_mode(7, TestMode::PullDown);

        let input = filter.input_mut();
        assert_eq!(input.configured, Some((7, TestMode::PullDown)));
        assert_eq!(input.last_pin, 7);
        assert_eq!(input.samples_taken, 1);
        assert!(filter.read());

        filter.attach_with_mode(2, TestMode::Floating);
        assert_eq!(filter.input_mut().configured, Some((2, TestMode::Floating)));
        assert_eq!(filter.pin(), 2);
    }

    #[test]
    fn test_reattach_discards_previous_state() {
        let mut filter = filter(DebounceStrategy::StabilityTimeout, 10, HIGH, 0);
        poll_at(&mut filter, 0, LOW);
        poll_at(&mut filter, 10, LOW);
        assert!(filter.fell());

        filter.input_mut().value = HIGH;
        filter.clock().set(20);
        filter.attach(4);
        assert!(filter.read());
        assert!(filter.edge().is_none());
        assert_eq!(filter.pin(), 4);
        assert_eq!(filter.last_transition_ms(), 20);
    }

    #[test]
    fn test_reattach_while_settling_reseeds_candidate() {
        let mut filter = filter(DebounceStrategy::StabilityTimeout, 10, HIGH, 0);
        assert!(!poll_at(&mut filter, 0, LOW));

        // Candidate is low, debounced still high
        filter.input_mut().value = HIGH;
        filter.clock().advance(5);
        filter.attach(3);
        assert_eq!(filter.last_transition_ms(), 5);

        // Steady high after re-attach neither restarts the timer nor reports
        for t in 6..=100 {
            assert!(!poll_at(&mut filter, t, HIGH), "unexpected change at t={t}");
            assert_eq!(filter.last_transition_ms(), 5);
        }
        assert!(filter.read());
    }

    #[test]
    fn test_reattach_lockout_reopens_window() {
        let mut filter = filter(DebounceStrategy::Lockout, 50, LOW, 1000);
        assert!(poll_at(&mut filter, 1000, HIGH));
        assert_eq!(filter.last_transition_ms(), 1000);

        filter.attach(3);
        assert!(filter.read());
        assert!(filter.edge().is_none());
        assert_eq!(filter.last_transition_ms(), 0);

        // Window restarted from zero, so the next change is accepted at once
        assert!(poll_at(&mut filter, 1001, LOW));
        assert!(filter.fell());
        assert_eq!(filter.last_transition_ms(), 1001);
    }

    #[test]
    fn test_release_returns_platform() {
        let mut filter = filter(DebounceStrategy::StabilityTimeout, 10, HIGH, 40);
        poll_at(&mut filter, 45, LOW);

        let (input, clock) = filter.release();
        assert_eq!(input.value, LOW);
        assert_eq!(input.last_pin, 3);
        assert_eq!(input.samples_taken, 2);
        assert_eq!(clock.now_ms(), 45);
    }

    #[test]
    fn test_calibrate_high_bound() {
        let mut filter = filter(DebounceStrategy::StabilityTimeout, 10, HIGH, 0);
        filter.input_mut().value = 600;
        filter.calibrate_high_bound();

        assert_eq!(filter.threshold(), ThresholdRange::new(0, 600));
        // Calibration never changes the debounced value
        assert!(filter.read());
        assert!(filter.edge().is_none());

        // 400 is now above the new decision point (300)
        assert!(!poll_at(&mut filter, 1, 400));
        assert!(!poll_at(&mut filter, 50, 400));
        assert!(filter.read());
    }

    #[test]
    fn test_set_threshold_does_not_touch_state() {
        let mut filter = filter(DebounceStrategy::StabilityTimeout, 10, HIGH, 0);
        filter.set_threshold(ThresholdRange::new(0, 4095));
        assert!(filter.read());
        assert_eq!(filter.threshold().decision_point(), 2047);

        // 1000 now reads low and settles like any other change
        assert!(!poll_at(&mut filter, 0, HIGH));
        assert!(poll_at(&mut filter, 10, HIGH));
        assert!(filter.fell());
    }

    #[test]
    fn test_set_interval_applies_on_next_poll() {
        let mut filter = filter(DebounceStrategy::StabilityTimeout, 100, HIGH, 0);
        assert!(!poll_at(&mut filter, 0, LOW));
        assert!(!poll_at(&mut filter, 5, LOW));

        filter.set_interval(5);
        assert_eq!(filter.interval_ms(), 5);
        assert!(filter.read());
        assert!(poll_at(&mut filter, 5, LOW));
    }

    // -------------------------------------------------------------------------
    // Stability-timeout
    // -------------------------------------------------------------------------

    #[test]
    fn test_stability_settles_after_interval() {
        let mut filter = filter(DebounceStrategy::StabilityTimeout, 10, HIGH, 0);
        assert!(filter.read());

        // Drop observed at t=0 restarts the timer
        assert!(!poll_at(&mut filter, 0, LOW));
        for t in 1..10 {
            assert!(!poll_at(&mut filter, t, LOW), "changed early at t={t}");
            assert!(filter.read(), "read flipped early at t={t}");
        }

        assert!(poll_at(&mut filter, 10, LOW));
        assert!(!filter.read());
        assert!(filter.fell());
        assert!(!filter.rose());
        assert_eq!(filter.edge(), Some(Edge::Falling));
    }

    #[test]
    fn test_stability_reports_change_once() {
        let mut filter = filter(DebounceStrategy::StabilityTimeout, 10, LOW, 0);
        poll_at(&mut filter, 0, HIGH);
        let changes = (1..200).filter(|&t| poll_at(&mut filter, t, HIGH)).count();
        assert_eq!(changes, 1);
        assert!(filter.read());
    }

    #[test]
    fn test_stability_noise_restarts_timer() {
        let mut filter = filter(DebounceStrategy::StabilityTimeout, 10, HIGH, 0);

        // Bounce every 3 ms for a while: never stable long enough
        for t in 0..60 {
            let value = if (t / 3) % 2 == 0 { LOW } else { HIGH };
            assert!(!poll_at(&mut filter, t, value));
            assert!(filter.read());
        }

        // Settle low from t=60
        for t in 60..70 {
            assert!(!poll_at(&mut filter, t, LOW));
        }
        assert!(poll_at(&mut filter, 70, LOW));
        assert!(filter.fell());
    }

    #[test]
    fn test_stability_glitch_shorter_than_interval_is_ignored() {
        let mut filter = filter(DebounceStrategy::StabilityTimeout, 10, HIGH, 0);
        for t in 0..5 {
            poll_at(&mut filter, t, LOW);
        }
        for t in 5..100 {
            assert!(!poll_at(&mut filter, t, HIGH));
        }
        assert!(filter.read());
    }

    #[test]
    fn test_stability_first_change_after_attach() {
        // Attach at t=100 high, raw immediately goes low
        let mut filter = filter(DebounceStrategy::StabilityTimeout, 10, HIGH, 100);
        assert!(!poll_at(&mut filter, 101, LOW));
        assert!(!poll_at(&mut filter, 110, LOW));
        assert!(poll_at(&mut filter, 111, LOW));
    }

    #[test]
    fn test_stability_zero_interval_accepts_on_confirming_poll() {
        let mut filter = filter(DebounceStrategy::StabilityTimeout, 0, HIGH, 0);
        assert!(!poll_at(&mut filter, 0, LOW));
        assert!(poll_at(&mut filter, 0, LOW));
        assert!(filter.fell());
    }

    #[test]
    fn test_stability_across_clock_wrap() {
        let start = u32::MAX - 4;
        let mut filter = filter(DebounceStrategy::StabilityTimeout, 10, HIGH, start);
        assert!(!poll_at(&mut filter, start, LOW));

        let mut t = start;
        for _ in 0..9 {
            t = t.wrapping_add(1);
            assert!(!poll_at(&mut filter, t, LOW));
        }
        t = t.wrapping_add(1);
        assert_eq!(t, 5);
        assert!(poll_at(&mut filter, t, LOW));
        assert_eq!(filter.last_transition_ms(), 5);
    }

    // -------------------------------------------------------------------------
    // Lockout
    // -------------------------------------------------------------------------

    #[test]
    fn test_lockout_accepts_immediately_outside_window() {
        let mut filter = filter(DebounceStrategy::Lockout, 50, LOW, 1000);
        assert!(poll_at(&mut filter, 1000, HIGH));
        assert!(filter.rose());
        assert_eq!(filter.last_transition_ms(), 1000);
    }

    #[test]
    fn test_lockout_ignores_input_inside_window() {
        let mut filter = filter(DebounceStrategy::Lockout, 50, LOW, 1000);
        assert!(poll_at(&mut filter, 1000, HIGH));

        // Real, sustained drop at +20 is ignored until the window reopens
        for t in 1020..1050 {
            assert!(!poll_at(&mut filter, t, LOW), "accepted inside window at t={t}");
            assert!(filter.read());
        }
        assert!(poll_at(&mut filter, 1050, LOW));
        assert!(filter.fell());
    }

    #[test]
    fn test_lockout_discards_toggles_inside_window() {
        let mut filter = filter(DebounceStrategy::Lockout, 50, LOW, 1000);
        assert!(poll_at(&mut filter, 1000, HIGH));

        // Low glitch at +10..+20, back high before the window reopens
        let mut changes = 0;
        for t in 1001..1200 {
            let value = if (1010..1020).contains(&t) { LOW } else { HIGH };
            if poll_at(&mut filter, t, value) {
                changes += 1;
            }
        }
        assert_eq!(changes, 0);
        assert!(filter.read());
    }

    #[test]
    fn test_lockout_accepts_first_sample_after_window() {
        let mut filter = filter(DebounceStrategy::Lockout, 50, LOW, 1000);
        assert!(poll_at(&mut filter, 1000, HIGH));

        // Two flips 20 ms apart, both inside the window
        let mut accepted = Vec::new();
        for t in 1001..1100 {
            let value = if t < 1010 {
                HIGH
            } else if t < 1030 {
                LOW
            } else if t < 1060 {
                HIGH
            } else {
                LOW
            };
            if poll_at(&mut filter, t, value) {
                accepted.push(t);
            }
        }

        // At t=1050 the raw reading is high again (same as debounced), so the
        // first differing sample after the window is the drop at t=1060.
        assert_eq!(accepted, vec![1060]);
        assert!(!filter.read());
    }

    #[test]
    fn test_lockout_window_measured_from_clock_zero() {
        let mut filter = filter(DebounceStrategy::Lockout, 50, LOW, 60);
        assert!(poll_at(&mut filter, 60, HIGH));
    }

    #[test]
    fn test_lockout_window_skips_sampling() {
        let mut filter = filter(DebounceStrategy::Lockout, 50, LOW, 1000);
        poll_at(&mut filter, 1000, HIGH);
        let before = filter.input_mut().samples_taken;
        poll_at(&mut filter, 1010, LOW);
        assert_eq!(filter.input_mut().samples_taken, before);
    }

    #[test]
    fn test_lockout_zero_interval_accepts_every_change() {
        let mut filter = filter(DebounceStrategy::Lockout, 0, LOW, 0);
        assert!(poll_at(&mut filter, 0, HIGH));
        assert!(poll_at(&mut filter, 0, LOW));
        assert!(poll_at(&mut filter, 0, HIGH));
    }

    // -------------------------------------------------------------------------
    // Properties over noisy input
    // -------------------------------------------------------------------------

    #[test]
    fn test_constant_input_never_changes() {
        for strategy in [DebounceStrategy::Lockout, DebounceStrategy::StabilityTimeout] {
            for value in [LOW, HIGH] {
                let mut filter = filter(strategy, 10, value, 0);
                for t in 0..500 {
                    assert!(!poll_at(&mut filter, t, value), "{strategy:?} changed at t={t}");
                }
            }
        }
    }

    #[test]
    fn test_rose_fell_consistent_with_poll() {
        for strategy in [DebounceStrategy::Lockout, DebounceStrategy::StabilityTimeout] {
            let mut rng = Lcg(0xC0FFEE);
            let mut filter = filter(strategy, 15, LOW, 0);
            let mut previous = filter.read();
            let mut t = 0u32;

            for _ in 0..5000 {
                t += rng.next_u32() % 4;
                let value = (rng.next_u32() % 1024) as u16;
                let changed = poll_at(&mut filter, t, value);

                assert!(!(filter.rose() && filter.fell()));
                assert_eq!(filter.rose() || filter.fell(), changed);
                assert_eq!(filter.edge().is_some(), changed);
                if changed {
                    assert_ne!(filter.read(), previous);
                    assert_eq!(filter.rose(), filter.read());
                } else {
                    assert_eq!(filter.read(), previous);
                }

                // Queries are pure
                let read = filter.read();
                assert_eq!(filter.read(), read);
                assert_eq!(filter.read(), read);

                previous = filter.read();
            }
        }
    }

    #[test]
    fn test_lockout_spacing_never_below_interval() {
        let mut rng = Lcg(42);
        let mut filter = filter(DebounceStrategy::Lockout, 25, LOW, 1000);
        let mut last_accept: Option<u32> = None;

        for t in 1000..10_000 {
            let value = if rng.next_u32() % 2 == 0 { LOW } else { HIGH };
            if poll_at(&mut filter, t, value) {
                if let Some(last) = last_accept {
                    assert!(t - last >= 25, "edges {last} and {t} too close");
                }
                last_accept = Some(t);
            }
        }
        assert!(last_accept.is_some());
    }

    #[test]
    fn test_stability_accepts_only_after_full_hold() {
        let mut rng = Lcg(7);
        let mut filter = filter(DebounceStrategy::StabilityTimeout, 20, LOW, 0);
        let mut raw_since = 0u32;
        let mut last_raw = false;

        for t in 0..20_000 {
            // Long runs with occasional bursts
            let flip = rng.next_u32() % 40 == 0;
            let raw = if flip { !last_raw } else { last_raw };
            if raw != last_raw {
                raw_since = t;
                last_raw = raw;
            }
            if poll_at(&mut filter, t, if raw { HIGH } else { LOW }) {
                assert!(t - raw_since >= 20, "accepted after {} ms", t - raw_since);
                assert_eq!(filter.read(), raw);
            }
        }
    }
}
