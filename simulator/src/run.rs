//! Replay a scenario through a [`DebounceFilter`] on a simulated clock.

use std::cell::Cell;

use bounce_common::{AnalogInput, DebounceFilter, DebounceStrategy, EdgeRecord, FilterConfig, MillisClock};

use crate::signal::Scenario;

// =============================================================================
// Simulated Platform
// =============================================================================

/// Single analog input whose value the replay loop sets before each poll.
#[derive(Default)]
pub struct SimInput {
    pub value: u16,
}

impl AnalogInput for SimInput {
    type Mode = ();
    type Pin = ();

    fn sample(
        &mut self,
        _pin: (),
    ) -> u16 {
        self.value
    }

    fn configure(
        &mut self,
        _pin: (),
        _mode: (),
    ) {
    }
}

/// Clock advanced by the replay loop.
#[derive(Default)]
pub struct SimClock {
    now: Cell<u32>,
}

impl SimClock {
    pub fn set(
        &self,
        now_ms: u32,
    ) {
        self.now.set(now_ms);
    }
}

impl MillisClock for SimClock {
    fn now_ms(&self) -> u32 { self.now.get() }
}

// =============================================================================
// Replay
// =============================================================================

/// Everything recorded during one replay, one entry per millisecond.
pub struct Trace {
    pub strategy: DebounceStrategy,
    /// Raw samples fed to the filter.
    pub samples: Vec<u16>,
    /// Thresholded samples.
    pub raw: Vec<bool>,
    /// `read()` after each poll.
    pub debounced: Vec<bool>,
    /// Accepted transitions.
    pub edges: Vec<EdgeRecord>,
    /// Decision point used for thresholding.
    pub decision_point: i32,
}

impl Trace {
    /// Number of raw boolean transitions the filter had to absorb.
    pub fn raw_transitions(&self) -> usize { self.raw.windows(2).filter(|w| w[0] != w[1]).count() }

    /// Shortest gap between accepted edges.
    pub fn min_edge_spacing_ms(&self) -> Option<u32> {
        self.edges
            .windows(2)
            .map(|w| w[1].timestamp_ms - w[0].timestamp_ms)
            .min()
    }
}

/// Replay `samples` (one per millisecond, starting at t=0) through a filter.
///
/// The filter is attached at t=0 with the first sample and then polled
/// once per millisecond, including t=0.
pub fn replay(
    samples: &[u16],
    strategy: DebounceStrategy,
    interval_ms: u32,
) -> Trace {
    let config = FilterConfig::new()
        .with_interval_ms(interval_ms)
        .with_strategy(strategy);

    let first = samples.first().copied().unwrap_or_default();
    let mut filter = DebounceFilter::new(SimInput { value: first }, SimClock::default(), config);
    filter.attach(());

    let mut trace = Trace {
        strategy,
        samples: samples.to_vec(),
        raw: Vec::with_capacity(samples.len()),
        debounced: Vec::with_capacity(samples.len()),
        edges: Vec::new(),
        decision_point: config.threshold.decision_point(),
    };

    for (t, &sample) in samples.iter().enumerate() {
        filter.input_mut().value = sample;
        filter.clock().set(t as u32);

        if filter.poll()
            && let Some(edge) = filter.edge()
        {
            trace.edges.push(EdgeRecord {
                edge,
                timestamp_ms: filter.last_transition_ms(),
            });
        }

        trace.raw.push(config.threshold.is_high(sample));
        trace.debounced.push(filter.read());
    }

    trace
}

/// Replay a scenario through both strategies (stability-timeout first).
pub fn replay_scenario(
    scenario: Scenario,
    duration_ms: u32,
    interval_ms: u32,
    seed: u32,
) -> [Trace; 2] {
    let samples = scenario.samples(duration_ms, seed);
    [
        replay(&samples, DebounceStrategy::StabilityTimeout, interval_ms),
        replay(&samples, DebounceStrategy::Lockout, interval_ms),
    ]
}
