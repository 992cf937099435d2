//! Synthetic analog signals for the replay scenarios.
//!
//! Every scenario produces 10-bit samples (0..1023), matching the filter's
//! default range. Levels sit well away from the decision point (511) so the
//! added noise never crosses it; only the scenario's own pattern does.
//! The exception is [`Scenario::NoisyRamp`], which crosses slowly and lets
//! the noise chatter around the threshold.

use micromath::F32;

/// Settled "off" level.
pub const LOW_LEVEL: u16 = 150;

/// Settled "on" level.
pub const HIGH_LEVEL: u16 = 870;

/// Noise amplitude for the step scenarios (keeps samples on their side).
const STEP_NOISE: i32 = 40;

/// Noise amplitude for the ramp (crosses the threshold near the midpoint).
const RAMP_NOISE: i32 = 120;

/// Period of the ramp's sine wave.
const RAMP_PERIOD_MS: f32 = 400.0;

// =============================================================================
// Noise
// =============================================================================

/// Deterministic xorshift noise so every run draws the same diagram.
pub struct Noise(u32);

impl Noise {
    pub const fn new(seed: u32) -> Self { Self(if seed == 0 { 1 } else { seed }) }

    fn next_u32(&mut self) -> u32 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.0 = x;
        x
    }

    /// Uniform offset in `-amplitude..=amplitude`.
    pub fn offset(
        &mut self,
        amplitude: i32,
    ) -> i32 {
        let span = (2 * amplitude + 1) as u32;
        (self.next_u32() % span) as i32 - amplitude
    }
}

/// Clamp to the 10-bit ADC domain.
fn to_sample(value: i32) -> u16 { value.clamp(0, 1023) as u16 }

const fn level(on: bool) -> u16 { if on { HIGH_LEVEL } else { LOW_LEVEL } }

// =============================================================================
// Scenarios
// =============================================================================

/// Input patterns replayed through both strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scenario {
    /// One clean press at 100 ms, released at 300 ms.
    CleanStep,
    /// Press and release with mechanical contact bounce lasting longer than
    /// the debounce interval.
    BouncingPress,
    /// Held on, then a 7 ms chatter burst before the final release.
    ChatterBurst,
    /// Slow sine crossing the threshold with heavy noise.
    NoisyRamp,
}

impl Scenario {
    /// All scenarios in diagram order.
    pub const ALL: [Self; 4] = [Self::CleanStep, Self::BouncingPress, Self::ChatterBurst, Self::NoisyRamp];

    pub const fn name(self) -> &'static str {
        match self {
            Self::CleanStep => "clean step",
            Self::BouncingPress => "bouncing press",
            Self::ChatterBurst => "chatter burst",
            Self::NoisyRamp => "noisy ramp",
        }
    }

    /// Intended (noise-free) boolean at `t_ms`.
    pub fn pattern(
        self,
        t_ms: u32,
    ) -> bool {
        match self {
            Self::CleanStep => (100..300).contains(&t_ms),
            Self::BouncingPress => match t_ms {
                0..100 => false,
                100..115 => ((t_ms - 100) / 2) % 2 == 0,
                115..300 => true,
                300..312 => ((t_ms - 300) / 3) % 2 == 1,
                _ => false,
            },
            Self::ChatterBurst => match t_ms {
                0..50 => false,
                50..200 => true,
                200..280 => ((t_ms - 200) / 7) % 2 == 1,
                _ => false,
            },
            Self::NoisyRamp => Self::ramp_center(t_ms) > 511,
        }
    }

    /// Noise-free sine for the ramp scenario.
    fn ramp_center(t_ms: u32) -> i32 {
        let phase = t_ms as f32 / RAMP_PERIOD_MS * 2.0 * core::f32::consts::PI;
        (512.0 + 400.0 * F32(phase).sin().0) as i32
    }

    /// Raw sample at `t_ms`.
    pub fn sample_at(
        self,
        t_ms: u32,
        noise: &mut Noise,
    ) -> u16 {
        match self {
            Self::NoisyRamp => to_sample(Self::ramp_center(t_ms) + noise.offset(RAMP_NOISE)),
            _ => to_sample(i32::from(level(self.pattern(t_ms))) + noise.offset(STEP_NOISE)),
        }
    }

    /// Samples for `0..duration_ms`, one per millisecond.
    pub fn samples(
        self,
        duration_ms: u32,
        seed: u32,
    ) -> Vec<u16> {
        let mut noise = Noise::new(seed);
        (0..duration_ms).map(|t| self.sample_at(t, &mut noise)).collect()
    }
}
