//! Timing constants for the simulator.
//!
//! The simulated clock advances in fixed steps; nothing here sleeps.

/// Length of every scenario.
pub const SIM_DURATION_MS: u32 = 400;

/// Debounce interval used for both strategies.
pub const SIM_INTERVAL_MS: u32 = 10;

/// Seed for the deterministic noise generator.
pub const NOISE_SEED: u32 = 0x1234_5678;

const _: () = assert!(SIM_INTERVAL_MS * 4 < SIM_DURATION_MS);
