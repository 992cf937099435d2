//! Test doubles for the platform traits.

use core::cell::Cell;

use crate::platform::{AnalogInput, MillisClock};

/// Clock whose time only moves when a test sets it.
#[derive(Default)]
pub struct ManualClock {
    now: Cell<u32>,
}

impl ManualClock {
    pub fn at(now_ms: u32) -> Self { Self { now: Cell::new(now_ms) } }

    pub fn set(
        &self,
        now_ms: u32,
    ) {
        self.now.set(now_ms);
    }

    pub fn advance(
        &self,
        delta_ms: u32,
    ) {
        self.now.set(self.now.get().wrapping_add(delta_ms));
    }
}

impl MillisClock for ManualClock {
    fn now_ms(&self) -> u32 { self.now.get() }
}

/// Pin mode used by [`ScriptedInput`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TestMode {
    Floating,
    PullDown,
}

/// Analog input returning whatever value the test last set.
#[derive(Default)]
pub struct ScriptedInput {
    pub value: u16,
    pub samples_taken: usize,
    pub last_pin: u8,
    pub configured: Option<(u8, TestMode)>,
}

impl ScriptedInput {
    pub fn reading(value: u16) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }
}

impl AnalogInput for ScriptedInput {
    type Mode = TestMode;
    type Pin = u8;

    fn sample(
        &mut self,
        pin: u8,
    ) -> u16 {
        self.samples_taken += 1;
        self.last_pin = pin;
        self.value
    }

    fn configure(
        &mut self,
        pin: u8,
        mode: TestMode,
    ) {
        self.configured = Some((pin, mode));
    }
}
