//! Calibrate button debounce handling.
//!
//! Provides time-based edge detection with debouncing to prevent
//! multiple triggers from contact bounce. Timestamps are passed in by the
//! caller so the logic runs on the host in tests.

use crate::config::BUTTON_DEBOUNCE_MS;

/// Button debounce state with time-based edge detection.
pub struct ButtonState {
    was_pressed: bool,
    last_change_ms: Option<u32>,
}

impl ButtonState {
    /// Create a new button state (not pressed).
    pub const fn new() -> Self {
        Self {
            was_pressed: false,
            last_change_ms: None,
        }
    }

    /// Returns true only on the falling edge (button just pressed).
    ///
    /// Buttons are active-low, so `is_low()` means pressed.
    /// A change within `BUTTON_DEBOUNCE_MS` of the previous one is ignored.
    pub fn just_pressed(
        &mut self,
        is_low: bool,
        now_ms: u32,
    ) -> bool {
        if is_low == self.was_pressed {
            return false;
        }

        if let Some(last) = self.last_change_ms
            && now_ms.wrapping_sub(last) < BUTTON_DEBOUNCE_MS
        {
            return false;
        }

        self.was_pressed = is_low;
        self.last_change_ms = Some(now_ms);

        is_low
    }
}

impl Default for ButtonState {
    fn default() -> Self { Self::new() }
}
