//! Pin assignment on the Raspberry Pi Pico 2.
//!
//! Wiring:
//! - Sensor: analog output (potentiometer, LDR divider, FSR...) on GPIO26/ADC0
//! - Calibrate button: GPIO15 to GND, internal pull-up (active-low)
//! - LED: on-board LED on GPIO25, mirrors the debounced value
//!
//! The binary takes the matching `embassy_rp` peripherals (`PIN_26`,
//! `PIN_15`, `PIN_25`); these numbers are what it reports in logs.

/// GPIO carrying the analog sensor signal.
pub const SENSOR_GPIO: u8 = 26;

/// ADC channel index of the sensor inside the firmware's channel table.
pub const SENSOR_ADC_CHANNEL: usize = 0;

/// GPIO of the calibrate button.
pub const CALIBRATE_BUTTON_GPIO: u8 = 15;

/// GPIO of the status LED.
pub const LED_GPIO: u8 = 25;

// RP2350A exposes ADC on GPIO26..=29 only
const _: () = assert!(matches!(SENSOR_GPIO, 26..=29));
const _: () = assert!(SENSOR_ADC_CHANNEL == (SENSOR_GPIO - 26) as usize);
