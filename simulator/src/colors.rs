//! Color constants for the timing diagram.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor, WebColors};

/// Background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Labels.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Panel separators and the threshold line.
pub const GRAY: Rgb565 = Rgb565::CSS_DIM_GRAY;

/// Raw analog waveform.
pub const ANALOG: Rgb565 = Rgb565::CSS_SKY_BLUE;

/// Thresholded (raw) boolean.
pub const RAW: Rgb565 = Rgb565::YELLOW;

/// Stability-timeout output.
pub const STABLE: Rgb565 = Rgb565::GREEN;

/// Lockout output.
pub const LOCKOUT: Rgb565 = Rgb565::CSS_ORANGE;

/// Edge markers.
pub const EDGE: Rgb565 = Rgb565::RED;
