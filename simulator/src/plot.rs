//! Timing diagram rendering.
//!
//! One panel per scenario, one pixel column per millisecond:
//!
//! ```text
//! clean step      ~~~~~/~~~~~~~~~\~~~~~   analog + threshold line
//!   raw           ____/‾‾‾‾‾‾‾‾‾\_____
//!   stable        _____/‾‾‾‾‾‾‾‾‾\____
//!   lockout       ____/‾‾‾‾‾‾‾‾‾\_____
//! ```

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};
use embedded_graphics::text::{Baseline, Text};
use profont::{PROFONT_9_POINT, PROFONT_12_POINT};

use crate::colors::{ANALOG, BLACK, EDGE, GRAY, LOCKOUT, RAW, STABLE, WHITE};
use crate::run::Trace;
use crate::signal::Scenario;
use crate::timing::SIM_DURATION_MS;

// =============================================================================
// Layout
// =============================================================================

/// Width of the label column.
const LABEL_WIDTH: u32 = 96;

/// Right margin.
const MARGIN: u32 = 8;

/// Title bar height.
const HEADER_HEIGHT: u32 = 22;

/// Height of the analog waveform strip.
const ANALOG_HEIGHT: u32 = 40;

/// Height of each digital trace.
const DIGITAL_HEIGHT: u32 = 12;

/// Vertical gap between strips.
const GAP: u32 = 6;

/// Height of one scenario panel (title + analog + 3 digital traces).
const PANEL_HEIGHT: u32 = 14 + ANALOG_HEIGHT + 3 * (DIGITAL_HEIGHT + GAP) + GAP;

/// Upper bound of the plotted sample domain.
const SAMPLE_MAX: i32 = 1023;

/// Diagram width in pixels.
pub const PLOT_WIDTH: u32 = LABEL_WIDTH + SIM_DURATION_MS + MARGIN;

/// Diagram height for `panels` scenarios.
pub const fn plot_height(panels: u32) -> u32 { HEADER_HEIGHT + panels * PANEL_HEIGHT }

// =============================================================================
// Drawing
// =============================================================================

/// Draw the full diagram: title plus one panel per replayed scenario.
pub fn draw_timing_diagram<D>(
    display: &mut D,
    interval_ms: u32,
    panels: &[(Scenario, [Trace; 2])],
) where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BLACK).ok();

    let title = format!("debounce replay, interval {interval_ms} ms");
    let title_style = MonoTextStyle::new(&PROFONT_12_POINT, WHITE);
    Text::with_baseline(&title, Point::new(4, 4), title_style, Baseline::Top)
        .draw(display)
        .ok();

    for (i, (scenario, traces)) in panels.iter().enumerate() {
        let y = (HEADER_HEIGHT + i as u32 * PANEL_HEIGHT) as i32;
        draw_panel(display, y, *scenario, traces);
    }
}

/// Draw one scenario panel starting at `y`.
fn draw_panel<D>(
    display: &mut D,
    y: i32,
    scenario: Scenario,
    traces: &[Trace; 2],
) where
    D: DrawTarget<Color = Rgb565>,
{
    let label_style = MonoTextStyle::new(&PROFONT_9_POINT, WHITE);
    let x0 = LABEL_WIDTH as i32;

    // Separator and title
    Line::new(Point::new(0, y), Point::new(PLOT_WIDTH as i32 - 1, y))
        .into_styled(PrimitiveStyle::with_stroke(GRAY, 1))
        .draw(display)
        .ok();
    Text::with_baseline(scenario.name(), Point::new(4, y + 2), label_style, Baseline::Top)
        .draw(display)
        .ok();

    let [stable, lockout] = traces;

    let analog_y = y + 14;
    draw_analog(display, x0, analog_y, &stable.samples, stable.decision_point);

    let mut strip_y = analog_y + (ANALOG_HEIGHT + GAP) as i32;
    let strips: [(&str, &[bool], Rgb565, Option<&Trace>); 3] = [
        ("raw", &stable.raw, RAW, None),
        (stable.strategy.label(), &stable.debounced, STABLE, Some(stable)),
        (lockout.strategy.label(), &lockout.debounced, LOCKOUT, Some(lockout)),
    ];

    for (label, levels, color, edges) in strips {
        let text = match edges {
            Some(trace) => format!("  {label} ({})", trace.edges.len()),
            None => format!("  {label}"),
        };
        Text::with_baseline(&text, Point::new(4, strip_y), label_style, Baseline::Top)
            .draw(display)
            .ok();

        draw_digital(display, x0, strip_y, levels, color);
        if let Some(trace) = edges {
            draw_edge_markers(display, x0, strip_y, trace);
        }
        strip_y += (DIGITAL_HEIGHT + GAP) as i32;
    }
}

/// Map a sample to a y coordinate inside the analog strip.
fn sample_y(
    top: i32,
    sample: i32,
) -> i32 {
    let h = ANALOG_HEIGHT as i32 - 1;
    top + h - sample.clamp(0, SAMPLE_MAX) * h / SAMPLE_MAX
}

/// Draw the analog waveform and a dotted threshold line.
fn draw_analog<D>(
    display: &mut D,
    x0: i32,
    top: i32,
    samples: &[u16],
    decision_point: i32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let threshold_y = sample_y(top, decision_point);
    for x in (0..samples.len() as i32).step_by(4) {
        Pixel(Point::new(x0 + x, threshold_y), GRAY).draw(display).ok();
    }

    let style = PrimitiveStyle::with_stroke(ANALOG, 1);
    for (t, pair) in samples.windows(2).enumerate() {
        let x = x0 + t as i32;
        Line::new(
            Point::new(x, sample_y(top, i32::from(pair[0]))),
            Point::new(x + 1, sample_y(top, i32::from(pair[1]))),
        )
        .into_styled(style)
        .draw(display)
        .ok();
    }
}

/// Draw a boolean trace as a square wave.
fn draw_digital<D>(
    display: &mut D,
    x0: i32,
    top: i32,
    levels: &[bool],
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let high_y = top;
    let low_y = top + DIGITAL_HEIGHT as i32 - 1;
    let level_y = |on: bool| if on { high_y } else { low_y };

    for (t, &on) in levels.iter().enumerate() {
        let x = x0 + t as i32;
        Pixel(Point::new(x, level_y(on)), color).draw(display).ok();

        if t > 0 && levels[t - 1] != on {
            Line::new(Point::new(x, high_y), Point::new(x, low_y))
                .into_styled(PrimitiveStyle::with_stroke(color, 1))
                .draw(display)
                .ok();
        }
    }
}

/// Mark accepted edges with a short tick above the trace.
fn draw_edge_markers<D>(
    display: &mut D,
    x0: i32,
    top: i32,
    trace: &Trace,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let style = PrimitiveStyle::with_stroke(EDGE, 1);
    for record in &trace.edges {
        let x = x0 + record.timestamp_ms as i32;
        Line::new(Point::new(x, top - 3), Point::new(x, top - 1))
            .into_styled(style)
            .draw(display)
            .ok();
    }
}
