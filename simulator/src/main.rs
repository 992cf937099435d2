//! Debounce replay simulator.
//!
//! Feeds synthetic bouncing signals through both debounce strategies, prints
//! a per-scenario summary and renders a timing diagram to a PNG file.
//!
//! ```text
//! simulator [output.png]
//! ```

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

mod colors;
mod plot;
mod run;
mod signal;
mod timing;

use std::env;
use std::error::Error;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay};

use crate::plot::{PLOT_WIDTH, draw_timing_diagram, plot_height};
use crate::run::{Trace, replay_scenario};
use crate::signal::Scenario;
use crate::timing::{NOISE_SEED, SIM_DURATION_MS, SIM_INTERVAL_MS};

/// Default output path when none is given on the command line.
const DEFAULT_OUTPUT: &str = "bounce-timing.png";

fn print_trace(trace: &Trace) {
    let spacing = trace
        .min_edge_spacing_ms()
        .map_or_else(|| "-".to_string(), |ms| format!("{ms} ms"));
    let times: Vec<String> = trace
        .edges
        .iter()
        .map(|r| format!("{}{}", r.edge.symbol(), r.timestamp_ms))
        .collect();

    println!(
        "  {:<8} edges={:<3} min_spacing={:<7} [{}]",
        trace.strategy.label(),
        trace.edges.len(),
        spacing,
        times.join(" ")
    );
}

fn main() -> Result<(), Box<dyn Error>> {
    let output = env::args().nth(1).unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

    println!("Debounce replay: {SIM_DURATION_MS} ms per scenario, interval {SIM_INTERVAL_MS} ms");

    let panels: Vec<(Scenario, [Trace; 2])> = Scenario::ALL
        .into_iter()
        .map(|scenario| (scenario, replay_scenario(scenario, SIM_DURATION_MS, SIM_INTERVAL_MS, NOISE_SEED)))
        .collect();

    for (scenario, traces) in &panels {
        println!("{} (raw transitions: {})", scenario.name(), traces[0].raw_transitions());
        for trace in traces {
            print_trace(trace);
        }
    }

    let mut display: SimulatorDisplay<Rgb565> =
        SimulatorDisplay::new(Size::new(PLOT_WIDTH, plot_height(panels.len() as u32)));
    draw_timing_diagram(&mut display, SIM_INTERVAL_MS, &panels);

    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    display.to_rgb_output_image(&output_settings).save_png(&output)?;
    println!("Timing diagram written to {output}");

    Ok(())
}
