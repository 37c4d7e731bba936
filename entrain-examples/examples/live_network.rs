//! # Live Kuramoto Network
//!
//! Opens a window with a freely running network of coupled oscillators.
//! Watch the markers on the unit circle clump together as the coupling
//! strength overcomes the spread of intrinsic frequencies.
//!
//! To run this example:
//!
//! ```sh
//! cargo run --example live_network --release
//! ```

use entrain_core::{FrequencyRange, SimulationParameters};
use entrain_plot::SimulationApp;

/// Starting population size.
const NUM_OSCILLATORS: usize = 50;

/// Coupling strength K.
const COUPLING_STRENGTH: f64 = 2.0;

/// Euler step size.
const TIME_STEP: f64 = 0.01;

/// Intrinsic frequency band, rad per unit time.
const FREQUENCY_BAND: (f64, f64) = (-1.0, 1.0);

/// Steps-per-frame multiplier.
const ANIMATION_SPEED: f64 = 1.0;

fn main() {
    let frequency_range = FrequencyRange::new(FREQUENCY_BAND.0, FREQUENCY_BAND.1).unwrap();
    let params = SimulationParameters::new(
        NUM_OSCILLATORS,
        COUPLING_STRENGTH,
        TIME_STEP,
        frequency_range,
        ANIMATION_SPEED,
    )
    .unwrap();

    SimulationApp::new(params).run("Entrain: Kuramoto Network").unwrap();
}
