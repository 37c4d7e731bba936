//! Core model for a Kuramoto network of coupled phase oscillators.
//!
//! The model is deliberately small: an [`Oscillator`] owns a single
//! phase/frequency pair, and a [`SimulationState`] advances a fixed-size
//! population of them in lockstep using all-to-all sinusoidal coupling.
//! The degree of synchronization is exposed as a derived order parameter,
//! the [resonance index](SimulationState::resonance_index).
//!
//! Everything here is synchronous and performs no I/O. Callers decide when
//! to step the simulation; see [`ControlState`] for the run/pause machine
//! and [`SimulationParameters`] for the validated configuration record.

mod control;
mod frequency_range;
mod oscillator;
mod parameters;
mod simulation;

pub use control::ControlState;
pub use frequency_range::{FrequencyRange, FrequencyRangeError};
pub use oscillator::{Oscillator, OscillatorError};
pub use parameters::{
    ParameterError, SimulationParameters, ANIMATION_SPEED_RANGE, COUPLING_STRENGTH_RANGE,
    NUM_OSCILLATORS_RANGE, TIME_STEP_MAX,
};
pub use simulation::{SimulationError, SimulationState};
