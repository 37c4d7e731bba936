use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::FrequencyRange;

/// Allowed population sizes.
pub const NUM_OSCILLATORS_RANGE: RangeInclusive<usize> = 1..=1000;

/// Allowed coupling strengths.
pub const COUPLING_STRENGTH_RANGE: RangeInclusive<f64> = 0.0..=10.0;

/// Upper bound on the integration step; the lower bound is open at zero.
pub const TIME_STEP_MAX: f64 = 1.0;

/// Allowed animation speed multipliers.
pub const ANIMATION_SPEED_RANGE: RangeInclusive<f64> = 0.1..=10.0;

/// A validated configuration record for one simulation run.
///
/// Every field is range-checked at construction; an invalid combination never
/// produces a partially built value. The range constants above are public so
/// UI layers can bound their input widgets to the same limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    num_oscillators: usize,
    coupling_strength: f64,
    time_step: f64,
    frequency_range: FrequencyRange,
    animation_speed: f64,
}

/// An error returned when constructing invalid [`SimulationParameters`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ParameterError {
    #[error("num_oscillators must be in [1, 1000], got {0}")]
    NumOscillators(usize),
    #[error("coupling_strength must be finite and in [0, 10], got {0}")]
    CouplingStrength(f64),
    #[error("time_step must be finite and in (0, 1], got {0}")]
    TimeStep(f64),
    #[error("animation_speed must be finite and in [0.1, 10], got {0}")]
    AnimationSpeed(f64),
}

impl SimulationParameters {
    /// Creates a parameter record, validating every field eagerly.
    ///
    /// # Errors
    ///
    /// Returns the [`ParameterError`] variant for the first field found
    /// outside its allowed range.
    pub fn new(
        num_oscillators: usize,
        coupling_strength: f64,
        time_step: f64,
        frequency_range: FrequencyRange,
        animation_speed: f64,
    ) -> Result<Self, ParameterError> {
        if !NUM_OSCILLATORS_RANGE.contains(&num_oscillators) {
            return Err(ParameterError::NumOscillators(num_oscillators));
        }
        if !(coupling_strength.is_finite() && COUPLING_STRENGTH_RANGE.contains(&coupling_strength))
        {
            return Err(ParameterError::CouplingStrength(coupling_strength));
        }
        if !(time_step.is_finite() && time_step > 0.0 && time_step <= TIME_STEP_MAX) {
            return Err(ParameterError::TimeStep(time_step));
        }
        if !(animation_speed.is_finite() && ANIMATION_SPEED_RANGE.contains(&animation_speed)) {
            return Err(ParameterError::AnimationSpeed(animation_speed));
        }
        Ok(Self {
            num_oscillators,
            coupling_strength,
            time_step,
            frequency_range,
            animation_speed,
        })
    }

    /// Returns the population size N.
    #[must_use]
    pub fn num_oscillators(&self) -> usize {
        self.num_oscillators
    }

    /// Returns the coupling strength K.
    #[must_use]
    pub fn coupling_strength(&self) -> f64 {
        self.coupling_strength
    }

    /// Returns the integration step Δt.
    #[must_use]
    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// Returns the intrinsic frequency band.
    #[must_use]
    pub fn frequency_range(&self) -> FrequencyRange {
        self.frequency_range
    }

    /// Returns the animation speed multiplier.
    #[must_use]
    pub fn animation_speed(&self) -> f64 {
        self.animation_speed
    }
}
