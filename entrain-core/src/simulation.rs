use std::f64::consts::TAU;

use rand::Rng;
use thiserror::Error;

use crate::{FrequencyRange, Oscillator, OscillatorError};

/// The full state of a Kuramoto network: a fixed-size population of
/// oscillators advancing in lockstep, plus the accumulated simulation time.
///
/// The state exclusively owns its oscillators; readers only ever see
/// immutable views or copies. The population size N is fixed for the lifetime
/// of one instance, so changing N means constructing a new state.
///
/// Each [`update`](SimulationState::update) call is one fixed-step Euler tick
/// and is atomic to observers: every coupling term is computed from the
/// pre-step phase vector before any phase is mutated.
#[derive(Debug, Clone)]
pub struct SimulationState {
    oscillators: Vec<Oscillator>,
    time: f64,
    frequency_range: FrequencyRange,
}

/// An error returned by [`SimulationState`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SimulationError {
    #[error("a simulation needs at least one oscillator")]
    EmptyPopulation,
    #[error("coupling strength must be finite and non-negative, got {0}")]
    InvalidCoupling(f64),
    #[error("time step must be positive and finite, got {0}")]
    InvalidTimeStep(f64),
    #[error(transparent)]
    Oscillator(#[from] OscillatorError),
}

impl SimulationState {
    /// Creates a network of `num_oscillators` oscillators with phases drawn
    /// uniformly from `[0, 2π)` and frequencies drawn uniformly from
    /// `frequency_range`. Time starts at zero.
    ///
    /// The randomness source is injected so callers can seed a deterministic
    /// generator in tests.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::EmptyPopulation`] if `num_oscillators` is zero.
    pub fn new(
        num_oscillators: usize,
        frequency_range: FrequencyRange,
        rng: &mut impl Rng,
    ) -> Result<Self, SimulationError> {
        if num_oscillators == 0 {
            return Err(SimulationError::EmptyPopulation);
        }
        Ok(Self {
            oscillators: draw_oscillators(num_oscillators, frequency_range, rng)?,
            time: 0.0,
            frequency_range,
        })
    }

    /// Returns a read-only view of the oscillators.
    ///
    /// [`Oscillator`] is `Copy` with no public mutators, so callers can take
    /// copies freely but can never alter the simulation through this view.
    #[must_use]
    pub fn oscillators(&self) -> &[Oscillator] {
        &self.oscillators
    }

    /// Returns the population size N.
    #[must_use]
    pub fn num_oscillators(&self) -> usize {
        self.oscillators.len()
    }

    /// Returns the accumulated simulation time.
    #[must_use]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Returns the frequency band used for the most recent draw.
    #[must_use]
    pub fn frequency_range(&self) -> FrequencyRange {
        self.frequency_range
    }

    /// Computes the order parameter `R = |mean_j e^{iθ_j}|`, a measure of
    /// phase synchronization: 0 is fully dispersed, 1 is fully synchronized.
    ///
    /// The value is derived from the current phases on every read and clamped
    /// into `[0, 1]` to absorb floating-point overshoot. An empty population
    /// yields 0; a lone oscillator is trivially synchronized and yields 1.
    #[must_use]
    pub fn resonance_index(&self) -> f64 {
        if self.oscillators.is_empty() {
            return 0.0;
        }

        let n = self.oscillators.len() as f64;
        let (sum_cos, sum_sin) = self
            .oscillators
            .iter()
            .fold((0.0, 0.0), |(cos_acc, sin_acc), osc| {
                (cos_acc + osc.phase().cos(), sin_acc + osc.phase().sin())
            });

        (sum_cos / n).hypot(sum_sin / n).clamp(0.0, 1.0)
    }

    /// Advances every oscillator by one synchronous Euler step and then
    /// increments the time accumulator by `time_step`.
    ///
    /// For each oscillator j the coupling term is the all-to-all sum
    ///
    /// ```text
    /// coupling_term_j = (K / N) · Σ_k sin(θ_k − θ_j)
    /// ```
    ///
    /// where every θ comes from a single snapshot of the pre-step phases.
    /// Computing all terms before mutating anything makes the step
    /// simultaneous rather than sequential; a loop that reused already
    /// updated phases would integrate a different system.
    ///
    /// The cost is O(N²) over flat `f64` buffers.
    ///
    /// # Errors
    ///
    /// - [`SimulationError::InvalidCoupling`] if `coupling_strength` is NaN,
    ///   infinite, or negative.
    /// - [`SimulationError::InvalidTimeStep`] if `time_step` is not strictly
    ///   positive and finite.
    ///
    /// Validation happens before any phase is touched, so a failed call
    /// leaves the state completely unmodified.
    pub fn update(&mut self, coupling_strength: f64, time_step: f64) -> Result<(), SimulationError> {
        if !(coupling_strength.is_finite() && coupling_strength >= 0.0) {
            return Err(SimulationError::InvalidCoupling(coupling_strength));
        }
        if !(time_step > 0.0 && time_step.is_finite()) {
            return Err(SimulationError::InvalidTimeStep(time_step));
        }

        let n = self.oscillators.len();
        if n == 0 {
            return Ok(());
        }

        // One read pass over the pre-step phases. Every coupling term below
        // is computed from this snapshot.
        let phases: Vec<f64> = self.oscillators.iter().map(Oscillator::phase).collect();

        let scale = coupling_strength / n as f64;
        let coupling_terms: Vec<f64> = phases
            .iter()
            .map(|&theta_j| {
                let sum: f64 = phases.iter().map(|&theta_k| (theta_k - theta_j).sin()).sum();
                scale * sum
            })
            .collect();

        for (oscillator, &coupling_term) in self.oscillators.iter_mut().zip(&coupling_terms) {
            oscillator.update_phase(coupling_term, time_step)?;
        }

        self.time += time_step;
        Ok(())
    }

    /// Redraws the whole population (same N) from `frequency_range` and sets
    /// time back to zero, exactly as construction does.
    ///
    /// Any externally tracked resonance history refers to the discarded
    /// trajectory; clearing it is the caller's responsibility.
    ///
    /// # Errors
    ///
    /// Propagates an [`OscillatorError`] if a drawn oscillator is rejected,
    /// which cannot happen for a valid [`FrequencyRange`].
    pub fn reset(
        &mut self,
        frequency_range: FrequencyRange,
        rng: &mut impl Rng,
    ) -> Result<(), SimulationError> {
        self.oscillators = draw_oscillators(self.oscillators.len(), frequency_range, rng)?;
        self.frequency_range = frequency_range;
        self.time = 0.0;
        Ok(())
    }
}

/// Draws `count` oscillators with uniform random phases and frequencies.
fn draw_oscillators(
    count: usize,
    frequency_range: FrequencyRange,
    rng: &mut impl Rng,
) -> Result<Vec<Oscillator>, OscillatorError> {
    (0..count)
        .map(|_| {
            let phase = rng.gen_range(0.0..TAU);
            let frequency = frequency_range.sample(rng);
            Oscillator::new(phase, frequency)
        })
        .collect()
}
