use std::f64::consts::TAU;

use thiserror::Error;

/// A single phase oscillator in the network.
///
/// An oscillator pairs an angular position (`phase`, always in `[0, 2π)`)
/// with the natural rotation rate it would have in isolation
/// (`intrinsic_frequency`, in radians per unit time). The phase is only ever
/// mutated through [`update_phase`](Oscillator::update_phase), which
/// re-establishes the range invariant after every step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oscillator {
    phase: f64,
    intrinsic_frequency: f64,
}

/// An error returned when constructing or updating an [`Oscillator`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum OscillatorError {
    #[error("phase must be in [0, 2π), got {0}")]
    PhaseOutOfRange(f64),
    #[error("intrinsic frequency must be finite, got {0}")]
    FrequencyNotFinite(f64),
    #[error("coupling term must be finite, got {0}")]
    CouplingNotFinite(f64),
    #[error("time step must be positive and finite, got {0}")]
    TimeStepNotPositive(f64),
}

impl Oscillator {
    /// Creates an oscillator from an already-normalized phase and a finite
    /// intrinsic frequency.
    ///
    /// The caller must supply a phase in `[0, 2π)`; no wrapping is applied
    /// at construction.
    ///
    /// # Errors
    ///
    /// - [`OscillatorError::PhaseOutOfRange`] if `phase` is NaN or outside `[0, 2π)`.
    /// - [`OscillatorError::FrequencyNotFinite`] if `intrinsic_frequency` is NaN or infinite.
    pub fn new(phase: f64, intrinsic_frequency: f64) -> Result<Self, OscillatorError> {
        if !(0.0..TAU).contains(&phase) {
            return Err(OscillatorError::PhaseOutOfRange(phase));
        }
        if !intrinsic_frequency.is_finite() {
            return Err(OscillatorError::FrequencyNotFinite(intrinsic_frequency));
        }
        Ok(Self {
            phase,
            intrinsic_frequency,
        })
    }

    /// Returns the current phase in `[0, 2π)`.
    #[must_use]
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Returns the intrinsic frequency, fixed at construction.
    #[must_use]
    pub fn intrinsic_frequency(&self) -> f64 {
        self.intrinsic_frequency
    }

    /// Advances the phase by one forward Euler step:
    ///
    /// ```text
    /// phase ← (phase + dt · (ω + coupling_term)) mod 2π
    /// ```
    ///
    /// The modulo is a true non-negative remainder, so the postcondition
    /// `phase ∈ [0, 2π)` holds even when the unwrapped value is negative.
    /// No other state is touched; on error the phase is left unchanged.
    ///
    /// # Errors
    ///
    /// - [`OscillatorError::CouplingNotFinite`] if `coupling_term` is NaN or infinite.
    /// - [`OscillatorError::TimeStepNotPositive`] if `time_step` is not strictly
    ///   positive and finite.
    pub fn update_phase(&mut self, coupling_term: f64, time_step: f64) -> Result<(), OscillatorError> {
        if !coupling_term.is_finite() {
            return Err(OscillatorError::CouplingNotFinite(coupling_term));
        }
        if !(time_step > 0.0 && time_step.is_finite()) {
            return Err(OscillatorError::TimeStepNotPositive(time_step));
        }

        let unwrapped = self.phase + time_step * (self.intrinsic_frequency + coupling_term);
        self.phase = wrap_phase(unwrapped);
        Ok(())
    }
}

/// Wraps an angle into `[0, 2π)`.
///
/// `rem_euclid` guarantees a non-negative remainder but can round up to
/// exactly 2π for tiny negative inputs, so that endpoint folds back to zero.
pub(crate) fn wrap_phase(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;

    #[test]
    #[allow(clippy::float_cmp)]
    fn construction_round_trips_phase_and_frequency() {
        let osc = Oscillator::new(1.25, -0.5).unwrap();
        assert_eq!(osc.phase(), 1.25);
        assert_eq!(osc.intrinsic_frequency(), -0.5);

        // Both endpoints of the phase domain.
        assert!(Oscillator::new(0.0, 1.0).is_ok());
        assert!(Oscillator::new(TAU - 1e-12, 1.0).is_ok());
    }

    #[test]
    fn construction_rejects_out_of_range_phase() {
        assert!(matches!(
            Oscillator::new(-0.1, 1.0),
            Err(OscillatorError::PhaseOutOfRange(_))
        ));
        assert!(matches!(
            Oscillator::new(TAU, 1.0),
            Err(OscillatorError::PhaseOutOfRange(_))
        ));
        assert!(matches!(
            Oscillator::new(f64::NAN, 1.0),
            Err(OscillatorError::PhaseOutOfRange(_))
        ));
    }

    #[test]
    fn construction_rejects_non_finite_frequency() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                Oscillator::new(1.0, bad),
                Err(OscillatorError::FrequencyNotFinite(_))
            ));
        }
    }

    #[test]
    fn update_without_coupling_rotates_at_intrinsic_frequency() {
        let mut osc = Oscillator::new(1.0, 2.0).unwrap();
        osc.update_phase(0.0, 0.25).unwrap();
        assert_abs_diff_eq!(osc.phase(), 1.5, epsilon = 1e-12);
    }

    #[test]
    fn update_applies_coupling_term() {
        let mut osc = Oscillator::new(1.0, 2.0).unwrap();
        osc.update_phase(-1.0, 0.5).unwrap();
        assert_abs_diff_eq!(osc.phase(), 1.5, epsilon = 1e-12);
    }

    #[test]
    fn update_wraps_forward_past_two_pi() {
        let mut osc = Oscillator::new(6.0, 1.0).unwrap();
        osc.update_phase(0.0, 1.0).unwrap();
        assert_abs_diff_eq!(osc.phase(), 7.0 - TAU, epsilon = 1e-12);
        assert!(osc.phase() < TAU);
    }

    #[test]
    fn update_wraps_backward_to_non_negative() {
        let mut osc = Oscillator::new(0.5, -2.0).unwrap();
        osc.update_phase(0.0, 1.0).unwrap();
        assert_abs_diff_eq!(osc.phase(), TAU - 1.5, epsilon = 1e-12);
        assert!(osc.phase() >= 0.0);
    }

    #[test]
    fn update_survives_many_revolutions() {
        let mut osc = Oscillator::new(0.0, 1e6).unwrap();
        osc.update_phase(0.0, 1.0).unwrap();
        assert!((0.0..TAU).contains(&osc.phase()));
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn wrap_of_tiny_negative_angle_folds_to_zero() {
        // -1e-18 mod 2π rounds to exactly 2π; the guard folds it back.
        assert_eq!(wrap_phase(-1e-18), 0.0);
        assert_eq!(wrap_phase(0.0), 0.0);
        assert!(wrap_phase(-1.0) < TAU);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn invalid_update_leaves_phase_unchanged() {
        let mut osc = Oscillator::new(1.0, 2.0).unwrap();

        assert!(matches!(
            osc.update_phase(f64::NAN, 0.1),
            Err(OscillatorError::CouplingNotFinite(_))
        ));
        assert!(matches!(
            osc.update_phase(0.0, 0.0),
            Err(OscillatorError::TimeStepNotPositive(_))
        ));
        assert!(matches!(
            osc.update_phase(0.0, -0.1),
            Err(OscillatorError::TimeStepNotPositive(_))
        ));
        assert!(matches!(
            osc.update_phase(0.0, f64::INFINITY),
            Err(OscillatorError::TimeStepNotPositive(_))
        ));

        assert_eq!(osc.phase(), 1.0);
    }
}
