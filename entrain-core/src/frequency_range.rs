use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A validated band of intrinsic frequencies.
///
/// Both bounds must be finite and `min < max`. A `FrequencyRange` is required
/// wherever oscillator frequencies are drawn, so the check happens once at
/// construction rather than at every use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrequencyRange {
    min: f64,
    max: f64,
}

/// An error returned when constructing an invalid [`FrequencyRange`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FrequencyRangeError {
    #[error("frequency bounds must be finite, got ({min}, {max})")]
    NotFinite { min: f64, max: f64 },
    #[error("frequency range min must be less than max, got ({min}, {max})")]
    Empty { min: f64, max: f64 },
}

impl FrequencyRange {
    /// Creates a frequency band from finite bounds with `min < max`.
    ///
    /// # Errors
    ///
    /// - [`FrequencyRangeError::NotFinite`] if either bound is NaN or infinite.
    /// - [`FrequencyRangeError::Empty`] if `min >= max`.
    pub fn new(min: f64, max: f64) -> Result<Self, FrequencyRangeError> {
        if !(min.is_finite() && max.is_finite()) {
            return Err(FrequencyRangeError::NotFinite { min, max });
        }
        if min >= max {
            return Err(FrequencyRangeError::Empty { min, max });
        }
        Ok(Self { min, max })
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Draws a frequency uniformly from `[min, max]`.
    pub fn sample(&self, rng: &mut impl Rng) -> f64 {
        rng.gen_range(self.min..=self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    #[allow(clippy::float_cmp)]
    fn valid_bounds_round_trip() {
        let range = FrequencyRange::new(-0.5, 1.5).unwrap();
        assert_eq!(range.min(), -0.5);
        assert_eq!(range.max(), 1.5);
    }

    #[test]
    fn empty_or_inverted_bounds_fail() {
        assert!(matches!(
            FrequencyRange::new(1.0, 1.0),
            Err(FrequencyRangeError::Empty { .. })
        ));
        assert!(matches!(
            FrequencyRange::new(2.0, -2.0),
            Err(FrequencyRangeError::Empty { .. })
        ));
    }

    #[test]
    fn non_finite_bounds_fail() {
        assert!(matches!(
            FrequencyRange::new(f64::NAN, 1.0),
            Err(FrequencyRangeError::NotFinite { .. })
        ));
        assert!(matches!(
            FrequencyRange::new(0.0, f64::INFINITY),
            Err(FrequencyRangeError::NotFinite { .. })
        ));
    }

    #[test]
    fn samples_stay_inside_the_band() {
        let range = FrequencyRange::new(0.99, 1.01).unwrap();
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..1000 {
            let f = range.sample(&mut rng);
            assert!((0.99..=1.01).contains(&f));
        }
    }
}
