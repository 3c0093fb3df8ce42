//! Distribution capability consumed and produced by the plant.
//!
//! The plant only needs the first two moments of a belief, so it depends on
//! the [`Moments`] trait rather than on any inference library. [`Gaussian`] is
//! the bundled implementation.

use rand::Rng;
use rand_distr::{Distribution, Normal, NormalError};
use serde::{Deserialize, Serialize};

use crate::simulation::error::{ActuatorError, DomainError};

/// A belief summarized by its mean and variance.
///
/// The spread parameter of [`from_mean_sd`](Self::from_mean_sd) is a standard
/// deviation: `from_mean_sd(m, sd).variance() == sd * sd`.
pub trait Moments: Clone {
    fn mean(&self) -> f64;
    fn variance(&self) -> f64;
    fn from_mean_sd(mean: f64, sd: f64) -> Self;
}

/// Gaussian moments `N(mean, sd²)`.
///
/// Construction does not validate; the plant rejects unusable predictions in
/// [`precision_weighted_error`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gaussian {
    pub mean: f64,
    pub sd: f64,
}

impl Gaussian {
    #[must_use]
    pub const fn new(mean: f64, sd: f64) -> Self {
        Self { mean, sd }
    }

    /// Builds from a variance. Negative variances keep their sign so they are
    /// still rejected downstream instead of turning into a valid `sd`.
    #[must_use]
    pub fn from_mean_variance(mean: f64, variance: f64) -> Self {
        Self {
            mean,
            sd: variance.signum() * variance.abs().sqrt(),
        }
    }

    /// Standard normal `N(0, 1)`.
    #[must_use]
    pub const fn standard() -> Self {
        Self { mean: 0.0, sd: 1.0 }
    }

    /// Draws one value.
    ///
    /// # Errors
    ///
    /// Returns [`ActuatorError::Sampling`] if `sd` is negative or non-finite.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64, ActuatorError> {
        // `Normal::new` only checks finiteness; a negative spread would be
        // accepted and mirror the draws.
        if self.sd.is_nan() || self.sd < 0.0 {
            return Err(NormalError::BadVariance.into());
        }
        let normal = Normal::new(self.mean, self.sd)?;
        Ok(normal.sample(rng))
    }
}

impl Moments for Gaussian {
    fn mean(&self) -> f64 {
        self.mean
    }

    fn variance(&self) -> f64 {
        self.sd.signum() * self.sd * self.sd
    }

    fn from_mean_sd(mean: f64, sd: f64) -> Self {
        Self::new(mean, sd)
    }
}

/// Precision-weighted prediction error `(m - state) / v`.
///
/// # Errors
///
/// Returns [`DomainError::NonPositiveVariance`] unless `v > 0` (NaN included)
/// and [`DomainError::NanMean`] if `m` is NaN. An infinite `m` yields an
/// infinite error, which the caller's clamp saturates at a limit.
pub fn precision_weighted_error<D: Moments>(
    prediction: &D,
    state: f64,
) -> Result<f64, DomainError> {
    let variance = prediction.variance();
    if variance.is_nan() || variance <= 0.0 {
        return Err(DomainError::NonPositiveVariance { variance });
    }
    let mean = prediction.mean();
    if mean.is_nan() {
        return Err(DomainError::NanMean);
    }
    Ok((mean - state) / variance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_spread_parameter_is_standard_deviation() {
        let g = Gaussian::from_mean_sd(0.3, 0.5);
        assert_relative_eq!(g.variance(), 0.25);
        assert_relative_eq!(g.mean(), 0.3);
    }

    #[test]
    fn test_from_mean_variance_round_trips_variance() {
        let g = Gaussian::from_mean_variance(0.0, 2.0);
        assert_relative_eq!(g.variance(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_negative_variance_stays_negative() {
        let g = Gaussian::from_mean_variance(0.0, -4.0);
        assert!(g.variance() < 0.0);
    }

    #[test]
    fn test_standard_has_unit_variance() {
        let g = Gaussian::standard();
        assert_relative_eq!(g.mean(), 0.0);
        assert_relative_eq!(g.variance(), 1.0);
    }

    #[test]
    fn test_error_is_scaled_by_precision() {
        let tight = Gaussian::from_mean_variance(1.0, 0.5);
        let loose = Gaussian::from_mean_variance(1.0, 2.0);
        let e_tight = precision_weighted_error(&tight, 0.0).unwrap();
        let e_loose = precision_weighted_error(&loose, 0.0).unwrap();
        assert_relative_eq!(e_tight, 2.0, epsilon = 1e-12);
        assert_relative_eq!(e_loose, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_negative_and_nan_variance_rejected() {
        for variance in [0.0, -1.0, f64::NAN] {
            let p = Gaussian::from_mean_variance(0.5, variance);
            assert!(
                matches!(
                    precision_weighted_error(&p, 0.5),
                    Err(DomainError::NonPositiveVariance { .. })
                ),
                "variance {variance} should be rejected"
            );
        }
    }

    #[test]
    fn test_nan_mean_rejected() {
        let p = Gaussian::new(f64::NAN, 1.0);
        assert_eq!(
            precision_weighted_error(&p, 0.5),
            Err(DomainError::NanMean)
        );
    }

    #[test]
    fn test_infinite_mean_gives_infinite_error() {
        let up = Gaussian::new(f64::INFINITY, 1.0);
        let down = Gaussian::new(f64::NEG_INFINITY, 1.0);
        assert_eq!(precision_weighted_error(&up, 0.5), Ok(f64::INFINITY));
        assert_eq!(
            precision_weighted_error(&down, 0.5),
            Ok(f64::NEG_INFINITY)
        );
    }

    #[test]
    fn test_sampling_is_reproducible_with_seed() {
        let g = Gaussian::new(0.5, 0.1);
        let a = g.sample(&mut ChaCha8Rng::seed_from_u64(42)).unwrap();
        let b = g.sample(&mut ChaCha8Rng::seed_from_u64(42)).unwrap();
        assert_relative_eq!(a, b);
    }

    #[test]
    fn test_zero_spread_samples_the_mean() {
        let g = Gaussian::new(0.25, 0.0);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_relative_eq!(g.sample(&mut rng).unwrap(), 0.25);
    }

    #[test]
    fn test_negative_spread_cannot_be_sampled() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for sd in [-1.0, -f64::MIN_POSITIVE, f64::NAN, f64::INFINITY] {
            let g = Gaussian::new(0.0, sd);
            assert!(
                matches!(g.sample(&mut rng), Err(ActuatorError::Sampling(_))),
                "sd = {sd} should not be sampled"
            );
        }
    }
}
