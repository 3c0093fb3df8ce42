//! One scalar degree of freedom: state plus its latest prediction and
//! sensation. A [`Muscle`](super::Muscle) owns one channel; an
//! [`AntagonistPair`](super::AntagonistPair) owns two coupled ones.

use tracing::{debug, trace};

use crate::simulation::config::Limits;
use crate::simulation::distribution::{precision_weighted_error, Moments};
use crate::simulation::error::{ActuatorError, DomainError};
use crate::simulation::params::{INITIAL_STATE_RANGE, PRIOR_SD};

/// Rejects initial states outside `[0, 1]` (NaN included).
pub(crate) fn check_initial_state(value: f64) -> Result<(), ActuatorError> {
    let (lo, hi) = INITIAL_STATE_RANGE;
    if (lo..=hi).contains(&value) {
        Ok(())
    } else {
        debug!(value, "initial state rejected");
        Err(ActuatorError::InvalidState { value })
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Channel<D> {
    pub(crate) state: f64,
    pub(crate) prediction: D,
    pub(crate) sensation: D,
}

impl<D: Moments> Channel<D> {
    /// Caller must have validated `state`.
    pub(crate) fn new(state: f64, prior_mean: f64, mnoise_sd: f64) -> Self {
        Self {
            state,
            prediction: D::from_mean_sd(prior_mean, PRIOR_SD),
            sensation: D::from_mean_sd(state, mnoise_sd),
        }
    }

    /// `dt · (m - state) / v` for this channel. Pure; never mutates.
    pub(crate) fn drive(&self, prediction: &D, dt: f64) -> Result<f64, DomainError> {
        let error = precision_weighted_error(prediction, self.state).inspect_err(|err| {
            debug!(%err, state = self.state, "prediction rejected");
        })?;
        Ok(dt * error)
    }

    /// Clamps `candidate` into `limits` and stores it with the prediction that
    /// produced it.
    ///
    /// A NaN candidate only comes from infinities cancelling (two saturating
    /// drives in the coupled law, or an infinite mean under infinite
    /// variance); the state then holds.
    pub(crate) fn commit(&mut self, candidate: f64, limits: Limits, prediction: D) {
        let next = if candidate.is_nan() {
            debug!(state = self.state, "opposing saturated drives cancelled");
            self.state
        } else {
            if !limits.contains(candidate) {
                debug!(candidate, lo = limits.lo, hi = limits.hi, "state saturated at limit");
            }
            limits.clamp(candidate)
        };
        trace!(from = self.state, to = next, "state committed");
        self.state = next;
        self.prediction = prediction;
    }

    pub(crate) fn emit(&mut self, mnoise_sd: f64) {
        self.sensation = D::from_mean_sd(self.state, mnoise_sd);
        trace!(mean = self.state, sd = mnoise_sd, "sensation emitted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::distribution::Gaussian;
    use approx::assert_relative_eq;

    const UNIT: Limits = Limits::new(0.0, 1.0);

    #[test]
    fn test_initial_state_bounds_are_inclusive() {
        assert!(check_initial_state(0.0).is_ok());
        assert!(check_initial_state(1.0).is_ok());
        assert!(check_initial_state(-0.1).is_err());
        assert!(check_initial_state(f64::NAN).is_err());
    }

    #[test]
    fn test_new_channel_senses_its_state() {
        let channel: Channel<Gaussian> = Channel::new(0.3, 0.0, 0.5);
        assert_relative_eq!(channel.sensation.mean(), 0.3);
        assert_relative_eq!(channel.sensation.variance(), 0.25);
        assert_relative_eq!(channel.prediction.variance(), 1.0);
    }

    #[test]
    fn test_drive_scales_with_dt() {
        let channel: Channel<Gaussian> = Channel::new(0.2, 0.0, 1.0);
        let p = Gaussian::new(0.6, 1.0);
        assert_relative_eq!(channel.drive(&p, 0.5).unwrap(), 0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_commit_clamps_and_stores_prediction() {
        let mut channel: Channel<Gaussian> = Channel::new(0.2, 0.0, 1.0);
        let p = Gaussian::new(9.0, 2.0);
        channel.commit(4.0, UNIT, p);
        assert_relative_eq!(channel.state, 1.0);
        assert_eq!(channel.prediction, p);
    }

    #[test]
    fn test_nan_candidate_holds_state() {
        let mut channel: Channel<Gaussian> = Channel::new(0.4, 0.0, 1.0);
        channel.commit(f64::NAN, UNIT, Gaussian::standard());
        assert_relative_eq!(channel.state, 0.4);
    }
}
