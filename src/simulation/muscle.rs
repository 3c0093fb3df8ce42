//! Single actuator: one scalar state pulled toward each prediction.

use rand::Rng;

use crate::simulation::actuator::Actuator;
use crate::simulation::channel::{check_initial_state, Channel};
use crate::simulation::config::ActuatorParams;
use crate::simulation::distribution::{Gaussian, Moments};
use crate::simulation::error::ActuatorError;
use crate::simulation::params::MUSCLE_PRIOR_MEAN;

/// A single muscle whose state follows precision-weighted prediction error.
///
/// Update law:
/// ```text
/// state ← clamp(state + Δt · (m − state) / v, state_lims)
/// ```
/// so an uncertain prediction (large `v`) pulls weakly and a confident one
/// pulls hard, possibly saturating at a limit in a single step.
#[derive(Debug, Clone)]
pub struct Muscle<D = Gaussian> {
    channel: Channel<D>,
    params: ActuatorParams,
}

impl Muscle {
    /// Creates a muscle with default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ActuatorError::InvalidState`] if `initial_state` is outside
    /// `[0, 1]`.
    pub fn new(initial_state: f64) -> Result<Self, ActuatorError> {
        Self::with_params(initial_state, ActuatorParams::default())
    }

    /// Creates a muscle with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ActuatorError::InvalidState`] for an out-of-range initial
    /// state or [`ActuatorError::Config`] for invalid parameters.
    pub fn with_params(
        initial_state: f64,
        params: ActuatorParams,
    ) -> Result<Self, ActuatorError> {
        Self::with_moments(initial_state, params)
    }

    /// Samples a concrete noisy reading from the current sensation.
    ///
    /// # Errors
    ///
    /// Returns [`ActuatorError::Sampling`] if the sensation spread is unusable.
    pub fn read<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64, ActuatorError> {
        self.channel.sensation.sample(rng)
    }
}

impl<D: Moments> Muscle<D> {
    /// Like [`Muscle::with_params`] but for any [`Moments`] implementation.
    ///
    /// # Errors
    ///
    /// See [`Muscle::with_params`].
    pub fn with_moments(
        initial_state: f64,
        params: ActuatorParams,
    ) -> Result<Self, ActuatorError> {
        check_initial_state(initial_state)?;
        params.validate()?;
        Ok(Self {
            channel: Channel::new(initial_state, MUSCLE_PRIOR_MEAN, params.mnoise_sd),
            params,
        })
    }

    /// Most recently received prediction.
    #[must_use]
    pub const fn prediction(&self) -> &D {
        &self.channel.prediction
    }

    /// Most recently emitted sensation.
    #[must_use]
    pub const fn sensation(&self) -> &D {
        &self.channel.sensation
    }
}

impl<D: Moments> Actuator for Muscle<D> {
    type State = f64;
    type Prediction = D;

    fn update(&mut self, prediction: D) -> Result<(), ActuatorError> {
        let drive = self.channel.drive(&prediction, self.params.dt)?;
        let candidate = self.channel.state + drive;
        self.channel.commit(candidate, self.params.state_lims, prediction);
        Ok(())
    }

    fn emit(&mut self) {
        self.channel.emit(self.params.mnoise_sd);
    }

    fn params(&self) -> ActuatorParams {
        self.params
    }

    fn state(&self) -> f64 {
        self.channel.state
    }
}
