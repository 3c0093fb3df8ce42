//! Antagonist pair: two opposing muscles with reciprocal inhibition.
//!
//! Each side is pulled toward its own predicted mean and held back by the
//! opposing side's pull:
//!
//! ```text
//! d₁ = Δt · (m₁ − s₁) / v₁        d₂ = Δt · (m₂ − s₂) / v₂
//! s₁ ← clamp(s₁ + d₁/2 − d₂/2, state_lims)
//! s₂ ← clamp(s₂ + d₂/2 − d₁/2, state_lims)
//! ```
//!
//! Equal pulls in the same direction cancel (co-contraction holds posture);
//! opposing pulls add up and move the sides apart.

use rand::Rng;

use crate::simulation::actuator::Actuator;
use crate::simulation::channel::{check_initial_state, Channel};
use crate::simulation::config::ActuatorParams;
use crate::simulation::distribution::{Gaussian, Moments};
use crate::simulation::error::ActuatorError;
use crate::simulation::params::{PAIR_INITIAL_STATES, PAIR_PRIOR_MEAN};

/// Two coupled muscles sharing one noise level, step size and set of limits.
///
/// Index 0 is one side (e.g. the flexor), index 1 the opposing side.
#[derive(Debug, Clone)]
pub struct AntagonistPair<D = Gaussian> {
    channels: [Channel<D>; 2],
    params: ActuatorParams,
}

impl AntagonistPair {
    /// Creates a pair with default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ActuatorError::InvalidState`] if either initial state is
    /// outside `[0, 1]`.
    pub fn new(initial_states: [f64; 2]) -> Result<Self, ActuatorError> {
        Self::with_params(initial_states, ActuatorParams::default())
    }

    /// Creates a pair with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ActuatorError::InvalidState`] for an out-of-range initial
    /// state or [`ActuatorError::Config`] for invalid parameters.
    pub fn with_params(
        initial_states: [f64; 2],
        params: ActuatorParams,
    ) -> Result<Self, ActuatorError> {
        Self::with_moments(initial_states, params)
    }

    /// Samples one noisy reading per side.
    ///
    /// # Errors
    ///
    /// Returns [`ActuatorError::Sampling`] if a sensation spread is unusable.
    pub fn read<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<[f64; 2], ActuatorError> {
        let [a, b] = &self.channels;
        Ok([a.sensation.sample(rng)?, b.sensation.sample(rng)?])
    }
}

impl Default for AntagonistPair {
    /// Balanced posture `[0.5, 0.5]` with default configuration.
    fn default() -> Self {
        let params = ActuatorParams::default();
        Self {
            channels: PAIR_INITIAL_STATES
                .map(|state| Channel::new(state, PAIR_PRIOR_MEAN, params.mnoise_sd)),
            params,
        }
    }
}

impl<D: Moments> AntagonistPair<D> {
    /// Like [`AntagonistPair::with_params`] but for any [`Moments`]
    /// implementation.
    ///
    /// # Errors
    ///
    /// See [`AntagonistPair::with_params`].
    pub fn with_moments(
        initial_states: [f64; 2],
        params: ActuatorParams,
    ) -> Result<Self, ActuatorError> {
        for state in initial_states {
            check_initial_state(state)?;
        }
        params.validate()?;
        Ok(Self {
            channels: initial_states
                .map(|state| Channel::new(state, PAIR_PRIOR_MEAN, params.mnoise_sd)),
            params,
        })
    }

    /// Most recently received predictions, one per side.
    #[must_use]
    pub fn predictions(&self) -> [&D; 2] {
        [&self.channels[0].prediction, &self.channels[1].prediction]
    }

    /// Most recently emitted sensations, one per side.
    #[must_use]
    pub fn sensations(&self) -> [&D; 2] {
        [&self.channels[0].sensation, &self.channels[1].sensation]
    }
}

impl<D: Moments> Actuator for AntagonistPair<D> {
    type State = [f64; 2];
    type Prediction = [D; 2];

    fn update(&mut self, predictions: [D; 2]) -> Result<(), ActuatorError> {
        let dt = self.params.dt;
        let [a, b] = &self.channels;
        // Halve before subtracting so two large drives cannot overflow.
        let half_a = 0.5 * a.drive(&predictions[0], dt)?;
        let half_b = 0.5 * b.drive(&predictions[1], dt)?;
        let candidates = [a.state + half_a - half_b, b.state + half_b - half_a];

        let limits = self.params.state_lims;
        for ((channel, candidate), prediction) in
            self.channels.iter_mut().zip(candidates).zip(predictions)
        {
            channel.commit(candidate, limits, prediction);
        }
        Ok(())
    }

    fn emit(&mut self) {
        for channel in &mut self.channels {
            channel.emit(self.params.mnoise_sd);
        }
    }

    fn params(&self) -> ActuatorParams {
        self.params
    }

    fn state(&self) -> [f64; 2] {
        [self.channels[0].state, self.channels[1].state]
    }
}
