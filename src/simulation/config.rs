//! Fixed plant configuration.
//!
//! [`ActuatorParams`] is validated once at construction and never changes
//! afterwards; [`Actuator::params`](crate::simulation::Actuator::params) hands
//! out a copy of it.

use serde::{Deserialize, Serialize};

use crate::simulation::error::ConfigError;
use crate::simulation::params::{
    DEFAULT_ACTION_LIMS, DEFAULT_DT, DEFAULT_MNOISE_SD, DEFAULT_STATE_LIMS,
};

/// Closed interval `[lo, hi]`.
///
/// Serialized as a two-element array so TOML reads `state_lims = [0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Limits {
    pub lo: f64,
    pub hi: f64,
}

impl Limits {
    #[must_use]
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Whether `value` lies inside the interval (bounds included).
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.lo..=self.hi).contains(&value)
    }

    /// Saturates `value` at the nearer bound.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.lo, self.hi)
    }

    fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        if !self.lo.is_finite() || !self.hi.is_finite() || self.lo >= self.hi {
            return Err(ConfigError::InvalidLimits {
                name,
                lo: self.lo,
                hi: self.hi,
            });
        }
        Ok(())
    }
}

impl From<(f64, f64)> for Limits {
    fn from((lo, hi): (f64, f64)) -> Self {
        Self { lo, hi }
    }
}

impl From<[f64; 2]> for Limits {
    fn from([lo, hi]: [f64; 2]) -> Self {
        Self { lo, hi }
    }
}

impl From<Limits> for [f64; 2] {
    fn from(limits: Limits) -> Self {
        [limits.lo, limits.hi]
    }
}

/// The four immutable configuration values of an actuator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActuatorParams {
    /// Measurement-noise standard deviation. Sensations have variance
    /// `mnoise_sd²`.
    pub mnoise_sd: f64,
    /// Interval the state is clamped into after every update.
    pub state_lims: Limits,
    /// Action bounds, carried for the surrounding simulation.
    pub action_lims: Limits,
    /// Step size of the update law.
    pub dt: f64,
}

impl Default for ActuatorParams {
    fn default() -> Self {
        Self {
            mnoise_sd: DEFAULT_MNOISE_SD,
            state_lims: DEFAULT_STATE_LIMS.into(),
            action_lims: DEFAULT_ACTION_LIMS.into(),
            dt: DEFAULT_DT,
        }
    }
}

impl ActuatorParams {
    #[must_use]
    pub const fn with_mnoise_sd(mut self, mnoise_sd: f64) -> Self {
        self.mnoise_sd = mnoise_sd;
        self
    }

    #[must_use]
    pub const fn with_state_lims(mut self, lo: f64, hi: f64) -> Self {
        self.state_lims = Limits::new(lo, hi);
        self
    }

    #[must_use]
    pub const fn with_action_lims(mut self, lo: f64, hi: f64) -> Self {
        self.action_lims = Limits::new(lo, hi);
        self
    }

    #[must_use]
    pub const fn with_dt(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    /// Checks every field.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLimits`] for empty, inverted or
    /// non-finite intervals, [`ConfigError::InvalidNoise`] if `mnoise_sd` is
    /// negative or non-finite, and [`ConfigError::InvalidTimestep`] if `dt` is
    /// not a finite positive number.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.state_lims.validate("state_lims")?;
        self.action_lims.validate("action_lims")?;
        if !self.mnoise_sd.is_finite() || self.mnoise_sd < 0.0 {
            return Err(ConfigError::InvalidNoise(self.mnoise_sd));
        }
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(ConfigError::InvalidTimestep(self.dt));
        }
        Ok(())
    }

    /// Parses and validates parameters from a TOML document. Missing keys fall
    /// back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] on malformed input, or any error
    /// [`validate`](Self::validate) reports.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let params: Self = toml::from_str(source)?;
        params.validate()?;
        Ok(params)
    }
}
