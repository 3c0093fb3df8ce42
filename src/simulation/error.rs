//! Error types for plant construction, configuration and updates.

use rand_distr::NormalError;
use thiserror::Error;

/// Top-level error type for the plant.
#[derive(Debug, Error)]
pub enum ActuatorError {
    #[error("initial state {value} lies outside [0, 1]")]
    InvalidState { value: f64 },

    #[error("prediction rejected: {0}")]
    Domain(#[from] DomainError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("cannot sample sensation: {0}")]
    Sampling(#[from] NormalError),

    #[error("bank size mismatch: {actuators} actuators, {predictions} predictions")]
    BankSize { actuators: usize, predictions: usize },
}

/// Prediction moments that the update law cannot consume.
///
/// Copy + `PartialEq` so tests can compare the exact rejected value.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    #[error("variance must be > 0, got {variance}")]
    NonPositiveVariance { variance: f64 },

    #[error("mean must not be NaN")]
    NanMean,
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must satisfy lo < hi with finite bounds, got [{lo}, {hi}]")]
    InvalidLimits { name: &'static str, lo: f64, hi: f64 },

    #[error("mnoise_sd must be finite and >= 0, got {0}")]
    InvalidNoise(f64),

    #[error("dt must be finite and > 0, got {0}")]
    InvalidTimestep(f64),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}
