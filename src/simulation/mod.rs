//! Precision-weighted actuator plant.
//!
//! A plant receives a prediction (the desired state, as a distribution), moves
//! its state toward the predicted mean with gain `Δt / variance`, clamps it
//! into its limits, and emits a sensation centered on the new state:
//!
//! ```text
//! prediction ──update──▶ state ──emit──▶ sensation ──▶ (external estimator)
//! ```

pub mod actuator;
pub mod antagonist;
pub mod bank;
mod channel;
pub mod config;
pub mod distribution;
pub mod error;
pub mod muscle;
pub mod params;

pub use actuator::Actuator;
pub use antagonist::AntagonistPair;
pub use config::{ActuatorParams, Limits};
pub use distribution::{precision_weighted_error, Gaussian, Moments};
pub use error::{ActuatorError, ConfigError, DomainError};
pub use muscle::Muscle;
