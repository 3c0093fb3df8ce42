//! Plant defaults and demo tuning constants.

/// Default bounding interval for the actuator state.
pub const DEFAULT_STATE_LIMS: (f64, f64) = (0.0, 1.0);
/// Default bounding interval for actions.
pub const DEFAULT_ACTION_LIMS: (f64, f64) = (-1.0, 1.0);
/// Default measurement-noise standard deviation.
pub const DEFAULT_MNOISE_SD: f64 = 1.0;
/// Default integration step.
pub const DEFAULT_DT: f64 = 1.0;

/// Range every initial state must lie in, regardless of `state_lims`.
pub const INITIAL_STATE_RANGE: (f64, f64) = (0.0, 1.0);

/// Prior prediction mean for a freshly built single muscle.
pub const MUSCLE_PRIOR_MEAN: f64 = 0.0;
/// Prior prediction mean for each side of a freshly built antagonist pair.
pub const PAIR_PRIOR_MEAN: f64 = 0.5;
/// Prior prediction standard deviation (unit variance).
pub const PRIOR_SD: f64 = 1.0;
/// Balanced starting posture of an antagonist pair.
pub const PAIR_INITIAL_STATES: [f64; 2] = [0.5, 0.5];

// Demo harness tuning
pub const DEMO_SETPOINT: f64 = 0.7;
pub const DEMO_SETPOINT_STEP: f64 = 0.05;
pub const DEMO_PREDICTION_VAR: f64 = 4.0;
pub const DEMO_VAR_FACTOR: f64 = 1.5;
pub const DEMO_MIN_VAR: f64 = 1.0;
pub const DEMO_MAX_VAR: f64 = 100.0;
pub const DEMO_MNOISE_SD: f64 = 0.05;
pub const DEMO_TICK_MS: u64 = 100;
pub const DEMO_SEED: u64 = 7;
pub const DEMO_INITIAL_STATE: f64 = 0.2;
pub const DEMO_LOG_FILE: &str = "muscle_plant.log";
