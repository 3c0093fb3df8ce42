//! The control protocol shared by every plant variant.

use crate::simulation::config::ActuatorParams;
use crate::simulation::error::ActuatorError;

/// A plant driven by predictions and reporting sensations.
///
/// One cycle of a closed loop is `update` (move toward the prediction) then
/// `emit` (re-center the sensation on the new state). Both take `&mut self`,
/// so nothing can observe the plant between the two halves of a
/// [`step`](Self::step).
pub trait Actuator {
    /// Physical state: `f64` for a single muscle, `[f64; 2]` for a pair.
    type State: Copy;
    /// What one update consumes: one distribution per degree of freedom.
    type Prediction;

    /// Moves the state toward `prediction` and stores the prediction.
    ///
    /// # Errors
    ///
    /// Returns [`ActuatorError::Domain`] if any prediction has a non-positive
    /// variance or a NaN mean. The plant is left untouched.
    fn update(&mut self, prediction: Self::Prediction) -> Result<(), ActuatorError>;

    /// Replaces the sensation(s) with a measurement of the current state.
    fn emit(&mut self);

    /// `update` followed by `emit`.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`update`](Self::update); `emit` is skipped
    /// in that case.
    fn step(&mut self, prediction: Self::Prediction) -> Result<(), ActuatorError> {
        self.update(prediction)?;
        self.emit();
        Ok(())
    }

    /// Snapshot of the immutable configuration.
    fn params(&self) -> ActuatorParams;

    /// Current physical state, always within `state_lims` after an update.
    fn state(&self) -> Self::State;
}
