//! Stepping many independent actuators at once.
//!
//! Actuators share no data, so a bank of them (one per joint, say) can be
//! stepped in parallel without any ordering between instances. A single step
//! is a handful of flops, so this is a convenience for driving a bank with
//! one call and per-actuator results, not a speed-up; small banks are
//! usually faster stepped in a plain loop.

use rayon::prelude::*;

use crate::simulation::actuator::Actuator;
use crate::simulation::error::ActuatorError;

/// Steps `actuators[i]` with `predictions[i]` for every `i`, in parallel.
///
/// The returned vector holds one result per actuator, in order. A failed
/// actuator is left unchanged and does not affect the others.
///
/// # Errors
///
/// Returns [`ActuatorError::BankSize`] without stepping anything if the two
/// lengths differ.
pub fn step_all<A>(
    actuators: &mut [A],
    predictions: Vec<A::Prediction>,
) -> Result<Vec<Result<(), ActuatorError>>, ActuatorError>
where
    A: Actuator + Send,
    A::Prediction: Send,
{
    if actuators.len() != predictions.len() {
        return Err(ActuatorError::BankSize {
            actuators: actuators.len(),
            predictions: predictions.len(),
        });
    }

    Ok(actuators
        .par_iter_mut()
        .zip(predictions)
        .map(|(actuator, prediction)| actuator.step(prediction))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::distribution::Gaussian;
    use crate::simulation::muscle::Muscle;

    #[test]
    fn test_mismatched_lengths_step_nothing() {
        let mut bank = vec![Muscle::new(0.1).unwrap(), Muscle::new(0.2).unwrap()];
        let result = step_all(&mut bank, vec![Gaussian::new(0.9, 1.0)]);
        assert!(matches!(
            result,
            Err(ActuatorError::BankSize {
                actuators: 2,
                predictions: 1
            })
        ));
        assert!((bank[0].state() - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_bank_is_fine() {
        let mut bank: Vec<Muscle> = Vec::new();
        let results = step_all(&mut bank, Vec::new()).unwrap();
        assert!(results.is_empty());
    }
}
