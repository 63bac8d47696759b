//! Numerical parameters for one integration run
//!
//! `StepParams` holds the fixed step size and the total simulated time.
//! Both must be positive and finite; the integrator refuses to run otherwise
//! rather than silently producing NaN states.

use crate::errors::SimulationError;

#[derive(Debug, Clone, Copy)]
pub struct StepParams {
    pub dt: f64, // fixed time step (s), constant across the run
    pub total_time: f64, // total simulated time (s)
}

impl StepParams {
    /// Fail-fast check on degenerate input: non-positive or non-finite
    /// `dt`/`total_time` abort the run before any step is taken.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !(self.dt > 0.0) || !self.dt.is_finite() {
            return Err(SimulationError::DegenerateInput(format!(
                "time step must be positive and finite, got {}",
                self.dt
            )));
        }
        if !(self.total_time > 0.0) || !self.total_time.is_finite() {
            return Err(SimulationError::DegenerateInput(format!(
                "total time must be positive and finite, got {}",
                self.total_time
            )));
        }
        Ok(())
    }

    /// Number of steps in the run: floor(total_time / dt).
    pub fn steps(&self) -> usize {
        (self.total_time / self.dt).floor() as usize
    }
}
