//! Fixed-step RK4 integrator for second-order systems
//!
//! Provides the pure single-step kernel `rk4_step` and the batch driver
//! `integrate`, both generic over an `Acceleration` term. No adaptive
//! control, no threading: each step depends on the prior one.

use crate::errors::SimulationError;
use crate::simulation::forces::Acceleration;
use crate::simulation::params::StepParams;
use crate::simulation::states::{State, Trajectory};

/// Advance one state by one step of classical 4th-order Runge–Kutta.
///
/// Four weighted samples of (acceleration, velocity) are taken at the start
/// state, two half-step predictions, and a full-step prediction:
///
/// ```text
/// k1 = (a(t, y), v)             at the start state y
/// k2 = (a(t + dt/2, y + k1/2))  at the half-step prediction from k1
/// k3 = same pattern from k2
/// k4 = (a(t + dt, y + k3))      at the full-step prediction from k3
/// y' = y + (k1 + 2 k2 + 2 k3 + k4) / 6
/// ```
///
/// Pure function: deterministic for identical floating-point inputs, always
/// returns a fresh `State`, never mutates the input.
pub fn rk4_step<F: Acceleration>(state: &State, force: &F, t: f64, dt: f64) -> State {
    let half_dt = 0.5 * dt;

    // k1: slopes at the start state
    let k1_v = force.acceleration(t, state) * dt;
    let k1_r = state.v * dt;

    // k2: slopes at the half-step prediction from k1
    let s2 = State::new(state.x + 0.5 * k1_r, state.v + 0.5 * k1_v);
    let k2_v = force.acceleration(t + half_dt, &s2) * dt;
    let k2_r = s2.v * dt;

    // k3: slopes at the half-step prediction from k2
    let s3 = State::new(state.x + 0.5 * k2_r, state.v + 0.5 * k2_v);
    let k3_v = force.acceleration(t + half_dt, &s3) * dt;
    let k3_r = s3.v * dt;

    // k4: slopes at the full-step prediction from k3
    let s4 = State::new(state.x + k3_r, state.v + k3_v);
    let k4_v = force.acceleration(t + dt, &s4) * dt;
    let k4_r = s4.v * dt;

    // Weighted combination: y' = y + (k1 + 2 k2 + 2 k3 + k4) / 6
    State::new(
        state.x + (k1_r + 2.0 * k2_r + 2.0 * k3_r + k4_r) / 6.0,
        state.v + (k1_v + 2.0 * k2_v + 2.0 * k3_v + k4_v) / 6.0,
    )
}

/// Integrate `initial` forward for `floor(total_time / dt)` fixed steps,
/// collecting every state (the initial one included) in chronological order.
///
/// Fails fast on degenerate parameters or a non-finite initial state, and
/// aborts with `NonFinite` if a produced state blows up mid-run, so NaN
/// points never reach the renderer.
///
/// `surface` is the optional radius of the central body: when the trajectory
/// drops below it, integration halts with that state as the last point and
/// the trajectory is flagged `impacted`. Pass `None` for problems with no
/// surface (the pendulum, or a faithful rerun of the silent originals).
pub fn integrate<F: Acceleration>(
    initial: State,
    force: &F,
    params: &StepParams,
    surface: Option<f64>,
) -> Result<Trajectory, SimulationError> {
    params.validate()?;
    if !initial.is_finite() {
        return Err(SimulationError::DegenerateInput(
            "initial state has non-finite components".to_string(),
        ));
    }

    let steps = params.steps();
    let mut states = Vec::with_capacity(steps + 1);
    states.push(initial);

    let mut current = initial;
    let mut impacted = false;

    for step in 1..=steps {
        let t = (step - 1) as f64 * params.dt;
        current = rk4_step(&current, force, t, params.dt);

        if !current.is_finite() {
            return Err(SimulationError::NonFinite { step });
        }

        states.push(current);

        if let Some(radius) = surface {
            if current.radius() < radius {
                log::warn!(
                    "trajectory dropped below the surface at step {} (r = {:.3e} m), halting",
                    step,
                    current.radius()
                );
                impacted = true;
                break;
            }
        }
    }

    Ok(Trajectory {
        states,
        dt: params.dt,
        impacted,
    })
}
