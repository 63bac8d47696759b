//! Acceleration terms driving the RK4 kernel
//!
//! Defines the `Acceleration` trait and the two concrete right-hand sides
//! used by the scenarios: central inverse-square gravity and the forced
//! damped pendulum

use crate::simulation::states::{State, NVec2};

/// Trait for acceleration sources evaluated at time `t` and state `s`
/// Implementations must be pure: same inputs, same output, no side effects
pub trait Acceleration {
    fn acceleration(&self, t: f64, s: &State) -> NVec2;
}

/// Inverse-square gravity of a point-mass primary fixed at the origin
/// a = -mu * x / |x|^3
///
/// Undefined at the origin: |x| = 0 divides by zero and the result is
/// non-finite. Callers treat that as a fatal precondition violation,
/// not a recoverable error.
pub struct CentralGravity {
    pub mu: f64, // gravitational parameter G*M (m^3/s^2)
}

impl Acceleration for CentralGravity {
    fn acceleration(&self, _t: f64, s: &State) -> NVec2 {
        // |x| and 1 / |x|^3, no softening: the two-body problem is exact
        let r = s.x.norm();
        let inv_r3 = (r * r * r).recip();

        // a = -mu * x / |x|^3
        -self.mu * inv_r3 * s.x
    }
}

/// Forced damped pendulum as a 1-DOF second-order system:
/// theta'' = -b theta' - (g/L) sin(theta) + A cos(omega_d t)
///
/// The angle rides in the x-component of the state (position = theta,
/// velocity = theta'); the y-component stays zero for the whole run.
pub struct ForcedDampedPendulum {
    pub g: f64, // gravitational acceleration (m/s^2)
    pub length: f64, // pendulum length (m)
    pub damping: f64, // damping coefficient b
    pub amplitude: f64, // drive amplitude A
    pub drive_frequency: f64, // drive angular frequency omega_d
}

impl Acceleration for ForcedDampedPendulum {
    fn acceleration(&self, t: f64, s: &State) -> NVec2 {
        let theta = s.x.x;
        let omega = s.v.x;
        let accel = -self.damping * omega - (self.g / self.length) * theta.sin()
            + self.amplitude * (self.drive_frequency * t).cos();
        NVec2::new(accel, 0.0)
    }
}
