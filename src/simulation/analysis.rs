//! Closed-form physics quantities
//!
//! Conserved quantities and reference speeds for the two-body problem, plus
//! the closed-form curves the non-orbital scenarios plot (projectile range,
//! Kepler periods). All take explicit parameters; no process-wide constants.

use std::f64::consts::PI;

use crate::simulation::states::{State, Trajectory};

/// Specific orbital energy 0.5 |v|^2 - mu / |r| (J/kg).
/// Conserved along an ideal two-body trajectory; its drift under RK4 shrinks
/// as dt^4 and is the main correctness probe in the tests.
pub fn specific_orbital_energy(state: &State, mu: f64) -> f64 {
    0.5 * state.v.norm_squared() - mu / state.x.norm()
}

/// First cosmic velocity: circular orbit speed sqrt(mu / r) at radius r.
pub fn circular_speed(mu: f64, r: f64) -> f64 {
    (mu / r).sqrt()
}

/// Second cosmic velocity: escape speed sqrt(2 mu / r) at radius r.
pub fn escape_speed(mu: f64, r: f64) -> f64 {
    (2.0 * mu / r).sqrt()
}

/// Kepler's third law: period T = 2 pi sqrt(r^3 / mu) of a circular orbit.
pub fn orbital_period(mu: f64, r: f64) -> f64 {
    2.0 * PI * (r * r * r / mu).sqrt()
}

/// Flat-ground projectile range v0^2 sin(2 theta) / g for a launch angle in
/// degrees. Exactly zero range at 90 degrees.
pub fn projectile_range(v0: f64, g: f64, angle_deg: f64) -> f64 {
    if (angle_deg - 90.0).abs() < 1e-12 {
        return 0.0;
    }
    v0 * v0 * (2.0 * angle_deg.to_radians()).sin() / g
}

/// Minimum and maximum distance from the origin over a trajectory.
/// `None` for an empty trajectory.
pub fn radius_bounds(trajectory: &Trajectory) -> Option<(f64, f64)> {
    trajectory
        .states
        .iter()
        .map(|s| s.radius())
        .fold(None, |acc, r| match acc {
            None => Some((r, r)),
            Some((lo, hi)) => Some((lo.min(r), hi.max(r))),
        })
}
