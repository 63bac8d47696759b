//! Core state types for the two-body simulation.
//!
//! Defines the kinematic state of the massless secondary, the attracting
//! primary, and the trajectory produced by one integration run:
//! - `State`       position/velocity pair using `NVec2`
//! - `CentralBody` gravitational parameter and radius of the primary
//! - `Trajectory`  ordered sequence of states, one per time step

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Instantaneous kinematic state of the test body.
/// Produced as a fresh value by each integration step, never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub x: NVec2, // position (m)
    pub v: NVec2, // velocity (m/s)
}

impl State {
    pub fn new(x: NVec2, v: NVec2) -> Self {
        Self { x, v }
    }

    /// All four components are finite. A trajectory that grazes the
    /// singularity produces non-finite states, which the driver must reject.
    pub fn is_finite(&self) -> bool {
        self.x.x.is_finite() && self.x.y.is_finite() && self.v.x.is_finite() && self.v.y.is_finite()
    }

    /// Distance from the origin, where the central body sits.
    pub fn radius(&self) -> f64 {
        self.x.norm()
    }
}

/// The dominant mass, fixed at the origin. Only the product G*M and the
/// surface radius matter to the integrator.
#[derive(Debug, Clone, Copy)]
pub struct CentralBody {
    pub mu: f64, // gravitational parameter G*M (m^3/s^2)
    pub radius: f64, // surface radius (m)
}

/// Ordered sequence of states, one per step, including the initial state.
/// Owned by the calling driver; generated once and consumed for rendering.
#[derive(Debug, Clone)]
pub struct Trajectory {
    pub states: Vec<State>, // chronological order
    pub dt: f64, // fixed step used to produce the sequence
    pub impacted: bool, // integration halted below the central body's surface
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Positions only, in chronological order. This is what the renderer consumes.
    pub fn positions(&self) -> Vec<NVec2> {
        self.states.iter().map(|s| s.x).collect()
    }

    /// Elapsed time of the i-th state.
    pub fn time_at(&self, i: usize) -> f64 {
        i as f64 * self.dt
    }
}
