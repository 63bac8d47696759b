//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`ScenarioConfig`] – top-level wrapper: output image path + scenario kind
//! - [`ScenarioKind`]   – internally tagged enum selecting the simulation
//! - per-kind configs   – [`OrbitConfig`], [`PendulumConfig`], ...
//!
//! # YAML format
//! An example orbital scenario YAML matching these types:
//!
//! ```yaml
//! output: images/orbit_leo.png
//! scenario:
//!   kind: orbit
//!   mu: 3.986004418e14      # gravitational parameter G*M (m^3/s^2)
//!   radius: 6.371e6         # central body surface radius (m)
//!   x: [ 6.871e6, 0.0 ]     # initial position (m)
//!   v: [ 0.0, 7500.0 ]      # initial velocity (m/s)
//!   dt: 1.0                 # fixed time step (s)
//!   total_time: 6000.0      # total simulated time (s)
//! ```
//!
//! The runtime scenario builder maps these into the internal simulation
//! types and validates the physical parameters.

use serde::Deserialize;

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub output: String, // path of the PNG written by the run
    pub scenario: ScenarioKind, // which simulation to run, plus its parameters
}

/// Which simulation a scenario file describes.
/// Selected by the `kind` field alongside the kind-specific parameters.
#[derive(Deserialize, Debug)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScenarioKind {
    Orbit(OrbitConfig), // RK4 payload trajectory around a central body
    Pendulum(PendulumConfig), // forced damped pendulum, angle vs time
    Projectile(ProjectileConfig), // closed-form range vs launch angle
    CosmicVelocities(CosmicVelocitiesConfig), // per-planet orbital/escape speeds
    Kepler(KeplerConfig), // T^2 vs r^3 sweep
}

/// Two-body RK4 trajectory parameters.
#[derive(Deserialize, Debug, Clone)]
pub struct OrbitConfig {
    pub mu: f64, // gravitational parameter G*M (m^3/s^2)
    pub radius: f64, // central body surface radius (m)
    pub x: Vec<f64>, // initial position [x, y] (m)
    pub v: Vec<f64>, // initial velocity [vx, vy] (m/s)
    pub dt: f64, // fixed time step (s)
    pub total_time: f64, // total simulated time (s)
}

/// Forced damped pendulum parameters.
#[derive(Deserialize, Debug, Clone)]
pub struct PendulumConfig {
    pub g: f64, // gravitational acceleration (m/s^2)
    pub length: f64, // pendulum length (m)
    pub damping: f64, // damping coefficient b
    pub amplitude: f64, // drive amplitude A
    pub drive_frequency: f64, // drive angular frequency omega_d (rad/s)
    pub theta0: f64, // initial angle (rad)
    pub omega0: f64, // initial angular velocity (rad/s)
    pub dt: f64, // fixed time step (s)
    pub total_time: f64, // total simulated time (s)
}

/// Projectile range curve parameters.
#[derive(Deserialize, Debug, Clone)]
pub struct ProjectileConfig {
    pub v0: f64, // launch speed (m/s)
    pub g: f64, // gravitational acceleration (m/s^2)
    pub samples: usize, // number of launch angles sampled over [0, 90] degrees
}

/// One planet row for the cosmic velocity chart.
#[derive(Deserialize, Debug, Clone)]
pub struct PlanetConfig {
    pub name: String, // label, carried through for logging
    pub mass: f64, // planet mass (kg)
    pub radius: f64, // planet radius (m)
}

/// Cosmic velocity bar chart parameters.
#[derive(Deserialize, Debug, Clone)]
pub struct CosmicVelocitiesConfig {
    pub gravitational_constant: f64, // G (m^3 kg^-1 s^-2)
    pub planets: Vec<PlanetConfig>,
}

/// Kepler third-law sweep parameters.
#[derive(Deserialize, Debug, Clone)]
pub struct KeplerConfig {
    pub mu: f64, // gravitational parameter G*M (m^3/s^2)
    pub r_min: f64, // smallest orbital radius in the sweep (m)
    pub r_max: f64, // largest orbital radius in the sweep (m)
    pub samples: usize, // number of radii sampled
}
