use orbsim::simulation::analysis::{
    circular_speed, escape_speed, orbital_period, projectile_range, radius_bounds,
    specific_orbital_energy,
};
use orbsim::simulation::forces::{Acceleration, CentralGravity, ForcedDampedPendulum};
use orbsim::simulation::integrator::{integrate, rk4_step};
use orbsim::simulation::params::StepParams;
use orbsim::simulation::scenario::Scenario;
use orbsim::simulation::states::{CentralBody, NVec2, State};
use orbsim::configuration::config::ScenarioConfig;
use orbsim::errors::SimulationError;

use approx::assert_relative_eq;

/// Earth's gravitational parameter G*M (m^3/s^2)
const MU_EARTH: f64 = 3.986004418e14;

/// Earth as the central body
pub fn earth() -> CentralBody {
    CentralBody {
        mu: MU_EARTH,
        radius: 6.371e6,
    }
}

/// State on a circular orbit of radius r: position on the x-axis,
/// velocity perpendicular with |v| = sqrt(mu / r)
pub fn circular_state(mu: f64, r: f64) -> State {
    State::new(NVec2::new(r, 0.0), NVec2::new(0.0, circular_speed(mu, r)))
}

pub fn params(dt: f64, total_time: f64) -> StepParams {
    StepParams { dt, total_time }
}

// ==================================================================================
// Acceleration tests
// ==================================================================================

#[test]
fn acceleration_exact_on_axis() {
    let mu = MU_EARTH;
    let r = 7.0e6;
    let gravity = CentralGravity { mu };

    let a = gravity.acceleration(0.0, &State::new(NVec2::new(r, 0.0), NVec2::zeros()));

    assert_relative_eq!(a.x, -mu / (r * r), max_relative = 1e-14);
    assert_eq!(a.y, 0.0);
}

#[test]
fn acceleration_points_toward_origin() {
    let gravity = CentralGravity { mu: MU_EARTH };
    let s = State::new(NVec2::new(5.0e6, 3.0e6), NVec2::zeros());

    let a = gravity.acceleration(0.0, &s);

    // Attraction: acceleration opposes the position vector
    assert!(a.dot(&s.x) < 0.0, "acceleration is not toward the origin");
}

#[test]
fn acceleration_inverse_square() {
    let gravity = CentralGravity { mu: MU_EARTH };
    let a_r = gravity.acceleration(0.0, &State::new(NVec2::new(7.0e6, 0.0), NVec2::zeros()));
    let a_2r = gravity.acceleration(0.0, &State::new(NVec2::new(1.4e7, 0.0), NVec2::zeros()));

    let ratio = a_r.norm() / a_2r.norm();
    assert_relative_eq!(ratio, 4.0, max_relative = 1e-12);
}

// ==================================================================================
// RK4 integrator tests
// ==================================================================================

#[test]
fn step_is_deterministic() {
    let gravity = CentralGravity { mu: MU_EARTH };
    let s = circular_state(MU_EARTH, 7.0e6);

    let a = rk4_step(&s, &gravity, 0.0, 1.0);
    let b = rk4_step(&s, &gravity, 0.0, 1.0);

    assert_eq!(a, b);
    // The input state was not touched
    assert_eq!(s, circular_state(MU_EARTH, 7.0e6));
}

#[test]
fn degenerate_step_parameters_rejected() {
    let gravity = CentralGravity { mu: MU_EARTH };
    let s = circular_state(MU_EARTH, 7.0e6);

    for bad in [
        params(0.0, 100.0),
        params(-1.0, 100.0),
        params(f64::NAN, 100.0),
        params(1.0, 0.0),
        params(1.0, -5.0),
    ] {
        let result = integrate(s, &gravity, &bad, None);
        assert!(
            matches!(result, Err(SimulationError::DegenerateInput(_))),
            "expected fail-fast for dt = {}, total_time = {}",
            bad.dt,
            bad.total_time
        );
    }
}

#[test]
fn trajectory_includes_initial_state() {
    let gravity = CentralGravity { mu: MU_EARTH };
    let s0 = circular_state(MU_EARTH, 7.0e6);
    let p = params(1.0, 10.0);

    let traj = integrate(s0, &gravity, &p, None).unwrap();

    assert_eq!(traj.len(), p.steps() + 1);
    assert_eq!(traj.states[0], s0);
}

#[test]
fn circular_orbit_closes_after_one_period() {
    let mu = MU_EARTH;
    let r = 7.0e6;
    let s0 = circular_state(mu, r);
    let period = orbital_period(mu, r);

    let gravity = CentralGravity { mu };
    let traj = integrate(s0, &gravity, &params(period / 10_000.0, period), None).unwrap();

    let last = traj.states.last().unwrap();
    let v0 = s0.v.norm();

    assert!(
        (last.x - s0.x).norm() / r < 1e-3,
        "position error {:.3e} m after one period",
        (last.x - s0.x).norm()
    );
    assert!(
        (last.v - s0.v).norm() / v0 < 1e-3,
        "velocity error {:.3e} m/s after one period",
        (last.v - s0.v).norm()
    );
}

/// Max |E - E0| over a circular-orbit run of fixed length
fn max_energy_drift(dt: f64, total_time: f64) -> f64 {
    let mu = MU_EARTH;
    let s0 = circular_state(mu, 7.0e6);
    let gravity = CentralGravity { mu };
    let traj = integrate(s0, &gravity, &params(dt, total_time), None).unwrap();

    let e0 = specific_orbital_energy(&s0, mu);
    traj.states
        .iter()
        .map(|s| (specific_orbital_energy(s, mu) - e0).abs())
        .fold(0.0, f64::max)
}

#[test]
fn energy_drift_shrinks_fourth_order() {
    // Halving dt should cut the drift by ~16x (4th-order method);
    // require at least 8x to leave room for rounding noise
    let coarse = max_energy_drift(8.0, 4000.0);
    let fine = max_energy_drift(4.0, 4000.0);

    assert!(coarse > 0.0);
    assert!(
        fine < coarse / 8.0,
        "expected ~16x drift reduction, got {:.1}x (coarse {:.3e}, fine {:.3e})",
        coarse / fine,
        coarse,
        fine
    );
}

#[test]
fn leo_trajectory_stays_bounded() {
    // mu = 3.986e14, r0 = (6.871e6, 0), v0 = (0, 7500), dt = 1, 6000 s:
    // a slightly eccentric LEO that never comes near the origin
    let mu = 3.986e14;
    let s0 = State::new(NVec2::new(6.871e6, 0.0), NVec2::new(0.0, 7500.0));

    let gravity = CentralGravity { mu };
    let traj = integrate(s0, &gravity, &params(1.0, 6000.0), None).unwrap();

    let (lo, hi) = radius_bounds(&traj).unwrap();
    assert!(lo > 6.4e6, "perigee too low: {:.4e} m", lo);
    assert!(hi < 6.9e6, "apogee too high: {:.4e} m", hi);
}

#[test]
fn forward_backward_integration_returns_to_start() {
    let mu = MU_EARTH;
    let s0 = circular_state(mu, 7.0e6);
    let gravity = CentralGravity { mu };
    let dt = 1.0;
    let n = 500;

    let mut s = s0;
    let mut t = 0.0;
    for _ in 0..n {
        s = rk4_step(&s, &gravity, t, dt);
        t += dt;
    }
    for _ in 0..n {
        s = rk4_step(&s, &gravity, t, -dt);
        t -= dt;
    }

    assert!(
        (s.x - s0.x).norm() < 1e-2,
        "position not recovered: off by {:.3e} m",
        (s.x - s0.x).norm()
    );
    assert!(
        (s.v - s0.v).norm() < 1e-5,
        "velocity not recovered: off by {:.3e} m/s",
        (s.v - s0.v).norm()
    );
}

#[test]
fn origin_start_fails_as_non_finite() {
    let gravity = CentralGravity { mu: MU_EARTH };
    let s0 = State::new(NVec2::zeros(), NVec2::zeros());

    let result = integrate(s0, &gravity, &params(1.0, 10.0), None);

    assert!(matches!(result, Err(SimulationError::NonFinite { step: 1 })));
}

#[test]
fn sub_surface_trajectory_is_flagged() {
    let body = earth();
    // Too slow for orbit at this altitude: falls back within a few minutes
    let s0 = State::new(NVec2::new(6.6e6, 0.0), NVec2::new(0.0, 2000.0));

    let gravity = CentralGravity { mu: body.mu };
    let p = params(1.0, 600.0);
    let traj = integrate(s0, &gravity, &p, Some(body.radius)).unwrap();

    assert!(traj.impacted);
    assert!(traj.len() < p.steps() + 1, "integration did not halt early");
    let last = traj.states.last().unwrap();
    assert!(last.radius() < body.radius);
    // Every state before the halt is at or above the surface
    for s in &traj.states[..traj.len() - 1] {
        assert!(s.radius() >= body.radius);
    }
}

// ==================================================================================
// Analysis tests
// ==================================================================================

#[test]
fn cosmic_velocities_for_earth() {
    let body = earth();
    let v1 = circular_speed(body.mu, body.radius);
    let v2 = escape_speed(body.mu, body.radius);

    assert_relative_eq!(v1, 7.91e3, max_relative = 1e-3);
    assert_relative_eq!(v2, v1 * std::f64::consts::SQRT_2, max_relative = 1e-12);
}

#[test]
fn orbital_period_matches_keplers_third_law() {
    let mu = MU_EARTH;
    for r in [7.0e6, 4.2e7, 3.8e8] {
        let t = orbital_period(mu, r);
        let expected_t2 = 4.0 * std::f64::consts::PI.powi(2) * r.powi(3) / mu;
        assert_relative_eq!(t * t, expected_t2, max_relative = 1e-12);
    }
}

#[test]
fn circular_orbit_energy_is_minus_mu_over_2r() {
    let mu = MU_EARTH;
    let r = 7.0e6;
    let e = specific_orbital_energy(&circular_state(mu, r), mu);
    assert_relative_eq!(e, -mu / (2.0 * r), max_relative = 1e-12);
}

#[test]
fn projectile_range_peaks_at_45_degrees() {
    let v0 = 20.0;
    let g = 9.81;

    assert_relative_eq!(projectile_range(v0, g, 45.0), v0 * v0 / g, max_relative = 1e-12);
    assert_eq!(projectile_range(v0, g, 90.0), 0.0);
    assert!(projectile_range(v0, g, 45.0) > projectile_range(v0, g, 30.0));
    assert!(projectile_range(v0, g, 45.0) > projectile_range(v0, g, 60.0));
}

// ==================================================================================
// Pendulum tests
// ==================================================================================

#[test]
fn damped_pendulum_decays() {
    let force = ForcedDampedPendulum {
        g: 9.81,
        length: 1.0,
        damping: 0.5,
        amplitude: 0.0,
        drive_frequency: 0.0,
    };
    let s0 = State::new(NVec2::new(0.5, 0.0), NVec2::zeros());

    let traj = integrate(s0, &force, &params(0.01, 20.0), None).unwrap();

    let last = traj.states.last().unwrap();
    assert!(
        last.x.x.abs() < 0.05,
        "undriven damped pendulum did not decay: theta = {}",
        last.x.x
    );
    // The 1-DOF embedding never touches the y-components
    assert_eq!(last.x.y, 0.0);
    assert_eq!(last.v.y, 0.0);
}

// ==================================================================================
// Scenario / configuration tests
// ==================================================================================

#[test]
fn orbit_scenario_roundtrip_from_yaml() {
    let yaml = r#"
output: images/test.png
scenario:
  kind: orbit
  mu: 3.986004418e14
  radius: 6.371e6
  x: [6.871e6, 0.0]
  v: [0.0, 7500.0]
  dt: 1.0
  total_time: 6000.0
"#;
    let cfg: ScenarioConfig = serde_yaml::from_str(yaml).unwrap();
    let scenario = Scenario::build_scenario(cfg).unwrap();

    match scenario {
        Scenario::Orbit(s) => {
            assert_relative_eq!(s.body.mu, 3.986004418e14, max_relative = 1e-15);
            assert_relative_eq!(s.initial.x.x, 6.871e6, max_relative = 1e-15);
            assert_eq!(s.params.steps(), 6000);
        }
        _ => panic!("expected an orbit scenario"),
    }
}

#[test]
fn malformed_initial_vector_rejected() {
    let yaml = r#"
output: images/test.png
scenario:
  kind: orbit
  mu: 3.986004418e14
  radius: 6.371e6
  x: [6.871e6, 0.0, 0.0]
  v: [0.0, 7500.0]
  dt: 1.0
  total_time: 6000.0
"#;
    let cfg: ScenarioConfig = serde_yaml::from_str(yaml).unwrap();
    let result = Scenario::build_scenario(cfg);

    assert!(matches!(result, Err(SimulationError::Config(_))));
}

#[test]
fn non_positive_mu_rejected() {
    let yaml = r#"
output: images/test.png
scenario:
  kind: kepler
  mu: -1.0
  r_min: 1.0e7
  r_max: 5.0e8
  samples: 100
"#;
    let cfg: ScenarioConfig = serde_yaml::from_str(yaml).unwrap();
    let result = Scenario::build_scenario(cfg);

    assert!(matches!(result, Err(SimulationError::Config(_))));
}
