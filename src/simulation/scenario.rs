//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces runtime bundles,
//! one per scenario kind, each carrying:
//! - validated physical parameters mapped into simulation types
//! - the output path of the PNG the run will write
//!
//! `Scenario::run` computes the scenario's trajectory or curve and hands
//! it to the renderer.

use std::path::PathBuf;

use crate::configuration::config::{
    CosmicVelocitiesConfig, KeplerConfig, OrbitConfig, PendulumConfig, ProjectileConfig,
    ScenarioConfig, ScenarioKind,
};
use crate::errors::SimulationError;
use crate::simulation::analysis;
use crate::simulation::forces::{CentralGravity, ForcedDampedPendulum};
use crate::simulation::integrator::integrate;
use crate::simulation::params::StepParams;
use crate::simulation::states::{CentralBody, NVec2, State};
use crate::visualization::plot;

/// A fully-initialized runtime scenario, ready to run.
pub enum Scenario {
    Orbit(OrbitScenario),
    Pendulum(PendulumScenario),
    Projectile(ProjectileScenario),
    CosmicVelocities(CosmicVelocitiesScenario),
    Kepler(KeplerScenario),
}

impl Scenario {
    /// Map a YAML-facing config into a runtime bundle, validating the
    /// physical parameters on the way.
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimulationError> {
        let output = PathBuf::from(cfg.output);
        match cfg.scenario {
            ScenarioKind::Orbit(c) => Ok(Self::Orbit(OrbitScenario::build(c, output)?)),
            ScenarioKind::Pendulum(c) => Ok(Self::Pendulum(PendulumScenario::build(c, output)?)),
            ScenarioKind::Projectile(c) => {
                Ok(Self::Projectile(ProjectileScenario::build(c, output)?))
            }
            ScenarioKind::CosmicVelocities(c) => Ok(Self::CosmicVelocities(
                CosmicVelocitiesScenario::build(c, output)?,
            )),
            ScenarioKind::Kepler(c) => Ok(Self::Kepler(KeplerScenario::build(c, output)?)),
        }
    }

    /// Run the simulation and write the output image.
    pub fn run(&self) -> Result<(), SimulationError> {
        match self {
            Self::Orbit(s) => s.run(),
            Self::Pendulum(s) => s.run(),
            Self::Projectile(s) => s.run(),
            Self::CosmicVelocities(s) => s.run(),
            Self::Kepler(s) => s.run(),
        }
    }
}

// Pull [x, y] out of a config vector, rejecting wrong arity.
fn vec2_from(v: &[f64], what: &str) -> Result<NVec2, SimulationError> {
    match v {
        [x, y] => Ok(NVec2::new(*x, *y)),
        _ => Err(SimulationError::Config(format!(
            "{} must have exactly 2 components, got {}",
            what,
            v.len()
        ))),
    }
}

/// Two-body RK4 payload trajectory around a central body.
pub struct OrbitScenario {
    pub body: CentralBody,
    pub initial: State,
    pub params: StepParams,
    pub output: PathBuf,
}

impl OrbitScenario {
    pub fn build(cfg: OrbitConfig, output: PathBuf) -> Result<Self, SimulationError> {
        if !(cfg.mu > 0.0) || !cfg.mu.is_finite() {
            return Err(SimulationError::Config(format!(
                "gravitational parameter must be positive, got {}",
                cfg.mu
            )));
        }
        if !(cfg.radius >= 0.0) || !cfg.radius.is_finite() {
            return Err(SimulationError::Config(format!(
                "central body radius must be non-negative, got {}",
                cfg.radius
            )));
        }
        let initial = State::new(vec2_from(&cfg.x, "initial position")?, vec2_from(&cfg.v, "initial velocity")?);
        Ok(Self {
            body: CentralBody {
                mu: cfg.mu,
                radius: cfg.radius,
            },
            initial,
            params: StepParams {
                dt: cfg.dt,
                total_time: cfg.total_time,
            },
            output,
        })
    }

    pub fn run(&self) -> Result<(), SimulationError> {
        // The inverse-square law is undefined at the origin; refuse to start there.
        if self.initial.radius() == 0.0 {
            return Err(SimulationError::DegenerateInput(
                "initial position is at the origin".to_string(),
            ));
        }

        let gravity = CentralGravity { mu: self.body.mu };
        let trajectory = integrate(
            self.initial,
            &gravity,
            &self.params,
            Some(self.body.radius),
        )?;

        if let Some((lo, hi)) = analysis::radius_bounds(&trajectory) {
            log::info!(
                "orbit: {} states, radius range [{:.4e}, {:.4e}] m, energy {:.4e} J/kg",
                trajectory.len(),
                lo,
                hi,
                analysis::specific_orbital_energy(&self.initial, self.body.mu)
            );
        }

        plot::trajectory_plot(&trajectory.positions(), self.body.radius, &self.output)
    }
}

/// Forced damped pendulum, plotted as angle vs time.
pub struct PendulumScenario {
    pub force: ForcedDampedPendulum,
    pub initial: State,
    pub params: StepParams,
    pub output: PathBuf,
}

impl PendulumScenario {
    pub fn build(cfg: PendulumConfig, output: PathBuf) -> Result<Self, SimulationError> {
        if !(cfg.g > 0.0) || !(cfg.length > 0.0) {
            return Err(SimulationError::Config(format!(
                "pendulum needs positive g and length, got g = {}, length = {}",
                cfg.g, cfg.length
            )));
        }
        Ok(Self {
            force: ForcedDampedPendulum {
                g: cfg.g,
                length: cfg.length,
                damping: cfg.damping,
                amplitude: cfg.amplitude,
                drive_frequency: cfg.drive_frequency,
            },
            // Angle rides in the x-component; y stays zero.
            initial: State::new(NVec2::new(cfg.theta0, 0.0), NVec2::new(cfg.omega0, 0.0)),
            params: StepParams {
                dt: cfg.dt,
                total_time: cfg.total_time,
            },
            output,
        })
    }

    pub fn run(&self) -> Result<(), SimulationError> {
        let trajectory = integrate(self.initial, &self.force, &self.params, None)?;

        let times: Vec<f64> = (0..trajectory.len()).map(|i| trajectory.time_at(i)).collect();
        let angles: Vec<f64> = trajectory.states.iter().map(|s| s.x.x).collect();

        log::info!("pendulum: {} states over {:.1} s", trajectory.len(), self.params.total_time);
        plot::line_plot(&times, &angles, &self.output)
    }
}

/// Closed-form projectile range vs launch angle.
pub struct ProjectileScenario {
    pub v0: f64,
    pub g: f64,
    pub samples: usize,
    pub output: PathBuf,
}

impl ProjectileScenario {
    pub fn build(cfg: ProjectileConfig, output: PathBuf) -> Result<Self, SimulationError> {
        if !(cfg.v0 > 0.0) || !(cfg.g > 0.0) {
            return Err(SimulationError::Config(format!(
                "projectile needs positive v0 and g, got v0 = {}, g = {}",
                cfg.v0, cfg.g
            )));
        }
        if cfg.samples < 2 {
            return Err(SimulationError::Config(format!(
                "projectile needs at least 2 samples, got {}",
                cfg.samples
            )));
        }
        Ok(Self {
            v0: cfg.v0,
            g: cfg.g,
            samples: cfg.samples,
            output,
        })
    }

    pub fn run(&self) -> Result<(), SimulationError> {
        let n = self.samples;
        let angles: Vec<f64> = (0..n).map(|i| 90.0 * i as f64 / (n - 1) as f64).collect();
        let ranges: Vec<f64> = angles
            .iter()
            .map(|&a| analysis::projectile_range(self.v0, self.g, a))
            .collect();

        log::info!("projectile: {} angles, v0 = {} m/s", n, self.v0);
        plot::line_plot(&angles, &ranges, &self.output)
    }
}

/// Per-planet orbital and escape speeds, plotted as paired bars.
pub struct CosmicVelocitiesScenario {
    pub gravitational_constant: f64,
    pub planets: Vec<(String, f64, f64)>, // (name, mass, radius)
    pub output: PathBuf,
}

impl CosmicVelocitiesScenario {
    pub fn build(cfg: CosmicVelocitiesConfig, output: PathBuf) -> Result<Self, SimulationError> {
        if !(cfg.gravitational_constant > 0.0) {
            return Err(SimulationError::Config(format!(
                "gravitational constant must be positive, got {}",
                cfg.gravitational_constant
            )));
        }
        if cfg.planets.is_empty() {
            return Err(SimulationError::Config(
                "cosmic velocity chart needs at least one planet".to_string(),
            ));
        }
        let mut planets = Vec::with_capacity(cfg.planets.len());
        for p in &cfg.planets {
            if !(p.mass > 0.0) || !(p.radius > 0.0) {
                return Err(SimulationError::Config(format!(
                    "planet {} needs positive mass and radius",
                    p.name
                )));
            }
            planets.push((p.name.clone(), p.mass, p.radius));
        }
        Ok(Self {
            gravitational_constant: cfg.gravitational_constant,
            planets,
            output,
        })
    }

    pub fn run(&self) -> Result<(), SimulationError> {
        let mut pairs = Vec::with_capacity(self.planets.len());
        for (name, mass, radius) in &self.planets {
            let mu = self.gravitational_constant * mass;
            let v1 = analysis::circular_speed(mu, *radius);
            let v2 = analysis::escape_speed(mu, *radius);
            log::info!("{}: v1 = {:.0} m/s, v2 = {:.0} m/s", name, v1, v2);
            pairs.push([v1, v2]);
        }
        plot::bar_plot(&pairs, &self.output)
    }
}

/// Kepler third-law sweep: T^2 against r^3 over a radius range.
pub struct KeplerScenario {
    pub mu: f64,
    pub r_min: f64,
    pub r_max: f64,
    pub samples: usize,
    pub output: PathBuf,
}

impl KeplerScenario {
    pub fn build(cfg: KeplerConfig, output: PathBuf) -> Result<Self, SimulationError> {
        if !(cfg.mu > 0.0) {
            return Err(SimulationError::Config(format!(
                "gravitational parameter must be positive, got {}",
                cfg.mu
            )));
        }
        if !(cfg.r_min > 0.0) || !(cfg.r_max > cfg.r_min) {
            return Err(SimulationError::Config(format!(
                "radius sweep needs 0 < r_min < r_max, got [{}, {}]",
                cfg.r_min, cfg.r_max
            )));
        }
        if cfg.samples < 2 {
            return Err(SimulationError::Config(format!(
                "radius sweep needs at least 2 samples, got {}",
                cfg.samples
            )));
        }
        Ok(Self {
            mu: cfg.mu,
            r_min: cfg.r_min,
            r_max: cfg.r_max,
            samples: cfg.samples,
            output,
        })
    }

    pub fn run(&self) -> Result<(), SimulationError> {
        let n = self.samples;
        let mut r_cubed = Vec::with_capacity(n);
        let mut t_squared = Vec::with_capacity(n);
        for i in 0..n {
            let r = self.r_min + (self.r_max - self.r_min) * i as f64 / (n - 1) as f64;
            let t = analysis::orbital_period(self.mu, r);
            r_cubed.push(r * r * r);
            t_squared.push(t * t);
        }

        log::info!("kepler sweep: {} radii in [{:.3e}, {:.3e}] m", n, self.r_min, self.r_max);
        plot::line_plot(&r_cubed, &t_squared, &self.output)
    }
}
