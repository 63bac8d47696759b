pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod errors;

pub use simulation::states::{State, CentralBody, Trajectory, NVec2};
pub use simulation::params::StepParams;
pub use simulation::forces::{Acceleration, CentralGravity, ForcedDampedPendulum};
pub use simulation::integrator::{rk4_step, integrate};
pub use simulation::analysis::{
    specific_orbital_energy, circular_speed, escape_speed, orbital_period, projectile_range,
    radius_bounds,
};
pub use simulation::scenario::Scenario;

pub use configuration::config::{ScenarioConfig, ScenarioKind, OrbitConfig, PendulumConfig, ProjectileConfig, CosmicVelocitiesConfig, KeplerConfig};

pub use errors::SimulationError;
