pub mod configuration;
pub mod error;
pub mod output;
pub mod simulation;

pub use error::{SimError, SimResult};

pub use simulation::integrator::{Euler, Integrator, Verlet};
pub use simulation::params::Parameters;
pub use simulation::scenario::{RunSummary, Scenario, Tracking};
pub use simulation::states::{Body, System, Vec3};
pub use simulation::units::{DEFAULT_SEPARATION_FLOOR, G, SPEED_OF_LIGHT};

pub use configuration::config::{
    BodyConfig, EngineConfig, IntegratorConfig, OutputConfig, ParametersConfig, ScenarioConfig,
    TrackingConfig,
};

pub use output::trajectory::{CoordinateScale, TrajectoryWriter};
