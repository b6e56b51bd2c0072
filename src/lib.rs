pub mod error;
pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use error::{Result, SimError};

pub use simulation::states::{Body, System, Trail, NVec2};
pub use simulation::params::Constants;
pub use simulation::clock::{SimulationClock, TimeSpeed, TimestepLevel};
pub use simulation::forces::{Force, ForceSample, ForceSet, NewtonianGravity};
pub use simulation::integrator::symplectic_euler;
pub use simulation::scenario::{generate_asteroids, named_bodies, Scenario};
pub use simulation::engine::Engine;

pub use configuration::config::{AsteroidBeltConfig, BodyConfig, ConstantsConfig, EngineConfig, SimulationConfig};

pub use visualization::report::{frame_report, renders_trail, BodyLine, FrameReport};

pub use benchmark::benchmark::{bench_gravity, bench_step_curve};
