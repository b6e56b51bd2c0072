//! High-level runtime engine settings
//!
//! Holds the clock (timestep level, time speed, pause) and the trail cap
//! used when building and running a `Scenario`

use crate::configuration::config::EngineConfig;
use crate::simulation::clock::SimulationClock;

#[derive(Debug, Clone, Default)]
pub struct Engine {
    pub clock: SimulationClock, // dt level + steps per real second
    pub trail_cap: Option<usize>, // None = unbounded trails
}

impl From<&EngineConfig> for Engine {
    fn from(cfg: &EngineConfig) -> Self {
        Self {
            clock: SimulationClock::new(cfg.timestep, cfg.time_speed),
            trail_cap: cfg.trail_cap,
        }
    }
}
