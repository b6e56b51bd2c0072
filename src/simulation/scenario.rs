//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `SimulationConfig` and produces the runtime bundle (`Scenario`):
//! - engine settings (`Engine`)
//! - physical constants (`Constants`)
//! - system state (`System` with every body at t = 0)
//! - active force set (`ForceSet`)
//!
//! Body order is fixed: the configured named bodies in table order (the
//! reference body first in the default table), then the generated asteroids.

use std::f64::consts::TAU;

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::configuration::config::{AsteroidBeltConfig, BodyConfig, SimulationConfig};
use crate::error::{Result, SimError};
use crate::simulation::engine::Engine;
use crate::simulation::forces::{ForceSet, NewtonianGravity};
use crate::simulation::integrator::symplectic_euler;
use crate::simulation::params::Constants;
use crate::simulation::states::{Body, NVec2, System};

/// The main runtime bundle constructed from a [`SimulationConfig`]
///
/// A driving loop calls [`Scenario::tick`] (or [`Scenario::advance`]) once per
/// frame and then reads `system` to draw it
pub struct Scenario {
    pub engine: Engine,
    pub constants: Constants,
    pub system: System,
    pub forces: ForceSet,
}

impl Scenario {
    /// Build the reference body, the named bodies and the asteroid belt
    pub fn initialize(cfg: &SimulationConfig) -> Result<Self> {
        cfg.validate()?;

        let constants = Constants::from(&cfg.constants);
        let engine = Engine::from(&cfg.engine);

        let mut bodies = named_bodies(&cfg.bodies, &constants)?;

        if cfg.asteroids.count > 0 {
            // Same choice as distance reporting: the last reference body wins
            let primary = bodies
                .iter()
                .rev()
                .find(|b| b.is_reference_body)
                .cloned()
                .ok_or_else(|| SimError::InvalidConfig("no reference body".into()))?;
            bodies.extend(generate_asteroids(&cfg.asteroids, &constants, &primary)?);
        }

        let mut system = System::with_bodies(bodies);
        if engine.trail_cap.is_some() {
            system.set_trail_cap(engine.trail_cap);
        }

        // Forces: construct a ForceSet and register Newtonian gravity
        let forces = ForceSet::new().with(NewtonianGravity::new(constants.g));

        info!(
            bodies = system.len(),
            asteroids = cfg.asteroids.count,
            seed = cfg.asteroids.seed,
            dt = engine.clock.dt(),
            "scenario initialized"
        );

        Ok(Self {
            engine,
            constants,
            system,
            forces,
        })
    }

    /// Default solar system with 250 asteroids
    pub fn solar_system() -> Result<Self> {
        Self::initialize(&SimulationConfig::default())
    }

    /// One integrator step at the clock's current dt
    pub fn tick(&mut self) -> Result<()> {
        symplectic_euler(&mut self.system, &self.forces, self.engine.clock.dt())
    }

    /// Run as many steps as the clock grants for `real_seconds`; returns the count
    pub fn advance(&mut self, real_seconds: f64) -> Result<u64> {
        let steps = self.engine.clock.steps_for(real_seconds);
        for _ in 0..steps {
            self.tick()?;
        }
        Ok(steps)
    }
}

/// Turn the named-body table into bodies on the x axis
pub fn named_bodies(table: &[BodyConfig], constants: &Constants) -> Result<Vec<Body>> {
    table
        .iter()
        .map(|bc| {
            Body::new(
                bc.name.clone(),
                NVec2::new(bc.orbit_au * constants.au, 0.0),
                NVec2::new(0.0, bc.speed),
                bc.mass,
            )
            .map(|b| {
                b.with_radius(bc.radius)
                    .with_color(bc.color)
                    .reference(bc.reference)
            })
        })
        .collect()
}

/// Seed the asteroid ring around `primary`
///
/// Per asteroid, in this order: distance, angle, radius, mass, orbit direction.
/// Each starts at the circular-orbit speed for its distance, with prograde and
/// retrograde equally likely. Positions and velocities are relative to the
/// primary's, so the ring follows it wherever it starts.
pub fn generate_asteroids(
    cfg: &AsteroidBeltConfig,
    constants: &Constants,
    primary: &Body,
) -> Result<Vec<Body>> {
    let mut rng = StdRng::seed_from_u64(cfg.seed);

    let distance = Uniform::new_inclusive(cfg.inner_au * constants.au, cfg.outer_au * constants.au);
    let angle = Uniform::new(0.0, TAU);
    let radius = Uniform::new_inclusive(cfg.min_radius, cfg.max_radius);
    let mass = Uniform::new_inclusive(cfg.min_mass, cfg.max_mass);

    let mut asteroids = Vec::with_capacity(cfg.count);
    for _ in 0..cfg.count {
        let d: f64 = distance.sample(&mut rng);
        let a: f64 = angle.sample(&mut rng);
        let r: f64 = radius.sample(&mut rng);
        let m: f64 = mass.sample(&mut rng);

        let mut speed = constants.circular_speed(primary.m, d);
        if rng.gen_bool(0.5) {
            speed = -speed; // retrograde
        }

        let body = Body::new(
            String::new(),
            primary.x + NVec2::new(d * a.cos(), d * a.sin()),
            primary.v + NVec2::new(-speed * a.sin(), speed * a.cos()),
            m,
        )?
        .with_radius(r)
        .with_color(cfg.color)
        .minor(true)
        .reference(cfg.legacy_reference_flag);

        asteroids.push(body);
    }
    Ok(asteroids)
}
