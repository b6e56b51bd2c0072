//! Configuration types for loading simulation scenarios from YAML.
//!
//! A thin, `serde`-deserializable description of a scenario:
//!
//! - [`ConstantsConfig`]     – physical constants and distance units
//! - [`BodyConfig`]          – one named body (the reference body included)
//! - [`AsteroidBeltConfig`]  – the randomly seeded minor-body ring
//! - [`EngineConfig`]        – timestep level, time speed and trail cap
//! - [`SimulationConfig`]    – top-level wrapper
//!
//! Every section falls back to its `Default`, so `{}` describes the full solar
//! system with 250 asteroids.
//!
//! # YAML format
//!
//! ```yaml
//! constants:
//!   g: 6.67428e-11
//!   au: 149.6e9
//!
//! bodies:
//!   - name: Sun
//!     mass: 1.98892e30
//!     orbit_au: 0.0
//!     speed: 0.0
//!     radius: 30.0
//!     color: [255, 255, 0]
//!     reference: true
//!   - name: Earth
//!     mass: 5.9742e24
//!     orbit_au: -1.0          # signed x offset, placed on the x axis
//!     speed: 29.783e3         # initial y velocity (m/s)
//!     radius: 16.0
//!     color: [100, 149, 237]
//!
//! asteroids:
//!   count: 250
//!   seed: 42
//!   inner_au: 2.2
//!   outer_au: 3.2
//!
//! engine:
//!   timestep: "full-day"      # or "half-day", "paused"
//!   time_speed: 60
//!   trail_cap: 2000           # omit for unbounded trails
//! ```

use std::io::Read;

use serde::Deserialize;

use crate::error::{Result, SimError};
use crate::simulation::clock::{TimeSpeed, TimestepLevel};
use crate::simulation::params::{Constants, AU, DISPLAY_AU, G};

/// Physical constants; maps onto [`Constants`]
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ConstantsConfig {
    pub g: f64, // gravitational constant
    pub au: f64, // meters per layout AU
    pub display_au: f64, // meters per reported AU
}

impl Default for ConstantsConfig {
    fn default() -> Self {
        Self {
            g: G,
            au: AU,
            display_au: DISPLAY_AU,
        }
    }
}

impl From<&ConstantsConfig> for Constants {
    fn from(cfg: &ConstantsConfig) -> Self {
        Constants {
            g: cfg.g,
            au: cfg.au,
            display_au: cfg.display_au,
        }
    }
}

/// Initial state for one named body, placed on the x axis
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    pub name: String,
    pub mass: f64, // kg
    pub orbit_au: f64, // signed x position in AU
    pub speed: f64, // initial y velocity in m/s
    pub radius: f64, // rendering hint
    pub color: [u8; 3],
    #[serde(default)]
    pub reference: bool, // distances are reported relative to this body
}

impl BodyConfig {
    fn named(name: &str, mass: f64, orbit_au: f64, speed: f64, radius: f64, color: [u8; 3]) -> Self {
        Self {
            name: name.to_string(),
            mass,
            orbit_au,
            speed,
            radius,
            color,
            reference: false,
        }
    }

    /// Sun plus the eight planets
    pub fn solar_system() -> Vec<BodyConfig> {
        let mut sun = Self::named("Sun", 1.98892e30, 0.0, 0.0, 30.0, [255, 255, 0]);
        sun.reference = true;
        vec![
            sun,
            Self::named("Mercury", 3.30e23, 0.387, -47.4e3, 8.0, [80, 78, 81]),
            Self::named("Venus", 4.8685e24, 0.723, -35.02e3, 14.0, [255, 255, 255]),
            Self::named("Earth", 5.9742e24, -1.0, 29.783e3, 16.0, [100, 149, 237]),
            Self::named("Mars", 6.39e23, -1.524, 24.077e3, 12.0, [188, 39, 50]),
            Self::named("Jupiter", 1.898e27, 5.2, 13.07e3, 69.0, [201, 144, 57]),
            Self::named("Saturn", 5.683e26, 9.58, 9.69e3, 58.0, [255, 255, 102]),
            Self::named("Uranus", 8.681e25, 19.22, 6.81e3, 25.0, [173, 216, 230]),
            Self::named("Neptune", 1.024e26, 30.05, 5.43e3, 24.0, [0, 0, 139]),
        ]
    }
}

/// The asteroid ring around the reference body
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AsteroidBeltConfig {
    pub count: usize,
    pub seed: u64, // same seed, same belt
    pub inner_au: f64,
    pub outer_au: f64,
    pub min_mass: f64,
    pub max_mass: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub color: [u8; 3],
    pub legacy_reference_flag: bool, // also flag asteroids as reference bodies
}

impl Default for AsteroidBeltConfig {
    fn default() -> Self {
        Self {
            count: 250,
            seed: 42,
            inner_au: 2.2,
            outer_au: 3.2,
            min_mass: 1e19,
            max_mass: 1e20,
            min_radius: 4.0,
            max_radius: 12.0,
            color: [255, 255, 255],
            legacy_reference_flag: false,
        }
    }
}

/// Runtime knobs for the driving loop
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub timestep: TimestepLevel,
    pub time_speed: TimeSpeed,
    pub trail_cap: Option<usize>, // None - unbounded trails
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            timestep: TimestepLevel::FullDay,
            time_speed: TimeSpeed::default(),
            trail_cap: None,
        }
    }
}

/// Top-level scenario configuration
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub constants: ConstantsConfig,
    pub bodies: Vec<BodyConfig>,
    pub asteroids: AsteroidBeltConfig,
    pub engine: EngineConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            constants: ConstantsConfig::default(),
            bodies: BodyConfig::solar_system(),
            asteroids: AsteroidBeltConfig::default(),
            engine: EngineConfig::default(),
        }
    }
}

impl SimulationConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let cfg: SimulationConfig = serde_yaml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let cfg: SimulationConfig = serde_yaml::from_reader(reader)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values that cannot produce a valid scenario
    pub fn validate(&self) -> Result<()> {
        let c = &self.constants;
        if !(c.g.is_finite() && c.g > 0.0) {
            return Err(SimError::InvalidConfig(format!("g must be positive, got {}", c.g)));
        }
        if !(c.au.is_finite() && c.au > 0.0 && c.display_au.is_finite() && c.display_au > 0.0) {
            return Err(SimError::InvalidConfig("distance units must be positive".into()));
        }

        if self.engine.time_speed.steps_per_second() == 0 {
            return Err(SimError::InvalidConfig("time_speed must be at least 1".into()));
        }

        let a = &self.asteroids;
        if a.count > 0 {
            if !self.bodies.iter().any(|b| b.reference) {
                return Err(SimError::InvalidConfig(
                    "asteroids need a reference body to orbit".into(),
                ));
            }
            check_range("inner_au..outer_au", a.inner_au, a.outer_au)?;
            check_range("min_mass..max_mass", a.min_mass, a.max_mass)?;
            check_range("min_radius..max_radius", a.min_radius, a.max_radius)?;
            if a.inner_au <= 0.0 {
                return Err(SimError::InvalidConfig("inner_au must be positive".into()));
            }
        }
        Ok(())
    }
}

fn check_range(name: &str, lo: f64, hi: f64) -> Result<()> {
    if lo.is_finite() && hi.is_finite() && lo <= hi {
        Ok(())
    } else {
        Err(SimError::InvalidConfig(format!("{name} is not a valid range ({lo}..{hi})")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_the_solar_system() {
        let cfg = SimulationConfig::from_yaml_str("{}").unwrap();
        assert_eq!(cfg, SimulationConfig::default());
        assert_eq!(cfg.bodies.len(), 9);
        assert_eq!(cfg.bodies.iter().filter(|b| b.reference).count(), 1);
        assert_eq!(cfg.asteroids.count, 250);
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let yaml = r#"
asteroids:
  count: 10
  seed: 7
engine:
  timestep: "half-day"
  time_speed: 600
  trail_cap: 50
"#;
        let cfg = SimulationConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(cfg.asteroids.count, 10);
        assert_eq!(cfg.asteroids.seed, 7);
        assert_eq!(cfg.asteroids.inner_au, 2.2);
        assert_eq!(cfg.engine.timestep, TimestepLevel::HalfDay);
        assert_eq!(cfg.engine.time_speed.steps_per_second(), 600);
        assert_eq!(cfg.engine.trail_cap, Some(50));
        assert_eq!(cfg.constants.g, G);
    }

    #[test]
    fn asteroids_without_reference_body_are_rejected() {
        let yaml = r#"
bodies:
  - name: Lonely
    mass: 1.0e24
    orbit_au: 1.0
    speed: 0.0
    radius: 5.0
    color: [1, 2, 3]
"#;
        let err = SimulationConfig::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, SimError::InvalidConfig(_)));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let yaml = "asteroids:\n  inner_au: 3.0\n  outer_au: 2.0\n";
        assert!(matches!(
            SimulationConfig::from_yaml_str(yaml),
            Err(SimError::InvalidConfig(_))
        ));
    }

    #[test]
    fn zero_time_speed_is_rejected() {
        let yaml = "engine:\n  time_speed: 0\n";
        assert!(matches!(
            SimulationConfig::from_yaml_str(yaml),
            Err(SimError::InvalidConfig(_))
        ));
    }

    #[test]
    fn bundled_scenario_parses() {
        let cfg = SimulationConfig::from_yaml_str(include_str!("../../scenarios/inner_system.yaml")).unwrap();
        assert_eq!(cfg.bodies.len(), 6);
        assert_eq!(cfg.bodies[0].name, "Sun");
        assert!(cfg.bodies[0].reference);
        assert_eq!(cfg.asteroids.count, 500);
        assert_eq!(cfg.engine.timestep, TimestepLevel::HalfDay);
        assert_eq!(cfg.engine.trail_cap, Some(4000));
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        assert!(matches!(
            SimulationConfig::from_yaml_str("engine: [1, 2"),
            Err(SimError::Yaml(_))
        ));
    }
}
