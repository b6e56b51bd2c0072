//! Physical constants for the simulation
//!
//! `Constants` is immutable once a scenario is built and is handed to both
//! the initial-condition generator and the gravity term:
//! - gravitational constant `g`,
//! - `au`, the distance unit used to place bodies,
//! - `display_au`, the unit used when reporting distances to the reference body

/// Gravitational constant (m^3 kg^-1 s^-2)
pub const G: f64 = 6.67428e-11;

/// Astronomical unit used to lay out the initial bodies (m)
pub const AU: f64 = 149.6e9;

/// Astronomical unit used by the distance overlay (m)
pub const DISPLAY_AU: f64 = 149_597_870_700.0;

pub const SECONDS_PER_HOUR: f64 = 3600.0;
pub const SECONDS_PER_DAY: f64 = 24.0 * SECONDS_PER_HOUR;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constants {
    pub g: f64, // gravitational constant
    pub au: f64, // layout distance unit
    pub display_au: f64, // reporting distance unit
}

impl Default for Constants {
    fn default() -> Self {
        Self {
            g: G,
            au: AU,
            display_au: DISPLAY_AU,
        }
    }
}

impl Constants {
    /// Speed of a circular orbit at `distance` around a body of `central_mass`
    pub fn circular_speed(&self, central_mass: f64, distance: f64) -> f64 {
        (self.g * central_mass / distance).sqrt()
    }
}
