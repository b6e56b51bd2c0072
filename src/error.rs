//! Error types for the simulation core
//!
//! Every fallible operation in the library returns [`Result`], whose error
//! side is [`SimError`]. The binary wraps these in `anyhow` with context.

use thiserror::Error;

/// Main error type for building and stepping a system
#[derive(Error, Debug)]
pub enum SimError {
    /// A body was constructed with a mass that cannot normalize a force
    #[error("body {label:?} has invalid mass {mass} (must be finite and > 0)")]
    InvalidMass {
        /// Display name of the rejected body (empty for minor bodies)
        label: String,
        /// The rejected mass in kg
        mass: f64,
    },

    /// Two distinct bodies share a position, so the inverse-square force is undefined
    #[error("bodies {a} and {b} are coincident; gravitational force is singular")]
    CoincidentBodies {
        /// Index of the body whose force was being accumulated
        a: usize,
        /// Index of the body it coincides with
        b: usize,
    },

    /// Two bodies are close enough that their force overflows f64
    #[error("force between bodies {a} and {b} is not finite")]
    SingularForce {
        /// Index of the body whose force was being accumulated
        a: usize,
        /// Index of the body pulling on it
        b: usize,
    },

    /// A step would leave a body with a non-finite velocity or position
    #[error("step would leave body {index} in a non-finite state")]
    NonFiniteState {
        /// Index of the offending body
        index: usize,
    },

    /// The timestep handed to the integrator is NaN or infinite
    #[error("timestep {0} is not finite")]
    InvalidTimestep(f64),

    /// Configuration values that cannot produce a valid scenario
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The YAML document could not be deserialized
    #[error("failed to parse configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, SimError>;
