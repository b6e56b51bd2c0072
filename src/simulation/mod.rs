pub mod states;
pub mod params;
pub mod engine;
pub mod clock;
pub mod forces;
pub mod integrator;
pub mod scenario;
