//! Domain model: particles and solver configuration

pub mod config;
pub mod particle;

pub use config::{PressurePolicy, SolverConfig};
pub use particle::{Particle, ParticleId, ParticleStore};
