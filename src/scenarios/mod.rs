//! World assembly.
//!
//! Builds the initial bodies, moons, asteroids and spacecraft for the
//! configured kinematics model. Procedural placement goes through an
//! injected RNG; [`build`] seeds one from the config.

pub mod presets;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{ConfigError, SimulationConfig};
use crate::physics::KinematicsModel;
use crate::simulation::Simulation;

pub use presets::{gravity_well, orrery};

/// Build the preset matching the configured model, seeding from
/// `config.seed` or from entropy when no seed is set.
pub fn build(config: &SimulationConfig) -> Result<Simulation, ConfigError> {
    let mut rng = config
        .seed
        .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
    build_with_rng(config, &mut rng)
}

pub fn build_with_rng<R: Rng + ?Sized>(
    config: &SimulationConfig,
    rng: &mut R,
) -> Result<Simulation, ConfigError> {
    match config.model {
        KinematicsModel::Circular => orrery(config, rng),
        KinematicsModel::Gravity { .. } => gravity_well(config, rng),
    }
}
