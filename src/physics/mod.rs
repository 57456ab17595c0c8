//! Body kinematics.
//!
//! Two interchangeable models advance the body tree by one tick:
//! - [`GravityModel`]: direct N-body force sum with forward Euler
//! - [`CircularModel`]: fixed radius and angular rate around a parent
//!
//! The model is picked once when the simulation is built and held as a
//! trait object.

mod circular;
mod gravity;

#[cfg(test)]
mod proptest_physics;

pub use circular::{advance_asteroids, CircularModel};
pub use gravity::{
    collect_sources, compute_acceleration, compute_accelerations, GravityModel, Source,
};

use crate::body::Body;
use crate::types::G;

/// Advances every body by `dt` and appends the new positions to trails.
///
/// Implementations must read all positions they need before moving any
/// body, so results do not depend on body order.
pub trait Kinematics: Send + Sync {
    fn advance(&self, bodies: &mut [Body], dt: f64);

    /// Short name for logs.
    fn label(&self) -> &'static str;
}

/// Which kinematics model to build.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum KinematicsModel {
    Gravity { include_primary: bool },
    #[default]
    Circular,
}

impl KinematicsModel {
    pub fn build(self) -> Box<dyn Kinematics> {
        match self {
            Self::Gravity { include_primary } => Box::new(GravityModel {
                g: G,
                include_primary,
            }),
            Self::Circular => Box::new(CircularModel),
        }
    }
}
