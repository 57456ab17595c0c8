//! Fixed-rate circular orbits.
//!
//! Planets circle the origin, moons circle their parent's position from
//! the same tick. Positions are derived from the angle; only the trail
//! keeps past positions.

use bevy::math::DVec2;

use crate::body::{Asteroid, Body, Motion};
use crate::physics::Kinematics;

#[derive(Clone, Debug, Default)]
pub struct CircularModel;

impl Kinematics for CircularModel {
    fn advance(&self, bodies: &mut [Body], dt: f64) {
        advance_tree(bodies, DVec2::ZERO, dt);
    }

    fn label(&self) -> &'static str {
        "circular"
    }
}

/// Walk the tree parent-first so moons orbit their parent's new position.
fn advance_tree(bodies: &mut [Body], parent: DVec2, dt: f64) {
    for body in bodies {
        let pos = match &mut body.motion {
            Motion::Circular(orbit) => {
                orbit.advance(dt);
                let pos = orbit.position(parent);
                body.trail.push(pos);
                pos
            }
            Motion::Anchored { pos } | Motion::Ballistic { pos, .. } => *pos,
        };
        advance_tree(&mut body.moons, pos, dt);
    }
}

/// Cosmetic asteroids follow the same rule around the origin.
pub fn advance_asteroids(asteroids: &mut [Asteroid], dt: f64) {
    for asteroid in asteroids {
        asteroid.orbit.advance(dt);
    }
}
