//! Body tree: the star, planets, moons and cosmetic asteroids.

use bevy::color::Color;
use bevy::math::DVec2;

use crate::trail::Trail;
use crate::types::TAU;

/// Fixed-radius, fixed-rate orbit around a parent position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircularOrbit {
    /// Distance from the parent, in simulation units.
    pub radius: f64,
    /// Current angle in radians, kept in `[0, 2π)`.
    pub angle: f64,
    /// Angular rate in radians per simulated second. Never negative.
    pub rate: f64,
}

impl CircularOrbit {
    pub fn new(radius: f64, angle: f64, rate: f64) -> Self {
        Self {
            radius,
            angle: angle.rem_euclid(TAU),
            rate,
        }
    }

    /// Advance the angle and wrap it back into `[0, 2π)`.
    ///
    /// The angle only grows, so one comparison and a subtraction suffice.
    /// The loop covers steps larger than a full turn.
    pub fn advance(&mut self, dt: f64) {
        self.angle += self.rate * dt;
        while self.angle >= TAU {
            self.angle -= TAU;
        }
    }

    /// World position given the parent's current world position.
    #[inline]
    pub fn position(&self, parent: DVec2) -> DVec2 {
        parent + self.radius * DVec2::new(self.angle.cos(), self.angle.sin())
    }
}

/// How a body's position evolves.
#[derive(Clone, Debug, PartialEq)]
pub enum Motion {
    /// Stays where it is (the primary under the circular model).
    Anchored { pos: DVec2 },
    /// Position and velocity integrated under gravity. World space.
    Ballistic { pos: DVec2, vel: DVec2 },
    /// Derived from a circular orbit around the parent.
    Circular(CircularOrbit),
}

/// A gravitating or orbiting body. Moons are owned children.
#[derive(Clone, Debug)]
pub struct Body {
    pub name: String,
    pub motion: Motion,
    /// Render radius in simulation units.
    pub radius: f64,
    /// Mass in kilograms (only the gravity model reads it).
    pub mass: f64,
    pub color: Color,
    pub primary: bool,
    pub trail: Trail,
    pub moons: Vec<Body>,
}

impl Body {
    /// The central star, anchored at `pos`.
    pub fn primary(name: impl Into<String>, pos: DVec2, radius: f64, mass: f64, color: Color) -> Self {
        Self {
            name: name.into(),
            motion: Motion::Anchored { pos },
            radius,
            mass,
            color,
            primary: true,
            trail: Trail::new(0),
            moons: Vec::new(),
        }
    }

    /// A body on a fixed circular orbit.
    pub fn orbiting(
        name: impl Into<String>,
        orbit: CircularOrbit,
        radius: f64,
        color: Color,
        trail_cap: usize,
    ) -> Self {
        Self {
            name: name.into(),
            motion: Motion::Circular(orbit),
            radius,
            mass: 0.0,
            color,
            primary: false,
            trail: Trail::new(trail_cap),
            moons: Vec::new(),
        }
    }

    /// A body integrated under gravity.
    pub fn ballistic(
        name: impl Into<String>,
        pos: DVec2,
        vel: DVec2,
        mass: f64,
        radius: f64,
        color: Color,
        trail_cap: usize,
    ) -> Self {
        Self {
            name: name.into(),
            motion: Motion::Ballistic { pos, vel },
            radius,
            mass,
            color,
            primary: false,
            trail: Trail::new(trail_cap),
            moons: Vec::new(),
        }
    }

    pub fn with_moons(mut self, moons: Vec<Body>) -> Self {
        self.moons = moons;
        self
    }

    /// Mark the body as the primary without changing its motion.
    pub fn as_primary(mut self) -> Self {
        self.primary = true;
        self
    }

    /// Current world position. `parent` is the parent's world position
    /// (the origin for top-level bodies).
    pub fn position(&self, parent: DVec2) -> DVec2 {
        match &self.motion {
            Motion::Anchored { pos } | Motion::Ballistic { pos, .. } => *pos,
            Motion::Circular(orbit) => orbit.position(parent),
        }
    }

    /// Velocity, for ballistic bodies.
    pub fn velocity(&self) -> Option<DVec2> {
        match &self.motion {
            Motion::Ballistic { vel, .. } => Some(*vel),
            _ => None,
        }
    }

    /// Number of bodies in this subtree, including self.
    pub fn subtree_len(&self) -> usize {
        1 + self.moons.iter().map(Body::subtree_len).sum::<usize>()
    }
}

/// Small cosmetic rock on a circular orbit around the origin.
///
/// Not part of the physics: no mass, no trail.
#[derive(Clone, Debug)]
pub struct Asteroid {
    pub orbit: CircularOrbit,
    /// Irregular outline as offsets from the centre, in simulation units.
    pub outline: Vec<DVec2>,
    pub color: Color,
}

impl Asteroid {
    pub fn position(&self) -> DVec2 {
        self.orbit.position(DVec2::ZERO)
    }
}
