//! Core types and constants shared by the simulation modules.

use bevy::math::DVec2;

/// Gravitational constant (m³·kg⁻¹·s⁻²)
pub const G: f64 = 6.67430e-11;

/// Full turn in radians.
pub const TAU: f64 = std::f64::consts::TAU;

/// Seconds per simulated hour (the fixed gravity tick).
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Non-owning reference to a body in the body tree.
///
/// `index` addresses a top-level body, `moon` optionally addresses one of
/// its moons. Bodies are never removed during a run, so ids stay valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BodyId {
    pub index: usize,
    pub moon: Option<usize>,
}

impl BodyId {
    /// Id of a top-level body.
    pub const fn body(index: usize) -> Self {
        Self { index, moon: None }
    }

    /// Id of a moon of a top-level body.
    pub const fn moon(index: usize, moon: usize) -> Self {
        Self {
            index,
            moon: Some(moon),
        }
    }
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: DVec2, b: DVec2) -> f64 {
    (b - a).length()
}

/// Unit vector along `v`, or zero when `v` has no length.
#[inline]
pub fn normalize(v: DVec2) -> DVec2 {
    let len = v.length();
    if len == 0.0 { DVec2::ZERO } else { v / len }
}
