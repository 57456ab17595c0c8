//! Newtonian N-body gravity with an explicit Euler step.
//!
//! Every body attracts every other body. Accelerations for the whole tree
//! are computed from one snapshot of positions before any body moves.

use bevy::math::DVec2;

use crate::body::{Body, Motion};
use crate::physics::Kinematics;

/// A gravity source: world position and mass.
pub type Source = (DVec2, f64);

/// Direct-summation gravity integrated with forward Euler.
#[derive(Clone, Debug)]
pub struct GravityModel {
    /// Gravitational constant used for the force sum.
    pub g: f64,
    /// Integrate the primary too instead of holding it in place.
    /// The primary is a gravity source either way.
    pub include_primary: bool,
}

impl Kinematics for GravityModel {
    fn advance(&self, bodies: &mut [Body], dt: f64) {
        let mut sources = Vec::with_capacity(bodies.len());
        collect_sources(bodies, DVec2::ZERO, &mut sources);
        if sources.is_empty() {
            return;
        }

        let accelerations = compute_accelerations(&sources, self.g);

        let mut next = 0;
        apply_step(bodies, &accelerations, &mut next, dt, self.include_primary);
    }

    fn label(&self) -> &'static str {
        "gravity"
    }
}

/// Snapshot every body's world position and mass, in pre-order.
pub fn collect_sources(bodies: &[Body], parent: DVec2, out: &mut Vec<Source>) {
    for body in bodies {
        let pos = body.position(parent);
        out.push((pos, body.mass));
        collect_sources(&body.moons, pos, out);
    }
}

/// Net acceleration on every source from all the others.
///
/// Pairs at exactly zero separation contribute nothing. There is no
/// softening, so close encounters are as unstable as the step size makes
/// them.
pub fn compute_accelerations(sources: &[Source], g: f64) -> Vec<DVec2> {
    let n = sources.len();
    let mut out = vec![DVec2::ZERO; n];

    for i in 0..n {
        let (xi, mi) = sources[i];
        for j in (i + 1)..n {
            let (xj, mj) = sources[j];

            // Points from i to j: i is pulled along +r, j along -r
            let r = xj - xi;
            let dist = r.length();
            if dist == 0.0 {
                continue;
            }

            let coef = g / (dist * dist * dist);
            out[i] += r * (coef * mj);
            out[j] -= r * (coef * mi);
        }
    }

    out
}

/// Acceleration at `pos` from a set of sources.
///
/// A source at exactly `pos` is skipped, which also excludes the body
/// itself when it is part of `sources`.
#[inline]
pub fn compute_acceleration(pos: DVec2, sources: &[Source], g: f64) -> DVec2 {
    let mut acc = DVec2::ZERO;
    for &(source_pos, mass) in sources {
        let delta = source_pos - pos;
        let dist = delta.length();
        if dist == 0.0 {
            continue;
        }
        acc += delta * (g * mass / (dist * dist * dist));
    }
    acc
}

/// Apply precomputed accelerations in the same pre-order they were
/// collected in.
fn apply_step(
    bodies: &mut [Body],
    accelerations: &[DVec2],
    next: &mut usize,
    dt: f64,
    include_primary: bool,
) {
    for body in bodies {
        let acc = accelerations[*next];
        *next += 1;

        if !body.primary || include_primary {
            if let Motion::Ballistic { pos, vel } = &mut body.motion {
                // Forward Euler: velocity first, then position with the new velocity
                *vel += acc * dt;
                *pos += *vel * dt;
                body.trail.push(*pos);
            }
        }

        apply_step(&mut body.moons, accelerations, next, dt, include_primary);
    }
}
