//! Shared fixtures for unit and property tests.

pub mod fixtures {
    use bevy::color::Color;
    use bevy::math::DVec2;

    use crate::body::{Body, CircularOrbit};
    use crate::spacecraft::Spacecraft;
    use crate::types::BodyId;

    /// Two equal masses at rest, `separation` apart along x and centred on
    /// the origin.
    pub fn symmetric_pair(separation: f64, mass: f64) -> Vec<Body> {
        let half = DVec2::new(separation * 0.5, 0.0);
        vec![
            Body::ballistic("A", -half, DVec2::ZERO, mass, 1.0, Color::WHITE, 16),
            Body::ballistic("B", half, DVec2::ZERO, mass, 1.0, Color::WHITE, 16),
        ]
    }

    pub fn orbiting(radius: f64, angle: f64, rate: f64, trail_cap: usize) -> Body {
        Body::orbiting(
            "orbiter",
            CircularOrbit::new(radius, angle, rate),
            1.0,
            Color::WHITE,
            trail_cap,
        )
    }

    /// Craft at `pos` chasing body 0.
    pub fn probe(pos: DVec2, speed: f64, trail_cap: usize) -> Spacecraft {
        Spacecraft::new("probe", pos, BodyId::body(0), speed, Color::WHITE, trail_cap)
    }
}

pub mod assertions {
    use bevy::math::DVec2;

    pub fn is_finite(v: DVec2) -> bool {
        v.x.is_finite() && v.y.is_finite()
    }
}
