//! Property-based tests for the kinematics models and their neighbours.

use bevy::math::DVec2;
use proptest::prelude::*;

use super::{compute_accelerations, CircularModel, GravityModel, Kinematics};
use crate::body::{CircularOrbit, Motion};
use crate::camera::Viewport;
use crate::test_utils::{assertions, fixtures};
use crate::trail::Trail;
use crate::types::{G, TAU};

fn coord() -> impl Strategy<Value = f64> {
    -1.0e6f64..1.0e6
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A trail never holds more than its cap and keeps the newest points.
    #[test]
    fn prop_trail_bounded(cap in 1usize..64, pushes in 0usize..200) {
        let mut trail = Trail::new(cap);
        for i in 0..pushes {
            trail.push(DVec2::splat(i as f64));
        }

        prop_assert_eq!(trail.len(), pushes.min(cap));
        if pushes > 0 {
            prop_assert_eq!(trail.newest(), Some(DVec2::splat((pushes - 1) as f64)));
        }
        let first = pushes.saturating_sub(cap) as f64;
        prop_assert_eq!(trail.iter().next(), (pushes > 0).then(|| DVec2::splat(first)));
    }

    /// Orbit angles stay in [0, 2π) for any non-negative rate and step.
    #[test]
    fn prop_orbit_angle_in_range(
        angle in 0.0f64..TAU,
        rate in 0.0f64..50.0,
        dt in 0.0f64..10.0,
        steps in 1usize..50,
    ) {
        let mut orbit = CircularOrbit::new(100.0, angle, rate);
        for _ in 0..steps {
            orbit.advance(dt);
            prop_assert!(orbit.angle >= 0.0 && orbit.angle < TAU, "angle {}", orbit.angle);
        }
    }

    /// The circular model keeps a body exactly on its orbit.
    #[test]
    fn prop_circular_radius_preserved(
        radius in 1.0f64..1000.0,
        rate in 0.0f64..5.0,
        dt in 0.0f64..1.0,
    ) {
        let mut bodies = vec![fixtures::orbiting(radius, 0.0, rate, 4)];
        CircularModel.advance(&mut bodies, dt);
        let pos = bodies[0].position(DVec2::ZERO);
        prop_assert!((pos.length() - radius).abs() < 1e-9 * radius);
    }

    /// Coincident bodies never produce NaN or infinite accelerations.
    #[test]
    fn prop_coincident_bodies_finite(
        x in coord(),
        y in coord(),
        m1 in 1.0f64..1.0e30,
        m2 in 1.0f64..1.0e30,
    ) {
        let p = DVec2::new(x, y);
        let acc = compute_accelerations(&[(p, m1), (p, m2)], G);
        prop_assert!(acc.iter().all(|a| assertions::is_finite(*a)));
        prop_assert_eq!(acc[0], DVec2::ZERO);
        prop_assert_eq!(acc[1], DVec2::ZERO);
    }

    /// Two equal masses at rest pull each other equally and oppositely.
    #[test]
    fn prop_symmetric_pair_equal_and_opposite(
        separation in 1.0f64..1.0e9,
        mass in 1.0e3f64..1.0e28,
        dt in 1.0f64..3600.0,
    ) {
        let mut bodies = fixtures::symmetric_pair(separation, mass);
        let model = GravityModel { g: G, include_primary: false };
        model.advance(&mut bodies, dt);

        let (Motion::Ballistic { pos: pa, vel: va }, Motion::Ballistic { pos: pb, vel: vb }) =
            (&bodies[0].motion, &bodies[1].motion)
        else {
            panic!("pair should stay ballistic");
        };

        let tol = 1e-12 * va.length().max(f64::MIN_POSITIVE);
        prop_assert!((*va + *vb).length() <= tol);
        prop_assert!(va.x > 0.0 && vb.x < 0.0);
        prop_assert!((*pa + *pb).length() <= 1e-9 * separation);
    }

    /// Screen round trip recovers the world point.
    #[test]
    fn prop_viewport_round_trip(
        cx in coord(),
        cy in coord(),
        zoom in 1.0e-3f64..50.0,
        x in coord(),
        y in coord(),
    ) {
        let viewport = Viewport::new(DVec2::new(cx, cy), zoom, DVec2::new(1280.0, 800.0));
        let p = DVec2::new(x, y);
        let back = viewport.screen_to_world(viewport.world_to_screen(p));
        prop_assert!((back - p).length() <= 1e-9 * (1.0 + p.length() + viewport.center.length()));
    }

    /// Once arrived, a craft never moves again.
    #[test]
    fn prop_arrival_is_final(
        start in 20.0f64..500.0,
        speed in 0.5f64..5.0,
        wander in prop::collection::vec((coord(), coord()), 1..20),
    ) {
        let mut craft = fixtures::probe(DVec2::new(start, 0.0), speed, 1000);
        let mut ticks = 0;
        while !craft.arrived() {
            craft.steer(DVec2::ZERO, 10.0, 1.0);
            ticks += 1;
            prop_assert!(ticks < 10_000);
        }

        let parked = craft.pos;
        let trail_len = craft.trail.len();
        for (x, y) in wander {
            prop_assert!(!craft.steer(DVec2::new(x, y), 10.0, 1.0));
            prop_assert!(craft.arrived());
            prop_assert_eq!(craft.pos, parked);
        }
        prop_assert_eq!(craft.trail.len(), trail_len);
    }
}
