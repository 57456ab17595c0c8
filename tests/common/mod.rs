//! Common helpers for integration tests.

#![allow(dead_code)]

use bevy::color::Color;
use bevy::math::DVec2;
use orrery::body::{Body, Motion};
use orrery::config::SimulationConfig;
use orrery::simulation::Simulation;
use orrery::spacecraft::Spacecraft;
use orrery::time::TickSource;
use orrery::types::BodyId;

/// Orrery config ticking a fixed `dt` per step.
pub fn fixed_orrery_config(dt: f64) -> SimulationConfig {
    let mut config = SimulationConfig::orrery();
    config.tick_source = TickSource::Fixed(dt);
    config
}

/// A stationary beacon at `(distance, 0)` and one craft at the origin
/// chasing it at `speed` per tick.
pub fn beacon_chase(distance: f64, speed: f64) -> Simulation {
    let config = fixed_orrery_config(1.0);
    let beacon = Body::primary("Beacon", DVec2::new(distance, 0.0), 5.0, 0.0, Color::WHITE);
    let craft = Spacecraft::new("probe", DVec2::ZERO, BodyId::body(0), speed, Color::WHITE, 1000);
    Simulation::new(&config, vec![beacon], vec![craft], Vec::new()).unwrap()
}

/// Two equal masses at rest, `separation` apart and centred on the origin,
/// integrated under gravity.
pub fn symmetric_pair(separation: f64, mass: f64, dt: f64) -> Simulation {
    let mut config = SimulationConfig::gravity_well();
    config.tick_source = TickSource::Fixed(dt);
    let half = DVec2::new(separation * 0.5, 0.0);
    let bodies = vec![
        Body::ballistic("A", -half, DVec2::ZERO, mass, 1.0, Color::WHITE, 100),
        Body::ballistic("B", half, DVec2::ZERO, mass, 1.0, Color::WHITE, 100),
    ];
    Simulation::new(&config, bodies, Vec::new(), Vec::new()).unwrap()
}

pub fn ballistic_state(body: &Body) -> (DVec2, DVec2) {
    match body.motion {
        Motion::Ballistic { pos, vel } => (pos, vel),
        _ => panic!("{} is not ballistic", body.name),
    }
}

/// Every body position in the tree, pre-order.
pub fn all_positions(sim: &Simulation) -> Vec<DVec2> {
    let mut out = Vec::new();
    for (i, body) in sim.bodies().iter().enumerate() {
        out.extend(sim.body_position(BodyId::body(i)));
        for m in 0..body.moons.len() {
            out.extend(sim.body_position(BodyId::moon(i, m)));
        }
    }
    out
}
