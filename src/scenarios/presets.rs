//! Preset solar systems.
//!
//! Two layouts, one per kinematics model:
//! - [`orrery`]: screen-sized circular orbits, moons, a cosmetic belt
//! - [`gravity_well`]: SI-unit inner system plus Jupiter, integrated
//!   under mutual gravity with a belt of low-mass bodies
//!
//! Starting angles, belt placement and asteroid outlines come from the
//! caller's RNG so a seeded generator reproduces the same system.

use bevy::color::Color;
use bevy::log::info;
use bevy::math::DVec2;
use rand::Rng;

use crate::body::{Asteroid, Body, CircularOrbit};
use crate::config::{ConfigError, SimulationConfig};
use crate::simulation::Simulation;
use crate::spacecraft::Spacecraft;
use crate::types::{BodyId, G, TAU};

/// A body on a fixed circular orbit, in orrery units (pixels at zoom 1).
pub struct OrbitPreset {
    pub name: &'static str,
    pub orbit_radius: f64,
    /// Radians per second.
    pub rate: f64,
    pub radius: f64,
    pub color: Color,
    pub moons: &'static [OrbitPreset],
}

/// A planet for the gravity layout, in SI units.
pub struct MassivePreset {
    pub name: &'static str,
    /// Initial distance from the Sun in meters.
    pub distance: f64,
    pub mass: f64,
    /// Render radius in meters (exaggerated so it shows at system scale).
    pub radius: f64,
    pub color: Color,
}

pub const SUN_COLOR: Color = Color::srgb(1.0, 0.85, 0.3);
pub const SUN_MASS: f64 = 1.989e30;

const PROBE_COLORS: [Color; 3] = [
    Color::srgb(0.3, 1.0, 0.6),
    Color::srgb(1.0, 0.4, 0.8),
    Color::srgb(0.4, 0.8, 1.0),
];

pub static ORRERY_PLANETS: &[OrbitPreset] = &[
    OrbitPreset {
        name: "Mercury",
        orbit_radius: 50.0,
        rate: 1.2,
        radius: 3.0,
        color: Color::srgb(0.6, 0.6, 0.6),
        moons: &[],
    },
    OrbitPreset {
        name: "Venus",
        orbit_radius: 75.0,
        rate: 0.9,
        radius: 5.0,
        color: Color::srgb(0.9, 0.85, 0.7),
        moons: &[],
    },
    OrbitPreset {
        name: "Earth",
        orbit_radius: 105.0,
        rate: 0.6,
        radius: 6.0,
        color: Color::srgb(0.2, 0.5, 0.8),
        moons: &[OrbitPreset {
            name: "Moon",
            orbit_radius: 14.0,
            rate: 2.4,
            radius: 2.0,
            color: Color::srgb(0.75, 0.75, 0.75),
            moons: &[],
        }],
    },
    OrbitPreset {
        name: "Mars",
        orbit_radius: 140.0,
        rate: 0.45,
        radius: 4.0,
        color: Color::srgb(0.8, 0.4, 0.2),
        moons: &[
            OrbitPreset {
                name: "Phobos",
                orbit_radius: 8.0,
                rate: 3.5,
                radius: 1.0,
                color: Color::srgb(0.5, 0.45, 0.4),
                moons: &[],
            },
            OrbitPreset {
                name: "Deimos",
                orbit_radius: 12.0,
                rate: 2.6,
                radius: 1.0,
                color: Color::srgb(0.55, 0.5, 0.45),
                moons: &[],
            },
        ],
    },
    OrbitPreset {
        name: "Jupiter",
        orbit_radius: 235.0,
        rate: 0.25,
        radius: 12.0,
        color: Color::srgb(0.8, 0.7, 0.6),
        moons: &[
            OrbitPreset {
                name: "Io",
                orbit_radius: 18.0,
                rate: 3.0,
                radius: 2.0,
                color: Color::srgb(0.9, 0.8, 0.3),
                moons: &[],
            },
            OrbitPreset {
                name: "Europa",
                orbit_radius: 23.0,
                rate: 2.4,
                radius: 2.0,
                color: Color::srgb(0.8, 0.75, 0.65),
                moons: &[],
            },
            OrbitPreset {
                name: "Ganymede",
                orbit_radius: 29.0,
                rate: 1.8,
                radius: 2.5,
                color: Color::srgb(0.6, 0.55, 0.5),
                moons: &[],
            },
            OrbitPreset {
                name: "Callisto",
                orbit_radius: 36.0,
                rate: 1.3,
                radius: 2.2,
                color: Color::srgb(0.45, 0.4, 0.35),
                moons: &[],
            },
        ],
    },
    OrbitPreset {
        name: "Saturn",
        orbit_radius: 295.0,
        rate: 0.18,
        radius: 10.0,
        color: Color::srgb(0.9, 0.85, 0.6),
        moons: &[OrbitPreset {
            name: "Titan",
            orbit_radius: 22.0,
            rate: 1.5,
            radius: 2.5,
            color: Color::srgb(0.85, 0.65, 0.3),
            moons: &[],
        }],
    },
    OrbitPreset {
        name: "Uranus",
        orbit_radius: 340.0,
        rate: 0.12,
        radius: 8.0,
        color: Color::srgb(0.6, 0.8, 0.9),
        moons: &[],
    },
    OrbitPreset {
        name: "Neptune",
        orbit_radius: 380.0,
        rate: 0.09,
        radius: 8.0,
        color: Color::srgb(0.3, 0.5, 0.9),
        moons: &[],
    },
];

/// Orrery belt between Mars and Jupiter.
const BELT_RADIUS: (f64, f64) = (165.0, 205.0);
const BELT_RATE: (f64, f64) = (0.28, 0.40);
const ASTEROID_SIZE: (f64, f64) = (1.0, 3.0);

pub static GRAVITY_PLANETS: &[MassivePreset] = &[
    MassivePreset {
        name: "Mercury",
        distance: 5.79e10,
        mass: 3.301e23,
        radius: 3.0e9,
        color: Color::srgb(0.6, 0.6, 0.6),
    },
    MassivePreset {
        name: "Venus",
        distance: 1.082e11,
        mass: 4.867e24,
        radius: 4.0e9,
        color: Color::srgb(0.9, 0.85, 0.7),
    },
    MassivePreset {
        name: "Earth",
        distance: 1.496e11,
        mass: 5.972e24,
        radius: 4.5e9,
        color: Color::srgb(0.2, 0.5, 0.8),
    },
    MassivePreset {
        name: "Mars",
        distance: 2.279e11,
        mass: 6.417e23,
        radius: 3.5e9,
        color: Color::srgb(0.8, 0.4, 0.2),
    },
    MassivePreset {
        name: "Jupiter",
        distance: 7.785e11,
        mass: 1.898e27,
        radius: 9.0e9,
        color: Color::srgb(0.8, 0.7, 0.6),
    },
];

const MOON_DISTANCE: f64 = 3.844e8;
const MOON_MASS: f64 = 7.342e22;

/// Gravity belt, in meters and kilograms.
const GRAVITY_BELT_DISTANCE: (f64, f64) = (3.2e11, 4.5e11);
const GRAVITY_BELT_MASS: (f64, f64) = (1.0e15, 1.0e18);

/// Index of a named top-level body. Presets only ask for names they define.
fn index_of(bodies: &[Body], name: &str) -> usize {
    bodies.iter().position(|b| b.name == name).unwrap_or(0)
}

fn orbiting_from(preset: &OrbitPreset, angle: f64, trail_cap: usize) -> Body {
    Body::orbiting(
        preset.name,
        CircularOrbit::new(preset.orbit_radius, angle, preset.rate),
        preset.radius,
        preset.color,
        trail_cap,
    )
}

/// Irregular polygon around the origin.
fn asteroid_outline<R: Rng + ?Sized>(rng: &mut R) -> Vec<DVec2> {
    let vertices = rng.gen_range(5..=8);
    let size = rng.gen_range(ASTEROID_SIZE.0..ASTEROID_SIZE.1);
    (0..vertices)
        .map(|k| {
            let angle = TAU * k as f64 / vertices as f64 + rng.gen_range(-0.3..0.3);
            let r = size * rng.gen_range(0.6..1.0);
            DVec2::new(r * angle.cos(), r * angle.sin())
        })
        .collect()
}

/// Circular-orbit solar system with moons, cosmetic belt and three probes.
pub fn orrery<R: Rng + ?Sized>(
    config: &SimulationConfig,
    rng: &mut R,
) -> Result<Simulation, ConfigError> {
    let mut bodies = vec![Body::primary("Sun", DVec2::ZERO, 24.0, SUN_MASS, SUN_COLOR)];
    for planet in ORRERY_PLANETS {
        let moons = planet
            .moons
            .iter()
            .map(|moon| orbiting_from(moon, rng.gen_range(0.0..TAU), config.body_trail_cap))
            .collect();
        bodies.push(
            orbiting_from(planet, rng.gen_range(0.0..TAU), config.body_trail_cap).with_moons(moons),
        );
    }

    let asteroids = (0..config.asteroid_count)
        .map(|_| {
            let shade = rng.gen_range(0.35..0.65);
            Asteroid {
                orbit: CircularOrbit::new(
                    rng.gen_range(BELT_RADIUS.0..BELT_RADIUS.1),
                    rng.gen_range(0.0..TAU),
                    rng.gen_range(BELT_RATE.0..BELT_RATE.1),
                ),
                outline: asteroid_outline(rng),
                color: Color::srgb(shade, shade * 0.95, shade * 0.9),
            }
        })
        .collect();

    let earth = index_of(&bodies, "Earth");
    let targets = [
        ("Ares", BodyId::body(index_of(&bodies, "Mars"))),
        ("Juno", BodyId::body(index_of(&bodies, "Jupiter"))),
        ("Huygens", BodyId::moon(index_of(&bodies, "Saturn"), 0)),
    ];
    let spacecraft = launch_probes(config, &bodies, BodyId::body(earth), &targets);

    info!("Assembled orrery with {} planets", ORRERY_PLANETS.len());
    Simulation::new(config, bodies, spacecraft, asteroids)
}

/// Circular orbital speed at `distance` around `mass`.
fn circular_speed(mass: f64, distance: f64) -> f64 {
    (G * mass / distance).sqrt()
}

/// Position and counter-clockwise circular velocity at `angle`.
fn circular_state(mass: f64, distance: f64, angle: f64) -> (DVec2, DVec2) {
    let dir = DVec2::new(angle.cos(), angle.sin());
    let tangent = DVec2::new(-dir.y, dir.x);
    (dir * distance, tangent * circular_speed(mass, distance))
}

/// Mutual-gravity system in SI units with a belt of low-mass bodies.
pub fn gravity_well<R: Rng + ?Sized>(
    config: &SimulationConfig,
    rng: &mut R,
) -> Result<Simulation, ConfigError> {
    let mut bodies = vec![
        Body::ballistic(
            "Sun",
            DVec2::ZERO,
            DVec2::ZERO,
            SUN_MASS,
            1.5e10,
            SUN_COLOR,
            config.body_trail_cap,
        )
        .as_primary(),
    ];

    for planet in GRAVITY_PLANETS {
        let (pos, vel) = circular_state(SUN_MASS, planet.distance, rng.gen_range(0.0..TAU));
        let mut body = Body::ballistic(
            planet.name,
            pos,
            vel,
            planet.mass,
            planet.radius,
            planet.color,
            config.body_trail_cap,
        );

        if planet.name == "Earth" {
            let (offset, rel_vel) =
                circular_state(planet.mass, MOON_DISTANCE, rng.gen_range(0.0..TAU));
            body = body.with_moons(vec![Body::ballistic(
                "Moon",
                pos + offset,
                vel + rel_vel,
                MOON_MASS,
                1.5e9,
                Color::srgb(0.75, 0.75, 0.75),
                config.body_trail_cap,
            )]);
        }
        bodies.push(body);
    }

    for i in 0..config.asteroid_count {
        let distance = rng.gen_range(GRAVITY_BELT_DISTANCE.0..GRAVITY_BELT_DISTANCE.1);
        let (pos, vel) = circular_state(SUN_MASS, distance, rng.gen_range(0.0..TAU));
        let shade = rng.gen_range(0.35..0.65);
        bodies.push(Body::ballistic(
            format!("Belt-{i}"),
            pos,
            vel,
            rng.gen_range(GRAVITY_BELT_MASS.0..GRAVITY_BELT_MASS.1),
            1.0e9,
            Color::srgb(shade, shade, shade),
            config.belt_trail_cap,
        ));
    }

    let earth = index_of(&bodies, "Earth");
    let targets = [
        ("Ares", BodyId::body(index_of(&bodies, "Mars"))),
        ("Magellan", BodyId::body(index_of(&bodies, "Venus"))),
        ("Juno", BodyId::body(index_of(&bodies, "Jupiter"))),
    ];
    let spacecraft = launch_probes(config, &bodies, BodyId::body(earth), &targets);

    info!(
        "Assembled gravity well: {} planets, {} belt bodies",
        GRAVITY_PLANETS.len(),
        config.asteroid_count
    );
    Simulation::new(config, bodies, spacecraft, Vec::new())
}

/// One probe per target, all launched from the `from` body's position.
fn launch_probes(
    config: &SimulationConfig,
    bodies: &[Body],
    from: BodyId,
    targets: &[(&str, BodyId)],
) -> Vec<Spacecraft> {
    let launch_site = bodies
        .get(from.index)
        .map_or(DVec2::ZERO, |b| b.position(DVec2::ZERO));

    targets
        .iter()
        .zip(PROBE_COLORS.iter().cycle())
        .map(|(&(name, target), &color)| {
            Spacecraft::new(
                name,
                launch_site,
                target,
                config.spacecraft_speed,
                color,
                config.spacecraft_trail_cap,
            )
        })
        .collect()
}
