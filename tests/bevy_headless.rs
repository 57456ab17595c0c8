//! Headless Bevy integration tests.
//!
//! These tests drive the simulation resource through a Bevy app without a
//! window or GPU.

use bevy::prelude::*;
use orrery::config::SimulationConfig;
use orrery::scenarios;
use orrery::simulation::{SimCommand, Simulation};

fn create_minimal_app(config: SimulationConfig) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(scenarios::build(&config).unwrap());
    app.insert_resource(config);
    app
}

/// One tick per frame with a fixed frame time, independent of the real clock.
fn fixed_frame_tick(mut sim: ResMut<Simulation>) {
    sim.step(1.0 / 60.0);
}

#[test]
fn test_simulation_resource_initializes() {
    let mut app = create_minimal_app(SimulationConfig::orrery().with_seed(1));
    app.update();

    let sim = app.world().resource::<Simulation>();
    assert_eq!(sim.kinematics_label(), "circular");
    assert!(sim.body_count() > 9);
    assert!(app.world().contains_resource::<SimulationConfig>());
}

#[test]
fn test_simulation_advances_per_frame() {
    let mut app = create_minimal_app(SimulationConfig::orrery().with_seed(2));
    app.add_systems(Update, fixed_frame_tick);

    for _ in 0..5 {
        app.update();
    }

    let sim = app.world().resource::<Simulation>();
    assert_eq!(sim.clock.ticks(), 5);
    assert!(sim.clock.elapsed() > 0.0);
    // Mars is far enough away that Ares is still in flight.
    let ares = sim.spacecraft().iter().find(|c| c.name == "Ares").unwrap();
    assert_eq!(ares.trail.len(), 5);
    assert!(!ares.arrived());
}

#[test]
fn test_paused_simulation_does_not_advance() {
    let mut app = create_minimal_app(SimulationConfig::gravity_well().with_seed(3));
    app.add_systems(Update, fixed_frame_tick);
    app.world_mut()
        .resource_mut::<Simulation>()
        .apply(SimCommand::TogglePause);

    let before = app.world().resource::<Simulation>().snapshot();
    for _ in 0..5 {
        app.update();
    }

    let sim = app.world().resource::<Simulation>();
    assert_eq!(sim.clock.ticks(), 0);
    let after = sim.snapshot();
    for (a, b) in before.bodies.iter().zip(&after.bodies) {
        assert_eq!(a.position, b.position);
    }
}
