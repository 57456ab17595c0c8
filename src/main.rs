//! Orrery - 2D orbital mechanics visualization
//!
//! Usage: `orrery [circular|gravity] [seed]`

use bevy::prelude::*;

use orrery::config::SimulationConfig;
use orrery::input::InputPlugin;
use orrery::render::RenderPlugin;
use orrery::scenarios;
use orrery::simulation::SimulationPlugin;

fn config_from_args() -> SimulationConfig {
    let mut args = std::env::args().skip(1);
    let mut config = match args.next().as_deref() {
        Some("gravity") => SimulationConfig::gravity_well(),
        Some("circular") | None => SimulationConfig::orrery(),
        Some(other) => {
            eprintln!("unknown model '{other}', using circular");
            SimulationConfig::orrery()
        }
    };
    if let Some(seed) = args.next() {
        match seed.parse() {
            Ok(seed) => config = config.with_seed(seed),
            Err(e) => eprintln!("ignoring seed '{seed}': {e}"),
        }
    }
    config
}

fn main() -> AppExit {
    let config = config_from_args();
    let sim = match scenarios::build(&config) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("invalid configuration: {e}");
            return AppExit::error();
        }
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Orrery".into(),
                ..default()
            }),
            ..default()
        }))
        // Insert resources before plugins that depend on them
        .insert_resource(config)
        .insert_resource(sim)
        .add_plugins((SimulationPlugin::default(), InputPlugin, RenderPlugin))
        .run()
}
