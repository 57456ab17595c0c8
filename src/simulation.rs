//! The simulation owner: bodies, spacecraft, asteroids, camera and clock.
//!
//! One call to [`Simulation::step`] is one full tick. Callers only ever see
//! state between ticks, through [`Simulation::snapshot`].

use std::ops::ControlFlow;

use bevy::color::Color;
use bevy::log::{debug, info, warn};
use bevy::math::DVec2;
use bevy::prelude::*;

use crate::body::{Asteroid, Body};
use crate::camera::Viewport;
use crate::config::{ConfigError, SimulationConfig};
use crate::physics::{advance_asteroids, Kinematics, KinematicsModel};
use crate::spacecraft::{MissionClock, Spacecraft, SteeringConfig};
use crate::time::{SimulationClock, Tick};
use crate::types::BodyId;

/// Ticks the [`Simulation`] resource in `FixedUpdate`.
///
/// The fixed timestep stands in for the frame loop: each run is one tick
/// fed with the fixed delta as real time.
pub struct SimulationPlugin {
    pub tick_hz: f64,
}

impl Default for SimulationPlugin {
    fn default() -> Self {
        Self { tick_hz: 60.0 }
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(self.tick_hz))
            .add_systems(FixedUpdate, simulation_tick);
    }
}

fn simulation_tick(time: Res<Time>, mut sim: ResMut<Simulation>) {
    sim.step(time.delta_secs_f64());
}

/// Discrete commands from the input layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimCommand {
    TogglePause,
    /// Change the time scale by this many increments.
    AdjustTimeScale(i32),
    ResetMissions,
    Quit,
}

#[derive(Resource)]
pub struct Simulation {
    bodies: Vec<Body>,
    spacecraft: Vec<Spacecraft>,
    asteroids: Vec<Asteroid>,
    kinematics: Box<dyn Kinematics>,
    steering: SteeringConfig,
    /// Scale body radii by zoom (gravity variant) instead of drawing them
    /// at a fixed pixel size.
    scale_radius: bool,
    pub viewport: Viewport,
    pub clock: SimulationClock,
}

impl Simulation {
    /// Assemble a simulation from prepared entities.
    ///
    /// Spacecraft targets must name bodies that exist in `bodies`.
    pub fn new(
        config: &SimulationConfig,
        bodies: Vec<Body>,
        spacecraft: Vec<Spacecraft>,
        asteroids: Vec<Asteroid>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let kinematics = config.model.build();
        let sim = Self {
            bodies,
            spacecraft,
            asteroids,
            kinematics,
            steering: config.steering,
            scale_radius: matches!(config.model, KinematicsModel::Gravity { .. }),
            viewport: Viewport::new(config.camera_center, config.zoom, config.screen_size),
            clock: SimulationClock::new(
                config.tick_source,
                config.time_scale,
                config.time_scale_range,
            ),
        };

        debug_assert!(
            sim.spacecraft.iter().all(|c| sim.body_position(c.target).is_some()),
            "spacecraft target outside the body tree"
        );

        info!(
            "Simulation ready: {} model, {} bodies, {} spacecraft, {} asteroids",
            sim.kinematics.label(),
            sim.body_count(),
            sim.spacecraft.len(),
            sim.asteroids.len()
        );
        debug!("Initial momentum: {:?}", sim.total_momentum());
        Ok(sim)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn spacecraft(&self) -> &[Spacecraft] {
        &self.spacecraft
    }

    pub fn asteroids(&self) -> &[Asteroid] {
        &self.asteroids
    }

    pub fn kinematics_label(&self) -> &'static str {
        self.kinematics.label()
    }

    /// Total number of bodies in the tree, moons included.
    pub fn body_count(&self) -> usize {
        self.bodies.iter().map(Body::subtree_len).sum()
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        let body = self.bodies.get(id.index)?;
        match id.moon {
            None => Some(body),
            Some(m) => body.moons.get(m),
        }
    }

    /// Current world position of a body.
    pub fn body_position(&self, id: BodyId) -> Option<DVec2> {
        let body = self.bodies.get(id.index)?;
        let pos = body.position(DVec2::ZERO);
        match id.moon {
            None => Some(pos),
            Some(m) => body.moons.get(m).map(|moon| moon.position(pos)),
        }
    }

    /// Sum of `mass * velocity` over ballistic bodies.
    pub fn total_momentum(&self) -> DVec2 {
        fn walk(bodies: &[Body]) -> DVec2 {
            bodies
                .iter()
                .map(|b| b.velocity().unwrap_or(DVec2::ZERO) * b.mass + walk(&b.moons))
                .sum()
        }
        walk(&self.bodies)
    }

    /// Run one tick. Returns the deltas used, or `None` while paused.
    pub fn step(&mut self, real_dt: f64) -> Option<Tick> {
        let tick = self.clock.advance(real_dt)?;

        self.kinematics.advance(&mut self.bodies, tick.dt);
        advance_asteroids(&mut self.asteroids, tick.dt);
        self.steer_spacecraft(tick);

        Some(tick)
    }

    fn steer_spacecraft(&mut self, tick: Tick) {
        let elapsed = match self.steering.mission_clock {
            MissionClock::Scaled => tick.dt,
            MissionClock::Unscaled => tick.raw_dt,
        };
        let threshold = self.steering.arrival_threshold;

        for i in 0..self.spacecraft.len() {
            let target = self.spacecraft[i].target;
            let Some(target_pos) = self.body_position(target) else {
                warn!("{} has no target {:?}", self.spacecraft[i].name, target);
                continue;
            };

            let craft = &mut self.spacecraft[i];
            if craft.steer(target_pos, threshold, elapsed) {
                let target_name = self.body(target).map_or("?", |b| b.name.as_str());
                info!(
                    "{} arrived at {} after {:.1} s",
                    self.spacecraft[i].name, target_name, self.spacecraft[i].mission_time
                );
            }
        }
    }

    /// Send every spacecraft back to its launch site with the same target.
    pub fn reset_spacecraft(&mut self) {
        for craft in &mut self.spacecraft {
            craft.reset();
        }
        info!("Missions reset: {} spacecraft relaunched", self.spacecraft.len());
    }

    /// Apply an input command. `Break` means the caller should stop
    /// ticking.
    pub fn apply(&mut self, command: SimCommand) -> ControlFlow<()> {
        debug!("Command: {:?}", command);
        match command {
            SimCommand::TogglePause => self.clock.toggle_pause(),
            SimCommand::AdjustTimeScale(steps) => self.clock.adjust_time_scale(steps),
            SimCommand::ResetMissions => self.reset_spacecraft(),
            SimCommand::Quit => return ControlFlow::Break(()),
        }
        ControlFlow::Continue(())
    }

    /// Screen-space view of the current state for the renderer.
    pub fn snapshot(&self) -> Snapshot {
        let viewport = &self.viewport;
        let scale_radius = self.scale_radius;

        Snapshot {
            bodies: self
                .bodies
                .iter()
                .map(|b| snapshot_body(b, DVec2::ZERO, viewport, scale_radius))
                .collect(),
            spacecraft: self
                .spacecraft
                .iter()
                .map(|c| SpacecraftSnapshot {
                    name: c.name.clone(),
                    position: viewport.world_to_screen(c.pos),
                    color: c.color,
                    arrived: c.arrived(),
                    trail: c.trail.iter().map(|p| viewport.world_to_screen(p)).collect(),
                })
                .collect(),
            asteroids: self
                .asteroids
                .iter()
                .map(|a| {
                    let centre = a.position();
                    AsteroidSnapshot {
                        outline: a
                            .outline
                            .iter()
                            .map(|o| viewport.world_to_screen(centre + *o))
                            .collect(),
                        color: a.color,
                    }
                })
                .collect(),
            paused: self.clock.paused,
            time_scale: self.clock.time_scale(),
            elapsed: self.clock.elapsed(),
        }
    }
}

fn snapshot_body(body: &Body, parent: DVec2, viewport: &Viewport, scale_radius: bool) -> BodySnapshot {
    let pos = body.position(parent);
    let radius = if scale_radius {
        viewport.screen_radius(body.radius)
    } else {
        body.radius
    };

    BodySnapshot {
        name: body.name.clone(),
        position: viewport.world_to_screen(pos),
        radius,
        color: body.color,
        primary: body.primary,
        trail: body.trail.iter().map(|p| viewport.world_to_screen(p)).collect(),
        moons: body
            .moons
            .iter()
            .map(|m| snapshot_body(m, pos, viewport, scale_radius))
            .collect(),
    }
}

/// Read-only, screen-space state after a tick.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub bodies: Vec<BodySnapshot>,
    pub spacecraft: Vec<SpacecraftSnapshot>,
    pub asteroids: Vec<AsteroidSnapshot>,
    pub paused: bool,
    pub time_scale: f64,
    pub elapsed: f64,
}

#[derive(Clone, Debug)]
pub struct BodySnapshot {
    pub name: String,
    pub position: DVec2,
    /// Radius in pixels.
    pub radius: f64,
    pub color: Color,
    pub primary: bool,
    /// Oldest first.
    pub trail: Vec<DVec2>,
    pub moons: Vec<BodySnapshot>,
}

#[derive(Clone, Debug)]
pub struct SpacecraftSnapshot {
    pub name: String,
    pub position: DVec2,
    pub color: Color,
    pub arrived: bool,
    /// Oldest first.
    pub trail: Vec<DVec2>,
}

#[derive(Clone, Debug)]
pub struct AsteroidSnapshot {
    pub outline: Vec<DVec2>,
    pub color: Color,
}
