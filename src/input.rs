//! Keyboard and mouse handling.
//!
//! Discrete keys become [`SimCommand`]s; zoom and pan act on the viewport
//! directly.

use bevy::input::mouse::AccumulatedMouseScroll;
use bevy::math::DVec2;
use bevy::prelude::*;

use crate::camera::ZOOM_SPEED;
use crate::simulation::{SimCommand, Simulation};

/// Pixels the arrow keys pan per frame.
pub const PAN_STEP: f64 = 8.0;

/// Plugin providing keyboard and scroll controls.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (keyboard_commands, camera_controls));
    }
}

/// Map this frame's key presses to commands, in a fixed order.
pub fn commands_from_keys(keys: &ButtonInput<KeyCode>) -> Vec<SimCommand> {
    let mut commands = Vec::new();
    if keys.just_pressed(KeyCode::Space) {
        commands.push(SimCommand::TogglePause);
    }
    if keys.just_pressed(KeyCode::BracketRight) {
        commands.push(SimCommand::AdjustTimeScale(1));
    }
    if keys.just_pressed(KeyCode::BracketLeft) {
        commands.push(SimCommand::AdjustTimeScale(-1));
    }
    if keys.just_pressed(KeyCode::KeyR) {
        commands.push(SimCommand::ResetMissions);
    }
    if keys.just_pressed(KeyCode::Escape) || keys.just_pressed(KeyCode::KeyQ) {
        commands.push(SimCommand::Quit);
    }
    commands
}

fn keyboard_commands(
    keys: Res<ButtonInput<KeyCode>>,
    mut sim: ResMut<Simulation>,
    mut exit: MessageWriter<AppExit>,
) {
    for command in commands_from_keys(&keys) {
        if sim.apply(command).is_break() {
            info!("Quit requested");
            exit.write(AppExit::Success);
            return;
        }
    }
}

/// Zoom with +/- or the scroll wheel, pan with the arrow keys.
fn camera_controls(
    keys: Res<ButtonInput<KeyCode>>,
    scroll: Res<AccumulatedMouseScroll>,
    mut sim: ResMut<Simulation>,
) {
    let viewport = &mut sim.viewport;

    if keys.pressed(KeyCode::Equal) || keys.pressed(KeyCode::NumpadAdd) {
        viewport.zoom_by(1.0 + ZOOM_SPEED);
    }
    if keys.pressed(KeyCode::Minus) || keys.pressed(KeyCode::NumpadSubtract) {
        viewport.zoom_by(1.0 - ZOOM_SPEED);
    }
    if scroll.delta.y != 0.0 {
        viewport.zoom_by(1.0 + ZOOM_SPEED * f64::from(scroll.delta.y.signum()));
    }

    let mut pan = DVec2::ZERO;
    if keys.pressed(KeyCode::ArrowLeft) {
        pan.x -= PAN_STEP;
    }
    if keys.pressed(KeyCode::ArrowRight) {
        pan.x += PAN_STEP;
    }
    // Screen y grows downward.
    if keys.pressed(KeyCode::ArrowUp) {
        pan.y -= PAN_STEP;
    }
    if keys.pressed(KeyCode::ArrowDown) {
        pan.y += PAN_STEP;
    }
    if pan != DVec2::ZERO {
        viewport.pan_by(pan);
    }
}
