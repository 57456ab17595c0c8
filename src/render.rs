//! Gizmo drawing of the simulation snapshot.
//!
//! The simulation hands out screen-space coordinates with a top-left
//! origin; Bevy's 2D camera puts the origin at the window centre with y
//! up, so every point goes through [`to_gizmo`] first.

use bevy::math::DVec2;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::simulation::{BodySnapshot, Simulation, Snapshot};

/// Opacity of the oldest trail segment. Newer segments fade in linearly.
const TRAIL_MIN_ALPHA: f32 = 0.05;
const TRAIL_MAX_ALPHA: f32 = 0.6;

/// Size of the spacecraft marker in pixels.
const CRAFT_SIZE: f32 = 4.0;

const ARRIVED_COLOR: Color = Color::srgb(0.2, 1.0, 0.3);

/// Plugin drawing bodies, trails, asteroids and spacecraft each frame.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::srgb(0.02, 0.02, 0.05)))
            .add_systems(Startup, setup_camera)
            .add_systems(Update, (sync_screen_size, draw_snapshot).chain());
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Keep the viewport's screen size in step with the window.
fn sync_screen_size(
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut sim: ResMut<Simulation>,
) {
    let Ok(window) = window_query.single() else {
        return;
    };
    let size = DVec2::new(f64::from(window.width()), f64::from(window.height()));
    if size.x > 0.0 && size.y > 0.0 && sim.viewport.screen_size != size {
        sim.viewport.screen_size = size;
    }
}

/// Screen pixels (top-left origin, y down) to 2D camera coordinates.
pub fn to_gizmo(point: DVec2, screen_size: DVec2) -> Vec2 {
    Vec2::new(
        (point.x - screen_size.x * 0.5) as f32,
        (screen_size.y * 0.5 - point.y) as f32,
    )
}

fn draw_snapshot(sim: Res<Simulation>, mut gizmos: Gizmos) {
    let screen = sim.viewport.screen_size;
    let snapshot: Snapshot = sim.snapshot();

    for asteroid in &snapshot.asteroids {
        let outline: Vec<Vec2> = asteroid
            .outline
            .iter()
            .map(|p| to_gizmo(*p, screen))
            .collect();
        if let Some(&first) = outline.first() {
            gizmos.linestrip_2d(outline.into_iter().chain(std::iter::once(first)), asteroid.color);
        }
    }

    for body in &snapshot.bodies {
        draw_body(&mut gizmos, body, screen);
    }

    for craft in &snapshot.spacecraft {
        draw_trail(&mut gizmos, &craft.trail, craft.color, screen);
        let color = if craft.arrived { ARRIVED_COLOR } else { craft.color };
        let p = to_gizmo(craft.position, screen);
        gizmos.line_2d(p + Vec2::new(-CRAFT_SIZE, 0.0), p + Vec2::new(CRAFT_SIZE, 0.0), color);
        gizmos.line_2d(p + Vec2::new(0.0, -CRAFT_SIZE), p + Vec2::new(0.0, CRAFT_SIZE), color);
    }
}

fn draw_body(gizmos: &mut Gizmos, body: &BodySnapshot, screen: DVec2) {
    draw_trail(gizmos, &body.trail, body.color, screen);

    let center = to_gizmo(body.position, screen);
    gizmos.circle_2d(Isometry2d::from_translation(center), body.radius as f32, body.color);
    if body.primary {
        gizmos.circle_2d(
            Isometry2d::from_translation(center),
            body.radius as f32 * 1.3,
            body.color.with_alpha(0.3),
        );
    }

    for moon in &body.moons {
        draw_body(gizmos, moon, screen);
    }
}

/// Fading polyline, oldest segment faintest.
fn draw_trail(gizmos: &mut Gizmos, trail: &[DVec2], color: Color, screen: DVec2) {
    if trail.len() < 2 {
        return;
    }
    let last = (trail.len() - 1) as f32;
    gizmos.linestrip_gradient_2d(trail.iter().enumerate().map(|(i, p)| {
        let t = i as f32 / last;
        let alpha = TRAIL_MIN_ALPHA + (TRAIL_MAX_ALPHA - TRAIL_MIN_ALPHA) * t;
        (to_gizmo(*p, screen), color.with_alpha(alpha))
    }));
}
