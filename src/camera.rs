//! Viewport transform between simulation space and screen pixels.
//!
//! Screen space has its origin at the top-left corner with y growing
//! downward; the camera centre maps to the middle of the screen.

use bevy::math::DVec2;

/// Minimum zoom the input layer allows.
pub const MIN_ZOOM: f64 = 1e-12;

/// Maximum zoom the input layer allows.
pub const MAX_ZOOM: f64 = 50.0;

/// Multiplicative zoom step per key press or wheel notch.
pub const ZOOM_SPEED: f64 = 0.1;

/// Smallest on-screen body radius in pixels for the gravity variant.
pub const MIN_SCREEN_RADIUS: f64 = 2.0;

/// Camera state: what point sits at the screen centre and how many pixels
/// one simulation unit spans.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub center: DVec2,
    /// Pixels per simulation unit. Strictly positive.
    pub zoom: f64,
    /// Screen size in pixels.
    pub screen_size: DVec2,
}

impl Viewport {
    pub fn new(center: DVec2, zoom: f64, screen_size: DVec2) -> Self {
        Self {
            center,
            zoom,
            screen_size,
        }
    }

    /// Map a simulation point to screen pixels.
    #[inline]
    pub fn world_to_screen(&self, point: DVec2) -> DVec2 {
        (point - self.center) * self.zoom + self.screen_size * 0.5
    }

    /// Inverse of [`Viewport::world_to_screen`].
    #[inline]
    pub fn screen_to_world(&self, point: DVec2) -> DVec2 {
        (point - self.screen_size * 0.5) / self.zoom + self.center
    }

    /// On-screen radius for a body, never smaller than two pixels.
    #[inline]
    pub fn screen_radius(&self, radius: f64) -> f64 {
        (radius * self.zoom).max(MIN_SCREEN_RADIUS)
    }

    /// Move the centre by a screen-space offset in pixels.
    pub fn pan_by(&mut self, pixels: DVec2) {
        self.center += pixels / self.zoom;
    }

    /// Multiply the zoom by `factor`, clamped to the UI range.
    pub fn zoom_by(&mut self, factor: f64) {
        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
    }
}
