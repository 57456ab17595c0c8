//! Simulation clock: pause state, time scale and per-tick delta.

use bevy::log::info;

/// Where the raw per-tick delta comes from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickSource {
    /// Every tick advances by this many simulated seconds, whatever the
    /// wall clock did.
    Fixed(f64),
    /// The tick advances by the real time elapsed since the last tick.
    WallClock,
}

/// Time-scale limits and step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScaleRange {
    pub min: f64,
    pub max: f64,
    /// Size of one adjustment step; the scale is kept on this grid.
    pub step: f64,
}

impl Default for TimeScaleRange {
    fn default() -> Self {
        Self {
            min: 0.1,
            max: 5.0,
            step: 0.1,
        }
    }
}

impl TimeScaleRange {
    /// Snap to the step grid and clamp into range.
    pub fn clamp(&self, scale: f64) -> f64 {
        ((scale / self.step).round() * self.step).clamp(self.min, self.max)
    }
}

/// Deltas for one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    /// Delta before the time scale is applied.
    pub raw_dt: f64,
    /// `raw_dt * time_scale`.
    pub dt: f64,
}

/// Tracks pause, scale and accumulated simulation time.
#[derive(Clone, Debug)]
pub struct SimulationClock {
    pub paused: bool,
    time_scale: f64,
    range: TimeScaleRange,
    source: TickSource,
    /// Accumulated simulated seconds.
    elapsed: f64,
    ticks: u64,
}

impl SimulationClock {
    pub fn new(source: TickSource, time_scale: f64, range: TimeScaleRange) -> Self {
        Self {
            paused: false,
            time_scale: range.clamp(time_scale),
            range,
            source,
            elapsed: 0.0,
            ticks: 0,
        }
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn source(&self) -> TickSource {
        self.source
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        info!("Simulation {}", if self.paused { "paused" } else { "running" });
    }

    /// Nudge the time scale by `steps` increments. Out-of-range requests
    /// are clamped, never rejected.
    pub fn adjust_time_scale(&mut self, steps: i32) {
        self.set_time_scale(self.time_scale + f64::from(steps) * self.range.step);
    }

    pub fn set_time_scale(&mut self, scale: f64) {
        let scale = if scale.is_finite() { scale } else { self.time_scale };
        self.time_scale = self.range.clamp(scale);
        info!("Time scale: {:.1}x", self.time_scale);
    }

    /// Produce the deltas for one tick, or `None` while paused.
    ///
    /// `real_dt` is the wall time since the previous tick; it is ignored
    /// for a fixed tick source.
    pub fn advance(&mut self, real_dt: f64) -> Option<Tick> {
        if self.paused {
            return None;
        }

        let raw_dt = match self.source {
            TickSource::Fixed(dt) => dt,
            TickSource::WallClock => real_dt.max(0.0),
        };
        let dt = raw_dt * self.time_scale;

        self.elapsed += dt;
        self.ticks += 1;
        Some(Tick { raw_dt, dt })
    }
}
