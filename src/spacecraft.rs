//! Spacecraft that fly straight at a moving target body.
//!
//! Each tick a craft in flight moves `speed` units along the unit vector
//! toward its target's current position. Once it is within the arrival
//! threshold it stops for good.

use bevy::color::Color;
use bevy::math::DVec2;

use crate::trail::Trail;
use crate::types::{normalize, BodyId};

/// State of a spacecraft mission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissionState {
    /// Still closing on the target.
    InFlight,
    /// Reached the target. Only a mission reset leaves this state.
    Arrived,
}

/// Which delta mission time is accumulated from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MissionClock {
    /// Delta after the time scale is applied.
    #[default]
    Scaled,
    /// Raw delta before the time scale.
    Unscaled,
}

/// Steering parameters shared by every craft in a simulation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SteeringConfig {
    /// Distance at or below which a craft counts as arrived.
    pub arrival_threshold: f64,
    pub mission_clock: MissionClock,
}

impl Default for SteeringConfig {
    fn default() -> Self {
        Self {
            arrival_threshold: 10.0,
            mission_clock: MissionClock::Scaled,
        }
    }
}

/// A spacecraft agent.
#[derive(Clone, Debug)]
pub struct Spacecraft {
    pub name: String,
    pub pos: DVec2,
    /// Body being chased. Not owned.
    pub target: BodyId,
    pub color: Color,
    /// Distance covered per tick.
    pub speed: f64,
    pub state: MissionState,
    /// Seconds since launch, counted every tick, arrived or not.
    pub mission_time: f64,
    pub trail: Trail,
    launch_site: DVec2,
}

impl Spacecraft {
    pub fn new(
        name: impl Into<String>,
        launch_site: DVec2,
        target: BodyId,
        speed: f64,
        color: Color,
        trail_cap: usize,
    ) -> Self {
        Self {
            name: name.into(),
            pos: launch_site,
            target,
            color,
            speed,
            state: MissionState::InFlight,
            mission_time: 0.0,
            trail: Trail::new(trail_cap),
            launch_site,
        }
    }

    pub fn arrived(&self) -> bool {
        self.state == MissionState::Arrived
    }

    pub fn launch_site(&self) -> DVec2 {
        self.launch_site
    }

    /// Advance one tick toward `target_pos`.
    ///
    /// Returns `true` only on the tick the craft arrives.
    pub fn steer(&mut self, target_pos: DVec2, arrival_threshold: f64, elapsed: f64) -> bool {
        self.mission_time += elapsed;

        if self.arrived() {
            return false;
        }

        let to_target = target_pos - self.pos;
        if to_target.length() > arrival_threshold {
            self.pos += normalize(to_target) * self.speed;
            self.trail.push(self.pos);
            false
        } else {
            self.state = MissionState::Arrived;
            true
        }
    }

    /// Put the craft back on the pad: in flight, empty trail, clock at zero.
    pub fn reset(&mut self) {
        self.pos = self.launch_site;
        self.state = MissionState::InFlight;
        self.mission_time = 0.0;
        self.trail.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const THRESHOLD: f64 = 10.0;

    fn craft(cap: usize) -> Spacecraft {
        Spacecraft::new("probe", DVec2::ZERO, BodyId::body(1), 2.0, Color::WHITE, cap)
    }

    #[test]
    fn test_arrives_after_exact_tick_count() {
        let target = DVec2::new(1000.0, 0.0);
        let mut probe = craft(800);

        let mut ticks = 0;
        while !probe.steer(target, THRESHOLD, 1.0) {
            ticks += 1;
            assert!(ticks < 10_000, "probe never arrived");
        }

        // 495 moves bring it to exactly the threshold; the next tick arrives
        assert_eq!(ticks, 495);
        assert!(probe.arrived());
        assert_eq!(probe.trail.len(), 495);
        assert_relative_eq!(probe.pos.x, 990.0);
        assert_relative_eq!(probe.mission_time, 496.0);
    }

    #[test]
    fn test_trail_capped_during_long_flight() {
        let target = DVec2::new(1000.0, 0.0);
        let mut probe = craft(200);
        for _ in 0..495 {
            probe.steer(target, THRESHOLD, 1.0);
        }
        assert_eq!(probe.trail.len(), 200);
        assert_eq!(probe.trail.newest(), Some(probe.pos));
    }

    #[test]
    fn test_arrival_is_sticky() {
        let mut probe = craft(100);
        assert!(probe.steer(DVec2::new(5.0, 0.0), THRESHOLD, 0.5));
        let pos = probe.pos;

        // Target runs away; the craft stays arrived and stays put
        for i in 0..20 {
            assert!(!probe.steer(DVec2::new(500.0 + i as f64, 0.0), THRESHOLD, 0.5));
            assert!(probe.arrived());
            assert_eq!(probe.pos, pos);
        }
        assert!(probe.trail.is_empty());
        assert_relative_eq!(probe.mission_time, 10.5);
    }

    #[test]
    fn test_moves_toward_moving_target() {
        let mut probe = craft(100);
        probe.steer(DVec2::new(0.0, 100.0), THRESHOLD, 1.0);
        assert_relative_eq!(probe.pos.y, 2.0, epsilon = 1e-12);
        probe.steer(DVec2::new(100.0, 2.0), THRESHOLD, 1.0);
        assert_relative_eq!(probe.pos.x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(probe.pos.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_reset_restores_launch_state() {
        let mut probe = craft(100);
        probe.steer(DVec2::new(4.0, 0.0), THRESHOLD, 3.0);
        probe.steer(DVec2::new(4.0, 0.0), THRESHOLD, 3.0);
        assert!(probe.arrived());

        probe.reset();
        assert!(!probe.arrived());
        assert!(probe.trail.is_empty());
        assert_eq!(probe.mission_time, 0.0);
        assert_eq!(probe.pos, probe.launch_site());
        assert_eq!(probe.target, BodyId::body(1));
    }
}
