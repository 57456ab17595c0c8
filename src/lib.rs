//! Orrery - 2D orbital mechanics visualization core
//!
//! Bodies on circular orbits or under mutual gravity, spacecraft that chase
//! them, and a viewport that maps the whole thing to screen pixels. The
//! simulation itself is plain Rust; the Bevy plugins only tick and draw it.

pub mod body;
pub mod camera;
pub mod config;
pub mod input;
pub mod physics;
pub mod render;
pub mod scenarios;
pub mod simulation;
pub mod spacecraft;
pub mod time;
pub mod trail;
pub mod types;

#[cfg(test)]
pub mod test_utils;
