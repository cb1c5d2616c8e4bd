//! Table Pong - a two-paddle table game simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, ball, collisions, tick)
//! - `watch`: Multi-city analog watch hand-angle computation
//! - `config`: Construction-time configuration for match entities
//!
//! Rendering, input capture, and wall-clock reads are external collaborators.
//! The simulation advances only through `sim::tick` with a caller-supplied
//! timestep and key states.

pub mod config;
pub mod sim;
pub mod watch;

pub use config::{BallConfig, ExitRule, MatchConfig, PaddleConfig, Side, TableConfig};
pub use watch::Watch;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth physics)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Table half extents (the playing field spans twice these)
    pub const TABLE_HALF_WIDTH: f32 = 5.0;
    pub const TABLE_HALF_HEIGHT: f32 = 3.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 0.2;
    pub const PADDLE_HEIGHT: f32 = 1.0;
    pub const PADDLE_SPEED: f32 = 3.0;
    /// Paddle resting offset as a fraction of the table half width
    pub const PADDLE_BASELINE: f32 = 0.9;
    pub const PADDLE_COLOR: u32 = 0xffffff;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 0.1;
    pub const BALL_SPEED: f32 = 4.0;
    /// Launch angle bound (radians either side of the +x axis)
    pub const BALL_DIRECTION_MAX: f32 = 0.4;
    pub const BALL_COLOR: u32 = 0xffff00;
}

/// Normalize angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Velocity vector for a travel angle (radians from +x, counter-clockwise)
#[inline]
pub fn direction_to_velocity(direction: f32, speed: f32) -> Vec2 {
    Vec2::new(speed * direction.cos(), speed * direction.sin())
}
