//! Construction-time configuration for match entities
//!
//! Statically shaped, serde-friendly parameter structs. Geometry and speeds
//! are fixed for the lifetime of a match; `MatchConfig::validate` rejects
//! malformed values before any entity is built.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Which side of the table a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Sign of the x coordinate on this side
    #[inline]
    pub fn sign(&self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }

    /// The other side of the table
    #[inline]
    pub fn opposite(&self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// The playing field, defined by its half extents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    pub half_size: Vec2,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            half_size: Vec2::new(TABLE_HALF_WIDTH, TABLE_HALF_HEIGHT),
        }
    }
}

/// Paddle construction parameters
///
/// `baseline` is a fraction of the table half width; the resting x offset is
/// `baseline * table.half_size.x`, signed by `side`. `color` is visual only -
/// it is passed through to the rendering collaborator and never read by the
/// simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddleConfig {
    pub color: u32,
    pub side: Side,
    pub size: Vec2,
    pub speed: f32,
    pub baseline: f32,
}

impl PaddleConfig {
    pub fn for_side(side: Side) -> Self {
        Self {
            color: PADDLE_COLOR,
            side,
            size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            speed: PADDLE_SPEED,
            baseline: PADDLE_BASELINE,
        }
    }
}

/// Ball construction parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallConfig {
    pub color: u32,
    pub radius: f32,
    pub speed: f32,
    /// Launch angle bound: serves pick a direction in `[-direction_max, direction_max]`
    pub direction_max: f32,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            color: BALL_COLOR,
            radius: BALL_RADIUS,
            speed: BALL_SPEED,
            direction_max: BALL_DIRECTION_MAX,
        }
    }
}

/// What happens when the ball crosses the table's left or right threshold.
///
/// `Unbounded` keeps the ball travelling past the paddles with no clamp or
/// bounce. `Score` awards a point to the opposite paddle and re-serves from
/// the centerline. The default is `Unbounded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExitRule {
    #[default]
    Unbounded,
    Score,
}

/// Complete match configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub table: TableConfig,
    /// Left paddle
    pub player1: PaddleConfig,
    /// Right paddle
    pub player2: PaddleConfig,
    pub ball: BallConfig,
    pub exit_rule: ExitRule,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            table: TableConfig::default(),
            player1: PaddleConfig::for_side(Side::Left),
            player2: PaddleConfig::for_side(Side::Right),
            ball: BallConfig::default(),
            exit_rule: ExitRule::default(),
        }
    }
}

/// Rejected configuration values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// A table or paddle extent, ball radius, or speed is not strictly positive
    NonPositiveDimension(&'static str),
    /// Baseline fraction outside (0, 1]
    BaselineOutOfRange(f32),
    /// Launch angle bound outside (0, π/2)
    DirectionMaxOutOfRange(f32),
    /// Paddle taller than the table's vertical travel range
    PaddleTallerThanTable,
    /// Ball too large for the serve spread (`half_size.y - 2 * radius <= 0`)
    BallTooLarge,
    /// `player1` must be `Side::Left` and `player2` `Side::Right`
    MismatchedSides,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NonPositiveDimension(what) => {
                write!(f, "{what} must be strictly positive")
            }
            ConfigError::BaselineOutOfRange(v) => {
                write!(f, "baseline fraction {v} outside (0, 1]")
            }
            ConfigError::DirectionMaxOutOfRange(v) => {
                write!(f, "direction_max {v} outside (0, pi/2)")
            }
            ConfigError::PaddleTallerThanTable => {
                write!(f, "paddle is taller than the table")
            }
            ConfigError::BallTooLarge => {
                write!(f, "ball radius leaves no serve spread")
            }
            ConfigError::MismatchedSides => {
                write!(f, "player1 must defend the left side and player2 the right")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl MatchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        use std::f32::consts::FRAC_PI_2;

        if self.table.half_size.x <= 0.0 || self.table.half_size.y <= 0.0 {
            return Err(ConfigError::NonPositiveDimension("table half extent"));
        }
        for paddle in [&self.player1, &self.player2] {
            if paddle.size.x <= 0.0 || paddle.size.y <= 0.0 {
                return Err(ConfigError::NonPositiveDimension("paddle extent"));
            }
            if paddle.speed <= 0.0 {
                return Err(ConfigError::NonPositiveDimension("paddle speed"));
            }
            if !(paddle.baseline > 0.0 && paddle.baseline <= 1.0) {
                return Err(ConfigError::BaselineOutOfRange(paddle.baseline));
            }
            if paddle.size.y / 2.0 > self.table.half_size.y {
                return Err(ConfigError::PaddleTallerThanTable);
            }
        }
        if self.player1.side != Side::Left || self.player2.side != Side::Right {
            return Err(ConfigError::MismatchedSides);
        }
        if self.ball.radius <= 0.0 {
            return Err(ConfigError::NonPositiveDimension("ball radius"));
        }
        if self.ball.speed <= 0.0 {
            return Err(ConfigError::NonPositiveDimension("ball speed"));
        }
        if !(self.ball.direction_max > 0.0 && self.ball.direction_max < FRAC_PI_2) {
            return Err(ConfigError::DirectionMaxOutOfRange(self.ball.direction_max));
        }
        if self.table.half_size.y - 2.0 * self.ball.radius <= 0.0 {
            return Err(ConfigError::BallTooLarge);
        }
        Ok(())
    }
}
