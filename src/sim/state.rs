//! Match state and core simulation entities
//!
//! All state that must be persisted for replay/determinism lives here.
//! Entities are pure data paired with their per-frame transition methods;
//! renderable objects are the collaborator's concern and are keyed off these
//! records, never mixed into them.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::{reflect_off_paddle, reflect_off_wall, vertical_overlap};
use crate::config::{
    BallConfig, ConfigError, ExitRule, MatchConfig, PaddleConfig, Side, TableConfig,
};
use crate::direction_to_velocity;

/// Boolean directional key state, set by the input collaborator each frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyStates {
    pub down: bool,
    pub up: bool,
}

/// Horizontal table edges the ball can bounce off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Bottom,
}

/// Things that happened during one update, for the driver to react to
/// (sound, scoring display, round resets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball reflected off a paddle face
    PaddleBounce { side: Side },
    /// Ball reflected off the top or bottom table edge
    WallBounce { edge: Edge },
    /// Ball crossed the left or right table threshold
    BallExit { side: Side },
    /// A point was awarded; `score` is the scorer's new total
    PointScored { side: Side, score: u32 },
}

/// The playing field. Immutable after construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub half_size: Vec2,
}

impl Table {
    pub fn new(config: &TableConfig) -> Self {
        Self {
            half_size: config.half_size,
        }
    }

    /// Full extents (twice the half extents)
    #[inline]
    pub fn size(&self) -> Vec2 {
        self.half_size * 2.0
    }
}

/// A paddle: moves vertically from boolean key states, clamped to the table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Paddle centroid, mutated each frame
    pub center: Vec2,
    pub size: Vec2,
    pub half_size: Vec2,
    pub side: Side,
    pub speed: f32,
    /// Resting x offset magnitude (baseline fraction resolved against the
    /// table half width)
    baseline: f32,
    /// Lowest reachable centroid y
    pub center_lower: f32,
    /// Highest reachable centroid y
    pub center_upper: f32,
    /// Set externally before each `update` call
    pub key_states: KeyStates,
    pub score: u32,
}

impl Player {
    pub fn new(config: &PaddleConfig, table: &Table) -> Self {
        let half_size = config.size / 2.0;
        let mut player = Self {
            center: Vec2::ZERO,
            size: config.size,
            half_size,
            side: config.side,
            speed: config.speed,
            baseline: config.baseline * table.half_size.x,
            center_lower: -table.half_size.y + half_size.y,
            center_upper: table.half_size.y - half_size.y,
            key_states: KeyStates::default(),
            score: 0,
        };
        player.initialize();
        player
    }

    /// Reset to the start-of-match pose: centroid at `(±baseline, 0)` and a
    /// zero score. May be called repeatedly without reconstruction.
    pub fn initialize(&mut self) {
        self.center = Vec2::new(self.side.sign() * self.baseline, 0.0);
        self.score = 0;
    }

    fn check_upper_boundary(&mut self) {
        if self.center.y > self.center_upper {
            self.center.y = self.center_upper;
        }
    }

    fn check_lower_boundary(&mut self) {
        if self.center.y < self.center_lower {
            self.center.y = self.center_lower;
        }
    }

    /// Advance the paddle by one frame.
    ///
    /// Down is applied before up, each step clamping immediately to its own
    /// boundary; both flags may be set at once (input does not guarantee
    /// exclusivity) and then the deltas cancel away from the boundaries.
    pub fn update(&mut self, dt: f32) {
        if self.key_states.down {
            self.center.y -= self.speed * dt;
            self.check_lower_boundary();
        }
        if self.key_states.up {
            self.center.y += self.speed * dt;
            self.check_upper_boundary();
        }
    }

    pub fn update_score(&mut self) {
        self.score += 1;
    }

    /// X coordinate of the face turned toward the table center
    #[inline]
    pub fn inner_face_x(&self) -> f32 {
        self.center.x - self.side.sign() * self.half_size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y + self.half_size.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y - self.half_size.y
    }
}

/// The ball: a circle travelling along an angle, reflecting off paddles and
/// the horizontal table edges
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Ball centroid, mutated each frame
    pub center: Vec2,
    /// Travel angle in radians from the +x axis, counter-clockwise
    pub direction: f32,
    pub speed: f32,
    pub radius: f32,
    /// Highest reachable centroid y before a top bounce
    pub center_upper: f32,
    /// Lowest reachable centroid y before a bottom bounce
    pub center_down: f32,
    /// Left exit threshold. Never clamped against in `update`; consumed only
    /// by the tick's exit detection.
    pub center_left: f32,
    /// Right exit threshold, same caveat as `center_left`
    pub center_right: f32,
    /// Half range of the vertical serve offset (`table_half_y - 2 * radius`)
    launch_spread: f32,
    direction_max: f32,
}

impl Ball {
    pub fn new<R: Rng>(config: &BallConfig, table: &Table, rng: &mut R) -> Self {
        let mut ball = Self {
            center: Vec2::ZERO,
            direction: 0.0,
            speed: config.speed,
            radius: config.radius,
            center_upper: table.half_size.y - config.radius,
            center_down: -table.half_size.y + config.radius,
            center_left: -table.half_size.x + config.radius,
            center_right: table.half_size.x - config.radius,
            launch_spread: table.half_size.y - 2.0 * config.radius,
            direction_max: config.direction_max,
        };
        ball.initialize(rng);
        ball
    }

    /// Serve: launch from the horizontal centerline with a small random
    /// vertical offset, heading at a shallow random angle. The generator is
    /// injected so serves stay reproducible under test.
    pub fn initialize<R: Rng>(&mut self, rng: &mut R) {
        self.center = Vec2::new(0.0, rng.random_range(-self.launch_spread..=self.launch_spread));
        self.direction = rng.random_range(-self.direction_max..=self.direction_max);
    }

    /// Current velocity vector; its length always equals `speed`
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        direction_to_velocity(self.direction, self.speed)
    }

    /// Advance the ball by one frame: integrate along `direction`, then
    /// resolve contacts in fixed order (right paddle, left paddle, top edge,
    /// bottom edge). Left/right table bounds are deliberately not resolved
    /// here; see `center_left`/`center_right`.
    ///
    /// Reads, never writes, the players' state.
    pub fn update(&mut self, dt: f32, player1: &Player, player2: &Player) -> Vec<GameEvent> {
        let mut events = Vec::new();

        let step = self.speed * dt;
        self.center.x += step * self.direction.cos();
        self.center.y += step * self.direction.sin();

        // Paddle rebounds
        if self.center.x + self.radius > player2.inner_face_x()
            && vertical_overlap(
                self.center.y,
                self.radius,
                player2.center.y,
                player2.half_size.y,
            )
        {
            self.center.x = player2.inner_face_x() - self.radius;
            self.direction = reflect_off_paddle(self.direction);
            events.push(GameEvent::PaddleBounce { side: Side::Right });
        }

        if self.center.x - self.radius < player1.inner_face_x()
            && vertical_overlap(
                self.center.y,
                self.radius,
                player1.center.y,
                player1.half_size.y,
            )
        {
            self.center.x = player1.inner_face_x() + self.radius;
            self.direction = reflect_off_paddle(self.direction);
            events.push(GameEvent::PaddleBounce { side: Side::Left });
        }

        // Upper and lower table edges
        if self.center.y > self.center_upper {
            self.center.y = self.center_upper;
            self.direction = reflect_off_wall(self.direction);
            events.push(GameEvent::WallBounce { edge: Edge::Top });
        }

        if self.center.y < self.center_down {
            self.center.y = self.center_down;
            self.direction = reflect_off_wall(self.direction);
            events.push(GameEvent::WallBounce { edge: Edge::Bottom });
        }

        events
    }
}

/// Reproducible serve randomness.
///
/// Each serve derives a fresh `Pcg32` from the match seed and a stepped
/// counter, so a serve's draws are independent of how many values earlier
/// serves consumed and the whole sequence survives serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    serves: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, serves: 0 }
    }

    pub fn serve_rng(&mut self) -> Pcg32 {
        let serve_seed = self
            .seed
            .wrapping_add(self.serves.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        self.serves += 1;
        Pcg32::seed_from_u64(serve_seed)
    }
}

/// Complete match state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    /// Match seed for reproducibility
    pub seed: u64,
    pub rng_state: RngState,
    pub table: Table,
    /// Left paddle
    pub player1: Player,
    /// Right paddle
    pub player2: Player,
    pub ball: Ball,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub exit_rule: ExitRule,
}

impl MatchState {
    /// Build a match from validated configuration and a seed
    pub fn new(config: &MatchConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let table = Table::new(&config.table);
        let player1 = Player::new(&config.player1, &table);
        let player2 = Player::new(&config.player2, &table);
        let mut rng_state = RngState::new(seed);
        let ball = Ball::new(&config.ball, &table, &mut rng_state.serve_rng());

        Ok(Self {
            seed,
            rng_state,
            table,
            player1,
            player2,
            ball,
            time_ticks: 0,
            exit_rule: config.exit_rule,
        })
    }

    /// Reset to start-of-match: both paddles re-centered with zero scores,
    /// a fresh serve, and the serve sequence rewound.
    pub fn initialize(&mut self) {
        self.rng_state = RngState::new(self.seed);
        self.player1.initialize();
        self.player2.initialize();
        let mut rng = self.rng_state.serve_rng();
        self.ball.initialize(&mut rng);
        self.time_ticks = 0;
    }
}
