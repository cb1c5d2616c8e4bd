//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied timestep only
//! - Seeded RNG only
//! - Fixed update order (players before ball)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{reflect_off_paddle, reflect_off_wall, vertical_overlap};
pub use state::{Ball, Edge, GameEvent, KeyStates, MatchState, Player, RngState, Table};
pub use tick::{TickInput, tick};
