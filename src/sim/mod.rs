//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only, one `step` per tick
//! - No randomness, no clock reads
//! - Input is read through an `InputSnapshot`, never from live handlers
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use collision::{hits_left_paddle, hits_right_paddle, hits_wall};
pub use input::{ControlKey, InputSampler, InputSnapshot, KeyBindings};
pub use state::{Ball, GameState, Paddle, PlayArea, Player, Score, ScoreEvent};
pub use tick::{Tuning, step, step_with};
