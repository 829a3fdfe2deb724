//! Game state and core simulation types
//!
//! Everything a renderer needs for one frame lives in `GameState`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Fixed bounds of the field for one session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayArea {
    pub width: f32,
    pub height: f32,
}

impl PlayArea {
    /// Returns `None` unless both dimensions are finite and positive.
    ///
    /// The engine itself never checks the area again, so sessions should be
    /// built from an area that went through here (or `Settings::validate`).
    pub fn new(width: f32, height: f32) -> Option<Self> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        (valid(width) && valid(height)).then_some(Self { width, height })
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

impl Default for PlayArea {
    fn default() -> Self {
        Self {
            width: AREA_WIDTH,
            height: AREA_HEIGHT,
        }
    }
}

/// Which side of the field a player defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Left paddle
    One,
    /// Right paddle
    Two,
}

impl Player {
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

/// Emitted on the tick the ball leaves the field through a side boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEvent {
    pub winner: Player,
}

/// A player's paddle (axis-aligned rectangle, moves vertically only)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge, fixed for the session
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// Left paddle, vertically centered
    pub fn left(area: &PlayArea, width: f32, height: f32) -> Self {
        Self {
            x: 0.0,
            y: (area.height - height) / 2.0,
            width,
            height,
        }
    }

    /// Right paddle, vertically centered against the far wall
    pub fn right(area: &PlayArea, width: f32, height: f32) -> Self {
        Self {
            x: area.width - width,
            ..Self::left(area, width, height)
        }
    }

    /// Lowest legal top edge
    pub fn max_y(&self, area: &PlayArea) -> f32 {
        (area.height - self.height).max(0.0)
    }

    /// Apply a vertical delta, then clamp into `[0, H - height]`
    pub fn shift(&mut self, delta: f32, area: &PlayArea) {
        self.y = (self.y + delta).clamp(0.0, self.max_y(area));
    }

    /// True if `y` lies on the paddle's face (edges inclusive)
    pub fn spans(&self, y: f32) -> bool {
        y >= self.y && y <= self.y + self.height
    }
}

/// The ball (square of side `size`, position is its top-left corner)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    pub size: f32,
}

impl Ball {
    /// Ball at the center of the field moving along the serve diagonal
    pub fn serve(area: &PlayArea, size: f32, speed: f32) -> Self {
        Self {
            pos: area.center(),
            vel: Vec2::splat(speed),
            size,
        }
    }

    /// Put the ball back on the center spot with the serve velocity
    pub fn recenter(&mut self, area: &PlayArea, speed: f32) {
        self.pos = area.center();
        self.vel = Vec2::splat(speed);
    }
}

/// Points per player; only ever incremented
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player1: u32,
    pub player2: u32,
}

impl Score {
    pub fn award(&mut self, player: Player) {
        match player {
            Player::One => self.player1 += 1,
            Player::Two => self.player2 += 1,
        }
    }

    pub fn of(&self, player: Player) -> u32 {
        match player {
            Player::One => self.player1,
            Player::Two => self.player2,
        }
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Left paddle, controlled by player 1
    pub paddle1: Paddle,
    /// Right paddle, controlled by player 2
    pub paddle2: Paddle,
    pub ball: Ball,
    pub score: Score,
}

impl GameState {
    /// Canonical initial state using the default sizes and serve speed
    pub fn new(area: &PlayArea) -> Self {
        Self::with_sizes(area, PADDLE_WIDTH, PADDLE_HEIGHT, BALL_SIZE, BALL_SPEED)
    }

    /// Canonical initial state with custom paddle/ball geometry
    pub fn with_sizes(
        area: &PlayArea,
        paddle_width: f32,
        paddle_height: f32,
        ball_size: f32,
        ball_speed: f32,
    ) -> Self {
        Self {
            paddle1: Paddle::left(area, paddle_width, paddle_height),
            paddle2: Paddle::right(area, paddle_width, paddle_height),
            ball: Ball::serve(area, ball_size, ball_speed),
            score: Score::default(),
        }
    }
}
