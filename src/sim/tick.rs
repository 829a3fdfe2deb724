//! Fixed timestep simulation tick
//!
//! `step` is a pure function of `(state, input, area)`: the same triple always
//! yields the same next state and event, so a recorded input sequence replays
//! exactly.

use serde::{Deserialize, Serialize};

use super::collision::{hits_left_paddle, hits_right_paddle, hits_wall, reflect};
use super::input::InputSnapshot;
use super::state::{GameState, Paddle, PlayArea, Player, ScoreEvent};
use crate::consts::*;

/// Per-tick speeds, fixed for a session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Paddle travel per tick while a direction key is held
    pub paddle_speed: f32,
    /// Per-axis serve speed, used again after every point
    pub ball_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            paddle_speed: PADDLE_SPEED,
            ball_speed: BALL_SPEED,
        }
    }
}

/// Advance the game by one tick with the canonical speeds
pub fn step(
    state: &GameState,
    input: &InputSnapshot,
    area: &PlayArea,
) -> (GameState, Option<ScoreEvent>) {
    step_with(state, input, area, &Tuning::default())
}

/// Advance the game by one tick
///
/// Order is fixed: paddles, ball translation, walls, paddles, scoring.
/// `area` must have positive dimensions.
pub fn step_with(
    state: &GameState,
    input: &InputSnapshot,
    area: &PlayArea,
    tuning: &Tuning,
) -> (GameState, Option<ScoreEvent>) {
    let mut next = state.clone();

    // Paddle motion
    move_paddle(&mut next.paddle1, input.direction(Player::One), area, tuning.paddle_speed);
    move_paddle(&mut next.paddle2, input.direction(Player::Two), area, tuning.paddle_speed);

    // Ball translation (single Euler step, no sub-stepping)
    let ball = &mut next.ball;
    ball.pos += ball.vel;

    // Walls: flip vy only, the ball may sit outside for one frame
    if hits_wall(ball, area) {
        ball.vel.y = reflect(ball.vel.y);
        log::trace!("Wall bounce at y={}", ball.pos.y);
    }

    // Paddles: at most one vx flip per tick even if both faces match
    let left_hit = hits_left_paddle(ball, &next.paddle1);
    let right_hit = hits_right_paddle(ball, &next.paddle2, area);
    if left_hit || right_hit {
        ball.vel.x = reflect(ball.vel.x);
        log::trace!("Paddle hit (left={left_hit}, right={right_hit})");
    }

    // Scoring
    let winner = if ball.pos.x <= 0.0 {
        Some(Player::Two)
    } else if ball.pos.x >= area.width {
        Some(Player::One)
    } else {
        None
    };

    let event = winner.map(|winner| {
        ball.recenter(area, tuning.ball_speed);
        next.score.award(winner);
        log::debug!(
            "Player {} scores ({} - {})",
            winner.number(),
            next.score.player1,
            next.score.player2
        );
        ScoreEvent { winner }
    });

    (next, event)
}

/// Up and down deltas are summed (both held cancels out), then clamped
fn move_paddle(paddle: &mut Paddle, (up, down): (bool, bool), area: &PlayArea, speed: f32) {
    let mut delta = 0.0;
    if up {
        delta -= speed;
    }
    if down {
        delta += speed;
    }
    paddle.shift(delta, area);
}
