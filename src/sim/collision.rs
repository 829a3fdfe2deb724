//! Collision tests for the rectangular field
//!
//! Pure predicates on post-translation positions; the tick decides what to
//! do with the results. There is no swept test, so a ball moving more than a
//! paddle's width per tick can pass straight through it.

use super::state::{Ball, Paddle, PlayArea};

/// Ball touches or has crossed the top or bottom wall
pub fn hits_wall(ball: &Ball, area: &PlayArea) -> bool {
    ball.pos.y <= 0.0 || ball.pos.y >= area.height - ball.size
}

/// Ball reached the left paddle's face and is level with it
pub fn hits_left_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    ball.pos.x <= paddle.width && paddle.spans(ball.pos.y)
}

/// Ball reached the right paddle's face and is level with it
pub fn hits_right_paddle(ball: &Ball, paddle: &Paddle, area: &PlayArea) -> bool {
    ball.pos.x >= area.width - paddle.width - ball.size && paddle.spans(ball.pos.y)
}

/// Reflect a velocity component
#[inline]
pub fn reflect(v: f32) -> f32 {
    -v
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use glam::Vec2;

    fn ball_at(x: f32, y: f32) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel: Vec2::splat(BALL_SPEED),
            size: BALL_SIZE,
        }
    }

    #[test]
    fn test_wall_hits() {
        let area = PlayArea::default();
        assert!(hits_wall(&ball_at(400.0, 0.0), &area));
        assert!(hits_wall(&ball_at(400.0, -3.0), &area));
        assert!(hits_wall(&ball_at(400.0, 590.0), &area));
        assert!(!hits_wall(&ball_at(400.0, 589.0), &area));
        assert!(!hits_wall(&ball_at(400.0, 1.0), &area));
    }

    #[test]
    fn test_left_paddle_hit() {
        let area = PlayArea::default();
        let paddle = Paddle::left(&area, PADDLE_WIDTH, PADDLE_HEIGHT);

        assert!(hits_left_paddle(&ball_at(10.0, 300.0), &paddle));
        assert!(hits_left_paddle(&ball_at(2.0, 250.0), &paddle));
        assert!(!hits_left_paddle(&ball_at(10.5, 300.0), &paddle));
        // Level check uses the ball's top edge only
        assert!(!hits_left_paddle(&ball_at(5.0, 245.0), &paddle));
    }

    #[test]
    fn test_right_paddle_hit() {
        let area = PlayArea::default();
        let paddle = Paddle::right(&area, PADDLE_WIDTH, PADDLE_HEIGHT);

        assert!(hits_right_paddle(&ball_at(780.0, 300.0), &paddle, &area));
        assert!(hits_right_paddle(&ball_at(795.0, 350.0), &paddle, &area));
        assert!(!hits_right_paddle(&ball_at(779.0, 300.0), &paddle, &area));
        assert!(!hits_right_paddle(&ball_at(785.0, 351.0), &paddle, &area));
    }
}
