//! Text rasterizer for the play field

use glam::Vec2;

use super::Renderer;
use crate::sim::{GameState, Paddle, PlayArea};

const EMPTY: char = ' ';
const CENTER_LINE: char = ':';
const PADDLE: char = '#';
const BALL: char = 'o';

/// Downscales the field into a `cols` x `rows` character grid
///
/// The first line of a frame carries the scores; the grid follows.
#[derive(Debug, Clone)]
pub struct AsciiRenderer {
    cols: usize,
    rows: usize,
    frame: String,
}

impl Default for AsciiRenderer {
    fn default() -> Self {
        Self::new(80, 24)
    }
}

impl AsciiRenderer {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols: cols.max(2),
            rows: rows.max(1),
            frame: String::new(),
        }
    }

    /// Last frame produced by `present`
    pub fn frame(&self) -> &str {
        &self.frame
    }

    /// Build a full frame without storing it
    pub fn rasterize(&self, state: &GameState, area: &PlayArea) -> String {
        let cells = Vec2::new(self.cols as f32, self.rows as f32);
        let size = Vec2::new(area.width, area.height);
        let mut grid = vec![vec![EMPTY; self.cols]; self.rows];

        // Dashed center line
        let mid = self.cols / 2;
        for row in grid.iter_mut().step_by(2) {
            row[mid] = CENTER_LINE;
        }

        for paddle in [&state.paddle1, &state.paddle2] {
            self.draw_paddle(&mut grid, paddle, cells, size);
        }

        let ball = state.ball.pos * cells / size;
        grid[self.cell(ball.y, self.rows)][self.cell(ball.x, self.cols)] = BALL;

        let mut out = String::with_capacity((self.cols + 1) * (self.rows + 1));
        let half = self.cols / 2;
        out.push_str(&format!(
            "{:^half$}{:^rest$}\n",
            state.score.player1,
            state.score.player2,
            rest = self.cols - half
        ));
        for row in grid {
            out.extend(row);
            out.push('\n');
        }
        out
    }

    fn draw_paddle(&self, grid: &mut [Vec<char>], paddle: &Paddle, cells: Vec2, size: Vec2) {
        let first = self.cell(paddle.x * cells.x / size.x, self.cols);
        let last = self.cell((paddle.x + paddle.width) * cells.x / size.x - 0.5, self.cols);
        for (r, row) in grid.iter_mut().enumerate() {
            // Sample at the vertical center of each cell
            let y = (r as f32 + 0.5) * size.y / cells.y;
            if paddle.spans(y) {
                for cell in &mut row[first..=last.max(first)] {
                    *cell = PADDLE;
                }
            }
        }
    }

    /// Grid index for a coordinate in cell units, clamped onto the grid
    fn cell(&self, scaled: f32, len: usize) -> usize {
        (scaled.floor().max(0.0) as usize).min(len - 1)
    }
}

impl Renderer for AsciiRenderer {
    fn present(&mut self, state: &GameState, area: &PlayArea) {
        self.frame = self.rasterize(state, area);
    }
}
