//! Render handoff
//!
//! The session hands a read-only `GameState` to a `Renderer` once per frame.
//! Drawing surfaces live outside the crate; `AsciiRenderer` is the text
//! rasterizer used by the native driver.

pub mod ascii;

pub use ascii::AsciiRenderer;

use crate::sim::{GameState, PlayArea};

/// Consumer of per-frame game snapshots
pub trait Renderer {
    fn present(&mut self, state: &GameState, area: &PlayArea);
}

/// Discards every frame (headless runs)
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn present(&mut self, _state: &GameState, _area: &PlayArea) {}
}
