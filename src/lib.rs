//! Paddle Duel - two-player Pong on a fixed tick
//!
//! Core modules:
//! - `sim`: Deterministic simulation (input sampling, motion, collisions, scoring)
//! - `session`: Fixed-rate driving loop and start/pause/restart lifecycle
//! - `renderer`: Render handoff (text rasterizer for the native driver)
//! - `settings`: JSON configuration and setup-time validation

pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use session::{FixedTimestep, Session, SessionPhase};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Reference tick rate (ticks per second)
    pub const TICK_RATE_HZ: f32 = 60.0;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICK_RATE_HZ;
    /// Maximum ticks run per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Play area defaults
    pub const AREA_WIDTH: f32 = 800.0;
    pub const AREA_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_WIDTH: f32 = 10.0;
    /// Distance a paddle moves per tick while its key is held
    pub const PADDLE_SPEED: f32 = 8.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 10.0;
    /// Per-axis speed of the serve velocity (pixels per tick)
    pub const BALL_SPEED: f32 = 5.0;
}
