//! Session lifecycle and the fixed-rate driving loop
//!
//! The simulation has no notion of time; `Session` turns wall-clock frame
//! deltas into whole ticks and samples input once per tick.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::settings::{Settings, SettingsError};
use crate::sim::{GameState, InputSampler, InputSnapshot, PlayArea, ScoreEvent, Tuning, step_with};

/// Longest frame delta accepted before clamping (seconds)
const MAX_FRAME_DT: f32 = 0.1;

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Waiting for the start trigger
    Waiting,
    /// Ticks advance the game
    Playing,
    /// Ticks are suspended, state is frozen
    Paused,
}

/// Accumulator converting variable frame times into fixed ticks
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    dt: f32,
    max_substeps: u32,
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(dt: f32, max_substeps: u32) -> Self {
        Self {
            dt,
            max_substeps: max_substeps.max(1),
            accumulator: 0.0,
        }
    }

    /// Add a frame's elapsed time and return how many ticks are due
    pub fn accumulate(&mut self, elapsed: f32) -> u32 {
        self.accumulator += elapsed.clamp(0.0, MAX_FRAME_DT);

        let mut ticks = 0;
        while self.accumulator >= self.dt && ticks < self.max_substeps {
            self.accumulator -= self.dt;
            ticks += 1;
        }

        // Drop the backlog rather than spiral
        if ticks == self.max_substeps && self.accumulator >= self.dt {
            log::debug!("Dropping {:.4}s of simulation backlog", self.accumulator);
            self.accumulator = 0.0;
        }
        ticks
    }

    /// Fraction of a tick left in the accumulator (for interpolation)
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.dt
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

/// One match: owns the authoritative state and advances it tick by tick
#[derive(Debug, Clone)]
pub struct Session {
    area: PlayArea,
    tuning: Tuning,
    initial: GameState,
    state: GameState,
    phase: SessionPhase,
    ticks: u64,
    timestep: FixedTimestep,
}

impl Session {
    /// Build a session from validated settings
    pub fn new(settings: &Settings) -> Result<Self, SettingsError> {
        let area = settings.play_area()?;
        let initial = GameState::with_sizes(
            &area,
            settings.paddle_width,
            settings.paddle_height,
            settings.ball_size,
            settings.ball_speed,
        );
        Ok(Self::from_parts(
            area,
            settings.tuning(),
            initial,
            FixedTimestep::new(settings.tick_dt(), settings.max_substeps),
        ))
    }

    /// Session with default geometry and speeds on the given area
    pub fn with_area(area: PlayArea) -> Self {
        Self::from_parts(
            area,
            Tuning::default(),
            GameState::new(&area),
            FixedTimestep::default(),
        )
    }

    fn from_parts(
        area: PlayArea,
        tuning: Tuning,
        initial: GameState,
        timestep: FixedTimestep,
    ) -> Self {
        Self {
            area,
            tuning,
            state: initial.clone(),
            initial,
            phase: SessionPhase::Waiting,
            ticks: 0,
            timestep,
        }
    }

    /// Start trigger, gated on the lobby's "players ready" flag
    ///
    /// Returns true if the session is playing afterwards.
    pub fn start(&mut self, players_ready: bool) -> bool {
        match self.phase {
            SessionPhase::Waiting if players_ready => {
                log::info!("Session started");
                self.phase = SessionPhase::Playing;
                self.timestep.reset();
            }
            SessionPhase::Waiting => log::debug!("Start ignored, players not ready"),
            _ => {}
        }
        self.phase == SessionPhase::Playing
    }

    pub fn pause(&mut self) {
        if self.phase == SessionPhase::Playing {
            log::info!("Session paused at tick {}", self.ticks);
            self.phase = SessionPhase::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.phase == SessionPhase::Paused {
            log::info!("Session resumed");
            self.phase = SessionPhase::Playing;
            self.timestep.reset();
        }
    }

    /// Reset the game to its canonical initial values; the phase is kept
    pub fn restart(&mut self) {
        log::info!(
            "Session restarted (final score {} - {})",
            self.state.score.player1,
            self.state.score.player2
        );
        self.state = self.initial.clone();
        self.ticks = 0;
        self.timestep.reset();
    }

    /// Run exactly one simulation step if playing
    pub fn tick(&mut self, input: &InputSnapshot) -> Option<ScoreEvent> {
        if self.phase != SessionPhase::Playing {
            return None;
        }
        let (next, event) = step_with(&self.state, input, &self.area, &self.tuning);
        self.state = next;
        self.ticks += 1;
        event
    }

    /// Feed a frame's elapsed seconds and run every tick that came due
    ///
    /// Input is sampled once per tick, so a key released mid-frame still
    /// applies to ticks sampled before the release.
    pub fn advance(&mut self, elapsed: f32, input: &InputSampler) -> Vec<ScoreEvent> {
        if self.phase != SessionPhase::Playing {
            return Vec::new();
        }
        let due = self.timestep.accumulate(elapsed);
        (0..due)
            .filter_map(|_| self.tick(&input.snapshot()))
            .collect()
    }

    /// Read-only render snapshot
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn area(&self) -> &PlayArea {
        &self.area
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Ticks simulated since start or the last restart
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
