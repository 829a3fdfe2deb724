//! Game settings
//!
//! Loaded from an optional JSON file; every field has a default so partial
//! files are fine. `validate` is the one place field dimensions are checked.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::{ControlKey, KeyBindings, PlayArea, Tuning};

/// Why a settings file was rejected
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{field} must be a finite positive number, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("paddle height {paddle} does not fit in play area height {area}")]
    PaddleTooTall { paddle: f32, area: f32 },

    #[error("ball size {ball} does not fit in play area {width}x{height}")]
    BallTooLarge { ball: f32, width: f32, height: f32 },

    #[error("tick rate {rate} Hz gives no usable tick length")]
    TickRateOutOfRange { rate: f32 },

    #[error("max_substeps must be at least 1")]
    NoSubsteps,

    #[error("no key bound to {key:?}")]
    EmptyBinding { key: ControlKey },

    #[error("key {name:?} is bound to both {first:?} and {second:?}")]
    DuplicateBinding {
        name: String,
        first: ControlKey,
        second: ControlKey,
    },
}

/// Session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Play area ===
    pub width: f32,
    pub height: f32,

    // === Timing ===
    /// Simulation ticks per second
    pub tick_rate_hz: f32,
    /// Cap on ticks run for a single frame
    pub max_substeps: u32,

    // === Geometry ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub ball_size: f32,

    // === Speeds (per tick) ===
    pub paddle_speed: f32,
    pub ball_speed: f32,

    // === Controls ===
    pub bindings: KeyBindings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: AREA_WIDTH,
            height: AREA_HEIGHT,

            tick_rate_hz: TICK_RATE_HZ,
            max_substeps: MAX_SUBSTEPS,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            ball_size: BALL_SIZE,

            paddle_speed: PADDLE_SPEED,
            ball_speed: BALL_SPEED,

            bindings: KeyBindings::default(),
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and validate a settings file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from `path`, falling back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Check every precondition the simulation relies on
    pub fn validate(&self) -> Result<(), SettingsError> {
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("tick_rate_hz", self.tick_rate_hz),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_size", self.ball_size),
            ("paddle_speed", self.paddle_speed),
            ("ball_speed", self.ball_speed),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SettingsError::NotPositive { field, value });
            }
        }

        if self.paddle_height > self.height {
            return Err(SettingsError::PaddleTooTall {
                paddle: self.paddle_height,
                area: self.height,
            });
        }
        if self.ball_size >= self.width || self.ball_size >= self.height {
            return Err(SettingsError::BallTooLarge {
                ball: self.ball_size,
                width: self.width,
                height: self.height,
            });
        }
        let dt = self.tick_dt();
        if !(dt.is_finite() && dt > 0.0) {
            return Err(SettingsError::TickRateOutOfRange {
                rate: self.tick_rate_hz,
            });
        }
        if self.max_substeps == 0 {
            return Err(SettingsError::NoSubsteps);
        }
        self.validate_bindings()
    }

    /// Every control needs its own non-empty key name
    fn validate_bindings(&self) -> Result<(), SettingsError> {
        for (i, &key) in ControlKey::ALL.iter().enumerate() {
            let name = self.bindings.name_of(key);
            if name.is_empty() {
                return Err(SettingsError::EmptyBinding { key });
            }
            if let Some(&other) = ControlKey::ALL[i + 1..]
                .iter()
                .find(|&&other| self.bindings.name_of(other) == name)
            {
                return Err(SettingsError::DuplicateBinding {
                    name: name.to_string(),
                    first: key,
                    second: other,
                });
            }
        }
        Ok(())
    }

    /// Play area, once validated
    pub fn play_area(&self) -> Result<PlayArea, SettingsError> {
        self.validate()?;
        PlayArea::new(self.width, self.height).ok_or(SettingsError::NotPositive {
            field: "width",
            value: self.width,
        })
    }

    pub fn tuning(&self) -> Tuning {
        Tuning {
            paddle_speed: self.paddle_speed,
            ball_speed: self.ball_speed,
        }
    }

    /// Seconds per tick
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.tick_rate_hz
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.play_area().unwrap(), PlayArea::default());
        assert_eq!(settings.tuning(), Tuning::default());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "width": 1024, "paddle_speed": 12 }"#).unwrap();
        assert_eq!(settings.width, 1024.0);
        assert_eq!(settings.paddle_speed, 12.0);
        assert_eq!(settings.height, AREA_HEIGHT);
        assert_eq!(settings.bindings, KeyBindings::default());
    }

    #[test]
    fn test_bindings_from_json() {
        let json = r#"{ "bindings": {
            "player1_up": "a", "player1_down": "z",
            "player2_up": "k", "player2_down": "m" } }"#;
        let settings = Settings::from_json(json).unwrap();
        assert_eq!(settings.bindings.player1_down, "z");
        assert_eq!(settings.bindings.player2_up, "k");
    }

    #[test]
    fn test_rejects_bad_json() {
        assert!(matches!(
            Settings::from_json("{ width: "),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_non_positive_area() {
        let settings = Settings {
            height: 0.0,
            ..Settings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::NotPositive { field: "height", .. })
        ));
        assert!(settings.play_area().is_err());
    }

    #[test]
    fn test_rejects_tick_rate_without_finite_dt() {
        let settings = Settings {
            tick_rate_hz: 1e-40,
            ..Settings::default()
        };
        assert!(settings.tick_rate_hz > 0.0);
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::TickRateOutOfRange { .. })
        ));
        assert!(crate::Session::new(&settings).is_err());
    }

    #[test]
    fn test_rejects_empty_binding() {
        let mut settings = Settings::default();
        settings.bindings.player2_down.clear();
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::EmptyBinding {
                key: ControlKey::Player2Down
            })
        ));
    }

    #[test]
    fn test_rejects_duplicate_binding() {
        let mut settings = Settings::default();
        settings.bindings.player2_up = "w".to_string();
        match settings.validate() {
            Err(SettingsError::DuplicateBinding {
                name,
                first,
                second,
            }) => {
                assert_eq!(name, "w");
                assert_eq!(first, ControlKey::Player1Up);
                assert_eq!(second, ControlKey::Player2Up);
            }
            other => panic!("expected duplicate binding error, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_oversized_pieces() {
        let tall = Settings {
            paddle_height: 700.0,
            ..Settings::default()
        };
        assert!(matches!(tall.validate(), Err(SettingsError::PaddleTooTall { .. })));

        let big = Settings {
            ball_size: 600.0,
            ..Settings::default()
        };
        assert!(matches!(big.validate(), Err(SettingsError::BallTooLarge { .. })));

        let stalled = Settings {
            max_substeps: 0,
            ..Settings::default()
        };
        assert!(matches!(stalled.validate(), Err(SettingsError::NoSubsteps)));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = Path::new("/nonexistent/paddle-duel/settings.json");
        assert!(matches!(Settings::load(path), Err(SettingsError::Io(_))));
        assert_eq!(Settings::load_or_default(Some(path)), Settings::default());
    }

    #[test]
    fn test_tick_dt() {
        let settings = Settings {
            tick_rate_hz: 50.0,
            ..Settings::default()
        };
        assert_eq!(settings.tick_dt(), 0.02);
    }
}
