//! Session settings and themes
//!
//! Stored as JSON; any missing field falls back to its default.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::GameError;
use crate::consts::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::sim::Board;

/// An RGB color
pub type Rgb = [u8; 3];

/// Color theme. Purely cosmetic; no game rule looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    #[default]
    Neon,
    Dark,
    Forest,
    Fire,
}

impl Theme {
    pub const ALL: [Theme; 4] = [Theme::Neon, Theme::Dark, Theme::Forest, Theme::Fire];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Neon => "Neon",
            Theme::Dark => "Dark",
            Theme::Forest => "Forest",
            Theme::Fire => "Fire",
        }
    }

    /// Colors the renderer should use for each kind of thing on screen
    pub fn palette(&self) -> Palette {
        match self {
            Theme::Neon => Palette {
                background: [10, 10, 30],
                wall: [0, 200, 255],
                snake_head: [0, 255, 100],
                snake_body: [0, 255, 0],
                food_normal: [255, 0, 0],
                food_gold: [255, 215, 0],
                particle: [0, 255, 150],
                boss: [255, 0, 255],
            },
            Theme::Dark => Palette {
                background: [15, 15, 15],
                wall: [90, 90, 90],
                snake_head: [220, 220, 220],
                snake_body: [160, 160, 160],
                food_normal: [200, 40, 40],
                food_gold: [230, 190, 60],
                particle: [110, 110, 110],
                boss: [140, 0, 0],
            },
            Theme::Forest => Palette {
                background: [16, 40, 20],
                wall: [110, 80, 40],
                snake_head: [170, 230, 90],
                snake_body: [90, 170, 60],
                food_normal: [220, 60, 50],
                food_gold: [240, 200, 70],
                particle: [150, 210, 120],
                boss: [80, 50, 20],
            },
            Theme::Fire => Palette {
                background: [35, 5, 0],
                wall: [255, 90, 0],
                snake_head: [255, 230, 80],
                snake_body: [255, 150, 0],
                food_normal: [255, 40, 40],
                food_gold: [255, 240, 150],
                particle: [255, 120, 40],
                boss: [120, 0, 0],
            },
        }
    }
}

impl FromStr for Theme {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "neon" => Ok(Theme::Neon),
            "dark" => Ok(Theme::Dark),
            "forest" => Ok(Theme::Forest),
            "fire" => Ok(Theme::Fire),
            _ => Err(GameError::UnknownTheme(s.to_string())),
        }
    }
}

/// Renderer colors for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub background: Rgb,
    pub wall: Rgb,
    pub snake_head: Rgb,
    pub snake_body: Rgb,
    pub food_normal: Rgb,
    pub food_gold: Rgb,
    pub particle: Rgb,
    pub boss: Rgb,
}

/// Per-session settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Board size in pixels (camera frames are resized to this)
    pub board_width: u32,
    pub board_height: u32,
    pub theme: Theme,
    /// RNG seed; a fresh one is drawn per session when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            theme: Theme::Neon,
            seed: None,
        }
    }
}

impl Settings {
    /// Validated board for these settings
    pub fn board(&self) -> Result<Board, GameError> {
        Board::new(self.board_width, self.board_height)
    }

    pub fn from_json(json: &str) -> Result<Self, GameError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        let settings = Self::from_json(&fs::read_to_string(path)?)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), GameError> {
        let path = path.as_ref();
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_str() {
        assert_eq!("neon".parse::<Theme>().unwrap(), Theme::Neon);
        assert_eq!("FOREST".parse::<Theme>().unwrap(), Theme::Forest);
        assert!(matches!(
            "pastel".parse::<Theme>(),
            Err(GameError::UnknownTheme(name)) if name == "pastel"
        ));
        for theme in Theme::ALL {
            assert_eq!(theme.as_str().parse::<Theme>().unwrap(), theme);
        }
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Theme::Neon.palette(), Theme::Fire.palette());
        assert_ne!(Theme::Dark.palette(), Theme::Forest.palette());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{"theme": "Fire", "seed": 7}"#).unwrap();
        assert_eq!(settings.theme, Theme::Fire);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.board_width, 800);
        assert_eq!(settings.board_height, 600);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(GameError::Json(_))
        ));
    }

    #[test]
    fn test_board_validation() {
        let settings = Settings {
            board_width: 20,
            ..Default::default()
        };
        assert!(settings.board().is_err());
        assert!(Settings::default().board().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings {
            theme: Theme::Dark,
            seed: Some(42),
            ..Default::default()
        };
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), settings);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Settings::load(dir.path().join("missing.json")),
            Err(GameError::SettingsIo(_))
        ));
    }
}
