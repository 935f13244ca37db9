//! Tunable gameplay constants.
//!
//! Defaults reproduce the classic arcade feel at 1280x720. Any field can be
//! overridden from a RON file; missing fields keep their default.

use std::path::{Path, PathBuf};

use bevy::prelude::*;
use serde::Deserialize;

use super::error::ConfigError;

/// Environment variable naming an explicit tunables file.
pub const CONFIG_ENV_VAR: &str = "SHOOTER_CONFIG";

/// Looked up relative to the working directory when the env var is unset.
pub const DEFAULT_CONFIG_PATH: &str = "assets/config/tunables.ron";

#[derive(Resource, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Tunables {
    pub screen_width: u32,
    pub screen_height: u32,
    pub target_fps: u32,

    pub player_start: (f32, f32),
    pub player_speed: f32,
    pub bullet_speed: f32,
    /// Frames between two player shots.
    pub reload_frames: u32,

    pub enemy_base_speed: i32,
    /// Exclusive upper bound of the random extra speed.
    pub enemy_speed_jitter: i32,
    pub spawn_interval_min: i32,
    /// Exclusive upper bound of the random extra interval.
    pub spawn_interval_jitter: i32,

    /// Allocation limit of each entity list.
    pub max_actors_per_list: usize,
    pub sound_channels: usize,

    pub glyph_width: u32,
    pub glyph_height: u32,

    pub assets: AssetPaths,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            screen_width: 1280,
            screen_height: 720,
            target_fps: 60,
            player_start: (100.0, 100.0),
            player_speed: 4.0,
            bullet_speed: 20.0,
            reload_frames: 8,
            enemy_base_speed: 4,
            enemy_speed_jitter: 4,
            spawn_interval_min: 10,
            spawn_interval_jitter: 60,
            max_actors_per_list: 65_536,
            sound_channels: 6,
            glyph_width: 18,
            glyph_height: 28,
            assets: AssetPaths::default(),
        }
    }
}

impl Tunables {
    pub fn screen_size(&self) -> Vec2 {
        Vec2::new(self.screen_width as f32, self.screen_height as f32)
    }

    /// Parse tunables from RON text.
    pub fn from_ron(path: &Path, text: &str) -> Result<Self, ConfigError> {
        ron::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron(path, &text)
    }

    /// Resolve the config file: `$SHOOTER_CONFIG`, then the default path if it
    /// exists, then built-in defaults. A broken file falls back to defaults.
    ///
    /// This runs before logging is up, so the outcome is returned rather than
    /// logged.
    pub fn load_or_default() -> (Self, ConfigSource) {
        let path = match std::env::var_os(CONFIG_ENV_VAR) {
            Some(p) => PathBuf::from(p),
            None => {
                let p = PathBuf::from(DEFAULT_CONFIG_PATH);
                if !p.exists() {
                    return (Self::default(), ConfigSource::Defaults);
                }
                p
            }
        };

        match Self::load_from_file(&path) {
            Ok(t) => (t, ConfigSource::File(path)),
            Err(e) => (Self::default(), ConfigSource::Fallback(e.to_string())),
        }
    }
}

/// Where the active tunables came from.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Defaults,
    File(PathBuf),
    /// The file was unusable; defaults are in effect.
    Fallback(String),
}

/// Asset file names, relative to Bevy's asset folder.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AssetPaths {
    pub player: VisualSpec,
    pub bullet: VisualSpec,
    pub enemy: VisualSpec,
    pub background: VisualSpec,
    pub font: VisualSpec,

    pub fire_sound: String,
    pub alien_die_sound: String,
    pub player_die_sound: String,
    pub music: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            player: VisualSpec::new("gfx/player.png", 40, 40, [0.2, 0.75, 0.9]),
            bullet: VisualSpec::new("gfx/player_bullet.png", 20, 8, [1.0, 0.85, 0.3]),
            enemy: VisualSpec::new("gfx/enemy.png", 48, 48, [0.9, 0.25, 0.25]),
            background: VisualSpec::new("gfx/background.jpg", 1280, 720, [0.08, 0.08, 0.12]),
            // 59 glyphs (' ' ..= 'Z') of 18x28.
            font: VisualSpec::new("gfx/font.png", 59 * 18, 28, [1.0, 1.0, 1.0]),
            fire_sound: "sound/player_fire.ogg".into(),
            alien_die_sound: "sound/alien_die.ogg".into(),
            player_die_sound: "sound/player_die.ogg".into(),
            music: "music/theme.ogg".into(),
        }
    }
}

/// One image plus the size used until the real image reports its own.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct VisualSpec {
    pub path: String,
    pub width: u32,
    pub height: u32,
    /// Flat colour drawn when the image cannot be loaded.
    pub fallback_rgb: [f32; 3],
}

impl VisualSpec {
    fn new(path: &str, width: u32, height: u32, fallback_rgb: [f32; 3]) -> Self {
        Self { path: path.into(), width, height, fallback_rgb }
    }

    pub fn size(&self) -> UVec2 {
        UVec2::new(self.width, self.height)
    }

    pub fn fallback_color(&self) -> Color {
        let [r, g, b] = self.fallback_rgb;
        Color::srgb(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_keep_their_defaults() {
        let t = Tunables::from_ron(Path::new("t.ron"), "(player_speed: 6.0, reload_frames: 4)").unwrap();

        assert_eq!(t.player_speed, 6.0);
        assert_eq!(t.reload_frames, 4);
        assert_eq!(t.screen_width, 1280);
        assert_eq!(t.assets, AssetPaths::default());
    }

    #[test]
    fn nested_asset_paths_can_be_overridden() {
        let text = r#"(assets: (music: "music/other.ogg", enemy: (path: "gfx/e.png", width: 32, height: 30, fallback_rgb: (1.0, 0.0, 0.0))))"#;
        let t = Tunables::from_ron(Path::new("t.ron"), text).unwrap();

        assert_eq!(t.assets.music, "music/other.ogg");
        assert_eq!(t.assets.enemy.size(), UVec2::new(32, 30));
        assert_eq!(t.assets.player, AssetPaths::default().player);
    }

    #[test]
    fn parse_errors_name_the_file() {
        let err = Tunables::from_ron(Path::new("bad.ron"), "(screen_width: \"wide\")").unwrap_err();

        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("bad.ron"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Tunables::load_from_file(Path::new("does/not/exist.ron")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn defaults_match_the_classic_setup() {
        let t = Tunables::default();
        assert_eq!(t.screen_size(), Vec2::new(1280.0, 720.0));
        assert_eq!(t.sound_channels, 6);
        assert_eq!((t.glyph_width, t.glyph_height), (18, 28));
    }
}
