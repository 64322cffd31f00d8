use mazewalk_kernel::{ConfigError, GameConfig};
use mazewalk_render::RenderSettings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Errors from loading a settings file.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error(transparent)]
    Invalid(#[from] ConfigError),
    #[error("viewport must be non-empty, got {width}x{height}")]
    Viewport { width: u32, height: u32 },
}

/// Everything a session can be tuned with. Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub game: GameConfig,
    pub render: RenderSettings,
    pub wall_texture: PathBuf,
    pub complete_texture: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            render: RenderSettings::default(),
            wall_texture: PathBuf::from("wall.jpg"),
            complete_texture: PathBuf::from("complete.jpg"),
        }
    }
}

impl Settings {
    pub fn from_yaml(text: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_yaml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&text)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        self.game.validate()?;
        let (width, height) = (self.render.width, self.render.height);
        if width == 0 || height == 0 {
            return Err(SettingsError::Viewport { width, height });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_yaml_keeps_defaults() {
        let settings = Settings::from_yaml("game:\n  move_rate: 6.0\n").unwrap();
        assert_eq!(settings.game.move_rate, 6.0);
        assert_eq!(settings.game.block_length, 40.0);
        assert_eq!(settings.render, RenderSettings::default());
        assert_eq!(settings.wall_texture, PathBuf::from("wall.jpg"));
    }

    #[test]
    fn camera_overrides() {
        let yaml = "render:\n  width: 1024\n  camera:\n    chase_distance: 90.0\n";
        let settings = Settings::from_yaml(yaml).unwrap();
        assert_eq!(settings.render.width, 1024);
        assert_eq!(settings.render.height, 800);
        assert_eq!(settings.render.camera.chase_distance, 90.0);
        assert_eq!(settings.render.camera.fov_degrees, 60.0);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            Settings::from_yaml("game:\n  fade_rate: -1.0\n"),
            Err(SettingsError::Invalid(_))
        ));
        assert!(matches!(
            Settings::from_yaml("render:\n  height: 0\n"),
            Err(SettingsError::Viewport { .. })
        ));
        assert!(matches!(
            Settings::from_yaml("game: [1, 2]\n"),
            Err(SettingsError::Yaml(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        writeln!(tmp, "wall_texture: assets/brick.png").unwrap();
        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.wall_texture, PathBuf::from("assets/brick.png"));
    }
}
