use serde::{Deserialize, Serialize};

/// Errors from validating tuning values.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be a positive finite number, got {value}")]
    NotPositive { field: &'static str, value: f32 },
}

/// Tuning constants for the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Edge length of one maze block in world units.
    pub block_length: f32,
    /// Interpolation progress per second while moving between cells.
    pub move_rate: f32,
    /// Completion overlay alpha gained per second once the exit is reached.
    pub fade_rate: f32,
    /// Upper bound on a single frame delta, in seconds.
    pub max_frame_dt: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            block_length: 40.0,
            move_rate: 3.0,
            fade_rate: 1.5,
            max_frame_dt: 0.1,
        }
    }
}

impl GameConfig {
    /// Size of the player cube; cameras are placed relative to it.
    pub fn player_size(&self) -> f32 {
        self.block_length / 2.4
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("block_length", self.block_length),
            ("move_rate", self.move_rate),
            ("fade_rate", self.fade_rate),
            ("max_frame_dt", self.max_frame_dt),
        ];
        for (field, value) in fields {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        Ok(())
    }
}
