use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Errors from loading or validating a navigation config.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported config format: {0}")]
    UnknownFormat(PathBuf),
    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// How the camera may rotate and move sideways.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NavigationMode {
    /// Mouse look on both axes, left/right keys strafe.
    #[default]
    Freeform,
    /// Yaw only. Left/right keys turn instead of strafing.
    FixedView,
}

/// Static navigation settings, read-only once the controller is running.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub mode: NavigationMode,
    /// Flip both mouse axes.
    pub inverse_mouse_direction: bool,
    /// A click without a drag advances by one animation step.
    pub click_to_move_forward: bool,
    /// Trigger events with this tag bounce the camera back. Empty disables it.
    pub collision_target_tag: String,
    /// Distance per frame while a movement key is held.
    pub key_speed: f32,
    /// Degrees per frame while a turn key is held (fixed view).
    pub rotate_key_speed: f32,
    /// Degrees per mouse axis unit while dragging.
    pub rotate_mouse_speed: f32,
    /// Distance covered by one click-advance or bounce.
    pub animation_step: f32,
    /// Freeform pitch is clamped to `[-pitch_limit, pitch_limit]` degrees.
    pub pitch_limit: f32,
    /// Scaled per-frame mouse delta above which a press counts as a drag.
    pub drag_threshold: f32,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            mode: NavigationMode::Freeform,
            inverse_mouse_direction: false,
            click_to_move_forward: true,
            collision_target_tag: String::new(),
            key_speed: 0.1,
            rotate_key_speed: 0.3,
            rotate_mouse_speed: 2.0,
            animation_step: 10.0,
            pitch_limit: 80.0,
            drag_threshold: 2.0,
        }
    }
}

impl NavigationConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file, picking the format from its extension
    /// (`.yaml`, `.yml` or `.json`).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let text = match ext.as_deref() {
            Some("yaml" | "yml" | "json") => std::fs::read_to_string(path)?,
            _ => return Err(ConfigError::UnknownFormat(path.to_path_buf())),
        };
        let config = if ext.as_deref() == Some("json") {
            Self::from_json_str(&text)?
        } else {
            Self::from_yaml_str(&text)?
        };
        tracing::debug!(path = %path.display(), mode = ?config.mode, "loaded navigation config");
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject speeds and limits that would make the controller misbehave.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = [
            ("key_speed", self.key_speed),
            ("rotate_key_speed", self.rotate_key_speed),
            ("rotate_mouse_speed", self.rotate_mouse_speed),
            ("animation_step", self.animation_step),
            ("drag_threshold", self.drag_threshold),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be a finite non-negative number, got {value}"),
                });
            }
        }
        if !self.pitch_limit.is_finite() || self.pitch_limit <= 0.0 || self.pitch_limit > 90.0 {
            return Err(ConfigError::Invalid {
                field: "pitch_limit",
                reason: format!("must be in (0, 90], got {}", self.pitch_limit),
            });
        }
        Ok(())
    }

    /// Whether a trigger tag should bounce the camera.
    pub fn is_collision_target(&self, tag: &str) -> bool {
        !self.collision_target_tag.is_empty() && self.collision_target_tag == tag
    }
}
