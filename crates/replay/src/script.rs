use glam::Vec3;
use navcam_common::{Transform, TriggerEvent};
use navcam_input::InputFrame;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_DT: f32 = 1.0 / 60.0;

/// Errors from loading a replay script.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported script format: {0}")]
    UnknownFormat(PathBuf),
    #[error("frame {index}: dt must be finite and non-negative, got {dt}")]
    BadFrameTime { index: usize, dt: f32 },
}

/// Where the camera starts, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StartPose {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

impl StartPose {
    pub fn transform(&self) -> Transform {
        Transform::from_yaw_pitch(self.position, self.yaw, self.pitch)
    }
}

/// One recorded frame, optionally repeated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptFrame {
    #[serde(default = "default_dt")]
    pub dt: f32,
    #[serde(default)]
    pub input: InputFrame,
    /// Delivered after the frame's update, in order.
    #[serde(default)]
    pub triggers: Vec<TriggerEvent>,
    /// Run this frame this many times. Triggers fire on the first run only.
    #[serde(default = "default_repeat")]
    pub repeat: u32,
}

fn default_dt() -> f32 {
    DEFAULT_DT
}

fn default_repeat() -> u32 {
    1
}

impl ScriptFrame {
    pub fn new(input: InputFrame) -> Self {
        Self {
            dt: DEFAULT_DT,
            input,
            triggers: Vec::new(),
            repeat: 1,
        }
    }

    pub fn idle() -> Self {
        Self::new(InputFrame::default())
    }

    pub fn repeated(mut self, times: u32) -> Self {
        self.repeat = times;
        self
    }

    pub fn with_trigger(mut self, event: TriggerEvent) -> Self {
        self.triggers.push(event);
        self
    }
}

/// A recorded navigation session: a start pose and the frames that follow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub start: StartPose,
    #[serde(default)]
    pub frames: Vec<ScriptFrame>,
}

impl Script {
    pub fn new(start: StartPose) -> Self {
        Self {
            start,
            frames: Vec::new(),
        }
    }

    pub fn push(&mut self, frame: ScriptFrame) -> &mut Self {
        self.frames.push(frame);
        self
    }

    /// Total number of frames once repeats are expanded.
    pub fn frame_count(&self) -> u64 {
        self.frames.iter().map(|f| u64::from(f.repeat)).sum()
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, ScriptError> {
        let script: Self = serde_yaml::from_str(s)?;
        script.validate()?;
        Ok(script)
    }

    pub fn from_json_str(s: &str) -> Result<Self, ScriptError> {
        let script: Self = serde_json::from_str(s)?;
        script.validate()?;
        Ok(script)
    }

    /// Load a script, picking the format from its extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let script = match ext.as_deref() {
            Some("json") => Self::from_json_str(&std::fs::read_to_string(path)?)?,
            Some("yaml" | "yml") => Self::from_yaml_str(&std::fs::read_to_string(path)?)?,
            _ => return Err(ScriptError::UnknownFormat(path.to_path_buf())),
        };
        tracing::debug!(
            path = %path.display(),
            frames = script.frame_count(),
            "loaded replay script"
        );
        Ok(script)
    }

    fn validate(&self) -> Result<(), ScriptError> {
        for (index, frame) in self.frames.iter().enumerate() {
            if !frame.dt.is_finite() || frame.dt < 0.0 {
                return Err(ScriptError::BadFrameTime {
                    index,
                    dt: frame.dt,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use navcam_input::Key;

    #[test]
    fn sparse_yaml_fills_defaults() {
        let script = Script::from_yaml_str(
            r#"
start:
  position: [0.0, 1.5, 0.0]
  yaw: 90.0
frames:
  - input:
      keys: [W]
    repeat: 30
  - triggers:
      - tag: Wall
"#,
        )
        .unwrap();
        assert_eq!(script.start.position, Vec3::new(0.0, 1.5, 0.0));
        assert_eq!(script.start.pitch, 0.0);
        assert_eq!(script.frames.len(), 2);
        assert_eq!(script.frame_count(), 31);
        assert!(script.frames[0].input.is_key_held(Key::W));
        assert_eq!(script.frames[1].dt, DEFAULT_DT);
        assert_eq!(script.frames[1].triggers[0].tag, "Wall");
    }

    #[test]
    fn negative_dt_rejected() {
        let err = Script::from_json_str(r#"{"frames":[{"dt":0.1},{"dt":-0.1}]}"#).unwrap_err();
        assert!(matches!(err, ScriptError::BadFrameTime { index: 1, .. }));
    }

    #[test]
    fn load_json_and_reject_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let mut script = Script::default();
        script.push(ScriptFrame::idle().repeated(3));
        let path = dir.path().join("walk.json");
        std::fs::write(&path, serde_json::to_string(&script).unwrap()).unwrap();
        assert_eq!(Script::load(&path).unwrap(), script);

        let bad = dir.path().join("walk.txt");
        std::fs::write(&bad, "").unwrap();
        assert!(matches!(
            Script::load(&bad),
            Err(ScriptError::UnknownFormat(_))
        ));
    }
}
