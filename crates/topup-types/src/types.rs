use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub enum AppEvent {
    StartScan,
    NumberInput(String),
    Dial,
    ClearKey,
    ClearNumber,
    ConfigChanged,
    KeyCaptured {
        preview: String,
    },
    StatusUpdate {
        status: String,
        scanning: bool,
    },
    ShowDial(String),
    Shutdown,
}

/// Which camera the capture boundary should prefer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacingMode {
    Environment,
    User,
    Any,
}

/// Acquisition hints handed to the platform camera. The device owner may
/// fail them with an unsatisfiable-constraints error.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CameraConstraints {
    pub facing: FacingMode,
    pub min_width: Option<u32>,
    pub min_height: Option<u32>,
}

impl CameraConstraints {
    /// Constraint-free request used for the single fallback retry.
    pub fn relaxed() -> Self {
        Self {
            facing: FacingMode::Any,
            min_width: None,
            min_height: None,
        }
    }
}

impl Default for CameraConstraints {
    fn default() -> Self {
        Self {
            facing: FacingMode::Environment,
            min_width: None,
            min_height: None,
        }
    }
}
