use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use topup_types::{CameraConstraints, FacingMode};

fn default_facing() -> FacingMode {
    FacingMode::Environment
}

fn default_fallback() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct CameraConfig {
    #[serde(default = "default_facing")]
    pub facing: FacingMode,
    /// Retry once with relaxed constraints when the preferred camera is
    /// unsatisfiable. No other failure is retried.
    #[serde(default = "default_fallback")]
    pub fallback_to_default: bool,
    pub min_width: Option<u32>,
    pub min_height: Option<u32>,
    /// File-backed frame source for deployments without a wired-in camera
    pub still_path: Option<PathBuf>,
}

impl CameraConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn constraints(&self) -> CameraConstraints {
        CameraConstraints {
            facing: self.facing,
            min_width: self.min_width,
            min_height: self.min_height,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            facing: default_facing(),
            fallback_to_default: default_fallback(),
            min_width: None,
            min_height: None,
            still_path: None,
        }
    }
}
